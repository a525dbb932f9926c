// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Outcomes
//!
//! The array operations report failure in two different ways, and both are
//! kept as they are so callers written against one convention keep working:
//!
//! - `reverse` and `copy` return an explicit [`Status`].
//! - `sum` and `max` fail quietly: `sum` yields zero, `max` yields the
//!   sentinel together with a cleared found flag in [`Maximum`].
//!
//! There is a single failure condition, [`InvalidBufferPrecondition`]. The
//! `into_result` and `into_option` conversions give `?`-friendly views of
//! the same outcomes without changing what the operations return.

/// Status code returned by the mutating operations.
///
/// The discriminants are the integer codes used across the C boundary.
#[must_use = "a `Status` reports whether the buffer was modified and should be checked"]
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The operation completed.
    Success = 0,
    /// A buffer reference was absent while its element count was positive.
    InvalidBuffer = -1,
}

impl Status {
    /// Returns the integer code of the status.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns `true` if the status is [`Status::Success`].
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if the status is not [`Status::Success`].
    #[inline]
    pub const fn is_failure(self) -> bool {
        !self.is_success()
    }

    /// Converts the status into a `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arrayops_core::status::{InvalidBufferPrecondition, Status};
    /// assert_eq!(Status::Success.into_result(), Ok(()));
    /// assert_eq!(Status::InvalidBuffer.into_result(), Err(InvalidBufferPrecondition));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<(), InvalidBufferPrecondition> {
        match self {
            Status::Success => Ok(()),
            Status::InvalidBuffer => Err(InvalidBufferPrecondition),
        }
    }
}

impl From<Status> for i32 {
    #[inline]
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Success => write!(f, "Success"),
            Status::InvalidBuffer => write!(f, "InvalidBuffer"),
        }
    }
}

/// The one failure an array operation detects: a buffer whose base reference
/// is absent while its element count is positive.
///
/// For `max` an empty buffer is reported the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InvalidBufferPrecondition;

impl std::fmt::Display for InvalidBufferPrecondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid buffer: base reference is absent while the element count is positive"
        )
    }
}

impl std::error::Error for InvalidBufferPrecondition {}

/// The outcome of a maximum search: a value and whether it is meaningful.
///
/// When `found` is `false`, `value` holds the element type's sentinel
/// (its minimum value) and carries no information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maximum<T> {
    value: T,
    found: bool,
}

impl<T> Maximum<T>
where
    T: crate::num::constants::Sentinel,
{
    /// A successful search yielding `value`.
    #[inline]
    pub const fn found(value: T) -> Self {
        Self { value, found: true }
    }

    /// A failed search; the value is the sentinel.
    #[inline]
    pub const fn not_found() -> Self {
        Self {
            value: T::SENTINEL,
            found: false,
        }
    }
}

impl<T> Maximum<T>
where
    T: Copy,
{
    /// Returns the value, which is the sentinel if nothing was found.
    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }

    /// Returns `true` if a maximum was found.
    #[inline]
    pub const fn is_found(&self) -> bool {
        self.found
    }

    /// Returns the maximum, or `None` if nothing was found.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.found.then_some(self.value)
    }

    /// Returns the maximum, or the precondition error if nothing was found.
    #[inline]
    pub fn into_result(self) -> Result<T, InvalidBufferPrecondition> {
        self.into_option().ok_or(InvalidBufferPrecondition)
    }
}

impl<T> std::fmt::Display for Maximum<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.found {
            write!(f, "Maximum({})", self.value)
        } else {
            write!(f, "Maximum(<none>)")
        }
    }
}
