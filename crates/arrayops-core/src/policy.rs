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

//! # Overflow Policies
//!
//! A summation folds its buffer in index order, one addition per element.
//! What happens when one of those additions leaves the range of the element
//! type is chosen at compile time with a zero-sized policy type:
//!
//! - [`Wrapping`]: two's-complement wraparound. This is the behavior of
//!   [`crate::ops::sum::sum`] and never fails.
//! - [`Checked`]: the fold stops and reports `None` at the first overflow.
//! - [`Saturating`]: every partial sum is clamped to the type bounds.

use crate::num::element::ArrayElement;

/// Decides how a single accumulation step treats overflow.
pub trait OverflowPolicy {
    /// Human-readable policy name.
    const NAME: &'static str;

    /// Adds `value` to `acc`, returning `None` if the policy rejects the result.
    fn accumulate<T>(acc: T, value: T) -> Option<T>
    where
        T: ArrayElement;
}

/// Silent two's-complement wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wrapping;

impl OverflowPolicy for Wrapping {
    const NAME: &'static str = "Wrapping";

    #[inline(always)]
    fn accumulate<T>(acc: T, value: T) -> Option<T>
    where
        T: ArrayElement,
    {
        Some(acc.wrapping_add_val(value))
    }
}

/// Rejects any partial sum that overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Checked;

impl OverflowPolicy for Checked {
    const NAME: &'static str = "Checked";

    #[inline(always)]
    fn accumulate<T>(acc: T, value: T) -> Option<T>
    where
        T: ArrayElement,
    {
        acc.checked_add_val(value)
    }
}

/// Clamps every partial sum to the bounds of the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Saturating;

impl OverflowPolicy for Saturating {
    const NAME: &'static str = "Saturating";

    #[inline(always)]
    fn accumulate<T>(acc: T, value: T) -> Option<T>
    where
        T: ArrayElement,
    {
        Some(acc.saturating_add_val(value))
    }
}
