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

//! # Array Element Trait
//!
//! `ArrayElement` collects the integer capabilities the array operations
//! need into a single alias: ordering and copy semantics from `PrimInt`,
//! a sign from `Signed`, the `Zero` and `Sentinel` constants, and the three
//! by-value addition behaviors.
//!
//! It is implemented for `i8`, `i16`, `i32`, `i64`, `i128` and `isize`.

use crate::num::{
    constants::{Sentinel, Zero},
    ops::{checked_arithmetic, saturating_arithmetic, wrapping_arithmetic},
};
use num_traits::{PrimInt, Signed};

/// A trait alias for signed integer types that can be stored in a buffer.
pub trait ArrayElement:
    PrimInt
    + Signed
    + std::fmt::Debug
    + Zero
    + Sentinel
    + wrapping_arithmetic::WrappingAddVal
    + checked_arithmetic::CheckedAddVal
    + saturating_arithmetic::SaturatingAddVal
    + Send
    + Sync
{
}

impl<T> ArrayElement for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
            + Zero
        + Sentinel
        + wrapping_arithmetic::WrappingAddVal
        + checked_arithmetic::CheckedAddVal
        + saturating_arithmetic::SaturatingAddVal
        + Send
        + Sync
{
}
