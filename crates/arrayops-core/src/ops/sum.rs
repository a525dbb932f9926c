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

use crate::buffer::Buffer;
use crate::num::element::ArrayElement;
use crate::policy::{Checked, OverflowPolicy, Saturating, Wrapping};

/// Sums the elements of `buffer` in index order under the overflow policy `P`.
///
/// Returns `None` only when `P` rejects a partial sum, which only
/// [`Checked`] does. A view whose base reference is absent while it claims
/// elements sums to `Some(0)` without touching memory.
///
/// # Examples
///
/// ```rust
/// # use arrayops_core::ops::sum::sum_with;
/// # use arrayops_core::policy::{Checked, Saturating};
/// let data: [i8; 3] = [100, 27, 1];
/// assert_eq!(sum_with::<Checked, i8>(&data), None);
/// assert_eq!(sum_with::<Saturating, i8>(&data), Some(127));
/// ```
#[inline]
pub fn sum_with<'a, P, T>(buffer: impl Into<Buffer<'a, T>>) -> Option<T>
where
    P: OverflowPolicy,
    T: ArrayElement + 'a,
{
    let buffer = buffer.into();
    let Some(data) = buffer.as_slice() else {
        return Some(T::ZERO);
    };

    data.iter()
        .try_fold(T::ZERO, |acc, &value| P::accumulate(acc, value))
}

/// Sums the elements of `buffer` in index order.
///
/// Overflow wraps around silently. An invalid view (absent reference with a
/// positive count) yields `0`, the same as an empty one, so callers that
/// need to tell "invalid input" apart from "the sum is zero" must check the
/// view themselves.
///
/// # Examples
///
/// ```rust
/// # use arrayops_core::buffer::Buffer;
/// # use arrayops_core::ops::sum;
/// let data: [i32; 5] = [1, 2, 3, 4, 5];
/// assert_eq!(sum(&data), 15);
/// assert_eq!(sum(Buffer::<i32>::absent(8)), 0);
/// ```
#[inline]
pub fn sum<'a, T>(buffer: impl Into<Buffer<'a, T>>) -> T
where
    T: ArrayElement + 'a,
{
    sum_with::<Wrapping, T>(buffer).unwrap_or(T::ZERO)
}

/// Sums the elements of `buffer`, returning `None` if any partial sum overflows.
#[inline]
pub fn checked_sum<'a, T>(buffer: impl Into<Buffer<'a, T>>) -> Option<T>
where
    T: ArrayElement + 'a,
{
    sum_with::<Checked, T>(buffer)
}

/// Sums the elements of `buffer`, clamping every partial sum to the type bounds.
#[inline]
pub fn saturating_sum<'a, T>(buffer: impl Into<Buffer<'a, T>>) -> T
where
    T: ArrayElement + 'a,
{
    sum_with::<Saturating, T>(buffer).unwrap_or(T::ZERO)
}
