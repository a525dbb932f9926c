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

use crate::buffer::BufferMut;
use crate::status::Status;

/// Reverses the elements of `buffer` in place.
///
/// Returns [`Status::InvalidBuffer`] without modifying anything if the view
/// has no base reference but claims elements. Empty and single-element
/// views are left as they are and succeed.
///
/// # Examples
///
/// ```rust
/// # use arrayops_core::ops::reverse;
/// # use arrayops_core::status::Status;
/// let mut data: [i32; 5] = [1, 2, 3, 4, 5];
/// assert_eq!(reverse(&mut data), Status::Success);
/// assert_eq!(data, [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn reverse<'a, T>(buffer: impl Into<BufferMut<'a, T>>) -> Status
where
    T: 'a,
{
    let mut buffer = buffer.into();
    let Some(data) = buffer.as_mut_slice() else {
        return Status::InvalidBuffer;
    };

    exchange_inward(data);
    Status::Success
}

/// Walks two positions toward each other, swapping the elements under them.
///
/// `right` starts one past the end and is stepped back before each exchange,
/// so the loop stops as soon as the positions meet or cross. Returns the
/// number of exchanges, which is always `data.len() / 2`.
#[inline]
fn exchange_inward<T>(data: &mut [T]) -> usize {
    let mut left = 0;
    let mut right = data.len();
    let mut exchanges = 0;

    while left < right {
        right -= 1;
        if left >= right {
            break;
        }
        data.swap(left, right);
        left += 1;
        exchanges += 1;
    }

    exchanges
}
