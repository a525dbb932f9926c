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
use crate::status::Maximum;

/// Finds the largest element of `buffer` in a single pass.
///
/// The running candidate starts at the first element and is replaced only
/// by a strictly greater one. Unlike the other operations an empty view is a
/// failure here: for an empty view, or one whose base reference is absent,
/// the result carries the sentinel (`T::MIN`) with its found flag cleared.
///
/// # Examples
///
/// ```rust
/// # use arrayops_core::ops::max;
/// let data: [i32; 8] = [3, 1, 4, 1, 5, 9, 2, 6];
/// let m = max(&data);
/// assert!(m.is_found());
/// assert_eq!(m.value(), 9);
///
/// let empty: [i32; 0] = [];
/// let m = max(&empty);
/// assert!(!m.is_found());
/// assert_eq!(m.value(), i32::MIN);
/// ```
#[inline]
pub fn max<'a, T>(buffer: impl Into<Buffer<'a, T>>) -> Maximum<T>
where
    T: ArrayElement + 'a,
{
    let buffer = buffer.into();
    let Some((&first, rest)) = buffer.as_slice().and_then(|data| data.split_first()) else {
        return Maximum::not_found();
    };

    let mut candidate = first;
    for &value in rest {
        if value > candidate {
            candidate = value;
        }
    }

    Maximum::found(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_basic() {
        let data: [i32; 8] = [3, 1, 4, 1, 5, 9, 2, 6];
        let m = max(&data);
        assert!(m.is_found());
        assert_eq!(m.value(), 9);
    }

    #[test]
    fn test_max_empty_fails_with_sentinel() {
        let data: Vec<i64> = vec![];
        let m = max(&data);
        assert!(!m.is_found());
        assert_eq!(m.value(), i64::MIN);
    }

    #[test]
    fn test_max_absent_fails_with_sentinel() {
        let m = max(Buffer::<i32>::absent(4));
        assert!(!m.is_found());
        assert_eq!(m.value(), i32::MIN);

        let m = max(Buffer::<i32>::absent(0));
        assert!(!m.is_found());
    }

    #[test]
    fn test_max_all_negative() {
        let data: [i16; 4] = [-7, -3, -12, -3];
        assert_eq!(max(&data).into_option(), Some(-3));
    }

    #[test]
    fn test_max_single_element() {
        let data: [i8; 1] = [-1];
        assert_eq!(max(&data).into_option(), Some(-1));
    }

    #[test]
    fn test_max_equal_to_sentinel_is_still_found() {
        let data: [i32; 2] = [i32::MIN, i32::MIN];
        let m = max(&data);
        assert!(m.is_found());
        assert_eq!(m.value(), i32::MIN);
    }

    #[test]
    fn test_max_at_either_end() {
        let first: [i64; 3] = [10, 2, 3];
        let last: [i64; 3] = [1, 2, 30];
        assert_eq!(max(&first).value(), 10);
        assert_eq!(max(&last).value(), 30);
    }
}
