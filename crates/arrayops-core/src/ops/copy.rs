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

use crate::buffer::{Buffer, BufferMut};
use crate::status::Status;

/// Copies the first `count` elements of `source` into `destination`.
///
/// Elements are copied one at a time in ascending index order. Nothing is
/// copied and [`Status::InvalidBuffer`] is returned if either view has no
/// base reference while `count` is positive, or if either view holds fewer
/// than `count` elements. A `count` of zero always succeeds, even for two
/// absent views.
///
/// Borrowing rules keep the two views from overlapping. Callers going
/// through raw pointers must uphold that themselves: an ascending copy
/// between overlapping regions is not a move.
///
/// # Examples
///
/// ```rust
/// # use arrayops_core::ops::copy;
/// # use arrayops_core::status::Status;
/// let src: [i32; 3] = [7, 8, 9];
/// let mut dst: [i32; 3] = [0; 3];
/// assert_eq!(copy(&mut dst, &src, 3), Status::Success);
/// assert_eq!(dst, [7, 8, 9]);
/// ```
#[inline]
pub fn copy<'a, 'b, T>(
    destination: impl Into<BufferMut<'a, T>>,
    source: impl Into<Buffer<'b, T>>,
    count: usize,
) -> Status
where
    T: Copy + 'a + 'b,
{
    if count == 0 {
        return Status::Success;
    }

    let mut destination = destination.into();
    let source = source.into();
    let (Some(dst), Some(src)) = (destination.as_mut_slice(), source.as_slice()) else {
        return Status::InvalidBuffer;
    };
    if count > dst.len() || count > src.len() {
        return Status::InvalidBuffer;
    }

    for (d, s) in dst[..count].iter_mut().zip(&src[..count]) {
        *d = *s;
    }

    Status::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_full() {
        let src: [i32; 3] = [7, 8, 9];
        let mut dst: [i32; 3] = [0; 3];
        assert_eq!(copy(&mut dst, &src, 3), Status::Success);
        assert_eq!(dst, [7, 8, 9]);
        assert_eq!(src, [7, 8, 9]);
    }

    #[test]
    fn test_copy_prefix_leaves_tail_untouched() {
        let src = vec![1i64, 2, 3, 4];
        let mut dst = vec![-1i64; 4];
        assert_eq!(copy(&mut dst, &src, 2), Status::Success);
        assert_eq!(dst, vec![1, 2, -1, -1]);
    }

    #[test]
    fn test_copy_zero_count_succeeds_for_absent_views() {
        assert_eq!(
            copy(BufferMut::<i32>::absent(0), Buffer::<i32>::absent(0), 0),
            Status::Success
        );
        assert_eq!(
            copy(BufferMut::<i32>::absent(5), Buffer::<i32>::absent(5), 0),
            Status::Success
        );
    }

    #[test]
    fn test_copy_absent_source_fails_without_writing() {
        let mut dst: [i32; 3] = [1, 2, 3];
        assert_eq!(
            copy(&mut dst, Buffer::<i32>::absent(3), 3),
            Status::InvalidBuffer
        );
        assert_eq!(dst, [1, 2, 3]);
    }

    #[test]
    fn test_copy_absent_destination_fails() {
        let src: [i32; 2] = [1, 2];
        assert_eq!(
            copy(BufferMut::<i32>::absent(2), &src, 2),
            Status::InvalidBuffer
        );
    }

    #[test]
    fn test_copy_count_exceeding_a_view_fails_without_writing() {
        let src: [i16; 2] = [5, 6];
        let mut dst: [i16; 4] = [0; 4];
        assert_eq!(copy(&mut dst, &src, 3), Status::InvalidBuffer);
        assert_eq!(dst, [0; 4]);

        let src: [i16; 4] = [5, 6, 7, 8];
        let mut dst: [i16; 2] = [0; 2];
        assert_eq!(copy(&mut dst, &src, 3), Status::InvalidBuffer);
        assert_eq!(dst, [0; 2]);
    }
}
