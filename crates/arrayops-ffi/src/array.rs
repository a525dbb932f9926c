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

use arrayops_core::buffer::{Buffer, BufferMut};
use arrayops_core::ops;
use libc::{c_int, size_t};

/// Sums `len` integers starting at `arr`.
///
/// Overflow wraps around. Returns `0` if `arr` is null and `len` is positive,
/// without reading any memory.
///
/// # Safety
///
/// If `arr` is non-null it must point to `len` readable, properly aligned
/// `int` values.
#[no_mangle]
pub unsafe extern "C" fn arrayops_sum(arr: *const c_int, len: size_t) -> c_int {
    let buffer = Buffer::from_raw_parts(arr, len);
    if !buffer.is_valid() {
        tracing::trace!(len, "`arrayops_sum` called with null pointer");
    }
    ops::sum(buffer)
}

/// Reverses `len` integers starting at `arr` in place.
///
/// Returns `ARRAYOPS_OK`, or `ARRAYOPS_INVALID_BUFFER` without touching
/// memory if `arr` is null and `len` is positive.
///
/// # Safety
///
/// If `arr` is non-null it must point to `len` readable and writable,
/// properly aligned `int` values that nothing else accesses during the call.
#[no_mangle]
pub unsafe extern "C" fn arrayops_reverse(arr: *mut c_int, len: size_t) -> c_int {
    let status = ops::reverse(BufferMut::from_raw_parts(arr, len));
    if status.is_failure() {
        tracing::trace!(len, "`arrayops_reverse` called with null pointer");
    }
    status.code()
}

/// Copies `len` integers from `src` to `dst`, one at a time in ascending order.
///
/// Returns `ARRAYOPS_OK`, or `ARRAYOPS_INVALID_BUFFER` without copying
/// anything if either pointer is null and `len` is positive. A `len` of `0`
/// succeeds for any pointers.
///
/// Overlapping regions are not moved: when `dst` lies ahead of `src` inside
/// the same array, later reads see elements this call already overwrote.
///
/// # Safety
///
/// If non-null, `src` must point to `len` readable `int` values and `dst` to
/// `len` writable `int` values, both properly aligned.
#[no_mangle]
pub unsafe extern "C" fn arrayops_copy(
    dst: *mut c_int,
    src: *const c_int,
    len: size_t,
) -> c_int {
    // An empty copy succeeds for any pointers, including dangling ones.
    if len == 0 {
        return crate::ARRAYOPS_OK;
    }

    if dst.is_null() || src.is_null() {
        tracing::trace!(
            len,
            dst_null = dst.is_null(),
            src_null = src.is_null(),
            "`arrayops_copy` called with null pointer"
        );
        return crate::ARRAYOPS_INVALID_BUFFER;
    }

    // Raw element accesses keep overlapping regions well defined.
    for i in 0..len {
        *dst.add(i) = *src.add(i);
    }
    crate::ARRAYOPS_OK
}

/// Returns the largest of `len` integers starting at `arr`.
///
/// If `ok` is non-null it is set to `0` on entry and to `1` once a maximum is
/// found. If `arr` is null or `len` is `0`, returns `INT_MIN` and leaves
/// `*ok` at `0`.
///
/// # Safety
///
/// If `arr` is non-null it must point to `len` readable, properly aligned
/// `int` values. If `ok` is non-null it must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn arrayops_max(arr: *const c_int, len: size_t, ok: *mut c_int) -> c_int {
    if !ok.is_null() {
        *ok = 0;
    }

    let result = ops::max(Buffer::from_raw_parts(arr, len));
    if !result.is_found() {
        tracing::trace!(len, "`arrayops_max` called with null pointer or empty array");
        return result.value();
    }

    if !ok.is_null() {
        *ok = 1;
    }
    result.value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ARRAYOPS_INVALID_BUFFER, ARRAYOPS_OK};
    use std::ptr;

    #[test]
    fn test_sum() {
        let data: [c_int; 5] = [1, 2, 3, 4, 5];
        assert_eq!(unsafe { arrayops_sum(data.as_ptr(), data.len()) }, 15);
    }

    #[test]
    fn test_sum_null_with_positive_len_returns_zero() {
        assert_eq!(unsafe { arrayops_sum(ptr::null(), 10) }, 0);
        assert_eq!(unsafe { arrayops_sum(ptr::null(), 0) }, 0);
    }

    #[test]
    fn test_reverse() {
        let mut data: [c_int; 5] = [1, 2, 3, 4, 5];
        let status = unsafe { arrayops_reverse(data.as_mut_ptr(), data.len()) };
        assert_eq!(status, ARRAYOPS_OK);
        assert_eq!(data, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_null() {
        assert_eq!(
            unsafe { arrayops_reverse(ptr::null_mut(), 3) },
            ARRAYOPS_INVALID_BUFFER
        );
        assert_eq!(unsafe { arrayops_reverse(ptr::null_mut(), 0) }, ARRAYOPS_OK);
    }

    #[test]
    fn test_copy() {
        let src: [c_int; 3] = [7, 8, 9];
        let mut dst: [c_int; 3] = [0; 3];
        let status = unsafe { arrayops_copy(dst.as_mut_ptr(), src.as_ptr(), 3) };
        assert_eq!(status, ARRAYOPS_OK);
        assert_eq!(dst, [7, 8, 9]);
    }

    #[test]
    fn test_copy_null_pointers() {
        let src: [c_int; 2] = [1, 2];
        let mut dst: [c_int; 2] = [0; 2];
        assert_eq!(
            unsafe { arrayops_copy(ptr::null_mut(), src.as_ptr(), 2) },
            ARRAYOPS_INVALID_BUFFER
        );
        assert_eq!(
            unsafe { arrayops_copy(dst.as_mut_ptr(), ptr::null(), 2) },
            ARRAYOPS_INVALID_BUFFER
        );
        assert_eq!(dst, [0, 0]);
        assert_eq!(
            unsafe { arrayops_copy(ptr::null_mut(), ptr::null(), 0) },
            ARRAYOPS_OK
        );
    }

    #[test]
    fn test_copy_overlapping_forward_shift_is_ascending() {
        let mut data: [c_int; 5] = [1, 2, 3, 4, 5];
        let base = data.as_mut_ptr();
        let status = unsafe { arrayops_copy(base.add(1), base as *const c_int, 4) };
        assert_eq!(status, ARRAYOPS_OK);
        assert_eq!(data, [1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_copy_overlapping_backward_shift() {
        let mut data: [c_int; 5] = [1, 2, 3, 4, 5];
        let base = data.as_mut_ptr();
        let status = unsafe { arrayops_copy(base, base.add(1) as *const c_int, 4) };
        assert_eq!(status, ARRAYOPS_OK);
        assert_eq!(data, [2, 3, 4, 5, 5]);
    }

    #[test]
    fn test_max_sets_ok() {
        let data: [c_int; 8] = [3, 1, 4, 1, 5, 9, 2, 6];
        let mut ok: c_int = -1;
        let value = unsafe { arrayops_max(data.as_ptr(), data.len(), &mut ok) };
        assert_eq!(value, 9);
        assert_eq!(ok, 1);
    }

    #[test]
    fn test_max_empty_returns_int_min() {
        let data: [c_int; 0] = [];
        let mut ok: c_int = -1;
        let value = unsafe { arrayops_max(data.as_ptr(), 0, &mut ok) };
        assert_eq!(value, c_int::MIN);
        assert_eq!(ok, 0);
    }

    #[test]
    fn test_max_null_returns_int_min() {
        let mut ok: c_int = 1;
        let value = unsafe { arrayops_max(ptr::null(), 4, &mut ok) };
        assert_eq!(value, c_int::MIN);
        assert_eq!(ok, 0);
    }

    #[test]
    fn test_max_accepts_null_ok() {
        let data: [c_int; 3] = [-4, -2, -9];
        assert_eq!(unsafe { arrayops_max(data.as_ptr(), 3, ptr::null_mut()) }, -2);
        assert_eq!(
            unsafe { arrayops_max(ptr::null(), 0, ptr::null_mut()) },
            c_int::MIN
        );
    }
}
