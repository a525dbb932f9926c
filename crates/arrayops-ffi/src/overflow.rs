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

use crate::{ARRAYOPS_INVALID_BUFFER, ARRAYOPS_OK, ARRAYOPS_OVERFLOW};
use arrayops_core::buffer::Buffer;
use arrayops_core::ops;
use libc::{c_int, size_t};

/// Sums `len` integers starting at `arr`, detecting overflow.
///
/// On success writes the sum to `*out` and returns `ARRAYOPS_OK`. Returns
/// `ARRAYOPS_OVERFLOW` if any partial sum leaves the range of `int`, and
/// `ARRAYOPS_INVALID_BUFFER` if `arr` is null while `len` is positive or if
/// `out` is null. On any failure `*out` is left untouched.
///
/// # Safety
///
/// If `arr` is non-null it must point to `len` readable, properly aligned
/// `int` values. `out` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn arrayops_checked_sum(
    arr: *const c_int,
    len: size_t,
    out: *mut c_int,
) -> c_int {
    if out.is_null() {
        tracing::trace!(len, "`arrayops_checked_sum` called with `out` as null pointer");
        return ARRAYOPS_INVALID_BUFFER;
    }

    let buffer = Buffer::from_raw_parts(arr, len);
    if !buffer.is_valid() {
        tracing::trace!(len, "`arrayops_checked_sum` called with null pointer");
        return ARRAYOPS_INVALID_BUFFER;
    }

    match ops::checked_sum(buffer) {
        Some(total) => {
            *out = total;
            ARRAYOPS_OK
        }
        None => {
            tracing::trace!(len, "`arrayops_checked_sum` overflowed");
            ARRAYOPS_OVERFLOW
        }
    }
}

/// Sums `len` integers starting at `arr`, clamping each partial sum to the
/// range of `int`.
///
/// Returns `0` if `arr` is null and `len` is positive.
///
/// # Safety
///
/// If `arr` is non-null it must point to `len` readable, properly aligned
/// `int` values.
#[no_mangle]
pub unsafe extern "C" fn arrayops_saturating_sum(arr: *const c_int, len: size_t) -> c_int {
    let buffer = Buffer::from_raw_parts(arr, len);
    if !buffer.is_valid() {
        tracing::trace!(len, "`arrayops_saturating_sum` called with null pointer");
    }
    ops::saturating_sum(buffer)
}
