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

//! # ArrayOps FFI
//!
//! C-compatible entry points for the array operations in `arrayops-core`.
//! Every function takes a base pointer and an element count, exactly as a C
//! caller holds an `int` array, and reports failure through its return value
//! only.
//!
//! ## Conventions
//!
//! 1.  **Fail Quiet**: Unlike handle-based APIs, nothing here aborts on a
//!     `NULL` pointer. A `NULL` base pointer with a positive length is the
//!     one detected precondition violation; it yields `0` from the sums,
//!     `ARRAYOPS_INVALID_BUFFER` from `reverse`/`copy`, and `INT_MIN` with
//!     `*ok = 0` from `max`. A `NULL` pointer with length `0` is a valid
//!     empty array.
//! 2.  **Caller-Owned Memory**: No function allocates, frees or retains a
//!     pointer beyond the call.
//! 3.  **Diagnostics**: Rejected calls emit a `tracing` event at `trace`
//!     level. Without an installed subscriber this has no effect.
//!
//! ## Status Codes
//!
//! | Code | Meaning |
//! |---|---|
//! | `ARRAYOPS_OK` (`0`) | Success |
//! | `ARRAYOPS_INVALID_BUFFER` (`-1`) | `NULL` pointer with positive length |
//! | `ARRAYOPS_OVERFLOW` (`-2`) | Checked sum overflowed |

use libc::c_int;

pub mod array;
pub mod overflow;

/// The operation completed.
pub const ARRAYOPS_OK: c_int = 0;

/// A base pointer was `NULL` while its length was positive.
pub const ARRAYOPS_INVALID_BUFFER: c_int = -1;

/// A checked summation left the range of `int`.
pub const ARRAYOPS_OVERFLOW: c_int = -2;
