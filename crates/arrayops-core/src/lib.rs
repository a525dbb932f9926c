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

//! # ArrayOps Core
//!
//! Elementary operations over caller-owned runs of signed integers:
//! summation, in-place reversal, copying and maximum search. Every operation
//! works on a borrowed, non-owning view, runs a single bounded pass, and
//! never allocates, blocks, panics or logs.
//!
//! ## Modules
//!
//! - `buffer`: `Buffer` and `BufferMut` views. Besides borrowed slices a view
//!   can be *absent*: no base reference, only a claimed element count. This
//!   is how a null pointer from foreign code is represented.
//! - `ops`: `sum`, `reverse`, `copy` and `max`, plus the overflow-aware
//!   `checked_sum`, `saturating_sum` and the generic `sum_with`.
//! - `status`: `Status` codes for the mutating operations, the
//!   `Maximum` value/flag pair, and the `InvalidBufferPrecondition` error.
//! - `policy`: Zero-sized overflow policies (`Wrapping`, `Checked`,
//!   `Saturating`) selecting how a sum treats overflow.
//! - `num`: The `ArrayElement` trait alias and the by-value arithmetic and
//!   constant traits it is built from.
//!
//! ## Failure Conventions
//!
//! Two conventions coexist and are kept distinct:
//!
//! - Fail quiet: `sum` returns `0` and `max` returns the type's minimum as a
//!   sentinel (with its found flag cleared) when the input is invalid.
//! - Explicit status: `reverse` and `copy` return `Status::InvalidBuffer`
//!   and leave memory untouched.

pub mod buffer;
pub mod num;
pub mod ops;
pub mod policy;
pub mod status;
