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

//! # Array Operations
//!
//! The four elementary operations over buffer views. Each one is a single
//! bounded pass with no allocation and no shared state, so every function
//! here is reentrant.
//!
//! | Operation | Failure signal | Empty buffer |
//! |---|---|---|
//! | [`sum`] | returns `0` | `0` |
//! | [`reverse`] | [`Status::InvalidBuffer`](crate::status::Status) | succeeds |
//! | [`copy`] | [`Status::InvalidBuffer`](crate::status::Status) | succeeds |
//! | [`max`] | sentinel, found flag cleared | fails |
//!
//! The only failure any of them detects is a view whose base reference is
//! absent while it claims a positive number of elements.

pub mod copy;
pub mod max;
pub mod reverse;
pub mod sum;

pub use copy::copy;
pub use max::max;
pub use reverse::reverse;
pub use sum::{checked_sum, saturating_sum, sum, sum_with};
