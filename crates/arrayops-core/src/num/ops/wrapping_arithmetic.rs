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

use core::ops::Add;

/// Wrapping addition by value (no references).
///
/// Overflow wraps around using two's-complement arithmetic, which is what a
/// release build of `a + b` does on the primitive types, but spelled out so
/// that debug builds do not panic.
///
/// # Examples
///
/// ```rust
/// # use arrayops_core::num::ops::wrapping_arithmetic::WrappingAddVal;
///
/// let a: i8 = 127;
/// assert_eq!(a.wrapping_add_val(1), -128);
/// let b: i32 = 40;
/// assert_eq!(b.wrapping_add_val(2), 42);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                <$t>::$src_method(self, v)
            }
        }
    };
}

wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i8, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i16, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i32, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i64, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, isize, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i128, wrapping_add);
