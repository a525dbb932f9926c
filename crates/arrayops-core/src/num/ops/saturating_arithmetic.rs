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

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

/// Saturating addition by value (no references).
///
/// Clamps the result to the numeric bounds of the type instead of
/// overflowing. Note that a saturated running sum is not associative: once a
/// bound is hit, later elements of the opposite sign pull the total back from
/// the bound rather than from the true value.
///
/// # Examples
///
/// ```rust
/// # use arrayops_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// let x: i8 = 120;
/// let y: i8 = 10;
/// assert_eq!(x.saturating_add_val(y), 127); // Clamps at i8::MAX
///
/// let m: i8 = -120;
/// let n: i8 = -20;
/// assert_eq!(m.saturating_add_val(n), -128); // Clamps at i8::MIN
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i8, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i16, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i32, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i64, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, isize, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i128, saturating_add);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturating_add_val_clamps_upper_bound() {
        assert_eq!(i128::MAX.saturating_add_val(1), i128::MAX);
        assert_eq!((i128::MAX - 1).saturating_add_val(5), i128::MAX);
    }

    #[test]
    fn test_saturating_add_val_clamps_lower_bound() {
        assert_eq!(i128::MIN.saturating_add_val(-1), i128::MIN);
        assert_eq!((i128::MIN + 1).saturating_add_val(-5), i128::MIN);
    }

    #[test]
    fn test_saturating_add_val_in_range_is_exact() {
        assert_eq!(40i16.saturating_add_val(2), 42);
        assert_eq!((-40isize).saturating_add_val(-2), -42);
    }
}
