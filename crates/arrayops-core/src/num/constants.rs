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

/// A trait for integer types that have a constant representing 0.
///
/// `ZERO` is the starting value of every summation and the value a sum
/// reports when its buffer violates its precondition.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for integer types that reserve a value meaning "no result".
///
/// The sentinel is the minimum representable value of the type. It is
/// returned in place of a maximum when none exists, so it must always be
/// read together with the accompanying found flag: an array may legitimately
/// contain the minimum value.
///
/// # Examples
///
/// ```rust
/// # use arrayops_core::num::constants::Sentinel;
/// assert_eq!(<i32 as Sentinel>::SENTINEL, i32::MIN);
/// assert_eq!(<i8 as Sentinel>::SENTINEL, -128);
/// ```
pub trait Sentinel {
    /// The reserved "no result" marker for the implementing type.
    const SENTINEL: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_zero_for {
    ($t:ty) => {
        impl_const_for!(Zero, ZERO, 0, $t);
    };
}

macro_rules! impl_sentinel_for {
    ($t:ty) => {
        impl_const_for!(Sentinel, SENTINEL, <$t>::MIN, $t);
    };
}

impl_zero_for!(i8);
impl_zero_for!(i16);
impl_zero_for!(i32);
impl_zero_for!(i64);
impl_zero_for!(i128);
impl_zero_for!(isize);

impl_sentinel_for!(i8);
impl_sentinel_for!(i16);
impl_sentinel_for!(i32);
impl_sentinel_for!(i64);
impl_sentinel_for!(i128);
impl_sentinel_for!(isize);
