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

//! # Buffer Views
//!
//! Non-owning views over caller-owned runs of integers. A view is either a
//! borrowed slice or an *absent* reference that only carries the element
//! count a caller claimed for it. The absent form exists so that a null base
//! pointer arriving from foreign code can flow into the safe operations and
//! be rejected there with the documented fail-quiet result instead of
//! faulting.
//!
//! A view with a zero element count is always valid, whether or not a
//! reference is present. A view with a positive count is valid only when its
//! reference is present.

use std::fmt;

/// A read-only, non-owning view over a contiguous run of elements.
pub struct Buffer<'a, T> {
    data: Option<&'a [T]>,
    len: usize,
}

impl<'a, T> Buffer<'a, T> {
    /// Creates a view borrowing `data`.
    #[inline]
    pub const fn new(data: &'a [T]) -> Self {
        Self {
            data: Some(data),
            len: data.len(),
        }
    }

    /// Creates a view without a base reference that claims `len` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use arrayops_core::buffer::Buffer;
    /// let invalid = Buffer::<i32>::absent(4);
    /// assert!(!invalid.is_valid());
    ///
    /// let empty = Buffer::<i32>::absent(0);
    /// assert!(empty.is_valid());
    /// ```
    #[inline]
    pub const fn absent(len: usize) -> Self {
        Self { data: None, len }
    }

    /// Creates a view from a raw pointer and an element count.
    ///
    /// A null `ptr` yields an absent view claiming `len` elements; no memory
    /// is touched in that case.
    ///
    /// # Safety
    ///
    /// If `ptr` is non-null it must be properly aligned and point to `len`
    /// initialized elements that stay valid and unmutated for `'a`.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        if ptr.is_null() {
            Self::absent(len)
        } else {
            Self::new(std::slice::from_raw_parts(ptr, len))
        }
    }

    /// Returns the claimed element count.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view claims no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the view has no base reference.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.data.is_none()
    }

    /// Returns `true` unless the base reference is absent while the count is positive.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.data.is_some() || self.len == 0
    }

    /// Returns the viewed elements, or `None` if the view is invalid.
    ///
    /// An absent view claiming zero elements yields an empty slice.
    #[inline]
    pub fn as_slice(&self) -> Option<&'a [T]> {
        match self.data {
            Some(data) => Some(data),
            None if self.len == 0 => Some(Default::default()),
            None => None,
        }
    }
}

impl<T> Clone for Buffer<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Buffer<'_, T> {}

impl<T> Default for Buffer<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<T> fmt::Debug for Buffer<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data {
            Some(data) => f.debug_tuple("Buffer").field(&data).finish(),
            None => write!(f, "Buffer(<absent>, len: {})", self.len),
        }
    }
}

impl<'a, T> From<&'a [T]> for Buffer<'a, T> {
    #[inline]
    fn from(data: &'a [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Buffer<'a, T> {
    #[inline]
    fn from(data: &'a [T; N]) -> Self {
        Self::new(data.as_slice())
    }
}

impl<'a, T> From<&'a Vec<T>> for Buffer<'a, T> {
    #[inline]
    fn from(data: &'a Vec<T>) -> Self {
        Self::new(data.as_slice())
    }
}

/// A mutable, non-owning view over a contiguous run of elements.
pub struct BufferMut<'a, T> {
    data: Option<&'a mut [T]>,
    len: usize,
}

impl<'a, T> BufferMut<'a, T> {
    /// Creates a view mutably borrowing `data`.
    #[inline]
    pub fn new(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data: Some(data),
            len,
        }
    }

    /// Creates a view without a base reference that claims `len` elements.
    #[inline]
    pub const fn absent(len: usize) -> Self {
        Self { data: None, len }
    }

    /// Creates a mutable view from a raw pointer and an element count.
    ///
    /// A null `ptr` yields an absent view claiming `len` elements.
    ///
    /// # Safety
    ///
    /// If `ptr` is non-null it must be properly aligned and point to `len`
    /// initialized elements that no other reference reads or writes for `'a`.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        if ptr.is_null() {
            Self::absent(len)
        } else {
            Self::new(std::slice::from_raw_parts_mut(ptr, len))
        }
    }

    /// Returns the claimed element count.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view claims no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the view has no base reference.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        self.data.is_none()
    }

    /// Returns `true` unless the base reference is absent while the count is positive.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.data.is_some() || self.len == 0
    }

    /// Returns the viewed elements, or `None` if the view is invalid.
    #[inline]
    pub fn as_slice(&self) -> Option<&[T]> {
        match &self.data {
            Some(data) => Some(&**data),
            None if self.len == 0 => Some(Default::default()),
            None => None,
        }
    }

    /// Returns the viewed elements mutably, or `None` if the view is invalid.
    #[inline]
    pub fn as_mut_slice(&mut self) -> Option<&mut [T]> {
        match &mut self.data {
            Some(data) => Some(&mut **data),
            None if self.len == 0 => Some(Default::default()),
            None => None,
        }
    }

    /// Reborrows the view for a shorter lifetime.
    #[inline]
    pub fn reborrow(&mut self) -> BufferMut<'_, T> {
        BufferMut {
            data: self.data.as_deref_mut(),
            len: self.len,
        }
    }

    /// Converts into a read-only view over the same elements.
    #[inline]
    pub fn into_buffer(self) -> Buffer<'a, T> {
        match self.data {
            Some(data) => Buffer::new(data),
            None => Buffer::absent(self.len),
        }
    }
}

impl<T> fmt::Debug for BufferMut<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => f.debug_tuple("BufferMut").field(data).finish(),
            None => write!(f, "BufferMut(<absent>, len: {})", self.len),
        }
    }
}

impl<'a, T> From<&'a mut [T]> for BufferMut<'a, T> {
    #[inline]
    fn from(data: &'a mut [T]) -> Self {
        Self::new(data)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for BufferMut<'a, T> {
    #[inline]
    fn from(data: &'a mut [T; N]) -> Self {
        Self::new(data.as_mut_slice())
    }
}

impl<'a, T> From<&'a mut Vec<T>> for BufferMut<'a, T> {
    #[inline]
    fn from(data: &'a mut Vec<T>) -> Self {
        Self::new(data.as_mut_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_new_borrows_slice() {
        let data = [1i32, 2, 3];
        let buf = Buffer::new(&data);
        assert_eq!(buf.len(), 3);
        assert!(!buf.is_absent());
        assert!(buf.is_valid());
        assert_eq!(buf.as_slice(), Some(&data[..]));
    }

    #[test]
    fn test_buffer_absent_with_zero_len_is_valid_and_empty() {
        let buf = Buffer::<i32>::absent(0);
        assert!(buf.is_absent());
        assert!(buf.is_valid());
        assert!(buf.is_empty());
        assert_eq!(buf.as_slice(), Some(&[][..]));
    }

    #[test]
    fn test_buffer_absent_with_positive_len_is_invalid() {
        let buf = Buffer::<i64>::absent(3);
        assert!(!buf.is_valid());
        assert_eq!(buf.as_slice(), None);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_buffer_from_raw_parts_null_is_absent() {
        let buf = unsafe { Buffer::<i32>::from_raw_parts(std::ptr::null(), 5) };
        assert!(buf.is_absent());
        assert!(!buf.is_valid());
    }

    #[test]
    fn test_buffer_from_raw_parts_non_null_views_memory() {
        let data = vec![4i32, 5, 6];
        let buf = unsafe { Buffer::from_raw_parts(data.as_ptr(), data.len()) };
        assert_eq!(buf.as_slice(), Some(&[4, 5, 6][..]));
    }

    #[test]
    fn test_buffer_is_copy() {
        let data = [1i8, 2];
        let a = Buffer::new(&data);
        let b = a;
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_buffer_debug_formats_absent() {
        let buf = Buffer::<i32>::absent(2);
        assert_eq!(format!("{:?}", buf), "Buffer(<absent>, len: 2)");
        let data = [1i32];
        assert_eq!(format!("{:?}", Buffer::new(&data)), "Buffer([1])");
    }

    #[test]
    fn test_buffer_mut_as_mut_slice_allows_writes() {
        let mut data = [1i32, 2, 3];
        let mut buf = BufferMut::new(&mut data);
        if let Some(slice) = buf.as_mut_slice() {
            slice[0] = 10;
        }
        assert_eq!(data, [10, 2, 3]);
    }

    #[test]
    fn test_buffer_mut_absent_is_invalid_for_positive_len() {
        let mut buf = BufferMut::<i32>::absent(1);
        assert!(!buf.is_valid());
        assert!(buf.as_mut_slice().is_none());
        assert!(buf.as_slice().is_none());
    }

    #[test]
    fn test_buffer_mut_from_raw_parts_null_is_absent() {
        let buf = unsafe { BufferMut::<i32>::from_raw_parts(std::ptr::null_mut(), 0) };
        assert!(buf.is_absent());
        assert!(buf.is_valid());
    }

    #[test]
    fn test_buffer_mut_reborrow_and_into_buffer() {
        let mut data = vec![7i64, 8];
        let mut buf = BufferMut::from(&mut data);
        {
            let mut inner = buf.reborrow();
            if let Some(slice) = inner.as_mut_slice() {
                slice[1] = 9;
            }
        }
        let ro = buf.into_buffer();
        assert_eq!(ro.as_slice(), Some(&[7, 9][..]));
    }
}
