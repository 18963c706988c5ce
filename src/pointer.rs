use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::slice;

use crate::bounds::Bounds;
use crate::error::{Result, SliceError};
use crate::view::{View, ViewMut};

/// A read-only view of the elements `[begin, end)` of a raw array, given by a
/// pointer to its first element.
///
/// This has the same interface as [`ContainerView`](crate::ContainerView),
/// with one crucial difference: a bare pointer carries no length, so the
/// constructor can only check that `begin < end` and that the pointer is not
/// null. Whether `end` lies inside the array is the caller's promise, which is
/// why construction is `unsafe`.
///
/// A view made from a `*const T` stays read-only, down to its sub-slices:
///
/// ```compile_fail
/// use bufslice::PtrView;
///
/// let store = [0, 1, 2, 3, 4];
/// let mut view = unsafe { PtrView::new(store.as_ptr(), 0, 5) }.unwrap();
/// let _sub = view.sub_slice_mut(1, 3);
/// ```
///
/// ```compile_fail
/// use bufslice::{ViewMut, make_ptr_view};
///
/// let store = [0, 1, 2, 3, 4];
/// let mut view = unsafe { make_ptr_view(store.as_ptr(), 0, 5) }.unwrap();
/// *view.at_mut(0).unwrap() = 7;
/// ```
pub struct PtrView<'a, T> {
    ptr: NonNull<T>,
    bounds: Bounds,
    marker: PhantomData<&'a [T]>,
}

/// A mutable view of the elements `[begin, end)` of a raw array.
///
/// See [`PtrView`] for what is and is not checked.
pub struct PtrViewMut<'a, T> {
    ptr: NonNull<T>,
    bounds: Bounds,
    marker: PhantomData<&'a mut [T]>,
}

// SAFETY: a PtrView is a shared borrow of `[T]` and inherits its thread safety.
unsafe impl<T: Sync> Send for PtrView<'_, T> {}
unsafe impl<T: Sync> Sync for PtrView<'_, T> {}
// SAFETY: a PtrViewMut is an exclusive borrow of `[T]`.
unsafe impl<T: Send> Send for PtrViewMut<'_, T> {}
unsafe impl<T: Sync> Sync for PtrViewMut<'_, T> {}

fn pointer_bounds<T>(ptr: *const T, begin: usize, end: usize) -> Result<(NonNull<T>, Bounds)> {
    let bounds = Bounds::new(begin, end)?;
    let ptr = NonNull::new(ptr.cast_mut()).ok_or(SliceError::NullPointer)?;
    Ok((ptr, bounds))
}

impl<'a, T> PtrView<'a, T> {
    /// Creates a view of the elements `begin..end` of the array starting at
    /// `ptr`.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::InvalidRange)`: when `begin >= end`
    /// - `Err(SliceError::NullPointer)`: when `ptr` is null
    ///
    /// # Safety
    ///
    /// `end` is not checked against the array. The caller must guarantee that
    /// `ptr` points into a single allocation holding at least `end`
    /// initialized elements, and that these elements are not mutated for the
    /// whole lifetime `'a`.
    pub unsafe fn new(ptr: *const T, begin: usize, end: usize) -> Result<Self> {
        let (ptr, bounds) = pointer_bounds(ptr, begin, end)?;
        Ok(Self {
            ptr,
            bounds,
            marker: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The bounds of the view relative to the array's first element.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Pointer to the first viewed element.
    pub fn as_ptr(&self) -> *const T {
        // SAFETY: begin < end, which lies within the allocation per `new`.
        unsafe { self.ptr.as_ptr().add(self.bounds.begin()) }
    }

    /// Pointer one past the last viewed element.
    pub fn end_ptr(&self) -> *const T {
        // SAFETY: one past the end of the viewed elements is at most one past
        // the end of the allocation.
        unsafe { self.ptr.as_ptr().add(self.bounds.end()) }
    }

    /// The viewed elements as a plain slice.
    pub fn as_slice(&self) -> &'a [T] {
        // SAFETY: `new` guarantees len() initialized elements from as_ptr(),
        // immutable for 'a.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    /// Returns the element at `index`, counted from the start of the view.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::IndexOutOfRange)`: when `index >= self.len()`
    pub fn at(&self, index: usize) -> Result<&'a T> {
        self.bounds.check_index(index)?;
        // SAFETY: begin + index < end, see `as_slice`.
        Ok(unsafe { &*self.ptr.as_ptr().add(self.bounds.begin() + index) })
    }

    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Creates a view of `self[sub_begin..sub_end]` over the same array.
    ///
    /// The sub-range lies within this view, so unlike construction this is
    /// fully checked and safe.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::InvalidRange)`: when the sub-range is empty,
    ///   reversed or reaches outside of this view
    pub fn sub_slice(&self, sub_begin: usize, sub_end: usize) -> Result<PtrView<'a, T>> {
        let bounds = self.bounds.sub_bounds(sub_begin, sub_end)?;
        Ok(PtrView {
            ptr: self.ptr,
            bounds,
            marker: PhantomData,
        })
    }
}

impl<'a, T> PtrViewMut<'a, T> {
    /// Creates a mutable view of the elements `begin..end` of the array
    /// starting at `ptr`.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::InvalidRange)`: when `begin >= end`
    /// - `Err(SliceError::NullPointer)`: when `ptr` is null
    ///
    /// # Safety
    ///
    /// `end` is not checked against the array. The caller must guarantee that
    /// `ptr` points into a single allocation holding at least `end`
    /// initialized elements, and that nothing else reads or writes these
    /// elements for the whole lifetime `'a`.
    pub unsafe fn new(ptr: *mut T, begin: usize, end: usize) -> Result<Self> {
        let (ptr, bounds) = pointer_bounds(ptr, begin, end)?;
        Ok(Self {
            ptr,
            bounds,
            marker: PhantomData,
        })
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn as_ptr(&self) -> *const T {
        self.as_view().as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        // SAFETY: see `PtrView::as_ptr`.
        unsafe { self.ptr.as_ptr().add(self.bounds.begin()) }
    }

    pub fn end_ptr(&self) -> *const T {
        self.as_view().end_ptr()
    }

    pub fn as_slice(&self) -> &[T] {
        self.as_view().as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        // SAFETY: `new` guarantees len() initialized elements from
        // as_mut_ptr(), exclusively borrowed for 'a.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_view().at(index)
    }

    /// Returns a mutable reference to the element at `index`, counted from
    /// the start of the view.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::IndexOutOfRange)`: when `index >= self.len()`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.bounds.check_index(index)?;
        // SAFETY: begin + index < end, see `as_mut_slice`.
        Ok(unsafe { &mut *self.ptr.as_ptr().add(self.bounds.begin() + index) })
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Reborrows this view as a read-only one.
    pub fn as_view(&self) -> PtrView<'_, T> {
        PtrView {
            ptr: self.ptr,
            bounds: self.bounds,
            marker: PhantomData,
        }
    }

    /// Gives up write access, keeping the borrow of the array.
    pub fn into_view(self) -> PtrView<'a, T> {
        PtrView {
            ptr: self.ptr,
            bounds: self.bounds,
            marker: PhantomData,
        }
    }

    /// Read-only sub-slice, see [`PtrView::sub_slice`].
    pub fn sub_slice(&self, sub_begin: usize, sub_end: usize) -> Result<PtrView<'_, T>> {
        self.as_view().sub_slice(sub_begin, sub_end)
    }

    /// Mutable sub-slice borrowing from this view.
    pub fn sub_slice_mut(
        &mut self,
        sub_begin: usize,
        sub_end: usize,
    ) -> Result<PtrViewMut<'_, T>> {
        let bounds = self.bounds.sub_bounds(sub_begin, sub_end)?;
        Ok(PtrViewMut {
            ptr: self.ptr,
            bounds,
            marker: PhantomData,
        })
    }

    /// Mutable sub-slice that takes over this view's borrow of the array.
    pub fn into_sub_slice(
        self,
        sub_begin: usize,
        sub_end: usize,
    ) -> Result<PtrViewMut<'a, T>> {
        let bounds = self.bounds.sub_bounds(sub_begin, sub_end)?;
        Ok(PtrViewMut {
            ptr: self.ptr,
            bounds,
            marker: PhantomData,
        })
    }
}

impl<T> Clone for PtrView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PtrView<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for PtrView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PtrView({}) ", self.bounds)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for PtrViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PtrViewMut({}) ", self.bounds)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> View for PtrView<'_, T> {
    type Item = T;
    type Iter<'v>
        = slice::Iter<'v, T>
    where
        Self: 'v;

    fn len(&self) -> usize {
        self.bounds.len()
    }

    fn at(&self, index: usize) -> Result<&T> {
        PtrView::at(self, index)
    }

    fn iter(&self) -> slice::Iter<'_, T> {
        PtrView::iter(self)
    }
}

impl<T> View for PtrViewMut<'_, T> {
    type Item = T;
    type Iter<'v>
        = slice::Iter<'v, T>
    where
        Self: 'v;

    fn len(&self) -> usize {
        self.bounds.len()
    }

    fn at(&self, index: usize) -> Result<&T> {
        PtrViewMut::at(self, index)
    }

    fn iter(&self) -> slice::Iter<'_, T> {
        PtrViewMut::iter(self)
    }
}

impl<T> ViewMut for PtrViewMut<'_, T> {
    type IterMut<'v>
        = slice::IterMut<'v, T>
    where
        Self: 'v;

    fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        PtrViewMut::at_mut(self, index)
    }

    fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        PtrViewMut::iter_mut(self)
    }
}

impl<'a, T> IntoIterator for PtrView<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'v, T> IntoIterator for &'v PtrView<'_, T> {
    type Item = &'v T;
    type IntoIter = slice::Iter<'v, T>;

    fn into_iter(self) -> slice::Iter<'v, T> {
        self.iter()
    }
}

impl<'v, T> IntoIterator for &'v PtrViewMut<'_, T> {
    type Item = &'v T;
    type IntoIter = slice::Iter<'v, T>;

    fn into_iter(self) -> slice::Iter<'v, T> {
        self.iter()
    }
}

impl<'v, T> IntoIterator for &'v mut PtrViewMut<'_, T> {
    type Item = &'v mut T;
    type IntoIter = slice::IterMut<'v, T>;

    fn into_iter(self) -> slice::IterMut<'v, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_new_ptr_view() {
        let store = [0, 1, 2, 3, 4];
        let view = unsafe { PtrView::new(store.as_ptr(), 1, 3) }.unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view.at(0), Ok(&1));
        assert_eq!(view.at(1), Ok(&2));
        assert_eq!(view.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_null_pointer_rejected() {
        for (begin, end) in [(0, 1), (0, 5), (3, 4)] {
            let err = unsafe { PtrView::new(ptr::null::<u8>(), begin, end) }.unwrap_err();
            assert_eq!(err, SliceError::NullPointer);
            let err = unsafe { PtrViewMut::new(ptr::null_mut::<u8>(), begin, end) }.unwrap_err();
            assert_eq!(err, SliceError::NullPointer);
        }
    }

    #[test]
    fn test_empty_or_reversed_range_rejected() {
        let store = [0u8; 4];
        for (begin, end) in [(0, 0), (2, 2), (3, 1)] {
            assert!(matches!(
                unsafe { PtrView::new(store.as_ptr(), begin, end) },
                Err(SliceError::InvalidRange { .. })
            ));
        }
        // the range is checked before the pointer
        assert!(matches!(
            unsafe { PtrView::new(ptr::null::<u8>(), 1, 1) },
            Err(SliceError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_end_is_not_checked_against_array() {
        let store = [0u8; 4];
        // Construction cannot see the array's length. Nothing is accessed.
        let view = unsafe { PtrView::new(store.as_ptr(), 0, 100) };
        assert!(view.is_ok());
    }

    #[test]
    fn test_at_out_of_range() {
        let store = [0, 1, 2, 3, 4];
        let view = unsafe { PtrView::new(store.as_ptr(), 1, 3) }.unwrap();
        assert_eq!(
            view.at(2),
            Err(SliceError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_at_mut_writes_through() {
        let mut store = [0, 1, 2, 3, 4];
        {
            let mut view = unsafe { PtrViewMut::new(store.as_mut_ptr(), 1, 3) }.unwrap();
            *view.at_mut(0).unwrap() *= 2;
            *view.at_mut(1).unwrap() *= 3;
            assert!(view.at_mut(2).is_err());
        }
        assert_eq!(store, [0, 2, 6, 3, 4]);
    }

    #[test]
    fn test_iter_and_pointers() {
        let store = [0, 1, 2, 3, 4];
        let view = unsafe { PtrView::new(store.as_ptr(), 3, 5) }.unwrap();
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [3, 4]);
        assert_eq!(view.as_ptr(), &store[3] as *const i32);
        assert_eq!(unsafe { view.end_ptr().offset_from(view.as_ptr()) }, 2);

        let mut seen = Vec::new();
        for x in view {
            seen.push(*x);
        }
        assert_eq!(seen, [3, 4]);
    }

    #[test]
    fn test_iter_mut() {
        let mut store = vec![1u32; 6];
        {
            let mut view = unsafe { PtrViewMut::new(store.as_mut_ptr(), 2, 6) }.unwrap();
            for (i, x) in view.iter_mut().enumerate() {
                *x += i as u32;
            }
        }
        assert_eq!(store, [1, 1, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sub_slice() {
        let store = [0, 1, 2, 3, 4];
        let view = unsafe { PtrView::new(store.as_ptr(), 1, 3) }.unwrap();
        let sub = view.sub_slice(0, 1).unwrap();
        assert_eq!(sub.len(), 1);
        assert_eq!(sub.at(0), Ok(&1));
        assert!(view.sub_slice(1, 2).is_ok());
        assert!(view.sub_slice(0, 0).is_err());
        assert!(view.sub_slice(2, 2).is_err());
        assert!(view.sub_slice(0, 3).is_err());
    }

    #[test]
    fn test_sub_slice_matches_parent_addressing() {
        let store: Vec<u16> = (0..12).collect();
        let view = unsafe { PtrView::new(store.as_ptr(), 2, 11) }.unwrap();
        for a in 0..view.len() {
            for b in a + 1..=view.len() {
                let sub = view.sub_slice(a, b).unwrap();
                for k in 0..sub.len() {
                    assert_eq!(sub.at(k), view.at(a + k));
                }
            }
        }
    }

    #[test]
    fn test_sub_slice_mut() {
        let mut store = [0, 1, 2, 3, 4];
        {
            let mut view = unsafe { PtrViewMut::new(store.as_mut_ptr(), 0, 5) }.unwrap();
            *view.sub_slice_mut(3, 5).unwrap().at_mut(1).unwrap() = 40;
            assert_eq!(view.sub_slice(4, 5).unwrap().at(0), Ok(&40));
            let mut head = view.into_sub_slice(0, 1).unwrap();
            head.as_mut_slice()[0] = 10;
        }
        assert_eq!(store, [10, 1, 2, 3, 40]);
    }

    #[test]
    fn test_failed_sub_slice_leaves_view_intact() {
        let mut store = [0, 1, 2, 3, 4];
        let mut view = unsafe { PtrViewMut::new(store.as_mut_ptr(), 0, 5) }.unwrap();
        for (begin, end) in [(0, 0), (2, 6), (5, 5), (3, 1)] {
            assert!(matches!(
                view.sub_slice_mut(begin, end),
                Err(SliceError::InvalidRange { .. })
            ));
        }
        assert_eq!(view.bounds(), Bounds::new(0, 5).unwrap());
        *view.at_mut(4).unwrap() = 40;
        assert_eq!(view.as_slice(), &[0, 1, 2, 3, 40]);

        assert!(matches!(
            view.into_sub_slice(2, 6),
            Err(SliceError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_into_view() {
        let mut store = [7, 8, 9];
        let view = unsafe { PtrViewMut::new(store.as_mut_ptr(), 1, 3) }
            .unwrap()
            .into_view();
        assert_eq!(view.as_slice(), &[8, 9]);
    }

    #[test]
    fn test_debug() {
        let store = [0, 1, 2, 3, 4];
        let view = unsafe { PtrView::new(store.as_ptr(), 3, 5) }.unwrap();
        assert_eq!(format!("{:?}", view), "PtrView(3..5) [3, 4]");
    }
}
