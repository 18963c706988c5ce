//! Free functions that build the right kind of view for a store.
//!
//! A shared reference yields a read-only [`ContainerView`], a mutable
//! reference a [`ContainerViewMut`]. Raw pointers go through the `unsafe`
//! [`make_ptr_view`] family and yield [`PtrView`] or [`PtrViewMut`] depending
//! on the pointer's mutability.

use crate::container::{ContainerView, ContainerViewMut};
use crate::error::Result;
use crate::pointer::{PtrView, PtrViewMut};
use crate::storage::{Storage, StorageMut};

/// A reference to a store that knows which view type it turns into.
pub trait IntoView {
    type View;

    /// Length of the referenced store.
    fn store_len(&self) -> usize;

    fn into_view(self, begin: usize, end: usize) -> Result<Self::View>;
}

impl<'a, S: Storage + ?Sized> IntoView for &'a S {
    type View = ContainerView<'a, S>;

    fn store_len(&self) -> usize {
        Storage::len(*self)
    }

    fn into_view(self, begin: usize, end: usize) -> Result<ContainerView<'a, S>> {
        ContainerView::new(self, begin, end)
    }
}

impl<'a, S: StorageMut + ?Sized> IntoView for &'a mut S {
    type View = ContainerViewMut<'a, S>;

    fn store_len(&self) -> usize {
        Storage::len(&**self)
    }

    fn into_view(self, begin: usize, end: usize) -> Result<ContainerViewMut<'a, S>> {
        ContainerViewMut::new(self, begin, end)
    }
}

/// A raw pointer that knows which view type it turns into.
pub trait IntoPtrView<'a> {
    type View;

    /// # Safety
    ///
    /// See [`PtrView::new`] and [`PtrViewMut::new`].
    unsafe fn into_ptr_view(self, begin: usize, end: usize) -> Result<Self::View>;
}

impl<'a, T: 'a> IntoPtrView<'a> for *const T {
    type View = PtrView<'a, T>;

    unsafe fn into_ptr_view(self, begin: usize, end: usize) -> Result<PtrView<'a, T>> {
        unsafe { PtrView::new(self, begin, end) }
    }
}

impl<'a, T: 'a> IntoPtrView<'a> for *mut T {
    type View = PtrViewMut<'a, T>;

    unsafe fn into_ptr_view(self, begin: usize, end: usize) -> Result<PtrViewMut<'a, T>> {
        unsafe { PtrViewMut::new(self, begin, end) }
    }
}

/// Returns a view of `store[begin..end]`.
///
/// # Example
///
/// ```
/// use bufslice::make_view;
///
/// let mut store = vec![0, 1, 2, 3, 4];
/// let mut view = make_view(&mut store, 1, 3).unwrap();
/// *view.at_mut(0).unwrap() *= 2;
/// *view.at_mut(1).unwrap() *= 3;
/// assert_eq!(store, [0, 2, 6, 3, 4]);
/// ```
pub fn make_view<V: IntoView>(store: V, begin: usize, end: usize) -> Result<V::View> {
    store.into_view(begin, end)
}

/// Returns a view spanning the whole store. An empty store has no view and
/// yields `InvalidRange`.
pub fn make_view_all<V: IntoView>(store: V) -> Result<V::View> {
    let len = store.store_len();
    store.into_view(0, len)
}

/// Returns a view from `begin` until the end of the store.
pub fn make_view_from<V: IntoView>(store: V, begin: usize) -> Result<V::View> {
    let len = store.store_len();
    store.into_view(begin, len)
}

/// Returns a view from the start of the store until `end`.
pub fn make_view_until<V: IntoView>(store: V, end: usize) -> Result<V::View> {
    store.into_view(0, end)
}

/// Returns a view of the elements `begin..end` of the array at `ptr`.
///
/// There is no counterpart of [`make_view_all`] or [`make_view_from`] for
/// pointers, since the array's length is unknown.
///
/// # Safety
///
/// See [`PtrView::new`] and [`PtrViewMut::new`].
pub unsafe fn make_ptr_view<'a, P: IntoPtrView<'a>>(
    ptr: P,
    begin: usize,
    end: usize,
) -> Result<P::View> {
    unsafe { ptr.into_ptr_view(begin, end) }
}

/// Returns a view of the first `end` elements of the array at `ptr`.
///
/// # Safety
///
/// See [`PtrView::new`] and [`PtrViewMut::new`].
pub unsafe fn make_ptr_view_until<'a, P: IntoPtrView<'a>>(ptr: P, end: usize) -> Result<P::View> {
    unsafe { ptr.into_ptr_view(0, end) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SliceError;
    use crate::view::{View, ViewMut};
    use std::ptr;

    fn sum<V: View<Item = i32>>(view: &V) -> i32 {
        view.iter().sum()
    }

    fn double<V: ViewMut<Item = i32>>(view: &mut V) {
        for x in view.iter_mut() {
            *x *= 2;
        }
    }

    #[test]
    fn test_make_view() {
        let mut store = vec![0, 1, 2, 3, 4];
        {
            let mut view = make_view(&mut store, 1, 3).unwrap();
            assert_eq!(view.len(), 2);
            assert_eq!(view.at(0), Ok(&1));
            assert_eq!(view.at(1), Ok(&2));
            *view.at_mut(0).unwrap() *= 2;
            *view.at_mut(1).unwrap() *= 3;
        }
        assert_eq!(store, [0, 2, 6, 3, 4]);
    }

    #[test]
    fn test_make_view_iterates() {
        let store = vec![0, 1, 2, 3, 4];
        let view = make_view(&store, 3, 5).unwrap();
        assert_eq!(view.iter().copied().collect::<Vec<_>>(), [3, 4]);
    }

    #[test]
    fn test_make_view_all() {
        let store = [5, 6, 7];
        let view = make_view_all(&store).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.bounds().end(), 3);

        let empty: Vec<i32> = Vec::new();
        assert!(matches!(
            make_view_all(&empty),
            Err(SliceError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_make_view_from_and_until() {
        let store = String::from("header:payload");
        let payload = make_view_from(&store, 7).unwrap();
        assert_eq!(payload.iter().copied().collect::<Vec<u8>>(), b"payload");
        let header = make_view_until(&store, 6).unwrap();
        assert_eq!(header.iter().copied().collect::<Vec<u8>>(), b"header");

        assert!(make_view_from(&store, store.len()).is_err());
        assert!(make_view_until(&store, 0).is_err());
        assert!(make_view_until(&store, store.len() + 1).is_err());
    }

    #[test]
    fn test_make_ptr_view() {
        let mut store = [0, 1, 2, 3, 4];
        {
            let view = unsafe { make_ptr_view(store.as_ptr(), 3, 5) }.unwrap();
            assert_eq!(view.iter().copied().collect::<Vec<_>>(), [3, 4]);
        }
        {
            let mut view = unsafe { make_ptr_view(store.as_mut_ptr(), 1, 3) }.unwrap();
            *view.at_mut(0).unwrap() *= 2;
            *view.at_mut(1).unwrap() *= 3;
        }
        assert_eq!(store, [0, 2, 6, 3, 4]);
    }

    #[test]
    fn test_make_ptr_view_until() {
        let store = [9u8, 8, 7];
        let view = unsafe { make_ptr_view_until(store.as_ptr(), 2) }.unwrap();
        assert_eq!(view.as_slice(), &[9, 8]);
        assert!(matches!(
            unsafe { make_ptr_view_until(ptr::null::<u8>(), 2) },
            Err(SliceError::NullPointer)
        ));
    }

    #[test]
    fn test_views_are_interchangeable() {
        let mut store = vec![1, 2, 3, 4];
        assert_eq!(sum(&make_view(&store, 1, 4).unwrap()), 9);
        assert_eq!(
            sum(&unsafe { make_ptr_view(store.as_ptr(), 1, 4) }.unwrap()),
            9
        );

        double(&mut make_view(&mut store, 0, 2).unwrap());
        double(&mut unsafe { make_ptr_view(store.as_mut_ptr(), 3, 4) }.unwrap());
        assert_eq!(store, [2, 4, 3, 8]);
    }
}
