use std::fmt;

use crate::bounds::Bounds;
use crate::error::{Result, SliceError};
use crate::storage::{Storage, StorageMut};
use crate::view::{View, ViewMut};

/// A read-only view of the elements `[begin, end)` of a container.
///
/// The view borrows the container; it never copies, resizes or owns it.
/// In contrast to a plain `&store[begin..end]`, every access through the view
/// is checked against the view's own bounds and reported as an error instead
/// of a panic.
///
/// # Examples
///
/// ```
/// use bufslice::ContainerView;
///
/// let store = vec![0, 1, 2, 3, 4];
/// let view = ContainerView::new(&store, 3, 5).unwrap();
/// assert_eq!(view.iter().copied().collect::<Vec<_>>(), [3, 4]);
/// ```
///
/// A view made from a shared reference stays read-only:
///
/// ```compile_fail
/// use bufslice::{ViewMut, make_view};
///
/// let store = vec![0, 1, 2, 3, 4];
/// let mut view = make_view(&store, 1, 3).unwrap();
/// *view.at_mut(0).unwrap() = 7;
/// ```
///
/// ```compile_fail
/// use bufslice::{ViewMut, make_view};
///
/// let store = vec![0, 1, 2, 3, 4];
/// let mut view = make_view(&store, 1, 3).unwrap();
/// for x in view.iter_mut() {
///     *x = 7;
/// }
/// ```
///
/// ```compile_fail
/// use bufslice::make_view;
///
/// let store = vec![0, 1, 2, 3, 4];
/// let mut view = make_view(&store, 1, 3).unwrap();
/// let _sub = view.sub_slice_mut(0, 1);
/// ```
pub struct ContainerView<'a, S: ?Sized> {
    store: &'a S,
    bounds: Bounds,
}

/// A mutable view of the elements `[begin, end)` of a container.
///
/// Holds the container's exclusive borrow for as long as it lives, so only
/// one mutable view (or any number of read-only ones) can exist at a time.
///
/// # Examples
///
/// ```
/// use bufslice::ContainerViewMut;
///
/// let mut store = vec![0, 1, 2, 3, 4];
/// let mut view = ContainerViewMut::new(&mut store, 1, 3).unwrap();
/// *view.at_mut(0).unwrap() *= 2;
/// *view.at_mut(1).unwrap() *= 3;
/// assert_eq!(store, [0, 2, 6, 3, 4]);
/// ```
pub struct ContainerViewMut<'a, S: ?Sized> {
    store: &'a mut S,
    bounds: Bounds,
}

/// Rejects bounds that reach past the end of a store of length `len`.
fn check_fits(bounds: &Bounds, len: usize) -> Result<()> {
    if bounds.end() > len {
        return Err(SliceError::InvalidRange {
            begin: bounds.begin(),
            end: bounds.end(),
            reason: "end must not be larger than the container",
        });
    }
    Ok(())
}

fn element<'s, S: Storage + ?Sized>(
    store: &'s S,
    bounds: &Bounds,
    index: usize,
) -> Result<&'s S::Item> {
    bounds.check_index(index)?;
    // index < end - begin and end <= len(), so the sum cannot overflow
    store
        .get(bounds.begin() + index)
        .ok_or(SliceError::IndexOutOfRange {
            index,
            len: bounds.len(),
        })
}

impl<'a, S: Storage + ?Sized> ContainerView<'a, S> {
    /// Creates a view of `store[begin..end]`.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::InvalidRange)`: when `begin >= end`, or when `end`
    ///   is larger than `store.len()`
    pub fn new(store: &'a S, begin: usize, end: usize) -> Result<Self> {
        let bounds = Bounds::new(begin, end)?;
        check_fits(&bounds, store.len())?;
        Ok(Self { store, bounds })
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The bounds of the view in store coordinates.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The whole underlying store, including elements outside of the view.
    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Returns the element at `index`, counted from the start of the view.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::IndexOutOfRange)`: when `index >= self.len()`
    pub fn at(&self, index: usize) -> Result<&'a S::Item> {
        element(self.store, &self.bounds, index)
    }

    /// Iterates over the viewed elements using the store's own iterator.
    pub fn iter(&self) -> S::Iter<'a> {
        self.store.iter_range(self.bounds.begin(), self.bounds.end())
    }

    /// Creates a view of `self[sub_begin..sub_end]` over the same store.
    ///
    /// The bounds are relative to this view: `0` is this view's first
    /// element and `sub_end == self.len()` reaches up to its last one.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::InvalidRange)`: when the sub-range is empty,
    ///   reversed or reaches outside of this view
    pub fn sub_slice(&self, sub_begin: usize, sub_end: usize) -> Result<ContainerView<'a, S>> {
        let bounds = self.bounds.sub_bounds(sub_begin, sub_end)?;
        ContainerView::new(self.store, bounds.begin(), bounds.end())
    }
}

impl<'a, S> ContainerView<'a, S>
where
    S: Storage + AsRef<[S::Item]> + ?Sized,
{
    /// The viewed elements as a plain slice, for contiguous stores.
    pub fn as_slice(&self) -> &'a [S::Item] {
        &self.store.as_ref()[self.bounds.begin()..self.bounds.end()]
    }
}

impl<'a, S: StorageMut + ?Sized> ContainerViewMut<'a, S> {
    /// Creates a mutable view of `store[begin..end]`.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::InvalidRange)`: when `begin >= end`, or when `end`
    ///   is larger than `store.len()`
    pub fn new(store: &'a mut S, begin: usize, end: usize) -> Result<Self> {
        let bounds = Bounds::new(begin, end)?;
        check_fits(&bounds, store.len())?;
        Ok(Self { store, bounds })
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

    pub fn at(&self, index: usize) -> Result<&S::Item> {
        element(&*self.store, &self.bounds, index)
    }

    /// Returns a mutable reference to the element at `index`, counted from
    /// the start of the view.
    ///
    /// # Returns
    ///
    /// - `Err(SliceError::IndexOutOfRange)`: when `index >= self.len()`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut S::Item> {
        self.bounds.check_index(index)?;
        let len = self.bounds.len();
        self.store
            .get_mut(self.bounds.begin() + index)
            .ok_or(SliceError::IndexOutOfRange { index, len })
    }

    pub fn iter(&self) -> S::Iter<'_> {
        self.store.iter_range(self.bounds.begin(), self.bounds.end())
    }

    pub fn iter_mut(&mut self) -> S::IterMut<'_> {
        self.store.iter_range_mut(self.bounds.begin(), self.bounds.end())
    }

    /// Reborrows this view as a read-only one.
    pub fn as_view(&self) -> ContainerView<'_, S> {
        ContainerView {
            store: &*self.store,
            bounds: self.bounds,
        }
    }

    /// Gives up write access, keeping the borrow of the store.
    pub fn into_view(self) -> ContainerView<'a, S> {
        ContainerView {
            store: self.store,
            bounds: self.bounds,
        }
    }

    /// Read-only sub-slice, see [`ContainerView::sub_slice`].
    pub fn sub_slice(&self, sub_begin: usize, sub_end: usize) -> Result<ContainerView<'_, S>> {
        self.as_view().sub_slice(sub_begin, sub_end)
    }

    /// Mutable sub-slice borrowing from this view.
    pub fn sub_slice_mut(
        &mut self,
        sub_begin: usize,
        sub_end: usize,
    ) -> Result<ContainerViewMut<'_, S>> {
        let bounds = self.bounds.sub_bounds(sub_begin, sub_end)?;
        ContainerViewMut::new(&mut *self.store, bounds.begin(), bounds.end())
    }

    /// Mutable sub-slice that takes over this view's borrow of the store.
    ///
    /// The view is consumed even when the sub-range is rejected; use
    /// [`sub_slice_mut`](Self::sub_slice_mut) to keep it.
    pub fn into_sub_slice(
        self,
        sub_begin: usize,
        sub_end: usize,
    ) -> Result<ContainerViewMut<'a, S>> {
        let bounds = self.bounds.sub_bounds(sub_begin, sub_end)?;
        ContainerViewMut::new(self.store, bounds.begin(), bounds.end())
    }
}

impl<S: ?Sized> Clone for ContainerView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for ContainerView<'_, S> {}

impl<S> fmt::Debug for ContainerView<'_, S>
where
    S: Storage + ?Sized,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContainerView({}) ", self.bounds)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S> fmt::Debug for ContainerViewMut<'_, S>
where
    S: StorageMut + ?Sized,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContainerViewMut({}) ", self.bounds)?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<S: Storage + ?Sized> View for ContainerView<'_, S> {
    type Item = S::Item;
    type Iter<'v>
        = S::Iter<'v>
    where
        Self: 'v;

    fn len(&self) -> usize {
        self.bounds.len()
    }

    fn at(&self, index: usize) -> Result<&S::Item> {
        element(self.store, &self.bounds, index)
    }

    fn iter(&self) -> S::Iter<'_> {
        self.store.iter_range(self.bounds.begin(), self.bounds.end())
    }
}

impl<S: StorageMut + ?Sized> View for ContainerViewMut<'_, S> {
    type Item = S::Item;
    type Iter<'v>
        = S::Iter<'v>
    where
        Self: 'v;

    fn len(&self) -> usize {
        self.bounds.len()
    }

    fn at(&self, index: usize) -> Result<&S::Item> {
        ContainerViewMut::at(self, index)
    }

    fn iter(&self) -> S::Iter<'_> {
        ContainerViewMut::iter(self)
    }
}

impl<S: StorageMut + ?Sized> ViewMut for ContainerViewMut<'_, S> {
    type IterMut<'v>
        = S::IterMut<'v>
    where
        Self: 'v;

    fn at_mut(&mut self, index: usize) -> Result<&mut S::Item> {
        ContainerViewMut::at_mut(self, index)
    }

    fn iter_mut(&mut self) -> S::IterMut<'_> {
        ContainerViewMut::iter_mut(self)
    }
}

impl<'a, S: Storage + ?Sized> IntoIterator for ContainerView<'a, S> {
    type Item = &'a S::Item;
    type IntoIter = S::Iter<'a>;

    fn into_iter(self) -> S::Iter<'a> {
        self.iter()
    }
}

impl<'v, S: Storage + ?Sized> IntoIterator for &'v ContainerView<'_, S> {
    type Item = &'v S::Item;
    type IntoIter = S::Iter<'v>;

    fn into_iter(self) -> S::Iter<'v> {
        self.store.iter_range(self.bounds.begin(), self.bounds.end())
    }
}

impl<'v, S: StorageMut + ?Sized> IntoIterator for &'v ContainerViewMut<'_, S> {
    type Item = &'v S::Item;
    type IntoIter = S::Iter<'v>;

    fn into_iter(self) -> S::Iter<'v> {
        self.iter()
    }
}

impl<'v, S: StorageMut + ?Sized> IntoIterator for &'v mut ContainerViewMut<'_, S> {
    type Item = &'v mut S::Item;
    type IntoIter = S::IterMut<'v>;

    fn into_iter(self) -> S::IterMut<'v> {
        self.iter_mut()
    }
}
