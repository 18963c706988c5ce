use crate::error::Result;

/// Read access shared by every view type.
///
/// Generic code written against `View` accepts container-backed and
/// pointer-backed views alike:
///
/// ```
/// use bufslice::{View, make_view};
///
/// fn total<V: View<Item = i32>>(view: &V) -> i32 {
///     view.iter().sum()
/// }
///
/// let store = vec![0, 1, 2, 3, 4];
/// assert_eq!(total(&make_view(&store, 1, 4).unwrap()), 6);
/// ```
pub trait View {
    type Item;

    type Iter<'v>: Iterator<Item = &'v Self::Item>
    where
        Self: 'v;

    /// Number of elements in the view. Never zero.
    fn len(&self) -> usize;

    /// Always `false`, views cannot be empty.
    fn is_empty(&self) -> bool {
        false
    }

    /// The element at `index`, counted from the start of the view.
    fn at(&self, index: usize) -> Result<&Self::Item>;

    /// Iterates over the viewed elements in store order.
    fn iter(&self) -> Self::Iter<'_>;
}

/// Write access, offered only by views created from mutable stores.
pub trait ViewMut: View {
    type IterMut<'v>: Iterator<Item = &'v mut Self::Item>
    where
        Self: 'v;

    fn at_mut(&mut self, index: usize) -> Result<&mut Self::Item>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}
