use std::collections::{VecDeque, vec_deque};
use std::slice;

/// A store a [`ContainerView`](crate::ContainerView) can look into: anything
/// with a known size, checked indexed access and in-order iteration over a
/// range of its elements.
///
/// Views trust these operations. They never second-guess the size a store
/// reports or the element it returns.
pub trait Storage {
    /// The element type of the store.
    type Item;

    /// Iterator over a range of elements, in store order.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Number of elements in the store.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, or `None` when `index` is past the end.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Iterates over the elements `[begin, end)`.
    ///
    /// Callers guarantee `begin <= end <= self.len()`.
    fn iter_range(&self, begin: usize, end: usize) -> Self::Iter<'_>;
}

/// A [`Storage`] whose elements can be modified in place.
pub trait StorageMut: Storage {
    /// Iterator over mutable references to a range of elements.
    type IterMut<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;

    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Callers guarantee `begin <= end <= self.len()`.
    fn iter_range_mut(&mut self, begin: usize, end: usize) -> Self::IterMut<'_>;
}

impl<T> Storage for [T] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn iter_range(&self, begin: usize, end: usize) -> slice::Iter<'_, T> {
        self[begin..end].iter()
    }
}

impl<T> StorageMut for [T] {
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }

    fn iter_range_mut(&mut self, begin: usize, end: usize) -> slice::IterMut<'_, T> {
        self[begin..end].iter_mut()
    }
}

impl<T, const N: usize> Storage for [T; N] {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn iter_range(&self, begin: usize, end: usize) -> slice::Iter<'_, T> {
        self[begin..end].iter()
    }
}

impl<T, const N: usize> StorageMut for [T; N] {
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn iter_range_mut(&mut self, begin: usize, end: usize) -> slice::IterMut<'_, T> {
        self[begin..end].iter_mut()
    }
}

impl<T> Storage for Vec<T> {
    type Item = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn iter_range(&self, begin: usize, end: usize) -> slice::Iter<'_, T> {
        self[begin..end].iter()
    }
}

impl<T> StorageMut for Vec<T> {
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn iter_range_mut(&mut self, begin: usize, end: usize) -> slice::IterMut<'_, T> {
        self[begin..end].iter_mut()
    }
}

// Not contiguous, so iteration goes through the deque's own range iterators.
impl<T> Storage for VecDeque<T> {
    type Item = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn iter_range(&self, begin: usize, end: usize) -> vec_deque::Iter<'_, T> {
        self.range(begin..end)
    }
}

impl<T> StorageMut for VecDeque<T> {
    type IterMut<'a>
        = vec_deque::IterMut<'a, T>
    where
        Self: 'a;

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    fn iter_range_mut(&mut self, begin: usize, end: usize) -> vec_deque::IterMut<'_, T> {
        self.range_mut(begin..end)
    }
}

// Strings are viewed as their UTF-8 bytes. There is no
// `StorageMut` impl: writing single bytes could break the encoding.
impl Storage for str {
    type Item = u8;
    type Iter<'a> = slice::Iter<'a, u8>;

    fn len(&self) -> usize {
        str::len(self)
    }

    fn get(&self, index: usize) -> Option<&u8> {
        self.as_bytes().get(index)
    }

    fn iter_range(&self, begin: usize, end: usize) -> slice::Iter<'_, u8> {
        self.as_bytes()[begin..end].iter()
    }
}

impl Storage for String {
    type Item = u8;
    type Iter<'a> = slice::Iter<'a, u8>;

    fn len(&self) -> usize {
        String::len(self)
    }

    fn get(&self, index: usize) -> Option<&u8> {
        self.as_bytes().get(index)
    }

    fn iter_range(&self, begin: usize, end: usize) -> slice::Iter<'_, u8> {
        self.as_bytes()[begin..end].iter()
    }
}
