//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Trait definitions for sequences that views can be built over, and their classification.

use crate::capability::{Capabilities, Operation};
use crate::result::{RangeviewError, RangeviewResult};
use crate::view::RefView;
use std::collections::{
    BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque, btree_map, btree_set, hash_map,
    hash_set, linked_list, vec_deque,
};
use std::slice;

/// Structural category of a source sequence.
///
/// The category alone decides a source's [`Capabilities`]; the classifier never inspects
/// runtime data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Elements stored next to each other: arrays, slices, vectors.
    Contiguous,
    /// Random access over several blocks: ring buffers and deques.
    Segmented,
    /// Elements in individually allocated, doubly linked nodes.
    NodeLinked,
    /// Key-ordered trees.
    OrderedAssociative,
    /// Hash tables.
    UnorderedAssociative,
    /// Elements produced on demand by a generator.
    Synthetic,
}

impl Category {
    /// Capability descriptor shared by every source of this category.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Category::Contiguous | Category::Segmented => Capabilities::CONTIGUOUS,
            Category::NodeLinked | Category::OrderedAssociative => Capabilities::BIDIRECTIONAL,
            Category::UnorderedAssociative => Capabilities::FORWARD_SIZED,
            Category::Synthetic => Capabilities::FORWARD,
        }
    }
}

/// Reports the capability descriptor of a source type.
///
/// # Examples
///
/// ```rust
/// use rangeview::{Traversal, classify};
/// use std::collections::LinkedList;
///
/// assert_eq!(classify::<Vec<i32>>().traversal, Traversal::RandomAccess);
/// assert_eq!(classify::<LinkedList<i32>>().traversal, Traversal::Bidirectional);
/// assert!(!classify::<LinkedList<i32>>().indexable);
/// ```
#[must_use]
pub const fn classify<S: Source + ?Sized>() -> Capabilities {
    S::CAPABILITIES
}

/// A container that views can borrow and traverse.
///
/// `Source` is the only thing the view engine needs from a container: a cursor over its
/// elements plus, where the category allows it, its length, positional access and last
/// element. The checked accessors default to a [`RangeviewError::CapabilityViolation`]; a
/// source overrides the ones its category supports and implements the matching
/// [`SizedSource`], [`IndexedSource`] and [`BidirectionalSource`] traits.
///
/// # Examples
///
/// ```rust
/// use rangeview::{Category, IndexedSource, SizedSource, Source, View};
///
/// struct MyContainer<T> {
///     data: Vec<T>,
/// }
///
/// impl<T> Source for MyContainer<T> {
///     type Item<'a> = &'a T where Self: 'a;
///     type Cursor<'a> = std::slice::Iter<'a, T> where Self: 'a;
///
///     const CATEGORY: Category = Category::Contiguous;
///
///     fn cursor(&self) -> Self::Cursor<'_> {
///         self.data.iter()
///     }
///
///     fn try_length(&self) -> rangeview::RangeviewResult<usize> {
///         Ok(self.length())
///     }
/// }
///
/// impl<T> SizedSource for MyContainer<T> {
///     fn length(&self) -> usize {
///         self.data.len()
///     }
/// }
///
/// let container = MyContainer { data: vec![3, 1, 4, 1, 5] };
/// let view = container.view().drop(2);
/// assert_eq!(view.try_size(), Ok(3));
/// assert_eq!(view.to_vec().unwrap(), vec![&4, &1, &5]);
/// ```
pub trait Source {
    /// The type produced for each element.
    type Item<'a>
    where
        Self: 'a;

    /// Front-to-back traversal over the elements.
    type Cursor<'a>: Iterator<Item = Self::Item<'a>> + Clone
    where
        Self: 'a;

    /// Structural category of this source type.
    const CATEGORY: Category;

    /// Capability descriptor of this source type.
    const CAPABILITIES: Capabilities = Self::CATEGORY.capabilities();

    /// Returns a cursor positioned at the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Returns the number of elements if it is known in constant time.
    fn try_length(&self) -> RangeviewResult<usize> {
        Err(RangeviewError::violation(Operation::Size, Self::CAPABILITIES))
    }

    /// Returns the element at `index` if the source supports constant time indexing.
    fn try_at(&self, index: usize) -> RangeviewResult<Self::Item<'_>> {
        let _ = index;
        Err(RangeviewError::violation(Operation::Index, Self::CAPABILITIES))
    }

    /// Returns the last element if it is reachable without a forward scan.
    fn try_back(&self) -> RangeviewResult<Option<Self::Item<'_>>> {
        Err(RangeviewError::violation(Operation::Back, Self::CAPABILITIES))
    }

    /// Borrows the source as a view.
    fn view(&self) -> RefView<'_, Self> {
        RefView::new(self)
    }
}

/// A source whose length is known in constant time.
pub trait SizedSource: Source {
    /// Returns the number of elements.
    fn length(&self) -> usize;
}

/// A source with constant time positional access.
pub trait IndexedSource: SizedSource {
    /// Returns the element at `index`, or `None` past the end.
    fn at(&self, index: usize) -> Option<Self::Item<'_>>;
}

/// A source whose last element is reachable without scanning from the front.
pub trait BidirectionalSource: SizedSource {
    /// Returns the last element, or `None` if the source is empty.
    fn back(&self) -> Option<Self::Item<'_>>;
}

fn index_result<T>(index: usize, element: Option<T>) -> RangeviewResult<T> {
    element.ok_or(RangeviewError::OutOfBounds { index })
}

// Vectors, arrays and slices all funnel into the same slice code.
macro_rules! impl_contiguous_source {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> Source for $ty {
            type Item<'a> = &'a T where Self: 'a;
            type Cursor<'a> = slice::Iter<'a, T> where Self: 'a;

            const CATEGORY: Category = Category::Contiguous;

            fn cursor(&self) -> Self::Cursor<'_> {
                <[T]>::iter(AsRef::<[T]>::as_ref(self))
            }

            fn try_length(&self) -> RangeviewResult<usize> {
                Ok(SizedSource::length(self))
            }

            fn try_at(&self, index: usize) -> RangeviewResult<Self::Item<'_>> {
                index_result(index, IndexedSource::at(self, index))
            }

            fn try_back(&self) -> RangeviewResult<Option<Self::Item<'_>>> {
                Ok(BidirectionalSource::back(self))
            }
        }

        impl<$($gen)*> SizedSource for $ty {
            fn length(&self) -> usize {
                <[T]>::len(AsRef::<[T]>::as_ref(self))
            }
        }

        impl<$($gen)*> IndexedSource for $ty {
            fn at(&self, index: usize) -> Option<Self::Item<'_>> {
                <[T]>::get(AsRef::<[T]>::as_ref(self), index)
            }
        }

        impl<$($gen)*> BidirectionalSource for $ty {
            fn back(&self) -> Option<Self::Item<'_>> {
                <[T]>::last(AsRef::<[T]>::as_ref(self))
            }
        }
    };
}

impl_contiguous_source!([T] [T]);
impl_contiguous_source!([T] Vec<T>);
impl_contiguous_source!([T, const N: usize] [T; N]);

impl<T> Source for VecDeque<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Cursor<'a> = vec_deque::Iter<'a, T> where Self: 'a;

    const CATEGORY: Category = Category::Segmented;

    fn cursor(&self) -> Self::Cursor<'_> {
        VecDeque::iter(self)
    }

    fn try_length(&self) -> RangeviewResult<usize> {
        Ok(SizedSource::length(self))
    }

    fn try_at(&self, index: usize) -> RangeviewResult<Self::Item<'_>> {
        index_result(index, IndexedSource::at(self, index))
    }

    fn try_back(&self) -> RangeviewResult<Option<Self::Item<'_>>> {
        Ok(BidirectionalSource::back(self))
    }
}

impl<T> SizedSource for VecDeque<T> {
    fn length(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> IndexedSource for VecDeque<T> {
    fn at(&self, index: usize) -> Option<Self::Item<'_>> {
        VecDeque::get(self, index)
    }
}

impl<T> BidirectionalSource for VecDeque<T> {
    fn back(&self) -> Option<Self::Item<'_>> {
        VecDeque::back(self)
    }
}

impl<T> Source for LinkedList<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Cursor<'a> = linked_list::Iter<'a, T> where Self: 'a;

    const CATEGORY: Category = Category::NodeLinked;

    fn cursor(&self) -> Self::Cursor<'_> {
        LinkedList::iter(self)
    }

    fn try_length(&self) -> RangeviewResult<usize> {
        Ok(SizedSource::length(self))
    }

    fn try_back(&self) -> RangeviewResult<Option<Self::Item<'_>>> {
        Ok(BidirectionalSource::back(self))
    }
}

impl<T> SizedSource for LinkedList<T> {
    fn length(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> BidirectionalSource for LinkedList<T> {
    fn back(&self) -> Option<Self::Item<'_>> {
        LinkedList::back(self)
    }
}

impl<K: Ord, V> Source for BTreeMap<K, V> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;
    type Cursor<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

    const CATEGORY: Category = Category::OrderedAssociative;

    fn cursor(&self) -> Self::Cursor<'_> {
        BTreeMap::iter(self)
    }

    fn try_length(&self) -> RangeviewResult<usize> {
        Ok(SizedSource::length(self))
    }

    fn try_back(&self) -> RangeviewResult<Option<Self::Item<'_>>> {
        Ok(BidirectionalSource::back(self))
    }
}

impl<K: Ord, V> SizedSource for BTreeMap<K, V> {
    fn length(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K: Ord, V> BidirectionalSource for BTreeMap<K, V> {
    fn back(&self) -> Option<Self::Item<'_>> {
        BTreeMap::last_key_value(self)
    }
}

impl<T: Ord> Source for BTreeSet<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Cursor<'a> = btree_set::Iter<'a, T> where Self: 'a;

    const CATEGORY: Category = Category::OrderedAssociative;

    fn cursor(&self) -> Self::Cursor<'_> {
        BTreeSet::iter(self)
    }

    fn try_length(&self) -> RangeviewResult<usize> {
        Ok(SizedSource::length(self))
    }

    fn try_back(&self) -> RangeviewResult<Option<Self::Item<'_>>> {
        Ok(BidirectionalSource::back(self))
    }
}

impl<T: Ord> SizedSource for BTreeSet<T> {
    fn length(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<T: Ord> BidirectionalSource for BTreeSet<T> {
    fn back(&self) -> Option<Self::Item<'_>> {
        BTreeSet::last(self)
    }
}

impl<K, V, S> Source for HashMap<K, V, S> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;
    type Cursor<'a> = hash_map::Iter<'a, K, V> where Self: 'a;

    const CATEGORY: Category = Category::UnorderedAssociative;

    fn cursor(&self) -> Self::Cursor<'_> {
        HashMap::iter(self)
    }

    fn try_length(&self) -> RangeviewResult<usize> {
        Ok(SizedSource::length(self))
    }
}

impl<K, V, S> SizedSource for HashMap<K, V, S> {
    fn length(&self) -> usize {
        HashMap::len(self)
    }
}

impl<T, S> Source for HashSet<T, S> {
    type Item<'a> = &'a T where Self: 'a;
    type Cursor<'a> = hash_set::Iter<'a, T> where Self: 'a;

    const CATEGORY: Category = Category::UnorderedAssociative;

    fn cursor(&self) -> Self::Cursor<'_> {
        HashSet::iter(self)
    }

    fn try_length(&self) -> RangeviewResult<usize> {
        Ok(SizedSource::length(self))
    }
}

impl<T, S> SizedSource for HashSet<T, S> {
    fn length(&self) -> usize {
        HashSet::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Traversal;

    #[test]
    fn test_classify_contiguous() {
        assert_eq!(classify::<Vec<u8>>(), Capabilities::CONTIGUOUS);
        assert_eq!(classify::<[u8]>(), Capabilities::CONTIGUOUS);
        assert_eq!(classify::<[u8; 4]>(), Capabilities::CONTIGUOUS);
        assert_eq!(classify::<VecDeque<u8>>().traversal, Traversal::RandomAccess);
    }

    #[test]
    fn test_classify_linked_and_associative() {
        assert_eq!(classify::<LinkedList<u8>>(), Capabilities::BIDIRECTIONAL);
        assert_eq!(classify::<BTreeMap<u8, u8>>(), Capabilities::BIDIRECTIONAL);
        assert_eq!(classify::<BTreeSet<u8>>(), Capabilities::BIDIRECTIONAL);
        assert_eq!(classify::<HashMap<u8, u8>>(), Capabilities::FORWARD_SIZED);
        assert_eq!(classify::<HashSet<u8>>(), Capabilities::FORWARD_SIZED);
    }

    #[test]
    fn test_vec_accessors() {
        let vec = vec![0, 8, 15, 47, 11, 42];
        assert_eq!(vec.try_length(), Ok(6));
        assert_eq!(Source::try_at(&vec, 3), Ok(&47));
        assert_eq!(
            Source::try_at(&vec, 6),
            Err(RangeviewError::OutOfBounds { index: 6 })
        );
        assert_eq!(Source::try_back(&vec), Ok(Some(&42)));
    }

    #[test]
    fn test_list_rejects_indexing() {
        let list: LinkedList<i32> = [0, 8, 15].into_iter().collect();
        assert_eq!(list.try_length(), Ok(3));
        assert!(matches!(
            Source::try_at(&list, 0),
            Err(RangeviewError::CapabilityViolation {
                operation: Operation::Index,
                ..
            })
        ));
        assert_eq!(Source::try_back(&list), Ok(Some(&15)));
    }

    #[test]
    fn test_ordered_sources_reach_back() {
        let map: BTreeMap<&str, i32> = [("Mozart", 1756), ("Bach", 1685)].into_iter().collect();
        assert_eq!(map.try_length(), Ok(2));
        assert_eq!(Source::try_back(&map), Ok(Some((&"Mozart", &1756))));
        assert_eq!(BidirectionalSource::back(&map), Some((&"Mozart", &1756)));

        let set: BTreeSet<u8> = [3, 1, 2].into_iter().collect();
        assert_eq!(Source::try_back(&set), Ok(Some(&3)));
        assert_eq!(Source::cursor(&set).copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_hash_map_rejects_back() {
        let map: HashMap<&str, i32> = [("Bach", 1685)].into_iter().collect();
        assert_eq!(map.try_length(), Ok(1));
        assert!(matches!(
            Source::try_back(&map),
            Err(RangeviewError::CapabilityViolation {
                operation: Operation::Back,
                ..
            })
        ));
    }

    #[test]
    fn test_btree_map_back_is_largest_key() {
        let map: BTreeMap<&str, i32> = [("Bach", 1685), ("Vivaldi", 1678), ("Mozart", 1756)]
            .into_iter()
            .collect();
        assert_eq!(BidirectionalSource::back(&map), Some((&"Vivaldi", &1678)));
    }
}
