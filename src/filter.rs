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

//! Predicate views.

use crate::capability::Capabilities;
use crate::view::{View, impl_view_sugar};

/// A view of the upstream elements that satisfy a predicate, in their original order.
///
/// The predicate runs lazily, once per upstream element a cursor passes over, and never
/// while the view is being built. Finding the first element means testing upstream elements
/// until one matches, so a filtered view is forward-only, unsized and not indexable no
/// matter what its upstream supports. `size`, `at` and `back` are not available; the
/// checked accessors fail with a capability violation.
///
/// The first matching position is recomputed for every cursor rather than cached, so
/// cursor creation never writes to the view.
///
/// # Examples
///
/// ```rust
/// use rangeview::{Source, View};
///
/// let source = vec![0, 8, 15, 47, 11, 42];
/// let view = source.view().filter(|x| **x % 3 == 0);
///
/// assert_eq!(view.to_vec().unwrap(), vec![&0, &15, &42]);
/// assert!(view.try_size().is_err());
/// assert!(view.try_at(0).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct FilterView<V, P> {
    base: V,
    predicate: P,
}

impl<V, P> FilterView<V, P>
where
    V: View,
    P: Fn(&V::Item) -> bool,
{
    /// Creates a view of the elements of `base` that satisfy `predicate`.
    pub fn new(base: V, predicate: P) -> Self {
        Self { base, predicate }
    }

    /// Returns the upstream view.
    pub fn base(&self) -> &V {
        &self.base
    }
}

impl<V, P> std::fmt::Debug for FilterView<V, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FilterView {{ .. }}")
    }
}

impl<V, P> View for FilterView<V, P>
where
    V: View,
    P: Fn(&V::Item) -> bool,
{
    type Item = V::Item;
    type Cursor<'s>
        = FilterCursor<'s, V::Cursor<'s>, P>
    where
        Self: 's;

    const CAPABILITIES: Capabilities = V::CAPABILITIES.filter();

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            inner: self.base.cursor(),
            predicate: &self.predicate,
        }
    }
}

impl_view_sugar!([V: View, P: Fn(&V::Item) -> bool,] FilterView<V, P>);

/// Cursor of a [`FilterView`].
pub struct FilterCursor<'s, C, P> {
    inner: C,
    predicate: &'s P,
}

impl<C: Clone, P> Clone for FilterCursor<'_, C, P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            predicate: self.predicate,
        }
    }
}

impl<C, P> std::fmt::Debug for FilterCursor<'_, C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FilterCursor {{ .. }}")
    }
}

impl<C, P> Iterator for FilterCursor<'_, C, P>
where
    C: Iterator,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        let predicate = self.predicate;
        self.inner.find(|item| predicate(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{Cost, Operation, Traversal};
    use crate::result::RangeviewError;
    use crate::source::Source;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    #[test]
    fn test_filter_keeps_order() {
        let vec = vec![0, 8, 15, 47, 11, 42];
        let view = vec.view().filter(|x| **x % 3 == 0);
        assert_eq!(view.to_vec().unwrap(), vec![&0, &15, &42]);
    }

    #[test]
    fn test_filter_rejects_size_and_index() {
        let vec = vec![1, 2, 3];
        let view = vec.view().filter(|x| **x > 1);
        assert_eq!(view.capabilities().traversal, Traversal::Forward);
        assert!(matches!(
            view.try_size(),
            Err(RangeviewError::CapabilityViolation {
                operation: Operation::Size,
                ..
            })
        ));
        assert!(matches!(
            view.try_at(0),
            Err(RangeviewError::CapabilityViolation {
                operation: Operation::Index,
                ..
            })
        ));
        assert!(view.try_back().is_err());
        assert_eq!(view.cost(Operation::Begin), Cost::Linear);
    }

    #[test]
    fn test_filter_is_lazy() {
        let calls = Cell::new(0);
        let vec = vec![1, 2, 3, 4, 5, 6];
        let view = vec.view().filter(|x| {
            calls.set(calls.get() + 1);
            **x % 2 == 0
        });
        assert_eq!(calls.get(), 0);

        // Reaching the first element tests elements up to the first match.
        assert_eq!(view.front(), Some(&2));
        assert_eq!(calls.get(), 2);

        // Emptiness is answered the same way.
        assert!(!view.is_empty());
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_filter_with_no_match() {
        let vec = vec![1, 3, 5];
        let view = vec.view().filter(|x| **x % 2 == 0);
        assert!(view.is_empty());
        assert_eq!(view.front(), None);
        assert_eq!(view.to_vec().unwrap(), Vec::<&i32>::new());
    }

    #[test]
    fn test_filter_composers() {
        let composers: BTreeMap<&str, i32> = [
            ("Bach", 1685),
            ("Mozart", 1756),
            ("Beethoven", 1770),
            ("Vivaldi", 1678),
        ]
        .into_iter()
        .collect();

        let view = composers.view().filter(|(_, year)| **year >= 1700).keys();
        assert_eq!(view.to_vec().unwrap(), vec![&"Beethoven", &"Mozart"]);
    }

    #[test]
    fn test_prefix_of_filtered_counter_is_not_sized() {
        let view = crate::views::iota(1_u8).filter(|n| *n % 100 == 0).take(5);
        assert!(matches!(
            view.try_size(),
            Err(RangeviewError::CapabilityViolation {
                operation: Operation::Size,
                ..
            })
        ));
        assert_eq!(view.cursor().count(), 2);
        assert_eq!(view.to_vec().unwrap(), vec![100, 200]);
    }

    #[test]
    fn test_filtered_counter_cannot_be_collected() {
        let view = crate::views::iota(0_u64).filter(|n| n % 2 == 0);
        assert!(matches!(
            view.to_vec(),
            Err(RangeviewError::CapabilityViolation {
                operation: Operation::Collect,
                ..
            })
        ));
        assert!(view.drop(3).to_vec().is_err());
        assert_eq!(view.front(), Some(0));
    }

    #[test]
    fn test_cloned_cursor_resumes_independently() {
        let vec = vec![1, 2, 3, 4, 5, 6];
        let view = vec.view().filter(|x| **x % 2 == 0);
        let mut cursor = view.cursor();
        assert_eq!(cursor.next(), Some(&2));
        let mut copy = cursor.clone();
        assert_eq!(cursor.next(), Some(&4));
        assert_eq!(copy.next(), Some(&4));
        assert_eq!(copy.next(), Some(&6));
        assert_eq!(cursor.next(), Some(&6));
        assert_eq!(cursor.next(), None);
    }
}
