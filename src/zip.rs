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

//! Lockstep views over several sequences.

use crate::capability::{Capabilities, Operation};
use crate::result::RangeviewResult;
use crate::transform::TransformView;
use crate::view::{BidirectionalView, RandomAccessView, SizedView, View, impl_view_sugar};

/// A view pairing the elements of two views position by position.
///
/// The view ends as soon as either side ends, so its length is the shorter of the two.
/// An infinite side never limits the length; zipping a counter with a container numbers the
/// container's elements. Every capability is the weaker of the two sides.
///
/// # Examples
///
/// ```rust
/// use rangeview::{RandomAccessView, SizedView, Source, View, views};
///
/// let names = vec!["Alice", "Bob", "Carol"];
/// let ages = vec![30, 25];
/// let view = names.view().zip(&ages);
///
/// assert_eq!(view.size(), 2);
/// assert_eq!(view.at(1), Some((&"Bob", &25)));
///
/// let numbered = views::zip(views::iota(1), &names);
/// assert_eq!(numbered.try_size(), Ok(3));
/// assert_eq!(numbered.to_vec().unwrap(), vec![(1, &"Alice"), (2, &"Bob"), (3, &"Carol")]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ZipView<A, B> {
    a: A,
    b: B,
}

impl<A: View, B: View> ZipView<A, B> {
    /// Creates a view pairing `a` with `b`.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Returns both upstream views.
    pub fn bases(&self) -> (&A, &B) {
        (&self.a, &self.b)
    }
}

// Number of elements one side contributes; an infinite side counts up to its limit.
fn extent<V: View>(view: &V) -> RangeviewResult<usize> {
    if V::CAPABILITIES.is_infinite() {
        Ok(view.limit())
    } else {
        view.try_size()
    }
}

impl<A: View, B: View> View for ZipView<A, B> {
    type Item = (A::Item, B::Item);
    type Cursor<'s>
        = ZipCursor<A::Cursor<'s>, B::Cursor<'s>>
    where
        Self: 's;

    const CAPABILITIES: Capabilities = A::CAPABILITIES.zip(B::CAPABILITIES);

    fn cursor(&self) -> Self::Cursor<'_> {
        ZipCursor {
            a: self.a.cursor(),
            b: self.b.cursor(),
        }
    }

    fn try_size(&self) -> RangeviewResult<usize> {
        Self::CAPABILITIES.require(Operation::Size)?;
        Ok(extent(&self.a)?.min(extent(&self.b)?))
    }

    fn try_at(&self, index: usize) -> RangeviewResult<Self::Item> {
        Self::CAPABILITIES.require(Operation::Index)?;
        Ok((self.a.try_at(index)?, self.b.try_at(index)?))
    }

    fn try_back(&self) -> RangeviewResult<Option<Self::Item>> {
        Self::CAPABILITIES.require(Operation::Back)?;
        match self.try_size()? {
            0 => Ok(None),
            size => self.try_at(size - 1).map(Some),
        }
    }

    fn limit(&self) -> usize {
        self.a.limit().min(self.b.limit())
    }
}

impl<A: SizedView, B: SizedView> SizedView for ZipView<A, B> {
    fn size(&self) -> usize {
        self.a.size().min(self.b.size())
    }
}

impl<A: RandomAccessView, B: RandomAccessView> RandomAccessView for ZipView<A, B> {
    fn at(&self, index: usize) -> Option<Self::Item> {
        Some((self.a.at(index)?, self.b.at(index)?))
    }
}

// The sides may differ in length, so the common last position is found by indexing.
impl<A, B> BidirectionalView for ZipView<A, B>
where
    A: RandomAccessView + SizedView,
    B: RandomAccessView + SizedView,
{
    fn back(&self) -> Option<Self::Item> {
        match self.size() {
            0 => None,
            size => self.at(size - 1),
        }
    }
}

impl_view_sugar!([A: View, B: View,] ZipView<A, B>);

/// Cursor of a [`ZipView`].
#[derive(Debug, Clone)]
pub struct ZipCursor<CA, CB> {
    a: CA,
    b: CB,
}

impl<CA: Iterator, CB: Iterator> Iterator for ZipCursor<CA, CB> {
    type Item = (CA::Item, CB::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.a.next()?;
        let b = self.b.next()?;
        Some((a, b))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let a = self.a.nth(n)?;
        let b = self.b.nth(n)?;
        Some((a, b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(n), None) | (None, Some(n)) => Some(n),
            (None, None) => None,
        };
        (a_lower.min(b_lower), upper)
    }
}

/// A view of three sequences in lockstep, created by [`crate::views::zip3`].
pub type Zip3View<A, B, C> = TransformView<
    ZipView<ZipView<A, B>, C>,
    fn(
        ((<A as View>::Item, <B as View>::Item), <C as View>::Item),
    ) -> (<A as View>::Item, <B as View>::Item, <C as View>::Item),
>;

fn flatten<X, Y, Z>(((x, y), z): ((X, Y), Z)) -> (X, Y, Z) {
    (x, y, z)
}

pub(crate) fn zip3<A: View, B: View, C: View>(a: A, b: B, c: C) -> Zip3View<A, B, C> {
    TransformView::new(ZipView::new(ZipView::new(a, b), c), flatten as fn(_) -> _)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{Extent, Traversal};
    use crate::result::RangeviewError;
    use crate::source::Source;
    use std::collections::LinkedList;

    #[test]
    fn test_zip_stops_at_shorter() {
        let a = vec![1, 2, 3, 4];
        let b = vec!["one", "two"];
        let view = a.view().zip(&b);
        assert_eq!(view.size(), 2);
        assert_eq!(view.to_vec().unwrap(), vec![(&1, &"one"), (&2, &"two")]);
        assert_eq!(view.back(), Some((&2, &"two")));
    }

    #[test]
    fn test_zip_takes_weaker_capabilities() {
        let vec = vec![1, 2, 3];
        let list: LinkedList<i32> = vec.iter().copied().collect();
        let view = vec.view().zip(&list);
        let caps = view.capabilities();
        assert_eq!(caps.traversal, Traversal::Bidirectional);
        assert_eq!(caps.size, Extent::Known);
        assert!(!caps.indexable);
        assert_eq!(view.size(), 3);
        assert!(view.try_at(0).is_err());
    }

    #[test]
    fn test_zip_with_filtered_side_is_unsized() {
        let a = vec![1, 2, 3, 4];
        let b = vec![5, 6, 7, 8];
        let view = a.view().zip(b.view().filter(|x| **x % 2 == 0));
        assert_eq!(view.capabilities().traversal, Traversal::Forward);
        assert!(view.try_size().is_err());
        assert_eq!(view.to_vec().unwrap(), vec![(&1, &6), (&2, &8)]);
    }

    #[test]
    fn test_zip_ignores_infinite_side() {
        let vec = vec![10, 20, 30];
        let view = crate::views::iota(0_usize).zip(&vec);
        assert_eq!(view.try_size(), Ok(3));
        assert_eq!(view.try_at(2), Ok((2, &30)));
        assert_eq!(view.try_back(), Ok(Some((2, &30))));
        assert_eq!(view.try_at(3), Err(RangeviewError::OutOfBounds { index: 3 }));
    }

    #[test]
    fn test_zip_with_counter_near_type_bounds() {
        let vec: Vec<i32> = (0..10).collect();
        let view = crate::views::iota(250_u8).zip(&vec);
        assert_eq!(view.try_size(), Ok(6));
        assert_eq!(view.cursor().count(), 6);
        assert_eq!(view.try_back(), Ok(Some((255, &5))));

        let view = crate::views::iota(250_u8).zip(crate::views::iota(0_i32)).take(10);
        assert_eq!(view.try_size(), Ok(6));
        assert_eq!(view.cursor().count(), 6);
    }

    #[test]
    fn test_zip_of_two_infinite_sides() {
        let view = crate::views::iota(0_i32).zip(crate::views::iota(100_i32));
        assert!(view.capabilities().is_infinite());
        assert!(view.try_size().is_err());
        assert!(view.to_vec().is_err());
        assert_eq!(view.try_at(5), Ok((5, 105)));
    }

    #[test]
    fn test_zip3() {
        let a = vec![1, 2, 3];
        let b = vec!['a', 'b', 'c'];
        let c = vec![true, false];
        let view = zip3(a.view(), b.view(), c.view());
        assert_eq!(view.size(), 2);
        assert_eq!(view.at(1), Some((&2, &'b', &false)));
        assert_eq!(
            view.to_vec().unwrap(),
            vec![(&1, &'a', &true), (&2, &'b', &false)]
        );
    }

    #[test]
    fn test_zip_cursor_nth() {
        let a = vec![1, 2, 3, 4];
        let b = vec![5, 6, 7];
        let view = a.view().zip(&b);
        let mut cursor = view.cursor();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        assert_eq!(cursor.nth(1), Some((&2, &6)));
        assert_eq!(cursor.next(), Some((&3, &7)));
        assert_eq!(cursor.next(), None);
    }
}
