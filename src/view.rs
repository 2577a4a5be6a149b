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

//! The [`View`] trait, its capability-gated extensions, and the borrowing [`RefView`].

use crate::capability::{Capabilities, Cost, Operation};
use crate::drop::DropView;
use crate::filter::FilterView;
use crate::pipe::Adaptor;
use crate::result::{RangeviewError, RangeviewResult};
use crate::source::{BidirectionalSource, IndexedSource, SizedSource, Source};
use crate::take::TakeView;
use crate::transform::{Keys, Pair, TransformView, Values};
use crate::zip::ZipView;
use std::ops::{Bound, RangeBounds};

/// A lazily evaluated description of a sequence.
///
/// A view stores a handle to its upstream (a borrowed source, an owned buffer, or another
/// view) together with the parameters of its transformation. Building a view never touches
/// an element; elements are produced one at a time by the cursors returned from
/// [`View::cursor`].
///
/// Operations that only some views support are split into [`SizedView`], [`RandomAccessView`]
/// and [`BidirectionalView`], which are implemented exactly where [`View::CAPABILITIES`]
/// allows. Generic code that cannot name those traits uses the checked accessors
/// [`View::try_size`], [`View::try_at`] and [`View::try_back`], which fail with a
/// [`RangeviewError::CapabilityViolation`] instead of falling back to a scan.
///
/// # Examples
///
/// ```rust
/// use rangeview::{SizedView, Source, View};
///
/// let source = vec![0, 8, 15, 47, 11, 42];
///
/// let first = source.view().take(3);
/// assert_eq!(first.size(), 3);
/// assert_eq!(first.to_vec().unwrap(), vec![&0, &8, &15]);
///
/// let multiples = source.view().filter(|x| **x % 3 == 0);
/// assert_eq!(multiples.to_vec().unwrap(), vec![&0, &15, &42]);
/// assert!(multiples.try_size().is_err());
/// ```
pub trait View {
    /// The type of the elements produced by the view.
    type Item;

    /// Cursor over the view's elements, borrowing the view.
    type Cursor<'s>: Iterator<Item = Self::Item> + Clone
    where
        Self: 's;

    /// Capability descriptor of this view type.
    const CAPABILITIES: Capabilities;

    /// Returns a cursor positioned at the first element.
    ///
    /// Creating a cursor never modifies the view, so any number of cursors may be created
    /// concurrently from a shared view. The cost of reaching the first element is
    /// `Self::CAPABILITIES.begin`.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Returns the number of elements, or a capability violation if the size is not known
    /// in constant time.
    fn try_size(&self) -> RangeviewResult<usize> {
        Err(RangeviewError::violation(Operation::Size, Self::CAPABILITIES))
    }

    /// Returns the element at `index`, or a capability violation if the view is not
    /// indexable.
    fn try_at(&self, index: usize) -> RangeviewResult<Self::Item> {
        let _ = index;
        Err(RangeviewError::violation(Operation::Index, Self::CAPABILITIES))
    }

    /// Returns the last element, or a capability violation if it is not reachable without a
    /// forward scan.
    fn try_back(&self) -> RangeviewResult<Option<Self::Item>> {
        Err(RangeviewError::violation(Operation::Back, Self::CAPABILITIES))
    }

    /// Returns how many elements a cursor produces before an infinite view runs out of
    /// representable values, saturating at `usize::MAX`.
    ///
    /// Only consulted for views whose size is [`Extent::Infinite`](crate::Extent::Infinite);
    /// everything else answers `usize::MAX`. A counter over `u8` starting at 250 stops after
    /// six elements, and a prefix of it must not claim more.
    fn limit(&self) -> usize {
        usize::MAX
    }

    /// Returns the capability descriptor of this view.
    fn capabilities(&self) -> Capabilities {
        Self::CAPABILITIES
    }

    /// Returns the cost class of `operation` on this view.
    fn cost(&self, operation: Operation) -> Cost {
        Self::CAPABILITIES.cost(operation)
    }

    /// Returns the first element.
    fn front(&self) -> Option<Self::Item> {
        self.cursor().next()
    }

    /// Returns `true` if the view has no elements.
    ///
    /// Sized views answer from their size; all others have to look for a first element.
    fn is_empty(&self) -> bool {
        if Self::CAPABILITIES.is_sized() {
            if let Ok(size) = self.try_size() {
                return size == 0;
            }
        }
        self.cursor().next().is_none()
    }

    /// Collects every element into a vector.
    ///
    /// Views whose traversal may never end are rejected before any element is produced.
    fn to_vec(&self) -> RangeviewResult<Vec<Self::Item>> {
        Self::CAPABILITIES.require(Operation::Collect)?;
        log::trace!("collecting a {} view", Self::CAPABILITIES);
        Ok(self.cursor().collect())
    }

    /// Keeps the first `count` elements.
    fn take(self, count: usize) -> TakeView<Self>
    where
        Self: Sized,
    {
        TakeView::new(self, count)
    }

    /// Skips the first `count` elements.
    fn drop(self, count: usize) -> DropView<Self>
    where
        Self: Sized,
    {
        DropView::new(self, count)
    }

    /// Keeps the elements for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> FilterView<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        FilterView::new(self, predicate)
    }

    /// Replaces every element by `f(element)`.
    fn transform<F, U>(self, f: F) -> TransformView<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        TransformView::new(self, f)
    }

    /// Pairs the elements of this view with those of `other`.
    fn zip<B>(self, other: B) -> ZipView<Self, B::View>
    where
        Self: Sized,
        B: IntoView,
    {
        ZipView::new(self, other.into_view())
    }

    /// Keeps the first component of every pair.
    fn keys(self) -> Keys<Self>
    where
        Self: Sized,
        Self::Item: Pair,
    {
        TransformView::new(self, <Self::Item as Pair>::into_first as fn(_) -> _)
    }

    /// Keeps the second component of every pair.
    fn values(self) -> Values<Self>
    where
        Self: Sized,
        Self::Item: Pair,
    {
        TransformView::new(self, <Self::Item as Pair>::into_second as fn(_) -> _)
    }

    /// Restricts the view to the positions in `bounds`.
    ///
    /// Equivalent to `self.drop(start).take(end - start)`. An end past the last element is
    /// clamped like [`View::take`] does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangeview::{Source, View};
    ///
    /// let source = [0, 8, 15, 47, 11, 42];
    /// assert_eq!(source.view().subrange(1..3).unwrap().to_vec().unwrap(), vec![&8, &15]);
    /// assert_eq!(source.view().subrange(4..).unwrap().to_vec().unwrap(), vec![&11, &42]);
    /// assert!(source.view().subrange(3..1).is_err());
    /// ```
    fn subrange<R>(self, bounds: R) -> RangeviewResult<TakeView<DropView<Self>>>
    where
        Self: Sized,
        R: RangeBounds<usize>,
    {
        // Convert RangeBounds to concrete positions
        let start = match bounds.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match bounds.end_bound() {
            Bound::Included(&n) => n.saturating_add(1),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => usize::MAX,
        };

        if start > end {
            return Err(RangeviewError::InvalidRange { start, end });
        }

        Ok(TakeView::new(DropView::new(self, start), end - start))
    }

    /// Applies a range adaptor; `view.pipe(adaptor)` is `adaptor` applied to `view`.
    fn pipe<A>(self, adaptor: A) -> A::Output
    where
        Self: Sized,
        A: Adaptor<Self>,
    {
        adaptor.apply(self)
    }
}

/// A view whose size is known in constant time.
pub trait SizedView: View {
    /// Returns the number of elements.
    fn size(&self) -> usize;
}

/// A view with constant time positional access.
pub trait RandomAccessView: View {
    /// Returns the element at `index`, or `None` past the end.
    fn at(&self, index: usize) -> Option<Self::Item>;
}

/// A sized view whose last element is reachable without scanning from the front.
pub trait BidirectionalView: SizedView {
    /// Returns the last element, or `None` if the view is empty.
    fn back(&self) -> Option<Self::Item>;
}

/// Conversion into a [`View`].
///
/// Views convert into themselves; a reference to a [`Source`] converts into a [`RefView`]
/// borrowing it. Functions taking `impl IntoView` therefore accept containers and views alike,
/// while functions taking `impl View` accept views only.
///
/// # Examples
///
/// ```rust
/// use rangeview::{IntoView, View};
///
/// fn count(seq: impl IntoView) -> usize {
///     seq.into_view().cursor().count()
/// }
///
/// let vec = vec![1, 2, 3, 4, 5];
/// assert_eq!(count(&vec), 5);
/// assert_eq!(count(rangeview::views::take(&vec, 3)), 3);
/// ```
pub trait IntoView {
    /// The view produced by the conversion.
    type View: View;

    /// Converts `self` into a view.
    fn into_view(self) -> Self::View;
}

impl<'a, S: Source + ?Sized> IntoView for &'a S {
    type View = RefView<'a, S>;

    fn into_view(self) -> RefView<'a, S> {
        RefView::new(self)
    }
}

// Conversion, `for` loop and pipe support shared by every view type.
macro_rules! impl_view_sugar {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)*> $crate::view::IntoView for $ty
        where
            $ty: $crate::view::View,
        {
            type View = Self;

            fn into_view(self) -> Self {
                self
            }
        }

        impl<'__s, $($gen)*> IntoIterator for &'__s $ty
        where
            $ty: $crate::view::View,
        {
            type Item = <$ty as $crate::view::View>::Item;
            type IntoIter = <$ty as $crate::view::View>::Cursor<'__s>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::view::View::cursor(self)
            }
        }

        impl<$($gen)* __A> std::ops::BitOr<__A> for $ty
        where
            $ty: $crate::view::View,
            __A: $crate::pipe::Adaptor<$ty>,
        {
            type Output = __A::Output;

            fn bitor(self, adaptor: __A) -> __A::Output {
                $crate::pipe::Adaptor::apply(adaptor, self)
            }
        }
    };
}

pub(crate) use impl_view_sugar;

/// A view borrowing every element of a [`Source`].
///
/// Created by [`Source::view`] or [`crate::views::all`]. The view is a plain reference, so
/// it is `Copy` and cannot outlive the container it borrows.
pub struct RefView<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S: Source + ?Sized> RefView<'a, S> {
    /// Creates a view over `source`.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Returns the borrowed source.
    pub fn source(&self) -> &'a S {
        self.source
    }
}

impl<S: ?Sized> Clone for RefView<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for RefView<'_, S> {}

impl<S: ?Sized> std::fmt::Debug for RefView<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RefView {{ .. }}")
    }
}

impl<'a, S: Source + ?Sized> View for RefView<'a, S> {
    type Item = S::Item<'a>;
    type Cursor<'s>
        = S::Cursor<'a>
    where
        Self: 's;

    const CAPABILITIES: Capabilities = S::CAPABILITIES;

    fn cursor(&self) -> Self::Cursor<'_> {
        Source::cursor(self.source)
    }

    fn try_size(&self) -> RangeviewResult<usize> {
        Source::try_length(self.source)
    }

    fn try_at(&self, index: usize) -> RangeviewResult<Self::Item> {
        Source::try_at(self.source, index)
    }

    fn try_back(&self) -> RangeviewResult<Option<Self::Item>> {
        Source::try_back(self.source)
    }
}

impl<'a, S: SizedSource + ?Sized> SizedView for RefView<'a, S> {
    fn size(&self) -> usize {
        SizedSource::length(self.source)
    }
}

impl<'a, S: IndexedSource + ?Sized> RandomAccessView for RefView<'a, S> {
    fn at(&self, index: usize) -> Option<Self::Item> {
        IndexedSource::at(self.source, index)
    }
}

impl<'a, S: BidirectionalSource + ?Sized> BidirectionalView for RefView<'a, S> {
    fn back(&self) -> Option<Self::Item> {
        BidirectionalSource::back(self.source)
    }
}

impl_view_sugar!(['a, S: Source + ?Sized,] RefView<'a, S>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Traversal;
    use std::collections::{BTreeMap, HashMap, LinkedList};

    #[test]
    fn test_ref_view_forwards_capabilities() {
        let vec = vec![1, 2, 3];
        let list: LinkedList<i32> = vec.iter().copied().collect();
        assert_eq!(vec.view().capabilities(), Capabilities::CONTIGUOUS);
        assert_eq!(list.view().capabilities().traversal, Traversal::Bidirectional);
    }

    #[test]
    fn test_ref_view_accessors() {
        let vec = vec![0, 8, 15, 47, 11, 42];
        let view = vec.view();
        assert_eq!(view.size(), 6);
        assert_eq!(view.at(3), Some(&47));
        assert_eq!(view.at(6), None);
        assert_eq!(view.front(), Some(&0));
        assert_eq!(view.back(), Some(&42));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_ref_view_over_list_rejects_indexing() {
        let list: LinkedList<i32> = [0, 8, 15].into_iter().collect();
        let view = list.view();
        assert_eq!(view.size(), 3);
        assert_eq!(view.back(), Some(&15));
        assert!(matches!(
            view.try_at(0),
            Err(RangeviewError::CapabilityViolation {
                operation: Operation::Index,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_source() {
        let vec: Vec<i32> = Vec::new();
        assert!(vec.view().is_empty());
        assert_eq!(vec.view().front(), None);
        assert_eq!(vec.view().back(), None);
    }

    #[test]
    fn test_for_loop_over_view() {
        let vec = vec![1, 2, 3];
        let view = vec.view();
        let mut sum = 0;
        for x in &view {
            sum += x;
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_into_view_accepts_containers_and_views() {
        fn first<V: IntoView>(seq: V) -> Option<<V::View as View>::Item> {
            seq.into_view().front()
        }

        let vec = vec![4, 5, 6];
        assert_eq!(first(&vec), Some(&4));
        assert_eq!(first(vec.view().drop(1)), Some(&5));
        assert_eq!(first(&[7, 8]), Some(&7));
    }

    #[test]
    fn test_associative_sources() {
        let ordered: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(ordered.view().front(), Some((&"a", &1)));

        let unordered: HashMap<&str, i32> = [("a", 1)].into_iter().collect();
        let view = unordered.view();
        assert_eq!(view.size(), 1);
        assert!(view.try_back().is_err());
    }

    #[test]
    fn test_pipe_method() {
        let vec = vec![1, 2, 3, 4];
        let view = vec.view().pipe(crate::pipe::take(2));
        assert_eq!(view.to_vec().unwrap(), vec![&1, &2]);
    }
}
