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

//! Element-wise mapping views, and key/value projections built on top of them.

use crate::capability::Capabilities;
use crate::result::RangeviewResult;
use crate::view::{BidirectionalView, RandomAccessView, SizedView, View, impl_view_sugar};

/// A view replacing every upstream element `x` by `f(x)`.
///
/// `f` is applied once per element a cursor actually produces, never ahead of time, so the
/// view has exactly the capabilities of its upstream.
///
/// # Examples
///
/// ```rust
/// use rangeview::{RandomAccessView, Source, View};
///
/// let source = vec![42, 9, 0, 16, 7, -1, 13];
/// let view = source.view().take(3).transform(|x| -x);
///
/// let mut cursor = view.cursor();
/// assert_eq!(cursor.next(), Some(-42));
/// assert_eq!(cursor.next(), Some(-9));
/// assert_eq!(view.at(2), Some(0));
/// ```
#[derive(Clone, Copy)]
pub struct TransformView<V, F> {
    base: V,
    f: F,
}

impl<V, F, U> TransformView<V, F>
where
    V: View,
    F: Fn(V::Item) -> U,
{
    /// Creates a view applying `f` to every element of `base`.
    pub fn new(base: V, f: F) -> Self {
        Self { base, f }
    }

    /// Returns the upstream view.
    pub fn base(&self) -> &V {
        &self.base
    }
}

impl<V, F> std::fmt::Debug for TransformView<V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransformView {{ .. }}")
    }
}

impl<V, F, U> View for TransformView<V, F>
where
    V: View,
    F: Fn(V::Item) -> U,
{
    type Item = U;
    type Cursor<'s>
        = TransformCursor<'s, V::Cursor<'s>, F>
    where
        Self: 's;

    const CAPABILITIES: Capabilities = V::CAPABILITIES.transform();

    fn cursor(&self) -> Self::Cursor<'_> {
        TransformCursor {
            inner: self.base.cursor(),
            f: &self.f,
        }
    }

    fn try_size(&self) -> RangeviewResult<usize> {
        self.base.try_size()
    }

    fn try_at(&self, index: usize) -> RangeviewResult<U> {
        self.base.try_at(index).map(&self.f)
    }

    fn try_back(&self) -> RangeviewResult<Option<U>> {
        Ok(self.base.try_back()?.map(&self.f))
    }

    fn limit(&self) -> usize {
        self.base.limit()
    }
}

impl<V, F, U> SizedView for TransformView<V, F>
where
    V: SizedView,
    F: Fn(V::Item) -> U,
{
    fn size(&self) -> usize {
        self.base.size()
    }
}

impl<V, F, U> RandomAccessView for TransformView<V, F>
where
    V: RandomAccessView,
    F: Fn(V::Item) -> U,
{
    fn at(&self, index: usize) -> Option<U> {
        self.base.at(index).map(&self.f)
    }
}

impl<V, F, U> BidirectionalView for TransformView<V, F>
where
    V: BidirectionalView,
    F: Fn(V::Item) -> U,
{
    fn back(&self) -> Option<U> {
        self.base.back().map(&self.f)
    }
}

impl_view_sugar!([V: View, F,] TransformView<V, F>);

/// Cursor of a [`TransformView`].
pub struct TransformCursor<'s, C, F> {
    inner: C,
    f: &'s F,
}

impl<C: Clone, F> Clone for TransformCursor<'_, C, F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            f: self.f,
        }
    }
}

impl<C, F> std::fmt::Debug for TransformCursor<'_, C, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransformCursor {{ .. }}")
    }
}

impl<C, F, U> Iterator for TransformCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.inner.next().map(self.f)
    }

    // Skipped elements are never passed to `f`.
    fn nth(&mut self, n: usize) -> Option<U> {
        self.inner.nth(n).map(self.f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Two-component elements, such as the entries of an associative container.
pub trait Pair {
    /// The first component, the key of a map entry.
    type First;
    /// The second component, the value of a map entry.
    type Second;

    /// Returns the first component.
    fn into_first(self) -> Self::First;

    /// Returns the second component.
    fn into_second(self) -> Self::Second;
}

impl<A, B> Pair for (A, B) {
    type First = A;
    type Second = B;

    fn into_first(self) -> A {
        self.0
    }

    fn into_second(self) -> B {
        self.1
    }
}

impl<'a, A, B> Pair for &'a (A, B) {
    type First = &'a A;
    type Second = &'a B;

    fn into_first(self) -> &'a A {
        &self.0
    }

    fn into_second(self) -> &'a B {
        &self.1
    }
}

/// A view of the first component of every element, created by [`View::keys`].
pub type Keys<V> =
    TransformView<V, fn(<V as View>::Item) -> <<V as View>::Item as Pair>::First>;

/// A view of the second component of every element, created by [`View::values`].
pub type Values<V> =
    TransformView<V, fn(<V as View>::Item) -> <<V as View>::Item as Pair>::Second>;
