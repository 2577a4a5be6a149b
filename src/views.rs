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

//! Free functions creating views.
//!
//! Each function accepts anything implementing [`IntoView`]: a reference to a container or
//! an existing view. `views::take(&vec, 3)` is the same view as `vec.view().take(3)`.
//!
//! ```rust
//! use rangeview::{View, views};
//!
//! let source = vec![0, 8, 15, 47, 11, 42];
//! let evens = views::filter(&source, |x| **x % 2 == 0);
//! let doubled = views::transform(evens, |x| x * 2);
//! assert_eq!(doubled.to_vec().unwrap(), vec![0, 16, 84]);
//! ```

use crate::drop::DropView;
use crate::filter::FilterView;
use crate::iota::{BoundedIotaView, IotaView, Step};
use crate::iter::IterView;
use crate::owned::OwnedView;
use crate::source::Source;
use crate::take::TakeView;
use crate::transform::{Keys, Pair, TransformView, Values};
use crate::view::{IntoView, RefView, View};
use crate::zip::{Zip3View, ZipView};

/// Borrows every element of `source`.
pub fn all<S: Source + ?Sized>(source: &S) -> RefView<'_, S> {
    RefView::new(source)
}

/// Copies `items` into a view that owns them.
pub fn owned<I: IntoIterator>(items: I) -> OwnedView<I::Item> {
    items.into_iter().collect()
}

/// Wraps a cloneable iterator in a forward-only view.
pub fn from_iter<I>(iter: I) -> IterView<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    IterView::new(iter.into_iter())
}

/// Keeps the first `count` elements of `seq`.
pub fn take<S: IntoView>(seq: S, count: usize) -> TakeView<S::View> {
    TakeView::new(seq.into_view(), count)
}

/// Skips the first `count` elements of `seq`.
pub fn drop<S: IntoView>(seq: S, count: usize) -> DropView<S::View> {
    DropView::new(seq.into_view(), count)
}

/// Keeps the elements of `seq` satisfying `predicate`.
pub fn filter<S, P>(seq: S, predicate: P) -> FilterView<S::View, P>
where
    S: IntoView,
    P: Fn(&<S::View as View>::Item) -> bool,
{
    FilterView::new(seq.into_view(), predicate)
}

/// Replaces every element of `seq` by `f(element)`.
pub fn transform<S, F, U>(seq: S, f: F) -> TransformView<S::View, F>
where
    S: IntoView,
    F: Fn(<S::View as View>::Item) -> U,
{
    TransformView::new(seq.into_view(), f)
}

/// Pairs the elements of `a` and `b` position by position.
pub fn zip<A: IntoView, B: IntoView>(a: A, b: B) -> ZipView<A::View, B::View> {
    ZipView::new(a.into_view(), b.into_view())
}

/// Combines the elements of `a`, `b` and `c` position by position into triples.
///
/// ```rust
/// use rangeview::{SizedView, views};
///
/// let ids = [1, 2, 3];
/// let names = ["ada", "grace", "alan"];
/// let years = [1815, 1906];
/// let view = views::zip3(&ids, &names, &years);
/// assert_eq!(view.size(), 2);
/// ```
pub fn zip3<A, B, C>(a: A, b: B, c: C) -> Zip3View<A::View, B::View, C::View>
where
    A: IntoView,
    B: IntoView,
    C: IntoView,
{
    crate::zip::zip3(a.into_view(), b.into_view(), c.into_view())
}

/// Counts up from `start` without end.
pub fn iota<T: Step>(start: T) -> IotaView<T> {
    IotaView::new(start)
}

/// Counts from `start` up to, but not including, `end`.
pub fn iota_until<T: Step>(start: T, end: T) -> BoundedIotaView<T> {
    BoundedIotaView::new(start, end)
}

/// Keeps the first component of every pair in `seq`.
pub fn keys<S>(seq: S) -> Keys<S::View>
where
    S: IntoView,
    <S::View as View>::Item: Pair,
{
    seq.into_view().keys()
}

/// Keeps the second component of every pair in `seq`.
pub fn values<S>(seq: S) -> Values<S::View>
where
    S: IntoView,
    <S::View as View>::Item: Pair,
{
    seq.into_view().values()
}
