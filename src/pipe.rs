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

//! Range adaptors and `|` composition.
//!
//! Every function in this module returns an adaptor: the parameters of a view operation,
//! waiting for the view to apply them to. `view | adaptor` is the same as `adaptor.apply(view)`
//! and produces the same view as calling the matching [`View`] method. Adaptors can also be
//! combined with `|` before any view is known, which yields another adaptor.
//!
//! ```rust
//! use rangeview::{Source, View, pipe};
//! use std::collections::BTreeMap;
//!
//! let composers: BTreeMap<&str, i32> =
//!     [("Mozart", 1756), ("Bach", 1685), ("Beethoven", 1770)].into_iter().collect();
//!
//! let first_two_names = pipe::take(2) | pipe::keys();
//! let names = composers.view() | first_two_names;
//! assert_eq!(names.to_vec().unwrap(), vec![&"Bach", &"Beethoven"]);
//!
//! let vec = vec![0, 8, 15, 47, 11, 42];
//! let view = vec.view() | pipe::drop(1) | pipe::filter(|x: &&i32| **x % 2 == 1);
//! assert_eq!(view.to_vec().unwrap(), vec![&15, &47, &11]);
//! ```

use crate::drop::DropView;
use crate::filter::FilterView;
use crate::take::TakeView;
use crate::transform::{Keys, Pair, TransformView, Values};
use crate::view::{IntoView, View};
use crate::zip::ZipView;

/// A view operation that has not yet been given its input.
pub trait Adaptor<V: View> {
    /// The view produced by applying the adaptor to `V`.
    type Output: View;

    /// Applies the adaptor to `view`.
    fn apply(self, view: V) -> Self::Output;
}

// `adaptor | adaptor` composition.
macro_rules! impl_adaptor_sugar {
    ([$($gen:tt)*] $ty:ty) => {
        impl<$($gen)* __N> std::ops::BitOr<__N> for $ty {
            type Output = Composed<Self, __N>;

            fn bitor(self, next: __N) -> Composed<Self, __N> {
                Composed {
                    first: self,
                    second: next,
                }
            }
        }
    };
}

/// Adaptor created by [`take`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeAdaptor {
    count: usize,
}

impl<V: View> Adaptor<V> for TakeAdaptor {
    type Output = TakeView<V>;

    fn apply(self, view: V) -> TakeView<V> {
        TakeView::new(view, self.count)
    }
}

impl_adaptor_sugar!([] TakeAdaptor);

/// Adaptor created by [`drop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropAdaptor {
    count: usize,
}

impl<V: View> Adaptor<V> for DropAdaptor {
    type Output = DropView<V>;

    fn apply(self, view: V) -> DropView<V> {
        DropView::new(view, self.count)
    }
}

impl_adaptor_sugar!([] DropAdaptor);

/// Adaptor created by [`filter`].
#[derive(Clone, Copy)]
pub struct FilterAdaptor<P> {
    predicate: P,
}

impl<V, P> Adaptor<V> for FilterAdaptor<P>
where
    V: View,
    P: Fn(&V::Item) -> bool,
{
    type Output = FilterView<V, P>;

    fn apply(self, view: V) -> FilterView<V, P> {
        FilterView::new(view, self.predicate)
    }
}

impl<P> std::fmt::Debug for FilterAdaptor<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FilterAdaptor {{ .. }}")
    }
}

impl_adaptor_sugar!([P,] FilterAdaptor<P>);

/// Adaptor created by [`transform`].
#[derive(Clone, Copy)]
pub struct TransformAdaptor<F> {
    f: F,
}

impl<V, F, U> Adaptor<V> for TransformAdaptor<F>
where
    V: View,
    F: Fn(V::Item) -> U,
{
    type Output = TransformView<V, F>;

    fn apply(self, view: V) -> TransformView<V, F> {
        TransformView::new(view, self.f)
    }
}

impl<F> std::fmt::Debug for TransformAdaptor<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransformAdaptor {{ .. }}")
    }
}

impl_adaptor_sugar!([F,] TransformAdaptor<F>);

/// Adaptor created by [`zip`].
#[derive(Debug, Clone, Copy)]
pub struct ZipAdaptor<B> {
    other: B,
}

impl<V: View, B: View> Adaptor<V> for ZipAdaptor<B> {
    type Output = ZipView<V, B>;

    fn apply(self, view: V) -> ZipView<V, B> {
        ZipView::new(view, self.other)
    }
}

impl_adaptor_sugar!([B,] ZipAdaptor<B>);

/// Adaptor created by [`keys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeysAdaptor;

impl<V> Adaptor<V> for KeysAdaptor
where
    V: View,
    V::Item: Pair,
{
    type Output = Keys<V>;

    fn apply(self, view: V) -> Keys<V> {
        view.keys()
    }
}

impl_adaptor_sugar!([] KeysAdaptor);

/// Adaptor created by [`values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuesAdaptor;

impl<V> Adaptor<V> for ValuesAdaptor
where
    V: View,
    V::Item: Pair,
{
    type Output = Values<V>;

    fn apply(self, view: V) -> Values<V> {
        view.values()
    }
}

impl_adaptor_sugar!([] ValuesAdaptor);

/// Two adaptors applied one after the other, created by `first | second`.
#[derive(Debug, Clone, Copy)]
pub struct Composed<A1, A2> {
    first: A1,
    second: A2,
}

impl<V, A1, A2> Adaptor<V> for Composed<A1, A2>
where
    V: View,
    A1: Adaptor<V>,
    A2: Adaptor<A1::Output>,
{
    type Output = A2::Output;

    fn apply(self, view: V) -> A2::Output {
        self.second.apply(self.first.apply(view))
    }
}

impl_adaptor_sugar!([A1, A2,] Composed<A1, A2>);

/// Keeps the first `count` elements. See [`View::take`].
#[must_use]
pub fn take(count: usize) -> TakeAdaptor {
    TakeAdaptor { count }
}

/// Skips the first `count` elements. See [`View::drop`].
#[must_use]
pub fn drop(count: usize) -> DropAdaptor {
    DropAdaptor { count }
}

/// Keeps the elements satisfying `predicate`. See [`View::filter`].
///
/// The element type is not known until the adaptor is applied, so closures usually need
/// their parameter type spelled out.
pub fn filter<P>(predicate: P) -> FilterAdaptor<P> {
    FilterAdaptor { predicate }
}

/// Replaces every element by `f(element)`. See [`View::transform`].
pub fn transform<F>(f: F) -> TransformAdaptor<F> {
    TransformAdaptor { f }
}

/// Pairs every element with the element of `other` at the same position. See [`View::zip`].
pub fn zip<B: IntoView>(other: B) -> ZipAdaptor<B::View> {
    ZipAdaptor {
        other: other.into_view(),
    }
}

/// Keeps the first component of every pair. See [`View::keys`].
#[must_use]
pub fn keys() -> KeysAdaptor {
    KeysAdaptor
}

/// Keeps the second component of every pair. See [`View::values`].
#[must_use]
pub fn values() -> ValuesAdaptor {
    ValuesAdaptor
}
