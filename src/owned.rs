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

//! Views that own their elements.

use crate::capability::Capabilities;
use crate::result::{RangeviewError, RangeviewResult};
use crate::view::{BidirectionalView, RandomAccessView, SizedView, View, impl_view_sugar};
use std::slice;
use std::sync::Arc;

/// A contiguous view owning a shared, immutable copy of its elements.
///
/// Cloning the view clones a reference count, not the elements. Unlike views that borrow a
/// container, an `OwnedView` is `'static` whenever `T` is, so it can be moved into spawned
/// threads or returned from functions. Cursors produce clones of the stored elements.
///
/// # Examples
///
/// ```rust
/// use rangeview::{SizedView, View, views};
///
/// let view = views::owned(vec![0, 8, 15, 47, 11, 42]).drop(2);
///
/// let handle = std::thread::spawn(move || view.cursor().sum::<i32>());
/// assert_eq!(handle.join().unwrap(), 115);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OwnedView<T> {
    data: Arc<[T]>,
}

impl<T> OwnedView<T> {
    /// Creates a view owning `data`.
    pub fn new(data: impl Into<Arc<[T]>>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the stored elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> FromIterator<T> for OwnedView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> std::fmt::Debug for OwnedView<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OwnedView {{ len: {} }}", self.data.len())
    }
}

impl<T: Clone> View for OwnedView<T> {
    type Item = T;
    type Cursor<'s>
        = OwnedCursor<'s, T>
    where
        Self: 's;

    const CAPABILITIES: Capabilities = Capabilities::CONTIGUOUS;

    fn cursor(&self) -> OwnedCursor<'_, T> {
        OwnedCursor {
            inner: self.data.iter(),
        }
    }

    fn try_size(&self) -> RangeviewResult<usize> {
        Ok(self.size())
    }

    fn try_at(&self, index: usize) -> RangeviewResult<T> {
        self.at(index).ok_or(RangeviewError::OutOfBounds { index })
    }

    fn try_back(&self) -> RangeviewResult<Option<T>> {
        Ok(self.back())
    }
}

impl<T: Clone> SizedView for OwnedView<T> {
    fn size(&self) -> usize {
        self.data.len()
    }
}

impl<T: Clone> RandomAccessView for OwnedView<T> {
    fn at(&self, index: usize) -> Option<T> {
        self.data.get(index).cloned()
    }
}

impl<T: Clone> BidirectionalView for OwnedView<T> {
    fn back(&self) -> Option<T> {
        self.data.last().cloned()
    }
}

impl_view_sugar!([T: Clone,] OwnedView<T>);

/// Cursor of an [`OwnedView`].
///
/// Elements skipped with [`Iterator::nth`] are not cloned.
#[derive(Debug, Clone)]
pub struct OwnedCursor<'s, T> {
    inner: slice::Iter<'s, T>,
}

impl<T: Clone> Iterator for OwnedCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().cloned()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n).cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Clone> DoubleEndedIterator for OwnedCursor<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().cloned()
    }
}

impl<T: Clone> ExactSizeIterator for OwnedCursor<'_, T> {}
