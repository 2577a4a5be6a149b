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

//! Prefix views.

use crate::capability::{Capabilities, Operation};
use crate::result::{RangeviewError, RangeviewResult};
use crate::view::{BidirectionalView, RandomAccessView, SizedView, View, impl_view_sugar};

/// A view of the first `count` elements of its upstream, or all of them if there are fewer.
///
/// Reaching the first element costs what it costs upstream. The size is known whenever the
/// upstream size is known or the upstream never ends; indexing forwards to the upstream
/// after a bounds check against `count`.
///
/// # Examples
///
/// ```rust
/// use rangeview::{RandomAccessView, SizedView, Source, View};
///
/// let source = vec![0, 8, 15, 47, 11, 42];
/// let view = source.view().take(3);
///
/// assert_eq!(view.size(), 3);
/// assert_eq!(view.at(2), Some(&15));
/// assert_eq!(view.at(3), None);
/// assert_eq!(view.to_vec().unwrap(), vec![&0, &8, &15]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TakeView<V> {
    base: V,
    count: usize,
}

impl<V: View> TakeView<V> {
    /// Creates a view of the first `count` elements of `base`.
    pub fn new(base: V, count: usize) -> Self {
        Self { base, count }
    }

    /// Returns the upstream view.
    pub fn base(&self) -> &V {
        &self.base
    }

    /// Returns the maximum number of elements kept.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<V: View> View for TakeView<V> {
    type Item = V::Item;
    type Cursor<'s>
        = TakeCursor<V::Cursor<'s>>
    where
        Self: 's;

    const CAPABILITIES: Capabilities = V::CAPABILITIES.take();

    fn cursor(&self) -> Self::Cursor<'_> {
        TakeCursor {
            inner: self.base.cursor(),
            remaining: self.count,
        }
    }

    fn try_size(&self) -> RangeviewResult<usize> {
        Self::CAPABILITIES.require(Operation::Size)?;
        if V::CAPABILITIES.is_infinite() {
            Ok(self.base.limit().min(self.count))
        } else {
            Ok(self.base.try_size()?.min(self.count))
        }
    }

    fn try_at(&self, index: usize) -> RangeviewResult<Self::Item> {
        Self::CAPABILITIES.require(Operation::Index)?;
        if index >= self.count {
            return Err(RangeviewError::OutOfBounds { index });
        }
        self.base.try_at(index)
    }

    fn try_back(&self) -> RangeviewResult<Option<Self::Item>> {
        Self::CAPABILITIES.require(Operation::Back)?;
        match self.try_size()? {
            0 => Ok(None),
            size => self.base.try_at(size - 1).map(Some),
        }
    }
}

impl<V: SizedView> SizedView for TakeView<V> {
    fn size(&self) -> usize {
        self.base.size().min(self.count)
    }
}

impl<V: RandomAccessView> RandomAccessView for TakeView<V> {
    fn at(&self, index: usize) -> Option<Self::Item> {
        if index < self.count {
            self.base.at(index)
        } else {
            None
        }
    }
}

// Without indexing, the end of a prefix is only found by walking to it.
impl<V: RandomAccessView + SizedView> BidirectionalView for TakeView<V> {
    fn back(&self) -> Option<Self::Item> {
        match self.size() {
            0 => None,
            size => self.base.at(size - 1),
        }
    }
}

impl_view_sugar!([V: View,] TakeView<V>);

/// Cursor of a [`TakeView`].
#[derive(Debug, Clone)]
pub struct TakeCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C: Iterator> Iterator for TakeCursor<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.inner.next()
    }

    fn nth(&mut self, n: usize) -> Option<C::Item> {
        if n >= self.remaining {
            self.remaining = 0;
            return None;
        }
        self.remaining -= n + 1;
        self.inner.nth(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.inner.size_hint();
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;
    use std::collections::LinkedList;

    #[test]
    fn test_take_prefix() {
        let vec = vec![0, 8, 15, 47, 11, 42];
        assert_eq!(vec.view().take(3).to_vec().unwrap(), vec![&0, &8, &15]);
    }

    #[test]
    fn test_take_more_than_available() {
        let vec = vec![0, 8, 15];
        let view = vec.view().take(10);
        assert_eq!(view.size(), 3);
        assert_eq!(view.try_size(), Ok(3));
        assert_eq!(view.to_vec().unwrap().len(), 3);
        assert_eq!(view.back(), Some(&15));
    }

    #[test]
    fn test_take_zero() {
        let vec = vec![0, 8, 15];
        let view = vec.view().take(0);
        assert!(view.is_empty());
        assert_eq!(view.back(), None);
        assert_eq!(view.cursor().next(), None);
    }

    #[test]
    fn test_take_bounds_checks_index() {
        let vec = vec![0, 8, 15, 47];
        let view = vec.view().take(2);
        assert_eq!(view.try_at(1), Ok(&8));
        assert_eq!(view.try_at(2), Err(RangeviewError::OutOfBounds { index: 2 }));
    }

    #[test]
    fn test_take_over_list_is_sized_without_back() {
        let list: LinkedList<i32> = [0, 8, 15, 47].into_iter().collect();
        let view = list.view().take(3);
        assert_eq!(view.size(), 3);
        assert!(matches!(
            view.try_back(),
            Err(RangeviewError::CapabilityViolation {
                operation: Operation::Back,
                ..
            })
        ));
    }

    #[test]
    fn test_cursor_nth() {
        let vec = vec![1, 2, 3, 4, 5];
        let view = vec.view().take(4);
        let mut cursor = view.cursor();
        assert_eq!(cursor.nth(2), Some(&3));
        assert_eq!(cursor.next(), Some(&4));
        assert_eq!(cursor.next(), None);

        let mut cursor = view.cursor();
        assert_eq!(cursor.nth(4), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_cursor_size_hint() {
        let vec = vec![1, 2, 3, 4, 5];
        assert_eq!(vec.view().take(3).cursor().size_hint(), (3, Some(3)));
        assert_eq!(vec.view().take(9).cursor().size_hint(), (5, Some(5)));
    }
}
