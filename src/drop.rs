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

//! Suffix views.

use crate::capability::{Capabilities, Operation, Traversal};
use crate::result::{RangeviewError, RangeviewResult};
use crate::view::{BidirectionalView, RandomAccessView, SizedView, View, impl_view_sugar};

/// A view skipping the first `count` elements of its upstream.
///
/// On a random-access upstream the first element is reached by jumping past the skipped
/// prefix. Every other upstream has to be advanced `count` times whenever a cursor is created;
/// the view does not remember the position, so cursor creation stays free of side effects and
/// can happen concurrently. Size and indexing are available exactly when the upstream
/// provides them.
///
/// # Examples
///
/// ```rust
/// use rangeview::{Cost, Operation, RandomAccessView, SizedView, Source, View};
/// use std::collections::LinkedList;
///
/// let vec = vec![0, 8, 15, 47, 11, 42];
/// let view = vec.view().drop(3);
/// assert_eq!(view.size(), 3);
/// assert_eq!(view.at(0), Some(&47));
/// assert_eq!(view.cost(Operation::Begin), Cost::Constant);
///
/// let list: LinkedList<i32> = vec.iter().copied().collect();
/// let view = list.view().drop(3);
/// assert_eq!(view.size(), 3);
/// assert_eq!(view.cost(Operation::Begin), Cost::Linear);
/// assert_eq!(view.to_vec().unwrap(), vec![&47, &11, &42]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DropView<V> {
    base: V,
    count: usize,
}

impl<V: View> DropView<V> {
    /// Creates a view skipping the first `count` elements of `base`.
    pub fn new(base: V, count: usize) -> Self {
        Self { base, count }
    }

    /// Returns the upstream view.
    pub fn base(&self) -> &V {
        &self.base
    }

    /// Returns the number of elements skipped.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<V: View> View for DropView<V> {
    type Item = V::Item;
    type Cursor<'s>
        = V::Cursor<'s>
    where
        Self: 's;

    const CAPABILITIES: Capabilities = V::CAPABILITIES.drop();

    fn cursor(&self) -> Self::Cursor<'_> {
        let mut cursor = self.base.cursor();
        if self.count > 0 {
            if V::CAPABILITIES.traversal != Traversal::RandomAccess {
                log::trace!(
                    "advancing a {} cursor past {} elements",
                    V::CAPABILITIES.traversal,
                    self.count
                );
            }
            cursor.nth(self.count - 1);
        }
        cursor
    }

    fn try_size(&self) -> RangeviewResult<usize> {
        Self::CAPABILITIES.require(Operation::Size)?;
        Ok(self.base.try_size()?.saturating_sub(self.count))
    }

    fn try_at(&self, index: usize) -> RangeviewResult<Self::Item> {
        Self::CAPABILITIES.require(Operation::Index)?;
        let position = index
            .checked_add(self.count)
            .ok_or(RangeviewError::OutOfBounds { index })?;
        self.base.try_at(position).map_err(|err| match err {
            RangeviewError::OutOfBounds { .. } => RangeviewError::OutOfBounds { index },
            err => err,
        })
    }

    fn try_back(&self) -> RangeviewResult<Option<Self::Item>> {
        Self::CAPABILITIES.require(Operation::Back)?;
        if self.base.try_size()? > self.count {
            self.base.try_back()
        } else {
            Ok(None)
        }
    }

    fn limit(&self) -> usize {
        match self.base.limit() {
            usize::MAX => usize::MAX,
            limit => limit.saturating_sub(self.count),
        }
    }
}

impl<V: SizedView> SizedView for DropView<V> {
    fn size(&self) -> usize {
        self.base.size().saturating_sub(self.count)
    }
}

impl<V: RandomAccessView> RandomAccessView for DropView<V> {
    fn at(&self, index: usize) -> Option<Self::Item> {
        self.base.at(index.checked_add(self.count)?)
    }
}

impl<V: BidirectionalView> BidirectionalView for DropView<V> {
    fn back(&self) -> Option<Self::Item> {
        if self.base.size() > self.count {
            self.base.back()
        } else {
            None
        }
    }
}

impl_view_sugar!([V: View,] DropView<V>);
