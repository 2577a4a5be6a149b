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

//! Forward-only views over iterators.

use crate::capability::Capabilities;
use crate::source::Category;
use crate::view::{View, impl_view_sugar};

/// A forward-only view replaying a cloneable iterator.
///
/// Every cursor starts from a fresh clone of the stored iterator, so the view can be traversed
/// any number of times. Nothing is known about the iterator beyond that: the view is neither
/// sized nor indexable, and skipping elements means producing them. The iterator must be
/// finite for [`View::to_vec`] to return.
///
/// # Examples
///
/// ```rust
/// use rangeview::{Cost, Operation, View, views};
///
/// let words = views::from_iter("the quick brown fox".split(' '));
/// let tail = words.drop(2);
/// assert_eq!(tail.cost(Operation::Begin), Cost::Linear);
/// assert_eq!(tail.to_vec().unwrap(), vec!["brown", "fox"]);
/// assert!(tail.try_size().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IterView<I> {
    iter: I,
}

impl<I: Iterator + Clone> IterView<I> {
    /// Creates a view replaying `iter`.
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator + Clone> View for IterView<I> {
    type Item = I::Item;
    type Cursor<'s>
        = I
    where
        Self: 's;

    const CAPABILITIES: Capabilities = Category::Synthetic.capabilities();

    fn cursor(&self) -> I {
        self.iter.clone()
    }
}

impl_view_sugar!([I: Iterator + Clone,] IterView<I>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{Extent, Traversal};
    use std::cell::Cell;

    #[test]
    fn test_iter_view_is_forward_only() {
        let view = IterView::new([1, 2, 3].into_iter());
        let caps = view.capabilities();
        assert_eq!(caps.traversal, Traversal::Forward);
        assert_eq!(caps.size, Extent::Unknown);
        assert!(view.try_size().is_err());
        assert!(view.try_at(0).is_err());
        assert!(view.try_back().is_err());
    }

    #[test]
    fn test_iter_view_replays() {
        let view = IterView::new((1..4).map(|x| x * x));
        assert_eq!(view.to_vec().unwrap(), vec![1, 4, 9]);
        assert_eq!(view.to_vec().unwrap(), vec![1, 4, 9]);
        assert_eq!(view.front(), Some(1));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_drop_advances_exactly_count_times() {
        let pulls = Cell::new(0);
        let view = IterView::new((0..10).inspect(|_| pulls.set(pulls.get() + 1))).drop(4);

        let mut cursor = view.cursor();
        assert_eq!(pulls.get(), 4);
        assert_eq!(cursor.next(), Some(4));
        assert_eq!(pulls.get(), 5);
    }
}
