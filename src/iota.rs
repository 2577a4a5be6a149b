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

//! Counting views.

use crate::capability::{Capabilities, Cost, Extent, Traversal};
use crate::result::{RangeviewError, RangeviewResult};
use crate::view::{BidirectionalView, RandomAccessView, SizedView, View, impl_view_sugar};
use num_traits::{CheckedAdd, NumCast, PrimInt};

/// Integer types an iota view can count with.
///
/// Implemented for every primitive integer. Stepping past the bounds of the type ends the
/// sequence instead of wrapping around.
pub trait Step: PrimInt {
    /// Returns `self + n`, or `None` if the result does not fit in `Self`.
    fn forward(self, n: usize) -> Option<Self>;

    /// Returns the number of steps from `start` to `end`, zero if `end` is not after `start`.
    fn distance(start: Self, end: Self) -> usize;
}

impl<T: PrimInt> Step for T {
    fn forward(self, n: usize) -> Option<Self> {
        if let Some(step) = <T as NumCast>::from(n) {
            return CheckedAdd::checked_add(&self, &step);
        }
        // `n` itself does not fit, but `self + n` still might for negative `self`.
        let wide = self.to_i128()?.checked_add(i128::try_from(n).ok()?)?;
        <T as NumCast>::from(wide)
    }

    fn distance(start: Self, end: Self) -> usize {
        if end <= start {
            return 0;
        }
        match (start.to_i128(), end.to_i128()) {
            (Some(start), Some(end)) => end
                .checked_sub(start)
                .and_then(|steps| usize::try_from(steps).ok())
                .unwrap_or(usize::MAX),
            _ => end
                .checked_sub(&start)
                .and_then(|steps| steps.to_usize())
                .unwrap_or(usize::MAX),
        }
    }
}

/// An endless view counting up from `start`.
///
/// # Examples
///
/// ```rust
/// use rangeview::{RandomAccessView, View, views};
///
/// let naturals = views::iota(1);
/// assert_eq!(naturals.at(41), Some(42));
/// assert!(naturals.to_vec().is_err());
/// assert_eq!(naturals.take(4).to_vec().unwrap(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IotaView<T> {
    start: T,
}

impl<T: Step> IotaView<T> {
    /// Creates a view of `start, start + 1, ...`.
    pub fn new(start: T) -> Self {
        Self { start }
    }

    /// Returns the first value.
    pub fn start(&self) -> T {
        self.start
    }

    /// Stops the count before `end`.
    #[must_use]
    pub fn until(self, end: T) -> BoundedIotaView<T> {
        BoundedIotaView::new(self.start, end)
    }
}

impl<T: Step> View for IotaView<T> {
    type Item = T;
    type Cursor<'s>
        = IotaCursor<T>
    where
        Self: 's;

    const CAPABILITIES: Capabilities = Capabilities {
        traversal: Traversal::RandomAccess,
        size: Extent::Infinite,
        indexable: true,
        common: false,
        begin: Cost::Constant,
    };

    fn cursor(&self) -> IotaCursor<T> {
        IotaCursor {
            next: Some(self.start),
            end: None,
        }
    }

    fn try_at(&self, index: usize) -> RangeviewResult<T> {
        self.start
            .forward(index)
            .ok_or(RangeviewError::OutOfBounds { index })
    }

    fn is_empty(&self) -> bool {
        false
    }

    // The count ends at the largest value of `T`.
    fn limit(&self) -> usize {
        T::distance(self.start, T::max_value()).saturating_add(1)
    }
}

impl<T: Step> RandomAccessView for IotaView<T> {
    fn at(&self, index: usize) -> Option<T> {
        self.start.forward(index)
    }
}

impl_view_sugar!([T: Step,] IotaView<T>);

/// A view counting from `start` up to, but not including, `end`.
///
/// An `end` before `start` gives an empty view.
///
/// # Examples
///
/// ```rust
/// use rangeview::{BidirectionalView, SizedView, View, views};
///
/// let view = views::iota_until(1, 100);
/// assert_eq!(view.size(), 99);
/// assert_eq!(view.back(), Some(99));
///
/// let multiples: Vec<_> = view.filter(|n| n % 3 == 0).drop(3).take(8).cursor().collect();
/// assert_eq!(multiples, vec![12, 15, 18, 21, 24, 27, 30, 33]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoundedIotaView<T> {
    start: T,
    end: T,
}

impl<T: Step> BoundedIotaView<T> {
    /// Creates a view of `start, start + 1, ..., end - 1`.
    pub fn new(start: T, end: T) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Returns the first value.
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the value one past the last.
    pub fn end(&self) -> T {
        self.end
    }
}

impl<T: Step> View for BoundedIotaView<T> {
    type Item = T;
    type Cursor<'s>
        = IotaCursor<T>
    where
        Self: 's;

    const CAPABILITIES: Capabilities = Capabilities::CONTIGUOUS;

    fn cursor(&self) -> IotaCursor<T> {
        IotaCursor {
            next: Some(self.start),
            end: Some(self.end),
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

impl<T: Step> SizedView for BoundedIotaView<T> {
    fn size(&self) -> usize {
        T::distance(self.start, self.end)
    }
}

impl<T: Step> RandomAccessView for BoundedIotaView<T> {
    fn at(&self, index: usize) -> Option<T> {
        if index < self.size() {
            self.start.forward(index)
        } else {
            None
        }
    }
}

impl<T: Step> BidirectionalView for BoundedIotaView<T> {
    fn back(&self) -> Option<T> {
        if self.end > self.start {
            Some(self.end - T::one())
        } else {
            None
        }
    }
}

impl_view_sugar!([T: Step,] BoundedIotaView<T>);

/// Cursor of [`IotaView`] and [`BoundedIotaView`].
#[derive(Debug, Clone)]
pub struct IotaCursor<T> {
    next: Option<T>,
    end: Option<T>,
}

impl<T: Step> Iterator for IotaCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.nth(0)
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        let target = self.next?.forward(n);
        match target {
            Some(value) if self.end.is_none_or(|end| value < end) => {
                self.next = value.forward(1);
                Some(value)
            }
            _ => {
                self.next = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.next, self.end) {
            (None, _) => (0, Some(0)),
            (Some(next), Some(end)) => {
                let remaining = T::distance(next, end);
                (remaining, Some(remaining))
            }
            (Some(next), None) => match T::distance(next, T::max_value()).checked_add(1) {
                Some(remaining) => (remaining, Some(remaining)),
                None => (usize::MAX, None),
            },
        }
    }
}
