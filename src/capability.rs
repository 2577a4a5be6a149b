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

//! Capability descriptors and the rules that propagate them through view composition.
//!
//! A [`Capabilities`] value answers three questions about a sequence type: how it can be
//! traversed, whether its size is known in constant time, and whether it supports constant
//! time indexed access. Two more fields record whether the last element is reachable without
//! a forward scan and what it costs to reach the first element.
//!
//! Descriptors are `const` and belong to a type, never to a value. Every adaptor computes its
//! own descriptor from its upstream's with one of the `const fn` propagation rules below.

use crate::result::{RangeviewError, RangeviewResult};
use static_assertions::const_assert;
use std::fmt;

/// Direction and granularity in which a sequence can be traversed.
///
/// The variants are ordered: every random-access sequence is also bidirectional, and every
/// bidirectional sequence is also forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Traversal {
    /// Single pass from front to back.
    Forward,
    /// Front to back and back to front.
    Bidirectional,
    /// Any position in constant time.
    RandomAccess,
}

impl Traversal {
    /// Returns the weaker of two traversal categories.
    #[must_use]
    pub const fn weakest(self, other: Traversal) -> Traversal {
        if (self as u8) < (other as u8) {
            self
        } else {
            other
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::Forward => write!(f, "forward-only"),
            Traversal::Bidirectional => write!(f, "bidirectional"),
            Traversal::RandomAccess => write!(f, "random-access"),
        }
    }
}

/// What is known about the number of elements of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    /// The size is available in constant time.
    Known,
    /// The sequence is finite, but counting it requires a full traversal.
    Unknown,
    /// The sequence never ends.
    Infinite,
    /// Counting requires a traversal that may never end, as for a filtered infinite sequence.
    Unbounded,
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Known => write!(f, "sized"),
            Extent::Unknown => write!(f, "unsized"),
            Extent::Infinite => write!(f, "infinite"),
            Extent::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Asymptotic cost class of an operation on a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    /// O(1).
    Constant,
    /// O(k) in the number of elements skipped or tested.
    Linear,
    /// The operation is illegal for this view.
    Unsupported,
}

impl Cost {
    /// Returns the more expensive of two costs.
    #[must_use]
    pub const fn costliest(self, other: Cost) -> Cost {
        if (self as u8) > (other as u8) {
            self
        } else {
            other
        }
    }
}

/// Operations whose legality and cost depend on a view's capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Creating a cursor positioned at the first element.
    Begin,
    /// Testing whether the view has no elements.
    Empty,
    /// Counting the elements.
    Size,
    /// Accessing an element by position.
    Index,
    /// Accessing the first element.
    Front,
    /// Accessing the last element.
    Back,
    /// Materializing every element.
    Collect,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Begin => "begin",
            Operation::Empty => "empty",
            Operation::Size => "size",
            Operation::Index => "index",
            Operation::Front => "front",
            Operation::Back => "back",
            Operation::Collect => "collect",
        };
        f.write_str(name)
    }
}

/// Static capability descriptor of a sequence or view type.
///
/// # Examples
///
/// ```rust
/// use rangeview::{Capabilities, Cost, Operation, Traversal};
///
/// let caps = Capabilities::CONTIGUOUS.drop();
/// assert_eq!(caps.traversal, Traversal::RandomAccess);
/// assert_eq!(caps.cost(Operation::Begin), Cost::Constant);
///
/// let caps = caps.filter();
/// assert_eq!(caps.traversal, Traversal::Forward);
/// assert_eq!(caps.cost(Operation::Size), Cost::Unsupported);
/// assert!(caps.require(Operation::Index).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Traversal category.
    pub traversal: Traversal,
    /// Size knowledge.
    pub size: Extent,
    /// Whether indexed access is constant time.
    pub indexable: bool,
    /// Whether the last element can be reached without scanning from the front.
    pub common: bool,
    /// Cost of reaching the first element.
    pub begin: Cost,
}

impl Capabilities {
    /// Arrays, slices and vectors.
    pub const CONTIGUOUS: Capabilities = Capabilities {
        traversal: Traversal::RandomAccess,
        size: Extent::Known,
        indexable: true,
        common: true,
        begin: Cost::Constant,
    };

    /// Doubly linked nodes and ordered trees.
    pub const BIDIRECTIONAL: Capabilities = Capabilities {
        traversal: Traversal::Bidirectional,
        size: Extent::Known,
        indexable: false,
        common: true,
        begin: Cost::Constant,
    };

    /// Hash tables: sized, but only traversable forward.
    pub const FORWARD_SIZED: Capabilities = Capabilities {
        traversal: Traversal::Forward,
        size: Extent::Known,
        indexable: false,
        common: false,
        begin: Cost::Constant,
    };

    /// Arbitrary single-pass generators.
    pub const FORWARD: Capabilities = Capabilities {
        traversal: Traversal::Forward,
        size: Extent::Unknown,
        indexable: false,
        common: false,
        begin: Cost::Constant,
    };

    /// Whether the size is available in constant time.
    #[must_use]
    pub const fn is_sized(self) -> bool {
        matches!(self.size, Extent::Known)
    }

    /// Whether the sequence never ends.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self.size, Extent::Infinite)
    }

    /// Whether every traversal is guaranteed to end.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self.size, Extent::Known | Extent::Unknown)
    }

    /// Descriptor of a view keeping the first `n` elements.
    ///
    /// Traversal and indexing carry over. An infinite upstream becomes sized, and the end is
    /// only reachable directly when the prefix can be indexed.
    #[must_use]
    pub const fn take(self) -> Capabilities {
        Capabilities {
            traversal: self.traversal,
            size: match self.size {
                Extent::Known | Extent::Infinite => Extent::Known,
                Extent::Unknown | Extent::Unbounded => Extent::Unknown,
            },
            indexable: self.indexable,
            common: self.indexable && matches!(self.size, Extent::Known | Extent::Infinite),
            begin: self.begin,
        }
    }

    /// Descriptor of a view skipping the first `n` elements.
    ///
    /// Only a random-access upstream can jump past the skipped prefix; every other upstream
    /// pays a linear scan to reach the first element.
    #[must_use]
    pub const fn drop(self) -> Capabilities {
        Capabilities {
            traversal: self.traversal,
            size: self.size,
            indexable: self.indexable,
            common: self.common,
            begin: if matches!(self.traversal, Traversal::RandomAccess) {
                self.begin
            } else {
                Cost::Linear
            },
        }
    }

    /// Descriptor of a view keeping the elements that satisfy a predicate.
    ///
    /// The number of matches is never known in advance, even below an infinite upstream, so
    /// no later `take` can make the result sized again.
    #[must_use]
    pub const fn filter(self) -> Capabilities {
        Capabilities {
            traversal: Traversal::Forward,
            size: match self.size {
                Extent::Infinite | Extent::Unbounded => Extent::Unbounded,
                Extent::Known | Extent::Unknown => Extent::Unknown,
            },
            indexable: false,
            common: false,
            begin: Cost::Linear,
        }
    }

    /// Descriptor of a view applying a function to every element.
    #[must_use]
    pub const fn transform(self) -> Capabilities {
        self
    }

    /// Descriptor of a view pairing two sequences position by position.
    #[must_use]
    pub const fn zip(self, other: Capabilities) -> Capabilities {
        let size = match (self.size, other.size) {
            (Extent::Infinite, Extent::Infinite) => Extent::Infinite,
            (Extent::Known | Extent::Infinite, Extent::Known | Extent::Infinite) => Extent::Known,
            (Extent::Unbounded, Extent::Infinite | Extent::Unbounded)
            | (Extent::Infinite, Extent::Unbounded) => Extent::Unbounded,
            _ => Extent::Unknown,
        };
        let indexable = self.indexable && other.indexable;
        Capabilities {
            traversal: self.traversal.weakest(other.traversal),
            size,
            indexable,
            common: indexable && matches!(size, Extent::Known),
            begin: self.begin.costliest(other.begin),
        }
    }

    /// Cost class of `operation` on a view with these capabilities.
    #[must_use]
    pub const fn cost(self, operation: Operation) -> Cost {
        match operation {
            Operation::Begin | Operation::Front => self.begin,
            Operation::Empty => {
                if self.is_sized() {
                    Cost::Constant
                } else {
                    self.begin
                }
            }
            Operation::Size => {
                if self.is_sized() {
                    Cost::Constant
                } else {
                    Cost::Unsupported
                }
            }
            Operation::Index => {
                if self.indexable {
                    Cost::Constant
                } else {
                    Cost::Unsupported
                }
            }
            Operation::Back => {
                if !self.common {
                    Cost::Unsupported
                } else if self.indexable {
                    Cost::Constant
                } else {
                    self.begin
                }
            }
            Operation::Collect => {
                if self.is_finite() {
                    Cost::Linear
                } else {
                    Cost::Unsupported
                }
            }
        }
    }

    /// Returns the cost of `operation`, or a [`RangeviewError::CapabilityViolation`] when the
    /// operation is illegal for these capabilities.
    pub fn require(self, operation: Operation) -> RangeviewResult<Cost> {
        match self.cost(operation) {
            Cost::Unsupported => Err(RangeviewError::violation(operation, self)),
            cost => Ok(cost),
        }
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.traversal, self.size)?;
        if !self.indexable {
            write!(f, ", non-indexable")?;
        }
        Ok(())
    }
}

// Filtering forgets everything, no matter how capable the upstream was.
const_assert!(matches!(Capabilities::CONTIGUOUS.filter().traversal, Traversal::Forward));
const_assert!(!Capabilities::CONTIGUOUS.filter().indexable);
const_assert!(!Capabilities::CONTIGUOUS.filter().is_sized());
// Composition depth does not matter.
const_assert!(matches!(
    Capabilities::CONTIGUOUS.filter().take().drop().traversal,
    Traversal::Forward
));
const_assert!(!Capabilities::CONTIGUOUS.filter().take().drop().is_sized());
const_assert!(
    !Capabilities {
        size: Extent::Infinite,
        ..Capabilities::CONTIGUOUS
    }
    .filter()
    .take()
    .is_sized()
);
// take and drop keep the traversal category.
const_assert!(matches!(
    Capabilities::BIDIRECTIONAL.take().drop().traversal,
    Traversal::Bidirectional
));
const_assert!(matches!(Capabilities::CONTIGUOUS.drop().begin, Cost::Constant));
const_assert!(matches!(Capabilities::BIDIRECTIONAL.drop().begin, Cost::Linear));

#[cfg(test)]
mod tests {
    use super::*;

    const INFINITE: Capabilities = Capabilities {
        traversal: Traversal::RandomAccess,
        size: Extent::Infinite,
        indexable: true,
        common: false,
        begin: Cost::Constant,
    };

    #[test]
    fn test_take_preserves_traversal() {
        for caps in [
            Capabilities::CONTIGUOUS,
            Capabilities::BIDIRECTIONAL,
            Capabilities::FORWARD_SIZED,
            Capabilities::FORWARD,
        ] {
            assert_eq!(caps.take().traversal, caps.traversal);
            assert_eq!(caps.take().indexable, caps.indexable);
        }
    }

    #[test]
    fn test_take_of_infinite_is_sized() {
        let caps = INFINITE.take();
        assert!(caps.is_sized());
        assert!(caps.common);
        assert_eq!(caps.cost(Operation::Collect), Cost::Linear);
    }

    #[test]
    fn test_take_of_list_has_no_back() {
        let caps = Capabilities::BIDIRECTIONAL.take();
        assert_eq!(caps.cost(Operation::Size), Cost::Constant);
        assert_eq!(caps.cost(Operation::Back), Cost::Unsupported);
    }

    #[test]
    fn test_drop_begin_cost() {
        assert_eq!(Capabilities::CONTIGUOUS.drop().cost(Operation::Begin), Cost::Constant);
        assert_eq!(Capabilities::BIDIRECTIONAL.drop().cost(Operation::Begin), Cost::Linear);
        assert_eq!(Capabilities::FORWARD.drop().cost(Operation::Begin), Cost::Linear);
        // Emptiness of a sized drop view is answered from the size alone.
        assert_eq!(Capabilities::BIDIRECTIONAL.drop().cost(Operation::Empty), Cost::Constant);
    }

    #[test]
    fn test_drop_index_requires_indexable_upstream() {
        assert_eq!(Capabilities::CONTIGUOUS.drop().cost(Operation::Index), Cost::Constant);
        assert_eq!(
            Capabilities::BIDIRECTIONAL.drop().cost(Operation::Index),
            Cost::Unsupported
        );
    }

    #[test]
    fn test_filter_downgrades_everything() {
        let caps = Capabilities::CONTIGUOUS.filter();
        assert_eq!(caps.traversal, Traversal::Forward);
        assert_eq!(caps.size, Extent::Unknown);
        assert_eq!(caps.cost(Operation::Begin), Cost::Linear);
        assert_eq!(caps.cost(Operation::Empty), Cost::Linear);
        assert_eq!(caps.cost(Operation::Size), Cost::Unsupported);
        assert_eq!(caps.cost(Operation::Index), Cost::Unsupported);
        assert_eq!(caps.cost(Operation::Back), Cost::Unsupported);
    }

    #[test]
    fn test_filter_of_infinite_is_unbounded() {
        let caps = INFINITE.filter();
        assert_eq!(caps.size, Extent::Unbounded);
        assert!(!caps.is_infinite());
        assert!(!caps.is_finite());
        assert_eq!(caps.cost(Operation::Collect), Cost::Unsupported);
        assert_eq!(caps.drop().cost(Operation::Collect), Cost::Unsupported);
    }

    #[test]
    fn test_take_of_filtered_infinite_is_not_sized() {
        let caps = INFINITE.filter().take();
        assert_eq!(caps.size, Extent::Unknown);
        assert_eq!(caps.cost(Operation::Size), Cost::Unsupported);
        assert_eq!(caps.cost(Operation::Collect), Cost::Linear);
        assert!(!caps.common);
    }

    #[test]
    fn test_zip_takes_weakest() {
        let caps = Capabilities::CONTIGUOUS.zip(Capabilities::BIDIRECTIONAL);
        assert_eq!(caps.traversal, Traversal::Bidirectional);
        assert!(caps.is_sized());
        assert!(!caps.indexable);

        let caps = INFINITE.zip(Capabilities::CONTIGUOUS);
        assert!(caps.is_sized());
        assert!(caps.indexable);
        assert!(caps.common);

        let caps = INFINITE.zip(INFINITE);
        assert!(caps.is_infinite());

        let caps = INFINITE.zip(Capabilities::CONTIGUOUS.filter());
        assert_eq!(caps.size, Extent::Unknown);

        let caps = INFINITE.zip(INFINITE.filter());
        assert_eq!(caps.size, Extent::Unbounded);
        assert_eq!(caps.cost(Operation::Collect), Cost::Unsupported);

        let caps = Capabilities::CONTIGUOUS.zip(INFINITE.filter());
        assert_eq!(caps.size, Extent::Unknown);
        assert_eq!(caps.cost(Operation::Collect), Cost::Linear);
    }

    #[test]
    fn test_require_reports_operation() {
        let caps = Capabilities::FORWARD;
        let err = caps.require(Operation::Size).unwrap_err();
        assert_eq!(
            err,
            RangeviewError::CapabilityViolation {
                operation: Operation::Size,
                capabilities: caps,
            }
        );
        assert_eq!(caps.require(Operation::Front), Ok(Cost::Constant));
    }

    #[test]
    fn test_display() {
        assert_eq!(Capabilities::CONTIGUOUS.to_string(), "random-access, sized");
        assert_eq!(
            Capabilities::CONTIGUOUS.filter().to_string(),
            "forward-only, unsized, non-indexable"
        );
    }
}
