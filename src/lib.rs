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

//! # Rangeview
//!
//! A Rust library of lazy, composable views over existing sequences. A view describes a
//! pipeline (take a prefix, skip a prefix, filter, transform, zip, count, project keys or
//! values) without materializing any intermediate result, and carries a static capability
//! descriptor that decides which operations are constant time, which are linear and which are
//! not available at all.
//!
//! ## Key Features
//!
//! - **Lazy Evaluation**: Building a view never touches an element; work happens one element at a time as a cursor is advanced
//! - **Capability Tracking**: Every view type knows at compile time how it can be traversed, whether its size is known, and whether it can be indexed
//! - **Static Gating**: `size`, `at` and `back` only exist on views that support them in constant time
//! - **Checked Access**: `try_size`, `try_at` and `try_back` report a `CapabilityViolation` instead of silently scanning
//! - **Pipe Composition**: `view | pipe::take(3) | pipe::keys()` reads left to right and equals nested calls
//! - **Standard Containers**: Works over vectors, arrays, slices, deques, linked lists, B-trees and hash tables out of the box
//!
//! ## Usage Examples
//!
//! ### Composing Views
//!
//! ```rust
//! use rangeview::{RandomAccessView, SizedView, Source, View};
//!
//! let source = vec![0, 8, 15, 47, 11, 42];
//!
//! // Views borrow the source and do nothing until traversed
//! let view = source.view().drop(1).take(3).transform(|x| x * 2);
//! assert_eq!(view.size(), 3);
//! assert_eq!(view.at(0), Some(16));
//! assert_eq!(view.to_vec().unwrap(), vec![16, 30, 94]);
//!
//! // Views are iterable by reference
//! for value in &view {
//!     assert_eq!(value % 2, 0);
//! }
//! ```
//!
//! ### Pipe Syntax
//!
//! ```rust
//! use rangeview::{View, pipe, views};
//!
//! let labels = views::iota_until(1, 100)
//!     | pipe::filter(|n: &i32| n % 3 == 0)
//!     | pipe::drop(3)
//!     | pipe::take(8)
//!     | pipe::transform(|n: i32| format!("{n}s"));
//!
//! assert_eq!(
//!     labels.to_vec().unwrap(),
//!     vec!["12s", "15s", "18s", "21s", "24s", "27s", "30s", "33s"]
//! );
//! ```
//!
//! ## Capabilities
//!
//! Each view type has one [`Capabilities`] descriptor, derived from its upstream's:
//!
//! - `take`, `drop`, `transform`, `keys` and `values` keep the upstream traversal category
//! - `filter` is always forward-only, unsized and not indexable
//! - `zip` takes the weaker side on every axis
//! - `drop` reaches its first element in constant time only over a random-access upstream
//!
//! ```rust
//! use rangeview::{Cost, Operation, Source, Traversal, View};
//! use std::collections::LinkedList;
//!
//! let list: LinkedList<i32> = [0, 8, 15, 47].into_iter().collect();
//! let view = list.view().drop(2);
//!
//! assert_eq!(view.capabilities().traversal, Traversal::Bidirectional);
//! assert_eq!(view.cost(Operation::Begin), Cost::Linear);
//! assert!(view.try_at(0).is_err());
//! ```
//!
//! ## Custom Container Support
//!
//! To build views over a custom container, implement the [`Source`] trait with the
//! [`Category`] describing its structure, plus [`SizedSource`], [`IndexedSource`] and
//! [`BidirectionalSource`] where the category supports them.
//!
//! ## Error Handling
//!
//! Checked operations return `RangeviewResult<T>` which can contain the following errors:
//!
//! - `RangeviewError::CapabilityViolation`: The view cannot perform the operation without a scan
//! - `RangeviewError::OutOfBounds`: The requested position is past the end of the view
//! - `RangeviewError::InvalidRange`: A subrange starts after it ends
//!
//! ## Thread Safety
//!
//! Creating a cursor never modifies a view, so a view whose parts are `Sync` can be shared by
//! reference between threads, each traversing it with its own cursor. A borrowed source cannot
//! be modified while views over it exist. [`OwnedView`] owns its elements and can be moved into
//! spawned threads.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod capability;
mod drop;
mod filter;
mod iota;
mod iter;
mod owned;
pub mod pipe;
mod result;
mod source;
mod take;
mod transform;
mod view;
pub mod views;
mod zip;

pub use self::capability::{Capabilities, Cost, Extent, Operation, Traversal};
pub use self::drop::DropView;
pub use self::filter::{FilterCursor, FilterView};
pub use self::iota::{BoundedIotaView, IotaCursor, IotaView, Step};
pub use self::iter::IterView;
pub use self::owned::{OwnedCursor, OwnedView};
pub use self::result::{RangeviewError, RangeviewResult};
pub use self::source::{
    BidirectionalSource, Category, IndexedSource, SizedSource, Source, classify,
};
pub use self::take::{TakeCursor, TakeView};
pub use self::transform::{Keys, Pair, TransformCursor, TransformView, Values};
pub use self::view::{BidirectionalView, IntoView, RandomAccessView, RefView, SizedView, View};
pub use self::zip::{Zip3View, ZipCursor, ZipView};
