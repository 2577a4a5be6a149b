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

//! Error types and results for the Rangeview library.

use crate::capability::{Capabilities, Operation};
use thiserror::Error;

/// A specialized Result type for Rangeview operations.
pub type RangeviewResult<T> = Result<T, RangeviewError>;

/// Errors that can occur during Rangeview operations.
///
/// Every variant is a programming error surfaced as early as possible. Illegal operations on
/// statically known views do not compile at all; these errors are what the checked accessors
/// (`try_size`, `try_at`, `try_back`, `to_vec`) report instead of silently scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeviewError {
    /// The operation is not supported by the view's capabilities.
    #[error("`{operation}` is not supported by a {capabilities} view")]
    CapabilityViolation {
        /// The rejected operation.
        operation: Operation,
        /// Capabilities of the view the operation was requested on.
        capabilities: Capabilities,
    },
    /// The requested position lies past the end of the view.
    #[error("index {index} is out of bounds")]
    OutOfBounds {
        /// The rejected position.
        index: usize,
    },
    /// The requested subrange starts after it ends.
    #[error("range {start}..{end} starts after it ends")]
    InvalidRange {
        /// First position of the subrange.
        start: usize,
        /// One past the last position of the subrange.
        end: usize,
    },
}

impl RangeviewError {
    pub(crate) fn violation(operation: Operation, capabilities: Capabilities) -> Self {
        log::debug!("rejecting `{operation}` on a {capabilities} view");
        RangeviewError::CapabilityViolation {
            operation,
            capabilities,
        }
    }
}
