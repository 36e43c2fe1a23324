// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior lifecycle errors.

use alloc::string::String;
use canopy_core::Name;
use core::fmt;

/// An error raised by behavior attachment or lifecycle misuse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BehaviorError {
    /// A declared event binding names a method the behavior does not expose.
    ///
    /// Raised at attach time, before any handler is registered, so a behavior
    /// with a bad binding never ends up half-attached.
    InvalidHandler {
        /// The event the binding targets.
        event: Name,
        /// The behavior method the binding names.
        method: Name,
    },
    /// A lifecycle or usage rule was violated.
    InvalidOperation {
        /// Human-readable description of the misuse.
        reason: String,
    },
}

impl BehaviorError {
    /// Creates an [`BehaviorError::InvalidOperation`] from a reason string.
    #[must_use]
    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BehaviorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHandler { event, method } => {
                write!(f, "invalid handler: event '{event}' is bound to missing method '{method}'")
            }
            Self::InvalidOperation { reason } => write!(f, "invalid operation: {reason}"),
        }
    }
}

impl core::error::Error for BehaviorError {}
