// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event dispatch errors.

use canopy_core::Name;
use core::fmt;

/// An error raised by event registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventError {
    /// The owner does not recognize the name as an event at all.
    ///
    /// Distinct from "recognized but zero handlers", which is never an error.
    UndefinedEvent {
        /// The event name that failed to resolve.
        name: Name,
    },
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedEvent { name } => write!(f, "undefined event: {name}"),
        }
    }
}

impl core::error::Error for EventError {}
