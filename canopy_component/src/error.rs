// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The facade error type.

use core::fmt;

use canopy_behavior::BehaviorError;
use canopy_core::Name;
use canopy_event::EventError;
use canopy_property::PropertyError;

/// An error raised by a dynamic member operation on a component.
///
/// Each subsystem keeps its own error type; this enum is the single surface
/// the facade reports through, with `From` conversions so subsystem results
/// propagate with `?`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComponentError {
    /// A property access failed.
    Property(PropertyError),
    /// An event operation failed.
    Event(EventError),
    /// A behavior operation failed.
    Behavior(BehaviorError),
    /// A dynamic invocation named a method nothing resolves.
    UnknownMethod {
        /// The requested method name.
        name: Name,
    },
    /// A member exists but cannot accept the kind of assignment requested,
    /// such as an event handler written to a data property.
    InvalidAssignment {
        /// The member the assignment targeted.
        name: Name,
    },
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property(e) => e.fmt(f),
            Self::Event(e) => e.fmt(f),
            Self::Behavior(e) => e.fmt(f),
            Self::UnknownMethod { name } => write!(f, "unknown method '{name}'"),
            Self::InvalidAssignment { name } => {
                write!(f, "invalid assignment to member '{name}'")
            }
        }
    }
}

impl core::error::Error for ComponentError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Property(e) => Some(e),
            Self::Event(e) => Some(e),
            Self::Behavior(e) => Some(e),
            Self::UnknownMethod { .. } | Self::InvalidAssignment { .. } => None,
        }
    }
}

impl From<PropertyError> for ComponentError {
    fn from(e: PropertyError) -> Self {
        Self::Property(e)
    }
}

impl From<EventError> for ComponentError {
    fn from(e: EventError) -> Self {
        Self::Event(e)
    }
}

impl From<BehaviorError> for ComponentError {
    fn from(e: BehaviorError) -> Self {
        Self::Behavior(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use core::error::Error;

    #[test]
    fn wraps_subsystem_errors() {
        let e: ComponentError = PropertyError::UnknownProperty {
            name: Name::new("x"),
        }
        .into();
        assert!(matches!(e, ComponentError::Property(_)));
        assert!(e.source().is_some());

        let e: ComponentError = EventError::UndefinedEvent {
            name: Name::new("x"),
        }
        .into();
        assert!(matches!(e, ComponentError::Event(_)));

        let e: ComponentError = BehaviorError::invalid_operation("no").into();
        assert!(matches!(e, ComponentError::Behavior(_)));
    }

    #[test]
    fn display() {
        let e = ComponentError::UnknownMethod {
            name: Name::new("run"),
        };
        assert_eq!(format!("{e}"), "unknown method 'run'");
        assert!(e.source().is_none());

        let e = ComponentError::InvalidAssignment {
            name: Name::new("click"),
        };
        assert_eq!(format!("{e}"), "invalid assignment to member 'click'");
    }
}
