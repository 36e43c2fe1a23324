// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property access errors.

use canopy_core::Name;
use core::fmt;

/// An error raised by virtual property access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyError {
    /// The member has no getter (on read) or no accessors at all (on write).
    UnknownProperty {
        /// The member name that failed to resolve.
        name: Name,
    },
    /// The member has a getter but no setter; raised on write/clear attempts.
    ReadOnlyProperty {
        /// The member name that was written.
        name: Name,
    },
    /// A typed setter rejected a non-null value of the wrong type.
    TypeMismatch {
        /// The member name that was written.
        name: Name,
        /// The type the setter expects.
        expected: &'static str,
    },
}

impl fmt::Display for PropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProperty { name } => write!(f, "unknown property: {name}"),
            Self::ReadOnlyProperty { name } => write!(f, "read-only property: {name}"),
            Self::TypeMismatch { name, expected } => {
                write!(f, "type mismatch for property {name}: expected {expected}")
            }
        }
    }
}

impl core::error::Error for PropertyError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn error_display() {
        let e = PropertyError::UnknownProperty {
            name: Name::new("Missing"),
        };
        assert_eq!(format!("{e}"), "unknown property: missing");

        let e = PropertyError::ReadOnlyProperty {
            name: Name::new("label"),
        };
        assert_eq!(format!("{e}"), "read-only property: label");

        let e = PropertyError::TypeMismatch {
            name: Name::new("level"),
            expected: "f64",
        };
        assert_eq!(format!("{e}"), "type mismatch for property level: expected f64");
    }
}
