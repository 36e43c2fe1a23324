// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case-insensitive member and event name keys.

use alloc::string::String;
use core::fmt;

/// A member or event name, matched case-insensitively.
///
/// Names are normalized to ASCII lowercase at construction, so two names that
/// differ only in ASCII case are equal and hash identically. This is a
/// deliberate compatibility choice: consumers that spell a member `Label` at
/// registration time and `label` at lookup time address the same slot.
///
/// # Example
///
/// ```rust
/// use canopy_core::Name;
///
/// let a = Name::new("BeforeValidate");
/// let b = Name::new("beforevalidate");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "beforevalidate");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    /// Creates a name, normalizing it to ASCII lowercase.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_ascii_lowercase())
    }

    /// Returns the normalized (lowercase) name.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    #[inline]
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(mut name: String) -> Self {
        name.make_ascii_lowercase();
        Self(name)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Name").field(&self.0).finish()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
