// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Property: virtual property accessor tables.
//!
//! A *virtual property* is a named value accessed through getter/setter
//! functions rather than a stored field. This crate provides [`Accessors`],
//! a per-type registration table built once at construction time that maps
//! member names to getter/setter pairs and preserves the three-way contract
//! between readable, writable, and undefined members:
//!
//! - reading an undefined member fails with [`PropertyError::UnknownProperty`];
//! - writing a member that has a getter but no setter fails with
//!   [`PropertyError::ReadOnlyProperty`];
//! - writing a member with no accessors at all fails with
//!   [`PropertyError::UnknownProperty`];
//! - writing a non-null value of the wrong type through a typed setter fails
//!   with [`PropertyError::TypeMismatch`].
//!
//! Write-only members (setter without getter) are representable; reading one
//! fails with `UnknownProperty`.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_property::{Accessors, PropertyError};
//! use canopy_core::Value;
//!
//! struct Label {
//!     text: String,
//! }
//!
//! let accessors = Accessors::new()
//!     .read("label", |l: &Label| l.text.clone())
//!     .write("label", |l: &mut Label, v: Option<String>| {
//!         l.text = v.unwrap_or_default();
//!     });
//!
//! let mut label = Label { text: String::from("x") };
//!
//! assert!(accessors.can_get("Label"));
//! let value = accessors.get(&label, "label").unwrap();
//! assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("x"));
//!
//! accessors.set(&mut label, "label", Value::new(String::from("y"))).unwrap();
//! assert_eq!(label.text, "y");
//!
//! // Clearing passes the null sentinel through the setter.
//! accessors.clear(&mut label, "label").unwrap();
//! assert_eq!(label.text, "");
//! ```
//!
//! Member names are matched case-insensitively (see [`canopy_core::Name`]).
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod error;
mod table;

pub use error::PropertyError;
pub use table::{Accessors, Getter, Setter};
