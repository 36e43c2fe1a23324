// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Core: shared vocabulary for the Canopy composition crates.
//!
//! This crate provides the two types every other Canopy crate speaks:
//!
//! - [`Name`] — a case-insensitive member/event name key. `Label`, `label`,
//!   and `LABEL` all denote the same member; normalization happens once at
//!   construction so registries cannot disagree about a name.
//! - [`Value`] — a type-erased member value. A value is either the explicit
//!   null sentinel ([`Value::null`]), data of any `Clone + 'static` type
//!   ([`Value::new`]), or a callable ([`Value::callable`]) so that
//!   function-valued properties can be invoked through a component's method
//!   fallback.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_core::{Name, Value};
//!
//! // Names compare case-insensitively.
//! assert_eq!(Name::new("Label"), Name::new("label"));
//!
//! // Values carry arbitrary clonable data.
//! let v = Value::new(42_i32);
//! assert_eq!(v.downcast_ref::<i32>(), Some(&42));
//! assert!(!v.is_null());
//!
//! // The null sentinel marks "no value".
//! assert!(Value::null().is_null());
//! ```
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod name;
mod value;

pub use name::Name;
pub use value::{Callable, Value};
