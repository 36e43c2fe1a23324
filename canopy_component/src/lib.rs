// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Component: the unified dynamic member facade.
//!
//! A *component* is a type that composes the three Canopy subsystems behind
//! one case-insensitive member namespace:
//!
//! - virtual properties, backed by a per-type [`Accessors`] table
//!   ([`canopy_property`]);
//! - named events with ordered, interruptible handler chains
//!   ([`canopy_event`]);
//! - attached behaviors contributing delegated properties, methods, and event
//!   handlers ([`canopy_behavior`]).
//!
//! Implement [`Component`] by embedding a [`ComponentCore`] and exposing the
//! type's accessor table; the blanket [`ComponentExt`] extension then
//! provides the member protocol: [`get_member`](ComponentExt::get_member),
//! [`set_member`](ComponentExt::set_member),
//! [`has_member`](ComponentExt::has_member),
//! [`clear_member`](ComponentExt::clear_member),
//! [`call_member`](ComponentExt::call_member), plus event raising and
//! behavior management.
//!
//! Member resolution always prefers the component's own accessors, then its
//! recognized events, then attached behaviors in attachment order. See
//! [`ComponentExt`] for the exact chains.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use canopy_component::{Component, ComponentCore, ComponentExt};
//! use canopy_core::Value;
//! use canopy_property::Accessors;
//!
//! struct Gauge {
//!     core: ComponentCore<u32>,
//!     accessors: Rc<Accessors<Gauge>>,
//!     level: f64,
//! }
//!
//! impl Gauge {
//!     fn new(key: u32) -> Self {
//!         let accessors = Rc::new(
//!             Accessors::new()
//!                 .read("level", |g: &Gauge| g.level)
//!                 .write("level", |g: &mut Gauge, v: Option<f64>| {
//!                     g.level = v.unwrap_or(0.0);
//!                 }),
//!         );
//!         let gauge = Self {
//!             core: ComponentCore::new(key),
//!             accessors,
//!             level: 0.0,
//!         };
//!         gauge.declare_event("changed");
//!         gauge
//!     }
//! }
//!
//! impl Component<u32> for Gauge {
//!     fn core(&self) -> &ComponentCore<u32> {
//!         &self.core
//!     }
//!
//!     fn core_mut(&mut self) -> &mut ComponentCore<u32> {
//!         &mut self.core
//!     }
//!
//!     fn accessors(&self) -> Rc<Accessors<Self>> {
//!         self.accessors.clone()
//!     }
//! }
//!
//! let mut gauge = Gauge::new(1);
//! gauge.set_member("level", Value::new(0.5_f64)).unwrap();
//!
//! let value = gauge.get_member("Level").unwrap().into_value().unwrap();
//! assert_eq!(value.downcast_ref::<f64>(), Some(&0.5));
//!
//! let event = gauge.raise("changed").unwrap();
//! assert_eq!(event.sender(), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.
//!
//! [`Accessors`]: canopy_property::Accessors

#![no_std]

extern crate alloc;

mod component;
mod error;
mod ext;
mod member;

pub use component::{Component, ComponentCore};
pub use error::ComponentError;
pub use ext::ComponentExt;
pub use member::{Assign, EventHandle, Member};
