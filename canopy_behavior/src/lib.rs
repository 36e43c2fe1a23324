// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Behavior: detachable units of reusable functionality.
//!
//! A [`Behavior`] is a value that can be attached to an owning component to
//! contribute three things without the owner knowing the behavior's concrete
//! type:
//!
//! - **Event handlers** — the behavior declares [`EventBinding`]s (event name
//!   → behavior method name); attaching registers one handler per binding on
//!   the owner's event registry, and detaching removes exactly those
//!   registrations.
//! - **Delegated properties** — the behavior exposes virtual properties the
//!   owner surfaces as its own when its real accessors don't resolve a name.
//! - **Delegated methods** — likewise for named methods.
//!
//! [`BehaviorRegistry`] owns the behaviors attached to one component, in
//! attachment order. Named attachment replaces (detaching first) any behavior
//! under the same name; anonymous behaviors are not retrievable by name.
//! Behaviors can be disabled: a disabled behavior is skipped by the
//! property/method delegation scans but its event registrations stay live —
//! enablement governs delegation, not event handling.
//!
//! Ownership discipline: the registry owns the behaviors; a behavior keeps at
//! most a key (`K`) as a back-reference to its owner, never an owning
//! pointer. Attachment consumes the `Box<dyn Behavior>`, so a behavior
//! instance cannot be attached to two owners at once. The cell returned by
//! attach and lookup wraps the behavior in an [`AttachedBehavior`], whose
//! [`owner`](AttachedBehavior::owner) reports the current owner key (`None`
//! once detached).
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_behavior::{Behavior, BehaviorRegistry, EventBinding};
//! use canopy_event::{Event, EventRegistry};
//! use canopy_core::Name;
//!
//! #[derive(Default)]
//! struct Counter {
//!     fired: u32,
//! }
//!
//! impl Behavior<u32> for Counter {
//!     fn event_bindings(&self) -> Vec<EventBinding> {
//!         vec![EventBinding::new("changed", "on_changed")]
//!     }
//!
//!     fn has_event_method(&self, method: &Name) -> bool {
//!         method.as_str() == "on_changed"
//!     }
//!
//!     fn handle_event(&mut self, _method: &Name, _event: &mut Event<u32>) {
//!         self.fired += 1;
//!     }
//! }
//!
//! let events: EventRegistry<u32> = EventRegistry::new();
//! events.declare("changed");
//!
//! let mut behaviors = BehaviorRegistry::new(1_u32);
//! behaviors
//!     .attach(&events, Some(Name::new("counter")), Box::new(Counter::default()))
//!     .unwrap();
//!
//! events.trigger("changed", &mut Event::new()).unwrap();
//! behaviors.detach(&events, &Name::new("counter")).unwrap();
//!
//! // Detached: the binding no longer fires.
//! events.trigger("changed", &mut Event::new()).unwrap();
//! ```
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod behavior;
mod error;
mod factory;
mod registry;

pub use behavior::{Behavior, EventBinding};
pub use error::BehaviorError;
pub use factory::BehaviorFactory;
pub use registry::{Access, AttachedBehavior, BehaviorCell, BehaviorRegistry};
