// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Event: named, ordered, interruptible handler chains.
//!
//! This crate provides the per-owner event table of the Canopy composition
//! core:
//!
//! - [`Event`] — the handler invocation parameter: the event name (stamped by
//!   the dispatcher), an optional sender key, a mutable `handled` flag, and an
//!   opaque payload.
//! - [`EventRegistry`] — a mapping from event name to an ordered handler
//!   list. Registration returns a [`HandlerId`] token so callers (behaviors in
//!   particular) can later remove exactly the handlers they added.
//!
//! ## Recognized events
//!
//! An event name is *recognized* once it has been declared
//! ([`EventRegistry::declare`]) or once a handler has ever been registered
//! for it. Triggering a recognized event with zero handlers is a silent
//! no-op; triggering an unrecognized name fails with
//! [`EventError::UndefinedEvent`]. Removing every handler leaves the event
//! recognized — list presence and handler presence are independent.
//!
//! ## Dispatch and short-circuiting
//!
//! [`EventRegistry::trigger`] invokes handlers in registration order and
//! checks the event's `handled` flag after **every** call; once a handler
//! sets it, the remaining handlers for that dispatch are skipped (not
//! removed).
//!
//! ## Re-entrancy
//!
//! Each `trigger` call iterates over its own snapshot of the handler list,
//! taken when dispatch starts. Handlers may freely register or remove
//! handlers and trigger further events (on this registry or others)
//! mid-dispatch; such mutations affect subsequent dispatches, never the
//! in-flight snapshot.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_event::{Event, EventRegistry};
//!
//! let registry: EventRegistry<u32> = EventRegistry::new();
//! registry.declare("changed");
//!
//! let id = registry.on("changed", |event: &mut Event<u32>| {
//!     event.set_handled(true);
//! });
//!
//! let mut event = Event::with_sender(7);
//! registry.trigger("changed", &mut event).unwrap();
//! assert!(event.is_handled());
//! assert_eq!(event.name().map(|n| n.as_str()), Some("changed"));
//!
//! assert!(registry.off_handler("changed", id));
//! assert_eq!(registry.handler_count("changed").unwrap(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod error;
mod event;
mod registry;

pub use error::EventError;
pub use event::Event;
pub use registry::{EventRegistry, Handler, HandlerId};
