// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The handler invocation parameter.

use canopy_core::{Name, Value};

/// A named occurrence delivered to each handler in an event's chain.
///
/// The event name is stamped by the dispatcher at trigger time, not by the
/// raiser; the sender is the key of the component that raised it. The
/// `handled` flag is mutable by any handler and short-circuits the remainder
/// of the dispatch once set. The payload is an opaque [`Value`].
///
/// `K` is the owner key type, typically a small `Copy` id.
///
/// # Example
///
/// ```rust
/// use canopy_event::Event;
/// use canopy_core::Value;
///
/// let mut event = Event::with_sender(3_u32).payload(Value::new(1_i32));
/// assert_eq!(event.sender(), Some(3));
/// assert!(!event.is_handled());
///
/// event.set_handled(true);
/// assert!(event.is_handled());
/// ```
#[derive(Debug)]
pub struct Event<K> {
    name: Option<Name>,
    sender: Option<K>,
    handled: bool,
    payload: Value,
}

impl<K: Copy> Event<K> {
    /// Creates an event with no sender and a null payload.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            sender: None,
            handled: false,
            payload: Value::null(),
        }
    }

    /// Creates an event with the sender pre-filled.
    #[must_use]
    pub fn with_sender(sender: K) -> Self {
        Self {
            sender: Some(sender),
            ..Self::new()
        }
    }

    /// Sets the payload, builder-style.
    #[must_use]
    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Returns the event name, if this event has been dispatched.
    ///
    /// The name is stamped by the dispatcher; a freshly constructed event has
    /// none.
    #[must_use]
    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    /// Returns the sender key, if any.
    #[must_use]
    #[inline]
    pub fn sender(&self) -> Option<K> {
        self.sender
    }

    /// Returns `true` if a handler has marked this event handled.
    #[must_use]
    #[inline]
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Marks (or unmarks) this event as handled.
    ///
    /// During dispatch, the flag is checked after every handler call; setting
    /// it skips the remaining handlers of the in-flight dispatch.
    #[inline]
    pub fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }

    /// Returns the payload.
    #[must_use]
    #[inline]
    pub fn payload_ref(&self) -> &Value {
        &self.payload
    }

    /// Returns the payload mutably.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut Value {
        &mut self.payload
    }

    /// Replaces the payload, returning the previous one.
    pub fn replace_payload(&mut self, payload: Value) -> Value {
        core::mem::replace(&mut self.payload, payload)
    }

    /// Stamps the event name. Called by the dispatcher.
    pub(crate) fn stamp(&mut self, name: Name) {
        self.name = Some(name);
    }
}

impl<K: Copy> Default for Event<K> {
    fn default() -> Self {
        Self::new()
    }
}
