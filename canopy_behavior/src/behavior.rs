// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The behavior capability trait.

use alloc::vec::Vec;
use core::fmt;

use canopy_core::{Name, Value};
use canopy_event::Event;
use canopy_property::PropertyError;

/// A declared binding from an owner event to a behavior method.
///
/// Bindings are produced by [`Behavior::event_bindings`], a pure function of
/// the behavior's type; attachment turns each binding into one handler
/// registration on the owner's event registry.
#[derive(Clone, PartialEq, Eq)]
pub struct EventBinding {
    /// The owner event the behavior wants to observe.
    pub event: Name,
    /// The behavior method to invoke when the event fires.
    pub method: Name,
}

impl EventBinding {
    /// Creates a binding from an event name to a behavior method name.
    #[must_use]
    pub fn new(event: &str, method: &str) -> Self {
        Self {
            event: Name::new(event),
            method: Name::new(method),
        }
    }
}

impl fmt::Debug for EventBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventBinding({} -> {})", self.event, self.method)
    }
}

/// A detachable unit of reusable functionality.
///
/// Implementors opt into each capability by overriding the corresponding
/// group of methods; every default is "contributes nothing". The registry
/// validates at attach time that each binding's method passes
/// [`has_event_method`](Self::has_event_method), so a behavior cannot end up
/// attached with a handler it cannot dispatch.
///
/// `K` is the owner key type. The [`attached`](Self::attached) /
/// [`detached`](Self::detached) notifications hand the behavior its owner's
/// key — a non-owning back-reference; behaviors never manage the owner's
/// lifetime.
///
/// Re-entrancy note: a behavior's bound handler runs with exclusive access to
/// the behavior. A dispatch chain that re-enters the *same* behavior instance
/// (an event handler whose dispatch triggers another event bound to the same
/// behavior) skips the nested delivery rather than aliasing that exclusive
/// access; chains across distinct behaviors or components deliver normally.
pub trait Behavior<K> {
    /// Declared event bindings, recomputed at each attach.
    fn event_bindings(&self) -> Vec<EventBinding> {
        Vec::new()
    }

    /// Returns `true` if `method` can be dispatched by
    /// [`handle_event`](Self::handle_event).
    fn has_event_method(&self, method: &Name) -> bool {
        let _ = method;
        false
    }

    /// Dispatches a bound event to the named behavior method.
    ///
    /// Called only for methods declared via [`event_bindings`](Self::event_bindings)
    /// and vetted by [`has_event_method`](Self::has_event_method).
    fn handle_event(&mut self, method: &Name, event: &mut Event<K>) {
        let _ = (method, event);
    }

    /// Returns `true` if the behavior exposes a readable property `name`.
    fn can_get_property(&self, name: &Name) -> bool {
        let _ = name;
        false
    }

    /// Returns `true` if the behavior exposes a writable property `name`.
    fn can_set_property(&self, name: &Name) -> bool {
        let _ = name;
        false
    }

    /// Reads the behavior property `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::UnknownProperty`] if the behavior does not
    /// expose a readable property `name`.
    fn get_property(&self, name: &Name) -> Result<Value, PropertyError> {
        Err(PropertyError::UnknownProperty { name: name.clone() })
    }

    /// Writes the behavior property `name`.
    ///
    /// Clearing passes [`Value::null`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::UnknownProperty`] if the behavior does not
    /// expose a writable property `name`, or
    /// [`PropertyError::ReadOnlyProperty`] if it is readable but not
    /// writable.
    fn set_property(&mut self, name: &Name, value: Value) -> Result<(), PropertyError> {
        let _ = value;
        if self.can_get_property(name) {
            Err(PropertyError::ReadOnlyProperty { name: name.clone() })
        } else {
            Err(PropertyError::UnknownProperty { name: name.clone() })
        }
    }

    /// Returns `true` if the behavior exposes a callable method `name`.
    fn has_method(&self, name: &Name) -> bool {
        let _ = name;
        false
    }

    /// Invokes the behavior method `name` with `args`.
    ///
    /// Returns `None` if the behavior does not expose such a method.
    fn call(&mut self, name: &Name, args: &[Value]) -> Option<Value> {
        let _ = (name, args);
        None
    }

    /// Notification that the behavior was attached to owner `owner`.
    fn attached(&mut self, owner: K) {
        let _ = owner;
    }

    /// Notification that the behavior was detached from owner `owner`.
    fn detached(&mut self, owner: K) {
        let _ = owner;
    }
}
