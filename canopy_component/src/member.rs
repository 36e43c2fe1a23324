// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved members and assignable values.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use canopy_behavior::BehaviorCell;
use canopy_core::{Name, Value};
use canopy_event::{Event, Handler, HandlerId};

/// A dynamic member resolved by name on a component.
///
/// A single name space covers three kinds of member; resolution order is
/// documented on [`ComponentExt::get_member`](crate::ComponentExt::get_member).
pub enum Member<K> {
    /// A property value, read through an accessor table or a behavior.
    Value(Value),
    /// A recognized event, exposed as an inspectable handle.
    Event(EventHandle),
    /// A named behavior attached to the component.
    Behavior(BehaviorCell<K>),
}

impl<K> Member<K> {
    /// Returns the property value, if this member is one.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Event(_) | Self::Behavior(_) => None,
        }
    }

    /// Returns the event handle, if this member is one.
    #[must_use]
    pub fn into_event(self) -> Option<EventHandle> {
        match self {
            Self::Event(handle) => Some(handle),
            Self::Value(_) | Self::Behavior(_) => None,
        }
    }

    /// Returns the behavior, if this member is one.
    #[must_use]
    pub fn into_behavior(self) -> Option<BehaviorCell<K>> {
        match self {
            Self::Behavior(cell) => Some(cell),
            Self::Value(_) | Self::Event(_) => None,
        }
    }
}

impl<K> fmt::Debug for Member<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Event(handle) => f.debug_tuple("Event").field(handle).finish(),
            Self::Behavior(_) => f.debug_tuple("Behavior").finish_non_exhaustive(),
        }
    }
}

/// An inspectable snapshot of one event's handler collection.
///
/// The snapshot is taken at resolution time; later registrations or removals
/// do not show through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventHandle {
    name: Name,
    ids: Vec<HandlerId>,
}

impl EventHandle {
    pub(crate) fn new(name: Name, ids: Vec<HandlerId>) -> Self {
        Self { name, ids }
    }

    /// The event name.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Registration tokens of the event's handlers, in firing order.
    #[must_use]
    pub fn handler_ids(&self) -> &[HandlerId] {
        &self.ids
    }

    /// Returns `true` if the event had at least one handler when resolved.
    #[must_use]
    pub fn has_handlers(&self) -> bool {
        !self.ids.is_empty()
    }
}

/// A value being written to a dynamic member.
///
/// A write targets either a data property ([`Assign::Value`]) or an event, in
/// which case the assigned value is a handler to append
/// ([`Assign::Handler`]). Writing the wrong kind to a member fails with
/// [`ComponentError::InvalidAssignment`](crate::ComponentError::InvalidAssignment).
pub enum Assign<K> {
    /// A data value, routed to a property setter.
    Value(Value),
    /// An event handler, appended to the named event's chain.
    Handler(Handler<K>),
}

impl<K> Assign<K> {
    /// Wraps a handler closure for assignment to an event member.
    #[must_use]
    pub fn handler(handler: impl Fn(&mut Event<K>) + 'static) -> Self {
        Self::Handler(Rc::new(handler))
    }
}

impl<K> From<Value> for Assign<K> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl<K> fmt::Debug for Assign<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Handler(_) => f.debug_tuple("Handler").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn member_projections() {
        let member: Member<u32> = Member::Value(Value::new(1_i32));
        assert!(member.into_value().is_some());

        let member: Member<u32> = Member::Event(EventHandle::new(Name::new("click"), vec![]));
        assert!(member.into_value().is_none());
        let member: Member<u32> = Member::Event(EventHandle::new(Name::new("click"), vec![]));
        let handle = member.into_event().unwrap();
        assert_eq!(handle.name().as_str(), "click");
        assert!(!handle.has_handlers());
    }

    #[test]
    fn assign_from_value() {
        let assign: Assign<u32> = Value::new(2_i32).into();
        assert!(matches!(assign, Assign::Value(_)));

        let assign: Assign<u32> = Assign::handler(|_| {});
        assert!(matches!(assign, Assign::Handler(_)));
    }
}
