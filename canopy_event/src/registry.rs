// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-owner event handler tables.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;
use hashbrown::HashMap;
use smallvec::SmallVec;

use canopy_core::Name;

use crate::error::EventError;
use crate::event::Event;

/// Default inline capacity for handler lists.
///
/// Most events carry one or two handlers; this avoids heap allocation in the
/// common case.
const INLINE_HANDLERS: usize = 2;

/// A registered event handler.
pub type Handler<K> = Rc<dyn Fn(&mut Event<K>)>;

/// A token identifying one handler registration.
///
/// Ids are unique within one registry and never reused, so a caller holding
/// the token can remove exactly the registration it made — even when the same
/// closure is registered multiple times.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(u64);

impl fmt::Debug for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandlerId").field(&self.0).finish()
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandlerId({})", self.0)
    }
}

type HandlerList<K> = SmallVec<[(HandlerId, Handler<K>); INLINE_HANDLERS]>;

/// A per-owner mapping from event name to an ordered handler list.
///
/// An event name is *recognized* once declared or once a handler has been
/// registered for it; only recognized names may be triggered or queried for
/// handlers. Handler lists preserve registration order, and the same handler
/// may be registered any number of times.
///
/// The table lives behind a [`RefCell`] and every operation takes `&self`:
/// handlers run outside the borrow, so a handler may register, remove, or
/// trigger mid-dispatch. Each [`trigger`](Self::trigger) call iterates its
/// own snapshot; mutations made while it runs apply to later dispatches only.
///
/// # Example
///
/// ```rust
/// use canopy_event::{Event, EventRegistry};
///
/// let registry: EventRegistry<u32> = EventRegistry::new();
/// registry.declare("ping");
/// assert!(registry.is_declared("ping"));
/// assert!(!registry.has_handlers("ping").unwrap());
///
/// registry.on("ping", |_: &mut Event<u32>| {});
/// assert!(registry.has_handlers("ping").unwrap());
/// ```
pub struct EventRegistry<K> {
    entries: RefCell<HashMap<Name, HandlerList<K>>>,
    next_id: Cell<u64>,
}

impl<K> EventRegistry<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    fn fresh_id(&self) -> HandlerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        HandlerId(id)
    }

    /// Declares `name` as a recognized event.
    ///
    /// Idempotent; the handler list is created empty. Zero handlers on a
    /// recognized event is a valid state, not an error.
    pub fn declare(&self, name: &str) {
        self.entries
            .borrow_mut()
            .entry(Name::new(name))
            .or_default();
    }

    /// Returns `true` if `name` is a recognized event.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.entries.borrow().contains_key(&Name::new(name))
    }

    /// Appends a handler for `name`, returning its registration token.
    ///
    /// Registering a handler recognizes the event name if it was not declared
    /// before. No uniqueness is enforced: a handler registered twice fires
    /// twice.
    pub fn on(&self, name: &str, handler: impl Fn(&mut Event<K>) + 'static) -> HandlerId {
        self.register(name, Rc::new(handler), false)
    }

    /// Prepends a handler for `name`, returning its registration token.
    ///
    /// The handler will fire before all currently registered handlers.
    pub fn prepend(&self, name: &str, handler: impl Fn(&mut Event<K>) + 'static) -> HandlerId {
        self.register(name, Rc::new(handler), true)
    }

    fn register(&self, name: &str, handler: Handler<K>, front: bool) -> HandlerId {
        let id = self.fresh_id();
        let mut entries = self.entries.borrow_mut();
        let list = entries.entry(Name::new(name)).or_default();
        if front {
            list.insert(0, (id, handler));
        } else {
            list.push((id, handler));
        }
        id
    }

    /// Removes all handlers for `name`.
    ///
    /// Returns `true` if any handler existed. The event stays recognized with
    /// an empty handler list.
    pub fn off(&self, name: &str) -> bool {
        let mut entries = self.entries.borrow_mut();
        match entries.get_mut(&Name::new(name)) {
            Some(list) => {
                let had = !list.is_empty();
                list.clear();
                had
            }
            None => false,
        }
    }

    /// Removes the registration identified by `id` from `name`'s list.
    ///
    /// Returns `true` if the registration was found and removed.
    pub fn off_handler(&self, name: &str, id: HandlerId) -> bool {
        let mut entries = self.entries.borrow_mut();
        match entries.get_mut(&Name::new(name)) {
            Some(list) => match list.iter().position(|(h, _)| *h == id) {
                Some(index) => {
                    list.remove(index);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Returns `true` if `name` has at least one handler.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UndefinedEvent`] if `name` is not recognized.
    pub fn has_handlers(&self, name: &str) -> Result<bool, EventError> {
        let key = Name::new(name);
        self.entries
            .borrow()
            .get(&key)
            .map(|list| !list.is_empty())
            .ok_or(EventError::UndefinedEvent { name: key })
    }

    /// Returns the number of handlers registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UndefinedEvent`] if `name` is not recognized.
    pub fn handler_count(&self, name: &str) -> Result<usize, EventError> {
        let key = Name::new(name);
        self.entries
            .borrow()
            .get(&key)
            .map(SmallVec::len)
            .ok_or(EventError::UndefinedEvent { name: key })
    }

    /// Returns the registration tokens for `name`, in firing order.
    ///
    /// This is the inspectable view of an event's handler collection.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UndefinedEvent`] if `name` is not recognized.
    pub fn handler_ids(&self, name: &str) -> Result<Vec<HandlerId>, EventError> {
        let key = Name::new(name);
        self.entries
            .borrow()
            .get(&key)
            .map(|list| list.iter().map(|(id, _)| *id).collect())
            .ok_or(EventError::UndefinedEvent { name: key })
    }

    /// Dispatches `event` to every handler registered for `name`, in order.
    ///
    /// The event's name is stamped before the first handler runs. After each
    /// handler call the event's `handled` flag is checked; once set, the
    /// remaining handlers of this dispatch are skipped (they stay
    /// registered). Zero handlers is a silent no-op.
    ///
    /// Dispatch iterates a snapshot taken at the start of the call, so
    /// handlers may mutate this registry (including for `name`) without
    /// affecting the in-flight iteration.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::UndefinedEvent`] if `name` is not recognized.
    pub fn trigger(&self, name: &str, event: &mut Event<K>) -> Result<(), EventError>
    where
        K: Copy,
    {
        let key = Name::new(name);
        let snapshot: HandlerList<K> = {
            let entries = self.entries.borrow();
            match entries.get(&key) {
                Some(list) => list.clone(),
                None => return Err(EventError::UndefinedEvent { name: key }),
            }
        };

        event.stamp(key);
        for (_, handler) in &snapshot {
            (**handler)(event);
            if event.is_handled() {
                break;
            }
        }
        Ok(())
    }

    /// Returns the recognized event names, in unspecified order.
    #[must_use]
    pub fn event_names(&self) -> Vec<Name> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Returns the number of recognized events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if no events are recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<K> Default for EventRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for EventRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.borrow();
        let mut map = f.debug_map();
        for (name, list) in entries.iter() {
            map.entry(&name.as_str(), &list.len());
        }
        map.finish()
    }
}
