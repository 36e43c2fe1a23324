// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-owner behavior table.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;
use core::ops::{Deref, DerefMut};
use smallvec::SmallVec;

use canopy_core::Name;
use canopy_event::{EventRegistry, HandlerId};

use crate::behavior::Behavior;
use crate::error::BehaviorError;

/// A behavior plus the attachment bookkeeping the registry maintains for it.
///
/// Derefs to the behavior, so [`Behavior`] methods are called directly on a
/// borrowed cell; [`owner`](AttachedBehavior::owner) answers which component
/// the behavior is currently attached to.
pub struct AttachedBehavior<K> {
    owner: Option<K>,
    behavior: Box<dyn Behavior<K>>,
}

impl<K: Copy> AttachedBehavior<K> {
    /// The key of the owner this behavior is attached to, or `None` once
    /// detached.
    #[must_use]
    pub fn owner(&self) -> Option<K> {
        self.owner
    }
}

impl<K> Deref for AttachedBehavior<K> {
    type Target = dyn Behavior<K>;

    fn deref(&self) -> &Self::Target {
        &*self.behavior
    }
}

impl<K> DerefMut for AttachedBehavior<K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.behavior
    }
}

impl<K: fmt::Debug> fmt::Debug for AttachedBehavior<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedBehavior")
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}

/// A shared handle to an attached behavior.
///
/// The registry owns the behavior; handles returned by lookups are shared
/// references into that ownership. Event handlers hold only weak references,
/// so a detached-and-dropped behavior can never fire.
pub type BehaviorCell<K> = Rc<RefCell<AttachedBehavior<K>>>;

/// The capability requested from a delegated property scan.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// A readable property is wanted.
    Read,
    /// A writable property is wanted.
    Write,
}

/// Default inline capacity for per-behavior handler registrations.
const INLINE_REGISTRATIONS: usize = 2;

struct Entry<K> {
    name: Option<Name>,
    cell: BehaviorCell<K>,
    enabled: bool,
    registrations: SmallVec<[(Name, HandlerId); INLINE_REGISTRATIONS]>,
}

/// The ordered set of behaviors attached to one owner.
///
/// Behaviors are kept in attachment order, which is the precedence order for
/// delegated property and method lookup: the first enabled behavior exposing
/// a member wins. Named behaviors are unique per owner — attaching under an
/// existing name detaches the old occupant first. Anonymous behaviors
/// participate in delegation but cannot be retrieved by name.
///
/// The registry is handed the owner's [`EventRegistry`] for attach/detach so
/// it can wire and unwire each behavior's declared event bindings; it records
/// the [`HandlerId`] of every registration it makes and removes exactly those
/// on detach, leaving unrelated handlers for the same events untouched.
pub struct BehaviorRegistry<K> {
    owner: K,
    entries: Vec<Entry<K>>,
}

impl<K: Copy + Eq + 'static> BehaviorRegistry<K> {
    /// Creates an empty registry for the owner with key `owner`.
    #[must_use]
    pub fn new(owner: K) -> Self {
        Self {
            owner,
            entries: Vec::new(),
        }
    }

    /// Returns the owner key.
    #[must_use]
    #[inline]
    pub fn owner(&self) -> K {
        self.owner
    }

    /// Attaches `behavior`, optionally under `name`.
    ///
    /// If `name` is already occupied the old behavior is detached first.
    /// Every declared event binding is validated before anything is
    /// registered; each binding then becomes one handler on `events` that
    /// dispatches to the behavior. Finally the behavior's
    /// [`attached`](Behavior::attached) notification runs with the owner key.
    ///
    /// The new behavior starts enabled and is appended, so it has the lowest
    /// delegation precedence among currently attached behaviors.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidHandler`] if a binding names a method
    /// the behavior does not expose; no handler is registered and any
    /// same-named occupant is left attached in that case.
    pub fn attach(
        &mut self,
        events: &EventRegistry<K>,
        name: Option<Name>,
        behavior: Box<dyn Behavior<K>>,
    ) -> Result<BehaviorCell<K>, BehaviorError> {
        let bindings = behavior.event_bindings();
        for binding in &bindings {
            if !behavior.has_event_method(&binding.method) {
                return Err(BehaviorError::InvalidHandler {
                    event: binding.event.clone(),
                    method: binding.method.clone(),
                });
            }
        }

        if let Some(name) = &name {
            self.detach(events, name);
        }

        let cell: BehaviorCell<K> = Rc::new(RefCell::new(AttachedBehavior {
            owner: None,
            behavior,
        }));
        let mut registrations = SmallVec::new();
        for binding in bindings {
            let weak = Rc::downgrade(&cell);
            let method = binding.method;
            let id = events.on(binding.event.as_str(), move |event| {
                // A stale registration (behavior already dropped) is a
                // silent skip; detach removes registrations eagerly, so
                // this only covers handles kept alive across a detach.
                if let Some(cell) = weak.upgrade() {
                    // A dispatch chain that re-enters the same behavior
                    // instance skips the nested delivery; the outer call
                    // holds the exclusive borrow.
                    if let Ok(mut behavior) = cell.try_borrow_mut() {
                        behavior.handle_event(&method, event);
                    }
                }
            });
            registrations.push((binding.event, id));
        }

        {
            let mut attached = cell.borrow_mut();
            attached.owner = Some(self.owner);
            attached.attached(self.owner);
        }
        self.entries.push(Entry {
            name,
            cell: cell.clone(),
            enabled: true,
            registrations,
        });
        Ok(cell)
    }

    /// Detaches the behavior stored under `name` and returns it.
    ///
    /// Removes exactly the handler registrations made at attach time, then
    /// runs the behavior's [`detached`](Behavior::detached) notification.
    /// Returns `None` (a no-op) if no behavior is stored under `name`.
    pub fn detach(&mut self, events: &EventRegistry<K>, name: &Name) -> Option<BehaviorCell<K>> {
        let index = self
            .entries
            .iter()
            .position(|e| e.name.as_ref() == Some(name))?;
        Some(self.detach_at(events, index))
    }

    /// Detaches every behavior.
    pub fn detach_all(&mut self, events: &EventRegistry<K>) {
        while !self.entries.is_empty() {
            let last = self.entries.len() - 1;
            self.detach_at(events, last);
        }
    }

    fn detach_at(&mut self, events: &EventRegistry<K>, index: usize) -> BehaviorCell<K> {
        let entry = self.entries.remove(index);
        for (event, id) in &entry.registrations {
            events.off_handler(event.as_str(), *id);
        }
        {
            let mut detached = entry.cell.borrow_mut();
            detached.owner = None;
            detached.detached(self.owner);
        }
        entry.cell
    }

    /// Returns the behavior stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &Name) -> Option<BehaviorCell<K>> {
        self.entries
            .iter()
            .find(|e| e.name.as_ref() == Some(name))
            .map(|e| e.cell.clone())
    }

    /// Returns the attached behaviors, in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = &BehaviorCell<K>> {
        self.entries.iter().map(|e| &e.cell)
    }

    /// Returns the names of attached behaviors, in attachment order.
    ///
    /// Anonymous behaviors yield `None`.
    pub fn names(&self) -> impl Iterator<Item = Option<&Name>> {
        self.entries.iter().map(|e| e.name.as_ref())
    }

    /// Returns the number of attached behaviors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no behaviors are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Enables or disables the behavior stored under `name`.
    ///
    /// Returns `true` if the behavior exists. Disabling suppresses delegated
    /// property/method lookup only; the behavior's event registrations keep
    /// firing while it is attached.
    pub fn set_enabled(&mut self, name: &Name, enabled: bool) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|e| e.name.as_ref() == Some(name))
        {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Enables or disables every attached behavior.
    pub fn set_enabled_all(&mut self, enabled: bool) {
        for entry in &mut self.entries {
            entry.enabled = enabled;
        }
    }

    /// Returns whether the behavior stored under `name` is enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &Name) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.name.as_ref() == Some(name))
            .map(|e| e.enabled)
    }

    /// Finds the first enabled behavior exposing property `name` with the
    /// requested capability, scanning in attachment order.
    #[must_use]
    pub fn find_property_owner(&self, name: &Name, access: Access) -> Option<BehaviorCell<K>> {
        self.entries
            .iter()
            .filter(|e| e.enabled)
            .find(|e| {
                let behavior = e.cell.borrow();
                match access {
                    Access::Read => behavior.can_get_property(name),
                    Access::Write => behavior.can_set_property(name),
                }
            })
            .map(|e| e.cell.clone())
    }

    /// Finds the first enabled behavior exposing method `name`, scanning in
    /// attachment order.
    #[must_use]
    pub fn find_method_owner(&self, name: &Name) -> Option<BehaviorCell<K>> {
        self.entries
            .iter()
            .filter(|e| e.enabled)
            .find(|e| e.cell.borrow().has_method(name))
            .map(|e| e.cell.clone())
    }
}

impl<K: Copy + Eq + fmt::Debug> fmt::Debug for BehaviorRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BehaviorRegistry");
        s.field("owner", &self.owner);
        for entry in &self.entries {
            match &entry.name {
                Some(name) => s.field(name.as_str(), &entry.enabled),
                None => s.field("<anonymous>", &entry.enabled),
            };
        }
        s.finish_non_exhaustive()
    }
}
