// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The component trait and its embedded state.

use alloc::rc::Rc;
use core::fmt;

use canopy_behavior::BehaviorRegistry;
use canopy_event::EventRegistry;
use canopy_property::Accessors;

/// The per-instance composition state a component embeds.
///
/// Holds the instance's event registry and behavior registry, keyed by the
/// owner key `K`. The accessor table is *not* here: it is per-type, provided
/// through [`Component::accessors`].
pub struct ComponentCore<K> {
    events: EventRegistry<K>,
    behaviors: BehaviorRegistry<K>,
}

impl<K: Copy + Eq + 'static> ComponentCore<K> {
    /// Creates the composition state for the component with key `owner`.
    #[must_use]
    pub fn new(owner: K) -> Self {
        Self {
            events: EventRegistry::new(),
            behaviors: BehaviorRegistry::new(owner),
        }
    }

    /// Returns the owner key.
    #[must_use]
    #[inline]
    pub fn owner(&self) -> K {
        self.behaviors.owner()
    }

    /// Returns the event registry.
    #[must_use]
    #[inline]
    pub fn events(&self) -> &EventRegistry<K> {
        &self.events
    }

    /// Returns the behavior registry.
    #[must_use]
    #[inline]
    pub fn behaviors(&self) -> &BehaviorRegistry<K> {
        &self.behaviors
    }

    /// Returns the behavior registry mutably.
    #[inline]
    pub fn behaviors_mut(&mut self) -> &mut BehaviorRegistry<K> {
        &mut self.behaviors
    }

    /// Splits the core into its event registry and a mutable behavior
    /// registry.
    ///
    /// Behavior attach/detach needs both at once: the behavior registry
    /// mutates its own entries while registering handlers on the (interior
    /// mutable) event registry.
    pub fn parts(&mut self) -> (&EventRegistry<K>, &mut BehaviorRegistry<K>) {
        (&self.events, &mut self.behaviors)
    }
}

impl<K: Copy + Eq + fmt::Debug> fmt::Debug for ComponentCore<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentCore")
            .field("events", &self.events)
            .field("behaviors", &self.behaviors)
            .finish()
    }
}

/// A type participating in the dynamic member protocol.
///
/// Implementors embed a [`ComponentCore`] and expose their per-type accessor
/// table; everything else — member resolution, event raising, behavior
/// management — comes from the blanket [`ComponentExt`](crate::ComponentExt)
/// extension.
///
/// The accessor table is built once per type and shared by every instance,
/// typically behind an `Rc` stored in the instance or a constructor-supplied
/// shared table. [`accessors`](Self::accessors) hands out a clone of that
/// `Rc` so member operations can hold the table while mutating `self`.
pub trait Component<K: Copy + Eq + 'static>: Sized {
    /// The embedded composition state.
    fn core(&self) -> &ComponentCore<K>;

    /// The embedded composition state, mutably.
    fn core_mut(&mut self) -> &mut ComponentCore<K>;

    /// The per-type accessor table.
    fn accessors(&self) -> Rc<Accessors<Self>>;

    /// The key identifying this instance as an event sender and behavior
    /// owner.
    #[must_use]
    fn key(&self) -> K {
        self.core().owner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn core_holds_owner() {
        let core: ComponentCore<u32> = ComponentCore::new(5);
        assert_eq!(core.owner(), 5);
        assert!(core.events().is_empty());
        assert!(core.behaviors().is_empty());
    }

    #[test]
    fn parts_split_borrow() {
        let mut core: ComponentCore<u32> = ComponentCore::new(5);
        let (events, behaviors) = core.parts();
        events.declare("ping");
        assert_eq!(behaviors.owner(), 5);
        assert!(core.events().is_declared("ping"));
    }

    #[test]
    fn debug() {
        let core: ComponentCore<u32> = ComponentCore::new(5);
        assert!(format!("{core:?}").contains("ComponentCore"));
    }
}
