// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic member operations, provided as a blanket extension.

use alloc::boxed::Box;
use alloc::vec::Vec;

use canopy_behavior::{Access, Behavior, BehaviorCell, BehaviorFactory};
use canopy_core::{Name, Value};
use canopy_event::{Event, HandlerId};
use canopy_property::PropertyError;

use crate::component::Component;
use crate::error::ComponentError;
use crate::member::{Assign, EventHandle, Member};

/// Dynamic member operations on any [`Component`].
///
/// All names live in one case-insensitive member namespace. Reads, writes,
/// clears, and calls resolve through a fixed chain; the first subsystem that
/// claims the name wins:
///
/// 1. the component's own accessor table;
/// 2. the component's recognized events;
/// 3. an attached behavior — by behavior name for reads, then by delegated
///    property (first enabled behavior in attachment order).
///
/// Disabled behaviors are invisible to this resolution but keep their event
/// registrations.
pub trait ComponentExt<K: Copy + Eq + 'static>: Component<K> {
    /// Resolves the member `name`.
    ///
    /// Resolution order: own readable property, recognized event (as an
    /// [`EventHandle`] snapshot), attached behavior by name, then the first
    /// enabled behavior exposing a readable property `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::UnknownProperty`] (wrapped) if nothing
    /// resolves the name.
    fn get_member(&self, name: &str) -> Result<Member<K>, ComponentError> {
        let key = Name::new(name);
        let accessors = self.accessors();
        if accessors.can_get(name) {
            return Ok(Member::Value(accessors.get(self, name)?));
        }
        let core = self.core();
        if core.events().is_declared(name) {
            let ids = core.events().handler_ids(name)?;
            return Ok(Member::Event(EventHandle::new(key, ids)));
        }
        if let Some(cell) = core.behaviors().get(&key) {
            return Ok(Member::Behavior(cell));
        }
        if let Some(cell) = core.behaviors().find_property_owner(&key, Access::Read) {
            let value = cell.borrow().get_property(&key)?;
            return Ok(Member::Value(value));
        }
        Err(PropertyError::UnknownProperty { name: key }.into())
    }

    /// Writes the member `name`.
    ///
    /// Resolution order: own writable property (accepts only
    /// [`Assign::Value`]), recognized event (accepts only
    /// [`Assign::Handler`], which is appended to the chain), then the first
    /// enabled behavior exposing a writable property `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::InvalidAssignment`] if the member exists but
    /// the assignment kind does not fit it;
    /// [`PropertyError::ReadOnlyProperty`] (wrapped) if the name is readable
    /// somewhere but writable nowhere; [`PropertyError::UnknownProperty`]
    /// (wrapped) if nothing resolves the name.
    fn set_member(&mut self, name: &str, assign: impl Into<Assign<K>>) -> Result<(), ComponentError> {
        let assign = assign.into();
        let key = Name::new(name);
        let accessors = self.accessors();
        if accessors.can_set(name) {
            return match assign {
                Assign::Value(value) => Ok(accessors.set(self, name, value)?),
                Assign::Handler(_) => Err(ComponentError::InvalidAssignment { name: key }),
            };
        }
        if self.core().events().is_declared(name) {
            return match assign {
                Assign::Handler(handler) => {
                    self.core().events().on(name, move |event| (*handler)(event));
                    Ok(())
                }
                Assign::Value(_) => Err(ComponentError::InvalidAssignment { name: key }),
            };
        }
        if let Some(cell) = self
            .core()
            .behaviors()
            .find_property_owner(&key, Access::Write)
        {
            return match assign {
                Assign::Value(value) => Ok(cell.borrow_mut().set_property(&key, value)?),
                Assign::Handler(_) => Err(ComponentError::InvalidAssignment { name: key }),
            };
        }
        if accessors.can_get(name)
            || self
                .core()
                .behaviors()
                .find_property_owner(&key, Access::Read)
                .is_some()
        {
            return Err(PropertyError::ReadOnlyProperty { name: key }.into());
        }
        Err(PropertyError::UnknownProperty { name: key }.into())
    }

    /// Returns `true` if the member `name` currently resolves to something
    /// "present": a non-null readable property, an event with at least one
    /// handler, a behavior stored under the name, or a non-null delegated
    /// property.
    ///
    /// Never errors; an unresolvable name is simply absent.
    #[must_use]
    fn has_member(&self, name: &str) -> bool {
        let key = Name::new(name);
        let accessors = self.accessors();
        if accessors.can_get(name) {
            return accessors.get(self, name).is_ok_and(|v| !v.is_null());
        }
        let core = self.core();
        if core.events().is_declared(name) {
            return core.events().has_handlers(name).unwrap_or(false);
        }
        if core.behaviors().get(&key).is_some() {
            return true;
        }
        if let Some(cell) = core.behaviors().find_property_owner(&key, Access::Read) {
            let value = cell.borrow().get_property(&key);
            return value.is_ok_and(|v| !v.is_null());
        }
        false
    }

    /// Clears the member `name`.
    ///
    /// A writable property receives the null sentinel; a recognized event has
    /// all of its handlers removed; a delegated writable property receives
    /// null through its behavior.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::ReadOnlyProperty`] (wrapped) if the name is
    /// readable somewhere but writable nowhere, and
    /// [`PropertyError::UnknownProperty`] (wrapped) if nothing resolves it.
    fn clear_member(&mut self, name: &str) -> Result<(), ComponentError> {
        let key = Name::new(name);
        let accessors = self.accessors();
        if accessors.can_set(name) {
            return Ok(accessors.clear(self, name)?);
        }
        if self.core().events().is_declared(name) {
            self.core().events().off(name);
            return Ok(());
        }
        if let Some(cell) = self
            .core()
            .behaviors()
            .find_property_owner(&key, Access::Write)
        {
            return Ok(cell.borrow_mut().set_property(&key, Value::null())?);
        }
        if accessors.can_get(name)
            || self
                .core()
                .behaviors()
                .find_property_owner(&key, Access::Read)
                .is_some()
        {
            return Err(PropertyError::ReadOnlyProperty { name: key }.into());
        }
        Err(PropertyError::UnknownProperty { name: key }.into())
    }

    /// Invokes the dynamic method `name` with `args`.
    ///
    /// A readable own property whose value is callable is invoked first; a
    /// non-callable property value does not shadow behavior methods. Failing
    /// that, the call is delegated to the first enabled behavior exposing a
    /// method `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentError::UnknownMethod`] if nothing resolves the
    /// name to something callable.
    fn call_member(&mut self, name: &str, args: &[Value]) -> Result<Value, ComponentError> {
        let key = Name::new(name);
        let accessors = self.accessors();
        if accessors.can_get(name) {
            let value = accessors.get(self, name)?;
            if let Some(result) = value.call(args) {
                return Ok(result);
            }
        }
        if let Some(cell) = self.core().behaviors().find_method_owner(&key) {
            if let Some(result) = cell.borrow_mut().call(&key, args) {
                return Ok(result);
            }
        }
        Err(ComponentError::UnknownMethod { name: key })
    }

    /// Declares `name` as a recognized event.
    fn declare_event(&self, name: &str) {
        self.core().events().declare(name);
    }

    /// Returns `true` if `name` is a recognized event.
    #[must_use]
    fn has_event(&self, name: &str) -> bool {
        self.core().events().is_declared(name)
    }

    /// Appends an event handler, returning its registration token.
    fn on_event(&self, name: &str, handler: impl Fn(&mut Event<K>) + 'static) -> HandlerId {
        self.core().events().on(name, handler)
    }

    /// Prepends an event handler, returning its registration token.
    ///
    /// The handler fires before all currently registered handlers.
    fn prepend_event_handler(
        &self,
        name: &str,
        handler: impl Fn(&mut Event<K>) + 'static,
    ) -> HandlerId {
        self.core().events().prepend(name, handler)
    }

    /// Removes all handlers for `name`; returns `true` if any existed.
    fn off_event(&self, name: &str) -> bool {
        self.core().events().off(name)
    }

    /// Removes one handler registration; returns `true` if it was found.
    fn off_event_handler(&self, name: &str, id: HandlerId) -> bool {
        self.core().events().off_handler(name, id)
    }

    /// Returns `true` if `name` has at least one handler.
    ///
    /// # Errors
    ///
    /// Returns [`canopy_event::EventError::UndefinedEvent`] (wrapped) if
    /// `name` is not recognized.
    fn has_event_handlers(&self, name: &str) -> Result<bool, ComponentError> {
        Ok(self.core().events().has_handlers(name)?)
    }

    /// Raises the event `name` from this component with a null payload.
    ///
    /// Constructs an [`Event`] carrying this component's key as sender,
    /// dispatches it, and returns it for inspection.
    ///
    /// # Errors
    ///
    /// Returns [`canopy_event::EventError::UndefinedEvent`] (wrapped) if
    /// `name` is not recognized.
    fn raise(&self, name: &str) -> Result<Event<K>, ComponentError> {
        self.raise_with(name, Value::null())
    }

    /// Raises the event `name` with `payload`.
    ///
    /// # Errors
    ///
    /// Same contract as [`raise`](Self::raise).
    fn raise_with(&self, name: &str, payload: Value) -> Result<Event<K>, ComponentError> {
        let mut event = Event::with_sender(self.key()).payload(payload);
        self.core().events().trigger(name, &mut event)?;
        Ok(event)
    }

    /// Dispatches a caller-constructed event.
    ///
    /// # Errors
    ///
    /// Returns [`canopy_event::EventError::UndefinedEvent`] (wrapped) if
    /// `name` is not recognized.
    fn trigger(&self, name: &str, event: &mut Event<K>) -> Result<(), ComponentError> {
        Ok(self.core().events().trigger(name, event)?)
    }

    /// Attaches `behavior`, optionally under `name`, wiring its event
    /// bindings to this component's events.
    ///
    /// # Errors
    ///
    /// Returns [`canopy_behavior::BehaviorError::InvalidHandler`] (wrapped)
    /// if a binding names a method the behavior does not expose.
    fn attach_behavior(
        &mut self,
        name: Option<&str>,
        behavior: Box<dyn Behavior<K>>,
    ) -> Result<BehaviorCell<K>, ComponentError> {
        let (events, behaviors) = self.core_mut().parts();
        Ok(behaviors.attach(events, name.map(Name::new), behavior)?)
    }

    /// Creates a behavior from declarative configuration and attaches it.
    ///
    /// # Errors
    ///
    /// Propagates the factory's error, then the same contract as
    /// [`attach_behavior`](Self::attach_behavior).
    fn attach_behavior_with<F: BehaviorFactory<K>>(
        &mut self,
        name: Option<&str>,
        factory: &F,
        config: &F::Config,
    ) -> Result<BehaviorCell<K>, ComponentError> {
        let behavior = factory.create(config)?;
        self.attach_behavior(name, behavior)
    }

    /// Attaches several behaviors in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Same contract as [`attach_behavior`](Self::attach_behavior);
    /// behaviors attached before the failing one stay attached.
    fn attach_behaviors<'a>(
        &mut self,
        behaviors: impl IntoIterator<Item = (Option<&'a str>, Box<dyn Behavior<K>>)>,
    ) -> Result<(), ComponentError> {
        for (name, behavior) in behaviors {
            self.attach_behavior(name, behavior)?;
        }
        Ok(())
    }

    /// Detaches the behavior stored under `name`, unwiring its handlers.
    ///
    /// Returns `None` if no behavior is stored under `name`.
    fn detach_behavior(&mut self, name: &str) -> Option<BehaviorCell<K>> {
        let (events, behaviors) = self.core_mut().parts();
        behaviors.detach(events, &Name::new(name))
    }

    /// Detaches every behavior.
    fn detach_all_behaviors(&mut self) {
        let (events, behaviors) = self.core_mut().parts();
        behaviors.detach_all(events);
    }

    /// Returns the behavior stored under `name`, if any.
    #[must_use]
    fn behavior(&self, name: &str) -> Option<BehaviorCell<K>> {
        self.core().behaviors().get(&Name::new(name))
    }

    /// Returns the attached behaviors, in attachment order.
    #[must_use]
    fn behaviors(&self) -> Vec<BehaviorCell<K>> {
        self.core().behaviors().iter().cloned().collect()
    }

    /// Re-enables the behavior stored under `name` for delegation.
    ///
    /// Returns `true` if the behavior exists.
    fn enable_behavior(&mut self, name: &str) -> bool {
        self.core_mut()
            .behaviors_mut()
            .set_enabled(&Name::new(name), true)
    }

    /// Hides the behavior stored under `name` from delegation.
    ///
    /// Its event registrations keep firing. Returns `true` if the behavior
    /// exists.
    fn disable_behavior(&mut self, name: &str) -> bool {
        self.core_mut()
            .behaviors_mut()
            .set_enabled(&Name::new(name), false)
    }

    /// Re-enables every attached behavior for delegation.
    fn enable_all_behaviors(&mut self) {
        self.core_mut().behaviors_mut().set_enabled_all(true);
    }

    /// Hides every attached behavior from delegation.
    fn disable_all_behaviors(&mut self) {
        self.core_mut().behaviors_mut().set_enabled_all(false);
    }
}

impl<K: Copy + Eq + 'static, C: Component<K>> ComponentExt<K> for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentCore;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec::Vec;
    use canopy_behavior::{BehaviorError, EventBinding};
    use canopy_property::Accessors;
    use core::cell::Cell;

    struct Label {
        core: ComponentCore<u32>,
        accessors: Rc<Accessors<Label>>,
        text: String,
        title: Option<String>,
    }

    fn label_accessors() -> Rc<Accessors<Label>> {
        Rc::new(
            Accessors::new()
                // Read-only.
                .read("label", |l: &Label| l.text.clone())
                .getter("title", |l: &Label| {
                    l.title.clone().map_or_else(Value::null, Value::new)
                })
                .write("title", |l: &mut Label, v: Option<String>| l.title = v)
                .getter("greet", |l: &Label| {
                    let text = l.text.clone();
                    Value::callable(move |_| Value::new(text.clone()))
                }),
        )
    }

    impl Label {
        fn new(key: u32) -> Self {
            let label = Self {
                core: ComponentCore::new(key),
                accessors: label_accessors(),
                text: String::from("x"),
                title: None,
            };
            label.declare_event("changed");
            label
        }
    }

    impl Component<u32> for Label {
        fn core(&self) -> &ComponentCore<u32> {
            &self.core
        }

        fn core_mut(&mut self) -> &mut ComponentCore<u32> {
            &mut self.core
        }

        fn accessors(&self) -> Rc<Accessors<Self>> {
            self.accessors.clone()
        }
    }

    /// Exposes `extra` read-write, the `describe` method, and a binding on
    /// the owner's `changed` event.
    struct Extra {
        value: Option<i32>,
        seen: Rc<Cell<u32>>,
    }

    impl Extra {
        fn new(value: i32) -> Self {
            Self {
                value: Some(value),
                seen: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Behavior<u32> for Extra {
        fn event_bindings(&self) -> Vec<EventBinding> {
            alloc::vec![EventBinding::new("changed", "on_changed")]
        }

        fn has_event_method(&self, method: &Name) -> bool {
            method.as_str() == "on_changed"
        }

        fn handle_event(&mut self, _method: &Name, _event: &mut Event<u32>) {
            self.seen.set(self.seen.get() + 1);
        }

        fn can_get_property(&self, name: &Name) -> bool {
            name.as_str() == "extra"
        }

        fn can_set_property(&self, name: &Name) -> bool {
            name.as_str() == "extra"
        }

        fn get_property(&self, name: &Name) -> Result<Value, PropertyError> {
            if name.as_str() == "extra" {
                Ok(self.value.map_or_else(Value::null, Value::new))
            } else {
                Err(PropertyError::UnknownProperty { name: name.clone() })
            }
        }

        fn set_property(&mut self, name: &Name, value: Value) -> Result<(), PropertyError> {
            if name.as_str() == "extra" {
                self.value = value.to_data::<i32>();
                Ok(())
            } else {
                Err(PropertyError::UnknownProperty { name: name.clone() })
            }
        }

        fn has_method(&self, name: &Name) -> bool {
            name.as_str() == "describe"
        }

        fn call(&mut self, name: &Name, _args: &[Value]) -> Option<Value> {
            if name.as_str() == "describe" {
                Some(Value::new(self.value.unwrap_or(0)))
            } else {
                None
            }
        }
    }

    fn read_i32(member: Member<u32>) -> i32 {
        *member
            .into_value()
            .unwrap()
            .downcast_ref::<i32>()
            .unwrap()
    }

    #[test]
    fn own_read_only_property() {
        let mut label = Label::new(1);

        let value = label.get_member("Label").unwrap().into_value().unwrap();
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("x"));
        assert!(label.has_member("label"));

        assert_eq!(
            label.set_member("label", Value::new(String::from("y"))),
            Err(PropertyError::ReadOnlyProperty {
                name: Name::new("label")
            }
            .into())
        );
        assert_eq!(
            label.clear_member("label"),
            Err(PropertyError::ReadOnlyProperty {
                name: Name::new("label")
            }
            .into())
        );
    }

    #[test]
    fn own_read_write_property() {
        let mut label = Label::new(1);
        assert!(!label.has_member("title"));

        label
            .set_member("title", Value::new(String::from("hello")))
            .unwrap();
        assert!(label.has_member("Title"));
        let value = label.get_member("title").unwrap().into_value().unwrap();
        assert_eq!(
            value.downcast_ref::<String>().map(String::as_str),
            Some("hello")
        );

        label.clear_member("title").unwrap();
        assert!(!label.has_member("title"));
        assert!(label.get_member("title").unwrap().into_value().unwrap().is_null());
    }

    #[test]
    fn unknown_member() {
        let mut label = Label::new(1);
        assert!(!label.has_member("missing"));
        assert_eq!(
            label.get_member("missing").err().unwrap(),
            PropertyError::UnknownProperty {
                name: Name::new("missing")
            }
            .into()
        );
        assert_eq!(
            label.set_member("missing", Value::new(1_i32)).err().unwrap(),
            PropertyError::UnknownProperty {
                name: Name::new("missing")
            }
            .into()
        );
        assert_eq!(
            label.clear_member("missing").err().unwrap(),
            PropertyError::UnknownProperty {
                name: Name::new("missing")
            }
            .into()
        );
    }

    #[test]
    fn event_member() {
        let mut label = Label::new(1);
        assert!(label.has_event("changed"));
        // Recognized but handler-less: resolvable, not "present".
        assert!(!label.has_member("changed"));

        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        label
            .set_member("changed", Assign::handler(move |_| f.set(f.get() + 1)))
            .unwrap();
        assert!(label.has_member("changed"));

        let handle = label.get_member("changed").unwrap().into_event().unwrap();
        assert_eq!(handle.name().as_str(), "changed");
        assert_eq!(handle.handler_ids().len(), 1);

        label.raise("changed").unwrap();
        assert_eq!(fired.get(), 1);

        // A data value cannot be written to an event member.
        assert_eq!(
            label.set_member("changed", Value::new(1_i32)).err().unwrap(),
            ComponentError::InvalidAssignment {
                name: Name::new("changed")
            }
        );

        // Clearing an event removes its handlers but keeps it recognized.
        label.clear_member("changed").unwrap();
        assert!(!label.has_member("changed"));
        assert!(label.has_event("changed"));
        label.raise("changed").unwrap();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn typed_write_mismatch_is_error_not_panic() {
        let mut label = Label::new(1);
        assert_eq!(
            label.set_member("title", Value::new(5_i32)).err().unwrap(),
            ComponentError::Property(PropertyError::TypeMismatch {
                name: Name::new("title"),
                expected: core::any::type_name::<String>(),
            })
        );
        // The slot is untouched.
        assert!(!label.has_member("title"));
    }

    #[test]
    fn handler_cannot_target_data_property() {
        let mut label = Label::new(1);
        assert_eq!(
            label
                .set_member("title", Assign::handler(|_| {}))
                .err()
                .unwrap(),
            ComponentError::InvalidAssignment {
                name: Name::new("title")
            }
        );
    }

    #[test]
    fn raise_stamps_sender_and_name() {
        let label = Label::new(9);
        let event = label.raise_with("changed", Value::new(5_i32)).unwrap();
        assert_eq!(event.sender(), Some(9));
        assert_eq!(event.name().map(Name::as_str), Some("changed"));
        assert_eq!(event.payload_ref().downcast_ref::<i32>(), Some(&5));
    }

    #[test]
    fn behavior_property_delegation() {
        let mut label = Label::new(1);
        label
            .attach_behavior(Some("extras"), Box::new(Extra::new(42)))
            .unwrap();

        // Delegated read, write, clear.
        assert_eq!(read_i32(label.get_member("extra").unwrap()), 42);
        assert!(label.has_member("extra"));

        label.set_member("extra", Value::new(7_i32)).unwrap();
        assert_eq!(read_i32(label.get_member("extra").unwrap()), 7);

        label.clear_member("extra").unwrap();
        assert!(!label.has_member("extra"));

        // The behavior itself resolves by its attachment name.
        assert!(label.get_member("extras").unwrap().into_behavior().is_some());
        assert!(label.has_member("extras"));
    }

    #[test]
    fn behavior_event_binding_fires_through_raise() {
        let mut label = Label::new(1);
        let seen = Rc::new(Cell::new(0));
        let behavior = Extra {
            value: Some(1),
            seen: seen.clone(),
        };
        label
            .attach_behavior(Some("extras"), Box::new(behavior))
            .unwrap();

        label.raise("changed").unwrap();
        label.raise("changed").unwrap();
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn delegation_precedence_is_attachment_order() {
        let mut label = Label::new(1);
        label
            .attach_behavior(Some("first"), Box::new(Extra::new(10)))
            .unwrap();
        label
            .attach_behavior(Some("second"), Box::new(Extra::new(20)))
            .unwrap();

        assert_eq!(read_i32(label.get_member("extra").unwrap()), 10);

        // Disabling the front behavior falls through to the next.
        assert!(label.disable_behavior("first"));
        assert_eq!(read_i32(label.get_member("extra").unwrap()), 20);

        assert!(label.enable_behavior("first"));
        assert_eq!(read_i32(label.get_member("extra").unwrap()), 10);
    }

    #[test]
    fn disabled_behavior_keeps_event_registrations() {
        let mut label = Label::new(1);
        let seen = Rc::new(Cell::new(0));
        let behavior = Extra {
            value: Some(1),
            seen: seen.clone(),
        };
        label
            .attach_behavior(Some("extras"), Box::new(behavior))
            .unwrap();

        label.disable_behavior("extras");
        assert!(label.get_member("extra").is_err());
        assert!(label.call_member("describe", &[]).is_err());

        // The binding is governed by attachment, not enablement.
        label.raise("changed").unwrap();
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn attached_behavior_reports_its_owner() {
        let mut label = Label::new(9);
        let cell = label
            .attach_behavior(Some("extras"), Box::new(Extra::new(1)))
            .unwrap();
        assert_eq!(cell.borrow().owner(), Some(9));

        label.detach_behavior("extras").unwrap();
        assert_eq!(cell.borrow().owner(), None);
    }

    #[test]
    fn detach_restores_pre_attachment_surface() {
        let mut label = Label::new(1);
        let seen = Rc::new(Cell::new(0));
        let behavior = Extra {
            value: Some(1),
            seen: seen.clone(),
        };
        label
            .attach_behavior(Some("extras"), Box::new(behavior))
            .unwrap();
        label.raise("changed").unwrap();
        assert_eq!(seen.get(), 1);

        assert!(label.detach_behavior("extras").is_some());

        assert!(label.get_member("extra").is_err());
        assert!(label.behavior("extras").is_none());
        assert!(!label.has_event_handlers("changed").unwrap());
        label.raise("changed").unwrap();
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn invalid_binding_surfaces_as_behavior_error() {
        struct Broken;

        impl Behavior<u32> for Broken {
            fn event_bindings(&self) -> Vec<EventBinding> {
                alloc::vec![EventBinding::new("changed", "nope")]
            }
        }

        let mut label = Label::new(1);
        let err = label
            .attach_behavior(Some("broken"), Box::new(Broken))
            .err()
            .unwrap();
        assert_eq!(
            err,
            ComponentError::Behavior(BehaviorError::InvalidHandler {
                event: Name::new("changed"),
                method: Name::new("nope"),
            })
        );
        assert!(label.behavior("broken").is_none());
    }

    #[test]
    fn call_member_resolution() {
        let mut label = Label::new(1);
        label
            .attach_behavior(Some("extras"), Box::new(Extra::new(5)))
            .unwrap();

        // Callable own property wins.
        let out = label.call_member("greet", &[]).unwrap();
        assert_eq!(out.downcast_ref::<String>().map(String::as_str), Some("x"));

        // Non-callable own property falls through; no behavior claims it.
        assert_eq!(
            label.call_member("label", &[]).err().unwrap(),
            ComponentError::UnknownMethod {
                name: Name::new("label")
            }
        );

        // Behavior method delegation.
        let out = label.call_member("describe", &[]).unwrap();
        assert_eq!(out.downcast_ref::<i32>(), Some(&5));

        assert_eq!(
            label.call_member("missing", &[]).err().unwrap(),
            ComponentError::UnknownMethod {
                name: Name::new("missing")
            }
        );
    }

    #[test]
    fn attach_behavior_with_factory() {
        struct ExtraFactory;

        impl BehaviorFactory<u32> for ExtraFactory {
            type Config = i32;

            fn create(
                &self,
                config: &i32,
            ) -> Result<Box<dyn Behavior<u32>>, BehaviorError> {
                Ok(Box::new(Extra::new(*config)))
            }
        }

        let mut label = Label::new(1);
        label
            .attach_behavior_with(Some("extras"), &ExtraFactory, &33)
            .unwrap();
        assert_eq!(read_i32(label.get_member("extra").unwrap()), 33);
    }

    #[test]
    fn detach_all_behaviors() {
        let mut label = Label::new(1);
        label
            .attach_behavior(Some("a"), Box::new(Extra::new(1)))
            .unwrap();
        label.attach_behavior(None, Box::new(Extra::new(2))).unwrap();

        label.detach_all_behaviors();
        assert!(label.get_member("extra").is_err());
        assert!(!label.has_event_handlers("changed").unwrap());
    }

    #[test]
    fn direct_event_passthroughs() {
        let label = Label::new(1);
        label.declare_event("ping");
        let (count, counter) = {
            let c = Rc::new(Cell::new(0));
            let cc = c.clone();
            (c, move |_: &mut Event<u32>| cc.set(cc.get() + 1))
        };
        let id = label.on_event("ping", counter);
        assert!(label.has_event_handlers("ping").unwrap());

        let mut event = Event::new();
        label.trigger("ping", &mut event).unwrap();
        assert_eq!(count.get(), 1);
        // Caller-constructed events carry no sender unless supplied.
        assert!(event.sender().is_none());

        assert!(label.off_event_handler("ping", id));
        assert!(!label.off_event("ping"));
    }

    #[test]
    fn prepend_fires_before_append() {
        let label = Label::new(1);
        let order = Rc::new(core::cell::RefCell::new(alloc::vec::Vec::new()));

        let o = order.clone();
        label.on_event("changed", move |_| o.borrow_mut().push("second"));
        let o = order.clone();
        label.prepend_event_handler("changed", move |_| o.borrow_mut().push("first"));

        label.raise("changed").unwrap();
        assert_eq!(*order.borrow(), alloc::vec!["first", "second"]);
    }

    #[test]
    fn bulk_attach_and_enablement() {
        let mut label = Label::new(1);
        label
            .attach_behaviors([
                (Some("first"), Box::new(Extra::new(10)) as Box<dyn Behavior<u32>>),
                (None, Box::new(Extra::new(20))),
            ])
            .unwrap();
        assert_eq!(label.behaviors().len(), 2);

        label.disable_all_behaviors();
        assert!(label.get_member("extra").is_err());

        label.enable_all_behaviors();
        assert_eq!(read_i32(label.get_member("extra").unwrap()), 10);
    }
}
