// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-type accessor tables.
//!
//! This module provides [`Accessors`], the registration table that backs a
//! type's virtual properties. The table is built once, at construction time,
//! and consulted for every dynamic member access; there is no runtime
//! introspection.

use alloc::boxed::Box;
use alloc::vec::Vec;
use hashbrown::HashMap;

use canopy_core::{Name, Value};

use crate::error::PropertyError;

/// A registered getter: reads a value off the target.
pub type Getter<T> = Box<dyn Fn(&T) -> Value>;

/// A registered setter: writes a value into the target.
///
/// Clearing a property invokes the setter with [`Value::null`]. Setters
/// report failures through [`PropertyError`]; the typed setters registered
/// via [`Accessors::write`] reject mismatched value types this way.
pub type Setter<T> = Box<dyn Fn(&mut T, Value) -> Result<(), PropertyError>>;

struct Entry<T> {
    getter: Option<Getter<T>>,
    setter: Option<Setter<T>>,
}

/// A per-type table of virtual property accessors.
///
/// Registration is builder-style and happens once per type; the finished
/// table is usually shared behind an `Rc` by every instance of the type.
/// Names are matched case-insensitively.
///
/// # Example
///
/// ```rust
/// use canopy_property::Accessors;
/// use canopy_core::Value;
///
/// struct Gauge { level: f64 }
///
/// let accessors = Accessors::new()
///     .read("level", |g: &Gauge| g.level)
///     .write("level", |g: &mut Gauge, v: Option<f64>| {
///         g.level = v.unwrap_or(0.0);
///     });
///
/// assert!(accessors.can_get("Level"));
/// assert!(accessors.can_set("level"));
/// assert!(!accessors.can_get("pressure"));
/// ```
pub struct Accessors<T> {
    entries: HashMap<Name, Entry<T>>,
}

impl<T> Accessors<T> {
    /// Creates an empty accessor table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers a raw getter for `name`.
    ///
    /// The getter receives the target and returns an erased [`Value`]. Prefer
    /// [`Accessors::read`] unless the property needs to build its `Value` by
    /// hand (for example, a callable-valued property).
    ///
    /// # Panics
    ///
    /// Panics if `name` already has a getter.
    #[must_use]
    pub fn getter(mut self, name: &str, getter: impl Fn(&T) -> Value + 'static) -> Self {
        let entry = self.entry(name);
        assert!(
            entry.getter.is_none(),
            "property '{name}' already has a getter"
        );
        entry.getter = Some(Box::new(getter));
        self
    }

    /// Registers a raw setter for `name`.
    ///
    /// The setter receives the target and the erased [`Value`] being written;
    /// clear operations pass [`Value::null`]. Its result propagates out of
    /// [`Accessors::set`]. Prefer [`Accessors::write`] unless the property
    /// needs custom erased-value handling.
    ///
    /// # Panics
    ///
    /// Panics if `name` already has a setter.
    #[must_use]
    pub fn setter(
        mut self,
        name: &str,
        setter: impl Fn(&mut T, Value) -> Result<(), PropertyError> + 'static,
    ) -> Self {
        let entry = self.entry(name);
        assert!(
            entry.setter.is_none(),
            "property '{name}' already has a setter"
        );
        entry.setter = Some(Box::new(setter));
        self
    }

    /// Registers a typed getter for `name`.
    ///
    /// The returned value is wrapped with [`Value::new`].
    ///
    /// # Panics
    ///
    /// Panics if `name` already has a getter.
    #[must_use]
    pub fn read<V, F>(self, name: &str, getter: F) -> Self
    where
        V: Clone + 'static,
        F: Fn(&T) -> V + 'static,
    {
        self.getter(name, move |target| Value::new(getter(target)))
    }

    /// Registers a typed setter for `name`.
    ///
    /// The setter receives `None` when the property is cleared (the null
    /// sentinel) and `Some(v)` for a matching typed write. A non-null value
    /// of the wrong type is rejected with [`PropertyError::TypeMismatch`]
    /// without invoking the setter.
    ///
    /// # Panics
    ///
    /// Panics if `name` already has a setter.
    #[must_use]
    pub fn write<V, F>(self, name: &str, setter: F) -> Self
    where
        V: Clone + 'static,
        F: Fn(&mut T, Option<V>) + 'static,
    {
        let key = Name::new(name);
        self.setter(name, move |target, value| {
            if value.is_null() {
                setter(target, None);
            } else {
                match value.to_data::<V>() {
                    Some(typed) => setter(target, Some(typed)),
                    None => {
                        return Err(PropertyError::TypeMismatch {
                            name: key.clone(),
                            expected: core::any::type_name::<V>(),
                        });
                    }
                }
            }
            Ok(())
        })
    }

    fn entry(&mut self, name: &str) -> &mut Entry<T> {
        self.entries.entry(Name::new(name)).or_insert(Entry {
            getter: None,
            setter: None,
        })
    }

    /// Returns `true` iff a getter is registered for `name`.
    #[must_use]
    pub fn can_get(&self, name: &str) -> bool {
        self.entries
            .get(&Name::new(name))
            .is_some_and(|e| e.getter.is_some())
    }

    /// Returns `true` iff a setter is registered for `name`.
    #[must_use]
    pub fn can_set(&self, name: &str) -> bool {
        self.entries
            .get(&Name::new(name))
            .is_some_and(|e| e.setter.is_some())
    }

    /// Returns `true` if `name` has any accessor at all.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Name::new(name))
    }

    /// Invokes the getter for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::UnknownProperty`] if no getter is registered.
    pub fn get(&self, target: &T, name: &str) -> Result<Value, PropertyError> {
        let key = Name::new(name);
        self.entries
            .get(&key)
            .and_then(|e| e.getter.as_ref())
            .map(|getter| getter(target))
            .ok_or(PropertyError::UnknownProperty { name: key })
    }

    /// Invokes the setter for `name` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::ReadOnlyProperty`] if `name` has a getter but
    /// no setter, and [`PropertyError::UnknownProperty`] if it has no
    /// accessors at all. The setter's own error — such as
    /// [`PropertyError::TypeMismatch`] from a typed setter — propagates.
    pub fn set(&self, target: &mut T, name: &str, value: Value) -> Result<(), PropertyError> {
        let key = Name::new(name);
        match self.entries.get(&key) {
            Some(entry) => match &entry.setter {
                Some(setter) => setter(target, value),
                None => Err(PropertyError::ReadOnlyProperty { name: key }),
            },
            None => Err(PropertyError::UnknownProperty { name: key }),
        }
    }

    /// Invokes the setter for `name` with the null sentinel.
    ///
    /// # Errors
    ///
    /// Same contract as [`Accessors::set`].
    pub fn clear(&self, target: &mut T, name: &str) -> Result<(), PropertyError> {
        self.set(target, name, Value::null())
    }

    /// Returns the registered member names, in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.entries.keys()
    }

    /// Returns the number of registered members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no members are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Accessors<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for Accessors<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Accessors")
            .field("count", &self.entries.len())
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
