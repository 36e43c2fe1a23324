// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-erased member values.
//!
//! This module provides [`Value`], the currency of virtual property reads and
//! writes, event payloads, and delegated method arguments/results.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::fmt;

/// A callable stored inside a [`Value`].
///
/// Callable values let a component expose a function-valued property that its
/// method fallback can invoke as if it were a method.
pub type Callable = Rc<dyn Fn(&[Value]) -> Value>;

/// A type-erased member value.
///
/// A `Value` is one of three shapes:
///
/// - **null** — the explicit "no value" sentinel. Clearing a property invokes
///   its setter with a null value, and existence checks treat a null read as
///   absent.
/// - **data** — any `Clone + 'static` value, stored on the heap with its type
///   information for later downcasting.
/// - **callable** — a function taking a slice of values and returning one.
///
/// # Example
///
/// ```rust
/// use canopy_core::Value;
///
/// let v = Value::new(42_i32);
/// assert!(v.is::<i32>());
/// assert_eq!(v.downcast_ref::<i32>(), Some(&42));
///
/// let f = Value::callable(|args| {
///     let n = args[0].downcast_ref::<i32>().copied().unwrap_or(0);
///     Value::new(n * 2)
/// });
/// let doubled = f.call(&[Value::new(21_i32)]).unwrap();
/// assert_eq!(doubled.downcast_ref::<i32>(), Some(&42));
/// ```
#[derive(Clone)]
pub struct Value {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Null,
    Data { data: Box<dyn ErasedData>, type_id: TypeId },
    Callable(Callable),
}

impl Value {
    /// Returns the null sentinel.
    #[must_use]
    pub const fn null() -> Self {
        Self { inner: Inner::Null }
    }

    /// Creates a value from concrete data.
    #[must_use]
    pub fn new<T: Clone + 'static>(data: T) -> Self {
        Self {
            inner: Inner::Data {
                type_id: TypeId::of::<T>(),
                data: Box::new(data),
            },
        }
    }

    /// Creates a callable value.
    #[must_use]
    pub fn callable(f: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            inner: Inner::Callable(Rc::new(f)),
        }
    }

    /// Returns `true` if this is the null sentinel.
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self.inner, Inner::Null)
    }

    /// Returns `true` if this value holds data of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id() == Some(TypeId::of::<T>())
    }

    /// Returns the [`TypeId`] of the contained data, if this is a data value.
    #[must_use]
    pub fn type_id(&self) -> Option<TypeId> {
        match &self.inner {
            Inner::Data { type_id, .. } => Some(*type_id),
            _ => None,
        }
    }

    /// Attempts to downcast to a reference of type `T`.
    ///
    /// Returns `None` for null values, callables, and mismatched types.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match &self.inner {
            Inner::Data { data, .. } => data.as_any().downcast_ref(),
            _ => None,
        }
    }

    /// Clones the contained data out as a `T`.
    ///
    /// Returns `None` for null values, callables, and mismatched types.
    #[must_use]
    pub fn to_data<T: Clone + 'static>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    /// Returns `true` if this value is callable.
    #[must_use]
    #[inline]
    pub fn is_callable(&self) -> bool {
        matches!(self.inner, Inner::Callable(_))
    }

    /// Returns the contained callable, if any.
    #[must_use]
    pub fn as_callable(&self) -> Option<&Callable> {
        match &self.inner {
            Inner::Callable(f) => Some(f),
            _ => None,
        }
    }

    /// Invokes the contained callable with `args`.
    ///
    /// Returns `None` if this value is not callable.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Option<Value> {
        match &self.inner {
            Inner::Callable(f) => Some(f(args)),
            _ => None,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Null => f.write_str("Value::Null"),
            Inner::Data { type_id, .. } => f
                .debug_struct("Value::Data")
                .field("type_id", type_id)
                .finish_non_exhaustive(),
            Inner::Callable(_) => f.write_str("Value::Callable"),
        }
    }
}

/// Trait object for type-erased data that can be cloned.
trait ErasedData: Any {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn ErasedData>;
}

impl<T: Clone + 'static> ErasedData for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ErasedData> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn ErasedData> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn value_null() {
        let v = Value::null();
        assert!(v.is_null());
        assert!(!v.is::<i32>());
        assert!(v.downcast_ref::<i32>().is_none());
        assert!(v.type_id().is_none());
    }

    #[test]
    fn value_data() {
        let v = Value::new(42_i32);
        assert!(!v.is_null());
        assert!(v.is::<i32>());
        assert!(!v.is::<f64>());
        assert_eq!(v.downcast_ref::<i32>(), Some(&42));
        assert_eq!(v.downcast_ref::<f64>(), None);
        assert_eq!(v.to_data::<i32>(), Some(42));
    }

    #[test]
    fn value_string_clone() {
        let v = Value::new(String::from("hello"));
        let cloned = v.clone();
        assert_eq!(
            cloned.downcast_ref::<String>().map(String::as_str),
            Some("hello")
        );
        // Original still works.
        assert_eq!(v.downcast_ref::<String>().map(String::as_str), Some("hello"));
    }

    #[test]
    fn value_callable() {
        let f = Value::callable(|args| {
            let n = args.first().and_then(|v| v.downcast_ref::<i32>()).copied();
            Value::new(n.unwrap_or(0) + 1)
        });
        assert!(f.is_callable());
        assert!(!f.is_null());
        assert!(f.as_callable().is_some());

        let out = f.call(&[Value::new(1_i32)]).unwrap();
        assert_eq!(out.downcast_ref::<i32>(), Some(&2));
    }

    #[test]
    fn value_call_on_non_callable() {
        assert!(Value::new(1_i32).call(&[]).is_none());
        assert!(Value::null().call(&[]).is_none());
    }

    #[test]
    fn value_default_is_null() {
        assert!(Value::default().is_null());
    }

    #[test]
    fn value_debug() {
        assert_eq!(format!("{:?}", Value::null()), "Value::Null");
        assert!(format!("{:?}", Value::new(1_i32)).contains("Value::Data"));
        assert_eq!(format!("{:?}", Value::callable(|_| Value::null())), "Value::Callable");
    }
}
