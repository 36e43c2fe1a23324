// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The behavior factory seam.
//!
//! Components accept either live boxed behaviors or declarative behavior
//! configuration. Resolving configuration into an instance is the job of an
//! injected factory, so the composition core never does any runtime type
//! lookup itself.

use alloc::boxed::Box;

use crate::behavior::Behavior;
use crate::error::BehaviorError;

/// Creates behaviors from declarative configuration.
///
/// # Example
///
/// ```rust
/// use canopy_behavior::{Behavior, BehaviorFactory, BehaviorError};
///
/// struct TagBehavior {
///     tag: u32,
/// }
///
/// impl Behavior<u32> for TagBehavior {}
///
/// struct TagFactory;
///
/// impl BehaviorFactory<u32> for TagFactory {
///     type Config = u32;
///
///     fn create(&self, config: &u32) -> Result<Box<dyn Behavior<u32>>, BehaviorError> {
///         Ok(Box::new(TagBehavior { tag: *config }))
///     }
/// }
///
/// let behavior = TagFactory.create(&7).unwrap();
/// drop(behavior);
/// ```
pub trait BehaviorFactory<K> {
    /// The declarative configuration this factory understands.
    type Config;

    /// Creates a behavior from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BehaviorError::InvalidOperation`] if the configuration is
    /// not resolvable.
    fn create(&self, config: &Self::Config) -> Result<Box<dyn Behavior<K>>, BehaviorError>;
}
