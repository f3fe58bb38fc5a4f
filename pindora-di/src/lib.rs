//! Tools for dependency wiring
//!
//! Two independent containers live here:
//! * [`Registry`] binds an abstract type to one shared instance and resolves it,
//!   failing fast when the binding is missing.
//! * [`ModuleCache`] lazily constructs one object per [`ModuleKey`] and hands out
//!   the same instance until it is invalidated.

pub use crate::{
    registry::{Registry, RegistryBuilder, FromRegistry},
    inject::Inject,
    module::{ModuleKey, ModuleGroup},
    module_cache::ModuleCache,
};

#[cfg(feature = "macros")]
pub use pindora_macros::Inject;

pub mod error;
pub mod registry;
pub mod inject;
pub mod module;
pub mod module_cache;
