//! Utilities to construct consumers from registered collaborators

use crate::{Registry, error::Error};

/// A trait that describes how a consumer receives its collaborators.
///
/// The composition root calls [`Registry::inject`] once, and the consumer
/// keeps the resolved collaborators as plain fields, so every dependency is
/// visible in its constructor.
///
/// With the `macros` feature enabled, `#[derive(Inject)]` generates the same
/// code by resolving every field through [`FromRegistry`](crate::FromRegistry).
/// Outside of the `pindora` facade, mark the struct with
/// `#[inject(crate = "pindora_di")]`.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use pindora_di::{Inject, Registry, RegistryBuilder, error::Error};
///
/// trait AuthService: Send + Sync {
///     fn is_signed_in(&self) -> bool;
/// }
///
/// struct KakaoAuth;
///
/// impl AuthService for KakaoAuth {
///     fn is_signed_in(&self) -> bool { true }
/// }
///
/// struct LoginViewModel {
///     auth: Arc<dyn AuthService>
/// }
///
/// impl Inject for LoginViewModel {
///     fn inject(registry: &Registry) -> Result<Self, Error> {
///         let auth = registry.try_resolve::<dyn AuthService>()?;
///         Ok(Self { auth })
///     }
/// }
///
/// let mut registry = RegistryBuilder::new();
/// registry.register::<dyn AuthService>(Arc::new(KakaoAuth));
///
/// let registry = registry.build();
/// let view_model = registry.inject::<LoginViewModel>();
///
/// assert!(view_model.auth.is_signed_in());
/// ```
pub trait Inject: Sized + Send + Sync {
    /// Constructs `Self` from the collaborators bound in `registry`
    fn inject(registry: &Registry) -> Result<Self, Error>;
}
