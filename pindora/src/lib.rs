//! # Pindora
//!
//! > Dependency wiring for the Pindora app: a type-keyed registry that binds every
//! > capability to one shared implementation, and a per-module cache that keeps
//! > view-models alive across navigation until they are explicitly dropped.
//!
//! ## Features
//! * Fail-fast resolution with a non-fatal `try_` variant
//! * Explicit constructor injection with `#[derive(Inject)]`
//! * Lazily constructed, identity-preserving view-model cache
//! * Logout and reset policies configurable from JSON
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use pindora::{App, di::ModuleKey};
//!
//! trait AuthService: Send + Sync {
//!     fn provider(&self) -> &'static str;
//! }
//!
//! struct KakaoAuth;
//!
//! impl AuthService for KakaoAuth {
//!     fn provider(&self) -> &'static str { "kakao" }
//! }
//!
//! struct LoginViewModel {
//!     auth: Arc<dyn AuthService>,
//! }
//!
//! let mut app = App::new();
//! app.add_singleton::<dyn AuthService>(Arc::new(KakaoAuth));
//!
//! let ctx = app.build();
//!
//! let login = ctx.view_model(ModuleKey::Login, || LoginViewModel {
//!     auth: ctx.resolve::<dyn AuthService>(),
//! });
//!
//! assert_eq!(login.auth.provider(), "kakao");
//! ```

extern crate self as pindora;

pub mod app;
pub mod config;
pub mod di;
pub mod error;

pub use crate::{
    app::{App, AppContext},
    config::AppConfig,
};
