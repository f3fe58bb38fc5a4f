//! Proc-Macros for Pindora dependency wiring

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod inject;

/// Implements the `Inject` trait by resolving every field from the registry
///
/// Each field type must implement `FromRegistry`, e.g. `Arc<dyn Trait>`,
/// `Arc<Concrete>`, `Option<Arc<_>>` or `Registry` itself. A field marked with
/// `#[inject(default)]` is initialized with `Default::default()` instead.
///
/// The generated code refers to `::pindora::di`. Crates that depend on
/// `pindora-di` directly point it elsewhere with `#[inject(crate = "pindora_di")]`.
///
/// # Example
/// ```ignore
/// use std::sync::Arc;
/// use pindora::di::Inject;
///
/// #[derive(Inject)]
/// struct LoginViewModel {
///     auth: Arc<dyn AuthService>,
///     #[inject(default)]
///     attempts: u32,
/// }
///
/// // This expands to:
/// // impl Inject for LoginViewModel {
/// //     fn inject(registry: &Registry) -> Result<Self, Error> {
/// //         Ok(Self {
/// //             auth: FromRegistry::from_registry(registry)?,
/// //             attempts: Default::default(),
/// //         })
/// //     }
/// // }
/// ```
#[proc_macro_derive(Inject, attributes(inject))]
pub fn derive_inject(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    inject::expand_inject(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
