//! Macros for dependency injection

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{Data, DeriveInput, Field, Fields, LitStr, Path, spanned::Spanned};

/// Creates a derive-macro for the `Inject` trait
pub(super) fn expand_inject(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let di = di_path(input)?;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => return Err(syn::Error::new(
            data.enum_token.span(),
            "`Inject` can only be derived for structs"
        )),
        Data::Union(data) => return Err(syn::Error::new(
            data.union_token.span(),
            "`Inject` can only be derived for structs"
        )),
    };

    let construct = match fields {
        Fields::Named(named) => {
            let inits = named.named
                .iter()
                .map(|field| {
                    let ident = &field.ident;
                    let value = field_value(&di, field)?;
                    Ok(quote! { #ident: #value })
                })
                .collect::<syn::Result<Vec<_>>>()?;
            quote! { Self { #(#inits,)* } }
        },
        Fields::Unnamed(unnamed) => {
            let values = unnamed.unnamed
                .iter()
                .map(|field| field_value(&di, field))
                .collect::<syn::Result<Vec<_>>>()?;
            quote! { Self( #(#values,)* ) }
        },
        Fields::Unit => quote! { Self },
    };

    Ok(quote! {
        impl #impl_generics #di::Inject for #name #ty_generics #where_clause {
            #[inline]
            fn inject(registry: &#di::Registry) -> ::core::result::Result<Self, #di::error::Error> {
                let _ = registry;
                ::core::result::Result::Ok(#construct)
            }
        }
    })
}

/// Resolves the path of the DI crate, `::pindora::di` unless overridden
/// with `#[inject(crate = "pindora_di")]`
fn di_path(input: &DeriveInput) -> syn::Result<Path> {
    let mut path: Option<Path> = None;
    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                path = Some(lit.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("unsupported inject attribute, expected `crate`"))
            }
        })?;
    }
    Ok(path.unwrap_or_else(|| syn::parse_quote!(::pindora::di)))
}

/// Builds the expression that initializes a single field
fn field_value(di: &Path, field: &Field) -> syn::Result<TokenStream> {
    let ty = &field.ty;
    if is_default(field)? {
        Ok(quote_spanned! { ty.span() => <#ty as ::core::default::Default>::default() })
    } else {
        Ok(quote_spanned! { ty.span() => <#ty as #di::FromRegistry>::from_registry(registry)? })
    }
}

/// Checks for `#[inject(default)]`
fn is_default(field: &Field) -> syn::Result<bool> {
    let mut default = false;
    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("inject")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                default = true;
                Ok(())
            } else {
                Err(meta.error("unsupported inject attribute, expected `default`"))
            }
        })?;
    }
    Ok(default)
}
