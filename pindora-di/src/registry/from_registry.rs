//! Extractors for fetching collaborators from the registry

use super::{Error, Registry};
use std::sync::Arc;

/// A trait that defines how to extract the `Self` from the registry
pub trait FromRegistry: Sized + Send + Sync {
    /// Extracts `Self` from the registry
    fn from_registry(registry: &Registry) -> Result<Self, Error>;
}

impl FromRegistry for Registry {
    #[inline]
    fn from_registry(registry: &Registry) -> Result<Self, Error> {
        Ok(registry.clone())
    }
}

impl FromRegistry for () {
    #[inline]
    fn from_registry(_: &Registry) -> Result<Self, Error> {
        Ok(())
    }
}

impl<T: ?Sized + Send + Sync + 'static> FromRegistry for Arc<T> {
    #[inline]
    fn from_registry(registry: &Registry) -> Result<Self, Error> {
        registry.try_resolve::<T>()
    }
}

/// An optional collaborator: `None` when it's not registered
impl<T: FromRegistry> FromRegistry for Option<T> {
    #[inline]
    fn from_registry(registry: &Registry) -> Result<Self, Error> {
        match T::from_registry(registry) {
            Ok(value) => Ok(Some(value)),
            Err(Error::NotRegistered(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

macro_rules! define_generic_from_registry {
    ($($T: ident),*) => {
        impl<$($T: FromRegistry),+> FromRegistry for ($($T,)+) {
            #[inline]
            #[allow(non_snake_case)]
            fn from_registry(registry: &Registry) -> Result<Self, Error> {
                let tuple = (
                    $(
                    $T::from_registry(registry)?,
                    )*
                );
                Ok(tuple)
            }
        }
    }
}

define_generic_from_registry! { T1 }
define_generic_from_registry! { T1, T2 }
define_generic_from_registry! { T1, T2, T3 }
define_generic_from_registry! { T1, T2, T3, T4 }
define_generic_from_registry! { T1, T2, T3, T4, T5 }
