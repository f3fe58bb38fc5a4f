//! Tools for dependency wiring

use super::error::Error;
pub use pindora_di::{
    FromRegistry,
    Inject,
    ModuleCache,
    ModuleGroup,
    ModuleKey,
    Registry,
    RegistryBuilder,
    module::UnknownModule,
};

pub mod error {
    //! Dependency wiring errors
    pub use pindora_di::error::Error;
}

impl From<error::Error> for Error {
    #[inline]
    fn from(err: error::Error) -> Self {
        Error::Registry(err)
    }
}
