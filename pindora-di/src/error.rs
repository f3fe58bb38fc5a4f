//! Describes dependency wiring errors

use std::fmt::{Display, Formatter};

/// An error that may occur while resolving a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Nothing has been registered for the requested type
    NotRegistered(&'static str),
    /// An entry exists but it can't be viewed as the requested type
    ResolveFailed(&'static str),
    /// A custom failure raised by an [`Inject`](crate::Inject) implementation
    Other(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotRegistered(type_name) => write!(f, "Registry Error: {type_name} is not registered; register it before calling resolve"),
            Error::ResolveFailed(type_name) => write!(f, "Registry Error: unable to resolve the dependency: {type_name}"),
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn it_names_the_missing_type() {
        let err = Error::NotRegistered("app::AuthService");

        assert_eq!(
            err.to_string(),
            "Registry Error: app::AuthService is not registered; register it before calling resolve"
        );
    }

    #[test]
    fn it_displays_other_as_is() {
        let err = Error::Other("session expired");

        assert_eq!(err.to_string(), "session expired");
    }
}
