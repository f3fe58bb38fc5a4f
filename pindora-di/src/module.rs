//! Identifiers of the navigational modules

use std::{
    fmt::{Display, Formatter},
    str::FromStr
};

/// Identifies a navigational module whose view-model may be cached.
///
/// The set is closed: a new screen flow gets a new variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ModuleKey {
    /// Sign-in screen
    Login,
    /// One-time questions asked right after the first sign-in
    OneTimeAsk,
    /// Home tab
    Home,
}

/// A group of modules that share a lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ModuleGroup {
    /// Screens shown before the user is signed in
    Login,
    /// Screens hosted by the main tab bar
    MainTab,
}

impl ModuleKey {
    /// Every known module
    pub const ALL: [ModuleKey; 3] = [
        ModuleKey::Login,
        ModuleKey::OneTimeAsk,
        ModuleKey::Home,
    ];

    /// Returns the stable name of the module
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            ModuleKey::Login => "login",
            ModuleKey::OneTimeAsk => "oneTimeAsk",
            ModuleKey::Home => "home",
        }
    }

    /// Returns the group the module belongs to
    #[inline]
    pub const fn group(self) -> ModuleGroup {
        match self {
            ModuleKey::Login | ModuleKey::OneTimeAsk => ModuleGroup::Login,
            ModuleKey::Home => ModuleGroup::MainTab,
        }
    }
}

impl ModuleGroup {
    /// Iterates over the modules of this group
    pub fn modules(self) -> impl Iterator<Item = ModuleKey> {
        ModuleKey::ALL
            .into_iter()
            .filter(move |key| key.group() == self)
    }
}

impl Display for ModuleKey {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string doesn't name a known module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModule(pub String);

impl Display for UnknownModule {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown module: {}", self.0)
    }
}

impl std::error::Error for UnknownModule {}

impl FromStr for ModuleKey {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownModule(s.into()))
    }
}
