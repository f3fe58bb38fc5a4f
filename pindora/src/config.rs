//! Application configuration

use crate::{di::{ModuleGroup, ModuleKey}, error::Error};
use serde::Deserialize;
use std::path::Path;

/// Represents the wiring configuration
///
/// # Example
/// ```
/// use pindora::{AppConfig, di::ModuleGroup};
///
/// let config = AppConfig::from_json(r#"{ "logoutGroups": ["mainTab", "login"] }"#).unwrap();
///
/// assert_eq!(config.logout_groups(), [ModuleGroup::MainTab, ModuleGroup::Login]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AppConfig {
    /// Module groups whose view-models are dropped on logout
    ///
    /// Default: `[mainTab]`
    logout_groups: Vec<ModuleGroup>,
}

impl Default for AppConfig {
    #[inline]
    fn default() -> Self {
        Self {
            logout_groups: vec![ModuleGroup::MainTab],
        }
    }
}

impl AppConfig {
    /// Creates a default configuration
    ///
    /// Defaults:
    /// - logout_groups: `[mainTab]`
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Reads the configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Configures which module groups are dropped on logout
    ///
    /// Default: `[mainTab]`
    pub fn with_logout_groups(mut self, groups: impl IntoIterator<Item = ModuleGroup>) -> Self {
        self.logout_groups = groups.into_iter().collect();
        self
    }

    /// Returns the module groups dropped on logout
    #[inline]
    pub fn logout_groups(&self) -> &[ModuleGroup] {
        &self.logout_groups
    }

    /// Returns `true` if the view-model of `key` is dropped on logout
    #[inline]
    pub fn drops_on_logout(&self, key: ModuleKey) -> bool {
        self.logout_groups.contains(&key.group())
    }
}
