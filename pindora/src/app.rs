//! Composition root

use crate::{
    config::AppConfig,
    error::Error,
    di::{Inject, ModuleCache, ModuleKey, Registry, RegistryBuilder},
};
use std::sync::Arc;

/// Collects registrations while the app bootstraps.
///
/// Once every capability is registered, [`App::build`] freezes the registry
/// and returns the [`AppContext`] the rest of the app works with.
#[derive(Debug, Default)]
pub struct App {
    /// Wiring configuration
    config: AppConfig,

    /// Registrations collected during bootstrap
    registry: RegistryBuilder,
}

impl App {
    /// Creates a new app with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new app with a specific configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            registry: RegistryBuilder::new(),
        }
    }

    /// Returns the current configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Registers a shared implementation of `T`
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use pindora::App;
    ///
    /// trait Clock: Send + Sync {}
    /// struct SystemClock;
    /// impl Clock for SystemClock {}
    ///
    /// let mut app = App::new();
    /// app.add_singleton::<dyn Clock>(Arc::new(SystemClock));
    /// ```
    pub fn add_singleton<T: ?Sized + Send + Sync + 'static>(&mut self, instance: Arc<T>) -> &mut Self {
        self.registry.register(instance);
        self
    }

    /// Registers a concrete instance
    pub fn add_instance<T: Send + Sync + 'static>(&mut self, instance: T) -> &mut Self {
        self.registry.register_instance(instance);
        self
    }

    /// Freezes the registrations and creates the app context
    pub fn build(self) -> AppContext {
        #[cfg(feature = "tracing")]
        tracing::info!(dependencies = self.registry.len(), "app context built");

        AppContext {
            config: Arc::new(self.config),
            registry: self.registry.build(),
            modules: Arc::new(ModuleCache::new()),
        }
    }
}

/// The wired app: resolves dependencies and hands out module view-models.
///
/// Cloning is cheap, all clones share the same registry and cache.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    registry: Registry,
    modules: Arc<ModuleCache<ModuleKey>>,
}

impl AppContext {
    /// Returns the configuration the app was built with
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the dependency registry
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the module view-model cache
    #[inline]
    pub fn modules(&self) -> &ModuleCache<ModuleKey> {
        &self.modules
    }

    /// Resolves the instance registered for `T`
    ///
    /// # Panics
    /// If `T` is not registered.
    #[inline]
    #[track_caller]
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Arc<T> {
        self.registry.resolve::<T>()
    }

    /// Resolves the instance registered for `T` or returns an error
    #[inline]
    pub fn try_resolve<T: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<T>, Error> {
        let instance = self.registry.try_resolve::<T>()?;
        Ok(instance)
    }

    /// Constructs `T` from the registered collaborators
    ///
    /// # Panics
    /// If a collaborator of `T` is not registered.
    #[inline]
    #[track_caller]
    pub fn inject<T: Inject>(&self) -> T {
        self.registry.inject::<T>()
    }

    /// Constructs `T` from the registered collaborators or returns an error
    #[inline]
    pub fn try_inject<T: Inject>(&self) -> Result<T, Error> {
        let value = self.registry.try_inject::<T>()?;
        Ok(value)
    }

    /// Returns the view-model of `key`, constructing it with `factory` on first use
    #[inline]
    pub fn view_model<T, F>(&self, key: ModuleKey, factory: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T
    {
        self.modules.get_or_create(key, factory)
    }

    /// Returns the view-model of `key`, constructing it with a fallible `factory`
    /// on first use. Nothing is cached when `factory` fails.
    #[inline]
    pub fn try_view_model<T, E, F>(&self, key: ModuleKey, factory: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T, E>
    {
        self.modules.try_get_or_create(key, factory)
    }

    /// Returns the view-model of `key`, injecting it from the registry on first use
    ///
    /// # Panics
    /// If a collaborator of `T` is not registered.
    #[inline]
    #[track_caller]
    pub fn injected_view_model<T: Inject + 'static>(&self, key: ModuleKey) -> Arc<T> {
        self.modules.get_or_create(key, || self.registry.inject::<T>())
    }

    /// Drops the view-model of `key`
    #[inline]
    pub fn invalidate(&self, key: ModuleKey) -> bool {
        self.modules.invalidate(key)
    }

    /// Drops the view-models of the module groups configured for logout.
    ///
    /// Returns the number of dropped view-models.
    pub fn logout(&self) -> usize {
        let removed = self.modules.invalidate_where(|key| self.config.drops_on_logout(key));

        #[cfg(feature = "tracing")]
        tracing::info!(removed, "logged out, module view-models dropped");

        removed
    }

    /// Drops every view-model, e.g. on app reset or user switch
    pub fn reset(&self) {
        self.modules.invalidate_all();

        #[cfg(feature = "tracing")]
        tracing::info!("app reset, every module view-model dropped");
    }
}
