#![allow(missing_docs, dead_code)]

use std::sync::Arc;
use pindora_di::{Inject, RegistryBuilder};

trait PinRepository: Send + Sync {
    fn count(&self) -> usize;
}

struct InMemoryPins;

impl PinRepository for InMemoryPins {
    fn count(&self) -> usize {
        3
    }
}

#[derive(Inject)]
#[inject(crate = "pindora_di")]
struct HomeViewModel {
    pins: Arc<dyn PinRepository>,
    #[inject(default)]
    selected: Option<usize>,
}

#[derive(Inject)]
#[inject(crate = "::pindora_di")]
struct OneTimeAskViewModel(Arc<dyn PinRepository>);

fn main() {
    let mut registry = RegistryBuilder::new();
    registry.register::<dyn PinRepository>(Arc::new(InMemoryPins));

    let registry = registry.build();

    let home = registry.inject::<HomeViewModel>();
    assert_eq!(home.pins.count(), 3);
    assert!(home.selected.is_none());

    let ask = registry.inject::<OneTimeAskViewModel>();
    assert!(Arc::ptr_eq(&ask.0, &home.pins));
}
