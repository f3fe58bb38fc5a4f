#![allow(missing_docs, dead_code)]

use std::sync::Arc;
use pindora::di::{Inject, Registry, RegistryBuilder};

trait AuthService: Send + Sync {
    fn provider(&self) -> &'static str;
}

struct KakaoAuth;

impl AuthService for KakaoAuth {
    fn provider(&self) -> &'static str {
        "kakao"
    }
}

struct PageSize(usize);

#[derive(Inject)]
struct LoginViewModel {
    auth: Arc<dyn AuthService>,
    page_size: Option<Arc<PageSize>>,
    #[inject(default)]
    attempts: u32,
}

#[derive(Inject)]
struct Coordinator(Registry, Arc<dyn AuthService>);

#[derive(Inject)]
struct Splash;

fn main() {
    let mut registry = RegistryBuilder::new();
    registry.register::<dyn AuthService>(Arc::new(KakaoAuth));

    let registry = registry.build();

    let view_model = registry.inject::<LoginViewModel>();
    assert_eq!(view_model.auth.provider(), "kakao");
    assert!(view_model.page_size.is_none());
    assert_eq!(view_model.attempts, 0);

    let coordinator = registry.inject::<Coordinator>();
    assert_eq!(coordinator.0.len(), 1);

    let _ = registry.inject::<Splash>();
}
