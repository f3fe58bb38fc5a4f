#![allow(missing_docs)]

use std::sync::Arc;
use pindora::{App, di::{Inject, ModuleKey, Registry}};

trait AuthService: Send + Sync {
    fn provider(&self) -> &'static str;
}

struct KakaoAuth;

impl AuthService for KakaoAuth {
    fn provider(&self) -> &'static str {
        "kakao"
    }
}

trait AnalyticsService: Send + Sync {}

#[derive(Debug, PartialEq)]
struct PageSize(usize);

#[derive(Inject)]
struct HomeViewModel {
    auth: Arc<dyn AuthService>,
    page_size: Arc<PageSize>,
    analytics: Option<Arc<dyn AnalyticsService>>,
    #[inject(default)]
    visits: u32,
}

#[derive(Inject)]
struct OneTimeAskViewModel(Arc<dyn AuthService>, Registry);

#[test]
fn it_injects_every_field() {
    let mut app = App::new();
    app.add_singleton::<dyn AuthService>(Arc::new(KakaoAuth))
        .add_instance(PageSize(30));

    let ctx = app.build();
    let home = ctx.injected_view_model::<HomeViewModel>(ModuleKey::Home);

    assert_eq!(home.auth.provider(), "kakao");
    assert_eq!(*home.page_size, PageSize(30));
    assert!(home.analytics.is_none());
    assert_eq!(home.visits, 0);
}

#[test]
fn it_injects_tuple_struct() {
    let mut app = App::new();
    app.add_singleton::<dyn AuthService>(Arc::new(KakaoAuth));

    let ctx = app.build();
    let ask = ctx.inject::<OneTimeAskViewModel>();

    assert!(Arc::ptr_eq(&ask.0, &ctx.resolve::<dyn AuthService>()));
    assert_eq!(ask.1.len(), 1);
}

#[test]
fn it_reports_first_missing_field() {
    let mut app = App::new();
    app.add_singleton::<dyn AuthService>(Arc::new(KakaoAuth));

    let ctx = app.build();
    let err = match ctx.try_inject::<HomeViewModel>() {
        Ok(_) => panic!("page size is not registered"),
        Err(err) => err,
    };

    assert!(err.to_string().contains("PageSize"));
}
