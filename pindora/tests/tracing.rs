#![allow(missing_docs)]

use std::{
    io::Write,
    sync::{Arc, Mutex}
};
use pindora::{App, di::ModuleKey};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

struct Clock;

struct HomeViewModel;

#[test]
fn it_traces_wiring_events() {
    let captured = Captured::default();
    let writer = captured.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut app = App::new();
        app.add_instance(Clock);
        app.add_instance(Clock);

        let ctx = app.build();
        ctx.view_model(ModuleKey::Home, || HomeViewModel);
        ctx.view_model(ModuleKey::Home, || HomeViewModel);
        ctx.logout();
        ctx.reset();
    });

    let logs = captured.text();

    assert!(logs.contains("dependency registered"));
    assert!(logs.contains("dependency re-registered, previous instance replaced"));
    assert!(logs.contains("module object cache miss, constructing"));
    assert!(logs.contains("module object cache hit"));
    assert!(logs.contains("logged out, module view-models dropped"));
    assert!(logs.contains("app reset, every module view-model dropped"));
}

#[test]
fn it_stays_quiet_when_logout_drops_nothing() {
    let captured = Captured::default();
    let writer = captured.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let removed = tracing::subscriber::with_default(subscriber, || {
        let ctx = App::new().build();
        ctx.view_model(ModuleKey::Login, || HomeViewModel);
        ctx.logout()
    });

    let logs = captured.text();

    assert_eq!(removed, 0);
    assert!(logs.contains("logged out, module view-models dropped"));
    assert!(!logs.contains("module objects invalidated"));
}

#[test]
fn it_traces_invalidation_when_logout_drops_modules() {
    let captured = Captured::default();
    let writer = captured.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trace"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let ctx = App::new().build();
        ctx.view_model(ModuleKey::Home, || HomeViewModel);
        ctx.logout();
    });

    assert!(captured.text().contains("module objects invalidated"));
}
