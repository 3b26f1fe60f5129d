//! Tests for the ASA tracing setup.

use std::sync::Mutex;

use asa_core::tracing::init_tracing;

static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_per_module_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ASA_LOG", "asa_analysis::checks=debug,asa_core=info");
    init_tracing();
    std::env::remove_var("ASA_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::warn!("still alive after double init");
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ASA_LOG", "this_is=garbage=not=a=filter");
    init_tracing();
    std::env::remove_var("ASA_LOG");
}
