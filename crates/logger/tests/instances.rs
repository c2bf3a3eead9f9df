//! Scoped instances, overrides, and their diagnostics

use murmur_logger::test_support::CaptureSink;
use murmur_logger::{ColorMode, Config, InstanceOptions, Method};
use serde_json::json;
use std::sync::Arc;

fn quiet_config() -> Config {
    Config::new().color_mode(ColorMode::Never)
}

#[test]
fn override_enables_while_globally_disabled() {
    let sink = CaptureSink::new();
    let logger = quiet_config().wrap(Arc::new(sink.clone()));

    let forced = logger.instance(InstanceOptions::default().with_enabled(true));

    // The mismatch is announced even though logging is globally off
    assert_eq!(sink.count(), 1);
    assert!(sink.contains("[OVERRIDE] LOGGING ENABLED - logging enabled for this instance"));

    forced.log("x");
    let calls = sink.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].args.len(), 2);
    let prefix = calls[1].args[0].as_str().unwrap();
    assert!(prefix.ends_with(" >> "));
    assert!(!prefix.contains("::"));
    assert_eq!(calls[1].args[1], json!("x"));

    // The global flag still governs everything else
    logger.log("dropped");
    assert_eq!(sink.count(), 2);
}

#[test]
fn override_disables_while_globally_enabled() {
    let sink = CaptureSink::new();
    let logger = quiet_config()
        .enable_globally(true)
        .wrap(Arc::new(sink.clone()));
    sink.clear();

    let muted = logger.instance(InstanceOptions::named("Chatty").with_enabled(false));

    assert_eq!(sink.count(), 1);
    assert!(sink.contains("[OVERRIDE] LOGGING DISABLED - logging disabled for Chatty"));

    muted.log("never seen");
    assert_eq!(sink.count(), 1);

    logger.log("root still works");
    assert_eq!(sink.count(), 2);
}

#[test]
fn matching_override_emits_no_diagnostic() {
    let sink = CaptureSink::new();
    let logger = quiet_config().wrap(Arc::new(sink.clone()));

    let _quiet = logger.instance(InstanceOptions::default().with_enabled(false));
    assert!(sink.is_empty());

    logger.set_enabled(true);
    let _loud = logger.instance(InstanceOptions::default().with_enabled(true));
    assert!(sink.is_empty());
}

#[test]
fn diagnostic_respects_the_allow_list() {
    let sink = CaptureSink::new();
    let logger = quiet_config()
        .restrict_methods([Method::Warn])
        .wrap(Arc::new(sink.clone()));

    let forced = logger.instance(InstanceOptions::default().with_enabled(true));
    assert!(sink.is_empty());

    forced.warn("w");
    assert_eq!(sink.count(), 1);
}

#[test]
fn named_instances_scope_the_prefix() {
    let sink = CaptureSink::new();
    let logger = quiet_config()
        .enable_globally(true)
        .wrap(Arc::new(sink.clone()));
    sink.clear();

    logger.named("Engine").info("go");

    let calls = sink.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Info);
    let prefix = calls[0].args[0].as_str().unwrap();
    assert!(prefix.contains("::Engine >> "), "unexpected prefix: {prefix:?}");
}

#[test]
fn blank_names_leave_the_prefix_unscoped() {
    let sink = CaptureSink::new();
    let logger = quiet_config()
        .enable_globally(true)
        .wrap(Arc::new(sink.clone()));
    sink.clear();

    logger.named("   ").log("x");

    let prefix = sink.calls()[0].args[0].as_str().unwrap().to_string();
    assert!(!prefix.contains("::"));
}

#[test]
fn class_names_are_trimmed() {
    let sink = CaptureSink::new();
    let logger = quiet_config()
        .enable_globally(true)
        .wrap(Arc::new(sink.clone()));
    sink.clear();

    logger.named("  Engine ").log("x");

    let prefix = sink.calls()[0].args[0].as_str().unwrap().to_string();
    assert!(prefix.contains("::Engine >> "));
}

#[test]
fn instances_follow_the_global_toggle_without_an_override() {
    let sink = CaptureSink::new();
    let logger = quiet_config().wrap(Arc::new(sink.clone()));
    let scoped = logger.named("Worker");

    scoped.log("dropped");
    assert!(sink.is_empty());

    logger.set_enabled(true);
    scoped.log("seen");
    assert_eq!(sink.count(), 1);

    // Instances can themselves produce further scoped instances
    sink.clear();
    scoped.named("Inner").log("deep");
    let prefix = sink.calls()[0].args[0].as_str().unwrap().to_string();
    assert!(prefix.contains("::Inner >> "));
}
