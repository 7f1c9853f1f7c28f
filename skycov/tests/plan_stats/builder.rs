use std::sync::Arc;
use std::time::Duration;

use crate::helpers::{Bare, PlansOnly};
use skycov::{Skycov, SkycovConfig, SkycovError, StatsMethod};
use skycov_mock::MockStore;

fn build_err(builder: skycov::SkycovBuilder) -> SkycovError {
    builder.build().err().expect("build must fail")
}

#[test]
fn defaults() {
    let skycov = Skycov::builder()
        .with_store(Arc::new(MockStore::new()))
        .build()
        .unwrap();
    let cfg = skycov.config();
    assert_eq!(cfg.healpix_order, 29);
    assert_eq!(cfg.stats_method, StatsMethod::InProcess);
    assert_eq!(cfg.fetch_timeout, Duration::from_secs(30));
    assert_eq!(cfg.request_timeout, None);
    assert_eq!(cfg.max_concurrent_runs, 8);
    assert_eq!(skycov.stats_method(), StatsMethod::InProcess);
}

#[test]
fn missing_store_is_invalid() {
    let err = build_err(Skycov::builder());
    assert!(matches!(err, SkycovError::InvalidArg(_)));
}

#[test]
fn order_above_29_is_invalid() {
    let err = build_err(
        Skycov::builder()
            .with_store(Arc::new(MockStore::new()))
            .healpix_order(30),
    );
    assert!(matches!(err, SkycovError::InvalidArg(_)));
}

#[test]
fn zero_concurrency_is_invalid() {
    let err = build_err(
        Skycov::builder()
            .with_store(Arc::new(MockStore::new()))
            .max_concurrent_runs(0),
    );
    assert!(matches!(err, SkycovError::InvalidArg(_)));
}

#[test]
fn store_capabilities_are_checked() {
    let err = build_err(Skycov::builder().with_store(Arc::new(Bare)));
    assert_eq!(err, SkycovError::unsupported("observation-plan"));

    let err = build_err(Skycov::builder().with_store(Arc::new(PlansOnly(MockStore::new()))));
    assert_eq!(err, SkycovError::unsupported("localization-tiles"));
}

#[test]
fn whole_config_can_be_supplied() {
    let cfg = SkycovConfig {
        healpix_order: 12,
        stats_method: StatsMethod::Store,
        fetch_timeout: Duration::from_millis(750),
        request_timeout: Some(Duration::from_secs(5)),
        max_concurrent_runs: 2,
    };
    let skycov = Skycov::builder()
        .with_store(Arc::new(MockStore::new()))
        .config(cfg.clone())
        .build()
        .unwrap();
    assert_eq!(skycov.config().healpix_order, 12);
    assert_eq!(skycov.config().request_timeout, cfg.request_timeout);
    assert_eq!(skycov.stats_method(), StatsMethod::Store);
}
