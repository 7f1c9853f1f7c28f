use std::sync::Arc;

use skycov::{PlanStore, Skycov, SkycovConfig, SkycovError, StatsMethod};

/// Return the store the demos read from.
///
/// Demos always run against the deterministic fixture store.
#[must_use]
pub fn get_store() -> Arc<dyn PlanStore> {
    Arc::new(skycov_mock::MockStore::new())
}

/// Configuration for the demos, with the coverage method taken from
/// `SKYCOV_STATS_METHOD` (`in-process` or `store`) when set.
///
/// # Errors
/// Returns `InvalidArg` for an unrecognised method name.
pub fn config_from_env() -> Result<SkycovConfig, SkycovError> {
    let mut cfg = SkycovConfig::default();
    if let Ok(method) = std::env::var("SKYCOV_STATS_METHOD") {
        cfg.stats_method = match method.as_str() {
            "in-process" => StatsMethod::InProcess,
            "store" => StatsMethod::Store,
            other => {
                return Err(SkycovError::InvalidArg(format!(
                    "unknown SKYCOV_STATS_METHOD '{other}'"
                )));
            }
        };
    }
    Ok(cfg)
}

/// Build an orchestrator over [`get_store`] with [`config_from_env`].
///
/// # Errors
/// Propagates configuration and builder errors.
pub fn build_skycov() -> Result<Skycov, SkycovError> {
    Skycov::builder()
        .with_store(get_store())
        .config(config_from_env()?)
        .build()
}
