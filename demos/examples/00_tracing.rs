use skycov_demos::common::build_skycov;
use skycov_mock::fixtures::{PLAN_FAIL, PLAN_MIXED, PLAN_OVERLAPPING, REQUEST_DECAM, REQUEST_ZTF};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,skycov=debug,skycov_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let skycov = build_skycov()?;

    // Single run
    let _ = skycov.run(PLAN_OVERLAPPING, REQUEST_ZTF).await?;

    // Batch with one failing plan; the failure is logged and reported, not raised
    let report = skycov
        .run_many(&[
            (PLAN_MIXED, REQUEST_ZTF),
            (PLAN_MIXED, REQUEST_DECAM),
            (PLAN_FAIL, REQUEST_ZTF),
        ])
        .await?;
    tracing::info!(
        records = report.records.len(),
        failures = report.failures.len(),
        "batch finished"
    );

    Ok(())
}
