use std::sync::Arc;

use skycov::Skycov;
use skycov_demos::common::{config_from_env, get_store};
use skycov_mock::RecordingSink;
use skycov_mock::fixtures::{PLAN_MIXED, REQUEST_DECAM};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sink = Arc::new(RecordingSink::new());
    let skycov = Skycov::builder()
        .with_store(get_store())
        .with_sink(sink.clone())
        .config(config_from_env()?)
        .build()?;

    skycov.run_and_publish(PLAN_MIXED, REQUEST_DECAM).await?;

    for record in sink.records().await {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}
