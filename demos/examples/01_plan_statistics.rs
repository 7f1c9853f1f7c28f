use skycov_demos::common::build_skycov;
use skycov_mock::fixtures::{PLAN_EMPTY, PLAN_OVERLAPPING, REQUEST_ZTF};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let skycov = build_skycov()?;
    println!("coverage method: {}", skycov.stats_method());

    for plan in [PLAN_OVERLAPPING, PLAN_EMPTY] {
        let rec = skycov.run(plan, REQUEST_ZTF).await?;
        println!("--- {plan} for {} ---", rec.request_id);
        println!(
            "area: {:.3e} sr ({:.3e} deg²)",
            rec.coverage.area_steradians,
            rec.coverage.area_square_degrees()
        );
        println!("probability: {:.3e}", rec.coverage.probability);
        match &rec.start_observation {
            Some(start) => println!("first observation: {start}"),
            None => println!("first observation: none"),
        }
        match &rec.unique_filters {
            Some(filters) => println!("filters: {}", filters.join(", ")),
            None => println!("filters: none"),
        }
        println!(
            "{} observations, {:.0}s exposure, {:.0}s with overhead",
            rec.num_observations, rec.total_exposure_seconds, rec.total_time_with_overhead_seconds
        );
        if let Some(delay) = rec.time_since_event_seconds {
            println!("started {delay:.0}s after the event");
        }
    }

    Ok(())
}
