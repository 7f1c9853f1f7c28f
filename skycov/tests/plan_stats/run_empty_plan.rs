use crate::helpers::{mock_skycov, plan, request};
use skycov::{CoverageResult, PlanId, RequestId, Skycov, StatsMethod};
use skycov_mock::fixtures::{PLAN_EMPTY, REQUEST_ZTF};
use skycov_mock::{DynamicMockStore, MockBehavior};

#[tokio::test]
async fn empty_plan_reports_absent_aggregates_and_zero_coverage() {
    let skycov = mock_skycov(StatsMethod::InProcess);
    let rec = skycov.run(PLAN_EMPTY, REQUEST_ZTF).await.unwrap();

    assert_eq!(rec.coverage, CoverageResult::ZERO);
    assert_eq!(rec.start_observation, None);
    assert_eq!(rec.unique_filters, None);
    assert_eq!(rec.num_observations, 0);
    assert_eq!(rec.total_exposure_seconds, 0.0);
    assert_eq!(rec.total_time_with_overhead_seconds, 0.0);
    assert_eq!(rec.time_since_event_seconds, None);
}

#[tokio::test]
async fn empty_plan_never_reads_the_localization() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_plan_behavior(PlanId(1), MockBehavior::Return(plan(1, vec![])))
        .await;
    controller
        .set_request_behavior(RequestId(1), MockBehavior::Return(request(1, 1, 5)))
        .await;

    let skycov = Skycov::builder().with_store(store).build().unwrap();
    let rec = skycov.run(PlanId(1), RequestId(1)).await.unwrap();

    assert_eq!(rec.coverage, CoverageResult::ZERO);
    assert!(controller.tile_fetches().await.is_empty());
}

#[tokio::test]
async fn empty_plan_with_store_method_issues_no_query() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_plan_behavior(PlanId(1), MockBehavior::Return(plan(1, vec![])))
        .await;
    controller
        .set_request_behavior(RequestId(1), MockBehavior::Return(request(1, 1, 5)))
        .await;

    let skycov = Skycov::builder()
        .with_store(store)
        .stats_method(StatsMethod::Store)
        .build()
        .unwrap();
    let rec = skycov.run(PlanId(1), RequestId(1)).await.unwrap();

    assert_eq!(rec.coverage, CoverageResult::ZERO);
    assert_eq!(rec.stats_method, StatsMethod::Store);
    assert!(controller.coverage_queries().await.is_empty());
}
