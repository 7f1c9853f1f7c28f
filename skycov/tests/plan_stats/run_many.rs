use std::sync::Arc;
use std::time::Duration;

use crate::helpers::request;
use skycov::{PlanId, RequestId, Skycov, SkycovError, StatsMethod};
use skycov_mock::fixtures::{
    PLAN_EMPTY, PLAN_FAIL, PLAN_MIXED, PLAN_OVERLAPPING, REQUEST_DECAM, REQUEST_ZTF,
};
use skycov_mock::{DynamicMockStore, MockBehavior, MockStore};

fn batch_skycov(limit: usize) -> Skycov {
    Skycov::builder()
        .with_store(Arc::new(MockStore::new()))
        .max_concurrent_runs(limit)
        .build()
        .unwrap()
}

#[tokio::test]
async fn records_keep_input_order_and_failures_are_collected() {
    let skycov = batch_skycov(2);
    let report = skycov
        .run_many(&[
            (PLAN_MIXED, REQUEST_DECAM),
            (PLAN_FAIL, REQUEST_ZTF),
            (PLAN_OVERLAPPING, REQUEST_ZTF),
            (PLAN_EMPTY, REQUEST_ZTF),
        ])
        .await
        .unwrap();

    let order: Vec<_> = report
        .records
        .iter()
        .map(|r| (r.plan_id, r.request_id))
        .collect();
    assert_eq!(
        order,
        vec![
            (PLAN_MIXED, REQUEST_DECAM),
            (PLAN_OVERLAPPING, REQUEST_ZTF),
            (PLAN_EMPTY, REQUEST_ZTF),
        ]
    );

    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.plan_id, PLAN_FAIL);
    assert_eq!(failure.request_id, REQUEST_ZTF);
    assert!(matches!(failure.error, SkycovError::FetchFailure { .. }));
}

#[tokio::test]
async fn batch_matches_single_runs() {
    let skycov = batch_skycov(1);
    let single = skycov.run(PLAN_OVERLAPPING, REQUEST_ZTF).await.unwrap();
    let report = skycov
        .run_many(&[(PLAN_OVERLAPPING, REQUEST_ZTF)])
        .await
        .unwrap();
    assert!(report.failures.is_empty());
    assert_eq!(report.records[0].coverage, single.coverage);
    assert_eq!(report.records[0].stats_method, StatsMethod::InProcess);
}

#[tokio::test]
async fn empty_batch_is_invalid() {
    let skycov = batch_skycov(4);
    let err = skycov.run_many(&[]).await.unwrap_err();
    assert!(matches!(err, SkycovError::InvalidArg(_)));
}

#[tokio::test]
async fn duplicate_pairs_are_invalid() {
    let skycov = batch_skycov(4);
    let err = skycov
        .run_many(&[
            (PLAN_OVERLAPPING, REQUEST_ZTF),
            (PLAN_MIXED, REQUEST_ZTF),
            (PLAN_OVERLAPPING, REQUEST_ZTF),
        ])
        .await
        .unwrap_err();
    match err {
        SkycovError::InvalidArg(msg) => assert!(msg.contains("duplicate"), "msg: {msg}"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn same_plan_for_different_requests_is_allowed() {
    let skycov = batch_skycov(4);
    let report = skycov
        .run_many(&[(PLAN_MIXED, REQUEST_ZTF), (PLAN_MIXED, REQUEST_DECAM)])
        .await
        .unwrap();
    assert_eq!(report.records.len(), 2);
    assert_ne!(report.records[0].coverage, report.records[1].coverage);
}

#[tokio::test(start_paused = true)]
async fn batch_deadline_elapses() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_plan_behavior(PlanId(1), MockBehavior::Hang)
        .await;
    controller
        .set_request_behavior(RequestId(1), MockBehavior::Return(request(1, 1, 5)))
        .await;

    let skycov = Skycov::builder()
        .with_store(store)
        .fetch_timeout(Duration::from_secs(60))
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    let err = skycov
        .run_many(&[(PlanId(1), RequestId(1))])
        .await
        .unwrap_err();
    assert_eq!(err, SkycovError::request_timeout("plan-statistics"));
}

#[tokio::test(start_paused = true)]
async fn per_call_timeouts_inside_a_batch_are_failures_not_deadlines() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_plan_behavior(PlanId(1), MockBehavior::Hang)
        .await;
    controller
        .set_request_behavior(RequestId(1), MockBehavior::Return(request(1, 1, 5)))
        .await;

    let skycov = Skycov::builder()
        .with_store(store)
        .fetch_timeout(Duration::from_secs(1))
        .request_timeout(Duration::from_secs(60))
        .build()
        .unwrap();
    let report = skycov
        .run_many(&[(PlanId(1), RequestId(1))])
        .await
        .unwrap();
    assert!(report.records.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].error.is_retryable());
}
