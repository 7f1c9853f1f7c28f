use std::sync::Arc;
use std::time::Duration;

use crate::helpers::{mock_skycov, plan, pointing, request};
use skycov::{PixelRange, PlanId, ProbabilityTile, RequestId, Skycov, SkycovError, StatsMethod};
use skycov_mock::fixtures::{
    PLAN_FAIL, PLAN_MALFORMED, PLAN_OVERLAPPING, REQUEST_LOST_MAP, REQUEST_ZTF,
};
use skycov_mock::{DynamicMockStore, MockBehavior};

fn expect_fetch_failure(err: SkycovError, want_capability: &str) -> String {
    match err {
        SkycovError::FetchFailure {
            capability, msg, ..
        } => {
            assert_eq!(capability, want_capability);
            msg
        }
        other => panic!("expected FetchFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn failing_plan_fetch_is_tagged() {
    let skycov = mock_skycov(StatsMethod::InProcess);
    let err = skycov.run(PLAN_FAIL, REQUEST_ZTF).await.unwrap_err();
    assert!(err.is_retryable());
    let msg = expect_fetch_failure(err, "observation-plan");
    assert!(msg.contains("forced failure"), "msg: {msg}");
}

#[tokio::test]
async fn unknown_request_is_a_fetch_failure() {
    let skycov = mock_skycov(StatsMethod::InProcess);
    let err = skycov
        .run(PLAN_OVERLAPPING, RequestId(404))
        .await
        .unwrap_err();
    let msg = expect_fetch_failure(err, "plan-request");
    assert!(msg.starts_with("not found"), "msg: {msg}");
}

#[tokio::test]
async fn missing_localization_fails_the_run() {
    let skycov = mock_skycov(StatsMethod::InProcess);
    let err = skycov
        .run(PLAN_OVERLAPPING, REQUEST_LOST_MAP)
        .await
        .unwrap_err();
    expect_fetch_failure(err, "localization-tiles");

    let skycov = mock_skycov(StatsMethod::Store);
    let err = skycov
        .run(PLAN_OVERLAPPING, REQUEST_LOST_MAP)
        .await
        .unwrap_err();
    expect_fetch_failure(err, "coverage-query");
}

#[tokio::test]
async fn malformed_footprint_is_rejected() {
    let skycov = mock_skycov(StatsMethod::InProcess);
    let err = skycov.run(PLAN_MALFORMED, REQUEST_ZTF).await.unwrap_err();
    assert!(matches!(err, SkycovError::MalformedInput(_)), "{err:?}");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn negative_exposure_is_rejected() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    let mut bad = pointing(1, 10, "g", &[(0, 10)]);
    bad.exposure_seconds = -1.0;
    controller
        .set_plan_behavior(PlanId(1), MockBehavior::Return(plan(1, vec![bad])))
        .await;
    controller
        .set_request_behavior(RequestId(1), MockBehavior::Return(request(1, 1, 5)))
        .await;

    let skycov = Skycov::builder().with_store(store).build().unwrap();
    let err = skycov.run(PlanId(1), RequestId(1)).await.unwrap_err();
    assert!(matches!(err, SkycovError::MalformedInput(_)), "{err:?}");
}

#[tokio::test]
async fn malformed_tiles_from_the_store_are_rejected() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_plan_behavior(
            PlanId(1),
            MockBehavior::Return(plan(1, vec![pointing(1, 10, "g", &[(0, 10)])])),
        )
        .await;
    controller
        .set_request_behavior(RequestId(1), MockBehavior::Return(request(1, 1, 5)))
        .await;
    let tiles: Arc<[ProbabilityTile]> = vec![ProbabilityTile {
        range: PixelRange { lower: 0, upper: 10 },
        probdensity: -0.5,
    }]
    .into();
    controller
        .set_tile_behavior(skycov::LocalizationId(5), MockBehavior::Return(tiles))
        .await;

    let skycov = Skycov::builder().with_store(store).build().unwrap();
    let err = skycov.run(PlanId(1), RequestId(1)).await.unwrap_err();
    assert!(matches!(err, SkycovError::MalformedInput(_)), "{err:?}");
}

#[tokio::test(start_paused = true)]
async fn stalled_store_call_times_out() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_plan_behavior(PlanId(1), MockBehavior::Hang)
        .await;
    controller
        .set_request_behavior(RequestId(1), MockBehavior::Return(request(1, 1, 5)))
        .await;

    let skycov = Skycov::builder()
        .with_store(store)
        .fetch_timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let err = skycov.run(PlanId(1), RequestId(1)).await.unwrap_err();
    let msg = expect_fetch_failure(err, "observation-plan");
    assert_eq!(msg, "timed out after 2000ms");
}

#[tokio::test(start_paused = true)]
async fn stalled_tile_fetch_times_out() {
    let (store, controller) = DynamicMockStore::new_with_controller("dyn");
    controller
        .set_plan_behavior(
            PlanId(1),
            MockBehavior::Return(plan(1, vec![pointing(1, 10, "g", &[(0, 10)])])),
        )
        .await;
    controller
        .set_request_behavior(RequestId(1), MockBehavior::Return(request(1, 1, 5)))
        .await;
    controller
        .set_tile_behavior(skycov::LocalizationId(5), MockBehavior::Hang)
        .await;

    let skycov = Skycov::builder()
        .with_store(store)
        .fetch_timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    let err = skycov.run(PlanId(1), RequestId(1)).await.unwrap_err();
    expect_fetch_failure(err, "localization-tiles");
}
