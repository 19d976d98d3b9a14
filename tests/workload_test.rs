//! Contract tests for the latency/fault workload and the summary endpoint.
//!
//! Tests:
//! - `/slow` delays lie in [0.5, 3.0) and the accumulator equals their sum
//! - `/error` partitions calls between the two counters
//! - `/metrics` reports the documented no-data indicator before any success

mod common;

use axum::http::StatusCode;

/// Runs with paused time so the random sleeps complete instantly.
#[tokio::test(start_paused = true)]
async fn test_slow_delays_in_range_and_accumulated() {
    let fixture = common::TestFixture::new();
    let app = common::test_router(common::test_state(&fixture));

    let mut reported_sum = 0.0_f64;
    for _ in 0..5 {
        let (status, body) = common::get_json(&app, "/slow").await;
        assert_eq!(status, StatusCode::OK);

        let delay = body["delay"].as_f64().expect("delay should be a float");
        assert!(delay >= 0.5, "delay below lower bound: {delay}");
        assert!(delay < 3.0, "delay at or above upper bound: {delay}");
        reported_sum += delay;
    }

    let (status, body) = common::get_json(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);

    let total_delay = body["total_delay"].as_f64().unwrap();
    assert!(
        (total_delay - reported_sum).abs() < 1e-9,
        "accumulator {total_delay} does not match sum of reported delays {reported_sum}"
    );
}

#[tokio::test]
async fn test_error_partitions_all_calls() {
    let fixture = common::TestFixture::new();
    let app = common::test_router(common::test_state(&fixture));

    let calls = 100;
    let mut observed_failures = 0_u64;
    for _ in 0..calls {
        let (status, body) = common::get_json(&app, "/error").await;
        match status {
            StatusCode::OK => {
                assert_eq!(body["status"], "success");
            }
            StatusCode::INTERNAL_SERVER_ERROR => {
                observed_failures += 1;
                assert_eq!(body["error"], "Simulated error!");
            }
            other => panic!("unexpected status from /error: {other}"),
        }
    }

    let (_, summary) = common::get_json(&app, "/metrics").await;
    let error_count = summary["error_count"].as_u64().unwrap();
    let success_count = summary["success_count"].as_u64().unwrap();

    // Every call lands in exactly one counter.
    assert_eq!(error_count + success_count, calls);
    assert_eq!(error_count, observed_failures);

    match success_count {
        0 => assert!(summary["error_rate"].is_null()),
        _ => {
            let expected = error_count as f64 / success_count as f64 * 100.0;
            let reported = summary["error_rate"].as_f64().unwrap();
            assert!((reported - expected).abs() < 1e-9);
        }
    }
}

#[tokio::test]
async fn test_metrics_before_any_traffic_reports_no_data() {
    let fixture = common::TestFixture::new();
    let app = common::test_router(common::test_state(&fixture));

    let (status, body) = common::get_json(&app, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        body["error_rate"].is_null(),
        "error rate must be the no-data indicator before any success"
    );
    assert_eq!(body["total_delay"].as_f64().unwrap(), 0.0);
    assert_eq!(body["error_count"], 0);
    assert_eq!(body["success_count"], 0);
}
