use core_logic::{is_transient_error, poll_until, NetworkError, PollConfig};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_poll_ready_first_try() {
    let counter = Arc::new(AtomicU32::new(0));
    let config = PollConfig::new(5, Duration::from_millis(10));

    let result = poll_until(config, "test_op", || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Some("token".to_string()))
        }
    })
    .await;

    assert_eq!(result.unwrap(), "token");
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_poll_ready_after_pending() {
    let counter = Arc::new(AtomicU32::new(0));
    let config = PollConfig::new(5, Duration::from_millis(10));

    let result = poll_until(config, "test_op", || {
        let counter = counter.clone();
        async move {
            let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
            if count < 3 {
                Ok(None)
            } else {
                Ok(Some(count))
            }
        }
    })
    .await;

    assert_eq!(result.unwrap(), 3);
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_poll_stops_at_attempt_budget() {
    let counter = Arc::new(AtomicU32::new(0));
    let config = PollConfig::default();

    let start = tokio::time::Instant::now();
    let result: anyhow::Result<String> = poll_until(config, "captcha", || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(counter.load(Ordering::SeqCst), 60);
    assert!(matches!(
        err.downcast_ref::<NetworkError>(),
        Some(NetworkError::PollExhausted { attempts: 60, .. })
    ));
    // 59 pauses of 3s, never more than the budget
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(177));
    assert!(elapsed < Duration::from_secs(178));
    assert_eq!(config.max_wait(), Duration::from_secs(177));
}

#[tokio::test]
async fn test_poll_error_stops_immediately() {
    let counter = Arc::new(AtomicU32::new(0));
    let config = PollConfig::new(10, Duration::from_millis(1));

    let result: anyhow::Result<u32> = poll_until(config, "test_op", || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(anyhow::anyhow!("ERROR_WRONG_USER_KEY"))
        }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_transient_error_detection() {
    let timeout_error = anyhow::anyhow!("Request timeout");
    let rate_limit_error = anyhow::anyhow!("429 Too Many Requests");
    let nonce_error = anyhow::anyhow!("nonce too low");
    let permanent_error = anyhow::anyhow!("Invalid address");

    assert!(is_transient_error(&timeout_error));
    assert!(is_transient_error(&rate_limit_error));
    assert!(is_transient_error(&nonce_error));
    assert!(!is_transient_error(&permanent_error));
}

#[test]
fn test_transient_error_case_insensitive() {
    let timeout_upper = anyhow::anyhow!("TIMEOUT");
    let timeout_mixed = anyhow::anyhow!("TiMeOuT");

    assert!(is_transient_error(&timeout_upper));
    assert!(is_transient_error(&timeout_mixed));
}

#[test]
fn test_poll_exhaustion_counts_as_transient() {
    let err: anyhow::Error = NetworkError::PollExhausted {
        operation: "captcha".to_string(),
        attempts: 60,
    }
    .into();
    assert!(is_transient_error(&err));
}
