//! Bounded retry for remote API calls.

use anyhow::{Result, anyhow};
use log::warn;
use std::time::Duration;

/// Maximum number of attempts for a remote operation.
pub const MAX_ATTEMPTS: usize = 3;

/// Fixed wait between attempts.
pub const RETRY_WAIT: Duration = Duration::from_secs(3);

/// Executes an async operation up to [`MAX_ATTEMPTS`] times with a fixed wait
/// between attempts. No backoff, no jitter.
///
/// Every `Err` the operation returns is treated as transient and retried;
/// application-level error results are `Ok` values and never reach this loop.
/// When attempts are exhausted the last error is returned, never a fabricated
/// success.
pub async fn with_retry<F, Fut, T>(operation_name: &str, wait: Duration, operation: F) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut last_error = None;

    for attempt in 1..=MAX_ATTEMPTS {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => {
                if attempt < MAX_ATTEMPTS {
                    warn!(
                        "{}: attempt {}/{} failed ({}), retrying in {:?}...",
                        operation_name, attempt, MAX_ATTEMPTS, e, wait
                    );
                    tokio::time::sleep(wait).await;
                }
                last_error = Some(e);
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| anyhow!("{}: failed after {} attempts", operation_name, MAX_ATTEMPTS)))
}
