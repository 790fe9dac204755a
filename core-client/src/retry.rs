//! Resilient invocation with exponential backoff and jitter
//!
//! Wraps any single remote call with failure classification and re-issue.
//! The retry decision comes entirely from
//! [`StoreError::is_retryable`](store_traits::StoreError::is_retryable);
//! nothing here inspects what the operation was doing.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use store_traits::{Result, RetryPolicy};

/// Upper bound on the jitter fraction added to each backoff delay.
const JITTER_FRACTION: f64 = 0.5;

/// Execute `operation`, retrying classified-retryable failures with
/// exponentially growing, jittered delays.
///
/// The operation is a factory producing a fresh future per attempt. On a
/// retryable error the invoker sleeps
/// `min(max_delay, base_delay * 2^attempt)` plus a bounded positive random
/// fraction of that delay, then re-issues. Non-retryable errors and
/// exhaustion of `policy.max_attempts` fail immediately with the last error.
///
/// Dropping the returned future cancels the in-flight attempt or backoff
/// sleep at once; no further attempts are issued. Timeouts are a caller
/// concern layered outside this function.
///
/// # Example
///
/// ```ignore
/// use core_client::retry;
/// use store_traits::RetryPolicy;
///
/// let page = retry::invoke(&RetryPolicy::default(), || {
///     store.list(&request, None)
/// })
/// .await?;
/// ```
pub async fn invoke<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt: u32 = 0;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(attempt = attempt + 1, "Operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(error) if error.is_retryable() && attempt + 1 < policy.max_attempts => {
                let delay = jittered(policy.delay_for_attempt(attempt));
                warn!(
                    attempt = attempt + 1,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    %error,
                    "Retryable failure, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => {
                if error.is_retryable() {
                    warn!(
                        attempts = attempt + 1,
                        %error,
                        "Giving up after exhausting retry budget"
                    );
                }
                return Err(error);
            }
        }
    }
}

/// Add a bounded positive random fraction to `delay` so concurrent retriers
/// do not wake in lockstep. The result is always in
/// `[delay, delay * (1 + JITTER_FRACTION))`.
fn jittered(delay: Duration) -> Duration {
    let fraction = rand::thread_rng().gen_range(0.0..JITTER_FRACTION);
    delay + delay.mul_f64(fraction)
}
