//! Retry for Telegram API calls made while the bot starts up.
//!
//! Only transport-level failures are retried. API errors such as an invalid
//! token are returned on the first attempt. Command replies do not go through
//! here.

use crate::config::RetryPolicy;
use std::future::Future;
use std::time::Duration;
use teloxide::RequestError;
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::RetryIf;
use tracing::warn;

/// Whether a failed request is worth repeating.
#[must_use]
pub const fn is_transient(error: &RequestError) -> bool {
    matches!(
        error,
        RequestError::Network(_) | RequestError::Io(_) | RequestError::RetryAfter(_)
    )
}

/// Delays before each retry: `initial_backoff` doubling per attempt, capped at `max_backoff`.
pub fn backoff_delays(policy: RetryPolicy) -> impl Iterator<Item = Duration> {
    // Base 2 doubles each step; the factor scales the first step to `initial_backoff`.
    let initial_ms = u64::try_from(policy.initial_backoff.as_millis()).unwrap_or(u64::MAX);
    ExponentialBackoff::from_millis(2)
        .factor((initial_ms / 2).max(1))
        .max_delay(policy.max_backoff)
        .take(policy.max_retries)
}

/// Run `operation`, retrying while `should_retry` accepts the error.
///
/// # Errors
///
/// Returns the last error once retries are exhausted or a permanent error occurs.
pub async fn retry_with<F, Fut, T, E, C>(
    policy: RetryPolicy,
    operation: F,
    mut should_retry: C,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: FnMut(&E) -> bool,
    E: std::fmt::Display,
{
    let retry_strategy = backoff_delays(policy).map(jitter); // Add jitter to prevent thundering herd

    RetryIf::start(retry_strategy, operation, |e: &E| {
        let retry = should_retry(e);
        if retry {
            warn!("Telegram API call failed, retrying: {e}");
        }
        retry
    })
    .await
}

/// Retry a Telegram request on transient failures.
///
/// # Examples
///
/// ```ignore
/// let me = retry_telegram_operation(RetryPolicy::default(), || bot.get_me().send()).await?;
/// ```
///
/// # Errors
///
/// Returns the request error after all retries are exhausted.
pub async fn retry_telegram_operation<F, Fut, T>(
    policy: RetryPolicy,
    operation: F,
) -> Result<T, RequestError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RequestError>>,
{
    retry_with(policy, operation, is_transient).await.map_err(|e| {
        warn!("Telegram API operation failed: {e}");
        e
    })
}
