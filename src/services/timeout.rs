use crate::models::error::AppError;
use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::pin;

/// Races an async operation against a browser timer.
///
/// # Arguments
///
/// * `operation` - A Future resolving to `Result<T, AppError>`
/// * `timeout_ms` - Milliseconds to wait before giving up
///
/// # Behavior
///
/// - The operation is attempted exactly once; there is no retry
/// - When the timer fires first the operation is dropped and
///   `AppError::Timeout` is returned
pub async fn with_timeout<F, T>(operation: F, timeout_ms: u32) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let operation = pin!(operation);
    let timer = pin!(TimeoutFuture::new(timeout_ms));

    match select(operation, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AppError::Timeout(timeout_ms)),
    }
}
