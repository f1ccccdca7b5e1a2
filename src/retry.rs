use std::{future::Future, time::Duration};

///
/// Run async function in a loop until it returns Ok or attempts run out.
/// Returns the last error once `max_attempts` have failed.
///
pub async fn retry<AttemptF, ErrF, F, Fut, T>(
    max_attempts: u32,
    retry_interval: Duration,
    attempt_log_fn: AttemptF,
    error_log_fn: ErrF,
    async_fn: F,
) -> Result<T, amqprs::error::Error>
where
    AttemptF: Fn(u32),
    ErrF: Fn(u32, &amqprs::error::Error),
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, amqprs::error::Error>>,
{
    let mut attempt = 0;

    loop {
        attempt += 1;

        attempt_log_fn(attempt);
        match async_fn().await {
            Ok(output) => return Ok(output),
            Err(err) => {
                error_log_fn(attempt, &err);
                if attempt >= max_attempts {
                    return Err(err);
                }
            }
        }

        tokio::time::sleep(retry_interval).await;
    }
}
