//! Retry with exponential backoff, used when fetching listing pages.

use std::future::Future;
use std::time::Duration;

/// Policy applied when a request fails
#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt, `None` retries forever
    pub max_retries: Option<usize>,
    /// Delay before the first retry
    pub initial_backoff: Duration,
    /// Factor applied to the delay after each retry
    pub backoff_multiplier: f64,
    /// Upper bound of the delay
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: Some(5),
            initial_backoff: Duration::from_millis(500),
            backoff_multiplier: 2.0,
            max_backoff: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: usize) -> Self {
        Self {
            max_retries: Some(max_retries),
            ..Default::default()
        }
    }

    /// Retries until the request succeeds, never giving up.
    pub fn unbounded() -> Self {
        Self {
            max_retries: None,
            ..Default::default()
        }
    }

    /// Fails on the first error.
    pub fn none() -> Self {
        Self::new(0)
    }

    pub fn with_backoff(mut self, initial: Duration, multiplier: f64, max: Duration) -> Self {
        self.initial_backoff = initial;
        self.backoff_multiplier = multiplier;
        self.max_backoff = max;
        self
    }

    /// Delay to wait before the given retry, starting at 0.
    pub fn backoff(&self, retry: usize) -> Duration {
        let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
        let delay = self.initial_backoff.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        if delay.is_finite() && delay < self.max_backoff.as_secs_f64() {
            Duration::from_secs_f64(delay.max(0.0))
        } else {
            self.max_backoff
        }
    }

    fn allows(&self, retry: usize) -> bool {
        self.max_retries.map_or(true, |max| retry < max)
    }

    /// Runs the operation until it succeeds or the policy gives up.
    ///
    /// Every failure is reported to `on_failure` with its attempt number, starting at 1.
    pub(crate) async fn run<T, F, Fut, L>(&self, mut operation: F, on_failure: L) -> crate::Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = crate::Result<T>>,
        L: Fn(usize, &crate::Error),
    {
        let mut retry = 0;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    on_failure(retry + 1, &err);
                    if !self.allows(retry) {
                        return Err(crate::Error::RetryExhausted {
                            attempts: retry + 1,
                            source: Box::new(err),
                        });
                    }
                    let delay = self.backoff(retry);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    retry += 1;
                }
            }
        }
    }
}
