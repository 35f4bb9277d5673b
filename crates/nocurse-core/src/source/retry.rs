//! Bounded retry for outbound requests.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::config::SourceConfig;

/// Fixed number of attempts with a fixed pause between them.
///
/// Persistent failure becomes `None` rather than an error: the caller treats
/// it as "this request produced nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// A policy making at most `attempts` tries (at least one), `delay` apart.
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    /// The policy configured for the glossary source.
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.retry_attempts, config.retry_delay())
    }

    /// Maximum number of tries.
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Run `op` until it succeeds or the attempts run out.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut op: F) -> Option<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        for attempt in 1..=self.attempts {
            match op().await {
                Ok(value) => return Some(value),
                Err(e) if attempt == self.attempts => {
                    tracing::error!(label, attempts = self.attempts, error = %e, "all attempts failed");
                }
                Err(e) => {
                    tracing::warn!(
                        label,
                        attempt,
                        attempts = self.attempts,
                        delay_ms = self.delay.as_millis() as u64,
                        error = %e,
                        "attempt failed, retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                }
            }
        }
        None
    }
}
