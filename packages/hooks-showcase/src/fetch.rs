use futures::future::BoxFuture;
use std::time::Duration;
use thiserror::Error;

/// The payload resolved by [`SimulatedFetch`] unless configured otherwise.
pub const DEFAULT_PAYLOAD: &str = "ABCDEF";

/// The artificial latency of [`SimulatedFetch`] unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

/// An error produced by a [`Fetch`] implementation.
///
/// The simulated fetcher never fails. These variants exist so that a real, fallible backend can
/// report failures without widening [`LoadState`](crate::state::LoadState).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The data source could not be reached or returned an unusable response.
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// The data source did not respond in time.
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// `Fetch` is the data source used by the
/// [`AsyncLoader`](crate::components::AsyncLoader) widget.
///
/// Implementations take no input and resolve to a single string. The widget guarantees that
/// [`fetch`](Fetch::fetch) is invoked at most once per mount and never before it.
pub trait Fetch: Send + Sync {
    /// Starts a fetch. The returned future is polled on the render loop's task, so it must not
    /// block.
    fn fetch(&self) -> BoxFuture<'static, Result<String, FetchError>>;
}

/// A stand-in for a network call: waits for a fixed delay, then resolves to a fixed payload.
#[derive(Clone, Debug)]
pub struct SimulatedFetch {
    /// How long each fetch takes.
    pub delay: Duration,

    /// The value every fetch resolves to.
    pub payload: String,
}

impl SimulatedFetch {
    /// Creates a fetcher with the given latency and payload.
    pub fn new(delay: Duration, payload: impl Into<String>) -> Self {
        Self {
            delay,
            payload: payload.into(),
        }
    }
}

impl Default for SimulatedFetch {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_PAYLOAD)
    }
}

impl Fetch for SimulatedFetch {
    fn fetch(&self) -> BoxFuture<'static, Result<String, FetchError>> {
        let delay = self.delay;
        let payload = self.payload.clone();
        Box::pin(async move {
            tracing::debug!(?delay, "simulated fetch started");
            smol::Timer::after(delay).await;
            Ok(payload)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macro_rules_attribute::apply;
    use smol_macros::test;
    use std::time::Instant;

    #[apply(test!)]
    async fn test_simulated_fetch_resolves_after_delay() {
        let fetch = SimulatedFetch::new(Duration::from_millis(20), "hello");
        let start = Instant::now();
        assert_eq!(fetch.fetch().await, Ok("hello".to_string()));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_simulated_fetch_defaults() {
        let fetch = SimulatedFetch::default();
        assert_eq!(fetch.delay, Duration::from_secs(5));
        assert_eq!(fetch.payload, "ABCDEF");
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Unavailable("connection refused".into()).to_string(),
            "data source unavailable: connection refused"
        );
        assert_eq!(
            FetchError::Timeout(Duration::from_secs(1)).to_string(),
            "timed out after 1s"
        );
    }
}
