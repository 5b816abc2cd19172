use crate::{Fetch, SimulatedFetch, DEFAULT_DELAY, DEFAULT_PAYLOAD};
use std::{sync::Arc, time::Duration};

/// Settings for the showcase page.
#[derive(Clone, Debug)]
pub struct ShowcaseConfig {
    /// The latency of the simulated fetch.
    pub fetch_delay: Duration,

    /// The value the simulated fetch resolves to.
    pub fetch_payload: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            fetch_delay: DEFAULT_DELAY,
            fetch_payload: DEFAULT_PAYLOAD.to_string(),
        }
    }
}

impl ShowcaseConfig {
    /// Builds the data source for the async loader widget.
    pub fn fetcher(&self) -> Arc<dyn Fetch> {
        Arc::new(SimulatedFetch::new(
            self.fetch_delay,
            self.fetch_payload.clone(),
        ))
    }
}
