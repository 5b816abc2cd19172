use crate::FetchError;
use std::borrow::Cow;

/// The text shown while a fetch is outstanding.
pub const LOADING_INDICATOR: &str = "Loading...";

/// The lifecycle of a widget that loads its data once, when it mounts.
///
/// Transitions only move forward: `Idle` to `Loading` on mount, then `Loading` to `Loaded` or
/// `Failed` when the fetch completes. Nothing leads back to `Idle` or `Loading`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Not mounted yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The fetch resolved to this payload.
    Loaded(String),
    /// The fetch failed. The simulated data source never produces this.
    Failed(FetchError),
}

impl LoadState {
    /// Returns true if no fetch has been started yet.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true once the state can no longer change.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }

    /// Moves from `Idle` to `Loading`.
    ///
    /// Returns true if the caller should start the fetch. Any later call returns false, which is
    /// what limits a mount to a single fetch.
    pub fn begin(&mut self) -> bool {
        if self.is_idle() {
            *self = Self::Loading;
            tracing::info!("load started");
            true
        } else {
            false
        }
    }

    /// Applies the outcome of the fetch started by [`begin`](Self::begin).
    ///
    /// Outcomes that arrive in any state other than `Loading` are dropped, and false is returned.
    pub fn resolve(&mut self, outcome: Result<String, FetchError>) -> bool {
        if !matches!(self, Self::Loading) {
            tracing::warn!(state = ?self, "ignoring fetch outcome outside of loading state");
            return false;
        }
        *self = match outcome {
            Ok(payload) => {
                tracing::info!(%payload, "load finished");
                Self::Loaded(payload)
            }
            Err(err) => {
                tracing::warn!(%err, "load failed");
                Self::Failed(err)
            }
        };
        true
    }

    /// Returns the text the widget shows for this state.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Self::Idle | Self::Loading => Cow::Borrowed(LOADING_INDICATOR),
            Self::Loaded(payload) => Cow::Borrowed(payload),
            Self::Failed(err) => Cow::Owned(format!("Error: {}", err)),
        }
    }
}
