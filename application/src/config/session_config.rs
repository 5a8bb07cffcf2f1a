//! Session parameters for chat session behavior.
//!
//! These are application-layer concerns, not domain policy: the matcher does
//! not care how long the widget pretends to think or how much history is
//! restored.

use folio_domain::DEFAULT_HISTORY_CAP;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Range of the simulated delay before an assistant reply appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDelay {
    pub min: Duration,
    pub max: Duration,
}

impl ResponseDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// A delay that resolves replies immediately
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Draw a delay uniformly from `[min, max]`.
    ///
    /// An inverted range collapses to `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max <= self.min {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }
}

impl Default for ResponseDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_millis(700))
    }
}

/// Chat session parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Simulated thinking delay
    pub response_delay: ResponseDelay,
    /// Messages kept when the persisted log is read back
    pub history_cap: usize,
    /// Seed for response selection and delays; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            response_delay: ResponseDelay::default(),
            history_cap: DEFAULT_HISTORY_CAP,
            seed: None,
        }
    }
}

impl SessionConfig {
    // ==================== Builder Methods ====================

    pub fn with_response_delay(mut self, delay: ResponseDelay) -> Self {
        self.response_delay = delay;
        self
    }

    pub fn with_history_cap(mut self, cap: usize) -> Self {
        self.history_cap = cap;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
