//! Query matching.
//!
//! - [`scorer`]: keyword/variation overlap scoring of a single entry
//! - [`matcher::Matcher`]: picks the best entry or the fallback response

pub mod matcher;
pub mod scorer;

pub use matcher::{MatchOutcome, Matcher, RankedEntry};
pub use scorer::{MIN_CONFIDENCE, score_entry};
