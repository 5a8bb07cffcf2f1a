//! Application-level configuration.
//!
//! - [`SessionConfig`]: chat session behavior (reply delay, history cap, seed)
//! - [`ResponseDelay`]: the simulated "thinking" delay range

pub mod session_config;

pub use session_config::{ResponseDelay, SessionConfig};
