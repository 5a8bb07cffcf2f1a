//! Text normalization for matching.
//!
//! - [`normalize::normalize`]: fold case and Turkish letters to ASCII-comparable text
//! - [`normalize::tokens`]: whitespace tokenization of normalized text

pub mod normalize;
