//! Response language selection.
//!
//! - [`code::Language`]: the two supported languages (Turkish primary, English secondary)
//! - [`code::UiLanguage`]: language of static UI strings, chosen once from the locale
//! - [`detector::detect_language`]: per-message language detection

pub mod code;
pub mod detector;
