//! Interactive chat module
//!
//! Provides a line-editor based chat interface over a [`ChatSession`](folio_application::ChatSession).

mod repl;

pub use repl::ChatRepl;
