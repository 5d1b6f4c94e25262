//! Diagnostic events emitted while filtering and flattening sections.
//!
//! The core never logs directly. It reports notable events to an injected
//! [`DiagnosticSink`], which keeps control flow independent of any logging
//! framework and lets tests assert on what was reported.

mod event;
mod sink;

pub use event::Diagnostic;
pub use sink::{CollectingSink, DiagnosticSink, NullSink, default_sink};

#[cfg(feature = "tracing")]
pub use sink::TracingSink;
