//! Diagnostic sinks.

use super::Diagnostic;
use std::sync::{Arc, Mutex};

/// Observer for diagnostic events.
///
/// Implement this trait to route diagnostics somewhere other than the default
/// sink. Any `Fn(&Diagnostic) + Send + Sync` closure is a sink.
///
/// # Examples
///
/// ```rust
/// use section_config::diagnostics::{Diagnostic, DiagnosticSink};
///
/// let sink = |event: &Diagnostic| eprintln!("{}", event);
/// sink.emit(&Diagnostic::DuplicateKey { key: "Db:Host".into() });
/// ```
pub trait DiagnosticSink: Send + Sync {
    /// Receive a single event.
    fn emit(&self, event: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn emit(&self, event: &Diagnostic) {
        self(event)
    }
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _event: &Diagnostic) {}
}

/// Sink that records every event in emission order.
///
/// # Examples
///
/// ```rust
/// use section_config::diagnostics::{CollectingSink, Diagnostic, DiagnosticSink};
///
/// let sink = CollectingSink::new();
/// sink.emit(&Diagnostic::DuplicateKey { key: "a".into() });
/// assert_eq!(sink.events().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, event: &Diagnostic) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

/// Sink that forwards events to `tracing`.
///
/// Warnings are emitted at `WARN`, everything else at `DEBUG`.
#[cfg(feature = "tracing")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DiagnosticSink for TracingSink {
    fn emit(&self, event: &Diagnostic) {
        if event.is_warning() {
            tracing::warn!(target: "section_config", "{}", event);
        } else {
            tracing::debug!(target: "section_config", "{}", event);
        }
    }
}

/// The sink used when none is configured: [`TracingSink`] with the `tracing`
/// feature, [`NullSink`] otherwise.
pub fn default_sink() -> Arc<dyn DiagnosticSink> {
    #[cfg(feature = "tracing")]
    {
        Arc::new(TracingSink)
    }

    #[cfg(not(feature = "tracing"))]
    {
        Arc::new(NullSink)
    }
}
