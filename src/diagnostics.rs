//! Observers for rejected operations.
//!
//! Every failure is collapsed to [`Failure`](crate::Failure) before it reaches
//! the caller. A sink is the only place the underlying [`HiderError`] can be
//! seen. Sinks are owned by the [`Hider`](crate::Hider) that uses them; there
//! is no process-wide switch.

use std::fmt;

use crate::encoders::errors::HiderError;

/// The public operation that produced a diagnostic.
///
/// Hiding accepts every text, so it never reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Recover,
    Compress,
    Decompress,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Recover => "recover",
            Operation::Compress => "compress",
            Operation::Decompress => "decompress",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives the detailed error behind every rejected operation.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, operation: Operation, error: &HiderError);
}

impl<F> DiagnosticSink for F
where
    F: Fn(Operation, &HiderError) + Send + Sync,
{
    fn report(&self, operation: Operation, error: &HiderError) {
        self(operation, error)
    }
}

/// Discards diagnostics. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl DiagnosticSink for Silent {
    fn report(&self, _operation: Operation, _error: &HiderError) {}
}

/// Forwards diagnostics to `tracing` as warning events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, operation: Operation, error: &HiderError) {
        match error {
            HiderError::InvalidAlphabet { found, position } => tracing::warn!(
                operation = operation.as_str(),
                kind = error.kind(),
                position,
                found = %found.escape_debug(),
                "rejected sequence"
            ),
            HiderError::FrameCorruption { position, reason } => tracing::warn!(
                operation = operation.as_str(),
                kind = error.kind(),
                position,
                reason,
                "rejected sequence"
            ),
            HiderError::ChecksumMismatch { position } => tracing::warn!(
                operation = operation.as_str(),
                kind = error.kind(),
                position,
                "rejected sequence"
            ),
            HiderError::Codec { message } => tracing::warn!(
                operation = operation.as_str(),
                kind = error.kind(),
                message = message.as_str(),
                "rejected sequence"
            ),
        }
    }
}
