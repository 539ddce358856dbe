use crate::error::ParseError;
use std::sync::Arc;

/// Receives the reason whenever [`CoordinateParser::is_valid`](crate::CoordinateParser::is_valid)
/// rejects an input.
///
/// Implementations must not panic; the caller only ever sees the boolean.
pub trait DiagnosticSink {
    fn rejected(&self, input: Option<&str>, error: &ParseError);
}

/// Default sink: one `warn` event per rejected input.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn rejected(&self, input: Option<&str>, error: &ParseError) {
        tracing::warn!(input = ?input, kind = %error.kind(), reason = %error, "Coordinate validation failed");
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn rejected(&self, input: Option<&str>, error: &ParseError) {
        (**self).rejected(input, error);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn rejected(&self, input: Option<&str>, error: &ParseError) {
        (**self).rejected(input, error);
    }
}
