use crate::span::Span;
use std::fmt;
use thiserror::Error;

/// Why a translation was rejected. All reasons are fatal; the emitter
/// stops at the first one and the partial output is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedSyntax,
    UnsupportedStringCall,
    UnsupportedStringProperty,
    UnsupportedArrayCall,
    UnsupportedArrayProperty,
    UnsupportedEnumInit,
    UnsupportedForShape,
    RenamedImport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::UnsupportedSyntax => "UnsupportedSyntax",
            ErrorKind::UnsupportedStringCall => "UnsupportedStringCall",
            ErrorKind::UnsupportedStringProperty => "UnsupportedStringProperty",
            ErrorKind::UnsupportedArrayCall => "UnsupportedArrayCall",
            ErrorKind::UnsupportedArrayProperty => "UnsupportedArrayProperty",
            ErrorKind::UnsupportedEnumInit => "UnsupportedEnumInit",
            ErrorKind::UnsupportedForShape => "UnsupportedForShape",
            ErrorKind::RenamedImport => "RenamedImport",
        };
        f.write_str(name)
    }
}

/// Fatal translation error: the reason, a human-readable message, and the
/// span of the offending node so the front-end can point at the source.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message} (at {span})")]
pub struct TranspileError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
}

impl TranspileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        let error = TranspileError {
            kind,
            message: message.into(),
            span,
        };
        tracing::debug!(kind = %error.kind, message = %error.message, "translation rejected");
        error
    }

    pub fn unsupported(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::UnsupportedSyntax, message, span)
    }
}
