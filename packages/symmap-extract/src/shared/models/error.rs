//! Error types for the symmap-extract crate
//!
//! Unified error handling across registry, classifier, and file extraction.
//! Per-declaration failures are absorbed into diagnostics by the file
//! extractor; the variants here are the recoverable signals callers see.

use std::fmt;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Language hint has no registered plugin
    NotSupported,
    /// A recognized declaration fragment lacks a usable name token
    MalformedFragment,
    /// Input cannot be interpreted as text at all
    UnreadableSource,
    /// Internal errors (bugs, grammar setup failures)
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotSupported => "not_supported",
            ErrorKind::MalformedFragment => "malformed_fragment",
            ErrorKind::UnreadableSource => "unreadable_source",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Unified error type
#[derive(Debug)]
pub struct ExtractError {
    pub kind: ErrorKind,
    pub message: String,
    pub file_path: Option<String>,
    pub line: Option<u32>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ExtractError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file_path: None,
            line: None,
            source: None,
        }
    }

    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn not_supported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotSupported, message)
    }

    pub fn malformed_fragment(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedFragment, message)
    }

    pub fn unreadable_source(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnreadableSource, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if let Some(ref file) = self.file_path {
            write!(f, " in {}", file)?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ExtractError>;
