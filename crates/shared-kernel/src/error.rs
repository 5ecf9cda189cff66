// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<MetricsError>,
    },

    #[error("Configuration error: {0}")]
    Domain(#[from] DomainError),

    #[error("I/O error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

impl MetricsError {
    /// Innermost error with every `Context` layer peeled off.
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the query was rejected before any traversal started.
    pub fn is_configuration(&self) -> bool {
        matches!(self.root(), Self::Domain(_))
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;

/// Domain-layer errors: rejected input, never I/O.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid language: supported values are {supported}: got \"{key}\"")]
    UnsupportedLanguage { key: String, supported: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to walk '{path}': {details}")]
    Walk { path: PathBuf, details: String },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat '{path}': {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MetricsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<MetricsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MetricsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MetricsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
