//! Error types for schema parsing and localization

use thiserror::Error;

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Fatal failures of a parse call or a localization lookup.
///
/// Validation issues are not errors: a value that fails a schema produces
/// an `Ok(Dataset)` with issues attached. Everything here aborts the call.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Lazy schema resolution failed: {0}")]
    ResolutionFailure(String),

    #[error("Lazy schema resolved to asynchronous '{kind}' schema; use lazy_async for async targets")]
    AsyncTargetInSyncLazy { kind: &'static str },

    #[error("Schema '{kind}' is asynchronous and must be parsed with parse_async")]
    AsyncSchemaInSyncParse { kind: &'static str },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown rule identifier: {0}")]
    UnknownRule(String),

    #[error("Locale pack '{code}' does not match the rule catalog (missing: {missing:?}, extra: {extra:?})")]
    CatalogIncompleteness {
        code: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

impl ValidationError {
    /// Build a resolution failure from any displayable cause
    pub fn resolution(cause: impl std::fmt::Display) -> Self {
        ValidationError::ResolutionFailure(cause.to_string())
    }
}
