//! Site Configuration Error Hierarchy
//!
//! Defines error types for configuration assembly, categorized by failure
//! source: loading a configuration source versus violating a setting invariant.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration source loading or deserialization failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Declarative setting validation failures
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Validation failures raised at configuration-load time.
///
/// Every variant is fatal: an invalid setting aborts the build instead of
/// degrading, since the renderer has no meaningful fallback presentation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Malformed image allow-list entry
    #[error("Invalid image host {host:?}: {reason}")]
    InvalidHost { host: String, reason: &'static str },

    /// Zero-sized logo asset
    #[error("Logo {dimension} must be positive, got {value}")]
    InvalidDimension { dimension: &'static str, value: u32 },

    /// Color mode outside the enumerated set
    #[error("Unknown color mode {0:?} (expected one of: light, dark, system)")]
    InvalidMode(String),

    /// Required setting left empty
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// Optional navbar link that is not an absolute http(s) URL
    #[error("{field} must be an absolute http(s) URL, got {value:?}")]
    InvalidLink { field: &'static str, value: String },
}
