//! Error types for Heartboard
//!
//! This module defines the error types used by the ambient parts of the
//! application (configuration, assets, logging, GUI setup). The interaction
//! controller itself is total and never returns errors: events it cannot act
//! on are ignored and logged.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for Heartboard
#[derive(Debug, Error)]
pub enum HeartboardError {
    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Screen settings failed validation
    #[error("Invalid screen settings: {0}")]
    InvalidSettings(String),

    /// An asset file was missing or could not be decoded
    #[error("Failed to load asset {name}: {source}")]
    AssetError {
        /// File name of the asset
        name: String,
        /// Underlying decode or I/O failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// GUI setup or event loop failure
    /// Preserves the underlying error source for full error chain transparency
    #[error("GUI error: {0}")]
    GuiError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for Heartboard operations
pub type Result<T> = std::result::Result<T, HeartboardError>;

/// Convert an error to a user-friendly message
///
/// Returns text suitable for an error dialog or the terminal, with a short
/// hint about what the user can do.
pub fn get_user_friendly_error(error: &HeartboardError) -> String {
    match error {
        HeartboardError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that the configuration directory is writable\n\
             (set HEARTBOARD_HOME to choose another location)."
            .to_string(),
        HeartboardError::InvalidSettings(reason) => {
            format!(
                "The screen settings are invalid:\n\n{reason}\n\n\
                 Fix config.json or remove it to restore defaults."
            )
        }
        HeartboardError::AssetError { name, .. } => {
            format!(
                "Failed to load image asset: {name}\n\n\
                 The screen stays blank until all assets are available.\n\
                 Check the --assets directory."
            )
        }
        HeartboardError::GuiError(e) => {
            format!(
                "The window could not be created:\n\n{e}\n\n\
                 Please check that a display is available."
            )
        }
        HeartboardError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        HeartboardError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The application will use default settings."
            )
        }
    }
}
