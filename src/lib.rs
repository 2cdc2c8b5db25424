//! Station Consolidator Library
//!
//! A Rust library for consolidating weather station catalogs from the
//! Integrated Surface Database (ISD) and the Global Historical Climatology
//! Network - Daily (GHCND) into a single deduplicated station list.
//!
//! This library provides tools for:
//! - Normalizing source-shaped ISD and GHCND records into a common station model
//! - Matching records that describe the same physical station by identifier,
//!   name, or geographic and elevation proximity
//! - Merging matched records while preserving the full metadata history
//! - Filtering out stations whose active lifespan is too short to be useful
//! - Writing the consolidated catalog as a JSON array

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod consolidation;
        pub mod debug_export;
        pub mod elevation;
        pub mod geo;
    }
    pub mod adapters {
        pub mod catalog_io;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ActiveDate, Catalog, HistoryRange, RawStationRecord, Station};
pub use app::services::consolidation::Consolidator;
pub use config::ConsolidationConfig;

/// Result type alias for the station consolidator
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for station consolidation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file could not be parsed as a JSON array of station records
    #[error("Catalog parsing error in file '{file}': {message}")]
    CatalogParsing {
        file: String,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a catalog parsing error with context
    pub fn catalog_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::CatalogParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::CatalogParsing {
            file: "unknown".to_string(),
            message: "JSON parsing failed".to_string(),
            source: Some(error),
        }
    }
}
