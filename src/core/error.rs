//! Typed error handling
//!
//! Query operations (filter, sort, paginate, derive) are total and never
//! fail; malformed input is normalized instead. The errors below cover the
//! fallible edges around them:
//!
//! - [`ConfigError`]: loading and validating view configuration
//! - [`RepositoryError`]: seeding and addressing records in a repository
//! - [`BoardError`]: applying move commands to a board
//!
//! # Example
//!
//! ```rust,ignore
//! match board.apply(command) {
//!     Ok(outcome) => println!("moved to {}", outcome.bucket),
//!     Err(BoardError::UnknownBucket { bucket }) => eprintln!("no column {}", bucket),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use crate::core::record::RecordKey;
use thiserror::Error;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum HrmsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl HrmsError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            HrmsError::Config(e) => e.error_code(),
            HrmsError::Repository(e) => e.error_code(),
            HrmsError::Board(e) => e.error_code(),
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to view configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the configuration
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Two views share a name
    #[error("Duplicate view name: {name}")]
    DuplicateView { name: String },

    /// A view asks for pages of zero records
    #[error("View '{view}' has invalid page size {page_size} (must be at least 1)")]
    InvalidPageSize { view: String, page_size: usize },

    /// The default sort key is not among the sortable fields
    #[error("View '{view}' sorts by '{field}' which is not sortable")]
    UnsortableDefault { view: String, field: String },

    /// A view name was looked up but not configured
    #[error("Unknown view: {name}")]
    UnknownView { name: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO",
            ConfigError::Parse(_) => "CONFIG_PARSE",
            ConfigError::DuplicateView { .. } => "CONFIG_DUPLICATE_VIEW",
            ConfigError::InvalidPageSize { .. } => "CONFIG_INVALID_PAGE_SIZE",
            ConfigError::UnsortableDefault { .. } => "CONFIG_UNSORTABLE_DEFAULT",
            ConfigError::UnknownView { .. } => "CONFIG_UNKNOWN_VIEW",
        }
    }
}

// =============================================================================
// Repository Errors
// =============================================================================

/// Errors related to record repositories
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with this key exists
    #[error("{record_type} with key '{key}' not found")]
    NotFound {
        record_type: &'static str,
        key: RecordKey,
    },

    /// Two seeded records share a key
    #[error("{record_type} with key '{key}' seeded twice")]
    DuplicateKey {
        record_type: &'static str,
        key: RecordKey,
    },

    /// Seed data could not be decoded
    #[error("Failed to decode {record_type} seed data: {message}")]
    Seed {
        record_type: &'static str,
        message: String,
    },
}

impl RepositoryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RepositoryError::NotFound { .. } => "RECORD_NOT_FOUND",
            RepositoryError::DuplicateKey { .. } => "RECORD_DUPLICATE_KEY",
            RepositoryError::Seed { .. } => "RECORD_SEED_FAILED",
        }
    }
}

// =============================================================================
// Board Errors
// =============================================================================

/// Errors related to board move commands
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The target bucket does not exist on the board
    #[error("Unknown bucket: {bucket}")]
    UnknownBucket { bucket: String },

    /// The record is not on the board
    #[error("Record '{key}' is not on the board")]
    UnknownRecord { key: RecordKey },
}

impl BoardError {
    pub fn error_code(&self) -> &'static str {
        match self {
            BoardError::UnknownBucket { .. } => "BOARD_UNKNOWN_BUCKET",
            BoardError::UnknownRecord { .. } => "BOARD_UNKNOWN_RECORD",
        }
    }
}
