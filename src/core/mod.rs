//! Core module containing fundamental traits and types of the crate

pub mod error;
pub mod field;
pub mod query;
pub mod record;
pub mod selection;
pub mod service;

pub use error::{BoardError, ConfigError, HrmsError, RepositoryError};
pub use field::{FieldValue, ToFieldValue};
pub use query::{
    FilterValue, Normalization, PageRequest, PaginationMeta, QueryDescriptor, QueryParams,
    SortDirection, SortSpec,
};
pub use record::{Record, RecordKey};
pub use selection::SelectionSet;
pub use service::{RecordAction, RecordRepository};
