//! # HRMS list querying
//!
//! Search, filter, sort and paginate in-memory record collections the way the
//! HRMS list views (employees, attendance, recruitment, meetings, tasks,
//! projects, site visits) present them.
//!
//! ## Features
//!
//! - **One query engine for every view**: each view supplies its record shape
//!   and searchable fields as configuration, not as copied logic
//! - **Fixed stage order**: filter, then sort, then paginate
//! - **Total operations**: out-of-range pages and unknown sort keys are
//!   normalized, never raised
//! - **Selection state**: bulk-action selections reconciled with every view
//! - **Injected repositories**: seeded in-memory data today, any backend later
//! - **Configuration-Based**: views defined via YAML configuration
//! - **Boards**: kanban reordering as explicit move commands
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hrms::prelude::*;
//!
//! let engine = ListQueryEngine::<Employee>::new();
//! let descriptor = QueryDescriptor::new()
//!     .with_search("sharma")
//!     .with_filter("department", "all")
//!     .sorted_by("name", SortDirection::Ascending)
//!     .paged(1, 10);
//!
//! let view = engine.derive_view(&employees, &descriptor);
//! println!("{}", view.summary()); // Showing 3 of 42 employees
//! ```

pub mod board;
pub mod config;
pub mod core;
pub mod engine;
pub mod records;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        field::{FieldValue, ToFieldValue},
        query::{
            FilterValue, Normalization, PageRequest, PaginationMeta, QueryDescriptor, QueryParams,
            SortDirection, SortSpec,
        },
        record::{Record, RecordKey},
        selection::SelectionSet,
        service::{RecordAction, RecordRepository},
    };

    // === Errors ===
    pub use crate::core::error::{BoardError, ConfigError, HrmsError, RepositoryError};

    // === Macros ===
    pub use crate::{field_enum, impl_record};

    // === Engine ===
    pub use crate::engine::{DerivedView, ListQueryEngine, ListView, Page, QuerySchema};

    // === Records ===
    pub use crate::records::{
        AttendanceEntry, AttendanceStatus, DynamicRecord, Employee, EmploymentStatus,
        EmploymentType, Holiday, HolidayKind, Interview, InterviewMode, InterviewStatus,
        JobOpening, Meeting, MeetingMode, OpeningStatus, Priority, Project, ProjectStatus,
        ScheduleStatus, SiteVisit, Task, TaskStatus,
    };

    // === Storage ===
    pub use crate::storage::InMemoryRepository;

    // === Config ===
    pub use crate::config::{ViewConfig, ViewsConfig};

    // === Boards ===
    pub use crate::board::{Board, MoveCommand, MoveOutcome};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
}
