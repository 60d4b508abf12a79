//! View configuration loading and management

use crate::core::{ConfigError, FilterValue, PageRequest, QueryDescriptor, Record, SortSpec};
use crate::engine::{ListQueryEngine, QuerySchema};
use crate::records::{
    AttendanceEntry, Employee, Holiday, Interview, JobOpening, Meeting, Project, SiteVisit, Task,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Configuration for one list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View name (e.g., "employees", "tasks")
    pub name: String,

    /// Record type listed by the view (e.g., "employee")
    pub record_type: String,

    /// Fields matched by the search box
    pub searchable_fields: Vec<String>,

    /// Fields with a sortable column header; empty accepts any field
    #[serde(default)]
    pub sortable_fields: Vec<String>,

    /// Fields offered as filter dropdowns (initially "all")
    #[serde(default)]
    pub filterable_fields: Vec<String>,

    /// Initial sort expression (`field`, `field:asc` or `field:desc`)
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Page size; absent when the view renders the whole list
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl ViewConfig {
    /// Build a view configuration from the schema a record type declares
    pub fn for_record<R: Record>(name: &str) -> Self {
        Self {
            name: name.to_string(),
            record_type: R::record_type().to_string(),
            searchable_fields: R::searchable_fields().iter().map(|f| f.to_string()).collect(),
            sortable_fields: R::sortable_fields().iter().map(|f| f.to_string()).collect(),
            filterable_fields: Vec::new(),
            default_sort: None,
            page_size: None,
        }
    }

    pub fn with_filters(mut self, fields: &[&str]) -> Self {
        self.filterable_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_default_sort(mut self, sort: &str) -> Self {
        self.default_sort = Some(sort.to_string());
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Query schema of this view
    pub fn schema(&self) -> QuerySchema {
        QuerySchema {
            searchable: self.searchable_fields.clone(),
            sortable: self.sortable_fields.clone(),
        }
    }

    /// Engine configured for this view
    pub fn engine<R: Record>(&self) -> ListQueryEngine<R> {
        ListQueryEngine::with_schema(self.schema())
    }

    /// Descriptor a freshly mounted view starts from
    pub fn initial_descriptor(&self) -> QueryDescriptor {
        QueryDescriptor {
            search_text: String::new(),
            filters: self
                .filterable_fields
                .iter()
                .map(|field| (field.clone(), FilterValue::All))
                .collect(),
            sort: self.default_sort.as_deref().and_then(SortSpec::parse),
            pagination: self.page_size.map(|size| PageRequest::new(1, size)),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(page_size) = self.page_size.filter(|size| *size == 0) {
            return Err(ConfigError::InvalidPageSize {
                view: self.name.clone(),
                page_size,
            });
        }

        if let Some(spec) = self.default_sort.as_deref().and_then(SortSpec::parse) {
            if !self.sortable_fields.is_empty() && !self.sortable_fields.contains(&spec.key) {
                return Err(ConfigError::UnsortableDefault {
                    view: self.name.clone(),
                    field: spec.key,
                });
            }
        }

        Ok(())
    }
}

/// Complete configuration of the list views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// List of view configurations
    pub views: Vec<ViewConfig>,
}

impl ViewsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check page sizes, default sorts and view name uniqueness
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for view in &self.views {
            if !names.insert(view.name.as_str()) {
                return Err(ConfigError::DuplicateView {
                    name: view.name.clone(),
                });
            }
            view.validate()?;
        }
        Ok(())
    }

    /// Find a view by name
    pub fn view(&self, name: &str) -> Result<&ViewConfig, ConfigError> {
        self.views
            .iter()
            .find(|view| view.name == name)
            .ok_or_else(|| ConfigError::UnknownView {
                name: name.to_string(),
            })
    }

    /// Views listing a given record type
    pub fn views_for<R: Record>(&self) -> impl Iterator<Item = &ViewConfig> {
        self.views
            .iter()
            .filter(|view| view.record_type == R::record_type())
    }

    /// The built-in HRMS views
    pub fn default_config() -> Self {
        Self {
            views: vec![
                ViewConfig::for_record::<Employee>("employees")
                    .with_filters(&["department", "status", "location"])
                    .with_default_sort("name")
                    .with_page_size(10),
                ViewConfig::for_record::<AttendanceEntry>("attendance")
                    .with_filters(&["status"])
                    .with_default_sort("date:desc")
                    .with_page_size(10),
                ViewConfig::for_record::<Holiday>("holidays")
                    .with_filters(&["kind"])
                    .with_default_sort("date"),
                ViewConfig::for_record::<Task>("tasks")
                    .with_filters(&["priority", "status", "assignee"])
                    .with_default_sort("due_date")
                    .with_page_size(5),
                ViewConfig::for_record::<Project>("projects")
                    .with_filters(&["status", "manager"])
                    .with_default_sort("name"),
                ViewConfig::for_record::<Meeting>("meetings")
                    .with_filters(&["mode", "status"])
                    .with_default_sort("date"),
                ViewConfig::for_record::<SiteVisit>("site_visits")
                    .with_filters(&["status", "visited_by"])
                    .with_default_sort("date:desc"),
                ViewConfig::for_record::<JobOpening>("job_openings")
                    .with_filters(&["department", "employment_type", "status"])
                    .with_default_sort("posted_on:desc"),
                ViewConfig::for_record::<Interview>("interviews")
                    .with_filters(&["status", "mode"])
                    .with_default_sort("scheduled_at")
                    .with_page_size(10),
            ],
        }
    }
}
