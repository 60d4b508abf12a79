//! Work tracking records: tasks, projects, meetings and site visits

use chrono::NaiveDate;

crate::field_enum!(
    Priority {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
);

crate::field_enum!(
    /// Column of the task board
    TaskStatus {
        Todo => "todo",
        InProgress => "in_progress",
        Review => "review",
        Done => "done",
    }
);

crate::field_enum!(
    ProjectStatus {
        Planning => "planning",
        Active => "active",
        OnHold => "on_hold",
        Completed => "completed",
    }
);

crate::field_enum!(
    MeetingMode {
        InPerson => "in_person",
        Virtual => "virtual",
        Hybrid => "hybrid",
    }
);

crate::field_enum!(
    /// Lifecycle shared by meetings and site visits
    ScheduleStatus {
        Scheduled => "scheduled",
        Completed => "completed",
        Cancelled => "cancelled",
    }
);

crate::impl_record!(
    Task,
    "task",
    "tasks",
    key: id,
    search: ["title", "description", "assignee", "tags"],
    sort: ["title", "priority", "status", "due_date", "assignee"],
    {
        id: u32,
        title: String,
        description: String,
        assignee: String,
        project: Option<String>,
        priority: Priority,
        status: TaskStatus,
        due_date: NaiveDate,
        #[serde(default)]
        tags: Vec<String>,
    }
);

crate::impl_record!(
    Project,
    "project",
    "projects",
    key: id,
    search: ["name", "client", "manager"],
    sort: ["name", "client", "progress", "start_date", "end_date", "status"],
    {
        id: u32,
        name: String,
        client: String,
        manager: String,
        status: ProjectStatus,
        /// Completion percentage, 0-100
        progress: u8,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        #[serde(default)]
        team: Vec<String>,
    }
);

crate::impl_record!(
    Meeting,
    "meeting",
    "meetings",
    key: id,
    search: ["title", "organizer", "location", "attendees"],
    sort: ["title", "date", "start_time", "duration_minutes"],
    {
        id: u32,
        title: String,
        organizer: String,
        date: NaiveDate,
        /// Start time as shown (e.g., "14:30")
        start_time: String,
        duration_minutes: u32,
        mode: MeetingMode,
        location: String,
        #[serde(default)]
        attendees: Vec<String>,
        status: ScheduleStatus,
    }
);

crate::impl_record!(
    /// A logged visit to a client or project site
    SiteVisit,
    "site_visit",
    "site_visits",
    key: id,
    search: ["site_name", "client", "visited_by", "purpose"],
    sort: ["date", "site_name", "client", "visited_by"],
    {
        id: u32,
        site_name: String,
        client: String,
        visited_by: String,
        date: NaiveDate,
        purpose: String,
        status: ScheduleStatus,
        notes: Option<String>,
    }
);
