//! People records: employees, attendance and holidays

use chrono::NaiveDate;

crate::field_enum!(
    /// Employment status shown on the employee directory
    EmploymentStatus {
        Active => "active",
        OnLeave => "on_leave",
        Probation => "probation",
        Inactive => "inactive",
    }
);

crate::field_enum!(
    /// Daily attendance outcome
    AttendanceStatus {
        Present => "present",
        Absent => "absent",
        Late => "late",
        HalfDay => "half_day",
        Leave => "leave",
    }
);

crate::field_enum!(
    HolidayKind {
        National => "national",
        Regional => "regional",
        Optional => "optional",
    }
);

crate::impl_record!(
    /// An entry of the employee directory
    Employee,
    "employee",
    "employees",
    key: id,
    search: ["id", "name", "email", "designation", "department"],
    sort: ["id", "name", "department", "designation", "location", "joined_on"],
    {
        /// Employee code (e.g., "EMP-001")
        id: String,
        name: String,
        email: String,
        phone: Option<String>,
        department: String,
        designation: String,
        location: String,
        status: EmploymentStatus,
        joined_on: NaiveDate,
        #[serde(default)]
        skills: Vec<String>,
    }
);

crate::impl_record!(
    /// One employee's attendance on one day
    AttendanceEntry,
    "attendance_entry",
    "attendance_entries",
    key: id,
    search: ["employee_id", "employee_name"],
    sort: ["date", "employee_name", "hours_worked", "status"],
    {
        id: String,
        employee_id: String,
        employee_name: String,
        date: NaiveDate,
        /// Check-in time as shown (e.g., "09:12")
        check_in: Option<String>,
        check_out: Option<String>,
        hours_worked: f64,
        status: AttendanceStatus,
    }
);

crate::impl_record!(
    Holiday,
    "holiday",
    "holidays",
    key: id,
    search: ["name"],
    sort: ["name", "date"],
    {
        id: u32,
        name: String,
        date: NaiveDate,
        kind: HolidayKind,
    }
);
