//! Record shapes listed by the HRMS views

pub mod dynamic;
pub mod hr;
pub mod macros;
pub mod recruitment;
pub mod work;

pub use dynamic::DynamicRecord;
pub use hr::{AttendanceEntry, AttendanceStatus, Employee, EmploymentStatus, Holiday, HolidayKind};
pub use recruitment::{
    EmploymentType, Interview, InterviewMode, InterviewStatus, JobOpening, OpeningStatus,
};
pub use work::{
    Meeting, MeetingMode, Priority, Project, ProjectStatus, ScheduleStatus, SiteVisit, Task,
    TaskStatus,
};
