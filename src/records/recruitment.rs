//! Recruitment records: job openings and interviews

use chrono::{DateTime, NaiveDate, Utc};

crate::field_enum!(
    EmploymentType {
        FullTime => "full_time",
        PartTime => "part_time",
        Contract => "contract",
        Internship => "internship",
    }
);

crate::field_enum!(
    OpeningStatus {
        Open => "open",
        OnHold => "on_hold",
        Closed => "closed",
    }
);

crate::field_enum!(
    InterviewMode {
        InPerson => "in_person",
        Video => "video",
        Phone => "phone",
    }
);

crate::field_enum!(
    InterviewStatus {
        Scheduled => "scheduled",
        Completed => "completed",
        Cancelled => "cancelled",
        NoShow => "no_show",
    }
);

crate::impl_record!(
    JobOpening,
    "job_opening",
    "job_openings",
    key: id,
    search: ["title", "department", "location"],
    sort: ["title", "department", "posted_on", "applicants", "openings"],
    {
        id: u32,
        title: String,
        department: String,
        location: String,
        employment_type: EmploymentType,
        openings: u32,
        applicants: u32,
        posted_on: NaiveDate,
        status: OpeningStatus,
    }
);

crate::impl_record!(
    Interview,
    "interview",
    "interviews",
    key: id,
    search: ["candidate", "position", "interviewer"],
    sort: ["candidate", "position", "scheduled_at", "round"],
    {
        id: u32,
        candidate: String,
        position: String,
        interviewer: String,
        scheduled_at: DateTime<Utc>,
        round: u8,
        mode: InterviewMode,
        status: InterviewStatus,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldValue, Record};

    #[test]
    fn test_interview_schedule_is_a_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 2, 12)
            .and_then(|d| d.and_hms_opt(11, 0, 0))
            .expect("valid timestamp")
            .and_utc();
        let interview = Interview {
            id: 3,
            candidate: "Sana Khan".to_string(),
            position: "QA Engineer".to_string(),
            interviewer: "Rohit".to_string(),
            scheduled_at: at,
            round: 2,
            mode: InterviewMode::Video,
            status: InterviewStatus::NoShow,
        };
        assert_eq!(interview.field_value("scheduled_at"), Some(FieldValue::DateTime(at)));
        assert_eq!(interview.field_value("round"), Some(FieldValue::Integer(2)));
        assert_eq!(interview.field_value("status"), Some(FieldValue::from("no_show")));
    }

    #[test]
    fn test_job_opening_metadata() {
        assert_eq!(JobOpening::collection_name(), "job_openings");
        assert!(JobOpening::sortable_fields().contains(&"applicants"));
    }
}
