//! Tests for the list query engine contract
//!
//! These tests verify that:
//! - Filtering is idempotent and preserves order
//! - Sorting is stable and descending mirrors ascending
//! - Pages cover the sorted sequence exactly once
//! - Counts relate the way summaries expect
//! - The "all" filter is a true pass-through

use hrms::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn task(id: u32, title: &str, priority: Priority, due: NaiveDate) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        assignee: if id % 2 == 0 { "Arjun" } else { "Kavya" }.to_string(),
        project: None,
        priority,
        status: TaskStatus::Todo,
        due_date: due,
        tags: Vec::new(),
    }
}

/// Five tasks with priorities [high, medium, high, low, medium] and titles [B, A, E, C, D]
fn five_tasks() -> Vec<Task> {
    vec![
        task(1, "B", Priority::High, date(2024, 3, 5)),
        task(2, "A", Priority::Medium, date(2024, 3, 1)),
        task(3, "E", Priority::High, date(2024, 3, 9)),
        task(4, "C", Priority::Low, date(2024, 3, 1)),
        task(5, "D", Priority::Medium, date(2024, 2, 20)),
    ]
}

fn employee(id: &str, name: &str, department: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        department: department.to_string(),
        designation: "Associate".to_string(),
        location: "Pune".to_string(),
        status: EmploymentStatus::Active,
        joined_on: date(2022, 1, 10),
        skills: Vec::new(),
    }
}

fn six_employees() -> Vec<Employee> {
    vec![
        employee("EMP-001", "Rahul Verma", "Engineering"),
        employee("EMP-002", "Sneha Patil", "HR"),
        employee("EMP-003", "Imran Sheikh", "Sales"),
        employee("EMP-004", "Pooja Menon", "Engineering"),
        employee("EMP-005", "all", "Finance"),
        employee("EMP-006", "Tenzin Dorje", "Operations"),
    ]
}

fn titles(records: &[Task]) -> Vec<&str> {
    records.iter().map(|t| t.title.as_str()).collect()
}

fn ids(records: &[Task]) -> Vec<u32> {
    records.iter().map(|t| t.id).collect()
}

// =============================================================================
// Filter
// =============================================================================

mod filter_tests {
    use super::*;

    #[test]
    fn test_filter_is_idempotent() {
        let engine = ListQueryEngine::<Task>::new();
        let records = five_tasks();
        let descriptors = [
            QueryDescriptor::new(),
            QueryDescriptor::new().with_filter("priority", "medium"),
            QueryDescriptor::new().with_search("d").with_filter("assignee", "Kavya"),
            QueryDescriptor::new().with_search("nothing matches"),
        ];

        for descriptor in &descriptors {
            let once = engine.filter(&records, descriptor);
            let twice = engine.filter(&once, descriptor);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_preserves_order_and_source() {
        let engine = ListQueryEngine::<Task>::new();
        let records = five_tasks();
        let before = records.clone();

        let high = engine.filter(&records, &QueryDescriptor::new().with_filter("priority", "high"));
        assert_eq!(titles(&high), vec!["B", "E"]);
        assert_eq!(records, before);
    }

    #[test]
    fn test_all_sentinel_is_a_pass_through() {
        let engine = ListQueryEngine::<Employee>::new();
        let records = six_employees();
        let descriptor = QueryDescriptor::new()
            .with_search("")
            .with_filter("department", "all");

        let result = engine.filter(&records, &descriptor);
        assert_eq!(result, records);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let engine = ListQueryEngine::<Employee>::new();
        let descriptor = QueryDescriptor::new()
            .with_search("EMP-00")
            .with_filter("department", "Engineering");

        let result = engine.filter(&six_employees(), &descriptor);
        let names: Vec<&str> = result.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Rahul Verma", "Pooja Menon"]);
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let engine = ListQueryEngine::<Task>::new();
        let view = engine.derive_view(&[], &QueryDescriptor::new().with_search("x").paged(3, 5));
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
    }
}

// =============================================================================
// Sort
// =============================================================================

mod sort_tests {
    use super::*;

    #[test]
    fn test_descending_is_reverse_of_ascending_without_ties() {
        let engine = ListQueryEngine::<Task>::new();
        let records = five_tasks();

        let mut ascending = engine.sort(&records, "title", SortDirection::Ascending);
        let descending = engine.sort(&records, "title", SortDirection::Descending);
        ascending.reverse();
        assert_eq!(ascending, descending);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let engine = ListQueryEngine::<Task>::new();
        let records = five_tasks();

        // Tasks 2 and 4 share a due date, as do no others
        let ascending = engine.sort(&records, "due_date", SortDirection::Ascending);
        assert_eq!(ids(&ascending), vec![5, 2, 4, 1, 3]);

        let descending = engine.sort(&records, "due_date", SortDirection::Descending);
        assert_eq!(ids(&descending), vec![3, 1, 2, 4, 5]);
    }

    #[test]
    fn test_unknown_sort_key_returns_input_order() {
        let engine = ListQueryEngine::<Task>::new();
        let records = five_tasks();
        assert_eq!(engine.sort(&records, "salary", SortDirection::Descending), records);
    }
}

// =============================================================================
// Paginate
// =============================================================================

mod pagination_tests {
    use super::*;

    #[test]
    fn test_pages_cover_sorted_sequence_exactly_once() {
        let engine = ListQueryEngine::<Task>::new();
        let sorted = engine.sort(&five_tasks(), "title", SortDirection::Ascending);

        for page_size in 1..=6 {
            let first = engine.paginate(&sorted, 1, page_size);
            let mut rebuilt = Vec::new();
            for page in 1..=first.total_pages {
                rebuilt.extend(engine.paginate(&sorted, page, page_size).records);
            }
            assert_eq!(rebuilt, sorted, "page size {}", page_size);
        }
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let engine = ListQueryEngine::<Task>::new();
        let view = engine.derive_view(&five_tasks(), &QueryDescriptor::new().paged(7, 2));

        assert_eq!(view.current_page, 3);
        assert_eq!(view.view_records.len(), 1);
        assert_eq!(
            view.normalizations,
            vec![Normalization::PageClamped { requested: 7, applied: 3 }]
        );
    }

    #[test]
    fn test_zero_page_size_is_raised_to_one() {
        let engine = ListQueryEngine::<Task>::new();
        let view = engine.derive_view(&five_tasks(), &QueryDescriptor::new().paged(1, 0));

        assert_eq!(view.page_size, Some(1));
        assert_eq!(view.total_pages, 5);
        assert!(view.normalizations.contains(&Normalization::PageSizeClamped {
            requested: 0,
            applied: 1
        }));
    }
}

// =============================================================================
// Derive view
// =============================================================================

mod derive_view_tests {
    use super::*;

    #[test]
    fn test_high_priority_second_page() {
        let engine = ListQueryEngine::<Task>::new();
        let descriptor = QueryDescriptor::new()
            .with_filter("priority", "high")
            .sorted_by("title", SortDirection::Ascending)
            .paged(2, 1);

        let view = engine.derive_view(&five_tasks(), &descriptor);
        assert_eq!(titles(&view.view_records), vec!["E"]);
        assert_eq!(view.filtered_count, 2);
        assert_eq!(view.total_count, 5);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn test_counts_relate() {
        let engine = ListQueryEngine::<Task>::new();
        let records = five_tasks();
        let descriptors = [
            QueryDescriptor::new(),
            QueryDescriptor::new().with_filter("priority", "medium"),
            QueryDescriptor::new().with_search("zzz"),
        ];

        for descriptor in &descriptors {
            let view = engine.derive_view(&records, descriptor);
            assert!(view.filtered_count <= view.total_count);
            assert_eq!(view.filtered_count, view.view_records.len());
        }
    }

    #[test]
    fn test_pagination_counts_reflect_filtered_set() {
        let engine = ListQueryEngine::<Task>::new();
        let descriptor = QueryDescriptor::new()
            .with_filter("priority", "medium")
            .paged(1, 1);

        let view = engine.derive_view(&five_tasks(), &descriptor);
        assert_eq!(view.total_pages, 2);
        let meta = view.pagination_meta().expect("paginated");
        assert_eq!(meta.total, 2);
        assert!(meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_summary_text() {
        let engine = ListQueryEngine::<SiteVisit>::new();
        let view = engine.derive_view(&[], &QueryDescriptor::new());
        assert_eq!(view.summary(), "Showing 0 of 0 site visits");
    }

    #[test]
    fn test_query_params_round_trip_through_engine() {
        let params: QueryParams = serde_json::from_value(serde_json::json!({
            "q": "b",
            "filter": "{\"priority\": \"high\", \"assignee\": \"all\"}",
            "sort": "title:desc",
            "limit": 1
        }))
        .expect("deserialize");

        let engine = ListQueryEngine::<Task>::new();
        let view = engine.derive_view(&five_tasks(), &params.into_descriptor());
        assert_eq!(titles(&view.view_records), vec!["B"]);
        assert_eq!(view.filtered_count, 1);
    }
}
