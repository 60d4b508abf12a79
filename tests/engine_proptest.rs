//! Property tests for the list query engine
//!
//! Random task collections (including empty ones, with plenty of duplicate
//! sort values) and random descriptors are checked against the engine's
//! contract: filter idempotence, the direction law with stable ties, page
//! coverage, selection consistency and the count relation.

use hrms::prelude::*;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::cmp::Ordering;

const TITLES: [&str; 4] = ["Alpha", "alpha", "Beta", "Gamma"];
const ASSIGNEES: [&str; 3] = ["Arjun", "Kavya", "Nikhil"];
const SEARCHES: [&str; 6] = ["", "a", "AL", "beta", "kav", "zz"];
const PRIORITY_FILTERS: [&str; 4] = ["high", "medium", "low", "all"];
const SORT_KEYS: [&str; 6] = ["title", "priority", "due_date", "assignee", "id", "salary"];

fn priority(index: usize) -> Priority {
    match index {
        0 => Priority::High,
        1 => Priority::Medium,
        _ => Priority::Low,
    }
}

fn direction(descending: bool) -> SortDirection {
    if descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    }
}

/// Task `i` (1-based) sits at input position `i - 1`, so ids track input order
fn tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec((0..TITLES.len(), 0..3usize, 0..ASSIGNEES.len(), 0..6u32), 0..24)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (title, priority_index, assignee, day))| Task {
                    id: index as u32 + 1,
                    title: TITLES[title].to_string(),
                    description: String::new(),
                    assignee: ASSIGNEES[assignee].to_string(),
                    project: None,
                    priority: priority(priority_index),
                    status: TaskStatus::Todo,
                    due_date: NaiveDate::from_ymd_opt(2024, 3, 1 + day).expect("valid date"),
                    tags: Vec::new(),
                })
                .collect()
        })
}

fn descriptors() -> impl Strategy<Value = QueryDescriptor> {
    (
        prop::sample::select(SEARCHES.to_vec()),
        prop::option::of(prop::sample::select(PRIORITY_FILTERS.to_vec())),
        prop::option::of((prop::sample::select(SORT_KEYS.to_vec()), any::<bool>())),
        prop::option::of((0usize..8, 0usize..6)),
    )
        .prop_map(|(search, priority_filter, sort, pagination)| {
            let mut descriptor = QueryDescriptor::new().with_search(search);
            if let Some(value) = priority_filter {
                descriptor = descriptor.with_filter("priority", value);
            }
            if let Some((key, descending)) = sort {
                descriptor = descriptor.sorted_by(key, direction(descending));
            }
            if let Some((page, page_size)) = pagination {
                descriptor = descriptor.paged(page, page_size);
            }
            descriptor
        })
}

/// An engine that accepts any field the tasks expose as a sort key
fn engine() -> ListQueryEngine<Task> {
    ListQueryEngine::with_schema(QuerySchema::new(
        Task::searchable_fields().iter().copied(),
        std::iter::empty::<&str>(),
    ))
}

fn ids(records: &[Task]) -> Vec<u32> {
    records.iter().map(|t| t.id).collect()
}

fn check_sorted_and_stable(
    sorted: &[Task],
    key: &str,
    direction: SortDirection,
) -> Result<(), TestCaseError> {
    for pair in sorted.windows(2) {
        let a = pair[0].field_value(key).unwrap_or(FieldValue::Null);
        let b = pair[1].field_value(key).unwrap_or(FieldValue::Null);
        let ordering = direction.apply(a.total_cmp(&b));
        prop_assert_ne!(ordering, Ordering::Greater);
        if ordering == Ordering::Equal {
            prop_assert!(pair[0].id < pair[1].id, "tie out of input order");
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn filter_is_idempotent(records in tasks(), descriptor in descriptors()) {
        let engine = engine();
        let once = engine.filter(&records, &descriptor);
        let twice = engine.filter(&once, &descriptor);
        prop_assert_eq!(&once, &twice);

        // Order is preserved and nothing is duplicated
        prop_assert!(ids(&once).windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn descending_reverses_ascending_on_unique_keys(records in tasks()) {
        let engine = engine();
        let mut ascending = engine.sort(&records, "id", SortDirection::Ascending);
        let descending = engine.sort(&records, "id", SortDirection::Descending);
        ascending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions(
        records in tasks(),
        key in prop::sample::select(vec!["title", "priority", "due_date", "assignee"]),
        descending in any::<bool>(),
    ) {
        let sorted = engine().sort(&records, key, direction(descending));
        prop_assert_eq!(sorted.len(), records.len());
        check_sorted_and_stable(&sorted, key, direction(descending))?;
    }

    #[test]
    fn pages_cover_the_sorted_sequence_once(
        records in tasks(),
        key in prop::sample::select(SORT_KEYS.to_vec()),
        descending in any::<bool>(),
        page_size in 1usize..7,
    ) {
        let engine = engine();
        let sorted = engine.sort(&records, key, direction(descending));
        let total_pages = engine.paginate(&sorted, 1, page_size).total_pages;
        prop_assert!(total_pages >= 1);

        let mut rebuilt = Vec::new();
        for page in 1..=total_pages {
            let slice = engine.paginate(&sorted, page, page_size);
            prop_assert!(slice.records.len() <= page_size);
            prop_assert!(slice.normalizations.is_empty());
            rebuilt.extend(slice.records);
        }
        prop_assert_eq!(rebuilt, sorted);
    }

    #[test]
    fn counts_relate(records in tasks(), descriptor in descriptors()) {
        let engine = engine();
        let view = engine.derive_view(&records, &descriptor);

        prop_assert_eq!(view.total_count, records.len());
        prop_assert_eq!(view.filtered_count, engine.filter(&records, &descriptor).len());
        prop_assert!(view.filtered_count <= view.total_count);
        prop_assert!(view.total_pages >= 1);
        prop_assert!((1..=view.total_pages).contains(&view.current_page));

        match view.page_size {
            None => prop_assert_eq!(view.filtered_count, view.view_records.len()),
            Some(page_size) => prop_assert!(view.view_records.len() <= page_size),
        }
    }

    #[test]
    fn derived_view_is_filter_then_sort_then_page(
        records in tasks(),
        descriptor in descriptors(),
    ) {
        let engine = engine();
        let view = engine.derive_view(&records, &descriptor);

        let filtered = engine.filter(&records, &descriptor);
        let sorted = match &descriptor.sort {
            Some(spec) => engine.sort(&filtered, &spec.key, spec.direction),
            None => filtered,
        };
        let expected = match descriptor.pagination {
            Some(request) => engine.paginate(&sorted, request.page, request.page_size).records,
            None => sorted,
        };
        prop_assert_eq!(view.view_records, expected);
    }

    #[test]
    fn selection_never_outlives_the_view(
        records in tasks(),
        actions in prop::collection::vec((0u8..7, 0usize..8), 0..16),
    ) {
        let mut list = ListView::new(engine(), records, QueryDescriptor::new().paged(1, 3));

        for (action, arg) in actions {
            match action {
                0 => list.select_all(),
                1 => {
                    let key = list.view().view_records.get(arg).map(Record::key);
                    if let Some(key) = key {
                        list.toggle_selection(&key);
                    }
                }
                2 => list.set_search_text(SEARCHES[arg % SEARCHES.len()]),
                3 => list.set_filter("priority", PRIORITY_FILTERS[arg % PRIORITY_FILTERS.len()]),
                4 => list.next_page(),
                5 => list.previous_page(),
                _ => {
                    list.select_sort_key(SORT_KEYS[arg % SORT_KEYS.len()]);
                }
            }

            for key in list.selection().iter() {
                prop_assert!(list.view().find(key).is_some(), "orphaned key {}", key);
            }
        }
    }
}
