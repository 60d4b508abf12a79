//! Task list and board walkthrough
//!
//! Run with `RUST_LOG=hrms=debug cargo run --example task_board` to see the
//! engine's derived-view logging.

use hrms::prelude::*;
use tracing_subscriber::EnvFilter;

const TASKS: &str = r#"
- id: 1
  title: Onboard new hires
  description: Laptops, accounts and induction for the March batch
  assignee: Kavya
  project: People Ops
  priority: high
  status: todo
  due_date: 2024-03-04
  tags: [onboarding]
- id: 2
  title: Appraisal forms
  description: Collect self reviews
  assignee: Arjun
  project: People Ops
  priority: medium
  status: in_progress
  due_date: 2024-03-15
  tags: [appraisal]
- id: 3
  title: Exit interviews
  description: Schedule with leavers
  assignee: Kavya
  priority: high
  status: review
  due_date: 2024-03-08
- id: 4
  title: Attendance audit
  description: Reconcile biometric logs
  assignee: Nikhil
  project: Compliance
  priority: low
  status: todo
  due_date: 2024-03-20
  tags: [audit, attendance]
- id: 5
  title: Benefits renewal
  description: Compare insurance quotes
  assignee: Arjun
  project: Compliance
  priority: medium
  status: done
  due_date: 2024-02-28
"#;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ViewsConfig::default_config();
    let view_config = config.view("tasks")?;
    let repository = InMemoryRepository::<Task>::from_yaml_str(TASKS)?;

    let mut list = ListView::from_repository(
        view_config.engine(),
        &repository,
        view_config.initial_descriptor(),
    )
    .await?;
    print_view(&list);

    list.set_filter("priority", "high");
    list.select_sort_key("title");
    print_view(&list);

    list.select_all();
    for task in list.selected_records() {
        repository.delete(&task.key()).await?;
    }
    tracing::info!(requests = repository.actions()?.len(), "bulk delete logged");

    let mut board = Board::from_records(
        list.records(),
        "status",
        ["todo", "in_progress", "review", "done"],
    );
    board.apply(MoveCommand::new(4u32, "in_progress", 0))?;
    for bucket in board.bucket_names() {
        let keys: Vec<String> = board
            .bucket(bucket)
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{:>12}: {}", bucket, keys.join(", "));
    }

    Ok(())
}

fn print_view(list: &ListView<Task>) {
    let view = list.view();
    println!("{}", view.summary());
    for task in &view.view_records {
        println!("  #{} {} [{}] due {}", task.id, task.title, task.priority, task.due_date);
    }
    if let Some(meta) = view.pagination_meta() {
        println!("  page {}/{}", meta.page, meta.total_pages);
    }
}
