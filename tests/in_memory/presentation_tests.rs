//! Integration tests for terminal and JSON board output.

use std::sync::Arc;

use super::helpers::store;
use chorewheel::task::{
    adapters::{json::JsonViewPublisher, terminal::TerminalViewPublisher},
    domain::{DayFormat, TaskStore},
    services::{CompleteTaskRequest, TaskBoardService},
};
use mockable::DefaultClock;
use rstest::rstest;

const EXPECTED_BOARD: &str = "\
Friday, January 12

Overdue:
  [1] Laundry

Today:
  [4] Descale kettle

This week:
  [2] Groceries

Pending:
  [1] Laundry
  [4] Descale kettle
  [2] Groceries
  [3] Tax return

Available:
  [30] Mop floors

Stashed:
  [20] Clean windows
";

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn terminal_output_lists_every_section(store: TaskStore) {
    let publisher = Arc::new(TerminalViewPublisher::new(Vec::new()));
    let service = TaskBoardService::new(store, Arc::clone(&publisher), Arc::new(DefaultClock));

    service.refresh().await.expect("board publishes");
    drop(service);

    let writer = Arc::try_unwrap(publisher)
        .ok()
        .expect("service released the publisher")
        .into_writer()
        .expect("writer is intact");
    assert_eq!(String::from_utf8(writer).expect("UTF-8 output"), EXPECTED_BOARD);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn terminal_output_after_completion_shows_placeholder(store: TaskStore) {
    let publisher = Arc::new(TerminalViewPublisher::new(Vec::new()));
    let service = TaskBoardService::new(store, Arc::clone(&publisher), Arc::new(DefaultClock));

    service
        .complete_task(CompleteTaskRequest::new(4, "return"))
        .await
        .expect("pending chore completes");
    drop(service);

    let writer = Arc::try_unwrap(publisher)
        .ok()
        .expect("service released the publisher")
        .into_writer()
        .expect("writer is intact");
    let output = String::from_utf8(writer).expect("UTF-8 output");
    assert!(output.contains("Today:\n  - 3 pending!\n"));
    assert!(output.contains("Available:\n  [30] Mop floors\n  [4] Descale kettle\n"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn json_output_uses_custom_day_format(store: TaskStore) {
    let publisher = Arc::new(JsonViewPublisher::new(Vec::new()));
    let service = TaskBoardService::new(store, Arc::clone(&publisher), Arc::new(DefaultClock))
        .with_day_format(DayFormat::new("%d/%m/%Y").expect("valid pattern"));

    service.refresh().await.expect("board publishes");
    drop(service);

    let writer = Arc::try_unwrap(publisher)
        .ok()
        .expect("service released the publisher")
        .into_writer()
        .expect("writer is intact");
    let document: serde_json::Value =
        serde_json::from_slice(&writer).expect("output is one JSON document");
    assert_eq!(document["current_day"], "2024-01-12");
    assert_eq!(document["current_day_label"], "12/01/2024");
    assert_eq!(document["today"][0]["id"], 4);
    assert_eq!(document["this_week"][0]["name"], "Groceries");
}
