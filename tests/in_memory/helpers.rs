//! Shared helpers for in-memory board integration tests.

use chorewheel::task::domain::{BoardSnapshot, TaskStore};
use rstest::fixture;

/// Assignment input as produced by the external scheduler.
pub const ASSIGNMENT_JSON: &str = r#"{
    "current_day": "2024-01-12",
    "available": [
        { "id": 30, "name": "Mop floors", "day": "2024-01-20" }
    ],
    "pending": [
        { "id": 1, "name": "Laundry", "day": "2024-01-10" },
        { "id": 4, "name": "Descale kettle", "day": "2024-01-12" },
        { "id": 2, "name": "Groceries", "weekly": true },
        { "id": 3, "name": "Tax return", "day": "2024-04-15" }
    ],
    "stashed": [
        { "id": 20, "name": "Clean windows", "day": "2024-01-05" }
    ]
}"#;

/// Parses the assignment input into a snapshot.
///
/// # Errors
///
/// Returns an error if the fixture JSON does not match the snapshot shape.
pub fn assignment() -> Result<BoardSnapshot, serde_json::Error> {
    serde_json::from_str(ASSIGNMENT_JSON)
}

/// Provides a validated store built from the assignment input.
#[fixture]
pub fn store() -> TaskStore {
    let snapshot = assignment().expect("assignment fixture parses");
    TaskStore::from_snapshot(snapshot).expect("assignment fixture is valid")
}
