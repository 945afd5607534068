pub mod assignments;
pub mod delay;
pub mod lookup;
pub mod swap;
pub mod webhook;

use rota_core::Assignment;

/// The response shape shared by most endpoints: the assignments in
/// turn order, each as a `{"name", "date"}` pair.
pub(crate) fn assignments_json(entries: &[Assignment]) -> serde_json::Value {
    serde_json::json!({ "assignments": entries })
}
