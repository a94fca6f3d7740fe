use crate::inventory::domain::InventoryCommand;
use serde_json::Value;

/// CommandRunner port for invoking the external inventory tools
///
/// This port abstracts process execution so collectors can be driven by
/// scripted runners in tests.
pub trait CommandRunner {
    /// Runs the command and parses its stdout as JSON
    ///
    /// # Arguments
    /// * `command` - Program and arguments to execute
    /// * `silent` - Suppress operator-facing failure reports (probe calls)
    ///
    /// # Returns
    /// The parsed JSON document, or `None` if the command could not be
    /// started, exited non-zero, or printed something that is not JSON.
    /// A legitimately empty listing is `Some(Value::Array(vec![]))`.
    fn run(&self, command: &InventoryCommand, silent: bool) -> Option<Value>;
}
