use cloud_threat_inventory::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock CommandRunner answering from a script keyed by the full command
///
/// Unscripted commands behave like a failing tool and return `None`. Clones
/// share the call log, so a test can keep a handle after moving the runner
/// into a use case.
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    responses: HashMap<InventoryCommand, Value>,
    calls: Arc<Mutex<Vec<(InventoryCommand, bool)>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, command: InventoryCommand, response: Value) -> Self {
        self.responses.insert(command, response);
        self
    }

    pub fn calls(&self) -> Vec<(InventoryCommand, bool)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn was_called(&self, command: &InventoryCommand) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|(called, _)| called == command)
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &InventoryCommand, silent: bool) -> Option<Value> {
        self.calls.lock().unwrap().push((command.clone(), silent));
        self.responses.get(command).cloned()
    }
}
