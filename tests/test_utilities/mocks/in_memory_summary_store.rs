use cloud_threat_inventory::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock SummaryStore keeping the last summary per project in memory
#[derive(Default, Clone)]
pub struct InMemorySummaryStore {
    summaries: Arc<Mutex<HashMap<String, InventorySummary>>>,
}

impl InMemorySummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, project_id: &str) -> Option<InventorySummary> {
        self.summaries.lock().unwrap().get(project_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.summaries.lock().unwrap().len()
    }
}

impl SummaryStore for InMemorySummaryStore {
    fn location(&self, scope: &ProjectScope) -> PathBuf {
        PathBuf::from("memory")
            .join(scope.as_str())
            .join("inventory_summary.json")
    }

    fn persist(&self, scope: &ProjectScope, summary: &InventorySummary) -> Result<PathBuf> {
        self.summaries
            .lock()
            .unwrap()
            .insert(scope.as_str().to_string(), summary.clone());
        Ok(self.location(scope))
    }
}
