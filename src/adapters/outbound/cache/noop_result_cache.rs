use crate::inventory::domain::{InventoryCommand, ProjectScope};
use crate::ports::outbound::ResultCache;
use serde_json::Value;

/// NoopResultCache adapter that always recomputes
///
/// Used for `--no-cache` runs: every lookup goes straight to the tools and
/// nothing is written to disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResultCache;

impl NoopResultCache {
    pub fn new() -> Self {
        Self
    }
}

impl ResultCache for NoopResultCache {
    fn get_or_compute<F>(
        &self,
        _scope: &ProjectScope,
        _command: &InventoryCommand,
        compute: F,
    ) -> Option<Value>
    where
        F: FnOnce() -> Option<Value>,
    {
        compute()
    }
}
