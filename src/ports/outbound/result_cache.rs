use crate::inventory::domain::{InventoryCommand, ProjectScope};
use serde_json::Value;

/// ResultCache port for memoizing command output per project
///
/// Implementations decide where entries live and how long they stay fresh.
/// They never fail: an unreadable entry is a miss and a failed write only
/// costs a future recomputation.
pub trait ResultCache {
    /// Returns the cached payload for `(scope, command)` or computes it
    ///
    /// # Arguments
    /// * `scope` - Project the command belongs to (cache namespace)
    /// * `command` - Exact token sequence of the invocation (cache key)
    /// * `compute` - Producer invoked on a miss or an expired entry
    ///
    /// # Returns
    /// The fresh cached payload, otherwise whatever `compute` returns.
    /// A `None` from `compute` is passed through and never stored.
    fn get_or_compute<F>(
        &self,
        scope: &ProjectScope,
        command: &InventoryCommand,
        compute: F,
    ) -> Option<Value>
    where
        F: FnOnce() -> Option<Value>;
}
