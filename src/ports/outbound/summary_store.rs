use crate::inventory::domain::{InventorySummary, ProjectScope};
use crate::shared::Result;
use std::path::PathBuf;

/// SummaryStore port for persisting the hand-off artifact
///
/// The downstream threat-modeling stage reads the summary from the location
/// derived from the project id, so that location must be deterministic.
pub trait SummaryStore {
    /// Where the summary for `scope` lives
    fn location(&self, scope: &ProjectScope) -> PathBuf;

    /// Replaces the stored summary for `scope` with `summary`
    ///
    /// # Returns
    /// The path that was written
    ///
    /// # Errors
    /// Returns an error if the artifact cannot be written
    fn persist(&self, scope: &ProjectScope, summary: &InventorySummary) -> Result<PathBuf>;
}
