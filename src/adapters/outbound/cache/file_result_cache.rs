use crate::adapters::outbound::filesystem::write_atomically;
use crate::inventory::domain::{InventoryCommand, ProjectScope};
use crate::ports::outbound::ResultCache;
use crate::shared::error::InventoryError;
use crate::shared::security::{read_bounded_file, reject_symlink_destination, MAX_CACHE_ENTRY_SIZE};
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Default cache directory, relative to the working directory
pub const DEFAULT_CACHE_DIR: &str = ".cache/gcp-inventory";

/// Default time-to-live of a cache entry (one hour)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// One persisted command result
///
/// The entry repeats its scope and command so a file is self-describing and
/// a hash collision or misplaced file is detected on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub scope: String,
    pub command: InventoryCommand,
    pub created_at: DateTime<Utc>,
    pub payload: Value,
}

/// FileResultCache adapter persisting command output as JSON files
///
/// Layout: `<root>/<project-id>/<sha256 of command>.json`, one file per
/// distinct command. Entries are never swept; an entry older than the TTL
/// is ignored on read and replaced on the next successful computation.
pub struct FileResultCache {
    root: PathBuf,
    ttl: Duration,
}

impl FileResultCache {
    pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            root: root.into(),
            ttl,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// File holding the entry for `(scope, command)`
    pub fn entry_path(&self, scope: &ProjectScope, command: &InventoryCommand) -> PathBuf {
        self.root
            .join(scope.as_str())
            .join(format!("{}.json", command.cache_key()))
    }

    /// Returns the fresh payload stored for the key, if any
    fn lookup(&self, scope: &ProjectScope, command: &InventoryCommand) -> Option<Value> {
        let path = self.entry_path(scope, command);
        if !path.exists() {
            debug!(command = %command, "cache miss");
            return None;
        }

        let entry = match Self::read_entry(&path) {
            Ok(entry) => entry,
            Err(e) => {
                let error = InventoryError::CacheReadError {
                    path: path.clone(),
                    details: e.to_string(),
                };
                debug!(%error, "treating unreadable cache entry as a miss");
                return None;
            }
        };

        if entry.scope != scope.as_str() || &entry.command != command {
            debug!(path = %path.display(), "cache entry belongs to another key");
            return None;
        }

        if !self.is_fresh(&entry, Utc::now()) {
            debug!(command = %command, created_at = %entry.created_at, "cache entry expired");
            return None;
        }

        debug!(command = %command, "cache hit");
        Some(entry.payload)
    }

    fn read_entry(path: &Path) -> Result<CacheEntry> {
        let content = read_bounded_file(path, "cache entry", MAX_CACHE_ENTRY_SIZE)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// An entry is fresh while `now - created_at < ttl`
    ///
    /// Timestamps in the future (clock skew between runs) count as fresh.
    fn is_fresh(&self, entry: &CacheEntry, now: DateTime<Utc>) -> bool {
        match (now - entry.created_at).to_std() {
            Ok(age) => age < self.ttl,
            Err(_) => true,
        }
    }

    fn store(&self, scope: &ProjectScope, command: &InventoryCommand, payload: &Value) -> Result<()> {
        let path = self.entry_path(scope, command);
        let write_error = |details: String| InventoryError::CacheWriteError {
            path: path.clone(),
            details,
        };

        if let Some(directory) = path.parent() {
            fs::create_dir_all(directory).map_err(|e| write_error(e.to_string()))?;
        }
        reject_symlink_destination(&path, "cache write")?;

        let entry = CacheEntry {
            scope: scope.as_str().to_string(),
            command: command.clone(),
            created_at: Utc::now(),
            payload: payload.clone(),
        };
        let body = serde_json::to_string(&entry).map_err(|e| write_error(e.to_string()))?;
        write_atomically(&path, &body).map_err(|e| write_error(e.to_string()))?;

        debug!(path = %path.display(), "cache entry written");
        Ok(())
    }
}

impl ResultCache for FileResultCache {
    fn get_or_compute<F>(
        &self,
        scope: &ProjectScope,
        command: &InventoryCommand,
        compute: F,
    ) -> Option<Value>
    where
        F: FnOnce() -> Option<Value>,
    {
        if let Some(payload) = self.lookup(scope, command) {
            return Some(payload);
        }

        let payload = compute()?;
        if let Err(e) = self.store(scope, command, &payload) {
            // A lost write only costs a recomputation next run
            warn!(error = %e, "failed to persist cache entry");
        }
        Some(payload)
    }
}
