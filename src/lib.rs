//! cloud-threat-inventory - GCP project inventory for threat modeling
//!
//! This library collects the resource inventory of a Google Cloud project
//! through the `gcloud` and `bq` command-line tools, caches the raw command
//! output on disk, and reduces it to a bounded summary that a downstream
//! threat-modeling stage consumes. It follows hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inventory`): Value objects, the summarizer and the capability policy
//! - **Application Layer** (`application`): Collectors and the inventory use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Process, cache, filesystem and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cloud_threat_inventory::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = CollectInventoryUseCase::new(
//!     ProcessCommandRunner::new(),
//!     FileResultCache::new(".cache/gcp-inventory", DEFAULT_CACHE_TTL),
//!     FileSystemSummaryStore::new("output"),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(InventoryRequest::new("my-test-proj"))?;
//! println!("{}", response.render(OutputDocument::Summary)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::cache::{
        FileResultCache, NoopResultCache, DEFAULT_CACHE_TTL,
    };
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemSummaryStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::process::ProcessCommandRunner;
    pub use crate::application::dto::{InventoryRequest, InventoryResponse, OutputDocument};
    pub use crate::application::use_cases::CollectInventoryUseCase;
    pub use crate::inventory::domain::{
        InventoryCommand, InventorySummary, ProjectScope, RawInventory, ResourceCategory,
    };
    pub use crate::inventory::services::{CommandCatalog, Summarizer};
    pub use crate::ports::outbound::{
        CommandRunner, OutputPresenter, ProgressReporter, ResultCache, SummaryStore,
    };
    pub use crate::shared::Result;
}
