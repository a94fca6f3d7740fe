//! Resource collectors and the plumbing they share
mod capability_prober;
mod gateway;
mod registry;

pub use capability_prober::CapabilityProber;
pub use gateway::{InventoryGateway, InventorySource};
pub use registry::{CollectorOutcome, CollectorSpec, COLLECTORS};
