use super::gateway::InventorySource;
use crate::inventory::policies::CapabilityMatcher;
use serde_json::Value;
use std::cell::OnceCell;
use tracing::debug;

/// Answers whether a service API is enabled for the scope
///
/// The enabled-services listing is fetched silently through the cache at
/// most once per prober. A failed listing reports every capability as
/// disabled.
pub struct CapabilityProber<'a> {
    source: &'a dyn InventorySource,
    listing: OnceCell<Option<Value>>,
}

impl<'a> CapabilityProber<'a> {
    pub fn new(source: &'a dyn InventorySource) -> Self {
        Self {
            source,
            listing: OnceCell::new(),
        }
    }

    pub fn is_enabled(&self, capability: &str) -> bool {
        let listing = self.listing.get_or_init(|| {
            let command = self.source.catalog().enabled_services(self.source.scope());
            self.source.fetch(&command, true)
        });

        let enabled = listing
            .as_ref()
            .is_some_and(|services| CapabilityMatcher::is_listed(services, capability));
        debug!(capability, enabled, "capability probed");
        enabled
    }
}
