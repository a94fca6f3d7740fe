use serde_json::Value;

/// CapabilityMatcher policy for reading `gcloud services list` output
///
/// A capability counts as enabled when its name occurs inside the
/// `config.name` of any listed service. The match is a substring test:
/// `run.googleapis.com` also matches `cloudrun.googleapis.com`-style ids.
pub struct CapabilityMatcher;

impl CapabilityMatcher {
    /// Returns true if the listing contains a service whose id contains `capability`
    ///
    /// # Arguments
    /// * `services` - Parsed output of the enabled-services listing
    /// * `capability` - Service API name, e.g. `pubsub.googleapis.com`
    ///
    /// A listing that is not an array, or entries without `config.name`,
    /// never match.
    pub fn is_listed(services: &Value, capability: &str) -> bool {
        services
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Self::service_id)
                    .any(|id| id.contains(capability))
            })
            .unwrap_or(false)
    }

    fn service_id(entry: &Value) -> Option<&str> {
        entry.pointer("/config/name").and_then(Value::as_str)
    }
}
