use crate::inventory::domain::ResourceCategory;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unreduced collector output for one project
///
/// Every category is a field, so a serialized inventory always carries all
/// seven keys. `None` (serialized as `null`) means the service was disabled
/// or its listing failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInventory {
    #[serde(default)]
    pub compute_instances: Option<Value>,
    #[serde(default)]
    pub storage_buckets: Option<Value>,
    #[serde(default)]
    pub cloud_functions: Option<Value>,
    #[serde(default)]
    pub cloud_run_services: Option<Value>,
    #[serde(default)]
    pub pubsub_topics: Option<Value>,
    #[serde(default)]
    pub bigquery_datasets: Option<Value>,
    #[serde(default)]
    pub iam_policy: Option<Value>,
}

impl RawInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: ResourceCategory) -> Option<&Value> {
        self.slot(category).as_ref()
    }

    /// Builder-style setter used while collectors run
    #[must_use]
    pub fn with(mut self, category: ResourceCategory, value: Option<Value>) -> Self {
        *self.slot_mut(category) = value;
        self
    }

    /// Number of categories that produced data
    pub fn populated_count(&self) -> usize {
        ResourceCategory::COLLECTION_ORDER
            .iter()
            .filter(|category| self.get(**category).is_some())
            .count()
    }

    fn slot(&self, category: ResourceCategory) -> &Option<Value> {
        match category {
            ResourceCategory::ComputeInstances => &self.compute_instances,
            ResourceCategory::StorageBuckets => &self.storage_buckets,
            ResourceCategory::CloudFunctions => &self.cloud_functions,
            ResourceCategory::CloudRunServices => &self.cloud_run_services,
            ResourceCategory::PubsubTopics => &self.pubsub_topics,
            ResourceCategory::BigqueryDatasets => &self.bigquery_datasets,
            ResourceCategory::IamPolicy => &self.iam_policy,
        }
    }

    fn slot_mut(&mut self, category: ResourceCategory) -> &mut Option<Value> {
        match category {
            ResourceCategory::ComputeInstances => &mut self.compute_instances,
            ResourceCategory::StorageBuckets => &mut self.storage_buckets,
            ResourceCategory::CloudFunctions => &mut self.cloud_functions,
            ResourceCategory::CloudRunServices => &mut self.cloud_run_services,
            ResourceCategory::PubsubTopics => &mut self.pubsub_topics,
            ResourceCategory::BigqueryDatasets => &mut self.bigquery_datasets,
            ResourceCategory::IamPolicy => &mut self.iam_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_inventory_serializes_all_keys_as_null() {
        let raw = RawInventory::new();
        let value = serde_json::to_value(&raw).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 7);
        for category in ResourceCategory::COLLECTION_ORDER {
            assert_eq!(object.get(category.key()), Some(&Value::Null));
        }
    }

    #[test]
    fn test_with_sets_only_the_given_category() {
        let raw = RawInventory::new().with(
            ResourceCategory::StorageBuckets,
            Some(json!([{"name": "b1"}])),
        );

        assert_eq!(
            raw.get(ResourceCategory::StorageBuckets),
            Some(&json!([{"name": "b1"}]))
        );
        assert!(raw.get(ResourceCategory::ComputeInstances).is_none());
        assert_eq!(raw.populated_count(), 1);
    }

    #[test]
    fn test_deserialize_tolerates_missing_keys() {
        let raw: RawInventory = serde_json::from_str(r#"{"pubsub_topics": []}"#).unwrap();
        assert_eq!(raw.get(ResourceCategory::PubsubTopics), Some(&json!([])));
        assert!(raw.iam_policy.is_none());
    }
}
