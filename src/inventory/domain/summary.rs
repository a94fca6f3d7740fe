use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Compute Engine instance reduced to its exposure-relevant fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
    pub has_public_ip: bool,
    pub service_accounts: Vec<String>,
}

/// Cloud Storage bucket with its IAM configuration block kept verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_configuration: Option<Value>,
}

/// How a Cloud Function is invoked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FunctionTrigger {
    Http {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    Event {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        event_type: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resource: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    pub triggers: Vec<FunctionTrigger>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunServiceSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_revision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub dataset_id: String,
    pub tables: Vec<String>,
}

/// Project IAM policy reduced to a single aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamPolicySummary {
    pub binding_count: usize,
    pub roles: BTreeSet<String>,
}

/// Bounded, total reduction of a raw inventory
///
/// No field is optional: a category without data is an empty list or a
/// zero aggregate, so downstream readers never branch on missing keys.
/// Field order is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub compute_instances: Vec<InstanceSummary>,
    pub storage_buckets: Vec<BucketSummary>,
    pub cloud_functions: Vec<FunctionSummary>,
    pub cloud_run_services: Vec<RunServiceSummary>,
    pub pubsub_topics: Vec<TopicSummary>,
    pub bigquery_datasets: Vec<DatasetSummary>,
    pub iam_policy: IamPolicySummary,
}

impl InventorySummary {
    /// Total number of summarized resources across the list categories
    pub fn resource_count(&self) -> usize {
        self.compute_instances.len()
            + self.storage_buckets.len()
            + self.cloud_functions.len()
            + self.cloud_run_services.len()
            + self.pubsub_topics.len()
            + self.bigquery_datasets.len()
    }

    /// Pretty JSON form persisted as the hand-off artifact
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
