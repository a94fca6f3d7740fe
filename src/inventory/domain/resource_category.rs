use serde::{Deserialize, Serialize};

/// The fixed set of inventory domains collected for every project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    ComputeInstances,
    StorageBuckets,
    CloudFunctions,
    CloudRunServices,
    PubsubTopics,
    BigqueryDatasets,
    IamPolicy,
}

impl ResourceCategory {
    /// All categories in collection order
    ///
    /// The IAM policy comes first because it is collected unconditionally.
    pub const COLLECTION_ORDER: [ResourceCategory; 7] = [
        ResourceCategory::IamPolicy,
        ResourceCategory::ComputeInstances,
        ResourceCategory::StorageBuckets,
        ResourceCategory::CloudFunctions,
        ResourceCategory::CloudRunServices,
        ResourceCategory::PubsubTopics,
        ResourceCategory::BigqueryDatasets,
    ];

    /// Key used for this category in raw and summary documents
    pub fn key(self) -> &'static str {
        match self {
            ResourceCategory::ComputeInstances => "compute_instances",
            ResourceCategory::StorageBuckets => "storage_buckets",
            ResourceCategory::CloudFunctions => "cloud_functions",
            ResourceCategory::CloudRunServices => "cloud_run_services",
            ResourceCategory::PubsubTopics => "pubsub_topics",
            ResourceCategory::BigqueryDatasets => "bigquery_datasets",
            ResourceCategory::IamPolicy => "iam_policy",
        }
    }

    /// Service API that must be enabled before the category is listed
    ///
    /// `None` means the category is always collected.
    pub fn capability(self) -> Option<&'static str> {
        match self {
            ResourceCategory::ComputeInstances => Some("compute.googleapis.com"),
            ResourceCategory::StorageBuckets => Some("storage.googleapis.com"),
            ResourceCategory::CloudFunctions => Some("cloudfunctions.googleapis.com"),
            ResourceCategory::CloudRunServices => Some("run.googleapis.com"),
            ResourceCategory::PubsubTopics => Some("pubsub.googleapis.com"),
            ResourceCategory::BigqueryDatasets => Some("bigquery.googleapis.com"),
            ResourceCategory::IamPolicy => None,
        }
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
