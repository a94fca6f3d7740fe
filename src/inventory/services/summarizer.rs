use crate::inventory::domain::{
    BucketSummary, DatasetSummary, FunctionSummary, FunctionTrigger, IamPolicySummary,
    InstanceSummary, InventorySummary, RawInventory, ResourceCategory, RunServiceSummary,
    TopicSummary,
};
use serde_json::Value;

const BUCKET_ACCESS_KEYS: [&str; 2] = ["uniform_bucket_level_access", "public_access_prevention"];

/// Summarizer reduces a raw inventory into the bounded hand-off summary
///
/// Each category keeps a small, fixed field set chosen for threat modeling
/// (exposure, identity, entry points) and drops everything else. The
/// reduction is total: a `null` category, a non-array listing or records
/// missing their identifier all end up as empty output, never as an error.
pub struct Summarizer;

impl Summarizer {
    pub fn summarize(raw: &RawInventory) -> InventorySummary {
        InventorySummary {
            compute_instances: Self::records(raw, ResourceCategory::ComputeInstances)
                .filter_map(Self::instance)
                .collect(),
            storage_buckets: Self::records(raw, ResourceCategory::StorageBuckets)
                .filter_map(Self::bucket)
                .collect(),
            cloud_functions: Self::records(raw, ResourceCategory::CloudFunctions)
                .filter_map(Self::function)
                .collect(),
            cloud_run_services: Self::records(raw, ResourceCategory::CloudRunServices)
                .filter_map(Self::run_service)
                .collect(),
            pubsub_topics: Self::records(raw, ResourceCategory::PubsubTopics)
                .filter_map(Self::topic)
                .collect(),
            bigquery_datasets: Self::records(raw, ResourceCategory::BigqueryDatasets)
                .filter_map(Self::dataset)
                .collect(),
            iam_policy: raw
                .get(ResourceCategory::IamPolicy)
                .map(Self::iam_policy)
                .unwrap_or_default(),
        }
    }

    /// Iterates the records of a list category; anything but an array is empty
    fn records(raw: &RawInventory, category: ResourceCategory) -> impl Iterator<Item = &Value> {
        raw.get(category)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
    }

    fn instance(record: &Value) -> Option<InstanceSummary> {
        let has_public_ip = record
            .get("networkInterfaces")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .any(|interface| {
                interface
                    .get("accessConfigs")
                    .and_then(Value::as_array)
                    .is_some_and(|configs| !configs.is_empty())
            });

        let service_accounts = record
            .get("serviceAccounts")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|account| text(account, &["/email"]))
            .collect();

        Some(InstanceSummary {
            name: text(record, &["/name"])?,
            zone: text(record, &["/zone"]).map(last_segment),
            machine_type: text(record, &["/machineType"]).map(last_segment),
            has_public_ip,
            service_accounts,
        })
    }

    fn bucket(record: &Value) -> Option<BucketSummary> {
        Some(BucketSummary {
            name: text(record, &["/name"])?,
            location: text(record, &["/location"]),
            storage_class: text(
                record,
                &["/storageClass", "/default_storage_class", "/storage_class"],
            ),
            iam_configuration: record
                .get("iamConfiguration")
                .filter(|block| !block.is_null())
                .cloned()
                .or_else(|| Self::flattened_access_block(record)),
        })
    }

    /// `gcloud storage buckets list` flattens the API's `iamConfiguration`
    /// into top-level snake_case keys; regroup the ones it emits
    fn flattened_access_block(record: &Value) -> Option<Value> {
        let block: serde_json::Map<String, Value> = BUCKET_ACCESS_KEYS
            .iter()
            .filter_map(|key| {
                record
                    .get(*key)
                    .filter(|value| !value.is_null())
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect();

        (!block.is_empty()).then_some(Value::Object(block))
    }

    fn function(record: &Value) -> Option<FunctionSummary> {
        let mut triggers = Vec::new();

        if let Some(https) = record.get("httpsTrigger") {
            triggers.push(FunctionTrigger::Http {
                url: text(https, &["/url"]),
            });
        }
        if let Some(event) = record.get("eventTrigger") {
            triggers.push(FunctionTrigger::Event {
                event_type: text(event, &["/eventType"]),
                resource: text(event, &["/resource", "/pubsubTopic"]),
            });
        }
        // 2nd gen HTTP functions expose only a service URI
        if triggers.is_empty() {
            if let Some(url) = text(record, &["/serviceConfig/uri", "/url"]) {
                triggers.push(FunctionTrigger::Http { url: Some(url) });
            }
        }

        Some(FunctionSummary {
            name: text(record, &["/name"])?,
            entry_point: text(record, &["/entryPoint", "/buildConfig/entryPoint"]),
            runtime: text(record, &["/runtime", "/buildConfig/runtime"]),
            triggers,
        })
    }

    fn run_service(record: &Value) -> Option<RunServiceSummary> {
        Some(RunServiceSummary {
            name: text(record, &["/metadata/name", "/name"])?,
            url: text(record, &["/status/url"]),
            latest_revision: text(
                record,
                &[
                    "/status/latestReadyRevisionName",
                    "/status/latestCreatedRevisionName",
                ],
            ),
        })
    }

    fn topic(record: &Value) -> Option<TopicSummary> {
        Some(TopicSummary {
            name: text(record, &["/name"])?,
        })
    }

    fn dataset(record: &Value) -> Option<DatasetSummary> {
        let tables = record
            .get("tables")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|table| text(table, &["/tableReference/tableId"]))
            .collect();

        Some(DatasetSummary {
            dataset_id: text(record, &["/datasetReference/datasetId"])?,
            tables,
        })
    }

    fn iam_policy(policy: &Value) -> IamPolicySummary {
        let bindings = policy
            .get("bindings")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        IamPolicySummary {
            binding_count: bindings.len(),
            roles: bindings
                .iter()
                .filter_map(|binding| text(binding, &["/role"]))
                .collect(),
        }
    }
}

/// First string found at any of the JSON pointers, in order
fn text(value: &Value, pointers: &[&str]) -> Option<String> {
    pointers
        .iter()
        .find_map(|pointer| value.pointer(pointer).and_then(Value::as_str))
        .map(str::to_string)
}

/// Strips a resource URL down to its final path segment
fn last_segment(url: String) -> String {
    match url.rsplit_once('/') {
        Some((_, tail)) if !tail.is_empty() => tail.to_string(),
        _ => url,
    }
}
