use super::capability_prober::CapabilityProber;
use super::gateway::InventorySource;
use crate::inventory::domain::ResourceCategory;
use serde_json::Value;
use tracing::debug;

type CollectFn = fn(&dyn InventorySource, ResourceCategory) -> Option<Value>;

/// One entry of the collector table
#[derive(Clone, Copy)]
pub struct CollectorSpec {
    pub category: ResourceCategory,
    collect: CollectFn,
}

impl CollectorSpec {
    const fn new(category: ResourceCategory, collect: CollectFn) -> Self {
        Self { category, collect }
    }

    /// Service API that must be enabled before the listing runs
    pub fn capability(&self) -> Option<&'static str> {
        self.category.capability()
    }

    /// Probes the capability, then runs the listing
    pub fn run(&self, source: &dyn InventorySource, prober: &CapabilityProber) -> CollectorOutcome {
        if let Some(capability) = self.capability() {
            if !prober.is_enabled(capability) {
                debug!(category = self.category.key(), capability, "service disabled");
                return CollectorOutcome::Disabled;
            }
        }

        match (self.collect)(source, self.category) {
            Some(value) => CollectorOutcome::Collected(value),
            None => CollectorOutcome::Unavailable,
        }
    }
}

/// Result of running one collector
#[derive(Debug, Clone, PartialEq)]
pub enum CollectorOutcome {
    /// The guarding service API is not enabled
    Disabled,
    /// The listing failed or produced malformed output
    Unavailable,
    Collected(Value),
}

impl CollectorOutcome {
    pub fn into_value(self) -> Option<Value> {
        match self {
            CollectorOutcome::Collected(value) => Some(value),
            CollectorOutcome::Disabled | CollectorOutcome::Unavailable => None,
        }
    }
}

/// All collectors, in the order they run
pub const COLLECTORS: [CollectorSpec; 7] = [
    CollectorSpec::new(ResourceCategory::IamPolicy, collect_listing),
    CollectorSpec::new(ResourceCategory::ComputeInstances, collect_listing),
    CollectorSpec::new(ResourceCategory::StorageBuckets, collect_listing),
    CollectorSpec::new(ResourceCategory::CloudFunctions, collect_listing),
    CollectorSpec::new(ResourceCategory::CloudRunServices, collect_listing),
    CollectorSpec::new(ResourceCategory::PubsubTopics, collect_listing),
    CollectorSpec::new(ResourceCategory::BigqueryDatasets, collect_datasets_with_tables),
];

fn collect_listing(source: &dyn InventorySource, category: ResourceCategory) -> Option<Value> {
    let command = source.catalog().listing(category, source.scope());
    source.fetch(&command, false)
}

/// Lists datasets, then attaches each dataset's tables under `tables`
///
/// A failed tables listing leaves that dataset with an empty list; datasets
/// without `datasetReference.datasetId` are dropped.
fn collect_datasets_with_tables(
    source: &dyn InventorySource,
    category: ResourceCategory,
) -> Option<Value> {
    let listing = collect_listing(source, category)?;
    let Value::Array(datasets) = listing else {
        debug!("dataset listing is not an array");
        return None;
    };

    let enriched = datasets
        .into_iter()
        .filter_map(|dataset| {
            let dataset_id = dataset
                .pointer("/datasetReference/datasetId")
                .and_then(Value::as_str)?
                .to_string();
            Some(attach_tables(source, dataset, &dataset_id))
        })
        .collect();

    Some(Value::Array(enriched))
}

fn attach_tables(source: &dyn InventorySource, mut dataset: Value, dataset_id: &str) -> Value {
    let command = source.catalog().bigquery_tables(source.scope(), dataset_id);
    let tables = match source.fetch(&command, true) {
        Some(tables @ Value::Array(_)) => tables,
        _ => {
            debug!(dataset_id, "no tables listed for dataset");
            Value::Array(Vec::new())
        }
    };

    if let Value::Object(fields) = &mut dataset {
        fields.insert("tables".to_string(), tables);
    }
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{InventoryCommand, ProjectScope};
    use crate::inventory::services::CommandCatalog;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct ScriptedSource {
        scope: ProjectScope,
        catalog: CommandCatalog,
        responses: HashMap<InventoryCommand, Value>,
        calls: RefCell<Vec<InventoryCommand>>,
    }

    impl ScriptedSource {
        fn new() -> Self {
            Self {
                scope: ProjectScope::new("my-test-proj").unwrap(),
                catalog: CommandCatalog::default(),
                responses: HashMap::new(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn respond(mut self, command: InventoryCommand, value: Value) -> Self {
            self.responses.insert(command, value);
            self
        }

        fn listing(&self, category: ResourceCategory) -> InventoryCommand {
            self.catalog.listing(category, &self.scope)
        }

        fn tables(&self, dataset_id: &str) -> InventoryCommand {
            self.catalog.bigquery_tables(&self.scope, dataset_id)
        }
    }

    impl InventorySource for ScriptedSource {
        fn scope(&self) -> &ProjectScope {
            &self.scope
        }

        fn catalog(&self) -> &CommandCatalog {
            &self.catalog
        }

        fn fetch(&self, command: &InventoryCommand, _silent: bool) -> Option<Value> {
            self.calls.borrow_mut().push(command.clone());
            self.responses.get(command).cloned()
        }
    }

    fn with_services(source: ScriptedSource, services: &[&str]) -> ScriptedSource {
        let listing: Vec<Value> = services
            .iter()
            .map(|name| json!({"config": {"name": name}}))
            .collect();
        let command = source.catalog.enabled_services(&source.scope);
        source.respond(command, Value::Array(listing))
    }

    fn bigquery() -> CollectorSpec {
        COLLECTORS[6]
    }

    #[test]
    fn test_collectors_follow_collection_order() {
        let categories: Vec<ResourceCategory> =
            COLLECTORS.iter().map(|spec| spec.category).collect();
        assert_eq!(categories, ResourceCategory::COLLECTION_ORDER.to_vec());
    }

    #[test]
    fn test_iam_collector_is_unguarded() {
        let source = ScriptedSource::new();
        let command = source.listing(ResourceCategory::IamPolicy);
        let source = source.respond(command, json!({"bindings": []}));
        let prober = CapabilityProber::new(&source);

        let outcome = COLLECTORS[0].run(&source, &prober);

        assert_eq!(outcome, CollectorOutcome::Collected(json!({"bindings": []})));
        assert_eq!(source.calls.borrow().len(), 1);
    }

    #[test]
    fn test_disabled_service_skips_listing() {
        let source = with_services(ScriptedSource::new(), &["storage.googleapis.com"]);
        let prober = CapabilityProber::new(&source);

        let outcome = COLLECTORS[1].run(&source, &prober);

        assert_eq!(outcome, CollectorOutcome::Disabled);
        let compute = source.listing(ResourceCategory::ComputeInstances);
        assert!(!source.calls.borrow().contains(&compute));
    }

    #[test]
    fn test_failed_listing_is_unavailable() {
        let source = with_services(ScriptedSource::new(), &["pubsub.googleapis.com"]);
        let prober = CapabilityProber::new(&source);

        let outcome = COLLECTORS[5].run(&source, &prober);

        assert_eq!(outcome, CollectorOutcome::Unavailable);
        assert_eq!(outcome.into_value(), None);
    }

    #[test]
    fn test_datasets_get_tables_attached() {
        let source = with_services(ScriptedSource::new(), &["bigquery.googleapis.com"]);
        let datasets = source.listing(ResourceCategory::BigqueryDatasets);
        let (d1, d2, d3) = (source.tables("d1"), source.tables("d2"), source.tables("d3"));
        let source = source
            .respond(
                datasets,
                json!([
                    {"datasetReference": {"datasetId": "d1"}},
                    {"datasetReference": {"datasetId": "d2"}},
                    {"datasetReference": {"datasetId": "d3"}}
                ]),
            )
            .respond(d1, json!([{"tableReference": {"tableId": "a"}}]))
            .respond(d3, json!([{"tableReference": {"tableId": "c"}}]));
        let prober = CapabilityProber::new(&source);

        let value = bigquery().run(&source, &prober).into_value().unwrap();

        assert_eq!(
            value,
            json!([
                {"datasetReference": {"datasetId": "d1"}, "tables": [{"tableReference": {"tableId": "a"}}]},
                {"datasetReference": {"datasetId": "d2"}, "tables": []},
                {"datasetReference": {"datasetId": "d3"}, "tables": [{"tableReference": {"tableId": "c"}}]}
            ])
        );
        assert!(source.calls.borrow().contains(&d2));
    }

    #[test]
    fn test_dataset_without_id_is_skipped() {
        let source = with_services(ScriptedSource::new(), &["bigquery.googleapis.com"]);
        let datasets = source.listing(ResourceCategory::BigqueryDatasets);
        let source = source.respond(
            datasets,
            json!([{"friendlyName": "anonymous"}, {"datasetReference": {"datasetId": "d1"}}]),
        );
        let prober = CapabilityProber::new(&source);

        let value = bigquery().run(&source, &prober).into_value().unwrap();

        assert_eq!(
            value,
            json!([{"datasetReference": {"datasetId": "d1"}, "tables": []}])
        );
    }

    #[test]
    fn test_empty_dataset_listing_is_an_empty_list() {
        let source = with_services(ScriptedSource::new(), &["bigquery.googleapis.com"]);
        let datasets = source.listing(ResourceCategory::BigqueryDatasets);
        let source = source.respond(datasets, json!([]));
        let prober = CapabilityProber::new(&source);

        let outcome = bigquery().run(&source, &prober);

        assert_eq!(outcome, CollectorOutcome::Collected(json!([])));
    }

    #[test]
    fn test_non_array_dataset_listing_is_unavailable() {
        let source = with_services(ScriptedSource::new(), &["bigquery.googleapis.com"]);
        let datasets = source.listing(ResourceCategory::BigqueryDatasets);
        let source = source.respond(datasets, json!({"unexpected": true}));
        let prober = CapabilityProber::new(&source);

        assert_eq!(bigquery().run(&source, &prober), CollectorOutcome::Unavailable);
    }
}
