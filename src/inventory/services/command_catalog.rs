use crate::inventory::domain::{InventoryCommand, ProjectScope, ResourceCategory};

/// Default name of the gcloud executable
pub const DEFAULT_GCLOUD_BIN: &str = "gcloud";

/// Default name of the BigQuery CLI executable
pub const DEFAULT_BQ_BIN: &str = "bq";

/// CommandCatalog builds the argument vectors for every inventory call
///
/// The binaries are configurable so the engine can drive wrappers or
/// non-default installations; the arguments are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCatalog {
    gcloud_bin: String,
    bq_bin: String,
}

impl CommandCatalog {
    pub fn new(gcloud_bin: impl Into<String>, bq_bin: impl Into<String>) -> Self {
        Self {
            gcloud_bin: gcloud_bin.into(),
            bq_bin: bq_bin.into(),
        }
    }

    /// Lists the service APIs enabled for the project
    pub fn enabled_services(&self, scope: &ProjectScope) -> InventoryCommand {
        InventoryCommand::new([
            self.gcloud_bin.clone(),
            "services".to_string(),
            "list".to_string(),
            "--enabled".to_string(),
            format!("--project={}", scope),
            "--format=json".to_string(),
        ])
    }

    /// Primary listing command for a category
    ///
    /// For BigQuery this is the dataset listing; tables are listed per
    /// dataset with [`CommandCatalog::bigquery_tables`].
    pub fn listing(&self, category: ResourceCategory, scope: &ProjectScope) -> InventoryCommand {
        let project = scope.as_str();
        match category {
            ResourceCategory::ComputeInstances => {
                self.gcloud(&["compute", "instances", "list", "--project", project, "--format=json"])
            }
            ResourceCategory::StorageBuckets => {
                self.gcloud(&["storage", "buckets", "list", "--project", project, "--format=json"])
            }
            ResourceCategory::CloudFunctions => {
                self.gcloud(&["functions", "list", "--project", project, "--format=json"])
            }
            ResourceCategory::CloudRunServices => self.gcloud(&[
                "run",
                "services",
                "list",
                "--platform=managed",
                "--project",
                project,
                "--format=json",
            ]),
            ResourceCategory::PubsubTopics => {
                self.gcloud(&["pubsub", "topics", "list", "--project", project, "--format=json"])
            }
            ResourceCategory::BigqueryDatasets => {
                self.bq(&["ls", "--project_id", project, "--format=prettyjson"])
            }
            ResourceCategory::IamPolicy => {
                self.gcloud(&["projects", "get-iam-policy", project, "--format=json"])
            }
        }
    }

    /// Lists the tables of one BigQuery dataset
    pub fn bigquery_tables(&self, scope: &ProjectScope, dataset_id: &str) -> InventoryCommand {
        self.bq(&[
            "ls",
            "--project_id",
            scope.as_str(),
            "--dataset_id",
            dataset_id,
            "--format=prettyjson",
        ])
    }

    fn gcloud(&self, args: &[&str]) -> InventoryCommand {
        Self::with_program(&self.gcloud_bin, args)
    }

    fn bq(&self, args: &[&str]) -> InventoryCommand {
        Self::with_program(&self.bq_bin, args)
    }

    fn with_program(program: &str, args: &[&str]) -> InventoryCommand {
        InventoryCommand::new(std::iter::once(program).chain(args.iter().copied()))
    }
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_GCLOUD_BIN, DEFAULT_BQ_BIN)
    }
}
