use crate::application::collectors::{
    CapabilityProber, CollectorOutcome, InventoryGateway, COLLECTORS,
};
use crate::application::dto::{InventoryRequest, InventoryResponse};
use crate::inventory::domain::{ProjectScope, RawInventory};
use crate::inventory::services::{CommandCatalog, Summarizer};
use crate::ports::outbound::{CommandRunner, ProgressReporter, ResultCache, SummaryStore};
use crate::shared::Result;
use tracing::info;

/// CollectInventoryUseCase - Core use case for a project inventory run
///
/// Runs every collector for one project, summarizes the result and
/// persists the summary artifact. Collectors run sequentially; a failing
/// collector only nulls its own category.
///
/// # Type Parameters
/// * `R` - CommandRunner implementation
/// * `C` - ResultCache implementation
/// * `S` - SummaryStore implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectInventoryUseCase<R, C, S, PR> {
    runner: R,
    cache: C,
    summary_store: S,
    progress_reporter: PR,
    catalog: CommandCatalog,
}

impl<R, C, S, PR> CollectInventoryUseCase<R, C, S, PR>
where
    R: CommandRunner,
    C: ResultCache,
    S: SummaryStore,
    PR: ProgressReporter,
{
    /// Creates a new CollectInventoryUseCase with injected dependencies
    pub fn new(runner: R, cache: C, summary_store: S, progress_reporter: PR) -> Self {
        Self {
            runner,
            cache,
            summary_store,
            progress_reporter,
            catalog: CommandCatalog::default(),
        }
    }

    /// Replaces the default `gcloud`/`bq` command catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: CommandCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Executes a full run: collect, summarize, persist
    ///
    /// # Errors
    /// Returns `InvalidScope` before any command runs if the project id is
    /// malformed, or the store's error if the summary cannot be written.
    pub fn execute(&self, request: InventoryRequest) -> Result<InventoryResponse> {
        let scope = ProjectScope::new(request.project_id)?;
        self.progress_reporter
            .report(&format!("🔍 Collecting inventory for project: {}", scope));

        let raw = self.collect_scope(&scope);
        self.progress_reporter.report(&format!(
            "📊 {} of {} categories returned data",
            raw.populated_count(),
            COLLECTORS.len()
        ));

        let summary = Summarizer::summarize(&raw);
        let summary_path = self.summary_store.persist(&scope, &summary)?;
        info!(
            project = %scope,
            resources = summary.resource_count(),
            "inventory run finished"
        );

        self.progress_reporter.report_completion(&format!(
            "✅ Inventory summary written: {} ({} resource(s))",
            summary_path.display(),
            summary.resource_count()
        ));

        Ok(InventoryResponse::new(scope, raw, summary, summary_path))
    }

    /// Collects the raw inventory without summarizing or persisting it
    ///
    /// # Errors
    /// Returns `InvalidScope` before any command runs if the project id is
    /// malformed.
    pub fn collect(&self, project_id: &str) -> Result<RawInventory> {
        let scope = ProjectScope::new(project_id)?;
        Ok(self.collect_scope(&scope))
    }

    fn collect_scope(&self, scope: &ProjectScope) -> RawInventory {
        let gateway = InventoryGateway::new(&self.runner, &self.cache, scope, &self.catalog);
        let prober = CapabilityProber::new(&gateway);
        let total = COLLECTORS.len();

        let mut raw = RawInventory::new();
        for (index, collector) in COLLECTORS.iter().enumerate() {
            let key = collector.category.key();
            let outcome = collector.run(&gateway, &prober);
            self.report_outcome(key, &outcome);
            self.progress_reporter
                .report_progress(index + 1, total, Some(key));
            raw = raw.with(collector.category, outcome.into_value());
        }
        raw
    }

    fn report_outcome(&self, key: &str, outcome: &CollectorOutcome) {
        match outcome {
            CollectorOutcome::Disabled => self
                .progress_reporter
                .report(&format!("   ⏭️  {}: service not enabled, skipped", key)),
            CollectorOutcome::Unavailable => self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} could not be listed and is recorded as null",
                key
            )),
            CollectorOutcome::Collected(_) => {}
        }
    }
}
