use crate::inventory::domain::{InventoryCommand, ProjectScope};
use crate::inventory::services::CommandCatalog;
use crate::ports::outbound::{CommandRunner, ResultCache};
use serde_json::Value;

/// Read-through access to the inventory tools for one project
///
/// Collectors only see this trait, which keeps the registry free of the
/// runner and cache type parameters.
pub trait InventorySource {
    fn scope(&self) -> &ProjectScope;

    fn catalog(&self) -> &CommandCatalog;

    /// Runs `command` through the cache; `None` means no usable result
    fn fetch(&self, command: &InventoryCommand, silent: bool) -> Option<Value>;
}

/// InventoryGateway layers a ResultCache over a CommandRunner for one scope
pub struct InventoryGateway<'a, R, C> {
    runner: &'a R,
    cache: &'a C,
    scope: &'a ProjectScope,
    catalog: &'a CommandCatalog,
}

impl<'a, R, C> InventoryGateway<'a, R, C>
where
    R: CommandRunner,
    C: ResultCache,
{
    pub fn new(
        runner: &'a R,
        cache: &'a C,
        scope: &'a ProjectScope,
        catalog: &'a CommandCatalog,
    ) -> Self {
        Self {
            runner,
            cache,
            scope,
            catalog,
        }
    }
}

impl<R, C> InventorySource for InventoryGateway<'_, R, C>
where
    R: CommandRunner,
    C: ResultCache,
{
    fn scope(&self) -> &ProjectScope {
        self.scope
    }

    fn catalog(&self) -> &CommandCatalog {
        self.catalog
    }

    fn fetch(&self, command: &InventoryCommand, silent: bool) -> Option<Value> {
        self.cache
            .get_or_compute(self.scope, command, || self.runner.run(command, silent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::cache::{FileResultCache, DEFAULT_CACHE_TTL};
    use serde_json::json;
    use std::cell::Cell;
    use tempfile::TempDir;

    struct CountingRunner {
        calls: Cell<usize>,
        response: Option<Value>,
    }

    impl CommandRunner for CountingRunner {
        fn run(&self, _command: &InventoryCommand, _silent: bool) -> Option<Value> {
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    #[test]
    fn test_fetch_reads_through_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileResultCache::new(temp_dir.path(), DEFAULT_CACHE_TTL);
        let runner = CountingRunner {
            calls: Cell::new(0),
            response: Some(json!([{"name": "t1"}])),
        };
        let scope = ProjectScope::new("my-test-proj").unwrap();
        let catalog = CommandCatalog::default();
        let gateway = InventoryGateway::new(&runner, &cache, &scope, &catalog);
        let command = InventoryCommand::new(["gcloud", "pubsub", "topics", "list"]);

        assert_eq!(gateway.fetch(&command, false), Some(json!([{"name": "t1"}])));
        assert_eq!(gateway.fetch(&command, false), Some(json!([{"name": "t1"}])));
        assert_eq!(runner.calls.get(), 1);
    }

    #[test]
    fn test_fetch_retries_absent_results() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileResultCache::new(temp_dir.path(), DEFAULT_CACHE_TTL);
        let runner = CountingRunner {
            calls: Cell::new(0),
            response: None,
        };
        let scope = ProjectScope::new("my-test-proj").unwrap();
        let catalog = CommandCatalog::default();
        let gateway = InventoryGateway::new(&runner, &cache, &scope, &catalog);
        let command = InventoryCommand::new(["gcloud", "pubsub", "topics", "list"]);

        assert_eq!(gateway.fetch(&command, true), None);
        assert_eq!(gateway.fetch(&command, true), None);
        assert_eq!(runner.calls.get(), 2);
    }
}
