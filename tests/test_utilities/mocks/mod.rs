/// Mock implementations for testing
mod in_memory_summary_store;
mod mock_command_runner;
mod mock_progress_reporter;

pub use in_memory_summary_store::InMemorySummaryStore;
pub use mock_command_runner::MockCommandRunner;
pub use mock_progress_reporter::MockProgressReporter;
