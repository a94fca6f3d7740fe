/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (processes, file system, console).
pub mod command_runner;
pub mod output_presenter;
pub mod progress_reporter;
pub mod result_cache;
pub mod summary_store;

pub use command_runner::CommandRunner;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use result_cache::ResultCache;
pub use summary_store::SummaryStore;
