/// Filesystem adapters for persisted artifacts and file output
mod atomic_file;
mod file_writer;
mod summary_store;

pub(crate) use atomic_file::write_atomically;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use summary_store::{FileSystemSummaryStore, DEFAULT_OUTPUT_DIR, SUMMARY_FILE_NAME};
