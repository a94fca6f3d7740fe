mod command_catalog;
mod summarizer;

pub use command_catalog::{CommandCatalog, DEFAULT_BQ_BIN, DEFAULT_GCLOUD_BIN};
pub use summarizer::Summarizer;
