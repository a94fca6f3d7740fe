/// Process adapters for running the gcloud/bq command-line tools
mod process_command_runner;

pub use process_command_runner::ProcessCommandRunner;
