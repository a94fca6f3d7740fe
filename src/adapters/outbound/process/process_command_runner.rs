use crate::inventory::domain::InventoryCommand;
use crate::ports::outbound::CommandRunner;
use crate::shared::error::InventoryError;
use serde_json::Value;
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Maximum number of characters of stdout echoed into a malformed-output report
const OUTPUT_SNIPPET_CHARS: usize = 200;

/// ProcessCommandRunner adapter executing inventory tools as child processes
///
/// The program is spawned directly (no shell), so arguments are never
/// re-interpreted. Execution blocks until the child exits; timeouts are
/// whatever the tool itself enforces.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Logs a recovered failure at `warn`, or at `debug` for silent calls
    fn report(error: &InventoryError, silent: bool) {
        if silent {
            debug!(%error, "suppressed command failure");
        } else {
            warn!(%error, "inventory command failed");
        }
    }
}

impl CommandRunner for ProcessCommandRunner {
    #[instrument(skip(self, command), fields(command = %command), level = "debug")]
    fn run(&self, command: &InventoryCommand, silent: bool) -> Option<Value> {
        let start = Instant::now();

        let output = match Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                Self::report(
                    &InventoryError::CommandFailed {
                        command: command.to_string(),
                        stderr: format!("failed to start '{}': {}", command.program(), e),
                    },
                    silent,
                );
                return None;
            }
        };

        debug!(
            status = output.status.code().unwrap_or(-1),
            duration = ?start.elapsed(),
            "command completed"
        );

        if !output.status.success() {
            Self::report(
                &InventoryError::CommandFailed {
                    command: command.to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                },
                silent,
            );
            return None;
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        match serde_json::from_str::<Value>(&stdout) {
            Ok(value) => Some(value),
            Err(e) => {
                let snippet: String = stdout.trim().chars().take(OUTPUT_SNIPPET_CHARS).collect();
                Self::report(
                    &InventoryError::MalformedOutput {
                        command: command.to_string(),
                        details: format!("{} (output: {:?})", e, snippet),
                    },
                    silent,
                );
                None
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_parses_json_stdout() {
        let runner = ProcessCommandRunner::new();
        let command = InventoryCommand::new(["echo", r#"[{"name": "t1"}]"#]);
        assert_eq!(runner.run(&command, false), Some(json!([{"name": "t1"}])));
    }

    #[test]
    fn test_run_empty_array_is_present() {
        let runner = ProcessCommandRunner::new();
        let command = InventoryCommand::new(["echo", "[]"]);
        assert_eq!(runner.run(&command, false), Some(json!([])));
    }

    #[test]
    fn test_run_non_zero_exit_is_absent() {
        let runner = ProcessCommandRunner::new();
        let command = InventoryCommand::new(["sh", "-c", "echo denied >&2; exit 1"]);
        assert_eq!(runner.run(&command, false), None);
        assert_eq!(runner.run(&command, true), None);
    }

    #[test]
    fn test_run_non_json_output_is_absent() {
        let runner = ProcessCommandRunner::new();
        let command = InventoryCommand::new(["echo", "Listed 0 items."]);
        assert_eq!(runner.run(&command, false), None);
    }

    #[test]
    fn test_run_empty_output_is_absent() {
        let runner = ProcessCommandRunner::new();
        let command = InventoryCommand::new(["true"]);
        assert_eq!(runner.run(&command, true), None);
    }

    #[test]
    fn test_run_missing_program_is_absent() {
        let runner = ProcessCommandRunner::new();
        let command = InventoryCommand::new(["definitely-not-a-real-gcloud-binary", "list"]);
        assert_eq!(runner.run(&command, false), None);
    }
}
