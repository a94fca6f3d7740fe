use clap::Parser;
use std::path::PathBuf;

use cloud_threat_inventory::config::SettingsOverrides;

/// Collect and summarize the resource inventory of a GCP project
#[derive(Parser, Debug)]
#[command(name = "cloud-threat-inventory")]
#[command(version)]
#[command(
    about = "Collect and summarize the resource inventory of a GCP project for threat modeling",
    long_about = None
)]
pub struct Args {
    /// GCP project id to inventory
    #[arg(short, long, env = "PROJECT_ID")]
    pub project_id: Option<String>,

    /// Directory for cached command output (default: .cache/gcp-inventory)
    #[arg(long, env = "THREAT_INVENTORY_CACHE_DIR", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Cache entry lifetime in seconds (default: 3600)
    #[arg(long, env = "THREAT_INVENTORY_CACHE_TTL", value_name = "SECONDS")]
    pub cache_ttl: Option<u64>,

    /// Bypass the disk cache for this run
    #[arg(long)]
    pub no_cache: bool,

    /// Directory receiving <project-id>/inventory_summary.json (default: output)
    #[arg(long, env = "THREAT_INVENTORY_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// gcloud executable to invoke
    #[arg(long, value_name = "PATH")]
    pub gcloud_bin: Option<String>,

    /// bq executable to invoke
    #[arg(long, value_name = "PATH")]
    pub bq_bin: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the raw inventory instead of the summary
    #[arg(long)]
    pub raw: bool,

    /// Config file path (default: ./cloud-threat-inventory.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Values that take precedence over the config file
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            project_id: self.project_id.clone(),
            cache_dir: self.cache_dir.clone(),
            cache_ttl_secs: self.cache_ttl,
            output_dir: self.output_dir.clone(),
            gcloud_bin: self.gcloud_bin.clone(),
            bq_bin: self.bq_bin.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "cloud-threat-inventory",
            "--project-id",
            "my-test-proj",
            "--cache-ttl",
            "60",
            "--no-cache",
            "--raw",
            "-o",
            "inventory.json",
        ])
        .unwrap();

        assert_eq!(args.project_id.as_deref(), Some("my-test-proj"));
        assert_eq!(args.cache_ttl, Some(60));
        assert!(args.no_cache);
        assert!(args.raw);
        assert_eq!(args.output, Some(PathBuf::from("inventory.json")));
    }

    #[test]
    fn test_non_numeric_ttl_is_rejected() {
        let result = Args::try_parse_from([
            "cloud-threat-inventory",
            "--project-id",
            "my-test-proj",
            "--cache-ttl",
            "soon",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_carry_binaries() {
        let args = Args::try_parse_from([
            "cloud-threat-inventory",
            "--project-id",
            "my-test-proj",
            "--gcloud-bin",
            "/opt/gcloud",
            "--bq-bin",
            "/opt/bq",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert_eq!(overrides.gcloud_bin.as_deref(), Some("/opt/gcloud"));
        assert_eq!(overrides.bq_bin.as_deref(), Some("/opt/bq"));
    }
}
