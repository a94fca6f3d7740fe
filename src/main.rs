mod cli;

use cli::Args;
use cloud_threat_inventory::adapters::outbound::cache::{FileResultCache, NoopResultCache};
use cloud_threat_inventory::adapters::outbound::console::{
    ProgressAwareWriter, StderrProgressReporter,
};
use cloud_threat_inventory::adapters::outbound::filesystem::FileSystemSummaryStore;
use cloud_threat_inventory::adapters::outbound::process::ProcessCommandRunner;
use cloud_threat_inventory::application::dto::{InventoryRequest, InventoryResponse, OutputDocument};
use cloud_threat_inventory::application::factories::{PresenterFactory, PresenterType};
use cloud_threat_inventory::application::use_cases::CollectInventoryUseCase;
use cloud_threat_inventory::config::{self, ConfigFile, Settings};
use cloud_threat_inventory::ports::outbound::ResultCache;
use cloud_threat_inventory::shared::error::ExitCode;
use cloud_threat_inventory::shared::Result;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = Args::parse_args();
    let reporter = StderrProgressReporter::new();
    init_tracing(args.verbose, reporter.log_writer());

    let exit_code = match run(args, reporter) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::from_error(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

/// Logs go to stderr around the progress bar; stdout is reserved for the JSON document
fn init_tracing(verbose: bool, writer: ProgressAwareWriter) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();
}

fn run(args: Args, reporter: StderrProgressReporter) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(args.overrides(), config)?;

    let response = if args.no_cache {
        collect(&settings, NoopResultCache::new(), reporter)?
    } else {
        let cache = FileResultCache::new(&settings.cache_dir, settings.cache_ttl);
        collect(&settings, cache, reporter)?
    };

    let document = OutputDocument::from_raw_flag(args.raw);
    let rendered = response.render(document)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&rendered)?;

    Ok(())
}

/// `--config` must exist; otherwise the working directory is searched
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        let loaded = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(Some(loaded));
    }

    let cwd = std::env::current_dir()?;
    let discovered = config::discover_config(&cwd)?;
    if discovered.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            cwd.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(discovered)
}

fn collect<C: ResultCache>(
    settings: &Settings,
    cache: C,
    reporter: StderrProgressReporter,
) -> Result<InventoryResponse> {
    let use_case = CollectInventoryUseCase::new(
        ProcessCommandRunner::new(),
        cache,
        FileSystemSummaryStore::new(&settings.output_dir),
        reporter,
    )
    .with_catalog(settings.command_catalog());

    use_case.execute(InventoryRequest::new(settings.project_id.clone()))
}
