mod adapters;
mod application;
mod cli;
mod config;
mod dependency_graph;
mod logger;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemManifestReader, FileSystemWriter};
use adapters::outbound::network::NpmRegistryClient;
use adapters::outbound::process::{MermaidCli, NpmCliLookup, DEFAULT_RENDER_TIMEOUT};
use application::dto::{VisualizeRequest, VisualizeResponse};
use application::use_cases::VisualizeDependenciesUseCase;
use cli::Args;
use config::{ConfigFile, Settings, Transport};
use ports::outbound::RegistryLookup;
use shared::error::ExitCode;
use shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    logger::init_logger(args.verbose, args.quiet);

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<VisualizeResponse> {
    let config = load_config(args.config.as_deref(), Path::new("."))?;
    let settings = Settings::resolve(config.merge(args.to_overrides()))?;
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let manifest_reader =
        FileSystemManifestReader::new().with_dev_dependencies(settings.include_dev_dependencies);
    let registry = create_registry(&settings)?;
    let diagram_writer = FileSystemWriter::new();
    let diagram_renderer =
        MermaidCli::with_program(settings.renderer.clone(), DEFAULT_RENDER_TIMEOUT);
    let progress_reporter = StderrProgressReporter::new().with_quiet(args.quiet);

    // Create use case with injected dependencies
    let use_case = VisualizeDependenciesUseCase::new(
        manifest_reader,
        registry,
        diagram_writer,
        diagram_renderer,
        progress_reporter,
    );

    let request = VisualizeRequest::new(
        settings.manifest,
        settings.diagram_path,
        settings.output_path,
    )
    .with_failure_policy(settings.failure_policy)
    .with_max_depth(settings.max_depth);

    use_case.execute(request).await
}

/// Loads the explicit config file, or `config.json` in `dir` when none is given
///
/// A missing default config is not an error: the run may still be fully
/// described by command-line flags.
fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::discover_config(dir)?.unwrap_or_default()),
    }
}

fn create_registry(settings: &Settings) -> Result<Box<dyn RegistryLookup>> {
    Ok(match settings.transport {
        Transport::Http => Box::new(NpmRegistryClient::with_settings(
            &settings.registry_url,
            settings.timeout,
            settings.max_retries,
        )?),
        Transport::Npm => Box::new(NpmCliLookup::new()),
    })
}
