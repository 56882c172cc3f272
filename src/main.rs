//! mvnlink - Open the Maven repository page for a dependency declaration
//!
//! Point it at a line of a build file and it prints (or opens) the
//! mvnrepository.com page of the dependency declared there:
//! - Gradle Groovy DSL (build.gradle)
//! - Gradle Kotlin DSL (build.gradle.kts)
//! - Maven POM (pom.xml)

use clap::Parser;
use mvnlink::browser::{BrowserLauncher, SystemBrowser};
use mvnlink::cli::CliArgs;
use mvnlink::editor::FileBuffer;
use mvnlink::orchestrator::{Orchestrator, OrchestratorConfig};
use mvnlink::output::{create_formatter, OutputConfig};
use mvnlink::project::find_project_root;
use mvnlink::properties::{GradlewPropertySource, PropertySource, StaticPropertySource};
use mvnlink::registry::RegistryUrlBuilder;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("mvnlink v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}:{}", args.file.display(), args.line);
    }

    let orchestrator = Orchestrator::new(OrchestratorConfig {
        registry: RegistryUrlBuilder::new(args.registry_url.as_str()),
        overrides: args.overrides(),
    });

    // Check mode: silent, exit code only
    if args.check {
        let found = FileBuffer::open(&args.file, args.line)
            .map(|buffer| orchestrator.check(&buffer))
            .unwrap_or(false);
        return Ok(if found {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let buffer = FileBuffer::open(&args.file, args.line)?;
    let properties: Box<dyn PropertySource> = if args.no_properties {
        Box::new(StaticPropertySource::empty())
    } else {
        let root = args
            .project_root
            .clone()
            .unwrap_or_else(|| find_project_root(&args.file));
        Box::new(GradlewPropertySource::new(root).with_timeout(args.properties_timeout))
    };

    let result = orchestrator.lookup(&buffer, properties.as_ref()).await?;

    let launch = if args.open {
        Some(SystemBrowser::new().open(&result.url))
    } else {
        None
    };
    let opened = matches!(launch, Some(Ok(())));

    // Output results, even when the browser could not be launched
    let formatter = create_formatter(OutputConfig::from_cli(args.json, args.verbose));
    let mut stdout = io::stdout().lock();
    formatter.format(&result, opened, &mut stdout)?;
    stdout.flush()?;

    if let Some(Err(e)) = launch {
        eprintln!("Error: {}", e);
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}
