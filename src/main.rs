//! Blueprint - artifact generator for the TikTok Wattpad imagines automation.
//!
//! Writes a JSON blueprint and a Markdown playbook describing the Pabbly
//! Connect workflow.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use imagines_blueprint::config::{Config, SourceConfig};
use imagines_blueprint::render::{ArtifactFormat, MarkdownPlaybook, StructuredExport};
use imagines_blueprint::{Exporter, Playbook, APP_NAME};

/// Generate the TikTok Wattpad imagines automation artifacts
#[derive(Parser)]
#[command(name = "blueprint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run (defaults to export)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default lookup
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Replace the built-in workflow with a JSON, YAML or TOML file
    #[arg(long, global = true, value_name = "FILE")]
    workflow: Option<PathBuf>,

    /// Replace the built-in scoring snippet
    #[arg(long, global = true, value_name = "FILE")]
    scoring: Option<PathBuf>,

    /// Replace the built-in digest snippet
    #[arg(long, global = true, value_name = "FILE")]
    digest: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the JSON blueprint and Markdown playbook (default)
    Export {
        /// Output directory
        #[arg(short, long, env = "BLUEPRINT_OUT_DIR")]
        out: Option<PathBuf>,
    },

    /// Print one artifact to stdout
    Render {
        /// Artifact format
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Markdown)]
        format: RenderFormat,
    },

    /// Check the workflow and snippets without writing anything
    Validate,

    /// Show the effective configuration
    Config {
        /// Print the global config directory instead
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RenderFormat {
    Json,
    Markdown,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match &config.loaded_from {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded config"),
        None => tracing::debug!("No config file found, using defaults"),
    }

    let source = SourceConfig {
        workflow: cli.workflow.or_else(|| config.source.workflow.clone()),
        scoring: cli.scoring.or_else(|| config.source.scoring.clone()),
        digest: cli.digest.or_else(|| config.source.digest.clone()),
    };

    match cli.command {
        None => cmd_export(&source, config.export.out_dir()),
        Some(Commands::Export { out }) => {
            cmd_export(&source, out.unwrap_or_else(|| config.export.out_dir()))
        }
        Some(Commands::Render { format }) => cmd_render(&source, format),
        Some(Commands::Validate) => cmd_validate(&source),
        Some(Commands::Config { path }) => cmd_config(&config, path),
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
            Ok(())
        }
    }
}

/// Write both artifacts into the output directory.
fn cmd_export(source: &SourceConfig, out_dir: PathBuf) -> Result<()> {
    let playbook = Playbook::load(source)?;

    let report = Exporter::with_setup(out_dir, playbook.setup.clone())
        .export(&playbook.workflow, &playbook.artifacts)
        .context("Failed to export workflow assets")?;

    println!("Workflow assets generated:");
    for path in report.paths() {
        println!("  - {}", path.display());
    }

    Ok(())
}

/// Print a single artifact.
fn cmd_render(source: &SourceConfig, format: RenderFormat) -> Result<()> {
    let playbook = Playbook::load(source)?;

    let content = match format {
        RenderFormat::Json => {
            StructuredExport.render(&playbook.workflow, &playbook.artifacts, Utc::now())?
        }
        RenderFormat::Markdown => MarkdownPlaybook::new()
            .with_setup(playbook.setup.clone())
            .render(&playbook.workflow, &playbook.artifacts, Utc::now())?,
    };

    print!("{content}");
    Ok(())
}

/// Load and validate the playbook, then summarize it.
fn cmd_validate(source: &SourceConfig) -> Result<()> {
    let playbook = Playbook::load(source)?;
    let workflow = &playbook.workflow;

    println!("✓ {}", workflow.title);
    println!(
        "  {} tools, {} modules, {} steps, {} assets",
        workflow.key_tools.len(),
        workflow.modules.len(),
        workflow.step_count(),
        workflow.assets.len()
    );
    for artifact in playbook.artifacts.iter() {
        let lines = artifact.source.lines().count();
        println!("  {} ({}): {lines} lines", artifact.title, artifact.name);
    }

    Ok(())
}

/// Show configuration.
fn cmd_config(config: &Config, show_path: bool) -> Result<()> {
    if show_path {
        if let Some(path) = Config::config_dir() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let toml = toml::to_string_pretty(config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, APP_NAME, &mut io::stdout());
}
