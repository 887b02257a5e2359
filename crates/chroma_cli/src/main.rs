//! Chroma CLI - generate theme source code from color design tokens
//!
//! Commands:
//! - `chroma generate`: load token layers and write the primitives and
//!   semantics documents
//! - `chroma check`: fail when the documents on disk are out of date
//! - `chroma init`: scaffold a chroma.toml and starter token files

mod config;
mod project;
mod run;

use anyhow::Result;
use chroma_tokens::Target;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{ChromaConfig, CONFIG_FILE};
use crate::run::Overrides;

/// Generate theme source code from color design tokens
#[derive(Parser, Debug)]
#[command(name = "chroma")]
#[command(about = "Generate theme source code from color design tokens")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the primitives and semantics documents
    Generate {
        /// Config file or directory containing chroma.toml
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// Output directory (overrides output.dir)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Target framework: compose or blinc (overrides output.target)
        #[arg(short, long)]
        target: Option<Target>,
    },

    /// Verify the generated documents are up to date
    Check {
        /// Config file or directory containing chroma.toml
        #[arg(short, long, default_value = CONFIG_FILE)]
        config: PathBuf,

        /// Output directory (overrides output.dir)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Target framework: compose or blinc (overrides output.target)
        #[arg(short, long)]
        target: Option<Target>,
    },

    /// Create a chroma.toml and starter token files
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Project name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing chroma.toml
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            config,
            out_dir,
            target,
        } => {
            let config = ChromaConfig::load(&config)?;
            let written = run::write_documents(&config, &Overrides { out_dir, target })?;
            tracing::info!("Generated {} files for {}", written.len(), config.project.name);
        }
        Commands::Check {
            config,
            out_dir,
            target,
        } => {
            let config = ChromaConfig::load(&config)?;
            let stale = run::stale_documents(&config, &Overrides { out_dir, target })?;
            if !stale.is_empty() {
                anyhow::bail!(
                    "{} generated file(s) are out of date. Run `chroma generate`.",
                    stale.len()
                );
            }
            tracing::info!("Generated files are up to date");
        }
        Commands::Init { path, name, force } => {
            let name = match name {
                Some(name) => name,
                None => project_name(&path)?,
            };
            project::create_project(&path, &name, force)?;
            tracing::info!("Created {} in {}", CONFIG_FILE, path.display());
        }
    }

    Ok(())
}

fn project_name(path: &std::path::Path) -> Result<String> {
    let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot infer a project name from {}; pass --name",
                path.display()
            )
        })
}
