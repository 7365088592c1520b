use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod outputs;
mod registry;
mod report;
mod skeleton;
mod structure;
mod util;

#[derive(Parser)]
#[command(name = "archdoc", version)]
#[command(about = "Generate and validate architect-skill review documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate skeleton review documents from the skill's templates
    Generate {
        /// Skill root path (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Workload name for a WAF review skeleton
        #[arg(short = 'w', long)]
        workload: Option<String>,

        /// Decision title for a decision matrix skeleton (also names the ADR)
        #[arg(short = 'd', long)]
        decision: Option<String>,

        /// ADR number for an ADR skeleton
        #[arg(short = 'a', long)]
        adr: Option<u32>,

        /// Output directory (defaults to config output_dir)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Path to config file (defaults to ./archdoc.toml or ~/.config/archdoc/config.toml)
        #[arg(long)]
        config: Option<String>,
    },

    /// Validate the skill package structure
    CheckStructure {
        /// Skill root path (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Report format: text or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Validate that a workflow run produced the required output artifacts
    CheckOutputs {
        /// Directory holding generated artifacts (defaults to config output_dir)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Report format: text or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Validate docs index, router files, and registry consistency
    CheckDocs {
        /// Skill root path (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,

        /// Report format: text or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            path,
            workload,
            decision,
            adr,
            output,
            config,
        } => {
            cli::generate::run(path, workload, decision, adr, output, config)?;
        }
        Commands::CheckStructure {
            path,
            format,
            config,
        } => {
            cli::structure::run(path, format, config)?;
        }
        Commands::CheckOutputs {
            output,
            format,
            config,
        } => {
            cli::outputs::run(output, format, config)?;
        }
        Commands::CheckDocs {
            path,
            format,
            config,
        } => {
            cli::docs::run(path, format, config)?;
        }
    }

    Ok(())
}
