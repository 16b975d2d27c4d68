//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use plangate::output::OutputMode;

/// plangate - Static gate for plan artifacts
#[derive(Parser, Debug)]
#[command(
    name = "plangate",
    version,
    about = "Static gate for PRD/SPEC/tasks plan artifacts",
    long_about = "Check that a plan directory is complete before agents start working on it.\n\n\
                  PRD.md and SPEC.md must carry their required sections.\n\
                  tasks.yaml must follow the task schema and form an acyclic dependency graph."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the artifacts of a plan directory
    Validate {
        /// Path to the plan directory
        #[arg(long)]
        plan_dir: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Validate { plan_dir }) => commands::validate(&plan_dir, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": plangate::VERSION
                    })
                );
            } else {
                println!("plangate v{}", plangate::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": plangate::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("plangate v{}", plangate::VERSION);
                println!("\nRun 'plangate --help' for usage");
                println!("Run 'plangate validate --plan-dir <DIR>' to check a plan");
            }
            Ok(())
        },
    }
}
