//! # Lesson Plan CLI Module
//!
//! This module implements the CLI interface.
//!
//! ## Available Commands
//!
//! - `serve` - Start the form server
//! - `render` - Render a lesson plan to stdout or a file
//! - `subjects` - List subjects and default programs

mod commands;

use clap::{Parser, Subcommand};
use lessonplan::config::AppConfig;
use lessonplan_core::PlanError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Lesson Plan Generator
///
/// Fills a fixed Reading or Math lesson plan template from a few fields
/// and renders it as printable HTML.
#[derive(Parser, Debug)]
#[command(name = "lessonplan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file (default: ./lessonplan.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the form server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render a lesson plan
    Render {
        #[command(flatten)]
        fields: FieldArgs,

        /// Read the request from a file instead of (or under) the field flags
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input file format (json, toml)
        #[arg(short = 't', long, default_value = "json")]
        format: String,

        /// Write HTML to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the plan fragment, not a standalone document
        #[arg(long)]
        fragment: bool,
    },

    /// List subjects and their default programs
    Subjects,
}

/// Lesson plan fields accepted as flags. Flags override values from `--input`.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Grade level
    #[arg(short, long)]
    pub grade: Option<String>,

    /// Subject (Reading or Math)
    #[arg(short, long)]
    pub subject: Option<String>,

    /// Curriculum program (blank uses the subject default)
    #[arg(long)]
    pub program: Option<String>,

    /// Unit
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Lesson
    #[arg(short, long)]
    pub lesson: Option<String>,

    /// Standard
    #[arg(long)]
    pub standard: Option<String>,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PlanError> {
    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Serve { host, port }) => cmd_serve(config, host, port).await,
        Some(Commands::Render {
            fields,
            input,
            format,
            output,
            fragment,
        }) => cmd_render(
            &config,
            json_mode,
            &fields,
            input.as_deref(),
            &format,
            output.as_deref(),
            fragment,
        ),
        Some(Commands::Subjects) | None => cmd_subjects(&config, json_mode),
    }
}
