//! # Lesson Plan Generator
//!
//! The main binary for the lesson plan renderer.
//!
//! This application provides:
//! - HTTP form server (axum-based)
//! - CLI rendering to stdout or file
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │               apps/lessonplan (THE BINARY)            │
//! │                                                       │
//! │   ┌─────────────┐    ┌──────────────────────────┐     │
//! │   │   CLI       │    │  HTTP form + JSON API    │     │
//! │   │  (clap)     │    │  (axum)                  │     │
//! │   └──────┬──────┘    └────────────┬─────────────┘     │
//! │          └──────────────┬─────────┘                   │
//! │                         ▼                             │
//! │               ┌───────────────────┐                   │
//! │               │  lessonplan-core  │                   │
//! │               │  (THE TEMPLATES)  │                   │
//! │               └───────────────────┘                   │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the form server
//! lessonplan serve --host 0.0.0.0 --port 8080
//!
//! # Render a plan to a file
//! lessonplan render --subject Math --grade 3 --unit 4 --lesson 12 -o plan.html
//! lessonplan render -i request.toml -t toml --fragment
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Parse CLI arguments first so --verbose can raise the log level.
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if !cli.quiet && matches!(cli.command, Some(cli::Commands::Serve { .. })) {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing. `LESSONPLAN_LOG_FORMAT=json` enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format =
        std::env::var("LESSONPLAN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "lessonplan=debug,tower_http=debug"
    } else {
        "lessonplan=info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr: `render` writes HTML to stdout.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ┬  ┌─┐┌─┐┌─┐┌─┐┌┐┌  ┌─┐┬  ┌─┐┌┐┌
  │  ├┤ └─┐└─┐│ ││││  ├─┘│  ├─┤│││
  ┴─┘└─┘└─┘└─┘└─┘┘└┘  ┴  ┴─┘┴ ┴┘└┘

  Lesson Plan Generator v{}

  Reading • Math • Print-ready
"#,
        env!("CARGO_PKG_VERSION")
    );
}
