//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::FieldArgs;
use lessonplan::api::{self, AppState, SubjectsResponse};
use lessonplan::config::AppConfig;
use lessonplan_core::{LessonRequest, PlanError, PlanRenderer, render_document};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of a request input file (1 MB).
const MAX_INPUT_FILE_SIZE: u64 = 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), PlanError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| PlanError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(PlanError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Validate an input path: canonicalize it and require a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, PlanError> {
    let canonical = path.canonicalize().map_err(|e| {
        PlanError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(PlanError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate an output path: the parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, PlanError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        PlanError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(PlanError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| PlanError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_serve(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), PlanError> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);

    println!("Lesson Plan Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:            {}", config.server.host);
    println!("  Port:            {}", config.server.port);
    println!("  Reading program: {}", config.programs.reading);
    println!("  Math program:    {}", config.programs.math);
    println!();
    println!("Endpoints:");
    println!("  GET  /             - Lesson plan form");
    println!("  POST /plan         - Submit the form");
    println!("  POST /api/plan     - Render a plan (JSON)");
    println!("  GET  /api/subjects - Subjects and default programs");
    println!("  GET  /health       - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&addr, AppState::new(config)).await
}

// =============================================================================
// RENDER COMMAND
// =============================================================================

/// Load a lesson request from a JSON or TOML file.
fn load_request_file(path: &Path, format: &str) -> Result<LessonRequest, PlanError> {
    let validated_path = validate_file_path(path)?;
    validate_file_size(&validated_path, MAX_INPUT_FILE_SIZE)?;

    let text = std::fs::read_to_string(&validated_path)
        .map_err(|e| PlanError::IoError(format!("Read file: {}", e)))?;

    match format {
        "json" => serde_json::from_str(&text)
            .map_err(|e| PlanError::SerializationError(format!("Invalid JSON request: {}", e))),
        "toml" => toml::from_str(&text)
            .map_err(|e| PlanError::SerializationError(format!("Invalid TOML request: {}", e))),
        _ => Err(PlanError::SerializationError(format!(
            "Unknown format: {}. Use: json, toml",
            format
        ))),
    }
}

/// Build the request from an optional input file, then apply flag overrides.
fn build_request(
    fields: &FieldArgs,
    input: Option<&Path>,
    format: &str,
) -> Result<LessonRequest, PlanError> {
    let mut request = match input {
        Some(path) => {
            tracing::info!("Reading lesson request from {:?} (format: {})", path, format);
            load_request_file(path, format)?
        }
        None => LessonRequest::default(),
    };

    if let Some(subject) = &fields.subject {
        request.subject = subject.parse()?;
    }

    let overrides = [
        (&fields.grade, &mut request.grade),
        (&fields.program, &mut request.program),
        (&fields.unit, &mut request.unit),
        (&fields.lesson, &mut request.lesson),
        (&fields.standard, &mut request.standard),
    ];
    for (flag, target) in overrides {
        if let Some(value) = flag {
            target.clone_from(value);
        }
    }

    Ok(request)
}

/// Render a lesson plan to stdout or a file.
pub fn cmd_render(
    config: &AppConfig,
    json_mode: bool,
    fields: &FieldArgs,
    input: Option<&Path>,
    format: &str,
    output: Option<&Path>,
    fragment: bool,
) -> Result<(), PlanError> {
    let request = build_request(fields, input, format)?;
    let renderer = PlanRenderer::new(config.programs.clone());
    let plan = renderer.render(&request);
    tracing::debug!(subject = %plan.subject, title = %plan.title, "Rendered lesson plan");

    let body = if fragment {
        plan.html.clone()
    } else {
        render_document(&plan)
    };

    match output {
        Some(path) => {
            let validated_output = validate_output_path(path)?;
            std::fs::write(&validated_output, &body)
                .map_err(|e| PlanError::IoError(format!("Write file: {}", e)))?;

            if json_mode {
                let summary = serde_json::json!({
                    "title": plan.title,
                    "subject": plan.subject.name(),
                    "program": plan.program,
                    "output": validated_output.to_string_lossy(),
                    "bytes": body.len(),
                    "fragment": fragment
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).unwrap_or_default()
                );
            } else {
                println!("Wrote {} ({} bytes)", validated_output.display(), body.len());
            }
        }
        None => {
            if json_mode {
                let summary = serde_json::json!({
                    "title": plan.title,
                    "subject": plan.subject.name(),
                    "program": plan.program,
                    "html": body,
                    "fragment": fragment
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).unwrap_or_default()
                );
            } else {
                println!("{}", body);
            }
        }
    }

    Ok(())
}

// =============================================================================
// SUBJECTS COMMAND
// =============================================================================

/// List subjects and their default programs.
pub fn cmd_subjects(config: &AppConfig, json_mode: bool) -> Result<(), PlanError> {
    let listing = SubjectsResponse::from_defaults(&config.programs);

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&listing).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Subjects");
    println!("========");
    for subject in &listing.subjects {
        println!("  {:<8} default program: {}", subject.name, subject.default_program);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
