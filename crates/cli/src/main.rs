mod render;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zpl_builder_core::{Job, JobError, LabelBuilder};
use zpl_builder_preview::{LabelRenderer, LabelaryClient, PreviewConfig, PreviewRequest};
use zpl_builder_profile::{LabelProfile, load_profile_from_path, validate_base_url};

use crate::render::{Format, report_build_error, report_failure, report_parse_error};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "zpl-build",
    version,
    about = "Build, check, and preview ZPL II labels from JSON command lists"
)]
struct Cli {
    /// Output mode: "pretty" writes the label to stdout and messages to
    /// stderr, "json" writes one JSON object to stdout.
    #[arg(long, global = true, value_enum, default_value_t = Format::Pretty)]
    output: Format,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Build a label from a JSON job and emit the ZPL document.
    Render {
        /// Job file, or `-` for stdin.
        file: String,
        /// Write the document to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Validate a JSON job without emitting the document.
    Check {
        /// Job file, or `-` for stdin.
        file: String,
        /// Label profile JSON; its size in dots is reported alongside the job.
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Build a label and fetch a PNG preview from a Labelary-compatible service.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Job file, or `-` for stdin.
    file: String,
    /// Label profile JSON supplying size, density, and preview endpoint.
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Label width in inches (overrides the profile).
    #[arg(long)]
    width: Option<f64>,
    /// Label height in inches (overrides the profile).
    #[arg(long)]
    height: Option<f64>,
    /// Print density in dots per millimetre: 6, 8, 12 or 24 (overrides the profile).
    #[arg(long)]
    dpmm: Option<u32>,
    /// Label index within the document (overrides the profile).
    #[arg(long)]
    index: Option<u32>,
    /// Rendering service base URL (overrides the profile).
    #[arg(long)]
    base_url: Option<String>,
    /// Where to write the PNG.
    #[arg(long)]
    out: PathBuf,
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let format = cli.output;

    let result = match cli.cmd {
        Cmd::Render { file, out } => cmd_render(&file, out.as_deref(), format),
        Cmd::Check { file, profile } => cmd_check(&file, profile.as_deref(), format),
        Cmd::Preview(args) => cmd_preview(&args, format),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            report_failure(&err, format);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber. Default level is `warn`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_render(file: &str, out: Option<&Path>, format: Format) -> Result<ExitCode> {
    let label = build_label(file, format)?;
    let bytes = label.render_bytes();

    match (out, format) {
        (Some(path), _) => {
            fs::write(path, &bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            written(format, path, bytes.len());
        }
        (None, Format::Json) => {
            let out = serde_json::json!({ "success": true, "zpl": label.render_text() });
            println!("{out:#}");
        }
        (None, Format::Pretty) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(file: &str, profile: Option<&Path>, format: Format) -> Result<ExitCode> {
    let profile = load_profile(profile)?;
    let job = load_job(file, format)?;

    match job.build() {
        Ok(label) => {
            let bytes = label.render_bytes().len();
            match format {
                Format::Json => {
                    let mut out = serde_json::json!({
                        "ok": true,
                        "commands": job.commands.len(),
                        "bytes": bytes,
                    });
                    if let Some(p) = &profile {
                        out["label"] = serde_json::json!({
                            "id": p.id,
                            "width_dots": p.width_dots(),
                            "height_dots": p.height_dots(),
                            "dpmm": p.dpmm,
                        });
                    }
                    println!("{out:#}");
                }
                Format::Pretty => {
                    eprintln!("job ok: {} commands, {bytes} bytes", job.commands.len());
                    if let Some(p) = &profile {
                        eprintln!(
                            "label {}: {}x{} dots at {} dpmm",
                            p.id,
                            p.width_dots(),
                            p.height_dots(),
                            p.dpmm
                        );
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(JobError::Command {
            index,
            command,
            source,
        }) => {
            match format {
                Format::Json => {
                    let field = source.as_validation().map(|v| v.field.to_string());
                    let out = serde_json::json!({
                        "ok": false,
                        "index": index,
                        "command": command,
                        "field": field,
                        "message": source.to_string(),
                    });
                    println!("{out:#}");
                }
                Format::Pretty => report_build_error(file, index, command, &source),
            }
            Ok(ExitCode::FAILURE)
        }
        Err(other) => Err(other.into()),
    }
}

fn cmd_preview(args: &PreviewArgs, format: Format) -> Result<ExitCode> {
    let profile = load_profile(args.profile.as_deref())?;

    let request = preview_request(args, profile.as_ref());
    let config = preview_config(args, profile.as_ref())?;
    let label = build_label(&args.file, format)?;

    let client = LabelaryClient::new(&config)?;
    tracing::debug!(url = %client.url(&request), "rendering preview");
    let png = client.render(&label.render_text(), &request)?;

    fs::write(&args.out, &png)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    written(format, &args.out, png.len());
    Ok(ExitCode::SUCCESS)
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Read a job file, or stdin when `file` is `-`.
fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read job from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(file).with_context(|| format!("failed to read {file}"))
}

fn load_job(file: &str, format: Format) -> Result<Job> {
    let text = read_input(file)?;
    match Job::from_json(&text) {
        Ok(job) => {
            tracing::debug!(file, commands = job.commands.len(), "job loaded");
            Ok(job)
        }
        Err(err) => {
            if let (Format::Pretty, JobError::Parse(json)) = (format, &err) {
                report_parse_error(&text, file, json);
            }
            Err(anyhow::Error::new(err).context(format!("failed to parse job {file}")))
        }
    }
}

fn load_profile(path: Option<&Path>) -> Result<Option<LabelProfile>> {
    path.map(|path| {
        load_profile_from_path(path)
            .with_context(|| format!("failed to load profile {}", path.display()))
    })
    .transpose()
}

fn build_label(file: &str, format: Format) -> Result<LabelBuilder> {
    let job = load_job(file, format)?;
    Ok(job.build()?)
}

/// Profile values first, then explicit flags on top.
fn preview_request(args: &PreviewArgs, profile: Option<&LabelProfile>) -> PreviewRequest {
    let mut request = profile.map(PreviewRequest::from).unwrap_or_default();
    if let Some(width) = args.width {
        request.width_in = width;
    }
    if let Some(height) = args.height {
        request.height_in = height;
    }
    if let Some(dpmm) = args.dpmm {
        request.dpmm = dpmm;
    }
    if let Some(index) = args.index {
        request.index = index;
    }
    request
}

fn preview_config(args: &PreviewArgs, profile: Option<&LabelProfile>) -> Result<PreviewConfig> {
    let mut config = PreviewConfig::default();
    let base_url = args
        .base_url
        .as_deref()
        .or_else(|| profile.and_then(LabelProfile::base_url));
    if let Some(url) = base_url {
        validate_base_url(url)?;
        config.base_url = url.to_owned();
    }
    Ok(config)
}

fn written(format: Format, path: &Path, bytes: usize) {
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "success": true,
                "out": path.display().to_string(),
                "bytes": bytes,
            });
            println!("{out:#}");
        }
        Format::Pretty => eprintln!("wrote {bytes} bytes to {}", path.display()),
    }
}
