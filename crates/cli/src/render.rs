//! Terminal and JSON reporting for the CLI.
//!
//! Pretty output goes to stderr so stdout stays reserved for the label
//! itself. JSON output is a single object on stdout.

use std::fmt::Display;
use std::ops::Range;

use ariadne::{Color, Config, Fmt, IndexType, Label, Report, ReportKind, Source};
use clap::ValueEnum;
use zpl_builder_core::JobError;
use zpl_builder_preview::PreviewError;
use zpl_builder_profile::ProfileError;

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results and failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum Format {
    /// Label text on stdout, human-readable messages on stderr.
    #[default]
    Pretty,
    /// One machine-readable JSON object on stdout.
    Json,
}

// ── Job source annotation ───────────────────────────────────────────────

/// Byte offset of a 1-based line/column position, clamped to the source.
pub(crate) fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

/// Byte span of the character at a 1-based line/column position.
pub(crate) fn error_span(source: &str, line: usize, column: usize) -> Range<usize> {
    let mut start = offset_of(source, line, column);
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    let width = source[start..].chars().next().map_or(0, char::len_utf8);
    start..start + width
}

/// Render a JSON syntax or schema error against the job text it came from.
pub(crate) fn report_parse_error(source: &str, filename: &str, err: &serde_json::Error) {
    let span = error_span(source, err.line(), err.column());
    let mut cache = (filename, Source::from(source));

    // serde_json positions are byte offsets.
    let config = Config::default()
        .with_compact(false)
        .with_index_type(IndexType::Byte);

    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message("job does not match the command schema")
        .with_config(config)
        .with_label(
            Label::new((filename, span))
                .with_message(err.to_string())
                .with_color(Color::Red),
        )
        .finish()
        .eprint(&mut cache)
        .ok();
}

/// Print a one-line build failure, naming the rejected command.
pub(crate) fn report_build_error(filename: &str, index: usize, command: &str, message: &dyn Display) {
    eprintln!(
        "{}: {filename}: command {index} ({}): {message}",
        "error".fg(Color::Red),
        command.fg(Color::Cyan),
    );
}

// ── Failures ────────────────────────────────────────────────────────────

/// Stable error kind for the JSON failure envelope.
pub(crate) fn error_kind(err: &anyhow::Error) -> &'static str {
    if let Some(job) = err.downcast_ref::<JobError>() {
        return match job {
            JobError::Parse(_) => "invalid_job",
            _ => "build_failed",
        };
    }
    if err.downcast_ref::<ProfileError>().is_some() {
        return "invalid_profile";
    }
    if err.downcast_ref::<PreviewError>().is_some() {
        return "preview_failed";
    }
    "command_failed"
}

/// Report a failed command in the selected format.
pub(crate) fn report_failure(err: &anyhow::Error, format: Format) {
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "success": false,
                "error": error_kind(err),
                "message": format!("{err:#}"),
            });
            println!("{out:#}");
        }
        Format::Pretty => {
            eprintln!("{}: {err:#}", "error".fg(Color::Red));
        }
    }
}
