//! CLI entry point for reglens.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the lower crates.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use reglens_app::Session;
use reglens_client::{AnalyzeRequest, HttpTransport};
use reglens_render::{canonical_json, canonical_line_count, colorize, render_summary, render_terminal};
use reglens_settings::{EffectiveConfig, Overrides};
use reglens_types::ComplianceReport;

#[derive(Parser, Debug)]
#[command(
    name = "reglens",
    version,
    about = "Client for the regulatory compliance analysis service"
)]
struct Cli {
    /// Path to reglens config TOML.
    #[arg(long, default_value = "reglens.toml")]
    config: Utf8PathBuf,

    /// Override the analysis service base URL.
    #[arg(long)]
    service_url: Option<String>,

    /// Override the request timeout in seconds (0 disables it).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Override the directory report artifacts are written to.
    #[arg(long)]
    output_dir: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct AnalyzeSource {
    /// Regulation text to analyze, inline.
    #[arg(long)]
    text: Option<String>,

    /// Read the regulation text from a file.
    #[arg(long)]
    text_file: Option<Utf8PathBuf>,

    /// Upload a regulation document (PDF) instead of text.
    #[arg(long)]
    file: Option<Utf8PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit regulation text or a document for analysis.
    Analyze {
        #[command(flatten)]
        source: AnalyzeSource,

        /// Effective date of the law, YYYY-MM-DD.
        #[arg(long)]
        date_of_law: Option<String>,

        /// Also print the colorized canonical JSON after the summary.
        #[arg(long)]
        show_json: bool,
    },

    /// Render a saved report as colorized canonical JSON.
    Show {
        /// Path to the saved report JSON.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Plain output without ANSI colors.
        #[arg(long)]
        no_color: bool,
    },

    /// Re-export a saved report as an artifact file or clipboard text.
    Export {
        /// Path to the saved report JSON.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the artifact (defaults to the output dir).
        #[arg(long)]
        out_dir: Option<Utf8PathBuf>,

        /// Print the canonical text to stdout instead, for piping into
        /// the system clipboard (pbcopy, xclip).
        #[arg(long)]
        clipboard: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli)?;

    match cli.cmd {
        Commands::Analyze {
            ref source,
            ref date_of_law,
            show_json,
        } => cmd_analyze(&cfg, source, date_of_law.clone(), show_json),
        Commands::Show { report, no_color } => cmd_show(&report, no_color),
        Commands::Export {
            report,
            out_dir,
            clipboard,
        } => cmd_export(&cfg, &report, out_dir, clipboard),
    }
}

/// Load config if present; a missing file is allowed (defaults apply).
fn load_config(cli: &Cli) -> anyhow::Result<EffectiveConfig> {
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
    let cfg = if cfg_text.trim().is_empty() {
        reglens_settings::ReglensConfigV1::default()
    } else {
        reglens_settings::parse_config_toml(&cfg_text)
            .with_context(|| format!("parse config: {}", cli.config))?
    };
    let overrides = Overrides {
        service_url: cli.service_url.clone(),
        timeout_secs: cli.timeout_secs,
        output_dir: cli.output_dir.clone(),
    };
    Ok(reglens_settings::resolve_config(cfg, overrides))
}

fn cmd_analyze(
    cfg: &EffectiveConfig,
    source: &AnalyzeSource,
    date_of_law: Option<String>,
    show_json: bool,
) -> anyhow::Result<()> {
    let request = build_request(source, date_of_law)?;

    if let Err(err) = request.validate() {
        eprintln!("reglens: invalid submission: {err}");
        std::process::exit(1);
    }
    for warning in request.length_warnings() {
        eprintln!("reglens warning: {warning}");
    }

    let transport = HttpTransport::new(&cfg.service_url, cfg.timeout)
        .with_context(|| format!("build transport for {}", cfg.service_url))?;

    let mut session = Session::new();
    session.submit(&request, &transport);

    if let Some(message) = session.state().error() {
        eprintln!("reglens: analysis failed");
        eprintln!("  {message}");
        std::process::exit(1);
    }

    // Succeeded: clone out so the summary can drive the reveal schedule.
    let report = session
        .report()
        .context("submission resolved without report or error")?
        .clone();

    print!("{}", render_summary(&report, session.reveals_mut()));

    let path = reglens_app::write_artifact(&report, &cfg.output_dir)
        .context("write report artifact")?;
    eprintln!("reglens: report written to {path}");

    if show_json {
        let text = canonical_json(&report)?;
        let lines: Vec<_> = colorize(&text).collect();
        println!();
        println!("{}", render_terminal(&lines, true));
    }

    Ok(())
}

fn build_request(
    source: &AnalyzeSource,
    date_of_law: Option<String>,
) -> anyhow::Result<AnalyzeRequest> {
    if let Some(text) = &source.text {
        return Ok(AnalyzeRequest::Text {
            text: text.clone(),
            date_of_law,
        });
    }
    if let Some(path) = &source.text_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read regulation text: {path}"))?;
        return Ok(AnalyzeRequest::Text { text, date_of_law });
    }
    if let Some(path) = &source.file {
        let bytes =
            std::fs::read(path).with_context(|| format!("read regulation document: {path}"))?;
        let filename = path
            .file_name()
            .context("document path has no file name")?
            .to_string();
        return Ok(AnalyzeRequest::Document {
            filename,
            bytes,
            date_of_law,
        });
    }
    // clap's group(required) guarantees one of the three is present.
    anyhow::bail!("no input source given")
}

fn cmd_show(report_path: &Utf8PathBuf, no_color: bool) -> anyhow::Result<()> {
    let Ok(report_text) = std::fs::read_to_string(report_path) else {
        // Absent report is a defined empty state, not a crash.
        eprintln!("reglens: no report at {report_path}; run `reglens analyze` first");
        std::process::exit(1);
    };
    let report = parse_report(&report_text, report_path)?;

    let text = canonical_json(&report)?;
    let lines: Vec<_> = colorize(&text).collect();
    println!("compliance_report.json · {} lines", canonical_line_count(&text));
    println!("{}", render_terminal(&lines, !no_color));
    Ok(())
}

fn cmd_export(
    cfg: &EffectiveConfig,
    report_path: &Utf8PathBuf,
    out_dir: Option<Utf8PathBuf>,
    clipboard: bool,
) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report(&report_text, report_path)?;

    if clipboard {
        print!("{}", reglens_app::clipboard_text(&report)?);
        return Ok(());
    }

    let dir = out_dir.unwrap_or_else(|| cfg.output_dir.clone());
    let path = reglens_app::write_artifact(&report, &dir).context("write report artifact")?;
    eprintln!("reglens: report written to {path}");
    Ok(())
}

fn parse_report(text: &str, path: &Utf8PathBuf) -> anyhow::Result<ComplianceReport> {
    reglens_types::parse_report_json(text).with_context(|| format!("parse report: {path}"))
}
