//! CLI entry point for lorelint.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `lorelint-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use lorelint_app::{
    parse_report_json, run_check, runtime_error_report, serialize_report, to_renderable,
    verdict_exit_code, write_report, write_text, CheckInput,
};
use lorelint_render::{render_markdown, render_summary};
use lorelint_settings::Overrides;
use lorelint_types::RepoPath;

#[derive(Parser, Debug)]
#[command(
    name = "lorelint",
    version,
    about = "Repository hygiene linter for content-driven game data repositories"
)]
struct Cli {
    /// Repository root to scan.
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to lorelint config TOML, relative to the repo root.
    #[arg(long, default_value = "lorelint.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|data or custom).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum violations to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the repository and write report artifacts.
    Check {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/lorelint/report.json")]
        report_out: Utf8PathBuf,

        /// Where to write the condensed JSON summary.
        #[arg(long, default_value = "artifacts/lorelint/summary.json")]
        summary_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/lorelint/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/lorelint/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            ref report_out,
            ref summary_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            report_out.clone(),
            summary_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
    }
}

fn cmd_check(
    cli: &Cli,
    report_out: Utf8PathBuf,
    summary_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    let result = (|| -> anyhow::Result<i32> {
        if !repo_root.exists() {
            anyhow::bail!("repo root does not exist: {}", repo_root);
        }
        // Load config if present; missing file is allowed (defaults apply).
        let cfg_path = repo_root.join(&cli.config);
        let cfg_text = std::fs::read_to_string(&cfg_path).unwrap_or_default();

        let overrides = Overrides {
            profile: cli.profile.clone(),
            max_findings: cli.max_findings,
        };

        let mut report_paths = vec![
            artifact_repo_path(&report_out),
            artifact_repo_path(&summary_out),
        ];
        if write_markdown {
            report_paths.push(artifact_repo_path(&markdown_out));
        }
        let report_paths: Vec<RepoPath> = report_paths.into_iter().flatten().collect();

        let output = run_check(CheckInput {
            repo_root: &repo_root,
            config_text: &cfg_text,
            overrides,
            report_paths,
        })?;

        let bytes = serialize_report(&output.report)?;
        write_report(&report_out, &bytes).context("write report json")?;

        let summary = render_summary(&output.report);
        let summary_bytes =
            serde_json::to_vec_pretty(&summary).context("serialize summary")?;
        write_report(&summary_out, &summary_bytes).context("write summary json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text(&markdown_out, &md).context("write markdown")?;
        }

        eprintln!(
            "lorelint: {} files checked, {} violation(s), verdict {:?}",
            output.report.scan_info.total_files_checked,
            output.report.scan_info.total_violations,
            output.report.compliance_status.overall
        );

        Ok(verdict_exit_code(output.report.compliance_status.overall))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            if let Ok(bytes) = serialize_report(&report) {
                let _ = write_report(&report_out, &bytes);
            }
            eprintln!("lorelint error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Relative artifact paths are assumed to land inside the scanned repo and
/// are excluded from content checks; absolute paths cannot collide.
fn artifact_repo_path(path: &Utf8Path) -> Option<RepoPath> {
    if path.is_absolute() {
        return None;
    }
    Some(RepoPath::new(path.as_str()))
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}
