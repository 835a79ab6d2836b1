//! # jamdelphia
//!
//! Renders the JamDelphia Group website to a static `index.html`.
//!
//! ## Usage
//!
//! ```bash
//! # Published copy, current year, CSS inlined
//! jamdelphia render --out dist/index.html
//!
//! # Custom copy (e.g. an extra venture)
//! jamdelphia dump-content > site.toml
//! jamdelphia render --content site.toml
//!
//! # Validate copy and in-page anchors
//! jamdelphia check --content site.toml
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use jamdelphia_site::types::SiteContent;
use jamdelphia_site::{audit_anchors, render_site, RenderOptions};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "jamdelphia")]
#[command(about = "Render the JamDelphia Group website to static HTML")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to an HTML file
    Render {
        /// Content override file (.toml or .json)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Output path, or `-` for stdout
        #[arg(short, long, default_value = "dist/index.html")]
        out: PathBuf,

        /// Copyright year (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Link this stylesheet href instead of inlining the CSS
        #[arg(long)]
        stylesheet: Option<String>,
    },

    /// Validate content and check that every in-page anchor resolves
    Check {
        /// Content override file (.toml or .json)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Print the built-in content as TOML
    DumpContent,
}

// ============================================================================
// Commands
// ============================================================================

fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    let content = match path {
        Some(path) => SiteContent::load_from_path(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => {
            debug!("no content file given, using built-in copy");
            SiteContent::default()
        }
    };
    content.validate().context("content failed validation")?;
    Ok(content)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn render(
    content: Option<&Path>,
    out: &Path,
    year: Option<i32>,
    stylesheet: Option<String>,
) -> Result<()> {
    let content = load_content(content)?;
    let options = RenderOptions {
        year: year.unwrap_or_else(current_year),
        stylesheet,
    };
    let html = render_site(&content, &options);

    if out == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .context("writing HTML to stdout")?;
        return Ok(());
    }

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, &html).with_context(|| format!("writing {}", out.display()))?;

    info!(
        path = %out.display(),
        bytes = html.len(),
        ventures = content.portfolio.ventures.len(),
        "site rendered"
    );
    Ok(())
}

fn check(content: Option<&Path>) -> Result<()> {
    let content = load_content(content)?;
    let html = render_site(&content, &RenderOptions::with_year(current_year()));
    let report = audit_anchors(&html);
    report
        .ensure_resolved()
        .context("rendered page has broken in-page anchors")?;

    println!("content ok");
    for (id, usage) in &report.anchors {
        println!("  #{id}: {} target, {} link(s)", usage.targets, usage.links);
    }
    println!(
        "  ventures: {}, placeholder: {}",
        content.portfolio.ventures.len(),
        if content.portfolio.show_placeholder { "yes" } else { "no" }
    );
    Ok(())
}

fn dump_content() -> Result<()> {
    let toml = SiteContent::default()
        .to_toml_string()
        .context("serializing default content")?;
    print!("{toml}");
    Ok(())
}

fn run(args: Args) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match args.command {
        Command::Render {
            content,
            out,
            year,
            stylesheet,
        } => render(content.as_deref(), &out, year, stylesheet),
        Command::Check { content } => check(content.as_deref()),
        Command::DumpContent => dump_content(),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[jamdelphia] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
