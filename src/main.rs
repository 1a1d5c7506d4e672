mod converter;
mod driver;
mod error;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use converter::WriteMode;
use driver::RunConfig;

#[derive(Parser)]
#[command(
    name = "page_converter",
    about = "Convert legacy static HTML pages under pt/ and en/ into front-matter pages"
)]
struct Cli {
    /// Site root containing the pt/ and en/ page directories
    #[arg(long, env = "PAGE_CONVERTER_ROOT", default_value = ".")]
    root: PathBuf,

    /// Report how many pages would change without writing them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let config = RunConfig {
        root: cli.root,
        mode: if cli.dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        },
    };
    let summary = driver::run(&config)?;

    info!(
        scanned = summary.scanned,
        changed = summary.changed,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Finished"
    );

    println!("{}", summary_line(summary.changed, cli.dry_run));
    Ok(())
}

fn summary_line(changed: usize, dry_run: bool) -> String {
    if dry_run {
        format!("Would convert {} files.", changed)
    } else {
        format!("Converted {} files.", changed)
    }
}

// ── Tests ──
