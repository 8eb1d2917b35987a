//! ReelScope — exploratory analysis of a streaming media catalog.
//!
//! Thin binary entry point. All logic lives in the `reelscope-core`
//! and `reelscope-cli` crates.

use clap::Parser;
use reelscope_cli::OutputFormat;
use reelscope_core::loader::load_catalog;
use reelscope_core::views::{run_view, View, ViewParams};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "reelscope", version, about = "Catalog EDA in your terminal")]
struct Args {
    /// Path to the catalog CSV export.
    #[arg(required_unless_present = "list")]
    dataset: Option<PathBuf>,

    /// View to render (see --list for the menu).
    #[arg(short, long, default_value = "dataset-preview")]
    view: String,

    /// How many entries the ranked views keep.
    #[arg(short = 'n', long, default_value_t = 10)]
    top: usize,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List the available views and exit.
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list {
        for view in View::ALL {
            println!("{}", view.slug());
        }
        return Ok(());
    }

    let view: View = args.view.parse()?;
    let params = ViewParams { top_n: args.top };

    // `required_unless_present` guarantees the dataset path is set here.
    let dataset = args
        .dataset
        .ok_or_else(|| anyhow::anyhow!("a dataset path is required"))?;

    // Load once, clean once; every view reads the same immutable snapshot.
    let catalog = load_catalog(&dataset)?;
    tracing::info!(rows = catalog.len(), view = %view, "catalog ready");

    let output = run_view(&catalog, view, params)?;

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    reelscope_cli::render(&output, args.format, &mut lock)?;

    Ok(())
}
