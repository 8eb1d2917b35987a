/// ReelScope CLI — terminal rendering for view outputs.
///
/// Consumes only the generic shapes from `reelscope-core` (label counts,
/// numeric series, matrices) plus the attached [`ChartSpec`] descriptor;
/// nothing in the core knows this frontend exists.
///
/// # Modules
///
/// - [`chart`] — bar scaling and histogram binning primitives.
/// - [`render`] — per-shape text rendering.
pub mod chart;
pub mod render;

use clap::ValueEnum;
use reelscope_core::views::ViewOutput;
use std::io::Write;

/// Output encodings supported by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned tables and bar glyphs for a terminal.
    Text,
    /// The view output serialized verbatim, for piping into other tools.
    Json,
}

/// Render one view output to a writer in the requested format.
pub fn render(out: &ViewOutput, format: OutputFormat, w: &mut impl Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => render::render_text(out, w)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, out)?;
            writeln!(w)?;
        }
    }
    Ok(())
}
