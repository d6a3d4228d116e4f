//! ballnet export command - generate the net and write an SVG document.

use std::path::Path;

use anyhow::{Context, Result};
use ball_net::{BallSession, SolidKind, SvgCanvas};
use colored::Colorize;
use serde::Serialize;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct ExportResult {
    solid: String,
    output: String,
    success: bool,
    radius: f64,
    panels: usize,
    skipped: usize,
    total_holes: usize,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    kind: SolidKind,
    output_path: &Path,
    radius: Option<f64>,
    lip: Option<f64>,
    holes_per_edge: Option<u32>,
    hole_radius: Option<f64>,
    page_width: Option<f64>,
    page_height: Option<f64>,
    cli: &Cli,
) -> Result<()> {
    let mut session = BallSession::new(kind)?;

    let mut params = session.params().clone();
    if let Some(r) = radius {
        params.radius = r;
    }
    if let Some(l) = lip {
        params.lip_size = l;
    }
    if let Some(h) = holes_per_edge {
        params.holes_per_edge = h;
    }
    if let Some(hr) = hole_radius {
        params.hole_radius = hr;
    }
    if let Some(w) = page_width {
        params.page_width = w;
    }
    if let Some(h) = page_height {
        params.page_height = h;
    }
    session.set_params(params)?;

    let mut canvas = SvgCanvas::new();
    session
        .export(&mut canvas, output_path)
        .with_context(|| format!("Failed to export net to {:?}", output_path))?;

    let layout = session.layout().ok_or_else(|| {
        ball_net::NetError::incomplete_state("layout was not derived after applying parameters")
    })?;

    let result = ExportResult {
        solid: kind.name().to_string(),
        output: output_path.display().to_string(),
        success: true,
        radius: session.params().radius,
        panels: layout.panels.len(),
        skipped: layout.skipped.len(),
        total_holes: layout.panels.iter().map(|p| p.holes.len()).sum(),
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&result, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!(
                    "{} {} panels ({} holes) to {}",
                    "Exported".green().bold(),
                    result.panels,
                    result.total_holes,
                    output_path.display()
                );
                if result.skipped > 0 {
                    println!(
                        "{}: {} faces were skipped as degenerate",
                        "Warning".yellow().bold(),
                        result.skipped
                    );
                }
            }
        }
    }

    Ok(())
}
