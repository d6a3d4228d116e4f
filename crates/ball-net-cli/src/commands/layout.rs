//! ballnet layout command - compute and report the panel layout.

use anyhow::Result;
use ball_net::{BallSession, SolidKind};
use colored::Colorize;
use serde::Serialize;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct LayoutReport {
    solid: String,
    radius: f64,
    panels: usize,
    skipped: Vec<SkippedFace>,
    total_holes: usize,
    page_width: f64,
    page_height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    panel_details: Option<Vec<PanelDetail>>,
}

#[derive(Serialize)]
struct SkippedFace {
    face: usize,
    code: String,
    error: String,
}

#[derive(Serialize)]
struct PanelDetail {
    face: usize,
    corners: usize,
    holes: usize,
    perimeter: f64,
}

pub fn run(
    kind: SolidKind,
    radius: Option<f64>,
    lip: Option<f64>,
    holes_per_edge: Option<u32>,
    detailed: bool,
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
    session.set_params(params)?;

    let layout = session.layout().ok_or_else(|| {
        ball_net::NetError::incomplete_state("layout was not derived after applying parameters")
    })?;

    let panel_details = detailed.then(|| {
        layout
            .panels
            .iter()
            .map(|p| {
                let n = p.outline.len();
                let perimeter: f64 = (0..n)
                    .map(|j| (p.outline.points[(j + 1) % n] - p.outline.points[j]).norm())
                    .sum();
                PanelDetail {
                    face: p.face_index,
                    corners: n,
                    holes: p.holes.len(),
                    perimeter,
                }
            })
            .collect()
    });

    let report = LayoutReport {
        solid: kind.name().to_string(),
        radius: session.params().radius,
        panels: layout.panels.len(),
        skipped: layout
            .skipped
            .iter()
            .map(|(face, err)| SkippedFace {
                face: *face,
                code: err.code().as_str().to_string(),
                error: err.to_string(),
            })
            .collect(),
        total_holes: layout.panels.iter().map(|p| p.holes.len()).sum(),
        page_width: layout.page.width,
        page_height: layout.page.height,
        panel_details,
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&report, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Net Layout".bold().underline());
                println!("  {}: {}", "Solid".cyan(), report.solid);
                println!("  {}: {} mm", "Radius".cyan(), report.radius);
                println!("  {}: {}", "Panels".cyan(), report.panels);
                println!("  {}: {}", "Total holes".cyan(), report.total_holes);
                println!(
                    "  {}: {} x {} mm",
                    "Page".cyan(),
                    report.page_width,
                    report.page_height
                );

                if report.skipped.is_empty() {
                    println!("  {}: none", "Skipped faces".cyan());
                } else {
                    println!(
                        "  {}: {}",
                        "Skipped faces".yellow().bold(),
                        report.skipped.len()
                    );
                    for skip in &report.skipped {
                        println!(
                            "    face {} [{}]: {}",
                            skip.face,
                            skip.code.yellow(),
                            skip.error
                        );
                    }
                }

                if let Some(ref details) = report.panel_details {
                    println!("\n{}", "Panels".bold());
                    for d in details {
                        println!(
                            "  face {:>2}: {} corners, {} holes, perimeter {:.2} mm",
                            d.face, d.corners, d.holes, d.perimeter
                        );
                    }
                }
            }
        }
    }

    Ok(())
}
