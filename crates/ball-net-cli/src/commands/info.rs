//! ballnet info command - display solid statistics.

use anyhow::Result;
use ball_net::{Mesh, SolidKind};
use colored::Colorize;
use serde::Serialize;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct SolidInfo {
    solid: String,
    vertices: usize,
    faces: usize,
    edges: usize,
    pentagons: usize,
    hexagons: usize,
    default_radius: f64,
    default_lip: f64,
    default_holes_per_edge: u32,
}

pub fn run(kind: SolidKind, cli: &Cli) -> Result<()> {
    let mesh: Mesh = kind.mesh();
    let params = kind.default_params();
    let edges = mesh.derive_edges();

    let info = SolidInfo {
        solid: kind.name().to_string(),
        vertices: mesh.vertex_count(),
        faces: mesh.face_count(),
        edges: edges.len(),
        pentagons: mesh.faces.iter().filter(|f| f.len() == 5).count(),
        hexagons: mesh.faces.iter().filter(|f| f.len() == 6).count(),
        default_radius: params.radius,
        default_lip: params.lip_size,
        default_holes_per_edge: params.holes_per_edge,
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&info, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Solid Information".bold().underline());
                println!("  {}: {}", "Solid".cyan(), info.solid);
                println!("  {}: {}", "Vertices".cyan(), info.vertices);
                println!("  {}: {}", "Faces".cyan(), info.faces);
                println!("  {}: {}", "Edges".cyan(), info.edges);
                println!(
                    "  {}: {} pentagons, {} hexagons",
                    "Panels".cyan(),
                    info.pentagons,
                    info.hexagons
                );
                println!("  {}: {} mm", "Default radius".cyan(), info.default_radius);
                println!("  {}: {} mm", "Default lip".cyan(), info.default_lip);
                println!(
                    "  {}: {}",
                    "Default holes per edge".cyan(),
                    info.default_holes_per_edge
                );
            }
        }
    }

    Ok(())
}
