//! Net export: walking the arranged panels and emitting page-sized vector
//! output.
//!
//! The drawing backend sits behind the [`PageCanvas`] trait so the host
//! application can plug in its own document painter. The crate ships an
//! SVG canvas so the pipeline runs end to end without a host.

use std::path::Path;

use nalgebra::Point2;
use tracing::info;

use crate::error::{NetError, NetResult};
use crate::layout::NetLayout;
use crate::params::NetParams;

/// Millimeters to PostScript points (1 pt = 1/72 inch).
pub const MM_TO_PT: f64 = 72.0 / 25.4;

/// A 2D vector-drawing page abstraction.
///
/// Coordinates handed to the canvas are already in points, y-up, with the
/// origin at the page's lower-left corner.
pub trait PageCanvas {
    /// Start a fresh page of the given size in points. Clears any
    /// previously drawn content.
    fn begin_page(&mut self, width_pt: f64, height_pt: f64);

    /// Stroke a closed polygon outline. Not filled.
    fn stroke_polygon(&mut self, points: &[Point2<f64>]);

    /// Draw a circle outline (a hole punch mark).
    fn draw_circle(&mut self, center: Point2<f64>, radius_pt: f64);

    /// Write the finished document to disk.
    fn save(&mut self, path: &Path) -> NetResult<()>;
}

/// Emit the whole net onto one page: per panel, the face outline, the lip
/// outline, and one punch circle per hole, all through the panel's
/// placement. Panels are visited in face order.
///
/// Page size converts from configured millimeters to canvas points via
/// `mm / 25.4 × 72`.
pub fn export_net(
    layout: &NetLayout,
    params: &NetParams,
    canvas: &mut dyn PageCanvas,
    path: &Path,
) -> NetResult<()> {
    canvas.begin_page(params.page_width * MM_TO_PT, params.page_height * MM_TO_PT);

    for panel in &layout.panels {
        let outline: Vec<Point2<f64>> = panel.placed_outline().iter().map(to_pt).collect();
        canvas.stroke_polygon(&outline);

        let lip: Vec<Point2<f64>> = panel.placed_lip().iter().map(to_pt).collect();
        canvas.stroke_polygon(&lip);

        for hole in panel.placed_holes() {
            canvas.draw_circle(to_pt(&hole), params.hole_radius * MM_TO_PT);
        }
    }

    canvas.save(path)?;

    info!(
        target: "ball_net::export",
        panels = layout.panels.len(),
        skipped = layout.skipped.len(),
        path = %path.display(),
        "Exported net"
    );

    Ok(())
}

fn to_pt(p: &Point2<f64>) -> Point2<f64> {
    Point2::new(p.x * MM_TO_PT, p.y * MM_TO_PT)
}

/// An SVG implementation of [`PageCanvas`].
///
/// Builds the document as a string and writes it on `save`. The y axis is
/// flipped once at the document level so page coordinates stay y-up.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width_pt: f64,
    height_pt: f64,
    body: String,
    /// Stroke width for outlines, points.
    pub stroke_width: f64,
    /// Stroke color for outlines (CSS color string).
    pub stroke_color: String,
    /// Background color.
    pub background_color: String,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self {
            width_pt: 0.0,
            height_pt: 0.0,
            body: String::new(),
            stroke_width: 0.75,
            stroke_color: "#2d5986".to_string(),
            background_color: "#ffffff".to_string(),
        }
    }
}

impl SvgCanvas {
    /// Create a canvas with default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current page to an SVG string.
    pub fn to_svg(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.2}\" height=\"{h:.2}\" viewBox=\"0 0 {w:.2} {h:.2}\">\n\
  <rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n\
  <g transform=\"translate(0,{h:.2}) scale(1,-1)\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"{sw:.2}\">\n\
{body}  </g>\n\
</svg>\n",
            w = self.width_pt,
            h = self.height_pt,
            bg = self.background_color,
            stroke = self.stroke_color,
            sw = self.stroke_width,
            body = self.body,
        )
    }
}

impl PageCanvas for SvgCanvas {
    fn begin_page(&mut self, width_pt: f64, height_pt: f64) {
        self.width_pt = width_pt;
        self.height_pt = height_pt;
        self.body.clear();
    }

    fn stroke_polygon(&mut self, points: &[Point2<f64>]) {
        if points.is_empty() {
            return;
        }
        let mut path = String::new();
        for (i, p) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            path.push_str(&format!("{} {:.4} {:.4} ", cmd, p.x, p.y));
        }
        path.push('Z');
        self.body
            .push_str(&format!("    <path d=\"{}\"/>\n", path));
    }

    fn draw_circle(&mut self, center: Point2<f64>, radius_pt: f64) {
        self.body.push_str(&format!(
            "    <circle cx=\"{:.4}\" cy=\"{:.4}\" r=\"{:.4}\"/>\n",
            center.x, center.y, radius_pt
        ));
    }

    fn save(&mut self, path: &Path) -> NetResult<()> {
        std::fs::write(path, self.to_svg()).map_err(|e| NetError::io_write(path, e))
    }
}
