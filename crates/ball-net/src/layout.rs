//! Panel layout: arranging flattened panels on the output page.
//!
//! The layout is a derived snapshot, rebuilt wholesale whenever the radius
//! or panel parameters change. Only `PanelPlacement` values carry user
//! intent across rebuilds. Panels default to the page baseline at
//! `(2·radius, 0, 0)` — beside the ball's bounding circle, not on top of
//! it — and separate from each other only through explicit overrides; the
//! engine never auto-packs.

use nalgebra::{Point2, Point3, Vector3};
use tracing::{debug, warn};

use crate::error::{NetError, NetResult};
use crate::flatten::{flatten_face, FlatPanel};
use crate::holes::sample_holes;
use crate::lip::lip_outline;
use crate::params::NetParams;
use crate::types::Mesh;

/// User-controlled placement of one panel on the page.
///
/// The translation's z component and the rotation's x/y components are
/// stored for symmetry but have no effect in the flat page plane: panels
/// translate in x/y and rotate about z only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    /// Offset from the page baseline, millimeters.
    pub translation: Vector3<f64>,

    /// Euler angles, radians. Only the z component is applied.
    pub rotation: Vector3<f64>,
}

impl Default for PanelPlacement {
    fn default() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: Vector3::zeros(),
        }
    }
}

/// One fully derived panel: flattened outline, lip, holes, placement.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Index of the source face.
    pub face_index: usize,

    /// Flattened outline in the centroid-centered frame.
    pub outline: FlatPanel,

    /// Glue-tab outline, same point count and order as the outline.
    pub lip: Vec<Point3<f64>>,

    /// Perforation points, `holes_per_edge` per boundary edge.
    pub holes: Vec<Point3<f64>>,

    /// Placement applied at export time.
    pub placement: PanelPlacement,
}

impl Panel {
    /// Apply this panel's placement to a point in the flattened frame,
    /// producing page-plane coordinates relative to the page origin.
    pub fn place(&self, p: &Point3<f64>) -> Point2<f64> {
        let (sin, cos) = self.placement.rotation.z.sin_cos();
        let x = p.x * cos - p.y * sin;
        let y = p.x * sin + p.y * cos;
        Point2::new(
            x + self.placement.translation.x,
            y + self.placement.translation.y,
        )
    }

    /// Placed outline points.
    pub fn placed_outline(&self) -> Vec<Point2<f64>> {
        self.outline.points.iter().map(|p| self.place(p)).collect()
    }

    /// Placed lip points.
    pub fn placed_lip(&self) -> Vec<Point2<f64>> {
        self.lip.iter().map(|p| self.place(p)).collect()
    }

    /// Placed hole points.
    pub fn placed_holes(&self) -> Vec<Point2<f64>> {
        self.holes.iter().map(|p| self.place(p)).collect()
    }
}

/// The static page-boundary rectangle, a visual print guide.
///
/// Anchored at `(2·radius, 0)` next to the ball's bounding circle; it does
/// not move when panels move.
#[derive(Debug, Clone, Copy)]
pub struct PageRect {
    /// Lower-left corner in world coordinates, millimeters.
    pub origin: Point2<f64>,

    /// Page width, millimeters.
    pub width: f64,

    /// Page height, millimeters.
    pub height: f64,
}

impl PageRect {
    /// The four corners, counter-clockwise from the origin.
    pub fn corners(&self) -> [Point2<f64>; 4] {
        [
            self.origin,
            Point2::new(self.origin.x + self.width, self.origin.y),
            Point2::new(self.origin.x + self.width, self.origin.y + self.height),
            Point2::new(self.origin.x, self.origin.y + self.height),
        ]
    }
}

/// A complete derived layout snapshot.
///
/// Built whole and published atomically; readers never observe a
/// half-updated set of panels.
#[derive(Debug)]
pub struct NetLayout {
    /// Successfully derived panels, in face order.
    pub panels: Vec<Panel>,

    /// The page guide rectangle.
    pub page: PageRect,

    /// Faces whose geometry failed, with the error that stopped each.
    /// Degenerate faces are skipped; the rest of the net still builds.
    pub skipped: Vec<(usize, NetError)>,
}

impl NetLayout {
    /// Look up the derived panel for a face, if it was built.
    pub fn panel(&self, face_index: usize) -> Option<&Panel> {
        self.panels.iter().find(|p| p.face_index == face_index)
    }
}

/// Derive the full layout: flatten every face, offset its lip, sample its
/// holes, and attach the caller's placements.
///
/// `placements` must hold exactly one entry per face
/// (`IncompleteState` otherwise); `params` must already be valid
/// (`InvalidConfiguration` otherwise — configuration errors are global
/// and block the whole computation). Per-face geometry errors are
/// recorded in the returned snapshot instead of failing the pipeline.
pub fn compute_layout(
    mesh: &Mesh,
    params: &NetParams,
    placements: &[PanelPlacement],
) -> NetResult<NetLayout> {
    params.validate()?;

    if placements.len() != mesh.face_count() {
        return Err(NetError::incomplete_state(format!(
            "{} placements supplied for {} faces; a complete set is required",
            placements.len(),
            mesh.face_count()
        )));
    }

    let mut panels = Vec::with_capacity(mesh.face_count());
    let mut skipped = Vec::new();

    for face_index in 0..mesh.face_count() {
        let result = flatten_face(mesh, face_index).and_then(|outline| {
            let lip = lip_outline(&outline, params.lip_size)?;
            let holes = sample_holes(&outline, params.holes_per_edge)?;
            Ok(Panel {
                face_index,
                outline,
                lip,
                holes,
                placement: placements[face_index],
            })
        });

        match result {
            Ok(panel) => panels.push(panel),
            Err(err) => {
                warn!(
                    target: "ball_net::layout",
                    face = face_index,
                    error = %err,
                    "Skipping degenerate face"
                );
                skipped.push((face_index, err));
            }
        }
    }

    let page = PageRect {
        origin: Point2::new(2.0 * params.radius, 0.0),
        width: params.page_width,
        height: params.page_height,
    };

    debug!(
        target: "ball_net::layout",
        panels = panels.len(),
        skipped = skipped.len(),
        page_width = params.page_width,
        page_height = params.page_height,
        "Computed net layout"
    );

    Ok(NetLayout {
        panels,
        page,
        skipped,
    })
}
