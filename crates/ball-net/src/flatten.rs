//! Face flattening: projecting each planar 3D face into a 2D printable frame.
//!
//! Each face is flattened independently. The loop is translated so its
//! first vertex sits at the local origin, rotated so the face normal maps
//! onto +Z (Rodrigues' formula, with a fallback for the anti-parallel
//! case), then re-centered on the loop centroid. The resulting points have
//! z ≈ 0 by construction; the centroid-centered frame is the reference for
//! all later placement and export transforms.

use nalgebra::{Matrix3, Point3, Vector3};
use tracing::trace;

use crate::error::{NetError, NetResult};
use crate::types::Mesh;

/// Cross products below this magnitude are treated as parallel vectors.
const PARALLEL_EPS: f64 = 1e-12;

/// Cosine threshold past which the normal counts as anti-parallel to +Z.
const ANTIPARALLEL_EPS: f64 = 1e-9;

/// One face of the solid flattened into its 2D printable frame.
///
/// Points keep the source loop's count and order, centered on the loop
/// centroid with z ≈ 0. `loop_indices` is the identity permutation
/// `[0..len)` used to redraw the polygon in the flattened frame.
#[derive(Debug, Clone)]
pub struct FlatPanel {
    /// Index of the source face in the solid.
    pub face_index: usize,

    /// Flattened loop points, centroid at the origin, z ≈ 0.
    pub points: Vec<Point3<f64>>,

    /// Identity permutation over the flattened points.
    pub loop_indices: Vec<u32>,
}

impl FlatPanel {
    /// Number of points in the flattened loop.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the panel has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Flatten one face of the solid into its own 2D frame.
///
/// Fails with `DegenerateGeometry` when the first two corner vectors of
/// the loop are parallel (no usable face normal) and with
/// `InvalidVertexIndex` when the loop references a missing vertex.
pub fn flatten_face(mesh: &Mesh, face_index: usize) -> NetResult<FlatPanel> {
    let loop_points = mesh.face_points(face_index)?;
    if loop_points.len() < 3 {
        return Err(NetError::degenerate_face(
            face_index,
            format!("loop has only {} vertices", loop_points.len()),
        ));
    }

    // Anchor the loop at its first vertex.
    let base = loop_points[0];
    let translated: Vec<Vector3<f64>> = loop_points.iter().map(|p| p - base).collect();

    let cross = translated[1].cross(&translated[2]);
    let cross_norm = cross.norm();
    if cross_norm < PARALLEL_EPS {
        return Err(NetError::degenerate_face(
            face_index,
            "first two corner vectors are parallel; face normal is undefined",
        ));
    }
    let normal = cross / cross_norm;

    let rotation = rotation_to_up(&normal);

    // The anchor vertex stays at the origin; its zero still counts toward
    // the centroid divisor.
    let mut rotated = Vec::with_capacity(translated.len());
    rotated.push(Vector3::zeros());
    let mut sum = Vector3::zeros();
    for v in &translated[1..] {
        let r = rotation * v;
        sum += r;
        rotated.push(r);
    }

    let centroid = sum / loop_points.len() as f64;
    let points: Vec<Point3<f64>> = rotated.iter().map(|v| Point3::from(v - centroid)).collect();

    trace!(
        target: "ball_net::flatten",
        face = face_index,
        vertices = points.len(),
        "Flattened face"
    );

    Ok(FlatPanel {
        face_index,
        loop_indices: (0..points.len() as u32).collect(),
        points,
    })
}

/// Build the rotation matrix mapping `normal` onto +Z.
///
/// Rodrigues' formula: with `v = normal × up` and `c = normal · up`,
/// `R = I + K + K² / (1 + c)` where `K` is the skew matrix of `v`. The
/// formula is singular for `c ≈ -1`, so the anti-parallel case instead
/// rotates 180° about an axis perpendicular to the normal.
fn rotation_to_up(normal: &Vector3<f64>) -> Matrix3<f64> {
    let up = Vector3::z();
    let c = normal.dot(&up);

    if c <= -1.0 + ANTIPARALLEL_EPS {
        let axis = perpendicular_axis(normal);
        // 180° about a unit axis a is 2aaᵀ - I.
        return 2.0 * axis * axis.transpose() - Matrix3::identity();
    }

    let v = normal.cross(&up);
    let k = skew(&v);
    Matrix3::identity() + k + (k * k) * (1.0 / (1.0 + c))
}

/// Any unit vector perpendicular to `v`.
fn perpendicular_axis(v: &Vector3<f64>) -> Vector3<f64> {
    let candidate = if v.x.abs() < 0.9 {
        v.cross(&Vector3::x())
    } else {
        v.cross(&Vector3::y())
    };
    candidate.normalize()
}

/// Skew-symmetric cross-product matrix of `v`.
fn skew(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}
