//! Radius normalization.

use tracing::debug;

use crate::error::{NetError, NetResult};
use crate::types::Mesh;

/// Scale the solid so vertex 0 sits exactly `radius` from the origin.
///
/// Every vertex is multiplied by the same ratio `radius / |vertices[0]|`,
/// so the solid stays similar to itself; only its size changes. Repeated
/// calls are safe since the ratio is always taken from the current scale.
pub fn normalize_radius(mesh: &mut Mesh, radius: f64) -> NetResult<()> {
    let first = mesh
        .vertices
        .first()
        .ok_or_else(|| NetError::degenerate_geometry("solid has no vertices to normalize"))?;

    let length = first.coords.norm();
    if length < f64::EPSILON {
        return Err(NetError::degenerate_geometry(
            "vertex 0 is at the origin; scaling ratio is undefined",
        ));
    }

    let ratio = radius / length;
    mesh.scale(ratio);

    debug!(
        target: "ball_net::normalize",
        radius = radius,
        ratio = ratio,
        vertices = mesh.vertex_count(),
        "Normalized solid radius"
    );

    Ok(())
}
