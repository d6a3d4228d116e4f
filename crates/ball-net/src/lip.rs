//! Glue-tab lip outlines.

use nalgebra::Point3;

use crate::error::{NetError, NetResult};
use crate::flatten::FlatPanel;

/// Compute the lip outline for a flattened panel.
///
/// Every loop point is pushed directly away from the flattened-frame
/// origin by exactly `lip` mm: `p' = p · (|p| + lip) / |p|`. This is an
/// approximation of a constant-width margin (a true offset would need
/// edge normals and miter joins), acceptable because the lip is small
/// relative to the panel.
///
/// Fails with `DegenerateGeometry` if any point coincides with the frame
/// origin, where the radial direction is undefined.
pub fn lip_outline(panel: &FlatPanel, lip: f64) -> NetResult<Vec<Point3<f64>>> {
    panel
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let length = p.coords.norm();
            if length < f64::EPSILON {
                return Err(NetError::degenerate_face(
                    panel.face_index,
                    format!("loop point {} sits on the frame origin; lip direction undefined", i),
                ));
            }
            let scale = (length + lip) / length;
            Ok(Point3::from(p.coords * scale))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn square_panel() -> FlatPanel {
        FlatPanel {
            face_index: 0,
            points: vec![
                Point3::new(-0.5, -0.5, 0.0),
                Point3::new(0.5, -0.5, 0.0),
                Point3::new(0.5, 0.5, 0.0),
                Point3::new(-0.5, 0.5, 0.0),
            ],
            loop_indices: vec![0, 1, 2, 3],
        }
    }

    #[test]
    fn test_offset_distance_is_exact() {
        let panel = square_panel();
        let lip = lip_outline(&panel, 3.0).expect("lip computes");
        for (p, q) in panel.points.iter().zip(&lip) {
            let pushed = (q - p).norm();
            assert!(
                (pushed - 3.0).abs() < TOL,
                "point moved {} mm, expected 3",
                pushed
            );
        }
    }

    #[test]
    fn test_offset_stays_on_radial_ray() {
        let panel = square_panel();
        let lip = lip_outline(&panel, 2.0).expect("lip computes");
        for (p, q) in panel.points.iter().zip(&lip) {
            // q must be a positive multiple of p.
            let cross = p.coords.cross(&q.coords).norm();
            assert!(cross < TOL, "lip point left the radial ray");
            assert!(q.coords.dot(&p.coords) > 0.0, "lip point flipped direction");
        }
    }

    #[test]
    fn test_zero_lip_is_identity() {
        let panel = square_panel();
        let lip = lip_outline(&panel, 0.0).expect("lip computes");
        for (p, q) in panel.points.iter().zip(&lip) {
            assert!((q - p).norm() < TOL);
        }
    }

    #[test]
    fn test_point_on_origin_rejected() {
        let mut panel = square_panel();
        panel.points[1] = Point3::origin();
        let err = lip_outline(&panel, 3.0).unwrap_err();
        assert_eq!(err.code().as_str(), "NET-2001");
    }

    #[test]
    fn test_same_count_and_order() {
        let panel = square_panel();
        let lip = lip_outline(&panel, 1.0).expect("lip computes");
        assert_eq!(lip.len(), panel.points.len());
        // First panel point is in the -x/-y quadrant; so is its lip point.
        assert!(lip[0].x < 0.0 && lip[0].y < 0.0);
    }
}
