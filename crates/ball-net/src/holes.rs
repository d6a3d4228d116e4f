//! Lacing-hole sampling along panel boundary edges.

use nalgebra::Point3;

use crate::error::{NetError, NetResult};
use crate::flatten::FlatPanel;

/// Sample `holes_per_edge` evenly spaced perforation points along every
/// boundary edge of a flattened panel.
///
/// Edge order is fixed so hole numbering is stable: the closing edge is
/// sampled first, from the loop's last vertex toward its first, with step
/// `|edge| / (n - 1)`; then each consecutive pair `(loop[j], loop[j+1])`
/// is sampled from `loop[j+1]` toward `loop[j]`. Every edge contributes
/// exactly `n` points including both endpoints, so endpoints shared by
/// adjacent edges appear twice. That redundancy is kept: matching panels
/// are laced hole-for-hole and the duplicate punches land on the same spot.
///
/// Fails with `InvalidConfiguration` when `holes_per_edge < 2`, which
/// would divide by zero in the step size.
pub fn sample_holes(panel: &FlatPanel, holes_per_edge: u32) -> NetResult<Vec<Point3<f64>>> {
    if holes_per_edge < 2 {
        return Err(NetError::invalid_configuration(
            "holes_per_edge",
            format!("{} holes per edge cannot include both endpoints", holes_per_edge),
        ));
    }

    let points = &panel.points;
    let count = points.len();
    if count < 3 {
        return Err(NetError::degenerate_face(
            panel.face_index,
            "panel loop too short to sample holes",
        ));
    }

    let n = holes_per_edge as usize;
    let mut holes = Vec::with_capacity(count * n);

    // Closing edge first: last vertex toward first.
    sample_edge(&points[count - 1], &points[0], n, &mut holes);

    // Then each consecutive pair, sampled in reverse.
    for j in 0..count - 1 {
        sample_edge(&points[j + 1], &points[j], n, &mut holes);
    }

    Ok(holes)
}

/// Append `n` evenly spaced points from `start` to `end`, inclusive.
fn sample_edge(start: &Point3<f64>, end: &Point3<f64>, n: usize, out: &mut Vec<Point3<f64>>) {
    let edge = end - start;
    let denom = (n - 1) as f64;
    for i in 0..n {
        let t = i as f64 / denom;
        out.push(start + edge * t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn triangle_panel() -> FlatPanel {
        FlatPanel {
            face_index: 0,
            points: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(6.0, 0.0, 0.0),
                Point3::new(0.0, 6.0, 0.0),
            ],
            loop_indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_point_count_is_edges_times_n() {
        let panel = triangle_panel();
        let holes = sample_holes(&panel, 4).expect("samples");
        assert_eq!(holes.len(), 3 * 4);
    }

    #[test]
    fn test_two_holes_are_exactly_the_endpoints() {
        let panel = triangle_panel();
        let holes = sample_holes(&panel, 2).expect("samples");
        // Closing edge: last -> first.
        assert!((holes[0] - panel.points[2]).norm() < TOL);
        assert!((holes[1] - panel.points[0]).norm() < TOL);
        // First consecutive edge: loop[1] -> loop[0].
        assert!((holes[2] - panel.points[1]).norm() < TOL);
        assert!((holes[3] - panel.points[0]).norm() < TOL);
        assert_eq!(holes.len(), 6);
    }

    #[test]
    fn test_even_spacing() {
        let panel = triangle_panel();
        let n = 5;
        let holes = sample_holes(&panel, n).expect("samples");
        for edge in holes.chunks(n as usize) {
            let first_gap = (edge[1] - edge[0]).norm();
            for pair in edge.windows(2) {
                let gap = (pair[1] - pair[0]).norm();
                assert!(
                    (gap - first_gap).abs() < TOL,
                    "uneven spacing: {} vs {}",
                    gap,
                    first_gap
                );
            }
        }
    }

    #[test]
    fn test_samples_lie_on_the_edge() {
        let panel = triangle_panel();
        let holes = sample_holes(&panel, 9).expect("samples");
        // Second sampled edge runs from (6,0) to (0,0): all on y = 0.
        for p in &holes[9..18] {
            assert!(p.y.abs() < TOL && p.x >= -TOL && p.x <= 6.0 + TOL);
        }
    }

    #[test]
    fn test_single_hole_rejected() {
        let panel = triangle_panel();
        let err = sample_holes(&panel, 1).unwrap_err();
        assert_eq!(err.code().as_str(), "NET-1001");
    }

    #[test]
    fn test_zero_holes_rejected() {
        let panel = triangle_panel();
        assert!(sample_holes(&panel, 0).is_err());
    }

    #[test]
    fn test_shared_endpoints_sampled_twice() {
        let panel = triangle_panel();
        let holes = sample_holes(&panel, 3).expect("samples");
        // loop[0] closes the first sampled edge and the second one.
        let duplicates = holes
            .iter()
            .filter(|p| (**p - panel.points[0]).norm() < TOL)
            .count();
        assert_eq!(duplicates, 2);
    }
}
