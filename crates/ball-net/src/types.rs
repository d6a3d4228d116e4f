//! Core polyhedron data types.
//!
//! Unlike a triangle mesh, a ball solid keeps its faces as ordered polygon
//! loops: a classic soccer ball is 12 pentagons and 20 hexagons, and each
//! loop flattens to one printable panel. Coordinates are millimeters.

use nalgebra::{Point3, Vector3};

use crate::error::{NetError, NetResult};

/// A closed polyhedral solid with polygonal faces.
///
/// Vertex order is the stable identity referenced by face loops. Face loops
/// are ordered vertex-index sequences with consistent winding and at least
/// three entries. The edge list is optional; it can always be derived from
/// the face loops.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions. Index = identity.
    pub vertices: Vec<Point3<f64>>,

    /// Polygon faces as ordered loops of vertex indices.
    pub faces: Vec<Vec<u32>>,

    /// Explicit edges as vertex-index pairs. May be empty.
    pub edges: Vec<[u32; 2]>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty (no vertices or faces).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Compute the axis-aligned bounding box.
    /// Returns (min_corner, max_corner) or None if the mesh has no vertices.
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for p in &self.vertices[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }

    /// Resolve a face loop to its vertex positions, in loop order.
    ///
    /// Fails with `InvalidVertexIndex` if the loop references a vertex
    /// beyond the vertex table.
    pub fn face_points(&self, face_index: usize) -> NetResult<Vec<Point3<f64>>> {
        let loop_indices = self.faces.get(face_index).ok_or_else(|| {
            NetError::incomplete_state(format!(
                "face {} does not exist (solid has {} faces)",
                face_index,
                self.faces.len()
            ))
        })?;

        loop_indices
            .iter()
            .map(|&i| {
                self.vertices.get(i as usize).copied().ok_or_else(|| {
                    NetError::invalid_vertex_index(face_index, i, self.vertices.len())
                })
            })
            .collect()
    }

    /// Scale all vertices uniformly around the origin.
    pub fn scale(&mut self, factor: f64) {
        for p in &mut self.vertices {
            p.coords *= factor;
        }
    }

    /// Translate all vertices by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for p in &mut self.vertices {
            *p += offset;
        }
    }

    /// Derive the explicit edge list from the face loops.
    ///
    /// Each boundary edge of every loop is emitted once, with the smaller
    /// vertex index first so shared edges between adjacent faces dedupe.
    pub fn derive_edges(&self) -> Vec<[u32; 2]> {
        let mut edges: Vec<[u32; 2]> = Vec::new();
        for face in &self.faces {
            let n = face.len();
            for j in 0..n {
                let a = face[j];
                let b = face[(j + 1) % n];
                let edge = if a < b { [a, b] } else { [b, a] };
                if !edges.contains(&edge) {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    /// Validate face index references and minimum loop sizes.
    ///
    /// Returns the first problem found. A well-formed solid also has each
    /// edge shared by at most two faces, but that is not hard-enforced;
    /// malformed solids degrade per-face during layout instead.
    pub fn validate(&self) -> NetResult<()> {
        for (face_index, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(NetError::degenerate_face(
                    face_index,
                    format!("loop has only {} vertices", face.len()),
                ));
            }
            for &i in face {
                if i as usize >= self.vertices.len() {
                    return Err(NetError::invalid_vertex_index(
                        face_index,
                        i,
                        self.vertices.len(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    fn square_mesh() -> Mesh {
        Mesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            faces: vec![vec![0, 1, 2, 3]],
            edges: Vec::new(),
        }
    }

    #[test]
    fn test_counts_and_empty() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());

        let mesh = square_mesh();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_bounds() {
        let mesh = square_mesh();
        let (min, max) = mesh.bounds().expect("non-empty mesh");
        assert!(approx_eq(min.x, 0.0) && approx_eq(min.y, 0.0));
        assert!(approx_eq(max.x, 1.0) && approx_eq(max.y, 1.0));

        assert!(Mesh::new().bounds().is_none());
    }

    #[test]
    fn test_face_points_resolves_loop_order() {
        let mesh = square_mesh();
        let points = mesh.face_points(0).expect("valid face");
        assert_eq!(points.len(), 4);
        assert!(approx_eq(points[2].x, 1.0) && approx_eq(points[2].y, 1.0));
    }

    #[test]
    fn test_face_points_invalid_index() {
        let mut mesh = square_mesh();
        mesh.faces[0][1] = 99;
        let err = mesh.face_points(0).unwrap_err();
        assert_eq!(err.code().as_str(), "NET-2002");
    }

    #[test]
    fn test_scale() {
        let mut mesh = square_mesh();
        mesh.scale(2.0);
        assert!(approx_eq(mesh.vertices[2].x, 2.0));
        assert!(approx_eq(mesh.vertices[2].y, 2.0));
    }

    #[test]
    fn test_derive_edges_dedupes_shared() {
        // Two triangles sharing edge (1, 2).
        let mesh = Mesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
            ],
            faces: vec![vec![0, 1, 2], vec![1, 3, 2]],
            edges: Vec::new(),
        };
        let edges = mesh.derive_edges();
        assert_eq!(edges.len(), 5, "expected 5 unique edges, got {:?}", edges);
    }

    #[test]
    fn test_validate_rejects_short_loop() {
        let mut mesh = square_mesh();
        mesh.faces.push(vec![0, 1]);
        let err = mesh.validate().unwrap_err();
        assert_eq!(err.code().as_str(), "NET-2001");
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(square_mesh().validate().is_ok());
    }
}
