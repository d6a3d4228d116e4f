//! Built-in ball solids.
//!
//! Ball variants form a small closed set, so they are a tagged enum with
//! one mesh-producing factory per kind rather than a type hierarchy.
//! Adding a variant means adding an enum case and its factory arm.

use nalgebra::Point3;

use crate::params::NetParams;
use crate::types::Mesh;

/// The kind of ball solid to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidKind {
    /// The classic 32-panel truncated-icosahedron ball:
    /// 12 pentagons and 20 hexagons over 60 vertices.
    Classic,
}

impl SolidKind {
    /// Build the unit-scale mesh for this solid.
    ///
    /// Vertices are on a sphere of roughly unit radius; callers normalize
    /// to a physical radius afterwards.
    pub fn mesh(&self) -> Mesh {
        match self {
            SolidKind::Classic => classic_mesh(),
        }
    }

    /// Default net parameters for this solid.
    pub fn default_params(&self) -> NetParams {
        match self {
            SolidKind::Classic => NetParams::default(),
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SolidKind::Classic => "classic",
        }
    }
}

impl std::fmt::Display for SolidKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Vertex and face tables for the classic ball.
fn classic_mesh() -> Mesh {
    let vertices = vec![
        Point3::new(-0.29814159870147705, 0.0, -0.815738320350647),
        Point3::new(-0.09212832152843475, 0.2835466265678406, -0.815738320350647),
        Point3::new(0.24119998514652252, 0.17523999512195587, -0.815738320350647),
        Point3::new(0.24119998514652252, -0.17523999512195587, -0.815738320350647),
        Point3::new(-0.09212832152843475, -0.2835466265678406, -0.815738320350647),
        Point3::new(0.7235999703407288, -0.17524001002311707, -0.4472149908542633),
        Point3::new(0.7805416584014893, -0.35048002004623413, -0.14907169342041016),
        Point3::new(0.5745283365249634, -0.6340266466140747, -0.14907169342041016),
        Point3::new(0.3902716636657715, -0.6340266466140747, -0.4472149908542633),
        Point3::new(0.48240000009536743, -0.35048002004623413, -0.631476640701294),
        Point3::new(-0.1842566877603531, -0.5670933723449707, -0.631476640701294),
        Point3::new(0.056943297386169434, -0.7423333525657654, -0.4472149908542633),
        Point3::new(-0.09212836623191833, -0.8506399989128113, -0.14907169342041016),
        Point3::new(-0.4254566431045532, -0.7423333525657654, -0.14907169342041016),
        Point3::new(-0.4823983311653137, -0.5670933723449707, -0.4472149908542633),
        Point3::new(-0.5962833762168884, 0.0, -0.631476640701294),
        Point3::new(-0.6884116530418396, -0.28354665637016296, -0.4472149908542633),
        Point3::new(-0.837483286857605, -0.17523999512195587, -0.14907169342041016),
        Point3::new(-0.837483286857605, 0.17523999512195587, -0.14907169342041016),
        Point3::new(-0.6884116530418396, 0.28354665637016296, -0.4472149908542633),
        Point3::new(-0.1842566877603531, 0.5670933723449707, -0.631476640701294),
        Point3::new(-0.4823983311653137, 0.5670933723449707, -0.4472149908542633),
        Point3::new(-0.4254566431045532, 0.7423333525657654, -0.14907169342041016),
        Point3::new(-0.09212836623191833, 0.8506399989128113, -0.14907169342041016),
        Point3::new(0.056943297386169434, 0.7423333525657654, -0.4472149908542633),
        Point3::new(0.7235999703407288, 0.17524001002311707, -0.4472149908542633),
        Point3::new(0.48240000009536743, 0.35048002004623413, -0.631476640701294),
        Point3::new(0.3902716636657715, 0.6340266466140747, -0.4472149908542633),
        Point3::new(0.5745283365249634, 0.6340266466140747, -0.14907169342041016),
        Point3::new(0.7805416584014893, 0.35048002004623413, -0.14907169342041016),
        Point3::new(0.09212836623191833, -0.8506399989128113, 0.14907169342041016),
        Point3::new(0.4254566431045532, -0.7423333525657654, 0.14907169342041016),
        Point3::new(0.4823983311653137, -0.5670933723449707, 0.4472149908542633),
        Point3::new(0.1842566877603531, -0.5670933723449707, 0.631476640701294),
        Point3::new(-0.056943297386169434, -0.7423333525657654, 0.4472149908542633),
        Point3::new(-0.7805416584014893, -0.35048002004623413, 0.14907169342041016),
        Point3::new(-0.5745283365249634, -0.6340266466140747, 0.14907169342041016),
        Point3::new(-0.3902716636657715, -0.6340266466140747, 0.4472149908542633),
        Point3::new(-0.48240000009536743, -0.35048002004623413, 0.631476640701294),
        Point3::new(-0.7235999703407288, -0.17524001002311707, 0.4472149908542633),
        Point3::new(-0.5745283365249634, 0.6340266466140747, 0.14907169342041016),
        Point3::new(-0.7805416584014893, 0.35048002004623413, 0.14907169342041016),
        Point3::new(-0.7235999703407288, 0.17524001002311707, 0.4472149908542633),
        Point3::new(-0.48240000009536743, 0.35048002004623413, 0.631476640701294),
        Point3::new(-0.3902716636657715, 0.6340266466140747, 0.4472149908542633),
        Point3::new(0.4254566431045532, 0.7423333525657654, 0.14907169342041016),
        Point3::new(0.09212836623191833, 0.8506399989128113, 0.14907169342041016),
        Point3::new(-0.056943297386169434, 0.7423333525657654, 0.4472149908542633),
        Point3::new(0.1842566877603531, 0.5670933723449707, 0.631476640701294),
        Point3::new(0.4823983311653137, 0.5670933723449707, 0.4472149908542633),
        Point3::new(0.837483286857605, -0.17523999512195587, 0.14907169342041016),
        Point3::new(0.837483286857605, 0.17523999512195587, 0.14907169342041016),
        Point3::new(0.6884116530418396, 0.28354665637016296, 0.4472149908542633),
        Point3::new(0.5962833762168884, 0.0, 0.631476640701294),
        Point3::new(0.6884116530418396, -0.28354665637016296, 0.4472149908542633),
        Point3::new(0.09212832152843475, -0.2835466265678406, 0.815738320350647),
        Point3::new(0.29814159870147705, 0.0, 0.815738320350647),
        Point3::new(0.09212832152843475, 0.2835466265678406, 0.815738320350647),
        Point3::new(-0.24119998514652252, 0.17523999512195587, 0.815738320350647),
        Point3::new(-0.24119998514652252, -0.17523999512195587, 0.815738320350647),
    ];

    let faces = vec![
        vec![5, 9, 3, 2, 26, 25],
        vec![1, 0, 15, 19, 21, 20],
        vec![4, 3, 9, 8, 11, 10],
        vec![2, 1, 20, 24, 27, 26],
        vec![12, 11, 8, 7, 31, 30],
        vec![7, 6, 50, 54, 32, 31],
        vec![6, 5, 25, 29, 51, 50],
        vec![13, 12, 30, 34, 37, 36],
        vec![18, 17, 35, 39, 42, 41],
        vec![23, 22, 40, 44, 47, 46],
        vec![17, 16, 14, 13, 36, 35],
        vec![22, 21, 19, 18, 41, 40],
        vec![28, 27, 24, 23, 46, 45],
        vec![29, 28, 45, 49, 52, 51],
        vec![33, 32, 54, 53, 56, 55],
        vec![38, 37, 34, 33, 55, 59],
        vec![43, 42, 39, 38, 59, 58],
        vec![48, 47, 44, 43, 58, 57],
        vec![53, 52, 49, 48, 57, 56],
        vec![0, 1, 2, 3, 4],
        vec![5, 6, 7, 8, 9],
        vec![10, 11, 12, 13, 14],
        vec![15, 16, 17, 18, 19],
        vec![20, 21, 22, 23, 24],
        vec![25, 26, 27, 28, 29],
        vec![30, 31, 32, 33, 34],
        vec![35, 36, 37, 38, 39],
        vec![40, 41, 42, 43, 44],
        vec![45, 46, 47, 48, 49],
        vec![50, 51, 52, 53, 54],
        vec![55, 56, 57, 58, 59],
        vec![0, 4, 10, 14, 16, 15],
    ];

    Mesh {
        vertices,
        faces,
        edges: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table_shape() {
        let mesh = SolidKind::Classic.mesh();
        assert_eq!(mesh.vertex_count(), 60);
        assert_eq!(mesh.face_count(), 32);
        mesh.validate().expect("built-in table must be well-formed");
    }

    #[test]
    fn test_classic_panel_mix() {
        // 12 pentagons + 20 hexagons.
        let mesh = SolidKind::Classic.mesh();
        let pentagons = mesh.faces.iter().filter(|f| f.len() == 5).count();
        let hexagons = mesh.faces.iter().filter(|f| f.len() == 6).count();
        assert_eq!(pentagons, 12);
        assert_eq!(hexagons, 20);
    }

    #[test]
    fn test_classic_vertices_near_unit_sphere() {
        let mesh = SolidKind::Classic.mesh();
        for (i, p) in mesh.vertices.iter().enumerate() {
            let r = p.coords.norm();
            assert!(
                (r - 0.868).abs() < 0.01,
                "vertex {} at radius {} is off the sphere",
                i,
                r
            );
        }
    }

    #[test]
    fn test_classic_edges_shared_twice() {
        // Every edge of a closed solid belongs to exactly two faces.
        let mesh = SolidKind::Classic.mesh();
        let unique = mesh.derive_edges().len();
        let total: usize = mesh.faces.iter().map(|f| f.len()).sum();
        assert_eq!(total, unique * 2);
    }
}
