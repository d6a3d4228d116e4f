//! The stateful generation session tying the pipeline together.
//!
//! A [`BallSession`] owns the solid mesh, the current parameters, the
//! per-panel placements, and the derived layout snapshot. Every mutation
//! validates and derives on candidate state first and commits only on
//! success, so a failed change never leaves the session half-updated.

use std::path::Path;

use nalgebra::Vector3;
use tracing::info;

use crate::error::{NetError, NetResult};
use crate::export::{export_net, PageCanvas};
use crate::layout::{compute_layout, NetLayout, PanelPlacement};
use crate::normalize::normalize_radius;
use crate::params::NetParams;
use crate::solid::SolidKind;
use crate::types::Mesh;

/// An interactive net-generation session.
///
/// Placements are the only state that carries user intent across layout
/// rebuilds; everything else in the layout is derived from the mesh and
/// parameters.
#[derive(Debug)]
pub struct BallSession {
    kind: SolidKind,
    mesh: Mesh,
    params: NetParams,
    placements: Vec<PanelPlacement>,
    layout: Option<NetLayout>,
}

impl BallSession {
    /// Start a session for the given solid with its default parameters.
    ///
    /// The mesh is built and normalized immediately; the layout is derived
    /// on the first call to [`recompute`](Self::recompute) or by any
    /// parameter or placement setter.
    pub fn new(kind: SolidKind) -> NetResult<Self> {
        let params = kind.default_params();
        let mut mesh = kind.mesh();
        normalize_radius(&mut mesh, params.radius)?;
        let placements = vec![PanelPlacement::default(); mesh.face_count()];

        info!(
            target: "ball_net::session",
            solid = %kind,
            faces = mesh.face_count(),
            radius = params.radius,
            "Session started"
        );

        Ok(Self {
            kind,
            mesh,
            params,
            placements,
            layout: None,
        })
    }

    /// The solid this session generates.
    pub fn kind(&self) -> SolidKind {
        self.kind
    }

    /// The normalized mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Current parameters.
    pub fn params(&self) -> &NetParams {
        &self.params
    }

    /// The derived layout, if one has been computed.
    pub fn layout(&self) -> Option<&NetLayout> {
        self.layout.as_ref()
    }

    /// Per-panel translations, one per face.
    pub fn translations(&self) -> Vec<Vector3<f64>> {
        self.placements.iter().map(|p| p.translation).collect()
    }

    /// Per-panel rotations, one per face.
    pub fn rotations(&self) -> Vec<Vector3<f64>> {
        self.placements.iter().map(|p| p.rotation).collect()
    }

    /// Derive the layout from the current mesh, parameters, and placements.
    pub fn recompute(&mut self) -> NetResult<()> {
        let layout = compute_layout(&self.mesh, &self.params, &self.placements)?;
        self.layout = Some(layout);
        Ok(())
    }

    /// Change the ball radius and rebuild the layout.
    ///
    /// Renormalization is exact: scaling runs against the current vertex
    /// positions, so repeated radius changes do not accumulate error.
    pub fn set_radius(&mut self, radius: f64) -> NetResult<()> {
        let mut params = self.params.clone();
        params.radius = radius;
        self.set_params(params)
    }

    /// Replace the full parameter set and rebuild the layout.
    ///
    /// Validates and derives on candidate state first; on any error the
    /// session keeps its previous parameters, mesh, and layout.
    pub fn set_params(&mut self, params: NetParams) -> NetResult<()> {
        params.validate()?;

        let mut mesh = self.mesh.clone();
        normalize_radius(&mut mesh, params.radius)?;
        let layout = compute_layout(&mesh, &params, &self.placements)?;

        info!(
            target: "ball_net::session",
            radius = params.radius,
            lip = params.lip_size,
            holes_per_edge = params.holes_per_edge,
            "Parameters applied"
        );

        self.mesh = mesh;
        self.params = params;
        self.layout = Some(layout);
        Ok(())
    }

    /// Override every panel's translation and rebuild the layout.
    ///
    /// Fails with `IncompleteState` unless exactly one translation per
    /// face is supplied.
    pub fn set_translations(&mut self, translations: &[Vector3<f64>]) -> NetResult<()> {
        if translations.len() != self.placements.len() {
            return Err(NetError::incomplete_state(format!(
                "{} translations supplied for {} panels; a complete set is required",
                translations.len(),
                self.placements.len()
            )));
        }

        let mut placements = self.placements.clone();
        for (placement, t) in placements.iter_mut().zip(translations) {
            placement.translation = *t;
        }
        let layout = compute_layout(&self.mesh, &self.params, &placements)?;

        self.placements = placements;
        self.layout = Some(layout);
        Ok(())
    }

    /// Override every panel's rotation and rebuild the layout.
    ///
    /// Fails with `IncompleteState` unless exactly one rotation per face
    /// is supplied.
    pub fn set_rotations(&mut self, rotations: &[Vector3<f64>]) -> NetResult<()> {
        if rotations.len() != self.placements.len() {
            return Err(NetError::incomplete_state(format!(
                "{} rotations supplied for {} panels; a complete set is required",
                rotations.len(),
                self.placements.len()
            )));
        }

        let mut placements = self.placements.clone();
        for (placement, r) in placements.iter_mut().zip(rotations) {
            placement.rotation = *r;
        }
        let layout = compute_layout(&self.mesh, &self.params, &placements)?;

        self.placements = placements;
        self.layout = Some(layout);
        Ok(())
    }

    /// Rebuild the solid from scratch, discarding placement overrides, and
    /// rebuild the layout.
    pub fn regenerate(&mut self) -> NetResult<()> {
        let mut mesh = self.kind.mesh();
        normalize_radius(&mut mesh, self.params.radius)?;
        let placements = vec![PanelPlacement::default(); mesh.face_count()];
        let layout = compute_layout(&mesh, &self.params, &placements)?;

        info!(
            target: "ball_net::session",
            solid = %self.kind,
            "Solid regenerated"
        );

        self.mesh = mesh;
        self.placements = placements;
        self.layout = Some(layout);
        Ok(())
    }

    /// Export the current layout through the given canvas.
    ///
    /// Fails with `IncompleteState` when no layout has been derived yet;
    /// exporting never silently produces an empty page.
    pub fn export(&self, canvas: &mut dyn PageCanvas, path: &Path) -> NetResult<()> {
        let layout = self.layout.as_ref().ok_or_else(|| {
            NetError::incomplete_state("no layout derived yet; recompute before exporting")
        })?;
        export_net(layout, &self.params, canvas, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::SvgCanvas;

    const TOL: f64 = 1e-9;

    fn classic_session() -> BallSession {
        let mut session = BallSession::new(SolidKind::Classic).expect("session starts");
        session.recompute().expect("layout derives");
        session
    }

    #[test]
    fn test_new_session_normalizes_but_does_not_derive() {
        let session = BallSession::new(SolidKind::Classic).expect("session starts");
        assert!(session.layout().is_none());
        let v0 = session.mesh().vertices[0];
        assert!((v0.coords.norm() - 115.0).abs() < TOL);
    }

    #[test]
    fn test_recompute_builds_full_layout() {
        let session = classic_session();
        let layout = session.layout().expect("layout present");
        assert_eq!(layout.panels.len(), 32);
    }

    #[test]
    fn test_export_before_recompute_fails() {
        let session = BallSession::new(SolidKind::Classic).expect("session starts");
        let mut canvas = SvgCanvas::new();
        let dir = tempfile::tempdir().expect("tempdir");
        let err = session
            .export(&mut canvas, &dir.path().join("net.svg"))
            .unwrap_err();
        assert_eq!(err.code().as_str(), "NET-3001");
    }

    #[test]
    fn test_set_radius_rescales_and_rederives() {
        let mut session = classic_session();
        session.set_radius(50.0).expect("radius applies");
        let v0 = session.mesh().vertices[0];
        assert!((v0.coords.norm() - 50.0).abs() < TOL);
        assert!(session.layout().is_some());

        // Back to the default; renormalization is exact, not cumulative.
        session.set_radius(115.0).expect("radius applies");
        let v0 = session.mesh().vertices[0];
        assert!((v0.coords.norm() - 115.0).abs() < TOL);
    }

    #[test]
    fn test_invalid_radius_keeps_previous_state() {
        let mut session = classic_session();
        let err = session.set_radius(0.0).unwrap_err();
        assert_eq!(err.code().as_str(), "NET-1001");
        // Old parameters and layout survive the failed change.
        assert!((session.params().radius - 115.0).abs() < TOL);
        assert_eq!(session.layout().expect("layout kept").panels.len(), 32);
    }

    #[test]
    fn test_translation_round_trip() {
        let mut session = classic_session();
        let mut translations = session.translations();
        translations[5] = Vector3::new(40.0, 25.0, 0.0);
        session
            .set_translations(&translations)
            .expect("translations apply");

        assert_eq!(session.translations()[5], Vector3::new(40.0, 25.0, 0.0));
        // The moved panel's placement flows into the derived layout.
        let layout = session.layout().expect("layout present");
        let panel = layout.panel(5).expect("panel 5 built");
        assert_eq!(panel.placement.translation.x, 40.0);
    }

    #[test]
    fn test_wrong_translation_count_rejected() {
        let mut session = classic_session();
        let err = session
            .set_translations(&[Vector3::zeros(); 3])
            .unwrap_err();
        assert_eq!(err.code().as_str(), "NET-3001");
    }

    #[test]
    fn test_rotation_round_trip() {
        let mut session = classic_session();
        let mut rotations = session.rotations();
        rotations[0] = Vector3::new(0.0, 0.0, std::f64::consts::FRAC_PI_4);
        session.set_rotations(&rotations).expect("rotations apply");
        assert!((session.rotations()[0].z - std::f64::consts::FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn test_regenerate_resets_placements() {
        let mut session = classic_session();
        let mut translations = session.translations();
        translations[2] = Vector3::new(-10.0, 7.0, 0.0);
        session
            .set_translations(&translations)
            .expect("translations apply");

        session.regenerate().expect("regenerates");
        assert_eq!(session.translations()[2], Vector3::zeros());
        assert_eq!(session.layout().expect("layout present").panels.len(), 32);
    }

    #[test]
    fn test_export_writes_document() {
        let session = classic_session();
        let mut canvas = SvgCanvas::new();
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("net.svg");
        session.export(&mut canvas, &path).expect("exports");
        assert!(path.exists());
    }
}
