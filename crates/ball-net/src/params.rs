//! Net generation parameters.

use crate::error::{NetError, NetResult};

/// Configuration for net generation, applied uniformly to all panels
/// whenever the layout is (re)computed. All lengths are millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct NetParams {
    /// Target ball radius. Vertex 0 of the solid ends up exactly this far
    /// from the origin after normalization. Range 1..=500.
    pub radius: f64,

    /// Output page width. Minimum 10.
    pub page_width: f64,

    /// Output page height. Minimum 10.
    pub page_height: f64,

    /// Outward offset of the glue-tab outline from each panel edge.
    /// A small physical margin; defaults to 3 mm.
    pub lip_size: f64,

    /// Number of lacing holes sampled per panel boundary edge.
    /// Must be at least 2 (the two edge endpoints).
    pub holes_per_edge: u32,

    /// Radius of each punched lacing hole.
    pub hole_radius: f64,
}

impl Default for NetParams {
    fn default() -> Self {
        Self {
            radius: 115.0,
            page_width: 500.0,
            page_height: 500.0,
            lip_size: 3.0,
            holes_per_edge: 9,
            hole_radius: 1.0,
        }
    }
}

impl NetParams {
    /// Minimum accepted radius.
    pub const MIN_RADIUS: f64 = 1.0;
    /// Maximum accepted radius.
    pub const MAX_RADIUS: f64 = 500.0;
    /// Minimum accepted page dimension.
    pub const MIN_PAGE: f64 = 10.0;

    /// Check all parameter ranges, rejecting bad values before any
    /// geometry is recomputed.
    pub fn validate(&self) -> NetResult<()> {
        if !self.radius.is_finite()
            || self.radius < Self::MIN_RADIUS
            || self.radius > Self::MAX_RADIUS
        {
            return Err(NetError::invalid_configuration(
                "radius",
                format!(
                    "{} is outside {}..={} mm",
                    self.radius,
                    Self::MIN_RADIUS,
                    Self::MAX_RADIUS
                ),
            ));
        }
        if !self.page_width.is_finite() || self.page_width < Self::MIN_PAGE {
            return Err(NetError::invalid_configuration(
                "page_width",
                format!("{} is below the {} mm minimum", self.page_width, Self::MIN_PAGE),
            ));
        }
        if !self.page_height.is_finite() || self.page_height < Self::MIN_PAGE {
            return Err(NetError::invalid_configuration(
                "page_height",
                format!("{} is below the {} mm minimum", self.page_height, Self::MIN_PAGE),
            ));
        }
        if !self.lip_size.is_finite() || self.lip_size < 0.0 {
            return Err(NetError::invalid_configuration(
                "lip_size",
                format!("{} must be non-negative", self.lip_size),
            ));
        }
        if self.holes_per_edge < 2 {
            return Err(NetError::invalid_configuration(
                "holes_per_edge",
                format!(
                    "{} would divide by zero in the sampling step; at least 2 required",
                    self.holes_per_edge
                ),
            ));
        }
        if !self.hole_radius.is_finite() || self.hole_radius < 0.0 {
            return Err(NetError::invalid_configuration(
                "hole_radius",
                format!("{} must be non-negative", self.hole_radius),
            ));
        }
        Ok(())
    }
}
