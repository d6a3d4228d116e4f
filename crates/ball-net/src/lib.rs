//! Papercraft net generation for spherical polyhedra.
//!
//! This crate turns a faceted ball solid into a printable sewing/gluing
//! net: each face is flattened into its own 2D panel with a glue-tab lip
//! outline and evenly spaced lacing holes, panels are arranged on a page,
//! and the result exports as a vector document.
//!
//! # Features
//!
//! - **Solids**: the classic 32-panel ball (12 pentagons, 20 hexagons)
//! - **Normalization**: exact scaling to a physical radius, repeatable
//!   without accumulated error
//! - **Flattening**: per-face rigid projection into a centroid-centered
//!   2D frame
//! - **Lips and holes**: radial glue-tab outlines and per-edge lacing
//!   hole sampling
//! - **Layout**: page arrangement with per-panel placement overrides
//! - **Export**: pluggable page canvas, with a built-in SVG backend
//!
//! # Units and Scale
//!
//! **All lengths are millimeters.** Export converts to PostScript points
//! (1 pt = 1/72 inch) at the canvas boundary. The coordinate system is
//! right-handed; flattened panels live in the z = 0 plane, y-up.
//!
//! # Quick Start
//!
//! ```no_run
//! use ball_net::{BallSession, SolidKind, SvgCanvas};
//!
//! let mut session = BallSession::new(SolidKind::Classic).unwrap();
//! session.recompute().unwrap();
//!
//! let mut canvas = SvgCanvas::new();
//! session.export(&mut canvas, "net.svg".as_ref()).unwrap();
//! ```
//!
//! # Error Handling
//!
//! Operations return `NetResult<T>`, which is `Result<T, NetError>`.
//! Every error carries a machine-readable `NET-XXXX` code. Configuration
//! errors block recomputation entirely; degenerate-geometry errors are
//! per-face recoverable and recorded in the layout's skip list.

mod error;
mod session;
mod types;

pub mod export;
pub mod flatten;
pub mod holes;
pub mod layout;
pub mod lip;
pub mod normalize;
pub mod params;
pub mod solid;

// Re-export core types at crate root
pub use error::{ErrorCode, NetError, NetResult};
pub use export::{export_net, PageCanvas, SvgCanvas, MM_TO_PT};
pub use flatten::{flatten_face, FlatPanel};
pub use layout::{compute_layout, NetLayout, PageRect, Panel, PanelPlacement};
pub use params::NetParams;
pub use session::BallSession;
pub use solid::SolidKind;
pub use types::Mesh;
