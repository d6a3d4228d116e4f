//! Error types for net generation.
//!
//! Errors carry machine-readable codes in the format `NET-XXXX`:
//! - `NET-1xxx`: configuration errors (rejected before any geometry runs)
//! - `NET-2xxx`: geometry errors (malformed or degenerate mesh data)
//! - `NET-3xxx`: state errors (operations attempted out of order)
//! - `NET-4xxx`: I/O errors
//!
//! Geometry errors are per-face recoverable: layout computation records the
//! failing face and continues with the rest of the net. Configuration errors
//! are global and block recomputation entirely.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for net operations.
pub type NetResult<T> = Result<T, NetError>;

/// Machine-readable error codes for net operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// NET-1001: A configuration value is out of range or unusable
    InvalidConfiguration = 1001,
    /// NET-2001: Degenerate geometry (zero-length or parallel vectors)
    DegenerateGeometry = 2001,
    /// NET-2002: Face references an invalid vertex index
    InvalidVertexIndex = 2002,
    /// NET-3001: Operation requires state that has not been computed
    IncompleteState = 3001,
    /// NET-4001: Failed to write output file
    IoWrite = 4001,
}

impl ErrorCode {
    /// Returns the error code as a string in the format `NET-XXXX`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidConfiguration => "NET-1001",
            ErrorCode::DegenerateGeometry => "NET-2001",
            ErrorCode::InvalidVertexIndex => "NET-2002",
            ErrorCode::IncompleteState => "NET-3001",
            ErrorCode::IoWrite => "NET-4001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while generating a papercraft net.
#[derive(Debug, Error, Diagnostic)]
pub enum NetError {
    /// A configuration value was rejected before computation.
    #[error("invalid configuration: {parameter}: {details}")]
    #[diagnostic(
        code(net::config::invalid),
        help("Adjust the parameter and re-apply the configuration; no geometry was recomputed.")
    )]
    InvalidConfiguration {
        parameter: &'static str,
        details: String,
    },

    /// Mesh data produced a zero-length or parallel vector where a
    /// direction was required.
    #[error("degenerate geometry: {details}")]
    #[diagnostic(
        code(net::geometry::degenerate),
        help(
            "The solid has a malformed face (collinear corner vectors or a vertex at the frame origin). Other faces are unaffected."
        )
    )]
    DegenerateGeometry {
        face_index: Option<usize>,
        details: String,
    },

    /// Face references a vertex index beyond the vertex table.
    #[error(
        "invalid vertex index: face {face_index} references vertex {vertex_index}, but solid only has {vertex_count} vertices"
    )]
    #[diagnostic(
        code(net::geometry::vertex_index),
        help("Check the face loop table against the vertex table of the solid.")
    )]
    InvalidVertexIndex {
        face_index: usize,
        vertex_index: u32,
        vertex_count: usize,
    },

    /// Operation attempted before its prerequisite state exists.
    #[error("incomplete state: {details}")]
    #[diagnostic(
        code(net::state::incomplete),
        help("Compute the layout first, and supply one placement per face when overriding.")
    )]
    IncompleteState { details: String },

    /// Error writing an output document.
    #[error("failed to write net to {path}")]
    #[diagnostic(
        code(net::io::write),
        help("Check that the directory exists and is writable")
    )]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NetError {
    /// Returns the machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            NetError::InvalidConfiguration { .. } => ErrorCode::InvalidConfiguration,
            NetError::DegenerateGeometry { .. } => ErrorCode::DegenerateGeometry,
            NetError::InvalidVertexIndex { .. } => ErrorCode::InvalidVertexIndex,
            NetError::IncompleteState { .. } => ErrorCode::IncompleteState,
            NetError::IoWrite { .. } => ErrorCode::IoWrite,
        }
    }

    // Constructor helpers for common error patterns

    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration(parameter: &'static str, details: impl Into<String>) -> Self {
        NetError::InvalidConfiguration {
            parameter,
            details: details.into(),
        }
    }

    /// Create a DegenerateGeometry error not tied to a particular face.
    pub fn degenerate_geometry(details: impl Into<String>) -> Self {
        NetError::DegenerateGeometry {
            face_index: None,
            details: details.into(),
        }
    }

    /// Create a DegenerateGeometry error for a specific face.
    pub fn degenerate_face(face_index: usize, details: impl Into<String>) -> Self {
        NetError::DegenerateGeometry {
            face_index: Some(face_index),
            details: format!("face {}: {}", face_index, details.into()),
        }
    }

    /// Returns the index of the face this error is tied to, if any.
    pub fn face_index(&self) -> Option<usize> {
        match self {
            NetError::DegenerateGeometry { face_index, .. } => *face_index,
            NetError::InvalidVertexIndex { face_index, .. } => Some(*face_index),
            _ => None,
        }
    }

    /// Create an InvalidVertexIndex error.
    pub fn invalid_vertex_index(face_index: usize, vertex_index: u32, vertex_count: usize) -> Self {
        NetError::InvalidVertexIndex {
            face_index,
            vertex_index,
            vertex_count,
        }
    }

    /// Create an IncompleteState error.
    pub fn incomplete_state(details: impl Into<String>) -> Self {
        NetError::IncompleteState {
            details: details.into(),
        }
    }

    /// Create an IoWrite error.
    pub fn io_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NetError::IoWrite {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = NetError::invalid_vertex_index(5, 100, 60);
        assert_eq!(err.code(), ErrorCode::InvalidVertexIndex);
        assert_eq!(err.code().as_str(), "NET-2002");

        let err = NetError::invalid_configuration("holes_per_edge", "must be at least 2");
        assert_eq!(err.code(), ErrorCode::InvalidConfiguration);
        assert_eq!(err.code().as_str(), "NET-1001");
    }

    #[test]
    fn test_degenerate_face_display() {
        let err = NetError::degenerate_face(7, "collinear corner vectors");
        let display = format!("{}", err);
        assert!(display.contains("face 7"));
        assert!(display.contains("collinear"));
    }

    #[test]
    fn test_degenerate_without_face_display() {
        let err = NetError::degenerate_geometry("vertex 0 is at the origin");
        let display = format!("{}", err);
        assert!(!display.contains("in face"));
        assert!(display.contains("vertex 0"));
    }

    #[test]
    fn test_invalid_vertex_index_display() {
        let err = NetError::invalid_vertex_index(3, 61, 60);
        let display = format!("{}", err);
        assert!(display.contains("face 3"));
        assert!(display.contains("vertex 61"));
        assert!(display.contains("60 vertices"));
    }
}
