use thiserror::Error;

/// Top-level error type for the Cobbler kernel.
#[derive(Debug, Error)]
pub enum CobblerError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while describing a 2D shape.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("parameter {parameter} = {value} is invalid: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("path is already closed")]
    AlreadyClosed,
}

/// Errors related to the connectivity of outlines and meshes.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("wire is not closed")]
    WireNotClosed,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Errors related to the scene graph.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("node {0} is not a group and cannot hold children")]
    NotAGroup(String),
}

/// Convenience type alias for results using [`CobblerError`].
pub type Result<T> = std::result::Result<T, CobblerError>;
