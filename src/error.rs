use thiserror::Error;

/// Failures converting abstract vertex/edge data into a drawable graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("edge ({from}, {to}) references a missing vertex, shape has {vertices}")]
    EdgeOutOfBounds {
        from: usize,
        to: usize,
        vertices: usize,
    },
}

/// Failures assembling a ship model from its part outlines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShipError {
    #[error("{part} outline needs at least 3 points, got {points}")]
    DegeneratePart { part: &'static str, points: usize },
}
