use crate::model::NodeId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown node: {id}")]
    UnknownNode { id: NodeId },
    #[error("node already exists: {id}")]
    DuplicateNode { id: NodeId },
    /// Endpoints of the offending edge.
    #[error("edge {from} -> {to} references a missing node")]
    InvalidGraph { from: NodeId, to: NodeId },
    /// A coordinate or size of a node that is NaN, infinite or (for sizes) negative.
    #[error("node {id}: {field} must be finite, got {value}")]
    InvalidValue {
        id: NodeId,
        field: &'static str,
        value: f64,
    },
    #[error("interpolation rate must be finite and in (0, 1], got {rate}")]
    InvalidRate { rate: f64 },
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
