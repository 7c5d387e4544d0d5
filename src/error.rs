use algograph::graph::VertexId;

pub type Result<T> = std::result::Result<T, Error>;

/// Input validation failures. Once inputs pass validation the
/// computations themselves cannot fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("graph has no vertices")]
    EmptyGraph,
    #[error("damping={0}, must lie in [0, 1]")]
    DampingOutOfRange(f64),
    #[error("sample count must be positive")]
    ZeroSamples,
    #[error("vertex {0:?} is not part of the graph")]
    PageNotInGraph(VertexId),
}
