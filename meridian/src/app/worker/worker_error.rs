use crate::model::costing::CostingError;
use crate::model::graph::GraphError;
use crate::model::request::RequestError;
use crate::model::search::SearchError;

/// request-scoped failures surfaced by the worker. every variant maps to a
/// classified response; none terminate the worker process.
#[derive(thiserror::Error, Debug)]
pub enum WorkerError {
    /// the request body is not a parseable document
    #[error("failed to parse intermediate request format")]
    MalformedInput(String),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Costing(#[from] CostingError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// a value upstream stages are expected to guarantee arrived invalid
    #[error("{0}")]
    InvariantViolation(String),
    /// worker construction failed; never reaches a response
    #[error("invalid worker configuration: {0}")]
    Configuration(String),
}
