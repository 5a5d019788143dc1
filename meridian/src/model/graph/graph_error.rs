use crate::model::graph::EdgeId;

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("no directed edge found for graph id {0}")]
    EdgeNotFound(EdgeId),
}
