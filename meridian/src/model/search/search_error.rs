use crate::model::costing::TravelMode;
use crate::model::graph::GraphError;

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("no cost model populated for travel mode '{0}'")]
    MissingCostModel(TravelMode),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
