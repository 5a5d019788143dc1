use crate::model::costing::CostingError;

/// semantically invalid but syntactically parseable requests
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("insufficiently specified required parameter 'locations'")]
    MissingLocations,
    #[error("insufficient number of locations provided")]
    InsufficientLocations,
    #[error("failed to parse location: {0}")]
    InvalidLocation(String),
    #[error("failed to parse correlated location '{key}': {error}")]
    InvalidCorrelatedLocation { key: String, error: String },
    #[error("no edge/node costing provided")]
    MissingCosting,
    #[error("date_time.value is required when date_time.type is depart-at or arrive-by")]
    MissingDateTimeValue,
    #[error(transparent)]
    Costing(#[from] CostingError),
}
