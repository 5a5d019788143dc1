use serde_json::Value;

use crate::app::worker::{MatrixType, Response, WorkerError};
use crate::model::graph::GraphReader;
use crate::model::request::{DateTimeType, RequestContext};
use crate::model::search::SearchAlgorithms;

/// builds many-to-many matrix results. result assembly lives downstream of
/// this crate; the worker hands over the parsed context, its search
/// resources, and the raw document.
pub trait MatrixHandler {
    fn matrix(
        &mut self,
        matrix_type: MatrixType,
        costing_method: &str,
        request: &Value,
        context: &mut RequestContext,
        algorithms: &mut SearchAlgorithms,
        reader: &dyn GraphReader,
    ) -> Result<Response, WorkerError>;
}

/// builds optimized-order trip results over the correlated locations
pub trait OptimizedTripHandler {
    fn optimized_trip(
        &mut self,
        costing_method: &str,
        raw_body: &str,
        context: &mut RequestContext,
        algorithms: &mut SearchAlgorithms,
        reader: &dyn GraphReader,
    ) -> Result<Response, WorkerError>;
}

/// builds default point-to-point trip results
pub trait TripHandler {
    fn trip(
        &mut self,
        costing_method: &str,
        raw_body: &str,
        date_time_type: Option<DateTimeType>,
        context: &mut RequestContext,
        algorithms: &mut SearchAlgorithms,
        reader: &dyn GraphReader,
    ) -> Result<Response, WorkerError>;
}
