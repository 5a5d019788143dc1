use crate::model::costing::{CostModelTable, TravelMode};
use crate::model::location::{CorrelatedLocation, Location};
use crate::model::request::{DateTimeType, DistanceUnits};

/// the per-request aggregate threaded through every stage.
///
/// constructed fresh by the parser for each request and dropped with it, so
/// nothing in here can survive into the next request on this worker.
pub struct RequestContext {
    /// request correlation id, echoed in logs
    pub id: Option<String>,
    pub units: DistanceUnits,
    /// meters-to-unit scale for downstream consumers; does not affect search
    pub distance_scale: f64,
    /// ordered input waypoints, at least two
    pub locations: Vec<Location>,
    /// waypoints resolved to candidate graph edges, in `correlated_N` order
    pub correlated: Vec<CorrelatedLocation>,
    /// the travel mode the search starts in
    pub mode: TravelMode,
    pub cost_models: CostModelTable,
    /// the costing method named by the request
    pub costing_method: String,
    pub date_time_type: Option<DateTimeType>,
}
