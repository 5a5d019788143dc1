use crate::model::costing::{CostModelTable, TravelMode};
use crate::model::graph::GraphReader;
use crate::model::location::CorrelatedLocation;
use crate::model::search::{PathAlgorithm, PathEdge, SearchError};

/// hierarchy expansion applied on the second, relaxed search pass
pub const RELAXED_HIERARCHY_FACTOR: f64 = 16.0;

/// upper bound on search passes for one origin-destination pair
pub const MAX_SEARCH_PASSES: u32 = 3;

/// run the bounded multi-pass search, at most [`MAX_SEARCH_PASSES`] passes.
///
/// the first pass uses each model's strict hierarchy limits. an empty
/// result is retried up to twice with progressively relaxed constraints
/// when the active model permits it; models that do not permit multi-pass
/// get exactly one pass. each pass is an independent, complete invocation
/// of the search; only the relaxed model configuration carries between
/// passes.
pub fn find_best_path(
    algorithm: &mut dyn PathAlgorithm,
    origin: &CorrelatedLocation,
    destination: &CorrelatedLocation,
    reader: &dyn GraphReader,
    cost_models: &mut CostModelTable,
    mode: TravelMode,
) -> Result<Vec<PathEdge>, SearchError> {
    log::debug!("path search pass 1 ({})", mode);
    let path = algorithm.best_path(origin, destination, reader, cost_models, mode);
    if !path.is_empty() {
        return Ok(path);
    }

    let allow_multi_pass = cost_models
        .get(mode)
        .ok_or(SearchError::MissingCostModel(mode))?
        .allow_multi_pass();
    if !allow_multi_pass {
        return Ok(path);
    }

    // second pass: widen the hierarchy traversal bound
    algorithm.clear();
    let model = cost_models
        .get_mut(mode)
        .ok_or(SearchError::MissingCostModel(mode))?;
    model.relax_hierarchy_limits(RELAXED_HIERARCHY_FACTOR);
    log::debug!("path search pass 2 ({})", mode);
    let path = algorithm.best_path(origin, destination, reader, cost_models, mode);
    if !path.is_empty() {
        return Ok(path);
    }

    // third and final pass: release highway transition restrictions
    algorithm.clear();
    let model = cost_models
        .get_mut(mode)
        .ok_or(SearchError::MissingCostModel(mode))?;
    model.disable_highway_transitions();
    log::debug!("path search pass 3 ({})", mode);
    Ok(algorithm.best_path(origin, destination, reader, cost_models, mode))
}
