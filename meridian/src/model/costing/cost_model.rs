use crate::model::costing::TravelMode;
use crate::model::graph::DirectedEdge;

/// search parameters bounding traversal between levels of the hierarchical
/// graph representation. `expansion_factor` starts strict (1.0) and is
/// widened by the multi-pass retry policy; highway transitions may be
/// released entirely on the final pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HierarchyLimits {
    pub expansion_factor: f64,
    pub allow_highway_transitions: bool,
}

impl Default for HierarchyLimits {
    fn default() -> Self {
        HierarchyLimits {
            expansion_factor: 1.0,
            allow_highway_transitions: true,
        }
    }
}

/// an instantiated, mode-specific edge scoring object.
///
/// models are built per request from merged costing options and discarded
/// with the request, so pass-to-pass relaxation mutates the model directly
/// and never leaks into the next request.
pub trait CostModel {
    fn name(&self) -> String;

    /// the travel mode this model natively scores for
    fn travel_mode(&self) -> TravelMode;

    /// whether an empty first pass may be retried with relaxed limits
    fn allow_multi_pass(&self) -> bool;

    fn hierarchy_limits(&self) -> HierarchyLimits;

    /// widen the hierarchy traversal bound for a relaxed search pass
    fn relax_hierarchy_limits(&mut self, factor: f64);

    /// release highway transition restrictions for the final search pass
    fn disable_highway_transitions(&mut self);

    /// seconds to traverse `edge` under this model
    fn edge_cost(&self, edge: &DirectedEdge) -> f64;
}
