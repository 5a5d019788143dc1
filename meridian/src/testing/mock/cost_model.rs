use crate::model::costing::{CostModel, HierarchyLimits, TravelMode};
use crate::model::graph::DirectedEdge;

/// cost model with directly controllable multi-pass permission, for
/// exercising the search retry policy
pub struct TestCostModel {
    mode: TravelMode,
    multi_pass: bool,
    limits: HierarchyLimits,
}

impl TestCostModel {
    pub fn new(mode: TravelMode, multi_pass: bool) -> TestCostModel {
        TestCostModel {
            mode,
            multi_pass,
            limits: HierarchyLimits::default(),
        }
    }
}

impl CostModel for TestCostModel {
    fn name(&self) -> String {
        format!("test ({})", self.mode)
    }

    fn travel_mode(&self) -> TravelMode {
        self.mode
    }

    fn allow_multi_pass(&self) -> bool {
        self.multi_pass
    }

    fn hierarchy_limits(&self) -> HierarchyLimits {
        self.limits
    }

    fn relax_hierarchy_limits(&mut self, factor: f64) {
        self.limits.expansion_factor = factor;
    }

    fn disable_highway_transitions(&mut self) {
        self.limits.allow_highway_transitions = false;
    }

    fn edge_cost(&self, edge: &DirectedEdge) -> f64 {
        edge.length_meters
    }
}
