use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::costing::{
    CostModel, CostModelBuilder, CostingError, HierarchyLimits, TravelMode,
};
use crate::model::graph::DirectedEdge;

/// configuration for bicycle edge costing
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct BicycleCostingConfig {
    /// kilometers per hour
    pub cycling_speed: f64,
    /// willingness to take roads alongside motor traffic, in [0, 1]
    pub use_roads: f64,
    pub bicycle_type: String,
}

impl Default for BicycleCostingConfig {
    fn default() -> Self {
        BicycleCostingConfig {
            cycling_speed: 20.0,
            use_roads: 0.5,
            bicycle_type: String::from("hybrid"),
        }
    }
}

pub struct BicycleCostModel {
    pub config: BicycleCostingConfig,
    limits: HierarchyLimits,
}

impl BicycleCostModel {
    pub fn new(config: BicycleCostingConfig) -> BicycleCostModel {
        BicycleCostModel {
            config,
            limits: HierarchyLimits::default(),
        }
    }
}

impl CostModel for BicycleCostModel {
    fn name(&self) -> String {
        String::from("bicycle")
    }

    fn travel_mode(&self) -> TravelMode {
        TravelMode::Bicycle
    }

    fn allow_multi_pass(&self) -> bool {
        false
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
        edge.length_meters / (self.config.cycling_speed / 3.6)
    }
}

pub struct BicycleCostingBuilder {}

impl CostModelBuilder for BicycleCostingBuilder {
    fn build(&self, parameters: &Value) -> Result<Box<dyn CostModel>, CostingError> {
        let config: BicycleCostingConfig =
            serde_json::from_value(parameters.clone()).map_err(|e| CostingError::BuildError {
                method: String::from("bicycle"),
                error: e.to_string(),
            })?;
        Ok(Box::new(BicycleCostModel::new(config)))
    }
}
