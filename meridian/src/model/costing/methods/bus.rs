use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::costing::{
    CostModel, CostModelBuilder, CostingError, HierarchyLimits, TravelMode,
};
use crate::model::graph::DirectedEdge;

/// configuration for bus edge costing
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct BusCostingConfig {
    pub maneuver_penalty: f64,
    pub gate_cost: f64,
    /// seconds applied when entering a destination-only road
    pub destination_only_penalty: f64,
}

impl Default for BusCostingConfig {
    fn default() -> Self {
        BusCostingConfig {
            maneuver_penalty: 5.0,
            gate_cost: 30.0,
            destination_only_penalty: 600.0,
        }
    }
}

pub struct BusCostModel {
    pub config: BusCostingConfig,
    limits: HierarchyLimits,
}

impl BusCostModel {
    pub fn new(config: BusCostingConfig) -> BusCostModel {
        BusCostModel {
            config,
            limits: HierarchyLimits::default(),
        }
    }
}

impl CostModel for BusCostModel {
    fn name(&self) -> String {
        String::from("bus")
    }

    fn travel_mode(&self) -> TravelMode {
        TravelMode::Drive
    }

    fn allow_multi_pass(&self) -> bool {
        true
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
        edge.length_meters / (edge.speed_kph / 3.6)
    }
}

pub struct BusCostingBuilder {}

impl CostModelBuilder for BusCostingBuilder {
    fn build(&self, parameters: &Value) -> Result<Box<dyn CostModel>, CostingError> {
        let config: BusCostingConfig =
            serde_json::from_value(parameters.clone()).map_err(|e| CostingError::BuildError {
                method: String::from("bus"),
                error: e.to_string(),
            })?;
        Ok(Box::new(BusCostModel::new(config)))
    }
}
