use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::costing::{
    CostModel, CostModelBuilder, CostingError, HierarchyLimits, TravelMode,
};
use crate::model::graph::DirectedEdge;

/// configuration for truck edge costing. the vehicle dimension fields are
/// consulted by downstream access restriction checks.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TruckCostingConfig {
    pub maneuver_penalty: f64,
    /// seconds applied when entering a low road class
    pub low_class_penalty: f64,
    /// metric tons
    pub truck_weight: f64,
    /// meters
    pub truck_height: f64,
    /// meters
    pub truck_width: f64,
    /// meters
    pub truck_length: f64,
}

impl Default for TruckCostingConfig {
    fn default() -> Self {
        TruckCostingConfig {
            maneuver_penalty: 5.0,
            low_class_penalty: 30.0,
            truck_weight: 21.77,
            truck_height: 4.11,
            truck_width: 2.6,
            truck_length: 21.64,
        }
    }
}

pub struct TruckCostModel {
    pub config: TruckCostingConfig,
    limits: HierarchyLimits,
}

impl TruckCostModel {
    pub fn new(config: TruckCostingConfig) -> TruckCostModel {
        TruckCostModel {
            config,
            limits: HierarchyLimits::default(),
        }
    }
}

impl CostModel for TruckCostModel {
    fn name(&self) -> String {
        String::from("truck")
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

pub struct TruckCostingBuilder {}

impl CostModelBuilder for TruckCostingBuilder {
    fn build(&self, parameters: &Value) -> Result<Box<dyn CostModel>, CostingError> {
        let config: TruckCostingConfig =
            serde_json::from_value(parameters.clone()).map_err(|e| CostingError::BuildError {
                method: String::from("truck"),
                error: e.to_string(),
            })?;
        Ok(Box::new(TruckCostModel::new(config)))
    }
}
