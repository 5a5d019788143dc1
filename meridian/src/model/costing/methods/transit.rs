use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::costing::{
    CostModel, CostModelBuilder, CostingError, HierarchyLimits, TravelMode,
};
use crate::model::graph::DirectedEdge;

/// configuration for transit edge costing
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TransitCostingConfig {
    /// multiplier weighting transit legs against other modes
    pub mode_factor: f64,
    /// seconds applied at a transfer
    pub transfer_cost: f64,
    pub transfer_penalty: f64,
}

impl Default for TransitCostingConfig {
    fn default() -> Self {
        TransitCostingConfig {
            mode_factor: 1.0,
            transfer_cost: 15.0,
            transfer_penalty: 300.0,
        }
    }
}

pub struct TransitCostModel {
    pub config: TransitCostingConfig,
    limits: HierarchyLimits,
}

impl TransitCostModel {
    pub fn new(config: TransitCostingConfig) -> TransitCostModel {
        TransitCostModel {
            config,
            limits: HierarchyLimits::default(),
        }
    }
}

impl CostModel for TransitCostModel {
    fn name(&self) -> String {
        String::from("transit")
    }

    fn travel_mode(&self) -> TravelMode {
        TravelMode::Transit
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
        self.config.mode_factor * (edge.length_meters / (edge.speed_kph / 3.6))
    }
}

pub struct TransitCostingBuilder {}

impl CostModelBuilder for TransitCostingBuilder {
    fn build(&self, parameters: &Value) -> Result<Box<dyn CostModel>, CostingError> {
        let config: TransitCostingConfig =
            serde_json::from_value(parameters.clone()).map_err(|e| CostingError::BuildError {
                method: String::from("transit"),
                error: e.to_string(),
            })?;
        Ok(Box::new(TransitCostModel::new(config)))
    }
}
