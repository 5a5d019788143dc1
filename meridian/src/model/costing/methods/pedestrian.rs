use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::costing::{
    CostModel, CostModelBuilder, CostingError, HierarchyLimits, TravelMode,
};
use crate::model::graph::DirectedEdge;

/// configuration for pedestrian edge costing
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PedestrianCostingConfig {
    /// kilometers per hour
    pub walking_speed: f64,
    /// preference multiplier for dedicated walkways
    pub walkway_factor: f64,
    pub alley_factor: f64,
    pub driveway_factor: f64,
    /// seconds applied per flight of steps
    pub step_penalty: f64,
}

impl Default for PedestrianCostingConfig {
    fn default() -> Self {
        PedestrianCostingConfig {
            walking_speed: 5.1,
            walkway_factor: 0.9,
            alley_factor: 2.0,
            driveway_factor: 5.0,
            step_penalty: 30.0,
        }
    }
}

pub struct PedestrianCostModel {
    pub config: PedestrianCostingConfig,
    limits: HierarchyLimits,
}

impl PedestrianCostModel {
    pub fn new(config: PedestrianCostingConfig) -> PedestrianCostModel {
        PedestrianCostModel {
            config,
            limits: HierarchyLimits::default(),
        }
    }
}

impl CostModel for PedestrianCostModel {
    fn name(&self) -> String {
        String::from("pedestrian")
    }

    fn travel_mode(&self) -> TravelMode {
        TravelMode::Pedestrian
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
        edge.length_meters / (self.config.walking_speed / 3.6)
    }
}

pub struct PedestrianCostingBuilder {}

impl CostModelBuilder for PedestrianCostingBuilder {
    fn build(&self, parameters: &Value) -> Result<Box<dyn CostModel>, CostingError> {
        let config: PedestrianCostingConfig =
            serde_json::from_value(parameters.clone()).map_err(|e| CostingError::BuildError {
                method: String::from("pedestrian"),
                error: e.to_string(),
            })?;
        Ok(Box::new(PedestrianCostModel::new(config)))
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::PedestrianCostingBuilder;
    use crate::model::costing::CostModelBuilder;
    use crate::model::graph::DirectedEdge;

    #[test]
    fn test_walking_speed_drives_edge_cost() {
        let edge = DirectedEdge {
            length_meters: 510.0,
            speed_kph: 50.0,
            not_thru: false,
        };
        let model = PedestrianCostingBuilder {}
            .build(&json!({ "walking_speed": 5.1 }))
            .expect("pedestrian should build");
        // the posted edge speed is irrelevant to a pedestrian
        let expected = 510.0 / (5.1 / 3.6);
        assert!((model.edge_cost(&edge) - expected).abs() < 1e-9);
    }
}
