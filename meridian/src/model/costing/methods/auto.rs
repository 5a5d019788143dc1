use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::costing::{
    CostModel, CostModelBuilder, CostingError, HierarchyLimits, TravelMode,
};
use crate::model::graph::DirectedEdge;

/// configuration for automobile edge costing. values come from the server
/// defaults merged with any `costing_options.auto` request subtree.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AutoCostingConfig {
    /// seconds applied when transitioning between roads
    pub maneuver_penalty: f64,
    /// seconds applied on gated road entry
    pub gate_cost: f64,
    /// seconds applied at a toll booth
    pub toll_booth_cost: f64,
    pub toll_booth_penalty: f64,
    /// seconds applied when crossing a country border
    pub country_crossing_cost: f64,
}

impl Default for AutoCostingConfig {
    fn default() -> Self {
        AutoCostingConfig {
            maneuver_penalty: 5.0,
            gate_cost: 30.0,
            toll_booth_cost: 15.0,
            toll_booth_penalty: 0.0,
            country_crossing_cost: 600.0,
        }
    }
}

/// drive-mode cost model shared by the `auto` and `auto_shorter` methods.
/// `auto_shorter` scores edges by length rather than travel time.
pub struct AutoCostModel {
    pub config: AutoCostingConfig,
    limits: HierarchyLimits,
    shortest: bool,
}

impl AutoCostModel {
    pub fn new(config: AutoCostingConfig, shortest: bool) -> AutoCostModel {
        AutoCostModel {
            config,
            limits: HierarchyLimits::default(),
            shortest,
        }
    }
}

impl CostModel for AutoCostModel {
    fn name(&self) -> String {
        if self.shortest {
            String::from("auto_shorter")
        } else {
            String::from("auto")
        }
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
        if self.shortest {
            edge.length_meters
        } else {
            edge.length_meters / (edge.speed_kph / 3.6)
        }
    }
}

pub struct AutoCostingBuilder {}

impl CostModelBuilder for AutoCostingBuilder {
    fn build(&self, parameters: &Value) -> Result<Box<dyn CostModel>, CostingError> {
        let config: AutoCostingConfig =
            serde_json::from_value(parameters.clone()).map_err(|e| CostingError::BuildError {
                method: String::from("auto"),
                error: e.to_string(),
            })?;
        Ok(Box::new(AutoCostModel::new(config, false)))
    }
}

pub struct AutoShorterCostingBuilder {}

impl CostModelBuilder for AutoShorterCostingBuilder {
    fn build(&self, parameters: &Value) -> Result<Box<dyn CostModel>, CostingError> {
        let config: AutoCostingConfig =
            serde_json::from_value(parameters.clone()).map_err(|e| CostingError::BuildError {
                method: String::from("auto_shorter"),
                error: e.to_string(),
            })?;
        Ok(Box::new(AutoCostModel::new(config, true)))
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{AutoCostingBuilder, AutoShorterCostingBuilder};
    use crate::model::costing::CostModelBuilder;
    use crate::model::graph::DirectedEdge;

    #[test]
    fn test_auto_scores_by_time_and_shorter_by_length() {
        let edge = DirectedEdge {
            length_meters: 1000.0,
            speed_kph: 36.0,
            not_thru: false,
        };
        let auto = AutoCostingBuilder {}
            .build(&json!({}))
            .expect("auto should build from empty options");
        let shorter = AutoShorterCostingBuilder {}
            .build(&json!({}))
            .expect("auto_shorter should build from empty options");
        // 36 kph is 10 m/s, so the time cost of a 1 km edge is 100 seconds
        assert!((auto.edge_cost(&edge) - 100.0).abs() < 1e-9);
        assert!((shorter.edge_cost(&edge) - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_applies_overridden_options() {
        let model = AutoCostingBuilder {}
            .build(&json!({ "maneuver_penalty": 2.5 }))
            .expect("auto should build from overridden options");
        assert_eq!(model.name(), "auto");
    }
}
