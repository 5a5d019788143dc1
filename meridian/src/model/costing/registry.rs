use std::collections::HashMap;
use std::rc::Rc;

use itertools::Itertools;
use serde_json::Value;

use crate::model::costing::methods::auto::{AutoCostingBuilder, AutoShorterCostingBuilder};
use crate::model::costing::methods::bicycle::BicycleCostingBuilder;
use crate::model::costing::methods::bus::BusCostingBuilder;
use crate::model::costing::methods::pedestrian::PedestrianCostingBuilder;
use crate::model::costing::methods::transit::TransitCostingBuilder;
use crate::model::costing::methods::truck::TruckCostingBuilder;
use crate::model::costing::{CostModel, CostModelBuilder, CostingError};

/// maps a costing method name to the builder that constructs its cost model.
/// lookups that miss produce a typed error rather than a generic failure.
pub struct CostingRegistry {
    builders: HashMap<String, Rc<dyn CostModelBuilder>>,
}

impl CostingRegistry {
    pub fn new() -> CostingRegistry {
        CostingRegistry {
            builders: HashMap::new(),
        }
    }

    pub fn add_costing_method(&mut self, name: String, builder: Rc<dyn CostModelBuilder>) {
        self.builders.insert(name, builder);
    }

    /// construct a cost model for `method` from `options`
    pub fn build(&self, method: &str, options: &Value) -> Result<Box<dyn CostModel>, CostingError> {
        let builder = self
            .builders
            .get(method)
            .ok_or_else(|| CostingError::MethodNotRegistered(method.to_string()))?;
        builder.build(options)
    }

    pub fn methods(&self) -> Vec<String> {
        self.builders.keys().cloned().sorted().collect_vec()
    }
}

impl Default for CostingRegistry {
    fn default() -> Self {
        CostingRegistry::new()
    }
}

/// register the edge/node costing methods this worker serves
pub fn default_registry() -> CostingRegistry {
    let mut registry = CostingRegistry::new();
    registry.add_costing_method(String::from("auto"), Rc::new(AutoCostingBuilder {}));
    registry.add_costing_method(
        String::from("auto_shorter"),
        Rc::new(AutoShorterCostingBuilder {}),
    );
    registry.add_costing_method(String::from("bus"), Rc::new(BusCostingBuilder {}));
    registry.add_costing_method(String::from("bicycle"), Rc::new(BicycleCostingBuilder {}));
    registry.add_costing_method(
        String::from("pedestrian"),
        Rc::new(PedestrianCostingBuilder {}),
    );
    registry.add_costing_method(String::from("transit"), Rc::new(TransitCostingBuilder {}));
    registry.add_costing_method(String::from("truck"), Rc::new(TruckCostingBuilder {}));
    registry
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::default_registry;
    use crate::model::costing::{CostingError, TravelMode};

    #[test]
    fn test_default_registry_methods() {
        let registry = default_registry();
        assert_eq!(
            registry.methods(),
            vec![
                "auto",
                "auto_shorter",
                "bicycle",
                "bus",
                "pedestrian",
                "transit",
                "truck"
            ]
        );
    }

    #[test]
    fn test_each_method_builds_with_native_mode() {
        let registry = default_registry();
        for method in registry.methods() {
            let model = registry
                .build(&method, &json!({}))
                .unwrap_or_else(|e| panic!("failed to build '{}': {}", method, e));
            let expected = match method.as_str() {
                "auto" | "auto_shorter" | "bus" | "truck" => TravelMode::Drive,
                "bicycle" => TravelMode::Bicycle,
                "pedestrian" => TravelMode::Pedestrian,
                "transit" => TravelMode::Transit,
                other => panic!("unexpected method '{}'", other),
            };
            assert_eq!(model.travel_mode(), expected);
        }
    }

    #[test]
    fn test_unregistered_method_is_typed_error() {
        let registry = default_registry();
        let error = registry
            .build("segway", &json!({}))
            .err()
            .expect("building an unregistered method should fail");
        assert!(matches!(error, CostingError::MethodNotRegistered(_)));
    }
}
