use serde_json::Value;

use crate::model::costing::{CostModel, CostingError, CostingRegistry};

/// key under which both server configuration and requests carry per-method
/// costing option subtrees
pub const COSTING_OPTIONS_KEY: &str = "costing_options";

/// locate the `costing_options.<method>` subtree of a document
pub fn options_subtree<'a>(document: &'a Value, method: &str) -> Option<&'a Value> {
    document
        .get(COSTING_OPTIONS_KEY)
        .and_then(|options| options.get(method))
}

/// merge a request override subtree over a base options subtree.
///
/// each key present in the override is inserted into a copy of the base,
/// replacing the base's subtree at that key wholesale; keys present only in
/// the base survive. a non-object override contributes nothing. merging an
/// empty override object is observationally identical to merging no override
/// at all.
pub fn merge_options(base: &Value, overrides: &Value) -> Value {
    let mut merged = base.clone();
    if let (Value::Object(merged_map), Value::Object(override_map)) = (&mut merged, overrides) {
        for (key, subtree) in override_map {
            merged_map.insert(key.clone(), subtree.clone());
        }
    }
    merged
}

/// resolve the costing options for `method` and construct its cost model.
/// base options come from server configuration; a request subtree at the
/// same path, if any, is merged over them per [`merge_options`].
pub fn resolve_cost_model(
    registry: &CostingRegistry,
    server_config: &Value,
    request: &Value,
    method: &str,
) -> Result<Box<dyn CostModel>, CostingError> {
    let base = options_subtree(server_config, method)
        .ok_or_else(|| CostingError::MissingConfiguration(method.to_string()))?;
    let options = match options_subtree(request, method) {
        Some(overrides) => merge_options(base, overrides),
        None => base.clone(),
    };
    registry.build(method, &options)
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use super::{merge_options, resolve_cost_model};
    use crate::model::costing::{default_registry, CostingError};
    use crate::model::graph::DirectedEdge;

    fn server_config() -> Value {
        json!({
            "costing_options": {
                "auto": { "maneuver_penalty": 5.0, "gate_cost": 30.0 },
                "pedestrian": { "walking_speed": 5.1 }
            }
        })
    }

    fn test_edge() -> DirectedEdge {
        DirectedEdge {
            length_meters: 1020.0,
            speed_kph: 51.0,
            not_thru: false,
        }
    }

    #[test]
    fn test_merge_override_precedence() {
        let base = json!({ "maneuver_penalty": 5.0, "gate_cost": 30.0 });
        let overrides = json!({ "maneuver_penalty": 2.5, "toll_booth_cost": 20.0 });
        let merged = merge_options(&base, &overrides);
        // ASSERTION 1: keys present in both take the override's value
        assert_eq!(merged.get("maneuver_penalty"), Some(&json!(2.5)));
        // ASSERTION 2: keys present only in the base survive
        assert_eq!(merged.get("gate_cost"), Some(&json!(30.0)));
        // ASSERTION 3: keys present only in the override are inserted
        assert_eq!(merged.get("toll_booth_cost"), Some(&json!(20.0)));
    }

    #[test]
    fn test_merge_replaces_subtrees_wholesale() {
        let base = json!({ "hierarchy": { "max_up": 4, "max_down": 2 } });
        let overrides = json!({ "hierarchy": { "max_up": 8 } });
        let merged = merge_options(&base, &overrides);
        assert_eq!(merged.get("hierarchy"), Some(&json!({ "max_up": 8 })));
    }

    #[test]
    fn test_merge_empty_override_is_identity() {
        let base = json!({ "maneuver_penalty": 5.0 });
        assert_eq!(merge_options(&base, &json!({})), base);
    }

    #[test]
    fn test_merge_non_object_override_is_identity() {
        let base = json!({ "maneuver_penalty": 5.0 });
        assert_eq!(merge_options(&base, &json!("nonsense")), base);
    }

    #[test]
    fn test_resolve_missing_configuration() {
        let registry = default_registry();
        let error = resolve_cost_model(
            &registry,
            &json!({ "costing_options": {} }),
            &json!({}),
            "auto",
        )
        .err()
        .expect("resolving an unconfigured method should fail");
        assert!(matches!(error, CostingError::MissingConfiguration(_)));
    }

    #[test]
    fn test_resolve_empty_override_matches_absent_override() {
        let registry = default_registry();
        let config = server_config();
        let without = resolve_cost_model(&registry, &config, &json!({}), "pedestrian")
            .expect("resolving without an override should succeed");
        let with_empty = resolve_cost_model(
            &registry,
            &config,
            &json!({ "costing_options": { "pedestrian": {} } }),
            "pedestrian",
        )
        .expect("resolving with an empty override should succeed");
        let edge = test_edge();
        assert_eq!(without.edge_cost(&edge), with_empty.edge_cost(&edge));
    }

    #[test]
    fn test_resolve_applies_request_override() {
        let registry = default_registry();
        let config = server_config();
        let defaults = resolve_cost_model(&registry, &config, &json!({}), "pedestrian")
            .expect("resolving server defaults should succeed");
        let overridden = resolve_cost_model(
            &registry,
            &config,
            &json!({ "costing_options": { "pedestrian": { "walking_speed": 10.2 } } }),
            "pedestrian",
        )
        .expect("resolving with an override should succeed");
        let edge = test_edge();
        // doubling the walking speed halves the traversal cost
        let ratio = defaults.edge_cost(&edge) / overridden.edge_cost(&edge);
        assert!((ratio - 2.0).abs() < 1e-9);
    }
}
