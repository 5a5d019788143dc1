use serde_json::Value;

use crate::model::costing::{costing_ops, CostModelTable, CostingRegistry, TravelMode};
use crate::model::location::{CorrelatedLocation, Location};
use crate::model::request::{apply_date_time, DistanceUnits, RequestContext, RequestError};

/// the composite costing method selecting all underlying modes
pub const MULTIMODAL_METHOD: &str = "multimodal";

/// methods resolved for a multimodal request, one per travel mode slot
const MULTIMODAL_UNDERLYING_METHODS: [&str; 4] = ["auto", "pedestrian", "bicycle", "transit"];

/// validate and normalize a request document into its costing method name
/// and a fully-populated [`RequestContext`].
pub fn parse_request(
    registry: &CostingRegistry,
    server_config: &Value,
    request: &Value,
) -> Result<(String, RequestContext), RequestError> {
    let id = request.get("id").and_then(Value::as_str).map(String::from);
    let units = DistanceUnits::from_request(request.get("units").and_then(Value::as_str));

    let mut locations = parse_locations(request)?;
    let date_time_type = apply_date_time(request, &mut locations)?;
    let correlated = parse_correlated_locations(request, &locations)?;

    let costing_method = request
        .get("costing")
        .and_then(Value::as_str)
        .ok_or(RequestError::MissingCosting)?
        .to_string();

    let mut cost_models = CostModelTable::new();
    let mode = if costing_method == MULTIMODAL_METHOD {
        // multimodal requests construct costing for every mode up front and
        // begin the search as a pedestrian.
        // TODO: allow an initial mode other than pedestrian
        for method in MULTIMODAL_UNDERLYING_METHODS {
            let model =
                costing_ops::resolve_cost_model(registry, server_config, request, method)?;
            cost_models.insert(model.travel_mode(), model);
        }
        TravelMode::Pedestrian
    } else {
        let model =
            costing_ops::resolve_cost_model(registry, server_config, request, &costing_method)?;
        let mode = model.travel_mode();
        cost_models.insert(mode, model);
        mode
    };

    let context = RequestContext {
        id,
        distance_scale: units.scale(),
        units,
        locations,
        correlated,
        mode,
        cost_models,
        costing_method: costing_method.clone(),
        date_time_type,
    };
    Ok((costing_method, context))
}

fn parse_locations(request: &Value) -> Result<Vec<Location>, RequestError> {
    let entries = request
        .get("locations")
        .and_then(Value::as_array)
        .ok_or(RequestError::MissingLocations)?;
    let locations = entries
        .iter()
        .map(Location::from_value)
        .collect::<Result<Vec<_>, String>>()
        .map_err(RequestError::InvalidLocation)?;
    if locations.len() < 2 {
        return Err(RequestError::InsufficientLocations);
    }
    Ok(locations)
}

/// scan `correlated_0`, `correlated_1`, ... in index order, stopping at the
/// first missing index. the upstream correlation stage is required to emit
/// a dense, gapless sequence; no upper bound is imposed here.
fn parse_correlated_locations(
    request: &Value,
    locations: &[Location],
) -> Result<Vec<CorrelatedLocation>, RequestError> {
    let mut correlated = Vec::new();
    for index in 0usize.. {
        let key = format!("correlated_{}", index);
        let entry = match request.get(&key) {
            Some(entry) => entry,
            None => break,
        };
        let location = CorrelatedLocation::from_value(locations, entry).map_err(|error| {
            RequestError::InvalidCorrelatedLocation {
                key: key.clone(),
                error,
            }
        })?;
        correlated.push(location);
    }
    Ok(correlated)
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use super::parse_request;
    use crate::model::costing::{default_registry, TravelMode};
    use crate::model::request::{DistanceUnits, RequestError, KILOMETERS_PER_METER};

    fn server_config() -> Value {
        json!({
            "costing_options": {
                "auto": {},
                "auto_shorter": {},
                "bus": {},
                "bicycle": {},
                "pedestrian": {},
                "transit": {},
                "truck": {}
            }
        })
    }

    fn two_locations() -> Value {
        json!([{ "lat": 1.0, "lon": 1.0 }, { "lat": 2.0, "lon": 2.0 }])
    }

    #[test]
    fn test_minimal_auto_request() {
        let registry = default_registry();
        let request = json!({ "locations": two_locations(), "costing": "auto" });
        let (method, context) = parse_request(&registry, &server_config(), &request)
            .expect("a minimal auto request should parse");
        // ASSERTION 1: the chosen method is returned
        assert_eq!(method, "auto");
        // ASSERTION 2: exactly the native mode slot is populated
        assert_eq!(context.mode, TravelMode::Drive);
        assert_eq!(context.cost_models.populated_modes(), vec![TravelMode::Drive]);
        // ASSERTION 3: defaults apply where the request is silent
        assert_eq!(context.units, DistanceUnits::Kilometers);
        assert_eq!(context.distance_scale, KILOMETERS_PER_METER);
        assert!(context.correlated.is_empty());
        assert_eq!(context.date_time_type, None);
    }

    #[test]
    fn test_missing_locations_field() {
        let registry = default_registry();
        let request = json!({ "costing": "auto" });
        let error = parse_request(&registry, &server_config(), &request)
            .err()
            .expect("a request without locations should fail");
        assert!(matches!(error, RequestError::MissingLocations));
    }

    #[test]
    fn test_single_location_is_insufficient() {
        let registry = default_registry();
        let request = json!({
            "locations": [{ "lat": 1.0, "lon": 1.0 }],
            "costing": "auto"
        });
        let error = parse_request(&registry, &server_config(), &request)
            .err()
            .expect("a single location should fail");
        assert!(matches!(error, RequestError::InsufficientLocations));
        assert!(error.to_string().contains("insufficient number of locations"));
    }

    #[test]
    fn test_unparsable_location_entry() {
        let registry = default_registry();
        let request = json!({
            "locations": [{ "lat": 1.0 }, { "lat": 2.0, "lon": 2.0 }],
            "costing": "auto"
        });
        let error = parse_request(&registry, &server_config(), &request)
            .err()
            .expect("a location without a longitude should fail");
        assert!(matches!(error, RequestError::InvalidLocation(_)));
    }

    #[test]
    fn test_missing_costing_field() {
        let registry = default_registry();
        let request = json!({ "locations": two_locations() });
        let error = parse_request(&registry, &server_config(), &request)
            .err()
            .expect("a request without costing should fail");
        assert!(matches!(error, RequestError::MissingCosting));
        assert_eq!(error.to_string(), "no edge/node costing provided");
    }

    #[test]
    fn test_units_miles() {
        let registry = default_registry();
        let request = json!({
            "locations": two_locations(),
            "costing": "auto",
            "units": "mi"
        });
        let (_, context) = parse_request(&registry, &server_config(), &request)
            .expect("a mile-unit request should parse");
        assert_eq!(context.units, DistanceUnits::Miles);
        assert_eq!(context.distance_scale, 0.000621371);
    }

    #[test]
    fn test_single_costing_uses_native_mode() {
        let registry = default_registry();
        let request = json!({ "locations": two_locations(), "costing": "bicycle" });
        let (method, context) = parse_request(&registry, &server_config(), &request)
            .expect("a bicycle request should parse");
        assert_eq!(method, "bicycle");
        assert_eq!(context.mode, TravelMode::Bicycle);
        assert_eq!(
            context.cost_models.populated_modes(),
            vec![TravelMode::Bicycle]
        );
    }

    #[test]
    fn test_multimodal_populates_all_modes() {
        let registry = default_registry();
        let request = json!({ "locations": two_locations(), "costing": "multimodal" });
        let (method, context) = parse_request(&registry, &server_config(), &request)
            .expect("a multimodal request should parse");
        assert_eq!(method, "multimodal");
        // ASSERTION 1: every travel mode slot is populated
        assert_eq!(context.cost_models.populated_modes(), TravelMode::ALL.to_vec());
        // ASSERTION 2: pedestrian is the starting mode
        assert_eq!(context.mode, TravelMode::Pedestrian);
    }

    #[test]
    fn test_multimodal_requires_every_underlying_configuration() {
        let registry = default_registry();
        let config = json!({ "costing_options": { "auto": {}, "pedestrian": {} } });
        let request = json!({ "locations": two_locations(), "costing": "multimodal" });
        let error = parse_request(&registry, &config, &request)
            .err()
            .expect("multimodal without bicycle/transit configuration should fail");
        assert!(matches!(error, RequestError::Costing(_)));
    }

    #[test]
    fn test_correlated_scan_stops_at_first_gap() {
        let registry = default_registry();
        let correlated = json!({ "location_index": 0, "edges": [{ "id": 7, "dist": 0.5 }] });
        let request = json!({
            "locations": two_locations(),
            "costing": "auto",
            "correlated_0": correlated,
            "correlated_1": correlated,
            // correlated_2 is absent: correlated_3 must not be reached
            "correlated_3": correlated
        });
        let (_, context) = parse_request(&registry, &server_config(), &request)
            .expect("a request with correlated locations should parse");
        assert_eq!(context.correlated.len(), 2);
    }

    #[test]
    fn test_unparsable_correlated_entry() {
        let registry = default_registry();
        let request = json!({
            "locations": two_locations(),
            "costing": "auto",
            "correlated_0": { "location_index": 0, "edges": [] }
        });
        let error = parse_request(&registry, &server_config(), &request)
            .err()
            .expect("a correlated entry without edges should fail");
        match error {
            RequestError::InvalidCorrelatedLocation { key, .. } => {
                assert_eq!(key, "correlated_0")
            }
            other => panic!("expected InvalidCorrelatedLocation, got {:?}", other),
        }
    }

    #[test]
    fn test_correlated_location_carries_date_time_tag() {
        let registry = default_registry();
        let request = json!({
            "locations": two_locations(),
            "costing": "auto",
            "date_time": { "type": 0 },
            "correlated_0": { "location_index": 0, "edges": [{ "id": 7 }] }
        });
        let (_, context) = parse_request(&registry, &server_config(), &request)
            .expect("the request should parse");
        // date-time tagging happens before correlation, so the resolved
        // location carries the tag
        assert_eq!(
            context.correlated[0].location.date_time.as_deref(),
            Some("current")
        );
    }
}
