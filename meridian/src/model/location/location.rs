use geo_types::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// sentinel `date_time` tag marking a current-time departure
pub const CURRENT_DATE_TIME: &str = "current";

/// how a waypoint participates in the route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    #[default]
    Break,
    Through,
}

/// an input waypoint: a coordinate plus optional annotations. `date_time`
/// is attached after parsing when the request carries departure or arrival
/// time semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type", default)]
    pub stop_type: StopType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl Location {
    /// parse one entry of the request `locations` array, validating
    /// coordinate ranges
    pub fn from_value(value: &Value) -> Result<Location, String> {
        let location: Location =
            serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
        if !(-90.0..=90.0).contains(&location.lat) {
            return Err(format!("latitude {} out of range", location.lat));
        }
        if !(-180.0..=180.0).contains(&location.lon) {
            return Err(format!("longitude {} out of range", location.lon));
        }
        Ok(location)
    }

    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{Location, StopType};

    #[test]
    fn test_minimal_location_parses_with_defaults() {
        let location = Location::from_value(&json!({ "lat": 40.7, "lon": -111.9 }))
            .expect("a bare coordinate should parse");
        assert_eq!(location.stop_type, StopType::Break);
        assert_eq!(location.date_time, None);
        assert_eq!(location.point().x(), -111.9);
        assert_eq!(location.point().y(), 40.7);
    }

    #[test]
    fn test_through_stop_type_parses() {
        let location =
            Location::from_value(&json!({ "lat": 40.7, "lon": -111.9, "type": "through" }))
                .expect("a through waypoint should parse");
        assert_eq!(location.stop_type, StopType::Through);
    }

    #[test]
    fn test_missing_coordinate_is_rejected() {
        assert!(Location::from_value(&json!({ "lat": 40.7 })).is_err());
    }

    #[test]
    fn test_out_of_range_coordinate_is_rejected() {
        let error = Location::from_value(&json!({ "lat": 91.0, "lon": 0.0 }))
            .err()
            .expect("latitude above 90 should be rejected");
        assert!(error.contains("out of range"));
    }
}
