use serde::{Deserialize, Serialize};

pub const KILOMETERS_PER_METER: f64 = 0.001;
pub const MILES_PER_METER: f64 = 0.000621371;

/// distance units requested for downstream narration. carried through the
/// request context; never consulted by the search itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistanceUnits {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnits {
    /// scale factor from meters to these units
    pub fn scale(&self) -> f64 {
        match self {
            DistanceUnits::Kilometers => KILOMETERS_PER_METER,
            DistanceUnits::Miles => MILES_PER_METER,
        }
    }

    /// read an optional `units` request field. anything other than `"mi"`,
    /// including an absent field, selects kilometers.
    pub fn from_request(units: Option<&str>) -> DistanceUnits {
        match units {
            Some("mi") => DistanceUnits::Miles,
            _ => DistanceUnits::Kilometers,
        }
    }
}
