use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::graph::EdgeId;
use crate::model::location::Location;

/// a graph edge candidate a waypoint snaps to. `percent_along` locates the
/// snap point along the directed edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEdge {
    pub id: EdgeId,
    #[serde(rename = "dist", default)]
    pub percent_along: f64,
}

/// wire form of one `correlated_N` entry, resolved against the parsed
/// locations list
#[derive(Deserialize)]
struct CorrelatedEntry {
    #[serde(default)]
    location_index: usize,
    edges: Vec<CandidateEdge>,
    #[serde(default)]
    node: bool,
}

/// a waypoint resolved to specific candidate graph edges.
///
/// `node_snapped` records whether the point sits exactly on a graph node,
/// which governs how the following leg's origin edges may be narrowed.
#[derive(Debug, Clone)]
pub struct CorrelatedLocation {
    pub location: Location,
    pub edges: Vec<CandidateEdge>,
    pub node_snapped: bool,
}

impl CorrelatedLocation {
    /// resolve one `correlated_N` entry against the already-parsed locations
    pub fn from_value(locations: &[Location], value: &Value) -> Result<CorrelatedLocation, String> {
        let entry: CorrelatedEntry =
            serde_json::from_value(value.clone()).map_err(|e| e.to_string())?;
        let location = locations.get(entry.location_index).ok_or_else(|| {
            format!(
                "location_index {} out of range for {} locations",
                entry.location_index,
                locations.len()
            )
        })?;
        if entry.edges.is_empty() {
            return Err(String::from("correlated location has no candidate edges"));
        }
        Ok(CorrelatedLocation {
            location: location.clone(),
            edges: entry.edges,
            node_snapped: entry.node,
        })
    }
}
