use serde::{Deserialize, Serialize};

/// identifier of a directed edge in the routing graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u64);

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// the directed edge attributes consumed by this layer. full edge records
/// live in the tile storage behind a [`super::GraphReader`].
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedEdge {
    pub length_meters: f64,
    pub speed_kph: f64,
    /// whether this edge enters a region flagged to discourage through
    /// traffic
    pub not_thru: bool,
}
