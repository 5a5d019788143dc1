use serde::{Deserialize, Serialize};

/// the fixed set of travel categories a cost model can score for. the
/// variant order doubles as the slot index in a
/// [`super::CostModelTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Drive,
    Pedestrian,
    Bicycle,
    Transit,
}

impl TravelMode {
    /// number of travel mode slots in a cost model table
    pub const MODE_COUNT: usize = 4;

    pub const ALL: [TravelMode; TravelMode::MODE_COUNT] = [
        TravelMode::Drive,
        TravelMode::Pedestrian,
        TravelMode::Bicycle,
        TravelMode::Transit,
    ];

    pub fn index(&self) -> usize {
        match self {
            TravelMode::Drive => 0,
            TravelMode::Pedestrian => 1,
            TravelMode::Bicycle => 2,
            TravelMode::Transit => 3,
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TravelMode::Drive => "drive",
            TravelMode::Pedestrian => "pedestrian",
            TravelMode::Bicycle => "bicycle",
            TravelMode::Transit => "transit",
        };
        write!(f, "{}", name)
    }
}
