use crate::model::costing::{CostModelTable, TravelMode};
use crate::model::graph::{EdgeId, GraphReader};
use crate::model::location::CorrelatedLocation;
use crate::model::request::{DateTimeType, MULTIMODAL_METHOD};

/// one edge of a computed path
#[derive(Debug, Clone, PartialEq)]
pub struct PathEdge {
    pub edge_id: EdgeId,
    pub mode: TravelMode,
    pub elapsed_seconds: f64,
}

/// a shortest-path search over the routing graph.
///
/// implementations live outside this crate. an empty result means no path
/// was found on that invocation, never a partial path. instances accumulate
/// internal search state across invocations and must be [`clear`]ed between
/// requests.
///
/// [`clear`]: PathAlgorithm::clear
pub trait PathAlgorithm {
    fn best_path(
        &mut self,
        origin: &CorrelatedLocation,
        destination: &CorrelatedLocation,
        reader: &dyn GraphReader,
        cost_models: &CostModelTable,
        mode: TravelMode,
    ) -> Vec<PathEdge>;

    /// drop all internal search state, returning the algorithm to its
    /// initial empty condition
    fn clear(&mut self);
}

/// the algorithm variants held by a worker, one instance each, reused
/// across requests and reset between them
pub struct SearchAlgorithms {
    pub astar: Box<dyn PathAlgorithm>,
    pub bidirectional_astar: Box<dyn PathAlgorithm>,
    pub multimodal_astar: Box<dyn PathAlgorithm>,
}

impl SearchAlgorithms {
    pub fn clear_all(&mut self) {
        self.astar.clear();
        self.bidirectional_astar.clear();
        self.multimodal_astar.clear();
    }

    /// select the variant for a request: multimodal costing requires the
    /// multimodal search, timestamped requests pin the unidirectional
    /// search, everything else takes the bidirectional search
    pub fn for_request(
        &mut self,
        costing_method: &str,
        date_time_type: Option<DateTimeType>,
    ) -> &mut dyn PathAlgorithm {
        if costing_method == MULTIMODAL_METHOD {
            self.multimodal_astar.as_mut()
        } else if date_time_type.is_some() {
            self.astar.as_mut()
        } else {
            self.bidirectional_astar.as_mut()
        }
    }
}
