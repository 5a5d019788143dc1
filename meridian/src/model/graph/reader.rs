use crate::model::graph::{DirectedEdge, EdgeId, GraphError};

/// read access to the graph tile storage, one instance per worker.
///
/// this layer only reads edge attributes and observes the cache memory
/// budget; tile contents are never mutated here. eviction is triggered by
/// worker cleanup when the cache reports itself over budget.
pub trait GraphReader {
    fn directed_edge(&self, edge_id: EdgeId) -> Result<&DirectedEdge, GraphError>;

    /// whether the tile cache has grown past its memory budget
    fn over_budget(&self) -> bool;

    /// drop cached tiles
    fn evict(&mut self);
}
