use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::graph::{DirectedEdge, EdgeId, GraphError, GraphReader};

/// in-memory graph reader backed by an edge map, with a controllable memory
/// budget signal and an observable eviction count
pub struct InMemoryGraphReader {
    edges: HashMap<EdgeId, DirectedEdge>,
    over_budget: Rc<Cell<bool>>,
    evictions: Rc<Cell<usize>>,
}

impl InMemoryGraphReader {
    pub fn new(edges: Vec<(EdgeId, DirectedEdge)>) -> InMemoryGraphReader {
        InMemoryGraphReader {
            edges: edges.into_iter().collect(),
            over_budget: Rc::new(Cell::new(false)),
            evictions: Rc::new(Cell::new(0)),
        }
    }

    /// shared handle controlling the over-budget signal
    pub fn over_budget_flag(&self) -> Rc<Cell<bool>> {
        self.over_budget.clone()
    }

    /// shared counter of evictions performed
    pub fn eviction_count(&self) -> Rc<Cell<usize>> {
        self.evictions.clone()
    }
}

impl GraphReader for InMemoryGraphReader {
    fn directed_edge(&self, edge_id: EdgeId) -> Result<&DirectedEdge, GraphError> {
        self.edges
            .get(&edge_id)
            .ok_or(GraphError::EdgeNotFound(edge_id))
    }

    fn over_budget(&self) -> bool {
        self.over_budget.get()
    }

    fn evict(&mut self) {
        self.edges.clear();
        self.evictions.set(self.evictions.get() + 1);
        self.over_budget.set(false);
    }
}
