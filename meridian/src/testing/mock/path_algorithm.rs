use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::model::costing::{CostModelTable, TravelMode};
use crate::model::graph::GraphReader;
use crate::model::location::CorrelatedLocation;
use crate::model::search::{PathAlgorithm, PathEdge};

/// path algorithm returning pre-scripted per-invocation results, with
/// observable invocation and reset counts.
///
/// results are returned in order, one per invocation; once the script is
/// exhausted every further invocation finds no path.
pub struct ScriptedPathAlgorithm {
    results: VecDeque<Vec<PathEdge>>,
    invocations: Rc<Cell<usize>>,
    clears: Rc<Cell<usize>>,
}

impl ScriptedPathAlgorithm {
    pub fn new(results: Vec<Vec<PathEdge>>) -> ScriptedPathAlgorithm {
        ScriptedPathAlgorithm {
            results: results.into(),
            invocations: Rc::new(Cell::new(0)),
            clears: Rc::new(Cell::new(0)),
        }
    }

    /// shared counter of search invocations
    pub fn invocations(&self) -> Rc<Cell<usize>> {
        self.invocations.clone()
    }

    /// shared counter of state resets
    pub fn clears(&self) -> Rc<Cell<usize>> {
        self.clears.clone()
    }
}

impl PathAlgorithm for ScriptedPathAlgorithm {
    fn best_path(
        &mut self,
        _origin: &CorrelatedLocation,
        _destination: &CorrelatedLocation,
        _reader: &dyn GraphReader,
        _cost_models: &CostModelTable,
        _mode: TravelMode,
    ) -> Vec<PathEdge> {
        self.invocations.set(self.invocations.get() + 1);
        self.results.pop_front().unwrap_or_default()
    }

    fn clear(&mut self) {
        self.clears.set(self.clears.get() + 1);
    }
}
