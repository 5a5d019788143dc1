use itertools::Itertools;

use crate::model::costing::{CostModel, TravelMode};

/// fixed-size table of cost models indexed by travel mode. non-multimodal
/// requests populate a single slot; multimodal requests populate all four.
pub struct CostModelTable {
    slots: [Option<Box<dyn CostModel>>; TravelMode::MODE_COUNT],
}

impl Default for CostModelTable {
    fn default() -> Self {
        CostModelTable {
            slots: [None, None, None, None],
        }
    }
}

impl CostModelTable {
    pub fn new() -> CostModelTable {
        Default::default()
    }

    /// place `model` in the slot for `mode`, replacing any model already
    /// present there
    pub fn insert(&mut self, mode: TravelMode, model: Box<dyn CostModel>) {
        self.slots[mode.index()] = Some(model);
    }

    pub fn get(&self, mode: TravelMode) -> Option<&dyn CostModel> {
        self.slots[mode.index()].as_deref()
    }

    pub fn get_mut(&mut self, mode: TravelMode) -> Option<&mut dyn CostModel> {
        match self.slots[mode.index()].as_mut() {
            Some(model) => Some(model.as_mut()),
            None => None,
        }
    }

    pub fn populated_modes(&self) -> Vec<TravelMode> {
        TravelMode::ALL
            .iter()
            .copied()
            .filter(|mode| self.get(*mode).is_some())
            .collect_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
