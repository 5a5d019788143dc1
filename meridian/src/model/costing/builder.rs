use serde_json::Value;

use crate::model::costing::{CostModel, CostingError};

/// builds a cost model instance from a merged costing options subtree.
/// one builder per costing method, registered at startup in a
/// [`super::CostingRegistry`].
pub trait CostModelBuilder {
    fn build(&self, parameters: &Value) -> Result<Box<dyn CostModel>, CostingError>;
}
