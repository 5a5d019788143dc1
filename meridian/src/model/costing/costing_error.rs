/// errors raised while resolving or constructing cost models
#[derive(thiserror::Error, Debug)]
pub enum CostingError {
    /// the registry has no builder for the named method
    #[error("costing method '{0}' is not registered")]
    MethodNotRegistered(String),
    /// server configuration carries no options subtree for the named method
    #[error("no costing method found for '{0}'")]
    MissingConfiguration(String),
    #[error("failure while reading {method} costing configuration: {error}")]
    BuildError { method: String, error: String },
}
