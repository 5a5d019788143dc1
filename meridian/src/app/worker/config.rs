use serde::{Deserialize, Serialize};

/// worker service tuning read from the optional `service` subtree of the
/// server configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WorkerConfig {
    /// seconds after which a route request is logged as long-running
    pub long_request_route: f64,
    /// seconds after which a matrix request is logged as long-running
    pub long_request_matrix: f64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        WorkerConfig {
            long_request_route: 110.0,
            long_request_matrix: 15.0,
        }
    }
}
