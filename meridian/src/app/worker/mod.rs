pub mod app;
pub mod config;
pub mod handlers;
pub mod matrix;
pub mod response;
pub mod worker_error;

pub use app::RouteWorker;
pub use config::WorkerConfig;
pub use handlers::{MatrixHandler, OptimizedTripHandler, TripHandler};
pub use matrix::MatrixType;
pub use response::Response;
pub use worker_error::WorkerError;
