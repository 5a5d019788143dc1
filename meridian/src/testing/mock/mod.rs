//! test doubles for the worker's external collaborators. usable by
//! downstream crates embedding the worker as well as this crate's own
//! tests.

pub mod cost_model;
pub mod graph_reader;
pub mod handlers;
pub mod path_algorithm;

pub use cost_model::TestCostModel;
pub use graph_reader::InMemoryGraphReader;
pub use handlers::{DispatchRecord, FailingTripHandler, RecordingHandlers};
pub use path_algorithm::ScriptedPathAlgorithm;
