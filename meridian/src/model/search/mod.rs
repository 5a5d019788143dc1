pub mod path_algorithm;
pub mod path_ops;
pub mod search_error;
pub mod through_location;

pub use path_algorithm::{PathAlgorithm, PathEdge, SearchAlgorithms};
pub use path_ops::{find_best_path, MAX_SEARCH_PASSES, RELAXED_HIERARCHY_FACTOR};
pub use search_error::SearchError;
pub use through_location::adjust_origin;
