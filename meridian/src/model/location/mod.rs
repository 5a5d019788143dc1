pub mod correlated;
pub mod location;

pub use correlated::{CandidateEdge, CorrelatedLocation};
pub use location::{Location, StopType, CURRENT_DATE_TIME};
