pub mod edge;
pub mod graph_error;
pub mod reader;

pub use edge::{DirectedEdge, EdgeId};
pub use graph_error::GraphError;
pub use reader::GraphReader;
