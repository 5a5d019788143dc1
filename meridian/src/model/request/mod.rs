pub mod context;
pub mod date_time;
pub mod parser;
pub mod request_error;
pub mod units;

pub use context::RequestContext;
pub use date_time::{apply_date_time, DateTimeType};
pub use parser::{parse_request, MULTIMODAL_METHOD};
pub use request_error::RequestError;
pub use units::{DistanceUnits, KILOMETERS_PER_METER, MILES_PER_METER};
