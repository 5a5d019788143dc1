use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::app::worker::{
    MatrixHandler, MatrixType, OptimizedTripHandler, Response, TripHandler, WorkerError,
};
use crate::model::costing::TravelMode;
use crate::model::graph::GraphReader;
use crate::model::request::{DateTimeType, RequestContext};
use crate::model::search::SearchAlgorithms;

/// record of one dispatch observed by [`RecordingHandlers`]
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchRecord {
    Matrix {
        matrix_type: MatrixType,
        costing_method: String,
    },
    OptimizedTrip {
        costing_method: String,
        correlated_count: usize,
    },
    Trip {
        costing_method: String,
        date_time_type: Option<DateTimeType>,
        populated_modes: Vec<TravelMode>,
    },
}

/// handler set that records every dispatch and returns an empty 200
/// response. clone it before handing it to the worker to keep a shared view
/// of the records.
#[derive(Clone)]
pub struct RecordingHandlers {
    records: Rc<RefCell<Vec<DispatchRecord>>>,
}

impl RecordingHandlers {
    pub fn new() -> RecordingHandlers {
        RecordingHandlers {
            records: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn records(&self) -> Vec<DispatchRecord> {
        self.records.borrow().clone()
    }
}

impl Default for RecordingHandlers {
    fn default() -> Self {
        RecordingHandlers::new()
    }
}

impl MatrixHandler for RecordingHandlers {
    fn matrix(
        &mut self,
        matrix_type: MatrixType,
        costing_method: &str,
        _request: &Value,
        _context: &mut RequestContext,
        _algorithms: &mut SearchAlgorithms,
        _reader: &dyn GraphReader,
    ) -> Result<Response, WorkerError> {
        self.records.borrow_mut().push(DispatchRecord::Matrix {
            matrix_type,
            costing_method: costing_method.to_string(),
        });
        Ok(Response::ok(String::from("{}")))
    }
}

impl OptimizedTripHandler for RecordingHandlers {
    fn optimized_trip(
        &mut self,
        costing_method: &str,
        _raw_body: &str,
        context: &mut RequestContext,
        _algorithms: &mut SearchAlgorithms,
        _reader: &dyn GraphReader,
    ) -> Result<Response, WorkerError> {
        self.records
            .borrow_mut()
            .push(DispatchRecord::OptimizedTrip {
                costing_method: costing_method.to_string(),
                correlated_count: context.correlated.len(),
            });
        Ok(Response::ok(String::from("{}")))
    }
}

impl TripHandler for RecordingHandlers {
    fn trip(
        &mut self,
        costing_method: &str,
        _raw_body: &str,
        date_time_type: Option<DateTimeType>,
        context: &mut RequestContext,
        _algorithms: &mut SearchAlgorithms,
        _reader: &dyn GraphReader,
    ) -> Result<Response, WorkerError> {
        self.records.borrow_mut().push(DispatchRecord::Trip {
            costing_method: costing_method.to_string(),
            date_time_type,
            populated_modes: context.cost_models.populated_modes(),
        });
        Ok(Response::ok(String::from("{}")))
    }
}

/// trip handler that always fails, for exercising the worker's error
/// classification
pub struct FailingTripHandler {
    pub message: String,
}

impl TripHandler for FailingTripHandler {
    fn trip(
        &mut self,
        _costing_method: &str,
        _raw_body: &str,
        _date_time_type: Option<DateTimeType>,
        _context: &mut RequestContext,
        _algorithms: &mut SearchAlgorithms,
        _reader: &dyn GraphReader,
    ) -> Result<Response, WorkerError> {
        Err(WorkerError::InvariantViolation(self.message.clone()))
    }
}
