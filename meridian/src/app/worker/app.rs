use std::str::FromStr;
use std::time::Instant;

use serde_json::Value;

use crate::app::worker::matrix::invalid_matrix_type;
use crate::app::worker::{
    MatrixHandler, MatrixType, OptimizedTripHandler, Response, TripHandler, WorkerConfig,
    WorkerError,
};
use crate::model::costing::{default_registry, CostingRegistry};
use crate::model::graph::GraphReader;
use crate::model::request::parse_request;
use crate::model::search::SearchAlgorithms;

/// which result-builder branch served a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchKind {
    Matrix,
    OptimizedTrip,
    Trip,
}

/// the route-computation worker.
///
/// parses a routing request, populates its per-mode cost models, and
/// dispatches among the matrix, optimized-trip, and point-to-point
/// variants. one instance serves one request at a time, synchronously, to
/// completion; state reused across requests (the search algorithm
/// instances and the tile cache) is reset by [`RouteWorker::cleanup`] after
/// every request, success or failure.
pub struct RouteWorker {
    config: Value,
    worker_config: WorkerConfig,
    registry: CostingRegistry,
    reader: Box<dyn GraphReader>,
    algorithms: SearchAlgorithms,
    matrix_handler: Box<dyn MatrixHandler>,
    optimized_handler: Box<dyn OptimizedTripHandler>,
    trip_handler: Box<dyn TripHandler>,
}

impl RouteWorker {
    pub fn new(
        config: Value,
        reader: Box<dyn GraphReader>,
        algorithms: SearchAlgorithms,
        matrix_handler: Box<dyn MatrixHandler>,
        optimized_handler: Box<dyn OptimizedTripHandler>,
        trip_handler: Box<dyn TripHandler>,
    ) -> Result<RouteWorker, WorkerError> {
        let worker_config = match config.get("service") {
            Some(subtree) => serde_json::from_value(subtree.clone())
                .map_err(|e| WorkerError::Configuration(e.to_string()))?,
            None => WorkerConfig::default(),
        };
        Ok(RouteWorker {
            config,
            worker_config,
            registry: default_registry(),
            reader,
            algorithms,
            matrix_handler,
            optimized_handler,
            trip_handler,
        })
    }

    /// handle one raw request body to completion.
    ///
    /// failures never escape this boundary; they are converted to
    /// classified responses, and the worker-scoped search state is reset
    /// regardless of the outcome.
    pub fn handle(&mut self, raw_body: &str) -> Response {
        let started = Instant::now();
        let response = match self.handle_request(raw_body) {
            Ok((response, kind)) => {
                let elapsed = started.elapsed().as_secs_f64();
                let threshold = match kind {
                    DispatchKind::Matrix => self.worker_config.long_request_matrix,
                    _ => self.worker_config.long_request_route,
                };
                if elapsed > threshold {
                    log::warn!("long request ({:.3}s): {}", elapsed, raw_body);
                }
                response
            }
            Err(error) => classify_error(&error),
        };
        self.cleanup();
        response
    }

    fn handle_request(&mut self, raw_body: &str) -> Result<(Response, DispatchKind), WorkerError> {
        let request: Value = serde_json::from_str(raw_body)
            .map_err(|e| WorkerError::MalformedInput(e.to_string()))?;
        let request_id = request.get("id").and_then(Value::as_str).unwrap_or("-");
        log::info!("got route request {}", request_id);

        let (costing_method, mut context) =
            parse_request(&self.registry, &self.config, &request)?;

        if let Some(matrix_field) = request.get("matrix_type") {
            let matrix_type = matrix_field
                .as_str()
                .ok_or_else(|| invalid_matrix_type(&matrix_field.to_string()))
                .and_then(MatrixType::from_str)?;
            log::info!("matrix_type::{}", matrix_type);
            let response = self.matrix_handler.matrix(
                matrix_type,
                &costing_method,
                &request,
                &mut context,
                &mut self.algorithms,
                self.reader.as_ref(),
            )?;
            return Ok((response, DispatchKind::Matrix));
        }

        if request
            .get("optimized")
            .and_then(Value::as_bool)
            .unwrap_or(false)
        {
            let response = self.optimized_handler.optimized_trip(
                &costing_method,
                raw_body,
                &mut context,
                &mut self.algorithms,
                self.reader.as_ref(),
            )?;
            return Ok((response, DispatchKind::OptimizedTrip));
        }

        let date_time_type = context.date_time_type;
        let response = self.trip_handler.trip(
            &costing_method,
            raw_body,
            date_time_type,
            &mut context,
            &mut self.algorithms,
            self.reader.as_ref(),
        )?;
        Ok((response, DispatchKind::Trip))
    }

    /// reset worker-scoped search state and observe the tile cache budget.
    /// runs unconditionally after every request; the request context itself
    /// is constructed fresh per request and dropped with it.
    pub fn cleanup(&mut self) {
        self.algorithms.clear_all();
        if self.reader.over_budget() {
            self.reader.evict();
        }
    }
}

/// the single translation from error kind to response. the malformed-input
/// detail is logged here and never echoed to the caller.
fn classify_error(error: &WorkerError) -> Response {
    if let WorkerError::MalformedInput(detail) = error {
        log::error!("500::{}", detail);
        return Response::internal_error();
    }
    log::warn!("400::{}", error);
    Response::bad_request(error.to_string())
}
