use std::str::FromStr;

use crate::app::worker::WorkerError;

/// the many-to-many request variants produced by the upstream correlation
/// stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixType {
    OneToMany,
    ManyToOne,
    ManyToMany,
}

/// the upstream stage guarantees a valid `matrix_type`; anything else is
/// still rejected rather than defaulted
pub fn invalid_matrix_type(observed: &str) -> WorkerError {
    WorkerError::InvariantViolation(format!(
        "incorrect matrix_type provided: '{}', accepted types are 'one_to_many', 'many_to_one' or 'many_to_many'",
        observed
    ))
}

impl FromStr for MatrixType {
    type Err = WorkerError;

    fn from_str(s: &str) -> Result<MatrixType, WorkerError> {
        match s {
            "one_to_many" => Ok(MatrixType::OneToMany),
            "many_to_one" => Ok(MatrixType::ManyToOne),
            "many_to_many" => Ok(MatrixType::ManyToMany),
            other => Err(invalid_matrix_type(other)),
        }
    }
}

impl std::fmt::Display for MatrixType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatrixType::OneToMany => "one_to_many",
            MatrixType::ManyToOne => "many_to_one",
            MatrixType::ManyToMany => "many_to_many",
        };
        write!(f, "{}", name)
    }
}
