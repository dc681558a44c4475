use std::path::PathBuf;
use thiserror::Error;
use pgmqp_core::solver::SolverError;

/// Errors of loading, saving and setting up a problem.
#[derive(Debug, Error)]
pub enum ProbError
{
    /// File could not be read or written.
    #[error("Io: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV record, or a record which could not be written.
    #[error("Csv: {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Token which is not a number.
    #[error("Parse: {}:{line}: not a number `{token}`", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// Rows of a CSV file with different numbers of columns, or a file without data.
    #[error("Shape: {}: {detail}", .path.display())]
    Shape {
        path: PathBuf,
        detail: String,
    },

    /// Problem data rejected by the solver core.
    #[error(transparent)]
    Solver(#[from] SolverError),
}
