/// Solver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError
{
    /// Dimensions of \\(Q\\), \\(q\\), \\(A\\) or a vector are inconsistent, or \\(Q\\) is not symmetric.
    MalformedInput,
    /// Rows of \\(A\\) do not partition the coordinates.
    NotPartition,
    /// Parameter out of its domain.
    InvalidParam,
    /// Weight vector with a negative entry or without any positive entry.
    InvalidWeight,
    /// NaN or infinity encountered.
    NumericalFailure,
    /// Line search called with a direction which is not a descent one.
    NonDescent,
    /// Step size shrank to its floor without sufficient decrease.
    LineSearchFailure,
    /// Initial point is not feasible.
    InfeasibleStart,
    /// Shortage of work slice length.
    WorkShortage,
}

/// Category of [`SolverError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory
{
    /// Problem data or buffers rejected when they are handed over.
    MalformedInput,
    /// Solver parameters rejected before iterating.
    Parameter,
    /// Fatal numerical fault; no partial result is available.
    NumericalDegeneracy,
}

impl SolverError
{
    /// Category of the error.
    pub fn category(&self) -> ErrorCategory
    {
        match self {
            SolverError::MalformedInput
            | SolverError::NotPartition
            | SolverError::WorkShortage => ErrorCategory::MalformedInput,
            SolverError::InvalidParam => ErrorCategory::Parameter,
            SolverError::InvalidWeight
            | SolverError::NumericalFailure
            | SolverError::NonDescent
            | SolverError::LineSearchFailure
            | SolverError::InfeasibleStart => ErrorCategory::NumericalDegeneracy,
        }
    }
}

impl core::fmt::Display for SolverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", match &self {
            SolverError::MalformedInput    => "MalformedInput: inconsistent dimensions or asymmetric Q",
            SolverError::NotPartition      => "NotPartition: rows of A do not partition the coordinates",
            SolverError::InvalidParam      => "InvalidParam: solver parameter out of its domain",
            SolverError::InvalidWeight     => "InvalidWeight: negative weight or no positive weight",
            SolverError::NumericalFailure  => "NumericalFailure: NaN or infinity encountered",
            SolverError::NonDescent        => "NonDescent: direction is not a descent one",
            SolverError::LineSearchFailure => "LineSearchFailure: step size shrank to its floor",
            SolverError::InfeasibleStart   => "InfeasibleStart: initial point is not feasible",
            SolverError::WorkShortage      => "WorkShortage: shortage of work slice length",
        })
    }
}

//

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for SolverError {}

//

#[cfg(test)]
mod tests
{
    use crate::solver::{SolverError, ErrorCategory};

    #[test]
    fn test_category()
    {
        assert_eq!(SolverError::NotPartition.category(), ErrorCategory::MalformedInput);
        assert_eq!(SolverError::WorkShortage.category(), ErrorCategory::MalformedInput);
        assert_eq!(SolverError::InvalidParam.category(), ErrorCategory::Parameter);
        assert_eq!(SolverError::InvalidWeight.category(), ErrorCategory::NumericalDegeneracy);
        assert_eq!(SolverError::InfeasibleStart.category(), ErrorCategory::NumericalDegeneracy);
    }
}
