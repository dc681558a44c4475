mod linalg;
mod operator;
mod projector;
mod solver_error;
mod linesearch;
mod solver;

pub use linalg::*;
pub use operator::*;
pub use projector::*;
pub use solver_error::*;
pub use linesearch::*;
pub use solver::*;
