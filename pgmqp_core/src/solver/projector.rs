//! Euclidean projector

use crate::solver::{LinAlg, SolverError};

/// Projector trait
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
pub trait Projector<L: LinAlg>
{
    /// Calculates \\(\Pi_\mathcal{C}(x)\\), that is euclidean projection of \\(x\\) onto a closed convex set \\(\mathcal{C}\\).
    /// This is called by [`crate::solver::Solver::solve`] once on the starting point
    /// and once per iteration on the gradient step \\(x - \nabla f(x)\\).
    ///
    /// Returns `Ok`, or `Err` if something fails.
    /// * `x` is \\(x\\), a vector to be projected before entry, and shall be replaced with the projected vector on exit.
    fn proj(&mut self, x: &mut [L::F]) -> Result<(), SolverError>;
}
