/*!
Quadratic programs over products of weighted simplices, solved by [`pgmqp_core`].

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate provides the problem [`ProbPGM`] which owns its data and work memory,
together with loading/saving it as CSV files, random instances and starting points.

# General usage

1. Construct \\(Q\\), \\(q\\) and \\(A\\) using [`MatBuild`], load them by [`ProbPGM::load`],
   or generate them by [`ProbPGM::random`].
   Refer to [`ProbPGM`] about the mathematical formulation.
1. Get a feasible starting point by [`ProbPGM::initial_point`] with an [`InitialPoint`] oracle.
   Any other point is also accepted, since the solver projects it first.
1. Create a [`prelude::Solver`] instance and optionally set its parameters.
1. Feed the problem to the solver and invoke [`prelude::Solver::solve`] to get a resulted solution.

# Examples

Two blocks \\(\lbrace x_0, x_1 \rbrace\\) and \\(\lbrace x_2 \rbrace\\):
\\[
\begin{array}{ll}
{\rm minimize} & x_0^2 + x_1^2 + x_2^2 \\\\
{\rm subject \ to} & x_0 + x_1 = 1 \\\\
& x_2 = 1 \\\\
& x \succeq 0.
\end{array}
\\]

The first block is balanced at \\(x_0 = x_1 = 1/2\\) and the second block is fixed,
hence the optimal value is \\(3/2\\).

```
use float_eq::assert_float_eq;
use pgmqp::prelude::*;
use pgmqp::*;

//env_logger::init(); // Use any logger crate as `pgmqp` uses `log` crate.

type La = FloatGeneric<f64>;
type AMatBuild = MatBuild<La>;
type AProbPGM = ProbPGM<La>;
type ASolver = Solver<La>;

let n = 3;
let k = 2;

let mut sym_q = AMatBuild::new(MatType::SymPack(n));
for i in 0.. n {
    sym_q[(i, i)] = 1.;
}

let vec_q = AMatBuild::new(MatType::General(n, 1));

let mat_a = AMatBuild::new(MatType::General(k, n))
            .iter_rowmaj(&[
                1., 1., 0.,
                0., 0., 1.,
            ]);

let s = ASolver::new().par(|p| {
   p.max_iter = 100;
});
let mut pgm = AProbPGM::new(sym_q, vec_q, mat_a, s.par.eps_zero).unwrap();
let x0 = pgm.initial_point(&MinSumVertex, s.par.eps_feas).unwrap();
let rslt = s.solve(pgm.problem().unwrap(), &x0).unwrap();

assert!(rslt.feasible);
assert_float_eq!(rslt.x, [0.5, 0.5, 1.].as_ref(), abs_all <= 1e-9);
assert_float_eq!(rslt.value, 1.5, abs <= 1e-9);
```
*/

mod matbuild;

pub use matbuild::*;

//

mod prob_error;
mod problem;
mod init;

pub use prob_error::*;
pub use problem::*;
pub use init::*;

//

pub mod csv_io;
mod gen;

//

/// Prelude
pub mod prelude
{
   pub use pgmqp_core::solver::{Solver, SolverError, SolverParam, Status};
   pub use pgmqp_core::{FloatGeneric, MatType};
}
