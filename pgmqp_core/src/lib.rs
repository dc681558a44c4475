/*!
A projected gradient method for convex quadratic programs whose feasible region
is a product of weighted simplices.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

The problem is
\\[
\begin{array}{ll}
{\rm minimize} & x^T Q x + q^T x \\\\
{\rm subject \ to} & A x = \mathbb{1} \\\\
& x \succeq 0,
\end{array}
\\]
where the rows of \\(A\\) partition the coordinates of \\(x\\).

This crate is `no_std` and does not rely on dynamic heap allocation:
every routine that needs temporal memory takes a work slice
whose length is given by its `query_worklen`.
*/

#![no_std]

pub mod solver;

//

mod splitm;

//

mod linalg_ex;

pub use linalg_ex::*;

//

mod floatgeneric;

pub use floatgeneric::*;

//

mod matop;

pub use matop::*;

//

mod model;
mod proj_simplex;
mod proj_partition;

pub use model::*;
pub use proj_simplex::*;
pub use proj_partition::*;
