use num_traits::{Float, Zero, One};
use crate::solver::{Operator, SolverError};
use crate::{LinAlgEx, MatOp, MatType};

//

/// Quadratic program model
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Holds the data of
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & f(x) = x^T Q x + q^T x \\\\
/// {\rm subject \ to} & A x = \mathbb{1} \\\\
/// & x \succeq 0,
/// \end{array}
/// \\]
/// where
/// * variables \\( x \in \mathbb{R}^n \\)
/// * \\( Q \in \mathcal{S}_{+}^n \\) given as an [`Operator`]
/// * \\( q \in \mathbb{R}^n \\)
/// * \\( A \in \mathbb{R}^{k \times n} \\), \\( 1 \le k \le n \\)
///
/// The right-hand side \\(\mathbb{1}\\) is implicit.
/// Every method borrows the data immutably.
pub struct QpModel<'a, L, OQ>
where L: LinAlgEx, OQ: Operator<L>
{
    op_q: OQ,
    vec_q: &'a [L::F],
    mat_a: MatOp<'a, L>,
}

impl<'a, L, OQ> QpModel<'a, L, OQ>
where L: LinAlgEx, OQ: Operator<L>
{
    /// Creates an instance.
    ///
    /// Returns [`QpModel`] instance, or `Err` with [`SolverError::MalformedInput`]
    /// if the dimensions of \\(Q\\), \\(q\\) and \\(A\\) are inconsistent.
    /// * `op_q` is \\(Q\\).
    /// * `vec_q` is \\(q\\).
    /// * `mat_a` is \\(A\\), which shall be [`MatType::General`].
    pub fn new(op_q: OQ, vec_q: &'a [L::F], mat_a: MatOp<'a, L>) -> Result<Self, SolverError>
    {
        let (n_q, n_q_col) = op_q.size();
        let (k, n_a) = mat_a.typ().size();

        if let MatType::SymPack(_) = mat_a.typ() {
            log::error!("A must be a general matrix");
            return Err(SolverError::MalformedInput);
        }
        if n_q == 0 || n_q != n_q_col {
            log::error!("Q must be square and non-empty: {:?}", op_q.size());
            return Err(SolverError::MalformedInput);
        }
        if vec_q.len() != n_q {
            log::error!("Size mismatch: Q{:?}, q({})", op_q.size(), vec_q.len());
            return Err(SolverError::MalformedInput);
        }
        if n_a != n_q {
            log::error!("Size mismatch: Q{:?}, A{:?}", op_q.size(), mat_a.typ().size());
            return Err(SolverError::MalformedInput);
        }
        if k == 0 || k > n_a {
            log::error!("A must have 1 to {} rows: {}", n_a, k);
            return Err(SolverError::MalformedInput);
        }

        Ok(QpModel {
            op_q, vec_q, mat_a,
        })
    }

    /// Dimensions of the model.
    ///
    /// Returns a tuple of a number of variables \\(n\\) and a number of constraint rows \\(k\\).
    pub fn dim(&self) -> (usize, usize)
    {
        let (k, n) = self.mat_a.typ().size();
        (n, k)
    }

    /// \\(Q\\) of the model.
    pub fn op_q(&self) -> &OQ
    {
        &self.op_q
    }

    /// \\(q\\) of the model.
    pub fn vec_q(&self) -> &[L::F]
    {
        self.vec_q
    }

    /// \\(A\\) of the model.
    pub fn mat_a(&self) -> MatOp<'a, L>
    {
        self.mat_a
    }

    /// Query of a length of work slice.
    ///
    /// Returns a length of work slice that [`QpModel::value`] and [`QpModel::feasible`] require.
    /// * `n` is a number of variables.
    /// * `k` is a number of constraint rows.
    pub fn query_worklen(n: usize, k: usize) -> usize
    {
        n.max(k)
    }

    /// Objective value \\(x^T Q x + q^T x\\).
    ///
    /// * `x` is \\(x\\).
    /// * `work` slice is used for \\(Q x\\), at least \\(n\\) long.
    pub fn value(&self, x: &[L::F], work: &mut [L::F]) -> L::F
    {
        let (n, _) = self.dim();
        assert_eq!(x.len(), n);
        let qx = &mut work[.. n];

        self.op_q.op(L::F::one(), x, L::F::zero(), qx);

        L::dot(x, qx) + L::dot(self.vec_q, x)
    }

    /// Gradient \\(2 Q x + q\\).
    ///
    /// * `x` is \\(x\\).
    /// * `g` is the gradient on exit.
    pub fn gradient(&self, x: &[L::F], g: &mut [L::F])
    {
        let f1 = L::F::one();
        let f2 = f1 + f1;

        self.op_q.op(f2, x, L::F::zero(), g);
        L::add(f1, self.vec_q, g);
    }

    /// Feasibility test.
    ///
    /// Returns `true` iff every entry of \\(A x - \mathbb{1}\\) is within `tol` in absolute value
    /// and every entry of \\(x\\) is nonnegative.
    /// A non-finite \\(x\\) is never feasible.
    /// * `x` is \\(x\\).
    /// * `tol` is the tolerance of the equality constraint.
    /// * `work` slice is used for \\(A x\\), at least \\(k\\) long.
    pub fn feasible(&self, x: &[L::F], tol: L::F, work: &mut [L::F]) -> bool
    {
        let (n, k) = self.dim();
        assert_eq!(x.len(), n);

        let f0 = L::F::zero();
        let f1 = L::F::one();

        if !L::is_finite(x) || x.iter().any(|e| *e < f0) {
            return false;
        }

        let ax = &mut work[.. k];
        self.mat_a.op(f1, x, f0, ax);

        ax.iter().all(|e| (*e - f1).abs() <= tol)
    }
}

//
