use num_traits::Zero;
use pgmqp_core::solver::{Solver, SolverError};
use pgmqp_core::{LinAlgEx, MatOp, MatType, QpModel, ProjPartition};
use crate::{MatBuild, InitialPoint};

//

/// QP over a product of weighted simplices
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & x^T Q x + q^T x \\\\
/// {\rm subject \ to} & A x = \mathbb{1} \\\\
/// & x \succeq 0,
/// \end{array}
/// \\]
/// where
/// * variables \\( x \in \mathbb{R}^n \\)
/// * \\( Q \in \mathcal{S}_{+}^n \\)
/// * \\( q \in \mathbb{R}^n \\)
/// * \\( A \in \mathbb{R}_{+}^{k \times n} \\) whose rows partition the coordinates of \\(x\\).
///
/// [`ProbPGM`] owns the data and every work memory,
/// and lends them to [`pgmqp_core::solver::Solver::solve`] through [`ProbPGM::problem`].
pub struct ProbPGM<L: LinAlgEx>
{
    sym_q: MatBuild<L>,
    vec_q: MatBuild<L>,
    mat_a: MatBuild<L>,
    eps_zero: L::F,

    w_proj: Vec<L::F>,
    w_idx: Vec<usize>,
    w_solver: Vec<L::F>,
}

impl<L: LinAlgEx> ProbPGM<L>
{
    /// Creates a problem with given data.
    ///
    /// Returns a [`ProbPGM`] instance, or `Err` with
    /// * [`SolverError::MalformedInput`] on inconsistent dimensions,
    /// * other [`SolverError`] of [`pgmqp_core::ProjPartition::new`] if \\(A\\) is not a partition.
    ///
    /// * `sym_q` is \\(Q\\) which shall belong to [`MatType::SymPack`].
    /// * `vec_q` is \\(q\\), a one-column matrix.
    /// * `mat_a` is \\(A\\).
    /// * `eps_zero` should be the same value as [`pgmqp_core::solver::SolverParam::eps_zero`].
    pub fn new(sym_q: MatBuild<L>, vec_q: MatBuild<L>, mat_a: MatBuild<L>, eps_zero: L::F) -> Result<Self, SolverError>
    {
        if !sym_q.is_sympack() {
            log::error!("Q must be symmetric packed");
            return Err(SolverError::MalformedInput);
        }
        if vec_q.typ() != MatType::General(vec_q.size().0, 1) {
            log::error!("q must be a column vector: {:?}", vec_q.size());
            return Err(SolverError::MalformedInput);
        }

        QpModel::new(sym_q.as_op(), vec_q.as_ref(), mat_a.as_op())?;

        let n = sym_q.size().0;
        let w_proj = vec![L::F::zero(); ProjPartition::<L>::query_worklen(n)];
        let w_idx = vec![0; ProjPartition::<L>::query_idxlen(n)];

        let mut prob = ProbPGM {
            sym_q, vec_q, mat_a, eps_zero,
            w_proj, w_idx,
            w_solver: Vec::new(),
        };

        // partition check
        ProjPartition::new(prob.mat_a.as_op(), &mut prob.w_proj, &mut prob.w_idx, eps_zero)?;

        Ok(prob)
    }

    /// Dimensions of the problem.
    ///
    /// Returns a tuple of a number of variables \\(n\\) and a number of constraint rows \\(k\\).
    pub fn dim(&self) -> (usize, usize)
    {
        (self.mat_a.size().1, self.mat_a.size().0)
    }

    /// \\(Q\\) of the problem.
    pub fn sym_q(&self) -> &MatBuild<L>
    {
        &self.sym_q
    }

    /// \\(q\\) of the problem.
    pub fn vec_q(&self) -> &MatBuild<L>
    {
        &self.vec_q
    }

    /// \\(A\\) of the problem.
    pub fn mat_a(&self) -> &MatBuild<L>
    {
        &self.mat_a
    }

    /// Borrows the problem as a [`QpModel`].
    pub fn model(&self) -> Result<QpModel<'_, L, MatOp<'_, L>>, SolverError>
    {
        QpModel::new(self.sym_q.as_op(), self.vec_q.as_ref(), self.mat_a.as_op())
    }

    /// Starting point by an oracle.
    ///
    /// Returns the point given by `oracle`, or `Err` with
    /// [`SolverError::InfeasibleStart`] if it is not feasible within `eps_feas`.
    /// * `oracle` is the [`InitialPoint`] oracle.
    /// * `eps_feas` should be the same value as [`pgmqp_core::solver::SolverParam::eps_feas`].
    pub fn initial_point<I: InitialPoint<L> + ?Sized>(&self, oracle: &I, eps_feas: L::F) -> Result<Vec<L::F>, SolverError>
    {
        let (n, k) = self.dim();

        let mut x = vec![L::F::zero(); n];
        oracle.initial_point(self.mat_a.as_op(), &mut x)?;

        let mut work = vec![L::F::zero(); QpModel::<L, MatOp<L>>::query_worklen(n, k)];
        if !self.model()?.feasible(&x, eps_feas, &mut work) {
            log::error!("initial point is not feasible");
            return Err(SolverError::InfeasibleStart);
        }

        Ok(x)
    }

    /// Generates the problem data structures to be fed to [`pgmqp_core::solver::Solver::solve`].
    ///
    /// Returns a tuple of a model, a projector and a work slice.
    pub fn problem(&mut self) -> Result<(QpModel<'_, L, MatOp<'_, L>>, ProjPartition<'_, L>, &mut[L::F]), SolverError>
    {
        let (n, k) = self.dim();
        let f0 = L::F::zero();

        self.w_solver.resize(Solver::<L>::query_worklen(n, k), f0);

        let model = QpModel::new(self.sym_q.as_op(), self.vec_q.as_ref(), self.mat_a.as_op())?;
        let proj = ProjPartition::new(self.mat_a.as_op(), &mut self.w_proj, &mut self.w_idx, self.eps_zero)?;

        Ok((model, proj, self.w_solver.as_mut()))
    }
}
