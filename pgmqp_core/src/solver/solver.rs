//! Projected gradient method driver

use num_traits::{Float, Zero, One};
use core::marker::PhantomData;
use core::fmt::{Debug, LowerExp};
use crate::solver::{LinAlg, Operator, Projector, LineSearch, SolverError};
use crate::{LinAlgEx, QpModel};
use crate::splitm_mut;

//

/// Solver parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverParam<F: Float>
{
    /// Max iteration number, which shall be positive.
    pub max_iter: usize,
    /// Initial step size \\(\alpha_0 > 0\\) of the line search.
    pub alpha_init: F,
    /// Shrink factor \\(\tau \in (0, 1)\\) of the line search.
    pub tau: F,
    /// Sufficient-decrease factor \\(\beta \in (0, 1)\\) of the line search.
    pub beta: F,
    /// Tolerance of the norm of the projected direction to stop as converged.
    pub eps_conv: F,
    /// Tolerance of the equality constraint in the feasibility check of the result.
    pub eps_feas: F,
    /// Tolerance of small values regarded as zero, at the breakpoints of the simplex projection.
    pub eps_zero: F,
    /// Floor of the step size of the line search.
    pub eps_step: F,
    /// Period of iterations to output progress log(for debug/trace level).
    pub log_period: usize,
}

impl<F: Float> Default for SolverParam<F>
{
    fn default() -> Self
    {
        let ten = F::from(10).unwrap();

        SolverParam {
            max_iter: 1000,
            alpha_init: F::one(),
            tau: F::from(0.5).unwrap(),
            beta: F::from(0.5).unwrap(),
            eps_conv: ten.powi(-12),
            eps_feas: ten.powi(-12),
            eps_zero: ten.powi(-12),
            eps_step: F::epsilon(),
            log_period: 10_000,
        }
    }
}

//

/// Termination status of [`Solver::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status
{
    /// The projected direction vanished within [`SolverParam::eps_conv`],
    /// or its descent \\(\nabla f^T d\\) fell below the rounding level of the gradient.
    Converged,
    /// [`SolverParam::max_iter`] iterations were carried out.
    IterationLimit,
}

/// Result of [`Solver::solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<'a, F: Float>
{
    /// Final iterate \\(x\\).
    pub x: &'a [F],
    /// Objective value at `x`.
    pub value: F,
    /// Number of iterations carried out.
    pub n_iter: usize,
    /// Whether `x` passed [`QpModel::feasible`] with [`SolverParam::eps_feas`].
    pub feasible: bool,
    /// Termination status.
    pub status: Status,
}

//

/// Projected gradient method solver
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// The solver minimizes \\(f(x) = x^T Q x + q^T x\\) over a closed convex set \\(\mathcal{C}\\)
/// given as a [`Projector`], by the iteration
/// \\[
/// \begin{array}{l}
/// d_i = \Pi_\mathcal{C}(x_i - \nabla f(x_i)) - x_i \\\\
/// x_{i+1} = x_i + \alpha_i d_i,
/// \end{array}
/// \\]
/// where \\(\alpha_i\\) is chosen by [`LineSearch`].
/// Both \\(x_i\\) and \\(x_i + d_i\\) belong to \\(\mathcal{C}\\),
/// so the iterate stays in \\(\mathcal{C}\\) by convexity as long as \\(\alpha_0 \le 1\\).
/// A larger \\(\alpha_0\\) is accepted but may end outside; see [`Solution::feasible`].
/// The sequence \\(f(x_i)\\) is non-increasing by the Armijo condition.
///
/// The iteration stops when \\(\\|d_i\\|_2 \le\\) [`SolverParam::eps_conv`]
/// or when [`SolverParam::max_iter`] iterations have been carried out.
/// It also stops as converged when
/// \\(\nabla f^T d_i \ge -\epsilon \\|\nabla f\\|_2 (\\|x_i\\|_2 + \\|\nabla f\\|_2)\\)
/// with the machine epsilon \\(\epsilon\\),
/// since \\(d_i\\) is then dominated by rounding errors of the projection.
pub struct Solver<L: LinAlg>
{
    /// solver parameters.
    pub par: SolverParam<L::F>,
}

impl<L: LinAlg> Solver<L>
{
    /// Query of a length of work slice.
    ///
    /// Returns a length of work slice that [`Solver::solve`] requires.
    /// * `n` is a number of variables.
    /// * `k` is a number of constraint rows.
    pub fn query_worklen(n: usize, k: usize) -> usize
    {
        n +      // x
        n +      // g
        n +      // p, then d
        n +      // trial
        n.max(k) // tmp of QpModel
    }

    /// Creates an instance.
    ///
    /// Returns [`Solver`] instance.
    pub fn new() -> Self
    {
        Solver {
            par: SolverParam::default(),
        }
    }

    /// Changes solver parameters.
    ///
    /// Returns [`Solver`] with its parameters changed.
    /// * `f` is a function to change parameters given by its argument.
    pub fn par<P>(mut self, f: P) -> Self
    where P: FnOnce(&mut SolverParam<L::F>)
    {
        f(&mut self.par);
        self
    }
}

impl<L: LinAlgEx> Solver<L>
where L::F: Float + Debug + LowerExp
{
    /// Starts to solve a quadratic program.
    ///
    /// Returns `Ok` with [`Solution`], or `Err` with [`SolverError`] type.
    /// Reaching [`SolverParam::max_iter`] is not an error; see [`Solution::status`].
    /// * `model` is the objective and the constraint data as [`QpModel`].
    /// * `proj` is the projection onto the feasible region of `model`.
    /// * `work` slice is used for temporal variables. [`Solver::solve`] does not rely on dynamic heap allocation.
    /// * `x0` is the starting point, which is projected by `proj` before iterating.
    pub fn solve<'w, OQ, P>(self,
        problem: (QpModel<'_, L, OQ>, P, &'w mut [L::F]),
        x0: &[L::F]
    ) -> Result<Solution<'w, L::F>, SolverError>
    where OQ: Operator<L>, P: Projector<L>
    {
        self.solve_with(problem, x0, |_, _| {})
    }

    /// Starts to solve a quadratic program, reporting the objective value of each iterate.
    ///
    /// Same as [`Solver::solve`] except for `on_iter`.
    /// * `on_iter` is called with an iteration number and the objective value there,
    ///   first with `0` at the projected starting point and then once after each step.
    ///   It is called `n_iter + 1` times in total when `Ok` is returned.
    pub fn solve_with<'w, OQ, P, C>(self,
        (model, proj, work): (QpModel<'_, L, OQ>, P, &'w mut [L::F]),
        x0: &[L::F],
        mut on_iter: C
    ) -> Result<Solution<'w, L::F>, SolverError>
    where OQ: Operator<L>, P: Projector<L>, C: FnMut(usize, L::F)
    {
        let (n, k) = model.dim();

        if x0.len() != n {
            log::error!("Size mismatch: x0({}), n = {}", x0.len(), n);
            return Err(SolverError::MalformedInput);
        }

        if Self::query_worklen(n, k) > work.len() {
            log::error!("Work memory length {} must be >= {}", work.len(), Self::query_worklen(n, k));
            return Err(SolverError::WorkShortage);
        }

        log::debug!("{:?}", self.par);

        if self.par.max_iter == 0 {
            log::error!("max_iter must be positive");
            return Err(SolverError::InvalidParam);
        }
        let f0 = L::F::zero();
        for (name, eps) in [("eps_conv", self.par.eps_conv), ("eps_feas", self.par.eps_feas), ("eps_zero", self.par.eps_zero)] {
            if !(eps >= f0) {
                log::error!("{} must be nonnegative", name);
                return Err(SolverError::InvalidParam);
            }
        }
        let ls = LineSearch::new(self.par.alpha_init, self.par.tau, self.par.beta, self.par.eps_step)?;
        if self.par.alpha_init > L::F::one() {
            log::warn!("alpha_init > 1: iterates may leave the feasible region");
        }

        let eps_feas = self.par.eps_feas;

        let core = SolverCore {
            ph_l: PhantomData,
            par: self.par,
            model: &model,
            proj,
            ls,
        };

        let (n_iter, status) = core.solve(x0, work, &mut on_iter)?;

        let (x, rest) = work.split_at_mut(n);
        let tmp = &mut rest[.. n.max(k)];
        let x: &[L::F] = x;

        let value = model.value(x, tmp);
        let feasible = model.feasible(x, eps_feas, tmp);
        if !feasible {
            log::warn!("result is not feasible within {:.1e}", eps_feas);
        }

        Ok(Solution {
            x, value, n_iter, feasible, status,
        })
    }
}

//

struct SolverCore<'m, 'a, L, OQ, P>
where L: LinAlgEx, L::F: Float + Debug + LowerExp,
      OQ: Operator<L>, P: Projector<L>
{
    ph_l: PhantomData<L>,
    par: SolverParam<L::F>,

    model: &'m QpModel<'a, L, OQ>,
    proj: P,
    ls: LineSearch<L>,
}

impl<'m, 'a, L, OQ, P> SolverCore<'m, 'a, L, OQ, P>
where L: LinAlgEx, L::F: Float + Debug + LowerExp,
      OQ: Operator<L>, P: Projector<L>
{
    fn solve<C>(mut self, x0: &[L::F], work: &mut [L::F], on_iter: &mut C) -> Result<(usize, Status), SolverError>
    where C: FnMut(usize, L::F)
    {
        log::info!("----- Initializing");
        let (n, k) = self.model.dim();
        let model = self.model;

        let f1 = L::F::one();

        splitm_mut!(work,
            (x; n),
            (g; n),
            (p; n),
            (trial; n),
            (tmp; n.max(k))
        );

        // start from the nearest feasible point
        L::copy(x0, x);
        self.proj.proj(x)?;
        if !L::is_finite(x) {
            log::error!("starting point is not finite");
            return Err(SolverError::NumericalFailure);
        }

        let mut val = model.value(x, tmp);
        if !val.is_finite() {
            log::error!("objective value at the starting point is not finite");
            return Err(SolverError::NumericalFailure);
        }

        on_iter(0, val);

        log::info!("----- Started");
        let mut i = 0;
        loop {
            let log_trig = if self.par.log_period > 0 {
                i % self.par.log_period == 0
            }
            else {
                if i == 0 && log::log_enabled!(log::Level::Debug) {
                    log::warn!("log_period == 0: no periodic log");
                }
                false
            };

            model.gradient(x, g);
            if !L::is_finite(g) {
                log::error!("{}: gradient is not finite", i);
                return Err(SolverError::NumericalFailure);
            }

            // d = proj(x - g) - x
            L::copy(x, p);
            L::add(-f1, g, p);
            self.proj.proj(p)?;
            L::add(-f1, x, p);

            let norm_d = L::norm(p);
            if !norm_d.is_finite() {
                log::error!("{}: direction is not finite", i);
                return Err(SolverError::NumericalFailure);
            }

            let term_conv = norm_d <= self.par.eps_conv;

            if log_trig || term_conv {
                log::debug!("{}: value {:.6e} dir {:.2e}", i, val, norm_d);
            }
            else {
                log::trace!("{}: value {:.6e} dir {:.2e}", i, val, norm_d);
            }

            if term_conv {
                log::trace!("{}: x {:?}", i, x);
                log::info!("----- Converged");

                return Ok((i, Status::Converged));
            }

            // no descent beyond the rounding errors of x - g and its projection
            let slope = L::dot(g, p);
            let norm_g = L::norm(g);
            let tol_slope = L::F::epsilon() * norm_g * (L::norm(x) + norm_g);
            if slope.is_finite() && slope >= -tol_slope {
                log::debug!("{}: value {:.6e} dir {:.2e} slope {:.2e}", i, val, norm_d, slope);
                log::trace!("{}: x {:?}", i, x);
                log::info!("----- Converged (stationary within rounding)");

                return Ok((i, Status::Converged));
            }

            let alpha = self.ls.search(|v| model.value(v, tmp), x, g, p, trial)?;
            log::trace!("{}: alpha {:.2e}", i, alpha);

            L::copy(trial, x);
            val = model.value(x, tmp);

            i += 1;
            on_iter(i, val);

            if i >= self.par.max_iter {
                log::debug!("{}: value {:.6e} dir {:.2e}", i, val, norm_d);
                log::trace!("{}: x {:?}", i, x);
                log::warn!("----- IterationLimit");

                return Ok((i, Status::IterationLimit));
            }
        } // end of loop
    }
}
