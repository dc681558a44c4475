//! Armijo backtracking line search

use num_traits::{Float, Zero, One};
use core::marker::PhantomData;
use crate::solver::{LinAlg, SolverError};

/// Armijo backtracking line search
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Starting from \\(\alpha_0\\), the step is multiplied by \\(\tau\\) until
/// \\[
/// f(x + \alpha d) \le f(x) + \alpha \beta \nabla f(x)^T d.
/// \\]
pub struct LineSearch<L: LinAlg>
{
    ph_l: PhantomData<L>,
    alpha_init: L::F,
    tau: L::F,
    beta: L::F,
    eps_step: L::F,
}

impl<L: LinAlg> LineSearch<L>
{
    /// Creates an instance.
    ///
    /// Returns [`LineSearch`] instance, or `Err` with [`SolverError::InvalidParam`]
    /// unless `alpha_init > 0`, `0 < tau < 1`, `0 < beta < 1` and `eps_step > 0`.
    /// * `alpha_init` is the initial step \\(\alpha_0\\).
    /// * `tau` is the shrink factor \\(\tau\\).
    /// * `beta` is the sufficient-decrease factor \\(\beta\\).
    /// * `eps_step` is the floor of the step; shrinking below it fails the search.
    pub fn new(alpha_init: L::F, tau: L::F, beta: L::F, eps_step: L::F) -> Result<Self, SolverError>
    {
        let f0 = L::F::zero();
        let f1 = L::F::one();

        // negated comparisons also reject NaN
        if !(alpha_init > f0) || !alpha_init.is_finite() {
            log::error!("alpha_init must be positive");
            return Err(SolverError::InvalidParam);
        }
        if !(tau > f0 && tau < f1) {
            log::error!("tau must be in (0, 1)");
            return Err(SolverError::InvalidParam);
        }
        if !(beta > f0 && beta < f1) {
            log::error!("beta must be in (0, 1)");
            return Err(SolverError::InvalidParam);
        }
        if !(eps_step > f0) {
            log::error!("eps_step must be positive");
            return Err(SolverError::InvalidParam);
        }

        Ok(LineSearch {
            ph_l: PhantomData,
            alpha_init, tau, beta, eps_step,
        })
    }

    /// Searches a step size.
    ///
    /// Returns `Ok` with the accepted step \\(\alpha\\), or `Err` with
    /// * [`SolverError::NonDescent`] if \\(\nabla f(x)^T d \ge 0\\),
    /// * [`SolverError::NumericalFailure`] if the slope or an objective value is NaN,
    /// * [`SolverError::LineSearchFailure`] if the step shrinks below `eps_step`.
    ///
    /// * `value` evaluates the objective function \\(f\\).
    /// * `x` is the current point \\(x\\).
    /// * `g` is the gradient \\(\nabla f(x)\\).
    /// * `d` is the direction \\(d\\).
    /// * `trial` is \\(x + \alpha d\\) of the accepted \\(\alpha\\) on exit.
    ///   `x`, `g`, `d` and `trial` shall have the same length.
    pub fn search<V>(&self, mut value: V,
        x: &[L::F], g: &[L::F], d: &[L::F], trial: &mut [L::F]) -> Result<L::F, SolverError>
    where V: FnMut(&[L::F]) -> L::F
    {
        assert_eq!(x.len(), g.len());
        assert_eq!(x.len(), d.len());
        assert_eq!(x.len(), trial.len());

        let slope = L::dot(g, d);
        if !slope.is_finite() {
            log::error!("slope is not finite");
            return Err(SolverError::NumericalFailure);
        }
        if slope >= L::F::zero() {
            log::error!("slope must be negative for a descent direction");
            return Err(SolverError::NonDescent);
        }

        let val_x = value(x);
        if !val_x.is_finite() {
            log::error!("objective value is not finite");
            return Err(SolverError::NumericalFailure);
        }

        let mut alpha = self.alpha_init;
        loop {
            L::copy(x, trial);
            L::add(alpha, d, trial);

            let val_trial = value(trial);
            if val_trial.is_nan() {
                log::error!("objective value is NaN at a trial point");
                return Err(SolverError::NumericalFailure);
            }

            if val_trial <= val_x + alpha * self.beta * slope {
                return Ok(alpha);
            }

            alpha = alpha * self.tau;
            if alpha < self.eps_step {
                log::error!("step size shrank below its floor");
                return Err(SolverError::LineSearchFailure);
            }
        }
    }
}

//

#[cfg(test)]
mod tests
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;
    use crate::solver::{LineSearch, SolverError};

    type L = FloatGeneric<f64>;

    // f(x) = x0^2 + x1^2
    fn sq(x: &[f64]) -> f64
    {
        x[0] * x[0] + x[1] * x[1]
    }

    #[test]
    fn test_accept_initial()
    {
        let ls = LineSearch::<L>::new(0.5, 0.5, 0.5, 1e-16).unwrap();
        let x = [1., 1.];
        let g = [2., 2.];
        let d = [-1., -1.];
        let mut t = [0.; 2];

        // f(x + 0.5 d) = 0.5 <= 2 + 0.5 * 0.5 * (-4) = 1
        let alpha = ls.search(sq, &x, &g, &d, &mut t).unwrap();
        assert_float_eq!(alpha, 0.5, abs <= 1e-15);
        assert_float_eq!(t.as_ref(), [0.5, 0.5].as_ref(), abs_all <= 1e-15);
    }

    #[test]
    fn test_backtrack()
    {
        let ls = LineSearch::<L>::new(4., 0.5, 0.5, 1e-16).unwrap();
        let x = [1., 1.];
        let g = [2., 2.];
        let d = [-2., -2.];
        let mut t = [0.; 2];

        // alpha = 4, 2, 1 rejected; alpha = 0.5 reaches the minimizer
        let alpha = ls.search(sq, &x, &g, &d, &mut t).unwrap();
        assert_float_eq!(alpha, 0.5, abs <= 1e-15);
        assert!(sq(&t) <= sq(&x) + alpha * 0.5 * (-8.));
    }

    #[test]
    fn test_non_descent()
    {
        let ls = LineSearch::<L>::new(1., 0.5, 0.5, 1e-16).unwrap();
        let x = [1., 1.];
        let g = [2., 2.];
        let mut t = [0.; 2];

        let e = ls.search(sq, &x, &g, &[1., 0.], &mut t).unwrap_err();
        assert_eq!(e, SolverError::NonDescent);

        let e = ls.search(sq, &x, &g, &[1., -1.], &mut t).unwrap_err();
        assert_eq!(e, SolverError::NonDescent);
    }

    #[test]
    fn test_nan()
    {
        let ls = LineSearch::<L>::new(1., 0.5, 0.5, 1e-16).unwrap();
        let x = [1., 1.];
        let g = [2., f64::NAN];
        let mut t = [0.; 2];

        let e = ls.search(sq, &x, &g, &[-1., -1.], &mut t).unwrap_err();
        assert_eq!(e, SolverError::NumericalFailure);
    }

    #[test]
    fn test_floor()
    {
        let ls = LineSearch::<L>::new(1., 0.5, 0.5, 1e-3).unwrap();
        let x = [0., 0.];
        let mut t = [0.; 2];

        // g is a lie: f does not decrease along d
        let e = ls.search(sq, &x, &[-1., 0.], &[1., 0.], &mut t).unwrap_err();
        assert_eq!(e, SolverError::LineSearchFailure);
    }

    #[test]
    fn test_invalid_param()
    {
        assert_eq!(LineSearch::<L>::new(0., 0.5, 0.5, 1e-16).err(), Some(SolverError::InvalidParam));
        assert_eq!(LineSearch::<L>::new(-1., 0.5, 0.5, 1e-16).err(), Some(SolverError::InvalidParam));
        assert_eq!(LineSearch::<L>::new(1., 1., 0.5, 1e-16).err(), Some(SolverError::InvalidParam));
        assert_eq!(LineSearch::<L>::new(1., 0., 0.5, 1e-16).err(), Some(SolverError::InvalidParam));
        assert_eq!(LineSearch::<L>::new(1., 0.5, 1., 1e-16).err(), Some(SolverError::InvalidParam));
        assert_eq!(LineSearch::<L>::new(1., 0.5, f64::NAN, 1e-16).err(), Some(SolverError::InvalidParam));
        assert_eq!(LineSearch::<L>::new(1., 0.5, 0.5, 0.).err(), Some(SolverError::InvalidParam));
    }
}
