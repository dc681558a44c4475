use num_traits::Float;
use core::cmp::Ordering;
use core::marker::PhantomData;
use crate::solver::{LinAlg, Projector, SolverError};

//

/// Euclidean projection onto \\(\lbrace x \mid a^T x = 1,\ x \succeq 0 \rbrace\\), done in place on `y`.
///
/// Coordinates with \\(a_i = 0\\) are passive: they leave the equality untouched
/// and come out as \\(\max(0, y_i)\\).
/// `ratio` and `idx` are work slices of at least `y.len()` elements.
pub(crate) fn proj_weighted<F: Float>(
    a: &[F], y: &mut [F],
    ratio: &mut [F], idx: &mut [usize],
    eps_zero: F) -> Result<(), SolverError>
{
    let n = y.len();
    assert_eq!(a.len(), n);

    if ratio.len() < n || idx.len() < n {
        log::error!("work shortage: {} {} given < {} required", ratio.len(), idx.len(), n);
        return Err(SolverError::WorkShortage);
    }
    let ratio = &mut ratio[.. n];
    let idx = &mut idx[.. n];

    let f0 = F::zero();
    let f1 = F::one();

    let mut any_active = false;
    for i in 0.. n {
        if !a[i].is_finite() || !y[i].is_finite() {
            log::error!("weight or target is not finite at {}", i);
            return Err(SolverError::NumericalFailure);
        }
        if a[i] < f0 {
            log::error!("negative weight at {}", i);
            return Err(SolverError::InvalidWeight);
        }

        ratio[i] = if a[i] > f0 {
            any_active = true;
            y[i] / a[i]
        }
        else {
            f0
        };
        if !ratio[i].is_finite() {
            log::error!("ratio overflow at {}", i);
            return Err(SolverError::NumericalFailure);
        }
        idx[i] = i;
    }
    if !any_active {
        log::error!("no positive weight");
        return Err(SolverError::InvalidWeight);
    }

    // ascending ratio, equal ratios ordered by index
    idx.sort_unstable_by(|&i, &j| {
        ratio[i].partial_cmp(&ratio[j]).unwrap_or(Ordering::Equal).then(i.cmp(&j))
    });

    // g(k): excess of the constraint when the threshold sits at the k-th breakpoint.
    // Non-increasing in k, and g(n - 1) = -1.
    let excess = |k: usize| {
        let r_k = ratio[idx[k]];
        let mut sum = f0;
        for &i in &idx[k..] {
            sum = sum + a[i] * (y[i] - r_k * a[i]);
        }
        sum - f1
    };

    // smallest k with g(k) <= 0, values within eps_zero of zero count as zero
    let mut lo = 0;
    let mut hi = n - 1;
    let k = if excess(lo) <= eps_zero {
        lo
    }
    else {
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if excess(mid) > eps_zero {
                lo = mid;
            }
            else {
                hi = mid;
            }
        }
        hi
    };

    let mut sum_ay = f0;
    let mut sum_aa = f0;
    for &i in &idx[k..] {
        sum_ay = sum_ay + a[i] * y[i];
        sum_aa = sum_aa + a[i] * a[i];
    }
    if !(sum_aa > f0) {
        log::error!("empty support after breakpoint search");
        return Err(SolverError::NumericalFailure);
    }
    let lambda = (sum_ay - f1) / sum_aa;
    if !lambda.is_finite() {
        log::error!("multiplier is not finite");
        return Err(SolverError::NumericalFailure);
    }

    for (e, w) in y.iter_mut().zip(a) {
        *e = (*e - lambda * *w).max(f0);
    }

    Ok(())
}

//

/// Weighted simplex projector
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Euclidean projection onto
/// \\[
/// \left\lbrace x \in \mathbb{R}^n
/// \ \middle|\ a^T x = 1,\ x \succeq 0
/// \right\rbrace
/// \\]
/// for a weight vector \\(a \succeq 0\\) with at least one positive entry.
///
/// The multiplier \\(\lambda\\) of \\(x_i = \max(0, y_i - \lambda a_i)\\) is found
/// by sorting the breakpoints \\(y_i / a_i\\) and a binary search over them,
/// which costs \\(O(n \log n)\\).
pub struct ProjSimplex<'a, L: LinAlg>
{
    ph_l: PhantomData<L>,
    weight: &'a [L::F],
    work: &'a mut [L::F],
    idx: &'a mut [usize],
    eps_zero: L::F,
}

impl<'a, L: LinAlg> ProjSimplex<'a, L>
{
    /// Query of a length of work slice.
    ///
    /// Returns a length of work slice that [`ProjSimplex::new`] requires.
    /// * `n` is a number of variables, that is a length of `x` of [`ProjSimplex::proj`].
    pub fn query_worklen(n: usize) -> usize
    {
        n
    }

    /// Query of a length of index work slice.
    ///
    /// Returns a length of index work slice that [`ProjSimplex::new`] requires.
    /// * `n` is a number of variables, that is a length of `x` of [`ProjSimplex::proj`].
    pub fn query_idxlen(n: usize) -> usize
    {
        n
    }

    /// Creates an instance.
    ///
    /// Returns [`ProjSimplex`] instance.
    /// * `weight` is the weight vector \\(a\\).
    /// * `work` slice is used for temporal variables in [`ProjSimplex::proj`].
    /// * `idx` slice is used for the sorting permutation in [`ProjSimplex::proj`].
    /// * `eps_zero` shall be the same value as [`crate::solver::SolverParam::eps_zero`].
    pub fn new(weight: &'a [L::F], work: &'a mut [L::F], idx: &'a mut [usize], eps_zero: L::F) -> Self
    {
        ProjSimplex {
            ph_l: PhantomData,
            weight, work, idx, eps_zero,
        }
    }
}

impl<'a, L: LinAlg> Projector<L> for ProjSimplex<'a, L>
{
    fn proj(&mut self, x: &mut [L::F]) -> Result<(), SolverError>
    {
        if x.len() != self.weight.len() {
            log::error!("size mismatch: x {}, weight {}", x.len(), self.weight.len());
            return Err(SolverError::MalformedInput);
        }

        proj_weighted(self.weight, x, self.work, self.idx, self.eps_zero)
    }
}

//
