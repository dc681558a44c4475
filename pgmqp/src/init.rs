//! Initial-point oracles

use num_traits::{Float, Zero, One};
use pgmqp_core::solver::SolverError;
use pgmqp_core::{LinAlgEx, MatOp};

/// Initial-point oracle trait
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Supplies a point of \\(\lbrace x \mid A x = \mathbb{1},\ x \succeq 0 \rbrace\\)
/// for \\(A\\) whose rows partition the coordinates.
/// The result is checked by [`crate::ProbPGM::initial_point`], not by the oracle.
pub trait InitialPoint<L: LinAlgEx>
{
    /// Writes a starting point.
    ///
    /// Returns `Ok`, or `Err` with [`SolverError::InvalidWeight`] if a row of \\(A\\) has no positive entry.
    /// * `mat_a` is \\(A\\).
    /// * `x` is zero before entry, and the starting point on exit.
    fn initial_point(&self, mat_a: MatOp<'_, L>, x: &mut [L::F]) -> Result<(), SolverError>;
}

// (column, weight) of the positive entries of row r
fn row_weights<L: LinAlgEx>(mat_a: &MatOp<'_, L>, r: usize) -> Vec<(usize, L::F)>
{
    let n = mat_a.typ().size().1;
    let f0 = L::F::zero();

    (0.. n).map(|c| (c, mat_a[(r, c)])).filter(|(_, a)| *a > f0).collect()
}

//

/// Vertex minimizing \\(\mathbb{1}^T x\\).
///
/// Solves the linear program
/// \\[
/// \begin{array}{ll}
/// {\rm minimize} & \mathbb{1}^T x \\\\
/// {\rm subject \ to} & A x = \mathbb{1} \\\\
/// & x \succeq 0
/// \end{array}
/// \\]
/// exactly: each row puts \\(1 / a_j\\) on its largest weight \\(a_j\\), the lowest index on ties.
pub struct MinSumVertex;

impl<L: LinAlgEx> InitialPoint<L> for MinSumVertex
{
    fn initial_point(&self, mat_a: MatOp<'_, L>, x: &mut [L::F]) -> Result<(), SolverError>
    {
        let k = mat_a.typ().size().0;

        for r in 0.. k {
            let mut best: Option<(usize, L::F)> = None;
            for (c, a) in row_weights(&mat_a, r) {
                match best {
                    Some((_, b)) if b >= a => {},
                    _ => best = Some((c, a)),
                }
            }

            let (c, a) = best.ok_or_else(|| {
                log::error!("row {} of A has no positive entry", r);
                SolverError::InvalidWeight
            })?;
            x[c] = a.recip();
        }

        Ok(())
    }
}

/// Vertex at the first supported coordinate of each row.
pub struct FirstVertex;

impl<L: LinAlgEx> InitialPoint<L> for FirstVertex
{
    fn initial_point(&self, mat_a: MatOp<'_, L>, x: &mut [L::F]) -> Result<(), SolverError>
    {
        let k = mat_a.typ().size().0;

        for r in 0.. k {
            let (c, a) = row_weights(&mat_a, r).into_iter().next().ok_or_else(|| {
                log::error!("row {} of A has no positive entry", r);
                SolverError::InvalidWeight
            })?;
            x[c] = a.recip();
        }

        Ok(())
    }
}

/// Interior point, uniform over the support of each row.
///
/// Each row puts \\(1 / \sum_j a_j\\) on every coordinate it supports.
pub struct Uniform;

impl<L: LinAlgEx> InitialPoint<L> for Uniform
{
    fn initial_point(&self, mat_a: MatOp<'_, L>, x: &mut [L::F]) -> Result<(), SolverError>
    {
        let k = mat_a.typ().size().0;
        let f0 = L::F::zero();

        for r in 0.. k {
            let sum = row_weights(&mat_a, r).into_iter().fold(f0, |s, (_, a)| s + a);
            if !(sum > f0) {
                log::error!("row {} of A has no positive entry", r);
                return Err(SolverError::InvalidWeight);
            }

            let v = L::F::one() / sum;
            for (c, _) in row_weights(&mat_a, r) {
                x[c] = v;
            }
        }

        Ok(())
    }
}

//
