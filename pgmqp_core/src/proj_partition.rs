use num_traits::{Float, Zero};
use crate::solver::{Projector, SolverError};
use crate::proj_simplex::proj_weighted;
use crate::{LinAlgEx, MatOp, MatType};
use crate::splitm_mut;

//

/// Partition region projector
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Euclidean projection onto
/// \\[
/// \left\lbrace x \in \mathbb{R}^n
/// \ \middle|\ A x = \mathbb{1},\ x \succeq 0
/// \right\rbrace
/// \\]
/// where the supports of the rows of \\(A \in \mathbb{R}^{k \times n}\\) partition the coordinates:
/// every column has exactly one positive entry and no negative one.
/// The region is then a product of weighted simplices, one per row,
/// and each row block is projected independently by the same algorithm as [`crate::ProjSimplex`].
pub struct ProjPartition<'a, L: LinAlgEx>
{
    mat_a: MatOp<'a, L>,
    work: &'a mut [L::F],
    idx: &'a mut [usize],
    eps_zero: L::F,
}

impl<'a, L: LinAlgEx> ProjPartition<'a, L>
{
    /// Query of a length of work slice.
    ///
    /// Returns a length of work slice that [`ProjPartition::new`] requires.
    /// * `n` is a number of columns of \\(A\\).
    pub fn query_worklen(n: usize) -> usize
    {
        n * 3
    }

    /// Query of a length of index work slice.
    ///
    /// Returns a length of index work slice that [`ProjPartition::new`] requires.
    /// * `n` is a number of columns of \\(A\\).
    pub fn query_idxlen(n: usize) -> usize
    {
        n
    }

    /// Creates an instance, validating the partition structure of \\(A\\).
    ///
    /// Returns [`ProjPartition`] instance, or `Err` with
    /// * [`SolverError::MalformedInput`] if \\(A\\) is not [`MatType::General`],
    /// * [`SolverError::NumericalFailure`] if \\(A\\) has a non-finite entry,
    /// * [`SolverError::NotPartition`] if \\(A\\) has a negative entry or a column without exactly one positive entry,
    /// * [`SolverError::InvalidWeight`] if a row of \\(A\\) has no positive entry,
    /// * [`SolverError::WorkShortage`] if `work` or `idx` is too short.
    ///
    /// * `mat_a` is \\(A\\).
    /// * `work` slice is used for temporal variables in [`ProjPartition::proj`].
    /// * `idx` slice is used for the sorting permutation in [`ProjPartition::proj`].
    /// * `eps_zero` shall be the same value as [`crate::solver::SolverParam::eps_zero`].
    pub fn new(mat_a: MatOp<'a, L>, work: &'a mut [L::F], idx: &'a mut [usize], eps_zero: L::F) -> Result<Self, SolverError>
    {
        let (k, n) = match mat_a.typ() {
            MatType::General(k, n) => (k, n),
            MatType::SymPack(_) => {
                log::error!("A must be a general matrix");
                return Err(SolverError::MalformedInput);
            },
        };

        if work.len() < Self::query_worklen(n) || idx.len() < Self::query_idxlen(n) {
            log::error!("Work memory length {} {} must be >= {} {}", work.len(), idx.len(), Self::query_worklen(n), Self::query_idxlen(n));
            return Err(SolverError::WorkShortage);
        }

        let f0 = L::F::zero();

        for c in 0.. n {
            let mut cnt = 0;
            for r in 0.. k {
                let e = mat_a[(r, c)];
                if !e.is_finite() {
                    log::error!("A({}, {}) is not finite", r, c);
                    return Err(SolverError::NumericalFailure);
                }
                if e < f0 {
                    log::error!("A({}, {}) is negative", r, c);
                    return Err(SolverError::NotPartition);
                }
                if e > f0 {
                    cnt += 1;
                }
            }
            if cnt != 1 {
                log::error!("column {} of A has {} positive entries, must be 1", c, cnt);
                return Err(SolverError::NotPartition);
            }
        }

        for r in 0.. k {
            if !(0.. n).any(|c| mat_a[(r, c)] > f0) {
                log::error!("row {} of A has no positive entry", r);
                return Err(SolverError::InvalidWeight);
            }
        }

        Ok(ProjPartition {
            mat_a, work, idx, eps_zero,
        })
    }
}

impl<'a, L: LinAlgEx> Projector<L> for ProjPartition<'a, L>
{
    fn proj(&mut self, x: &mut [L::F]) -> Result<(), SolverError>
    {
        let (k, n) = self.mat_a.typ().size();

        if x.len() != n {
            log::error!("Size mismatch: x({}), A{:?}", x.len(), self.mat_a.typ().size());
            return Err(SolverError::MalformedInput);
        }

        let f0 = L::F::zero();

        splitm_mut!(self.work, (w_weight; n), (w_target; n), (w_ratio; n));

        for r in 0.. k {
            // gather the block of row r
            let mut m = 0;
            for c in 0.. n {
                let a = self.mat_a[(r, c)];
                if a > f0 {
                    w_weight[m] = a;
                    w_target[m] = x[c];
                    m += 1;
                }
            }

            proj_weighted(&w_weight[.. m], &mut w_target[.. m], w_ratio, self.idx, self.eps_zero)?;

            // scatter back; other blocks are not touched
            let mut m = 0;
            for c in 0.. n {
                if self.mat_a[(r, c)] > f0 {
                    x[c] = w_target[m];
                    m += 1;
                }
            }
        }

        Ok(())
    }
}

//

#[cfg(test)]
mod tests
{
    use float_eq::assert_float_eq;
    use crate::solver::{Projector, SolverError};
    use crate::{FloatGeneric, MatOp, MatType, ProjPartition};

    type L = FloatGeneric<f64>;

    const EPS: f64 = 1e-12;

    fn new_proj<'a>(k: usize, n: usize, ar_a: &'a [f64], work: &'a mut [f64], idx: &'a mut [usize])
    -> Result<ProjPartition<'a, L>, SolverError>
    {
        ProjPartition::new(MatOp::new(MatType::General(k, n), ar_a), work, idx, EPS)
    }

    #[test]
    fn test_two_blocks()
    {
        // rows: {x0, x2} and {x1, x3} with weights 1 and 2
        let ar_a = &[ // column-major 2x4
            1., 0.,
            0., 2.,
            1., 0.,
            0., 2.,
        ];
        let work = &mut [0.; 12];
        let idx = &mut [0; 4];
        let mut p = new_proj(2, 4, ar_a, work, idx).unwrap();

        let x = &mut [2., 1., -1., 1.];
        p.proj(x).unwrap();
        // block 0: (2, -1) -> (1, 0)
        // block 1: (1, 1) with weights 2 -> 0.25 each
        assert_float_eq!(x.as_ref(), [1., 0.25, 0., 0.25].as_ref(), abs_all <= 1e-12);
    }

    #[test]
    fn test_identity()
    {
        // each coordinate is its own block: the only feasible point is all ones
        let ar_a = &[
            1., 0.,
            0., 1.,
        ];
        let work = &mut [0.; 6];
        let idx = &mut [0; 2];
        let mut p = new_proj(2, 2, ar_a, work, idx).unwrap();

        let x = &mut [0.5, -3.];
        p.proj(x).unwrap();
        assert_float_eq!(x.as_ref(), [1., 1.].as_ref(), abs_all <= 1e-12);
    }

    #[test]
    fn test_idempotent()
    {
        let ar_a = &[
            1., 0.,
            1., 0.,
            0., 1.,
        ];
        let work = &mut [0.; 9];
        let idx = &mut [0; 3];
        let mut p = new_proj(2, 3, ar_a, work, idx).unwrap();

        let x = &mut [0.3, 0.7, 1.];
        p.proj(x).unwrap();
        assert_float_eq!(x.as_ref(), [0.3, 0.7, 1.].as_ref(), abs_all <= 1e-12);
    }

    #[test]
    fn test_not_partition()
    {
        let work = &mut [0.; 9];
        let idx = &mut [0; 3];

        // x1 in both rows
        let ar_a = &[
            1., 0.,
            1., 1.,
            0., 1.,
        ];
        assert_eq!(new_proj(2, 3, ar_a, work, idx).err(), Some(SolverError::NotPartition));

        // x2 in no row
        let ar_a = &[
            1., 0.,
            0., 1.,
            0., 0.,
        ];
        assert_eq!(new_proj(2, 3, ar_a, work, idx).err(), Some(SolverError::NotPartition));

        // negative weight
        let ar_a = &[
            1., 0.,
            -1., 1.,
            0., 1.,
        ];
        assert_eq!(new_proj(2, 3, ar_a, work, idx).err(), Some(SolverError::NotPartition));
    }

    #[test]
    fn test_zero_row()
    {
        let work = &mut [0.; 6];
        let idx = &mut [0; 2];

        let ar_a = &[
            1., 0.,
            1., 0.,
        ];
        assert_eq!(new_proj(2, 2, ar_a, work, idx).err(), Some(SolverError::InvalidWeight));
    }

    #[test]
    fn test_non_finite()
    {
        let work = &mut [0.; 6];
        let idx = &mut [0; 2];

        let ar_a = &[
            1., 0.,
            0., f64::NAN,
        ];
        assert_eq!(new_proj(2, 2, ar_a, work, idx).err(), Some(SolverError::NumericalFailure));

        let ar_a = &[1., 1.];
        let mut p = new_proj(1, 2, ar_a, work, idx).unwrap();
        assert_eq!(p.proj(&mut [f64::INFINITY, 0.]).err(), Some(SolverError::NumericalFailure));
    }

    #[test]
    fn test_work_shortage()
    {
        let work = &mut [0.; 5];
        let idx = &mut [0; 2];

        let ar_a = &[1., 1.];
        assert_eq!(new_proj(1, 2, ar_a, work, idx).err(), Some(SolverError::WorkShortage));
    }
}
