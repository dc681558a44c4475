//! Random problem instances

use num_traits::{Zero, One};
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;
use rand::seq::index;
use pgmqp_core::solver::SolverError;
use pgmqp_core::{LinAlgEx, MatType};
use crate::{MatBuild, ProbPGM};

//

impl<L: LinAlgEx> ProbPGM<L>
where Standard: Distribution<L::F>
{
    /// Generates a random problem.
    ///
    /// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
    /// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
    ///
    /// * \\(Q = R R^T\\) with \\(R\\) uniform in \\([0, 1)^{n \times n}\\).
    /// * \\(A\\) is a 0/1 matrix whose rows partition shuffled coordinates into \\(k\\) non-empty blocks.
    /// * \\(q\\) is uniform in \\([0, 1)^n\\).
    ///
    /// Returns a [`ProbPGM`] instance, or `Err` with [`SolverError::MalformedInput`] if `k` is zero or greater than `n`.
    /// * `rng` is a random number generator. The same seed gives the same problem.
    /// * `n` is a number of variables.
    /// * `k` is a number of constraint rows.
    /// * `eps_zero` should be the same value as [`pgmqp_core::solver::SolverParam::eps_zero`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize, eps_zero: L::F) -> Result<Self, SolverError>
    {
        if k == 0 || k > n {
            log::error!("k must be in 1..={}: {}", n, k);
            return Err(SolverError::MalformedInput);
        }

        let mat_r = MatBuild::<L>::new(MatType::General(n, n))
                    .by_fn(|_, _| rng.gen());

        let sym_q = MatBuild::new(MatType::SymPack(n))
                    .by_fn(|r, c| {
                        (0.. n).fold(L::F::zero(), |s, j| s + mat_r[(r, j)] * mat_r[(c, j)])
                    });

        let vec_q = MatBuild::new(MatType::General(n, 1))
                    .by_fn(|_, _| rng.gen());

        let mut cols: Vec<usize> = (0.. n).collect();
        cols.shuffle(rng);

        // k - 1 distinct cuts in 1..n
        let mut cuts: Vec<usize> = index::sample(rng, n - 1, k - 1)
                                   .into_iter()
                                   .map(|i| i + 1)
                                   .collect();
        cuts.sort_unstable();
        cuts.insert(0, 0);
        cuts.push(n);

        let mut mat_a = MatBuild::new(MatType::General(k, n));
        for (r, block) in cuts.windows(2).enumerate() {
            for &c in &cols[block[0].. block[1]] {
                mat_a[(r, c)] = L::F::one();
            }
        }

        log::debug!("random problem: n = {}, k = {}", n, k);

        ProbPGM::new(sym_q, vec_q, mat_a, eps_zero)
    }
}

//
