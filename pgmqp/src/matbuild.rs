use std::ops::{Index, IndexMut, Deref};
use num_traits::{Float, Zero, One};
use pgmqp_core::solver::SolverError;
use pgmqp_core::{LinAlgEx, MatType, MatOp};

//

/// Matrix builder
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Matrix struct which owns a `Vec` of data array and is able to be converted as [`pgmqp_core::MatOp`].
/// This struct relies on dynamic heap allocation.
#[derive(Clone)]
pub struct MatBuild<L: LinAlgEx>
{
    typ: MatType,
    array: Vec<L::F>,
}

impl<L: LinAlgEx> MatBuild<L>
{
    /// Creates an instance.
    ///
    /// Returns the [`MatBuild`] instance with zero data.
    /// * `typ` is Matrix type and size.
    pub fn new(typ: MatType) -> Self
    {
        MatBuild {
            typ,
            array: vec![L::F::zero(); typ.len()],
        }
    }

    /// Matrix type and size.
    pub fn typ(&self) -> MatType
    {
        self.typ
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and columns.
    pub fn size(&self) -> (usize, usize)
    {
        self.typ.size()
    }

    /// Converted as [`pgmqp_core::MatOp`].
    ///
    /// Returns the [`pgmqp_core::MatOp`] borrowing the internal data array.
    pub fn as_op(&self) -> MatOp<'_, L>
    {
        MatOp::new(self.typ, &self.array)
    }

    /// Checks if symmetric packed.
    ///
    /// Returns `true` if [`MatType::SymPack`], `false` otherwise.
    pub fn is_sympack(&self) -> bool
    {
        matches!(self.typ, MatType::SymPack(_))
    }

    /// Data by a function.
    ///
    /// * `func` takes a row and a column of the matrix and returns data of each element.
    pub fn set_by_fn<M>(&mut self, mut func: M)
    where M: FnMut(usize, usize) -> L::F
    {
        match self.typ {
            MatType::General(nr, nc) => {
                for c in 0.. nc {
                    for r in 0.. nr {
                        self[(r, c)] = func(r, c);
                    }
                }
            },
            MatType::SymPack(n) => {
                for c in 0.. n {
                    for r in 0..= c {
                        self[(r, c)] = func(r, c);
                    }
                }
            },
        };
    }
    /// Builder pattern of [`MatBuild::set_by_fn`].
    pub fn by_fn<M>(mut self, func: M) -> Self
    where M: FnMut(usize, usize) -> L::F
    {
        self.set_by_fn(func);
        self
    }

    /// Data by an iterator in row-major.
    ///
    /// * `iter` iterates matrix data in row-major.
    ///   For [`MatType::SymPack`], a later element overwrites its transposed counterpart.
    pub fn set_iter_rowmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        let mut i = iter.into_iter();
        let (nr, nc) = self.typ.size();

        for r in 0.. nr {
            for c in 0.. nc {
                if let Some(v) = i.next() {
                    self[(r, c)] = *v;
                }
                else {
                    break;
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_rowmaj`].
    pub fn iter_rowmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=L::F>
    {
        self.set_iter_rowmaj(iter);
        self
    }

    /// Converts a square [`MatType::General`] matrix into [`MatType::SymPack`].
    ///
    /// Returns the symmetric packed matrix whose elements are averages of each pair
    /// \\((r, c)\\) and \\((c, r)\\), or `Err` with [`SolverError::MalformedInput`]
    /// if the matrix is not square or any pair differs by more than `eps_zero` times the largest magnitude.
    /// A matrix already [`MatType::SymPack`] is returned as it is.
    /// * `eps_zero` should be the same value as [`pgmqp_core::solver::SolverParam::eps_zero`].
    pub fn to_sympack(&self, eps_zero: L::F) -> Result<Self, SolverError>
    {
        let n = match self.typ {
            MatType::SymPack(_) => return Ok(self.clone()),
            MatType::General(nr, nc) => {
                if nr != nc {
                    log::error!("matrix must be square: {} x {}", nr, nc);
                    return Err(SolverError::MalformedInput);
                }
                nr
            },
        };

        let f0 = L::F::zero();
        let f2 = L::F::one() + L::F::one();

        let max_abs = self.array.iter().fold(f0, |m, e| m.max(e.abs()));
        let tol = eps_zero * max_abs;

        let mut sym = MatBuild::new(MatType::SymPack(n));
        for c in 0.. n {
            for r in 0..= c {
                let (u, l) = (self[(r, c)], self[(c, r)]);
                if !((u - l).abs() <= tol) {
                    log::error!("matrix is not symmetric at ({}, {})", r, c);
                    return Err(SolverError::MalformedInput);
                }
                sym[(r, c)] = (u + l) / f2;
            }
        }

        Ok(sym)
    }
}

//

impl<L: LinAlgEx> Index<(usize, usize)> for MatBuild<L>
{
    type Output = L::F;
    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        &self.array[self.typ.index(index)]
    }
}

impl<L: LinAlgEx> IndexMut<(usize, usize)> for MatBuild<L>
{
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output
    {
        let i = self.typ.index(index);

        &mut self.array[i]
    }
}

//

impl<L: LinAlgEx> AsRef<[L::F]> for MatBuild<L>
{
    fn as_ref(&self) -> &[L::F]
    {
        &self.array
    }
}

impl<L: LinAlgEx> AsMut<[L::F]> for MatBuild<L>
{
    fn as_mut(&mut self) -> &mut[L::F]
    {
        &mut self.array
    }
}

//

impl<L: LinAlgEx> core::fmt::Display for MatBuild<L>
where L::F: Float + core::fmt::LowerExp
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        let (nr, nc) = self.size();
        if nr == 0 || nc == 0 {
            write!(f, "[ ]")?;
        }
        else {
            write!(f, "[ {:.3e}", self[(0, 0)])?;
            if nc > 2 {
                write!(f, " ...")?;
            }
            if nc > 1 {
                write!(f, " {:.3e}", self[(0, nc - 1)])?;
            }

            if nr > 2 {
                writeln!(f)?;
                write!(f, "  ...")?;
            }

            if nr > 1 {
                writeln!(f)?;
                write!(f, "  {:.3e}", self[(nr - 1, 0)])?;
                if nc > 2 {
                    write!(f, " ...")?;
                }
                if nc > 1 {
                    write!(f, " {:.3e}", self[(nr - 1, nc - 1)])?;
                }
            }
            write!(f, " ]")?;
        }

        write!(f, " ({} x {}) ", nr, nc)?;
        match self.typ {
            MatType::General(_, _) => write!(f, "General")?,
            MatType::SymPack(_) => write!(f, "Symmetric Packed")?,
        }

        Ok(())
    }
}

//
