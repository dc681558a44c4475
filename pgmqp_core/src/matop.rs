use core::ops::Index;
use crate::solver::Operator;
use crate::LinAlgEx;

//

/// Matrix type and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatType
{
    /// General matrix with a number of rows and a number of columns.
    General(usize, usize),
    /// Symmetric matrix, supplied in packed form, with a number of rows and columns.
    SymPack(usize),
}

impl MatType
{
    /// Length of array to store a [`MatType`] matrix.
    ///
    /// Returns the length.
    pub fn len(&self) -> usize
    {
        match self {
            MatType::General(n_row, n_col) => n_row * n_col,
            MatType::SymPack(n) => n * (n + 1) / 2,
        }
    }

    /// Size of a [`MatType`] matrix.
    ///
    /// Returns a tuple of a number of rows and a number of columns.
    pub fn size(&self) -> (usize, usize)
    {
        match self {
            MatType::General(n_row, n_col) => (*n_row, *n_col),
            MatType::SymPack(n) => (*n, *n),
        }
    }

    /// Position of an element in the data array.
    ///
    /// Returns the index into an array of length [`MatType::len`].
    /// * `(r, c)` is a row and a column of the element.
    ///   Both of `(r, c)` and `(c, r)` address the same element of [`MatType::SymPack`].
    pub fn index(&self, (r, c): (usize, usize)) -> usize
    {
        match self {
            MatType::General(nr, nc) => {
                assert!(r < *nr);
                assert!(c < *nc);
                c * nr + r
            },
            MatType::SymPack(n) => {
                assert!(r < *n);
                assert!(c < *n);
                let (r, c) = if r <= c {(r, c)} else {(c, r)};
                c * (c + 1) / 2 + r
            },
        }
    }
}

//

/// Matrix operator
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Matrix struct which borrows a slice of data array and implements [`Operator`].
pub struct MatOp<'a, L: LinAlgEx>
{
    typ: MatType,
    array: &'a [L::F],
}

impl<'a, L: LinAlgEx> MatOp<'a, L>
{
    /// Creates an instance
    ///
    /// Returns [`MatOp`] instance.
    /// * `typ`: Matrix type and size.
    /// * `array`: data array slice.
    ///   Column-major matrix data shall be stored if [`MatType::General`].
    ///   Symmetric packed form (the upper-triangular part in column-wise) of matrix data shall be stored if [`MatType::SymPack`].
    pub fn new(typ: MatType, array: &'a [L::F]) -> Self
    {
        assert_eq!(typ.len(), array.len());

        MatOp {
            typ,
            array,
        }
    }

    /// Matrix type and size.
    pub fn typ(&self) -> MatType
    {
        self.typ
    }
}

impl<'a, L: LinAlgEx> Clone for MatOp<'a, L>
{
    fn clone(&self) -> Self
    {
        *self
    }
}

impl<'a, L: LinAlgEx> Copy for MatOp<'a, L> {}

impl<'a, L: LinAlgEx> Operator<L> for MatOp<'a, L>
{
    fn size(&self) -> (usize, usize)
    {
        self.typ.size()
    }

    fn op(&self, alpha: L::F, x: &[L::F], beta: L::F, y: &mut [L::F])
    {
        match self.typ {
            MatType::General(nr, nc) => {
                if nr > 0 && nc > 0 {
                    L::transform_ge(nr, nc, alpha, self.array, x, beta, y)
                }
                else {
                    L::scale(beta, y);
                }
            },
            MatType::SymPack(n) => {
                if n > 0 {
                    L::transform_sp(n, alpha, self.array, x, beta, y)
                }
            },
        }
    }
}

impl<'a, L: LinAlgEx> Index<(usize, usize)> for MatOp<'a, L>
{
    type Output = L::F;

    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        &self.array[self.typ.index(index)]
    }
}

impl<'a, L: LinAlgEx> AsRef<[L::F]> for MatOp<'a, L>
{
    fn as_ref(&self) -> &[L::F]
    {
        self.array
    }
}

//

#[test]
fn test_matop1()
{
    use float_eq::assert_float_eq;
    use crate::FloatGeneric;

    type L = FloatGeneric<f64>;

    let array = &[ // column-major, upper-triangle (seen as if transposed)
        1.,
        2.,  3.,
        4.,  5.,  6.,
        7.,  8.,  9., 10.,
       11., 12., 13., 14., 15.,
    ];
    let ref_array = &[
        1.,  2.,  4.,  7., 11.,
        2.,  3.,  5.,  8., 12.,
        4.,  5.,  6.,  9., 13.,
        7.,  8.,  9., 10., 14.,
       11., 12., 13., 14., 15.,
    ];
    let x = &mut[0.; 5];
    let y = &mut[0.; 5];

    let m = MatOp::<L>::new(MatType::SymPack(5), array);

    for i in 0.. x.len() {
        x[i] = 1.;
        m.op(1., x, 0., y);
        assert_float_eq!(y.as_ref(), ref_array[i * 5 .. i * 5 + 5].as_ref(), abs_all <= 1e-3);
        x[i] = 0.;

        for j in 0.. x.len() {
            assert_eq!(m[(i, j)], ref_array[i * 5 + j]);
        }
    }
}
