use num_traits::Float;
use core::marker::PhantomData;
use core::ops::Index;
use crate::solver::LinAlg;
use crate::LinAlgEx;

/// `num::Float`-generic [`LinAlgEx`] implementation
///
/// All numeric operations are written in pure Rust, but slow.
#[derive(Clone)]
pub struct FloatGeneric<F>
{
    ph_f: PhantomData<F>,
}

impl<F: Float> LinAlg for FloatGeneric<F>
{
    type F = F;

    fn norm(x: &[F]) -> F
    {
        let mut sum = F::zero();
        for u in x {
            sum = sum + *u * *u;
        }
        sum.sqrt()
    }

    fn dot(x: &[F], y: &[F]) -> F
    {
        assert_eq!(x.len(), y.len());

        let mut sum = F::zero();
        for (u, v) in x.iter().zip(y) {
            sum = sum + *u * *v;
        }
        sum
    }

    fn copy(x: &[F], y: &mut [F])
    {
        assert_eq!(x.len(), y.len());

        for (u, v) in x.iter().zip(y) {
            *v = *u;
        }
    }

    fn scale(alpha: F, x: &mut [F])
    {
        for u in x {
            *u = alpha * *u;
        }
    }

    fn add(alpha: F, x: &[F], y: &mut [F])
    {
        assert_eq!(x.len(), y.len());

        for (u, v) in x.iter().zip(y) {
            *v = *v + alpha * *u;
        }
    }
}

//

struct MatIdx<'a, F: Float>
{
    n_row: usize,
    n_col: usize,
    mat: &'a [F],
}

impl<'a, F: Float> Index<(usize, usize)> for MatIdx<'a, F>
{
    type Output = F;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output
    {
        assert!(r < self.n_row);
        assert!(c < self.n_col);

        &self.mat[c * self.n_row + r]
    }
}

//

struct SpMatIdx<'a, F: Float>
{
    n: usize,
    mat: &'a [F],
}

impl<'a, F: Float> Index<(usize, usize)> for SpMatIdx<'a, F>
{
    type Output = F;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output
    {
        assert!(r < self.n);
        assert!(c < self.n);

        let (r, c) = if r <= c {(r, c)} else {(c, r)};

        &self.mat[c * (c + 1) / 2 + r]
    }
}

//

// when beta is zero, y is overwritten without reading its former content
fn combine<F: Float>(alpha: F, ax: F, beta: F, y: F) -> F
{
    if beta == F::zero() {
        alpha * ax
    }
    else {
        alpha * ax + beta * y
    }
}

impl<F: Float> LinAlgEx for FloatGeneric<F>
{
    // y = a*mat*x + b*y
    fn transform_ge(n_row: usize, n_col: usize, alpha: F, mat: &[F], x: &[F], beta: F, y: &mut [F])
    {
        assert_eq!(mat.len(), n_row * n_col);
        assert_eq!(x.len(), n_col);
        assert_eq!(y.len(), n_row);

        let mat = MatIdx {
            n_row, n_col, mat,
        };

        for r in 0.. y.len() {
            let mut mat_x = F::zero();
            for c in 0.. x.len() {
                mat_x = mat_x + mat[(r, c)] * x[c];
            }
            y[r] = combine(alpha, mat_x, beta, y[r]);
        }
    }

    // y = a*mat*x + b*y
    fn transform_sp(n: usize, alpha: F, mat: &[F], x: &[F], beta: F, y: &mut [F])
    {
        assert_eq!(mat.len(), n * (n + 1) / 2);

        assert_eq!(x.len(), n);
        assert_eq!(y.len(), n);

        let mat = SpMatIdx {
            n, mat,
        };

        for r in 0.. y.len() {
            let mut mat_x = F::zero();
            for c in 0.. x.len() {
                mat_x = mat_x + mat[(r, c)] * x[c];
            }
            y[r] = combine(alpha, mat_x, beta, y[r]);
        }
    }
}

//

#[test]
fn test_transform()
{
    use float_eq::assert_float_eq;

    type L = FloatGeneric<f64>;

    // column-major 2x3
    //   1 3 5
    //   2 4 6
    let mat = &[1., 2., 3., 4., 5., 6.];
    let x = &[1., 0., -1.];
    let y = &mut [f64::NAN; 2];

    L::transform_ge(2, 3, 2., mat, x, 0., y);
    assert_float_eq!(y.as_ref(), [-8., -8.].as_ref(), abs_all <= 1e-12);

    L::transform_ge(2, 3, 1., mat, x, 1., y);
    assert_float_eq!(y.as_ref(), [-12., -12.].as_ref(), abs_all <= 1e-12);

    // packed upper triangle of
    //   1 2
    //   2 3
    let sp = &[1., 2., 3.];
    let y = &mut [0.; 2];
    L::transform_sp(2, 1., sp, &[1., 1.], 0., y);
    assert_float_eq!(y.as_ref(), [3., 5.].as_ref(), abs_all <= 1e-12);

    assert_float_eq!(L::dot(&[1., 2.], &[3., 4.]), 11., abs <= 1e-12);
    assert_float_eq!(L::norm(&[3., 4.]), 5., abs <= 1e-12);
}
