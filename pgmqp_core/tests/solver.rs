use float_eq::assert_float_eq;
use pgmqp_core::solver::{Operator, Solver, SolverError, Status};
use pgmqp_core::{FloatGeneric, MatOp, MatType, ProjPartition, ProjSimplex, QpModel};

type La = FloatGeneric<f64>;

type ASolver = Solver<La>;

const EPS_ZERO: f64 = 1e-12;

// diagonal Q without dense storage
struct DiagOp<'a>(&'a [f64]);

impl<'a> Operator<La> for DiagOp<'a>
{
    fn size(&self) -> (usize, usize)
    {
        (self.0.len(), self.0.len())
    }

    fn op(&self, alpha: f64, x: &[f64], beta: f64, y: &mut [f64])
    {
        for ((d, u), v) in self.0.iter().zip(x).zip(y) {
            *v = if beta == 0. {
                alpha * d * u
            }
            else {
                alpha * d * u + beta * *v
            };
        }
    }
}

//

#[test]
fn test_singleton_blocks()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let k = 2;

    // Q = diag(1, 2), A = I: the only feasible point is [1, 1]
    let sp_q = &[1., 0., 2.];
    let vec_q = &[0.; 2];
    let ar_a = &[1., 0., 0., 1.];

    let op_q = MatOp::<La>::new(MatType::SymPack(n), sp_q);
    let mat_a = MatOp::<La>::new(MatType::General(k, n), ar_a);
    let model = QpModel::new(op_q, vec_q, mat_a).unwrap();

    let mut w_proj = vec![0.; ProjPartition::<La>::query_worklen(n)];
    let mut w_idx = vec![0; ProjPartition::<La>::query_idxlen(n)];
    let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();

    let mut work = vec![0.; ASolver::query_worklen(n, k)];
    let s = ASolver::new().par(|p| {p.max_iter = 100});
    let rslt = s.solve((model, proj, &mut work), &[0.5, 0.5]).unwrap();
    println!("{:?}", rslt);

    assert_eq!(rslt.status, Status::Converged);
    assert!(rslt.feasible);
    assert!(rslt.n_iter <= 100);
    assert_float_eq!(rslt.x, [1., 1.].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(rslt.value, 3., abs <= 1e-12);
}

// x^T diag(w) x + 10 x2 on the unit simplex of 3 variables, from its center
fn face_run(w: &[f64; 3]) -> (Vec<f64>, usize, Status)
{
    let n = 3;
    let k = 1;

    let vec_q = &[0., 0., 10.];
    let ar_a = &[1., 1., 1.];

    let mat_a = MatOp::<La>::new(MatType::General(k, n), ar_a);
    let model = QpModel::new(DiagOp(w), vec_q, mat_a).unwrap();

    let mut w_proj = vec![0.; ProjPartition::<La>::query_worklen(n)];
    let mut w_idx = vec![0; ProjPartition::<La>::query_idxlen(n)];
    let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();

    let mut work = vec![0.; ASolver::query_worklen(n, k)];
    let s = ASolver::new().par(|p| {p.max_iter = 1000});
    let rslt = s.solve((model, proj, &mut work), &[1. / 3.; 3]).unwrap();
    println!("{:?}", rslt);

    assert!(rslt.feasible);

    (rslt.x.to_vec(), rslt.n_iter, rslt.status)
}

#[test]
fn test_ill_conditioned_face()
{
    let _ = env_logger::builder().is_test(true).try_init();

    // x2 leaves the support; the rest is balanced on x0 + x1 = 1
    let (x_well, n_well, st_well) = face_run(&[1., 1., 1.]);
    assert_eq!(st_well, Status::Converged);
    assert_float_eq!(x_well.as_slice(), [0.5, 0.5, 0.].as_ref(), abs_all <= 1e-9);

    // eigenvalue ratio 1e6 on the same face
    let (x_ill, n_ill, st_ill) = face_run(&[1., 1e6, 1.]);
    assert_eq!(st_ill, Status::Converged);
    let x_opt = [1e6 / (1e6 + 1.), 1. / (1e6 + 1.), 0.];
    assert_float_eq!(x_ill.as_slice(), x_opt.as_ref(), abs_all <= 1e-9);

    assert!(n_ill > n_well, "{} <= {}", n_ill, n_well);
}

#[test]
fn test_ill_conditioned_interior()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let k = 1;

    // minimizer of x0^2 + 1e6 x1^2 on x0 + x1 = 1 is proportional to (1e6, 1)
    let diag = &[1., 1e6];
    let vec_q = &[0.; 2];
    let ar_a = &[1., 1.];

    let mat_a = MatOp::<La>::new(MatType::General(k, n), ar_a);
    let model = QpModel::new(DiagOp(diag), vec_q, mat_a).unwrap();

    let mut w_proj = vec![0.; ProjPartition::<La>::query_worklen(n)];
    let mut w_idx = vec![0; ProjPartition::<La>::query_idxlen(n)];
    let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();

    let mut work = vec![0.; ASolver::query_worklen(n, k)];
    let s = ASolver::new().par(|p| {p.max_iter = 1000});
    let rslt = s.solve((model, proj, &mut work), &[0.5, 0.5]).unwrap();
    println!("{:?}", rslt);

    let x_opt = [1e6 / (1e6 + 1.), 1. / (1e6 + 1.)];
    assert!(rslt.feasible);
    assert_float_eq!(rslt.x, x_opt.as_ref(), abs_all <= 1e-9);
    assert_float_eq!(rslt.value, 1e6 / (1e6 + 1.), abs <= 1e-9);
}

#[test]
fn test_unit_simplex_interior()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 3;
    let k = 1;

    // Q = diag(1, 2, 3): minimizer is proportional to (1/1, 1/2, 1/3)
    let sp_q = &[1., 0., 2., 0., 0., 3.];
    let vec_q = &[0.; 3];
    let ar_a = &[1., 1., 1.];

    let op_q = MatOp::<La>::new(MatType::SymPack(n), sp_q);
    let mat_a = MatOp::<La>::new(MatType::General(k, n), ar_a);
    let model = QpModel::new(op_q, vec_q, mat_a).unwrap();

    // a single row needs no partition check; the simplex projector is used directly
    let mut w_proj = vec![0.; ProjSimplex::<La>::query_worklen(n)];
    let mut w_idx = vec![0; ProjSimplex::<La>::query_idxlen(n)];
    let proj = ProjSimplex::<La>::new(ar_a, &mut w_proj, &mut w_idx, EPS_ZERO);

    let mut work = vec![0.; ASolver::query_worklen(n, k)];
    let s = ASolver::new();
    let rslt = s.solve((model, proj, &mut work), &[1., 0., 0.]).unwrap();
    println!("{:?}", rslt);

    assert!(rslt.feasible);
    assert_float_eq!(rslt.x, [6. / 11., 3. / 11., 2. / 11.].as_ref(), abs_all <= 1e-6);
    assert_float_eq!(rslt.value, 6. / 11., abs <= 1e-9);
}

#[test]
fn test_vertex()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let k = 1;

    // x0^2 + x1^2 + 10 x1 on x0 + x1 = 1: the minimizer is the vertex [1, 0]
    let sp_q = &[1., 0., 1.];
    let vec_q = &[0., 10.];
    let ar_a = &[1., 1.];

    let op_q = MatOp::<La>::new(MatType::SymPack(n), sp_q);
    let mat_a = MatOp::<La>::new(MatType::General(k, n), ar_a);
    let model = QpModel::new(op_q, vec_q, mat_a).unwrap();

    let mut w_proj = vec![0.; ProjPartition::<La>::query_worklen(n)];
    let mut w_idx = vec![0; ProjPartition::<La>::query_idxlen(n)];
    let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();

    let mut work = vec![0.; ASolver::query_worklen(n, k)];
    let rslt = ASolver::new().solve((model, proj, &mut work), &[0.5, 0.5]).unwrap();
    println!("{:?}", rslt);

    assert_eq!(rslt.status, Status::Converged);
    assert_eq!(rslt.n_iter, 1);
    assert!(rslt.feasible);
    assert_float_eq!(rslt.x, [1., 0.].as_ref(), abs_all <= 1e-12);
    assert_float_eq!(rslt.value, 1., abs <= 1e-12);
}

//

fn unit_simplex_run(max_iter: usize) -> (f64, usize, Status)
{
    let n = 3;
    let k = 1;

    let sp_q = &[1., 0., 2., 0., 0., 3.];
    let vec_q = &[0.5, -1., 0.];
    let ar_a = &[1., 1., 1.];

    let op_q = MatOp::<La>::new(MatType::SymPack(n), sp_q);
    let mat_a = MatOp::<La>::new(MatType::General(k, n), ar_a);
    let model = QpModel::new(op_q, vec_q, mat_a).unwrap();

    let mut w_proj = vec![0.; ProjPartition::<La>::query_worklen(n)];
    let mut w_idx = vec![0; ProjPartition::<La>::query_idxlen(n)];
    let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();

    let mut work = vec![0.; ASolver::query_worklen(n, k)];
    let s = ASolver::new().par(|p| {p.max_iter = max_iter});
    let rslt = s.solve((model, proj, &mut work), &[1., 0., 0.]).unwrap();

    assert!(rslt.feasible);

    (rslt.value, rslt.n_iter, rslt.status)
}

#[test]
fn test_value_history()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 3;
    let k = 1;

    let sp_q = &[1., 0., 2., 0., 0., 3.];
    let vec_q = &[0.5, -1., 0.];
    let ar_a = &[1., 1., 1.];

    let op_q = MatOp::<La>::new(MatType::SymPack(n), sp_q);
    let mat_a = MatOp::<La>::new(MatType::General(k, n), ar_a);
    let model = QpModel::new(op_q, vec_q, mat_a).unwrap();

    let mut w_proj = vec![0.; ProjPartition::<La>::query_worklen(n)];
    let mut w_idx = vec![0; ProjPartition::<La>::query_idxlen(n)];
    let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();

    let mut hist = Vec::new();
    let mut work = vec![0.; ASolver::query_worklen(n, k)];
    let s = ASolver::new().par(|p| {p.max_iter = 1000});
    let rslt = s.solve_with((model, proj, &mut work), &[1., 0., 0.], |i, v| hist.push((i, v))).unwrap();
    println!("{:?}", rslt);

    assert_eq!(hist.len(), rslt.n_iter + 1);
    for (j, &(i, _)) in hist.iter().enumerate() {
        assert_eq!(i, j);
    }
    for w in hist.windows(2) {
        assert!(w[1].1 <= w[0].1, "{:?}", w);
    }
    // x0 = [1, 0, 0] is already feasible
    assert_float_eq!(hist[0].1, 1.5, abs <= 1e-12);
    assert_float_eq!(hist[rslt.n_iter].1, rslt.value, abs <= 1e-12);
}

#[test]
fn test_iteration_limit()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let (_, n_iter, status) = unit_simplex_run(1);
    assert_eq!(status, Status::IterationLimit);
    assert_eq!(n_iter, 1);

    let (_, n_iter, status) = unit_simplex_run(3);
    assert_eq!(status, Status::IterationLimit);
    assert_eq!(n_iter, 3);
}

#[test]
fn test_monotone()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let mut prev = f64::INFINITY;
    for max_iter in 1..= 30 {
        let (value, n_iter, _) = unit_simplex_run(max_iter);
        assert!(n_iter <= max_iter);
        assert!(value <= prev, "{}: {} > {}", max_iter, value, prev);
        prev = value;
    }
}

//

#[test]
fn test_invalid_param()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let k = 1;

    let sp_q = &[1., 0., 1.];
    let vec_q = &[0.; 2];
    let ar_a = &[1., 1.];

    let op_q = MatOp::<La>::new(MatType::SymPack(n), sp_q);
    let mat_a = MatOp::<La>::new(MatType::General(k, n), ar_a);

    let params: [fn(&mut pgmqp_core::solver::SolverParam<f64>); 5] = [
        |p| {p.max_iter = 0},
        |p| {p.alpha_init = 0.},
        |p| {p.alpha_init = -1.},
        |p| {p.tau = 1.},
        |p| {p.beta = 0.},
    ];

    for f in params {
        let model = QpModel::new(op_q, vec_q, mat_a).unwrap();
        let mut w_proj = vec![0.; ProjPartition::<La>::query_worklen(n)];
        let mut w_idx = vec![0; ProjPartition::<La>::query_idxlen(n)];
        let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();
        let mut work = vec![0.; ASolver::query_worklen(n, k)];

        let e = ASolver::new().par(f).solve((model, proj, &mut work), &[0.5, 0.5]).unwrap_err();
        assert_eq!(e, SolverError::InvalidParam);
    }
}

#[test]
fn test_bad_input()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 2;
    let k = 1;

    let sp_q = &[1., 0., 1.];
    let ar_a = &[1., 1.];

    let op_q = MatOp::<La>::new(MatType::SymPack(n), sp_q);
    let mat_a = MatOp::<La>::new(MatType::General(k, n), ar_a);

    let mut w_proj = vec![0.; ProjPartition::<La>::query_worklen(n)];
    let mut w_idx = vec![0; ProjPartition::<La>::query_idxlen(n)];

    // x0 of a wrong length
    {
        let model = QpModel::new(op_q, &[0.; 2], mat_a).unwrap();
        let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();
        let mut work = vec![0.; ASolver::query_worklen(n, k)];
        let e = ASolver::new().solve((model, proj, &mut work), &[0.5; 3]).unwrap_err();
        assert_eq!(e, SolverError::MalformedInput);
    }

    // short work
    {
        let model = QpModel::new(op_q, &[0.; 2], mat_a).unwrap();
        let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();
        let mut work = vec![0.; ASolver::query_worklen(n, k) - 1];
        let e = ASolver::new().solve((model, proj, &mut work), &[0.5; 2]).unwrap_err();
        assert_eq!(e, SolverError::WorkShortage);
    }

    // NaN in q
    {
        let model = QpModel::new(op_q, &[f64::NAN, 0.], mat_a).unwrap();
        let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();
        let mut work = vec![0.; ASolver::query_worklen(n, k)];
        let e = ASolver::new().solve((model, proj, &mut work), &[0.5; 2]).unwrap_err();
        assert_eq!(e, SolverError::NumericalFailure);
    }

    // NaN in x0
    {
        let model = QpModel::new(op_q, &[0.; 2], mat_a).unwrap();
        let proj = ProjPartition::new(mat_a, &mut w_proj, &mut w_idx, EPS_ZERO).unwrap();
        let mut work = vec![0.; ASolver::query_worklen(n, k)];
        let e = ASolver::new().solve((model, proj, &mut work), &[f64::NAN, 0.5]).unwrap_err();
        assert_eq!(e, SolverError::NumericalFailure);
    }
}
