use pgmqp_core::solver::SolverParam;
use num_traits::Float;
use num_traits::Num;

pub fn num_by_env<N: Num + std::fmt::Display>(e: &str) -> Option<N>
{
    if let Some(v) = std::env::var(e).ok()
                     .and_then(|s| {N::from_str_radix(s.trim(), 10).ok()}) {
        log::info!("{}: {}", e, v);
        Some(v)
    }
    else {
        None
    }
}

pub fn set_par_by_env<F: Float + std::fmt::Display>(p: &mut SolverParam<F>)
{
    p.max_iter = num_by_env("MAX_ITER").unwrap_or(p.max_iter);
    p.alpha_init = num_by_env("ALPHA_INIT").unwrap_or(p.alpha_init);
    p.tau = num_by_env("TAU").unwrap_or(p.tau);
    p.beta = num_by_env("BETA").unwrap_or(p.beta);
    p.eps_conv = num_by_env("EPS_CONV").unwrap_or(p.eps_conv);
    p.eps_feas = num_by_env("EPS_FEAS").unwrap_or(p.eps_feas);
    p.eps_zero = num_by_env("EPS_ZERO").unwrap_or(p.eps_zero);
    p.eps_step = num_by_env("EPS_STEP").unwrap_or(p.eps_step);
    p.log_period = num_by_env("LOG_PERIOD").unwrap_or(p.log_period);
}

#[cfg(test)]
mod tests
{
    use pgmqp_core::solver::SolverParam;
    use super::*;

    #[test]
    fn test_set_par_by_env()
    {
        std::env::set_var("MAX_ITER", "42");
        std::env::set_var("BETA", " 0.25 ");
        std::env::set_var("TAU", "not a number");

        let mut p = SolverParam::<f64>::default();
        set_par_by_env(&mut p);

        std::env::remove_var("MAX_ITER");
        std::env::remove_var("BETA");
        std::env::remove_var("TAU");

        assert_eq!(p.max_iter, 42);
        assert_eq!(p.beta, 0.25);
        assert_eq!(p.tau, SolverParam::<f64>::default().tau);
    }
}
