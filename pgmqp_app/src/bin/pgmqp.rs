use pgmqp::prelude::*;
use pgmqp::*;
use std::time::Instant;
use anyhow::Result;

type La = FloatGeneric<f64>;
type AProbPGM = ProbPGM<La>;
type ASolver = Solver<La>;

const USAGE: &str = "usage: pgmqp <prefix> <max_iter> [<a0> <tau> <beta>]";

/// main
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("{}", USAGE);
        anyhow::bail!("too few arguments");
    }

    let prefix: String = pgmqp_app::arg_req(&args, 1, "prefix")?;
    let max_iter: usize = pgmqp_app::arg_req(&args, 2, "max_iter")?;
    let alpha_init: Option<f64> = pgmqp_app::arg_opt(&args, 3, "a0")?;
    let tau: Option<f64> = pgmqp_app::arg_opt(&args, 4, "tau")?;
    let beta: Option<f64> = pgmqp_app::arg_opt(&args, 5, "beta")?;

    let s = ASolver::new().par(|p| {
        p.max_iter = max_iter;
        p.alpha_init = alpha_init.unwrap_or(p.alpha_init);
        p.tau = tau.unwrap_or(p.tau);
        p.beta = beta.unwrap_or(p.beta);
        pgmqp_app::set_par_by_env(p);
    });

    //----- load

    let mut pgm = AProbPGM::load(&prefix, s.par.eps_zero)?;

    //----- initial point

    let oracle = pgmqp_app::oracle_by_env::<La>()?;
    let x0 = pgm.initial_point(&*oracle, s.par.eps_feas)?;

    //----- solve

    let hist_path = pgmqp_app::hist_path_by_env();
    let mut hist = Vec::new();

    let start = Instant::now();
    let rslt = if hist_path.is_some() {
        s.solve_with(pgm.problem()?, &x0, |_, v| hist.push(v))?
    }
    else {
        s.solve(pgm.problem()?, &x0)?
    };
    let elapsed = start.elapsed();

    let x: Vec<String> = rslt.x.iter().map(|v| format!("{:.6}", v)).collect();
    println!("Solution   : {}", x.join(" "));
    println!("Feasible   : {}", rslt.feasible);
    println!("Value      : {:e}", rslt.value);
    println!("Iterations : {}", rslt.n_iter);
    println!("Status     : {:?}", rslt.status);
    println!("Time       : {:?}", elapsed);

    if let Some(path) = hist_path {
        pgmqp_app::write_history(&path, &hist)?;
    }

    Ok(())
}
