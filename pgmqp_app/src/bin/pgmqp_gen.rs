use pgmqp::prelude::*;
use pgmqp::*;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;
use anyhow::Result;

type La = FloatGeneric<f64>;
type AProbPGM = ProbPGM<La>;

const USAGE: &str = "usage: pgmqp_gen <n> <k> <prefix> [<seed>]";

const EPS_ZERO: f64 = 1e-12;

/// main
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("{}", USAGE);
        anyhow::bail!("too few arguments");
    }

    let n: usize = pgmqp_app::arg_req(&args, 1, "n")?;
    let k: usize = pgmqp_app::arg_req(&args, 2, "k")?;
    let prefix: String = pgmqp_app::arg_req(&args, 3, "prefix")?;
    let seed: u64 = pgmqp_app::arg_opt(&args, 4, "seed")?.unwrap_or(10000);

    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let pgm = AProbPGM::random(&mut rng, n, k, EPS_ZERO)?;
    pgm.save(&prefix)?;

    println!("{}_Q.csv, {}_A.csv, {}_u.csv: n = {}, k = {}, seed = {}", prefix, prefix, prefix, n, k, seed);

    Ok(())
}
