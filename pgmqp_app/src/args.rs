use std::str::FromStr;
use anyhow::{Context, Result, bail};
use pgmqp::{InitialPoint, MinSumVertex, FirstVertex, Uniform};
use pgmqp_core::LinAlgEx;

/// Positional argument `i` of `args`, `None` if absent.
pub fn arg_opt<N>(args: &[String], i: usize, name: &str) -> Result<Option<N>>
where N: FromStr, N::Err: std::error::Error + Send + Sync + 'static
{
    args.get(i)
        .map(|s| s.parse::<N>().with_context(|| format!("<{}>: `{}`", name, s)))
        .transpose()
}

/// Positional argument `i` of `args`, which is required.
pub fn arg_req<N>(args: &[String], i: usize, name: &str) -> Result<N>
where N: FromStr, N::Err: std::error::Error + Send + Sync + 'static
{
    arg_opt(args, i, name)?.with_context(|| format!("<{}> is missing", name))
}

/// Initial-point oracle named by `INIT_POINT`: `min_sum` (default), `first` or `uniform`.
pub fn oracle_by_env<L: LinAlgEx>() -> Result<Box<dyn InitialPoint<L>>>
{
    let name = std::env::var("INIT_POINT").unwrap_or_else(|_| "min_sum".to_string());
    log::info!("INIT_POINT: {}", name);

    let oracle: Box<dyn InitialPoint<L>> = match name.trim() {
        "min_sum" => Box::new(MinSumVertex),
        "first" => Box::new(FirstVertex),
        "uniform" => Box::new(Uniform),
        other => bail!("INIT_POINT: unknown oracle `{}`", other),
    };

    Ok(oracle)
}
