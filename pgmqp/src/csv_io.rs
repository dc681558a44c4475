//! CSV files of a problem
//!
//! A problem is stored in three files sharing a prefix:
//! `<prefix>_Q.csv` (\\(n \times n\\)), `<prefix>_A.csv` (\\(k \times n\\)) and `<prefix>_u.csv` (\\(q\\), one column or one row).
//! Values are comma-separated in row-major order, and blank lines are ignored.

use std::fmt::LowerExp;
use std::fs::File;
use std::path::{Path, PathBuf};
use num_traits::Float;
use pgmqp_core::{LinAlgEx, MatType};
use crate::{MatBuild, ProbPGM, ProbError};

//

fn csv_path(prefix: &str, tag: &str) -> PathBuf
{
    PathBuf::from(format!("{}_{}.csv", prefix, tag))
}

/// Reads a CSV file of numbers.
///
/// Returns a tuple of a number of rows, a number of columns and data in row-major.
pub fn read_csv<F: Float>(path: &Path) -> Result<(usize, usize, Vec<F>), ProbError>
{
    let file = File::open(path).map_err(|source| ProbError::Io {
        path: path.to_path_buf(), source,
    })?;

    let mut rdr = csv::ReaderBuilder::new()
                  .has_headers(false)
                  .flexible(true)
                  .trim(csv::Trim::All)
                  .from_reader(file);

    let mut n_row = 0;
    let mut n_col = None;
    let mut data = Vec::new();

    for record in rdr.records() {
        let record = record.map_err(|source| ProbError::Csv {
            path: path.to_path_buf(), source,
        })?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        // whitespace-only line
        if record.iter().all(|token| token.is_empty()) {
            continue;
        }

        for token in record.iter() {
            let v = F::from_str_radix(token, 10).map_err(|_| ProbError::Parse {
                path: path.to_path_buf(), line, token: token.to_string(),
            })?;
            data.push(v);
        }

        let cnt = record.len();
        match n_col {
            None => n_col = Some(cnt),
            Some(nc) if nc != cnt => {
                return Err(ProbError::Shape {
                    path: path.to_path_buf(),
                    detail: format!("line {} has {} columns, expected {}", line, cnt, nc),
                });
            },
            _ => {},
        }
        n_row += 1;
    }

    let n_col = n_col.ok_or_else(|| ProbError::Shape {
        path: path.to_path_buf(),
        detail: "no data".to_string(),
    })?;

    log::debug!("{}: {} x {}", path.display(), n_row, n_col);
    Ok((n_row, n_col, data))
}

/// Writes a CSV file of numbers.
///
/// * `n_row` and `n_col` are a number of rows and a number of columns.
/// * `elem` takes a row and a column and returns data of each element.
pub fn write_csv<F, M>(path: &Path, n_row: usize, n_col: usize, elem: M) -> Result<(), ProbError>
where F: LowerExp, M: Fn(usize, usize) -> F
{
    let file = File::create(path).map_err(|source| ProbError::Io {
        path: path.to_path_buf(), source,
    })?;

    let mut wtr = csv::WriterBuilder::new()
                  .has_headers(false)
                  .from_writer(file);

    for r in 0.. n_row {
        wtr.write_record((0.. n_col).map(|c| format!("{:e}", elem(r, c))))
           .map_err(|source| ProbError::Csv {
               path: path.to_path_buf(), source,
           })?;
    }
    wtr.flush().map_err(|source| ProbError::Io {
        path: path.to_path_buf(), source,
    })?;

    Ok(())
}

//

impl<L: LinAlgEx> ProbPGM<L>
where L::F: LowerExp
{
    /// Loads a problem from CSV files.
    ///
    /// Returns a [`ProbPGM`] instance, or `Err` with [`ProbError`].
    /// A non-symmetric \\(Q\\) is rejected as [`pgmqp_core::solver::SolverError::MalformedInput`].
    /// * `prefix` is the common prefix of the file paths.
    /// * `eps_zero` should be the same value as [`pgmqp_core::solver::SolverParam::eps_zero`].
    pub fn load(prefix: &str, eps_zero: L::F) -> Result<Self, ProbError>
    {
        let (nr, nc, ar_q) = read_csv::<L::F>(&csv_path(prefix, "Q"))?;
        let sym_q = MatBuild::new(MatType::General(nr, nc))
                    .iter_rowmaj(&ar_q)
                    .to_sympack(eps_zero)?;

        let (nr, nc, ar_a) = read_csv::<L::F>(&csv_path(prefix, "A"))?;
        let mat_a = MatBuild::new(MatType::General(nr, nc))
                    .iter_rowmaj(&ar_a);

        let path_u = csv_path(prefix, "u");
        let (nr, nc, ar_u) = read_csv::<L::F>(&path_u)?;
        if nr != 1 && nc != 1 {
            return Err(ProbError::Shape {
                path: path_u,
                detail: format!("{} x {} is not a vector", nr, nc),
            });
        }
        let vec_q = MatBuild::new(MatType::General(ar_u.len(), 1))
                    .iter_rowmaj(&ar_u);

        log::info!("loaded {}: n = {}, k = {}", prefix, mat_a.size().1, mat_a.size().0);

        Ok(ProbPGM::new(sym_q, vec_q, mat_a, eps_zero)?)
    }

    /// Saves the problem into CSV files.
    ///
    /// Returns `Ok`, or `Err` with [`ProbError::Io`] or [`ProbError::Csv`].
    /// * `prefix` is the common prefix of the file paths.
    pub fn save(&self, prefix: &str) -> Result<(), ProbError>
    {
        let (n, k) = self.dim();

        write_csv(&csv_path(prefix, "Q"), n, n, |r, c| self.sym_q()[(r, c)])?;
        write_csv(&csv_path(prefix, "A"), k, n, |r, c| self.mat_a()[(r, c)])?;
        write_csv(&csv_path(prefix, "u"), n, 1, |r, c| self.vec_q()[(r, c)])?;

        log::info!("saved {}: n = {}, k = {}", prefix, n, k);

        Ok(())
    }
}
