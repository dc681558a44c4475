mod set_par_by_env;
mod args;
mod history;

pub use set_par_by_env::*;
pub use args::*;
pub use history::*;
