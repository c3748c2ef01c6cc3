pub mod delete_flat;
pub mod expenses;
pub mod io;
pub mod output;
pub mod reports;
pub mod rooms;
mod shell;

pub use io::CliError;
pub use shell::{run_cli, CliContext};
