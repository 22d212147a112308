//! Entry point for the `foodbuddy` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use foodbuddy_cli::{CliError, Outcome};

#[expect(
    clippy::print_stderr,
    reason = "the CLI reports fatal errors on stderr"
)]
fn main() -> ExitCode {
    env_logger::init();
    match foodbuddy_cli::run() {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::from(1),
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("foodbuddy: {err}");
            ExitCode::from(2)
        }
    }
}
