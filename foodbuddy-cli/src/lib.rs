//! Command-line interface for the Food Buddy route planner.
//!
//! `foodbuddy optimise <request.json>` plans a walking route for a list and
//! `foodbuddy matrix <list-id>` prints pairwise distances. Both load the
//! bundled Singapore catalogue unless `--catalogue` names a JSON file, and
//! both print the `{ data, error }` envelope as JSON on stdout.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use foodbuddy_catalogue::Catalogue;
use foodbuddy_core::WalkingPace;
use foodbuddy_service::Envelope;
use serde::Serialize;

mod error;
mod fs;
mod matrix;
mod optimise;

pub use error::CliError;

use matrix::{MatrixArgs, run_matrix};
use optimise::{OptimiseArgs, run_optimise};

pub(crate) const ARG_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_DEFAULT_START_LAT: &str = "default-start-lat";
pub(crate) const ARG_DEFAULT_START_LNG: &str = "default-start-lng";
pub(crate) const ARG_WALKING_SPEED: &str = "walking-speed-kmh";
pub(crate) const ARG_OPTIMISE_REQUEST: &str = "request";
pub(crate) const ARG_MATRIX_LIST_ID: &str = "list-id";
pub(crate) const ENV_OPTIMISE_REQUEST: &str = "FOODBUDDY_CMDS_OPTIMISE_REQUEST_PATH";
pub(crate) const ENV_MATRIX_LIST_ID: &str = "FOODBUDDY_CMDS_MATRIX_LIST_ID";

/// How a successful invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The envelope carried data.
    Success,
    /// The envelope carried an error; it was still printed.
    Rejected,
}

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments, configuration or input files are
/// unusable. Service-level rejections are not errors: they are printed and
/// reported as [`Outcome::Rejected`].
pub fn run() -> Result<Outcome, CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Optimise(args) => run_optimise(args, &mut stdout),
        Command::Matrix(args) => run_matrix(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "foodbuddy",
    about = "Plan walking routes through curated food lists",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the places of a list into a walking route.
    Optimise(OptimiseArgs),
    /// Print pairwise distances and walking times for a list.
    Matrix(MatrixArgs),
}

/// Load the catalogue file at `path`, or the bundled dataset when absent.
///
/// Callers check the path with [`require_existing`] first.
fn load_catalogue(path: Option<&Utf8Path>) -> Result<Catalogue, CliError> {
    match path {
        Some(path) => Catalogue::open(path).map_err(|source| CliError::LoadCatalogue {
            path: Some(path.to_path_buf()),
            source,
        }),
        None => Catalogue::singapore().map_err(|source| CliError::LoadCatalogue {
            path: None,
            source,
        }),
    }
}

fn resolve_pace(walking_speed_kmh: Option<f64>) -> Result<WalkingPace, CliError> {
    walking_speed_kmh.map_or(Ok(WalkingPace::DEFAULT), |kmh| {
        WalkingPace::from_kmh(kmh).map_err(CliError::from)
    })
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_envelope<T: Serialize>(
    writer: &mut dyn Write,
    envelope: &Envelope<T>,
) -> Result<Outcome, CliError> {
    let payload =
        serde_json::to_string_pretty(envelope).map_err(CliError::SerializeResponse)?;
    writeln!(writer, "{payload}").map_err(CliError::WriteOutput)?;
    if envelope.is_error() {
        Ok(Outcome::Rejected)
    } else {
        Ok(Outcome::Success)
    }
}

fn optional_path(path: Option<&Utf8PathBuf>) -> Option<&Utf8Path> {
    path.map(Utf8PathBuf::as_path)
}

#[cfg(test)]
mod tests;
