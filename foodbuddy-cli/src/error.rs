//! Error types emitted by the Food Buddy CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use foodbuddy_catalogue::CatalogueError;
use foodbuddy_core::PaceError;
use thiserror::Error;

/// Errors emitted by the Food Buddy CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Only one half of the default start was supplied.
    #[error("--default-start-lat and --default-start-lng must be given together")]
    PartialDefaultStart,
    /// The default start is outside the valid coordinate range.
    #[error("default start ({lat}, {lng}) is not a valid latitude/longitude")]
    InvalidDefaultStart {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
    /// The walking speed is not a positive finite number.
    #[error(transparent)]
    InvalidWalkingSpeed(#[from] PaceError),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Loading the catalogue failed.
    #[error("failed to load catalogue{}: {source}", describe_path(.path.as_ref()))]
    LoadCatalogue {
        /// Catalogue file, or `None` for the bundled dataset.
        path: Option<Utf8PathBuf>,
        /// Underlying load error.
        #[source]
        source: CatalogueError,
    },
    /// Opening the optimise request file failed.
    #[error("failed to open optimise request at {path:?}: {source}")]
    OpenRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Optimise request JSON could not be decoded.
    #[error("failed to parse optimise request JSON at {path:?}: {source}")]
    ParseRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the response envelope failed.
    #[error("failed to serialize response: {0}")]
    SerializeResponse(#[source] serde_json::Error),
    /// Writing the response failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

fn describe_path(path: Option<&Utf8PathBuf>) -> String {
    path.map_or_else(String::new, |path| format!(" at {path:?}"))
}
