//! `optimise` command implementation.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use foodbuddy_core::WalkingPace;
use foodbuddy_planner::{NearestNeighbourPlanner, PlannerConfig};
use foodbuddy_service::{DEFAULT_START, OptimiseRouteRequest, RouteService, ServiceConfig};
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::open_utf8_file;
use crate::{
    ARG_CATALOGUE, ARG_DEFAULT_START_LAT, ARG_DEFAULT_START_LNG, ARG_OPTIMISE_REQUEST,
    ARG_WALKING_SPEED, CliError, ENV_OPTIMISE_REQUEST, Outcome, load_catalogue, optional_path,
    require_existing, resolve_pace, write_envelope,
};

/// CLI arguments for the `optimise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a walking route through the places of a food list. The \
                 request is a JSON file holding `listId` and an optional \
                 `startLocation` of `{ lat, lng }`.",
    about = "Optimise the walking order of a food list"
)]
#[ortho_config(prefix = "FOODBUDDY")]
pub(crate) struct OptimiseArgs {
    /// Path to a JSON file containing an optimise request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Catalogue JSON to resolve lists from. Defaults to the bundled dataset.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Latitude of the start used when the request has none.
    #[arg(long = ARG_DEFAULT_START_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) default_start_lat: Option<f64>,
    /// Longitude of the start used when the request has none.
    #[arg(long = ARG_DEFAULT_START_LNG, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) default_start_lng: Option<f64>,
    /// Walking speed in km/h.
    #[arg(long = ARG_WALKING_SPEED, value_name = "km/h")]
    #[serde(default)]
    pub(crate) walking_speed_kmh: Option<f64>,
}

impl OptimiseArgs {
    pub(crate) fn into_config(self) -> Result<OptimiseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimiseConfig::try_from(merged)
    }
}

/// Resolved `optimise` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimiseConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Catalogue file, or `None` for the bundled dataset.
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Start for requests without `startLocation`.
    pub(crate) default_start: Coord<f64>,
    /// Walking pace for step and total times.
    pub(crate) pace: WalkingPace,
}

impl OptimiseConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_OPTIMISE_REQUEST)?;
        if let Some(catalogue) = &self.catalogue {
            require_existing(catalogue, ARG_CATALOGUE)?;
        }
        Ok(())
    }
}

impl TryFrom<OptimiseArgs> for OptimiseConfig {
    type Error = CliError;

    fn try_from(args: OptimiseArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_OPTIMISE_REQUEST,
            env: ENV_OPTIMISE_REQUEST,
        })?;
        let default_start = match (args.default_start_lat, args.default_start_lng) {
            (None, None) => DEFAULT_START,
            (Some(lat), Some(lng)) => checked_start(lat, lng)?,
            _ => return Err(CliError::PartialDefaultStart),
        };
        Ok(Self {
            request_path,
            catalogue: args.catalogue,
            default_start,
            pace: resolve_pace(args.walking_speed_kmh)?,
        })
    }
}

fn checked_start(lat: f64, lng: f64) -> Result<Coord<f64>, CliError> {
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
        Ok(Coord { x: lng, y: lat })
    } else {
        Err(CliError::InvalidDefaultStart { lat, lng })
    }
}

pub(crate) fn run_optimise(args: OptimiseArgs, writer: &mut dyn Write) -> Result<Outcome, CliError> {
    let config = args.into_config()?;
    execute_optimise(&config, writer)
}

pub(crate) fn execute_optimise(
    config: &OptimiseConfig,
    writer: &mut dyn Write,
) -> Result<Outcome, CliError> {
    config.validate_sources()?;
    let request = load_request(&config.request_path)?;
    let catalogue = load_catalogue(optional_path(config.catalogue.as_ref()))?;
    let planner = NearestNeighbourPlanner::with_config(PlannerConfig { pace: config.pace });
    let service = RouteService::new(
        catalogue,
        planner,
        ServiceConfig {
            default_start: config.default_start,
            pace: config.pace,
        },
    );
    let envelope = service.respond(&request);
    if let Some(error) = &envelope.error {
        log::warn!("optimise request rejected: {} ({})", error.message, error.code);
    }
    write_envelope(writer, &envelope)
}

fn load_request(path: &Utf8Path) -> Result<OptimiseRouteRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseRequest {
        path: path.to_path_buf(),
        source,
    })
}
