//! `matrix` command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use foodbuddy_core::WalkingPace;
use foodbuddy_planner::NearestNeighbourPlanner;
use foodbuddy_service::{RouteService, ServiceConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOGUE, ARG_MATRIX_LIST_ID, ARG_WALKING_SPEED, CliError, ENV_MATRIX_LIST_ID, Outcome,
    load_catalogue, optional_path, require_existing, resolve_pace, write_envelope,
};

/// CLI arguments for the `matrix` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Print pairwise distances and walking times for a food list")]
#[ortho_config(prefix = "FOODBUDDY")]
pub(crate) struct MatrixArgs {
    /// Identifier of the list to measure.
    #[arg(value_name = "list-id")]
    #[serde(default)]
    pub(crate) list_id: Option<String>,
    /// Catalogue JSON to resolve lists from. Defaults to the bundled dataset.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Walking speed in km/h.
    #[arg(long = ARG_WALKING_SPEED, value_name = "km/h")]
    #[serde(default)]
    pub(crate) walking_speed_kmh: Option<f64>,
}

/// Resolved `matrix` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MatrixConfig {
    pub(crate) list_id: String,
    pub(crate) catalogue: Option<Utf8PathBuf>,
    pub(crate) pace: WalkingPace,
}

impl TryFrom<MatrixArgs> for MatrixConfig {
    type Error = CliError;

    fn try_from(args: MatrixArgs) -> Result<Self, Self::Error> {
        let list_id = args.list_id.ok_or(CliError::MissingArgument {
            field: ARG_MATRIX_LIST_ID,
            env: ENV_MATRIX_LIST_ID,
        })?;
        Ok(Self {
            list_id,
            catalogue: args.catalogue,
            pace: resolve_pace(args.walking_speed_kmh)?,
        })
    }
}

pub(crate) fn run_matrix(args: MatrixArgs, writer: &mut dyn Write) -> Result<Outcome, CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let config = MatrixConfig::try_from(merged)?;
    execute_matrix(&config, writer)
}

pub(crate) fn execute_matrix(
    config: &MatrixConfig,
    writer: &mut dyn Write,
) -> Result<Outcome, CliError> {
    if let Some(catalogue) = &config.catalogue {
        require_existing(catalogue, ARG_CATALOGUE)?;
    }
    let catalogue = load_catalogue(optional_path(config.catalogue.as_ref()))?;
    let service = RouteService::new(
        catalogue,
        NearestNeighbourPlanner::new(),
        ServiceConfig {
            pace: config.pace,
            ..ServiceConfig::default()
        },
    );
    write_envelope(writer, &service.respond_matrix(&config.list_id))
}
