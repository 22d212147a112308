//! Focused unit tests covering optimise configuration and execution.

use super::helpers::{SMALL_CATALOGUE, Workspace, stdout_json};
use super::*;
use crate::optimise::{OptimiseConfig, execute_optimise};
use foodbuddy_service::DEFAULT_START;
use geo::Coord;
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn config_for(request_path: Utf8PathBuf, catalogue: Option<Utf8PathBuf>) -> OptimiseConfig {
    OptimiseConfig {
        request_path,
        catalogue,
        default_start: DEFAULT_START,
        pace: WalkingPace::DEFAULT,
    }
}

#[rstest]
fn converting_without_request_errors() {
    let err = OptimiseConfig::try_from(OptimiseArgs::default()).expect_err("missing request");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_OPTIMISE_REQUEST);
            assert_eq!(env, ENV_OPTIMISE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn defaults_fill_in_start_and_pace() {
    let args = OptimiseArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        ..OptimiseArgs::default()
    };
    let config = OptimiseConfig::try_from(args).expect("config should build");
    assert_eq!(config.default_start, DEFAULT_START);
    assert_eq!(config.pace, WalkingPace::DEFAULT);
    assert_eq!(config.catalogue, None);
}

#[rstest]
fn explicit_start_and_speed_are_used() {
    let args = OptimiseArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        default_start_lat: Some(1.28),
        default_start_lng: Some(103.84),
        walking_speed_kmh: Some(4.0),
        ..OptimiseArgs::default()
    };
    let config = OptimiseConfig::try_from(args).expect("config should build");
    assert_eq!(config.default_start, Coord { x: 103.84, y: 1.28 });
    assert_eq!(config.pace, WalkingPace::from_kmh(4.0).expect("valid speed"));
}

#[rstest]
#[case::lat_only(Some(1.3), None)]
#[case::lng_only(None, Some(103.8))]
fn half_a_start_is_rejected(#[case] lat: Option<f64>, #[case] lng: Option<f64>) {
    let args = OptimiseArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        default_start_lat: lat,
        default_start_lng: lng,
        ..OptimiseArgs::default()
    };
    let err = OptimiseConfig::try_from(args).expect_err("partial start");
    assert!(matches!(err, CliError::PartialDefaultStart));
}

#[rstest]
fn out_of_range_start_is_rejected() {
    let args = OptimiseArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        default_start_lat: Some(95.0),
        default_start_lng: Some(103.8),
        ..OptimiseArgs::default()
    };
    let err = OptimiseConfig::try_from(args).expect_err("latitude too large");
    assert!(matches!(err, CliError::InvalidDefaultStart { .. }));
}

#[rstest]
#[case::zero(0.0)]
#[case::negative(-3.0)]
fn non_positive_speed_is_rejected(#[case] kmh: f64) {
    let args = OptimiseArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        walking_speed_kmh: Some(kmh),
        ..OptimiseArgs::default()
    };
    let err = OptimiseConfig::try_from(args).expect_err("invalid speed");
    assert!(matches!(err, CliError::InvalidWalkingSpeed(_)));
}

#[rstest]
fn missing_request_file_is_reported(workspace: Workspace) {
    let config = config_for(workspace.path("absent.json"), None);
    let err = config.validate_sources().expect_err("missing request");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_OPTIMISE_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directory_catalogue_is_reported(workspace: Workspace) {
    let request = workspace.write("request.json", r#"{ "listId": "trio" }"#);
    let catalogue = workspace.path("catalogue.d");
    std::fs::create_dir(catalogue.as_std_path()).expect("catalogue directory");
    let err = config_for(request, Some(catalogue))
        .validate_sources()
        .expect_err("catalogue is a directory");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_CATALOGUE),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn bundled_catalogue_is_used_by_default(workspace: Workspace) {
    let request = workspace.write("request.json", r#"{ "listId": "list-4" }"#);
    let mut stdout = Vec::new();
    let outcome = execute_optimise(&config_for(request, None), &mut stdout).expect("runs");
    assert_eq!(outcome, Outcome::Success);
    let json = stdout_json(&stdout);
    assert_eq!(
        json["data"]["optimizedOrder"],
        serde_json::json!(["place-6", "place-7"])
    );
    assert!(json["error"].is_null());
}

#[rstest]
fn request_start_overrides_default(workspace: Workspace) {
    let request = workspace.write(
        "request.json",
        r#"{ "listId": "trio", "startLocation": { "lat": 1.2790, "lng": 103.8430 } }"#,
    );
    let catalogue = workspace.write("catalogue.json", SMALL_CATALOGUE);
    let mut stdout = Vec::new();
    execute_optimise(&config_for(request, Some(catalogue)), &mut stdout).expect("runs");
    assert_eq!(
        stdout_json(&stdout)["data"]["optimizedOrder"],
        serde_json::json!(["A", "C", "B"])
    );
}

#[rstest]
fn rejected_requests_still_print_the_envelope(workspace: Workspace) {
    let request = workspace.write("request.json", r#"{ "listId": "empty" }"#);
    let catalogue = workspace.write("catalogue.json", SMALL_CATALOGUE);
    let mut stdout = Vec::new();
    let outcome =
        execute_optimise(&config_for(request, Some(catalogue)), &mut stdout).expect("runs");
    assert_eq!(outcome, Outcome::Rejected);
    let json = stdout_json(&stdout);
    assert!(json["data"].is_null());
    assert_eq!(json["error"]["code"], "EMPTY_LIST");
}

#[rstest]
fn malformed_request_is_a_cli_error(workspace: Workspace) {
    let request = workspace.write("request.json", "{ not json");
    let err = execute_optimise(&config_for(request, None), &mut Vec::new())
        .expect_err("malformed request");
    assert!(matches!(err, CliError::ParseRequest { .. }));
}

#[rstest]
fn invalid_catalogue_is_a_cli_error(workspace: Workspace) {
    let request = workspace.write("request.json", r#"{ "listId": "trio" }"#);
    let catalogue = workspace.write("catalogue.json", r#"{ "places": "nope" }"#);
    let err = execute_optimise(&config_for(request, Some(catalogue.clone())), &mut Vec::new())
        .expect_err("invalid catalogue");
    match err {
        CliError::LoadCatalogue { path, .. } => assert_eq!(path, Some(catalogue)),
        other => panic!("expected LoadCatalogue, found {other:?}"),
    }
}
