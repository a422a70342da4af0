//! CLI command implementations
//!
//! Every command boots the same way:
//! 1. Load and validate the config file
//! 2. Load the classifier artifact (fatal on failure)
//! 3. Build the screening handler around the read-only artifact

use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::features::{FeatureBounds, FeatureVector};
use crate::http_server::HttpServer;
use crate::model::ClassifierArtifact;
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::screening::ScreeningHandler;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request_from, write_error_to, write_response_to};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    if reserves_stdout(&cmd) {
        Logger::reserve_stdout();
    }

    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Screen { config } => screen(&config),
        Command::ModelInfo { config } => model_info(&config),
    }
}

/// One-shot commands print a single JSON document on stdout
fn reserves_stdout(cmd: &Command) -> bool {
    matches!(cmd, Command::Screen { .. } | Command::ModelInfo { .. })
}

/// Load config and artifact, returning the config and a ready handler
pub fn boot(config_path: &Path) -> CliResult<(Config, ScreeningHandler)> {
    log_event(Event::BootStart);

    let config = Config::load(config_path)?;
    let model_path = config.model_path();
    let model_path_str = model_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("model_path", model_path_str.as_str())]);

    let artifact = match ClassifierArtifact::load(&model_path) {
        Ok(artifact) => artifact,
        Err(e) => {
            log_event_with_fields(
                Event::ModelLoadFailed,
                &[("code", e.code()), ("reason", e.to_string().as_str())],
            );
            return Err(e.into());
        }
    };

    let feature_count = artifact.feature_names.len().to_string();
    log_event_with_fields(
        Event::ModelLoaded,
        &[("features", feature_count.as_str()), ("model", artifact.model_name.as_str())],
    );

    let handler = ScreeningHandler::from_artifact(Arc::new(artifact));
    Ok((config, handler))
}

/// Serve the screening form
///
/// Runs on a single-threaded runtime; requests are handled one at a time.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let (config, handler) = boot(config_path)?;

    let mut http_config = config.http.clone();
    if let Some(port) = port {
        http_config.port = port;
    }
    let server = HttpServer::new(http_config, handler);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Screen one applicant from stdin and print the report
pub fn screen(config_path: &Path) -> CliResult<()> {
    let stdin = io::stdin();
    screen_with(config_path, &mut stdin.lock(), &mut io::stdout())
}

/// Screen one applicant read from `reader`, writing one JSON line to `writer`
///
/// A scoring error is written as an error response and then returned, so
/// the process still exits non-zero.
pub fn screen_with<R: Read, W: Write>(
    config_path: &Path,
    reader: &mut R,
    writer: &mut W,
) -> CliResult<()> {
    let (_config, handler) = boot(config_path)?;

    let vector: FeatureVector = read_request_from(reader)?;

    match handler.screen(&vector) {
        Ok(report) => write_response_to(writer, &report),
        Err(e) => {
            write_error_to(writer, e.code(), &e.to_string())?;
            Err(e.into())
        }
    }
}

#[derive(Debug, Serialize)]
struct ModelInfo<'a> {
    model_name: &'a str,
    format_version: u32,
    feature_names: &'a [String],
    threshold: f64,
    input_bounds: Vec<InputBounds>,
    rules: Vec<String>,
}

#[derive(Debug, Serialize)]
struct InputBounds {
    name: &'static str,
    min: f64,
    max: f64,
    default: f64,
}

/// Print the artifact's schema, cutoff, input bounds and explanation rules
pub fn model_info(config_path: &Path) -> CliResult<()> {
    model_info_to(config_path, &mut io::stdout())
}

/// Write the model summary as one JSON line to `writer`
pub fn model_info_to<W: Write>(config_path: &Path, writer: &mut W) -> CliResult<()> {
    let (_config, handler) = boot(config_path)?;
    let artifact = handler.scorer().artifact();

    let info = ModelInfo {
        model_name: &artifact.model_name,
        format_version: artifact.format_version,
        feature_names: &artifact.feature_names,
        threshold: artifact.threshold,
        input_bounds: FeatureBounds::ALL
            .iter()
            .map(|b| InputBounds {
                name: b.name,
                min: b.min,
                max: b.max,
                default: b.default,
            })
            .collect(),
        rules: crate::explain::RuleRegistry::heloc()
            .rules()
            .iter()
            .map(|r| r.to_string())
            .collect(),
    };

    write_response_to(writer, &info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const ARTIFACT: &str = r#"{
        "format_version": 1,
        "model_name": "unit",
        "feature_names": ["ExternalRiskEstimate", "NumInqLast6M",
            "NetFractionRevolvingBurden", "NumSatisfactoryTrades", "AverageMInFile"],
        "scaler": { "mean": [0, 0, 0, 0, 0], "scale": [1, 1, 1, 1, 1] },
        "coefficients": [0, 0, 0, 0, 0],
        "intercept": 0
    }"#;

    const HIGH_RISK: &str = r#"{"ExternalRiskEstimate": 55, "NumInqLast6M": 4,
        "NetFractionRevolvingBurden": 80, "NumSatisfactoryTrades": 5, "AverageMInFile": 40}"#;

    fn write_config(tmp: &TempDir, artifact: &str) -> PathBuf {
        fs::write(tmp.path().join("m.json"), artifact).unwrap();
        let config_path = tmp.path().join("heloc.json");
        fs::write(&config_path, r#"{"model_path": "m.json"}"#).unwrap();
        config_path
    }

    fn single_json_line(out: Vec<u8>) -> serde_json::Value {
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1, "expected one line, got: {}", text);
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_one_shot_commands_reserve_stdout() {
        let config = PathBuf::from("heloc.json");
        assert!(reserves_stdout(&Command::Screen { config: config.clone() }));
        assert!(reserves_stdout(&Command::ModelInfo { config: config.clone() }));
        assert!(!reserves_stdout(&Command::Serve { config, port: None }));
    }

    #[test]
    fn test_screen_writes_one_report_line() {
        let tmp = TempDir::new().unwrap();
        let config_path = write_config(&tmp, ARTIFACT);

        let mut out = Vec::new();
        screen_with(&config_path, &mut Cursor::new(HIGH_RISK), &mut out).unwrap();

        let response = single_json_line(out);
        assert_eq!(response["status"], "ok");
        // Zero weights and intercept give p = 0.5, which is not above the cutoff
        assert_eq!(response["data"]["decision"], "not_forwarded");
        assert_eq!(response["data"]["probability_display"], "0.500");
    }

    #[test]
    fn test_screen_schema_mismatch_writes_error_and_fails() {
        let tmp = TempDir::new().unwrap();
        let renamed = ARTIFACT.replace("AverageMInFile", "MonthsInFile");
        let config_path = write_config(&tmp, &renamed);

        let mut out = Vec::new();
        let err = screen_with(&config_path, &mut Cursor::new(HIGH_RISK), &mut out).unwrap_err();
        assert_eq!(err.code_str(), "HELOC_CLI_SCREENING_FAILED");

        let response = single_json_line(out);
        assert_eq!(response["status"], "error");
        assert_eq!(response["code"], "HELOC_MODEL_SCHEMA_MISMATCH");
    }

    #[test]
    fn test_screen_rejects_malformed_input() {
        let tmp = TempDir::new().unwrap();
        let config_path = write_config(&tmp, ARTIFACT);

        let mut out = Vec::new();
        let err = screen_with(&config_path, &mut Cursor::new("{"), &mut out).unwrap_err();
        assert_eq!(err.code_str(), "HELOC_CLI_IO_ERROR");
        assert!(out.is_empty());
    }

    #[test]
    fn test_model_info_reports_schema_and_cutoff() {
        let tmp = TempDir::new().unwrap();
        let config_path = write_config(&tmp, ARTIFACT);

        let mut out = Vec::new();
        model_info_to(&config_path, &mut out).unwrap();

        let response = single_json_line(out);
        let data = &response["data"];
        assert_eq!(data["model_name"], "unit");
        assert_eq!(data["threshold"], 0.5);
        let names: Vec<&str> = data["feature_names"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(names, crate::features::FEATURE_NAMES.to_vec());
        assert_eq!(data["rules"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_boot_loads_artifact() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("m.json"), ARTIFACT).unwrap();
        let config_path = tmp.path().join("heloc.json");
        fs::write(&config_path, r#"{"model_path": "m.json"}"#).unwrap();

        let (config, handler) = boot(&config_path).unwrap();
        assert_eq!(config.http.port, 8501);
        assert_eq!(handler.scorer().artifact().model_name, "unit");
    }

    #[test]
    fn test_boot_fails_on_missing_artifact() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("heloc.json");
        fs::write(&config_path, r#"{"model_path": "absent.json"}"#).unwrap();

        let err = boot(&config_path).unwrap_err();
        assert_eq!(err.code_str(), "HELOC_CLI_BOOT_FAILED");
    }

    #[test]
    fn test_boot_fails_on_corrupt_artifact() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("m.json"), "not json").unwrap();
        let config_path = tmp.path().join("heloc.json");
        fs::write(&config_path, r#"{"model_path": "m.json"}"#).unwrap();

        assert!(boot(&config_path).is_err());
    }
}
