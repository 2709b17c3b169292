//! End-to-end check of the JSON log pipeline and the redaction gate.
//!
//! Kept to a single test: the global subscriber can only be installed
//! once per process.

use posview_cli::logging::{self, LogConfig, LogFormat, REDACTED_VALUE};
use tracing::level_filters::LevelFilter;
use tracing::warn;

#[test]
fn json_logs_reach_the_file_with_redacted_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posview.log");
    let config = LogConfig {
        level_filter: LevelFilter::WARN,
        use_env_filter: false,
        format: LogFormat::Json,
        log_file: Some(path.clone()),
        log_data: false,
        ..LogConfig::default()
    };
    logging::init_logging(&config).unwrap();

    warn!(customer = logging::redact_value("Jane Doe"), "row skipped");

    let contents = std::fs::read_to_string(&path).unwrap();
    let line = contents.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["fields"]["customer"], REDACTED_VALUE);
    assert_eq!(event["fields"]["message"], "row skipped");
    assert_eq!(event["level"], "WARN");
}
