//! Pretty text logging to a file.

use std::fs;

use ghcal_cli::logging::{LogConfig, init_logging};

#[test]
fn pretty_log_file_receives_workspace_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ghcal.log");
    let mut config = LogConfig::from_verbosity(1).with_log_file(Some(path.clone()));
    config.use_env_filter = false;
    config.with_ansi = false;
    init_logging(&config).unwrap();

    tracing::info!(target: "ghcal_core", months = 2, "loaded CSV into session");
    tracing::info!(target: "other_crate", "filtered out");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("loaded CSV into session"), "{contents}");
    assert!(contents.contains("months=2"), "{contents}");
    assert!(!contents.contains("filtered out"), "{contents}");
}
