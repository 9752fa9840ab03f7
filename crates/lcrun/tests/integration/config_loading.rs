use lcrun::{Config, ConfigError, Runner};

use crate::FIXTURES_PATH;

fn config_fixture(name: &str) -> String {
    format!("{FIXTURES_PATH}/configs/{name}")
}

#[test]
fn test_full_config_overrides_everything() {
    let config = Config::from_file(config_fixture("full.toml")).unwrap();

    assert_eq!(config.output_channel, "Practice Runs");
    assert!(config.shows_run_locally());

    let toolchains = &config.toolchains;
    assert_eq!(toolchains.python.program(), "python3.12");
    assert_eq!(toolchains.python.leading_args(), ["-X", "utf8"]);
    assert_eq!(toolchains.javascript.to_string(), "node --no-warnings");
    assert_eq!(toolchains.javac.leading_args(), ["-encoding", "UTF-8"]);
    assert_eq!(toolchains.cpp.to_string(), "clang++ -std=c++20 -O1");
}

#[test]
fn test_partial_config_keeps_default_toolchains() {
    let config = Config::from_file(config_fixture("shortcuts-only.toml")).unwrap();

    assert_eq!(config.output_channel, "LeetCode Local Run");
    assert!(!config.shows_run_locally());
    assert_eq!(config.toolchains.python.program(), "python3");
    assert_eq!(config.toolchains.python_fallback.program(), "python");
    assert_eq!(config.toolchains.cpp.to_string(), "g++ -std=c++17 -O2");
    assert_eq!(config.toolchains.go.program(), "go");
}

#[test]
fn test_unknown_shortcut_is_rejected() {
    let err = Config::from_file(config_fixture("unknown-shortcut.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("debug"));
}

#[test]
fn test_empty_toolchain_is_rejected() {
    assert!(Config::from_file(config_fixture("empty-toolchain.toml")).is_err());
}

#[test]
fn test_missing_config_file() {
    let err = Config::from_file(config_fixture("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_example_config_matches_defaults() {
    let parsed = Config::parse_toml(lcrun::EXAMPLE_CONFIG).unwrap();
    let runner = Runner::with_defaults();
    let defaults = runner.config();

    assert_eq!(parsed.output_channel, defaults.output_channel);
    assert_eq!(parsed.shortcuts, defaults.shortcuts);
    assert_eq!(parsed.toolchains.python, defaults.toolchains.python);
    assert_eq!(parsed.toolchains.cpp, defaults.toolchains.cpp);
}
