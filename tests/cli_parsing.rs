//! Tests for CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;
use redirect_validator::Config;

#[test]
fn test_input_path_only() {
    let config = Config::try_parse_from(["redirect_validator", "url_list.csv"]).expect("parse");
    assert_eq!(config.input, PathBuf::from("url_list.csv"));
    assert_eq!(config.show_browser, 0);
    assert_eq!(config.open_report, 0);
    assert_eq!(config.output, PathBuf::from("_result.csv"));
}

#[test]
fn test_show_browser_flag() {
    let config =
        Config::try_parse_from(["redirect_validator", "url_list.csv", "1"]).expect("parse");
    assert_eq!(config.show_browser, 1);
    assert_eq!(config.open_report, 0);
}

#[test]
fn test_hidden_with_open_report() {
    let config =
        Config::try_parse_from(["redirect_validator", "url_list.csv", "0", "1"]).expect("parse");
    assert_eq!(config.show_browser, 0);
    assert_eq!(config.open_report, 1);
}

#[test]
fn test_missing_input_is_usage_error() {
    let err = Config::try_parse_from(["redirect_validator"]).expect_err("should fail");
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_too_many_positionals_is_usage_error() {
    let result = Config::try_parse_from(["redirect_validator", "a.csv", "0", "1", "9"]);
    assert!(result.is_err());
}

#[test]
fn test_output_override() {
    let config = Config::try_parse_from([
        "redirect_validator",
        "url_list.csv",
        "--output",
        "custom.csv",
    ])
    .expect("parse");
    assert_eq!(config.output, PathBuf::from("custom.csv"));
}
