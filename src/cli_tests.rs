use std::path::PathBuf;

use super::*;

#[test]
fn cli_input_only() {
    let cli = Cli::parse_from(["logtally", "scan.log"]);
    assert_eq!(cli.input, PathBuf::from("scan.log"));
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert_eq!(cli.format, None);
    assert_eq!(cli.jobs, None);
    assert!(!cli.no_config);
}

#[test]
fn cli_requires_input() {
    assert!(Cli::try_parse_from(["logtally"]).is_err());
}

#[test]
fn cli_verbose_short_and_long() {
    let cli = Cli::parse_from(["logtally", "-v", "scan.log"]);
    assert_eq!(cli.verbose, 1);

    let cli = Cli::parse_from(["logtally", "scan.log", "--verbose"]);
    assert_eq!(cli.verbose, 1);

    let cli = Cli::parse_from(["logtally", "-vv", "scan.log"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_with_format() {
    let cli = Cli::parse_from(["logtally", "scan.log", "--format", "json"]);
    assert_eq!(cli.format, Some(OutputFormat::Json));
}

#[test]
fn cli_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["logtally", "scan.log", "--format", "xml"]).is_err());
}

#[test]
fn cli_with_jobs_and_sort() {
    let cli = Cli::parse_from(["logtally", "scan.log", "-j", "4", "--sort"]);
    assert_eq!(cli.jobs, Some(4));
    assert!(cli.sort);
}

#[test]
fn cli_with_config_and_output() {
    let cli = Cli::parse_from([
        "logtally",
        "scan.log",
        "--config",
        "custom.toml",
        "-o",
        "report.txt",
    ]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    assert_eq!(cli.output, Some(PathBuf::from("report.txt")));
}

#[test]
fn cli_stdin_input() {
    let cli = Cli::parse_from(["logtally", "-"]);
    assert_eq!(cli.input, PathBuf::from("-"));
}

#[test]
fn cli_color_never() {
    let cli = Cli::parse_from(["logtally", "scan.log", "--color", "never"]);
    assert_eq!(cli.color, ColorChoice::Never);
}
