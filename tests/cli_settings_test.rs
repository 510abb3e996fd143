use anyhow::Result;
use place_indicators::{
    render, CliConfig, Mode, OutputFormat, PolicyKind, Session, TextSource,
};
use std::io::Write;
use tempfile::NamedTempFile;

const TABLE: &str = include_str!("fixtures/accessibility_table.txt");

fn cli_with(config_path: Option<String>, input_path: Option<String>) -> CliConfig {
    CliConfig {
        mode: Mode::Accessibility,
        input: input_path,
        config: config_path,
        policy: None,
        strict_totals: false,
        format: None,
        verbose: false,
        log_json: false,
    }
}

#[test]
fn test_file_settings_drive_the_session() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(
        b"[scoring]\npolicy = \"scaled\"\nenforce_transit_total = true\n\n[output]\nformat = \"csv\"\n",
    )?;
    let mut input_file = NamedTempFile::new()?;
    input_file.write_all(TABLE.as_bytes())?;

    let cli = cli_with(
        Some(config_file.path().to_string_lossy().into_owned()),
        Some(input_file.path().to_string_lossy().into_owned()),
    );
    let settings = cli.resolve(&cli.load_file_config()?)?;

    assert_eq!(settings.scoring.policy, PolicyKind::Scaled);
    assert!(settings.scoring.enforce_transit_total);
    assert_eq!(settings.format, OutputFormat::Csv);

    let text = TextSource::new(cli.input.as_deref()).read_text()?;
    let mut session = Session::new(cli.mode, settings.scoring);
    let report = render(session.submit(&text)?, settings.format)?;

    assert!(report.starts_with("code,label,score\n"));
    assert_eq!(report.lines().count(), 22);
    Ok(())
}

#[test]
fn test_invalid_file_setting_is_reported() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(b"[output]\nformat = \"xlsx\"\n")?;

    let cli = cli_with(Some(config_file.path().to_string_lossy().into_owned()), None);
    let err = cli.load_file_config().unwrap_err();

    assert_eq!(err.kind(), place_indicators::ErrorKind::Config);
    assert!(err.to_string().contains("output.format"));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let cli = cli_with(Some("/nonexistent/place-indicators.toml".to_string()), None);
    let err = cli.load_file_config().unwrap_err();

    assert_eq!(err.kind(), place_indicators::ErrorKind::Io);
    assert_eq!(err.exit_code(), 3);
}
