use clap::Parser;
use place_indicators::utils::{logger, validation::Validate};
use place_indicators::{render, render_failure, CliConfig, IndicatorError, Session, TextSource};

fn main() {
    let config = CliConfig::parse();

    // 載入並合併設定檔
    let settings = match config
        .load_file_config()
        .and_then(|file| config.resolve(&file))
    {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if settings.log_json {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting place-indicators ({})", config.mode);
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let text = match TextSource::new(config.input.as_deref()).read_text() {
        Ok(text) => text,
        Err(e) => exit_with(&e),
    };

    let mut session = Session::new(config.mode, settings.scoring);
    let rendered = session
        .submit(&text)
        .and_then(|result| render(result, settings.format));

    match rendered {
        Ok(report) => {
            tracing::info!("Report ready");
            print!("{}", report);
        }
        Err(e) => {
            tracing::error!(
                "Computation failed: {} (Kind: {:?}, Category: {:?}, Severity: {:?})",
                e,
                e.kind(),
                e.category(),
                e.severity()
            );
            exit_with(&e);
        }
    }
}

fn exit_with(error: &IndicatorError) -> ! {
    eprint!("{}", render_failure(error));
    std::process::exit(error.exit_code());
}
