use clap::Parser;
use small_katas::core::runner;
use small_katas::utils::{logger, validation::Validate};
use small_katas::CliConfig;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting small-katas");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if let Err(e) = runner::run(&config, &mut handle) {
        tracing::error!("Run failed: {} (Severity: {:?})", e, e.severity());
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}
