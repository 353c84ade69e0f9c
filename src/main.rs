use age_advisor::utils::{logger, validation::Validate};
use age_advisor::{AdvisorEngine, AdvisorError, Clock, CliConfig, FixedClock, SystemClock, TomlConfig};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // The config file can pick the output format, which also picks the log format.
    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if config.output_format(&file_config) == "json" {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);
    if let Some(path) = &config.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }

    if let Err(e) = run(&config, &file_config) {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig, file_config: &TomlConfig) -> Result<(), AdvisorError> {
    config.validate()?;
    file_config.validate()?;

    let input = config.profile_input(file_config)?;

    match config.reference_date()? {
        Some(today) => {
            tracing::info!("Using fixed reference date {}", today);
            report(AdvisorEngine::new(FixedClock(today)), &input, config, file_config)
        }
        None => report(AdvisorEngine::new(SystemClock), &input, config, file_config),
    }
}

fn report<C: Clock>(
    engine: AdvisorEngine<C>,
    input: &age_advisor::ProfileInput,
    config: &CliConfig,
    file_config: &TomlConfig,
) -> Result<(), AdvisorError> {
    file_config.limits.check(input, engine.today())?;

    let report = engine.evaluate(input)?;

    match config.output_format(file_config) {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{}", report.render_text()),
    }
    Ok(())
}
