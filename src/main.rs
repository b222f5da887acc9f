use clap::Parser;
use nectar_calc::app::prompt_inputs;
use nectar_calc::utils::error::ErrorSeverity;
use nectar_calc::utils::{logger, validation::Validate};
use nectar_calc::{
    CliConfig, MixEngine, MixInputs, NectarCalculator, NectarError, Outcome, OutputFormat,
    TomlConfig,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Starting nectar-calc");
    tracing::debug!("CLI config: {:?}", config);

    let form_config = match load_form_config(&config) {
        Ok(form_config) => form_config,
        Err(e) => exit_with(&e),
    };

    let format = match form_config.output_format() {
        Ok(from_file) => config.format.or(from_file).unwrap_or_default(),
        Err(e) => exit_with(&e),
    };

    let engine = MixEngine::new(NectarCalculator, form_config.form_spec());

    let run = if config.interactive {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let mut writer = std::io::stdout();
        prompt_inputs(engine.form(), &mut reader, &mut writer)
            .and_then(|inputs: MixInputs| engine.run(&inputs))
    } else {
        engine.run(&config.field_values(engine.form()))
    };

    let outcome = match Outcome::from_run(run) {
        Ok(outcome) => outcome,
        Err(e) => exit_with(&e),
    };

    let rendered = outcome.render(format)?;
    if outcome.is_success() || format == OutputFormat::Json {
        println!("{}", rendered);
    } else {
        eprintln!("{}", rendered);
    }

    if !outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn load_form_config(config: &CliConfig) -> nectar_calc::Result<TomlConfig> {
    let form_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading form from: {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    form_config.validate()?;
    Ok(form_config)
}

fn exit_with(e: &NectarError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
