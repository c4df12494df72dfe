use std::fs;
use std::path::Path;

use clap::Parser;

use php_survey::cli::{Cli, ColorChoice, Commands, SurveyArgs};
use php_survey::config::{Config, ConfigLoader, FileConfigLoader};
use php_survey::output::{ColorMode, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};
use php_survey::source::{ArchiveSource, GitSource, SourceAcquirer};
use php_survey::{
    EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_SURVEY_ERROR, SurveyError, SurveyReport, Surveyor,
    logging,
};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Git(args) => run_acquired(&GitSource::new(), &args.url, &args.survey, &cli),
        Commands::Zip(args) => run_acquired(&ArchiveSource::new(), &args.url, &args.survey, &cli),
        Commands::Dir(args) => run_local(&args.path, &args.survey, &cli),
    };

    let exit_code = match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::debug!(kind = e.error_type(), "{e:?}");
            if e.is_config_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_SURVEY_ERROR
            }
        }
    };

    std::process::exit(exit_code);
}

/// Acquire a temporary tree, survey it, and remove it whatever the outcome.
fn run_acquired(
    acquirer: &impl SourceAcquirer,
    location: &str,
    args: &SurveyArgs,
    cli: &Cli,
) -> php_survey::Result<()> {
    // Configuration problems should surface before any download starts.
    let mut surveyor = build_surveyor(args, cli)?;

    let source = acquirer.acquire(location)?;
    let outcome = surveyor.survey(source.path());
    if let Err(e) = source.cleanup() {
        tracing::warn!("{e}");
    }

    emit(&outcome?, args, cli)
}

fn run_local(path: &Path, args: &SurveyArgs, cli: &Cli) -> php_survey::Result<()> {
    let mut surveyor = build_surveyor(args, cli)?;
    let report = surveyor.survey(path)?;
    emit(&report, args, cli)
}

fn build_surveyor(args: &SurveyArgs, cli: &Cli) -> php_survey::Result<Surveyor> {
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(Surveyor::from_config(&config)?.with_progress(!cli.quiet))
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> php_survey::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) if !path.exists() => Err(SurveyError::Config(format!(
            "Config file not found: {}",
            path.display()
        ))),
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

fn apply_cli_overrides(config: &mut Config, args: &SurveyArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extension.clone_from(ext);
    }

    config.scanner.exclude.extend(args.exclude.iter().cloned());

    if args.parallel {
        config.scanner.parallel = true;
    }
}

fn emit(report: &SurveyReport, args: &SurveyArgs, cli: &Cli) -> php_survey::Result<()> {
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, report, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output)
}

fn format_output(
    format: OutputFormat,
    report: &SurveyReport,
    color_mode: ColorMode,
    verbose: u8,
) -> php_survey::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str) -> php_survey::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        print!("{content}");
    }
    Ok(())
}
