//! sweepgen - parameter sweep driver generator
//!
//! CLI entry point.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use sweepgen::cli::{Cli, Command, DeclarationArgs};
use sweepgen::config::Config;
use sweepgen::render::Renderer;
use sweepgen::scaffold::{ScaffoldRequest, scaffold};
use sweepgen::{Declaration, load_declaration};
use sweeprun::{Driver, OptionSchema, StandardLifecycle};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (WARN)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install log subscriber: {}", e))?;

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Generate {
            declaration,
            output,
            program,
            quiet,
        } => {
            cmd_generate(&config, &declaration, output.as_deref(), program.as_deref(), quiet)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Init {
            dir,
            declaration,
            name,
            program,
            force,
        } => {
            cmd_init(&config, &dir, &declaration, name.as_deref(), program.as_deref(), force)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Schema { declaration, json } => {
            cmd_schema(&config, &declaration, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Run {
            declaration,
            program,
            args,
        } => cmd_run(&config, &declaration, program.as_deref(), args),
    }
}

fn declaration(args: &DeclarationArgs) -> Result<Declaration> {
    load_declaration(&args.params, args.params_file.as_deref())
}

fn renderer(config: &Config) -> Renderer {
    Renderer::new(config.template_dir.as_deref())
}

fn cmd_generate(
    config: &Config,
    args: &DeclarationArgs,
    output: Option<&Path>,
    program: Option<&str>,
    quiet: bool,
) -> Result<()> {
    debug!(?output, ?program, quiet, "cmd_generate: called");
    let declaration = declaration(args)?;
    let source = renderer(config).render_driver(&declaration, &config.driver_options(program))?;

    let mut stdout = std::io::stdout().lock();
    match output {
        Some(path) => {
            std::fs::write(path, &source).context(format!("Failed to write {}", path.display()))?;
            writeln!(stdout, "{} Wrote driver to {}", "✓".green(), path.display().to_string().cyan())?;
            if !quiet {
                writeln!(stdout, "\n**** Generated code below ****\n")?;
                write!(stdout, "{}", source)?;
            }
        }
        None => write!(stdout, "{}", source)?,
    }
    Ok(())
}

fn cmd_init(
    config: &Config,
    dir: &Path,
    args: &DeclarationArgs,
    name: Option<&str>,
    program: Option<&str>,
    force: bool,
) -> Result<()> {
    debug!(?dir, ?name, force, "cmd_init: called");
    let declaration = declaration(args)?;
    let options = config.driver_options(program);
    let request = ScaffoldRequest {
        root: dir,
        package: name,
        declaration: &declaration,
        options: &options,
        runtime_dependency: &config.driver.runtime_dependency,
        force,
    };

    let written = scaffold(&renderer(config), &request)?;
    println!("{} Wrote {}", "✓".green(), written.manifest.display().to_string().cyan());
    println!("{} Wrote {}", "✓".green(), written.main.display().to_string().cyan());
    Ok(())
}

fn cmd_schema(config: &Config, args: &DeclarationArgs, json: bool) -> Result<()> {
    debug!(json, "cmd_schema: called");
    let declaration = declaration(args)?;
    let schema = OptionSchema::for_declaration(&config.driver.program, &declaration);

    if json {
        println!("{}", serde_json::to_string_pretty(schema.entries())?);
    } else {
        print!("{}", schema.describe());
    }
    Ok(())
}

fn cmd_run(
    config: &Config,
    args: &DeclarationArgs,
    program: Option<&str>,
    driver_args: Vec<String>,
) -> Result<ExitCode> {
    debug!(?driver_args, "cmd_run: called");
    let declaration = declaration(args)?;
    let options = config.driver_options(program);
    let driver = Driver::new(options.program.clone(), &declaration);

    let argv = std::iter::once(options.program).chain(driver_args);
    let mut stdout = std::io::stdout();
    let code = driver.execute(StandardLifecycle::default(), argv, &mut stdout);

    debug!(code, "cmd_run: driver finished");
    Ok(ExitCode::from(code))
}
