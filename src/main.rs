mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use vk_namegen::generator::{
    self, describe_command, type_map::RegistryTypeMapper, DuplicateNameAction, EnumFilter,
};
use vk_namegen::{registry, Config, Result};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let source = registry::load_source(&cli.input)?;
    let document = roxmltree::Document::parse(&source)?;
    let registry = registry::read_registry(&document)?;
    let filter = EnumFilter(cli.enums);

    match cli.command.unwrap_or(cli::Command::Enums) {
        cli::Command::Enums => {
            let rst = generator::generate_rust(
                &registry,
                &config,
                &filter,
                match cli.duplicate_names {
                    cli::DuplicateNames::Deny => DuplicateNameAction::Deny,
                    cli::DuplicateNames::Warn => DuplicateNameAction::Warn,
                    cli::DuplicateNames::Allow => DuplicateNameAction::Allow,
                },
            )?;
            print!("{rst}");
        }
        cli::Command::Prefixes => {
            for normalized in generator::normalize_enums(&registry, &config, &filter) {
                println!(
                    "{} {} {}",
                    normalized.raw_type_name, normalized.mapped_type_name, normalized.prefix
                );
            }
        }
        cli::Command::Params { command } => {
            let mapper = RegistryTypeMapper::new(&config);
            for spec in registry
                .commands
                .iter()
                .filter(|c| command.as_deref().map_or(true, |name| c.name == name))
            {
                println!("{}", describe_command(spec, &mapper));
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
