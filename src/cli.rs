use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DuplicateNames {
    Deny,
    Warn,
    Allow,
}

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(help = "The registry file (vk.xml) or URL")]
    pub input: String,

    #[arg(long, help = "TOML file extending the built-in override tables")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "warn", value_enum)]
    pub duplicate_names: DuplicateNames,

    #[arg(
        long = "enum",
        value_name = "NAME",
        help = "Only process this enumeration (raw registry name); may be repeated"
    )]
    pub enums: Vec<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more (-v info, -vv debug)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print Rust declarations for the enumerations (default)
    Enums,
    /// Print the resolved prefix of every enumeration
    Prefixes,
    /// Print the normalized parameter list of every command
    Params {
        #[arg(long, help = "Only print this command")]
        command: Option<String>,
    },
}
