//! Command-line interface for corpus registry files
//! Tokenizes, parses and checks registry files, printing the tree in one of several formats.
//!
//! Usage:
//!   registry tokens `<path>` [--json]                        - List the parser input
//!   registry parse `<path>` [--format `<format>`] [--strict]  - Print the parsed tree
//!   registry check `<path>`                                   - Report how much input was consumed
//!
//! Every subcommand takes `--config <file>` to layer a TOML file over the built-in defaults.

mod commands;

use clap::{Arg, ArgAction, ArgMatches, Command};
use registry_config::{ConfigError, Loader, RegistryConfig};
use registry_parser::registry::formats::OutputFormat;
use std::path::Path;
use tracing_subscriber::prelude::*;

/// Exit status of `check` when the parser stopped before the end of the input
const EXIT_TRUNCATED: i32 = 2;

fn main() {
    let formats: Vec<&'static str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();

    let matches = Command::new("registry")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting corpus registry files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream the parser consumes")
                .arg(path_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print a JSON array instead of one token per line")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a registry file and print the tree")
                .arg(path_arg())
                .arg(corpus_id_arg())
                .arg(
                    Arg::new("variant")
                        .long("variant")
                        .help("Registry variant recorded on the tree"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default from config: treeviz)")
                        .value_parser(formats),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail when the parser stops before the end of the input")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("trace")
                        .long("trace")
                        .help("Log every state transition to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report whether the whole file was consumed")
                .arg(path_arg())
                .arg(corpus_id_arg()),
        )
        .get_matches();

    let (name, sub) = matches
        .subcommand()
        .expect("clap enforces a subcommand");
    let config = load_config(sub).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config);

    let path = sub
        .get_one::<String>("path")
        .expect("path is a required argument");
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    tracing::debug!(path = path.as_str(), bytes = source.len(), "read registry file");

    match name {
        "tokens" => print_or_exit(commands::tokens(&source, sub.get_flag("json"))),
        "parse" => print_or_exit(commands::parse(&source, &corpus_id(sub, path), &config)),
        "check" => match commands::check(&source, &corpus_id(sub, path), &config) {
            Ok(outcome) => {
                println!("{}", outcome.summary);
                if outcome.truncated {
                    std::process::exit(EXIT_TRUNCATED);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        _ => unreachable!("unknown subcommand {}", name),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the registry file")
        .required(true)
        .index(1)
}

fn corpus_id_arg() -> Arg {
    Arg::new("corpus-id")
        .long("corpus-id")
        .help("Corpus identifier (default: the file name)")
}

/// Defaults, then `--config`, then the subcommand's own flags.
fn load_config(sub: &ArgMatches) -> Result<RegistryConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = sub.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = arg(sub, "format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(variant) = arg(sub, "variant") {
        loader = loader.set_override("corpus.variant", variant.as_str())?;
    }
    if flag(sub, "strict") {
        loader = loader.set_override("parser.strict", true)?;
    }
    if flag(sub, "trace") {
        loader = loader.set_override("parser.trace", true)?;
    }
    loader.build()
}

/// Arguments that only some subcommands define
fn arg<'a>(sub: &'a ArgMatches, id: &str) -> Option<&'a String> {
    sub.try_get_one::<String>(id).ok().flatten()
}

fn flag(sub: &ArgMatches, id: &str) -> bool {
    sub.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
}

/// Log to stderr. `RUST_LOG` wins over the configured filter.
fn init_logging(config: &RegistryConfig) {
    let mut directive = config.logging.filter.clone();
    if config.parser.trace {
        directive.push_str(",registry_parser::transitions=trace");
    }
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| directive.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn corpus_id(sub: &ArgMatches, path: &str) -> String {
    if let Some(id) = sub.get_one::<String>("corpus-id") {
        return id.clone();
    }
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn print_or_exit(result: Result<String, String>) {
    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
