// src/cli.rs
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf, time::Duration};

use crate::{
    commands::{self, run::RunArgs},
    infra::t,
};

/// Build directory used when `--build` is not given: `build/` next to the
/// harness sources.
pub const DEFAULT_BUILD_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/build");

/// Configuration used when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "Debug";

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|arg| arg == "--lang")
        .and_then(|pos| args.get(pos + 1))
        .cloned()
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("example-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("build")
                .short('B')
                .long("build")
                .help(t!("arg_build", locale = locale).to_string())
                .value_name("DIR")
                .default_value(DEFAULT_BUILD_DIR)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('C')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .default_value(DEFAULT_CONFIG)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help(t!("arg_timeout", locale = locale).to_string())
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64).range(1..))
                .action(ArgAction::Set),
        )
}

/// Turns parsed matches into run arguments, expanding `~` and environment
/// variables in the build directory.
pub fn run_args_from_matches(matches: &ArgMatches) -> Result<RunArgs> {
    let build = matches
        .get_one::<String>("build")
        .map(String::as_str)
        .unwrap_or(DEFAULT_BUILD_DIR);
    let build_dir = shellexpand::full(build)
        .with_context(|| format!("Failed to expand build directory: {build}"))?;
    let config = matches
        .get_one::<String>("config")
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let timeout = matches
        .get_one::<u64>("timeout")
        .copied()
        .map(Duration::from_secs);

    Ok(RunArgs {
        build_dir: PathBuf::from(build_dir.as_ref()),
        config,
        timeout,
    })
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = crate::init(pre_parse_language().as_deref());

    let matches = build_cli(&language).get_matches();
    let args = run_args_from_matches(&matches)?;

    commands::run::execute(args).await
}
