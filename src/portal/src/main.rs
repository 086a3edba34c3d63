#![allow(special_module_name)]
use crate::lib::diagnosis::{diagnose, Diagnosis};
use crate::lib::environment::{Environment, EnvironmentImpl};
use crate::lib::error::PortalResult;
use crate::lib::logger::{create_root_logger, LoggingMode};
use crate::util::stderr_wrapper::ColoredWrite;
use anyhow::{Context, Error};
use candid::Principal;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

mod commands;
mod lib;
mod util;

/// Casino portal: player profiles, deposits and the admin payout desk.
#[derive(Parser)]
#[command(name = "portal", version, arg_required_else_help = true)]
pub struct CliOpts {
    /// Displays detailed information about operations. -vv also traces every backend call.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    quiet: u8,

    /// The logging mode to use. You can log to stderr, a file, or both.
    #[arg(long = "log", default_value = "stderr", value_parser = ["stderr", "tee", "file"], global = true)]
    logmode: String,

    /// The file to log to, if logging to a file (see --log).
    #[arg(long, global = true)]
    logfile: Option<String>,

    /// Path of the portal configuration file.
    #[arg(long, env = "PORTAL_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// URL of the network the backend canister runs on.
    #[arg(long, global = true, value_name = "URL")]
    network: Option<String>,

    /// Canister id of the casino backend.
    #[arg(long, global = true, value_name = "PRINCIPAL")]
    backend: Option<Principal>,

    /// PEM file holding the key to sign calls with. Calls are anonymous without one.
    #[arg(long, env = "PORTAL_IDENTITY_PEM", global = true)]
    identity_pem: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::PortalCommand,
}

/// Setup a logger with the proper configuration, based on arguments.
fn setup_logging(opts: &CliOpts) -> PortalResult<slog::Logger> {
    let verbose_level = opts.verbose as i64 - opts.quiet as i64;
    let mode = LoggingMode::from_flags(&opts.logmode, opts.logfile.as_deref());
    create_root_logger(verbose_level, mode).context("Failed to open the log file.")
}

fn print_error_and_diagnosis(err: Error, error_diagnosis: Diagnosis) {
    let mut stderr = util::stderr_wrapper::stderr_wrapper();

    for (level, cause) in err.chain().enumerate() {
        let (color, prefix) = if level == 0 {
            (term::color::RED, "Error")
        } else {
            (term::color::YELLOW, "Caused by")
        };
        stderr.labelled(color, &format!("{prefix}: "), &cause.to_string());
    }

    if let Some(error_explanation) = error_diagnosis.0 {
        stderr.heading(term::color::YELLOW, "Error explanation:");
        stderr.line(&error_explanation);
    }
    if let Some(action_suggestion) = error_diagnosis.1 {
        stderr.heading(term::color::YELLOW, "How to resolve the error:");
        stderr.line(&action_suggestion);
    }
}

fn inner_main() -> PortalResult {
    let cli_opts = CliOpts::parse();
    let log = setup_logging(&cli_opts)?;

    let env = EnvironmentImpl::new(cli_opts.config)?
        .with_logger(log)
        .with_network_override(cli_opts.network)
        .with_backend_override(cli_opts.backend)
        .with_identity_override(cli_opts.identity_pem);

    slog::trace!(
        env.get_logger(),
        "Trace mode enabled. Lots of logs coming up."
    );
    commands::exec(&env, cli_opts.command)
}

fn main() {
    let result = inner_main();
    if let Err(err) = result {
        let error_diagnosis = diagnose(&err);
        print_error_and_diagnosis(err, error_diagnosis);
        std::process::exit(255);
    }
}

#[cfg(test)]
mod tests {
    use crate::CliOpts;
    use clap::{CommandFactory, Parser};

    #[test]
    fn validate_cli() {
        CliOpts::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let opts = CliOpts::try_parse_from([
            "portal",
            "admin",
            "pending",
            "--backend",
            "rrkah-fqaaa-aaaaa-aaaaq-cai",
            "-vv",
        ])
        .unwrap();
        assert_eq!(opts.verbose, 2);
        assert_eq!(
            opts.backend.map(|p| p.to_text()).as_deref(),
            Some("rrkah-fqaaa-aaaaa-aaaaq-cai")
        );
    }

    #[test]
    fn rejects_bad_principals() {
        assert!(CliOpts::try_parse_from(["portal", "whoami", "--backend", "nope"]).is_err());
    }
}
