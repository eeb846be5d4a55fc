//! CLI entry point - the composition root.
//!
//! Classifies the arguments, then either prints usage or wires the git
//! resolver into the generation handler.

use std::process::ExitCode;

use genvars_cli::{Cli, CliError, Invocation, PROGRAM_NAME, exit_code_for, handlers, logging, usage};
use genvars_runtime::GitRepoRootResolver;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let invocation = cli.invocation();

    if invocation.prints_usage() {
        print!("{}", usage());
    }

    match invocation {
        Invocation::Help => Ok(()),
        Invocation::Invalid => Err(CliError::Usage(cli.args.join(" ")).into()),
        Invocation::Generate => {
            handlers::generate::execute(GitRepoRootResolver::new())?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse_lossy(std::env::args_os());
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Printed directly so it survives RUST_LOG=off
            eprintln!("{PROGRAM_NAME}: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
