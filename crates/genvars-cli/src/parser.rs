//! Raw argument capture.
//!
//! clap's own help and version flags are disabled so that `-h`/`--help`
//! reach [`Invocation::classify`](crate::Invocation::classify) like any
//! other argument.

use std::ffi::OsString;

use clap::Parser;

use crate::args::{Invocation, PROGRAM_NAME};

#[derive(Debug, Parser)]
#[command(name = PROGRAM_NAME)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Every argument after the program name, unparsed
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse from an iterator whose first item is the program name.
    ///
    /// Never fails. If clap rejects the input (non-UTF-8 arguments) or
    /// consumes part of it (a bare `--`), every raw argument is kept
    /// lossily so the invocation still classifies as invalid.
    pub fn parse_lossy<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let raw: Vec<OsString> = itr.into_iter().map(Into::into).collect();
        match Self::try_parse_from(raw.clone()) {
            Ok(cli) if cli.args.len() + 1 >= raw.len() => cli,
            _ => Self {
                args: raw
                    .iter()
                    .skip(1)
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect(),
            },
        }
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::classify(&self.args)
    }
}
