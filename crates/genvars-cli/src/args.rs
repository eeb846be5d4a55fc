//! Argument classification and usage text.

/// Name printed in the usage line.
pub const PROGRAM_NAME: &str = "genruntime_vars";

const HELP_FLAGS: [&str; 2] = ["-h", "--help"];

/// What an invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: run the generator.
    Generate,
    /// A single `-h` or `--help`.
    Help,
    /// Anything else.
    Invalid,
}

impl Invocation {
    /// Classify the arguments that follow the program name.
    ///
    /// Only a lone help flag counts as a help request; `-h foo` and
    /// `--help --help` are both invalid.
    pub fn classify<S: AsRef<str>>(args: &[S]) -> Self {
        match args {
            [] => Self::Generate,
            [only] if HELP_FLAGS.contains(&only.as_ref()) => Self::Help,
            _ => Self::Invalid,
        }
    }

    /// Whether usage should be printed for this invocation.
    pub const fn prints_usage(self) -> bool {
        !matches!(self, Self::Generate)
    }
}

/// The fixed usage message.
pub fn usage() -> String {
    format!(
        "Usage: {PROGRAM_NAME}\n\nThis program does not plan on having a functional command line interface (CLI).\n\n"
    )
}
