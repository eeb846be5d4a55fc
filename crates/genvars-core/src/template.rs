//! The runtime variables template and its renderer.
//!
//! Placeholders are written `{{ name }}`. Only `target_package` and
//! `prog_data_dir` are recognized; anything else is a [`TemplateError`].
//! Rendering depends on nothing but the [`GenerationConfig`] passed in.

use thiserror::Error;

use crate::config::GenerationConfig;

/// Template for `runtime_vars.go`.
///
/// Declares a package-level `progDataDir` and sets it from `init`. The
/// header line marks the file as generated so Go tooling and reviewers
/// leave it alone. Indentation is a tab, as gofmt would produce.
pub const RUNTIME_VARS_TEMPLATE: &str = "\
// Code generated by go generate; DO NOT EDIT.
package {{ target_package }}

var (
\tprogDataDir string
)

// Sets specific variables to be used at runtime.
func init() {
\tprogDataDir = \"{{ prog_data_dir }}\"
}
";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Errors raised while rendering a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{` without a matching `}}`.
    #[error("unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },

    /// A placeholder name the renderer does not know.
    #[error("unknown placeholder `{name}` at byte {offset}")]
    UnknownPlaceholder { name: String, offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    TargetPackage,
    ProgDataDir,
}

impl Placeholder {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "target_package" => Some(Self::TargetPackage),
            "prog_data_dir" => Some(Self::ProgDataDir),
            _ => None,
        }
    }

    fn value(self, config: &GenerationConfig) -> &str {
        match self {
            Self::TargetPackage => &config.target_package,
            Self::ProgDataDir => config.resolved_prog_data_dir(),
        }
    }
}

/// Generated source text, held in memory until written.
///
/// Only produced by [`render`] and [`render_template`], so its contents are
/// always a fully substituted template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput(String);

impl RenderedOutput {
    /// Bytes to write to disk, verbatim.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

/// Render [`RUNTIME_VARS_TEMPLATE`] against `config`.
///
/// The package clause comes from `target_package` and the initializer
/// assigns `prog_data_dir`, or the fallback directory when none was given.
///
/// # Example
///
/// ```
/// use genvars_core::{GenerationConfig, render};
///
/// let output = render(&GenerationConfig::with_prog_data_dir("/custom/path")).unwrap();
/// assert!(output.as_str().contains("package main\n"));
/// assert!(output.as_str().contains("progDataDir = \"/custom/path\""));
/// ```
pub fn render(config: &GenerationConfig) -> Result<RenderedOutput, TemplateError> {
    render_template(RUNTIME_VARS_TEMPLATE, config)
}

/// Render an arbitrary template string against `config`.
///
/// Substituted values are inserted verbatim, without escaping. Text outside
/// placeholders is copied unchanged; whitespace inside `{{ }}` is ignored.
///
/// # Errors
///
/// - [`TemplateError::Unterminated`] when a `{{` has no closing `}}`
/// - [`TemplateError::UnknownPlaceholder`] for any name other than
///   `target_package` or `prog_data_dir`
///
/// Offsets in both variants are byte positions of the opening `{{`.
pub fn render_template(
    template: &str,
    config: &GenerationConfig,
) -> Result<RenderedOutput, TemplateError> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;
    let mut consumed = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);

        let offset = consumed + start;
        let after_open = &rest[start + OPEN.len()..];
        let end = after_open
            .find(CLOSE)
            .ok_or(TemplateError::Unterminated { offset })?;

        let name = after_open[..end].trim();
        let placeholder =
            Placeholder::parse(name).ok_or_else(|| TemplateError::UnknownPlaceholder {
                name: name.to_string(),
                offset,
            })?;
        out.push_str(placeholder.value(config));

        let advance = start + OPEN.len() + end + CLOSE.len();
        consumed += advance;
        rest = &rest[advance..];
    }
    out.push_str(rest);

    Ok(RenderedOutput(out))
}
