pub mod hunk;
pub mod lcs;
pub mod options;
pub mod unified;

pub use hunk::{Hunk, Line};
pub use lcs::{EditScript, Group, Piece};
pub use options::{Options, Source};
pub use unified::{DiffInfo, Format, Lines};

use thiserror::Error;

/// Errors reported at the configuration boundary, before any
/// computation starts. The pipeline itself has no recoverable
/// failures for well-formed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid value {value:?} for option `{option}`")]
    Configuration {
        option: &'static str,
        value: String,
    },
    #[error("output format {0:?} not found")]
    FormatNotFound(String),
}

/// Computes the context-padded hunks between two line sequences.
pub fn diff_hunks<T: Eq + Clone>(old: &[T], new: &[T], options: &Options) -> Vec<Hunk<T>> {
    hunk::hunks(old, new, options.context)
}

/// Computes and renders a unified diff in one call.
///
/// # Examples
///
/// ```
/// use linework::{unified_text, Options};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "x", "c"];
/// let text = unified_text(&old, &new, None, &Options::default());
/// assert_eq!(text, " a\n-b\n+x\n c\n");
/// ```
pub fn unified_text<T: Eq + Clone + ToString>(
    old: &[T],
    new: &[T],
    info: Option<&DiffInfo>,
    options: &Options,
) -> String {
    let hunks = diff_hunks(old, new, options);
    unified::render(old, &hunks, info, options)
}

/// Renders in the requested format. Format names are validated into
/// `Format` at the boundary via `FromStr`.
pub fn render_as<T: Eq + Clone + ToString>(
    format: Format,
    old: &[T],
    new: &[T],
    info: Option<&DiffInfo>,
    options: &Options,
) -> String {
    match format {
        Format::Text => unified_text(old, new, info, options),
    }
}
