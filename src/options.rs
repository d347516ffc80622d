use std::str::FromStr;
use std::sync::RwLock;

use crate::unified::Format;
use crate::Error;

/// How the two inputs handed to the engine were obtained. The engine
/// itself only ever sees line sequences; the source is carried for
/// callers that label and timestamp the diff header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Strings,
    Files,
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "strings" => Ok(Source::Strings),
            "files" => Ok(Source::Files),
            other => Err(Error::Configuration {
                option: "source",
                value: other.to_string(),
            }),
        }
    }
}

/// Immutable per-computation configuration.
///
/// `context` doubles as the merge switch: a width of zero disables
/// overlap tracking, so adjacent hunks are never fused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub source: Source,
    pub context: usize,
    pub include_diff_info: bool,
    pub allow_empty_diff: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            source: Source::Strings,
            // wide enough that a whole file collapses into one hunk
            context: 10_000,
            include_diff_info: false,
            allow_empty_diff: true,
        }
    }
}

static DEFAULT_OPTIONS: RwLock<Option<Options>> = RwLock::new(None);
static DEFAULT_FORMAT: RwLock<Option<Format>> = RwLock::new(None);

/// Process-wide default options. Only the outermost CLI/config layer
/// should write these; a computation reads them once at call start
/// and never mid-flight.
pub fn default_options() -> Options {
    let guard = DEFAULT_OPTIONS.read().unwrap_or_else(|e| e.into_inner());
    (*guard).clone().unwrap_or_default()
}

pub fn set_default_options(options: Options) {
    let mut guard = DEFAULT_OPTIONS.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(options);
}

/// Process-wide default output format, `Format::Text` unless set.
pub fn default_format() -> Format {
    let guard = DEFAULT_FORMAT.read().unwrap_or_else(|e| e.into_inner());
    (*guard).unwrap_or(Format::Text)
}

pub fn set_default_format(format: Format) {
    let mut guard = DEFAULT_FORMAT.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(format);
}
