use std::ops::Range;
use std::str::FromStr;

use crate::hunk::{Hunk, Line};
use crate::options::Options;
use crate::Error;

/// Supported render modes. Formats are looked up by name at the
/// boundary; rendering itself dispatches on the closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "text" => Ok(Format::Text),
            other => Err(Error::FormatNotFound(other.to_string())),
        }
    }
}

/// Header metadata for the `---`/`+++` lines: display names and
/// preformatted timestamps for the two inputs. Supplying it is the
/// caller's job (file path and mtime when diffing files, synthetic
/// labels when diffing in-memory strings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    pub old_label: String,
    pub old_stamp: String,
    pub new_label: String,
    pub new_stamp: String,
}

impl DiffInfo {
    pub fn new(
        old_label: impl Into<String>,
        old_stamp: impl Into<String>,
        new_label: impl Into<String>,
        new_stamp: impl Into<String>,
    ) -> Self {
        DiffInfo {
            old_label: old_label.into(),
            old_stamp: old_stamp.into(),
            new_label: new_label.into(),
            new_stamp: new_stamp.into(),
        }
    }
}

/// Renders a hunk sequence as one unified-diff text blob. Pure:
/// rendering the same hunks twice yields byte-identical output.
pub fn render<T: ToString>(
    old: &[T],
    hunks: &[Hunk<T>],
    info: Option<&DiffInfo>,
    options: &Options,
) -> String {
    lines(old, hunks, info, options).collect()
}

/// Lazy line-by-line view over the rendered diff. Finite, and
/// restartable by calling this again on the same hunk list. When
/// `include_diff_info` is off, header and `@@` marker lines are left
/// out, so only content lines are yielded.
pub fn lines<'a, T>(
    old: &'a [T],
    hunks: &'a [Hunk<T>],
    info: Option<&'a DiffInfo>,
    options: &Options,
) -> Lines<'a, T> {
    let cursor = if hunks.is_empty() {
        // No differences: either nothing at all, or the whole old
        // side echoed back as context.
        if options.allow_empty_diff {
            Cursor::Done
        } else {
            Cursor::Fallback(0)
        }
    } else if options.include_diff_info && info.is_some() {
        Cursor::Info(0)
    } else {
        Cursor::Marker(0)
    };
    Lines {
        old,
        hunks,
        info,
        include_diff_info: options.include_diff_info,
        cursor,
    }
}

pub struct Lines<'a, T> {
    old: &'a [T],
    hunks: &'a [Hunk<T>],
    info: Option<&'a DiffInfo>,
    include_diff_info: bool,
    cursor: Cursor,
}

#[derive(Clone, Copy)]
enum Cursor {
    Info(u8),
    Marker(usize),
    Body { hunk: usize, line: usize },
    Fallback(usize),
    Done,
}

impl<T: ToString> Iterator for Lines<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match self.cursor {
                Cursor::Done => return None,
                Cursor::Fallback(i) => {
                    if i >= self.old.len() {
                        self.cursor = Cursor::Done;
                        continue;
                    }
                    self.cursor = Cursor::Fallback(i + 1);
                    return Some(format!(" {}\n", self.old[i].to_string()));
                }
                Cursor::Info(step) => {
                    let info = match self.info {
                        Some(info) => info,
                        None => {
                            self.cursor = Cursor::Marker(0);
                            continue;
                        }
                    };
                    if step == 0 {
                        self.cursor = Cursor::Info(1);
                        return Some(format!("--- {}\t{}\n", info.old_label, info.old_stamp));
                    }
                    self.cursor = Cursor::Marker(0);
                    return Some(format!("+++ {}\t{}\n", info.new_label, info.new_stamp));
                }
                Cursor::Marker(h) => {
                    if h >= self.hunks.len() {
                        self.cursor = Cursor::Done;
                        continue;
                    }
                    self.cursor = Cursor::Body { hunk: h, line: 0 };
                    if self.include_diff_info {
                        return Some(marker(&self.hunks[h]));
                    }
                }
                Cursor::Body { hunk, line } => {
                    let lines = &self.hunks[hunk].lines;
                    if line >= lines.len() {
                        self.cursor = Cursor::Marker(hunk + 1);
                        continue;
                    }
                    self.cursor = Cursor::Body {
                        hunk,
                        line: line + 1,
                    };
                    return Some(content(&lines[line]));
                }
            }
        }
    }
}

impl<T: ToString> Lines<'_, T> {
    /// Coalesces consecutive lines that share a leading marker
    /// character, the way downstream formatters consume runs of
    /// additions or removals.
    pub fn into_chunks(self) -> Vec<String> {
        let mut chunks: Vec<String> = Vec::new();
        let mut last = None;
        for line in self {
            let state = line.chars().next();
            if state == last {
                if let Some(chunk) = chunks.last_mut() {
                    chunk.push_str(&line);
                }
            } else {
                chunks.push(line);
            }
            last = state;
        }
        chunks
    }
}

fn marker<T>(hunk: &Hunk<T>) -> String {
    format!(
        "@@ -{} +{} @@\n",
        unified_range(&hunk.old),
        unified_range(&hunk.new)
    )
}

// Unified convention: 1-based start, `,len` omitted for a single
// line, and an empty side reported at the line before it.
fn unified_range(range: &Range<usize>) -> String {
    match range.len() {
        0 => format!("{},0", range.start),
        1 => format!("{}", range.start + 1),
        len => format!("{},{}", range.start + 1, len),
    }
}

fn content<T: ToString>(line: &Line<T>) -> String {
    match line {
        Line::Context(v) => format!(" {}\n", v.to_string()),
        Line::Removed(v) => format!("-{}\n", v.to_string()),
        Line::Added(v) => format!("+{}\n", v.to_string()),
    }
}
