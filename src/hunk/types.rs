use std::ops::Range;

/// A contiguous, context-padded block of difference between the two
/// sequences.
///
/// `old` and `new` are half-open index ranges into the respective
/// sequences and include the context lines. Across the hunks flushed
/// for one computation both ranges are strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    pub old: Range<usize>,
    pub new: Range<usize>,
    // Change region without the context padding. Needed when a later
    // hunk's context window reaches back into this hunk.
    pub(crate) old_core: Range<usize>,
    pub(crate) new_core: Range<usize>,
    pub lines: Vec<Line<T>>,
}

/// One display line of a hunk, in document order. When a removal and
/// an insertion cover the same position, the removed lines come
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<T> {
    Context(T),
    Removed(T),
    Added(T),
}

impl<T> Line<T> {
    pub fn value(&self) -> &T {
        match self {
            Line::Context(v) | Line::Removed(v) | Line::Added(v) => v,
        }
    }
}
