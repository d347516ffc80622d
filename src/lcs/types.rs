use std::ops::Range;

/// Alias for the flat edit script produced by `diff`.
pub type EditScript<T> = Vec<Piece<T>>;

/// One element-level fact about a diff computation.
///
/// `Unchanged` and `Delete` carry the element's index in the old
/// sequence, `Insert` the index in the new sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<T> {
    Unchanged(usize, T),
    Delete(usize, T),
    Insert(usize, T),
}

/// A maximal run of `Delete` and `Insert` pieces with no unchanged
/// element in between. Deletions come first, in old-sequence order,
/// followed by insertions in new-sequence order. Unchanged runs are
/// the implicit gaps between groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<T> {
    pub pieces: Vec<Piece<T>>,
}

impl<T> Group<T> {
    /// Old-side index range touched by this group, `None` when the
    /// group deletes nothing.
    pub fn old_span(&self) -> Option<Range<usize>> {
        span(self.pieces.iter().filter_map(|p| match p {
            Piece::Delete(i, _) => Some(*i),
            _ => None,
        }))
    }

    /// New-side index range touched by this group, `None` when the
    /// group inserts nothing.
    pub fn new_span(&self) -> Option<Range<usize>> {
        span(self.pieces.iter().filter_map(|p| match p {
            Piece::Insert(i, _) => Some(*i),
            _ => None,
        }))
    }

    pub fn deletions(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Delete(..)))
            .count()
    }

    pub fn insertions(&self) -> usize {
        self.pieces
            .iter()
            .filter(|p| matches!(p, Piece::Insert(..)))
            .count()
    }
}

fn span(indices: impl Iterator<Item = usize>) -> Option<Range<usize>> {
    indices.fold(None, |acc, i| {
        Some(match acc {
            None => i..i + 1,
            Some(r) => r.start.min(i)..r.end.max(i + 1),
        })
    })
}
