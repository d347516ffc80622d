mod types;
pub use types::*;

use crate::lcs::{self, Group};
use log::{debug, trace};

/// Runs the whole match/build/merge pipeline: computes the grouped
/// edit script, builds one context-padded hunk per group, and fuses
/// hunks whose context windows overlap in the old sequence.
///
/// A context width of zero disables overlap tracking entirely, so
/// hunks are never merged even when their edit regions are adjacent.
pub fn hunks<T: Eq + Clone>(old: &[T], new: &[T], context: usize) -> Vec<Hunk<T>> {
    let groups = lcs::compute(old, new);
    debug!(
        "edit script has {} change groups (context {})",
        groups.len(),
        context
    );

    let mut flushed = Vec::new();
    let mut buffered: Option<Hunk<T>> = None;
    let mut length_diff = 0;
    for group in &groups {
        let (next, diff) = build(old, new, group, context, length_diff);
        length_diff = diff;
        buffered = Some(match buffered.take() {
            None => next,
            Some(prev) => {
                if context > 0 && next.old.start <= prev.old.end {
                    trace!("merging hunk {:?} into {:?}", next.old, prev.old);
                    merge(prev, next, old)
                } else {
                    flushed.push(prev);
                    next
                }
            }
        });
    }
    // The leftover hunk is flushed unconditionally.
    if let Some(last) = buffered {
        flushed.push(last);
    }
    flushed
}

/// Builds one context-padded hunk for a change group.
///
/// `before` is the running new-minus-old length difference carried
/// over from the groups already consumed; the updated value is
/// returned alongside the hunk and must be fed into the next call so
/// later hunks report correct new-side offsets. The side a group does
/// not touch is anchored through that counter. Context windows are
/// clamped to the sequence bounds, so a group at a boundary simply
/// gets a shorter window.
pub fn build<T: Clone>(
    old: &[T],
    new: &[T],
    group: &Group<T>,
    context: usize,
    before: isize,
) -> (Hunk<T>, isize) {
    let after = before + group.insertions() as isize - group.deletions() as isize;

    let (old_core, new_core) = match (group.old_span(), group.new_span()) {
        (Some(o), Some(n)) => (o, n),
        (Some(o), None) => {
            let start = (o.start as isize + before) as usize;
            (o, start..start)
        }
        (None, Some(n)) => {
            let start = (n.start as isize - before) as usize;
            (start..start, n)
        }
        (None, None) => unreachable!("change group without pieces"),
    };

    // Clamped to both starts: after heavy earlier deletions the new
    // side can run out of room before the old side does.
    let lead = context.min(old_core.start).min(new_core.start);
    let trail = context.min(old.len() - old_core.end);

    let mut lines = Vec::with_capacity(lead + old_core.len() + new_core.len() + trail);
    lines.extend(
        old[old_core.start - lead..old_core.start]
            .iter()
            .cloned()
            .map(Line::Context),
    );
    lines.extend(old[old_core.clone()].iter().cloned().map(Line::Removed));
    lines.extend(new[new_core.clone()].iter().cloned().map(Line::Added));
    lines.extend(
        old[old_core.end..old_core.end + trail]
            .iter()
            .cloned()
            .map(Line::Context),
    );

    let hunk = Hunk {
        old: old_core.start - lead..old_core.end + trail,
        new: new_core.start - lead..new_core.end + trail,
        old_core,
        new_core,
        lines,
    };
    (hunk, after)
}

/// Fuses two overlapping hunks into one whose ranges are the union of
/// both. Lines are spliced as previous-core, the connecting unchanged
/// lines, then incoming-core, so the shared context region appears
/// exactly once.
fn merge<T: Clone>(prev: Hunk<T>, next: Hunk<T>, old: &[T]) -> Hunk<T> {
    let trail = prev.old.end - prev.old_core.end;
    let lead = next.old_core.start - next.old.start;

    let mut lines = prev.lines;
    lines.truncate(lines.len() - trail);
    lines.extend(
        old[prev.old_core.end..next.old_core.start]
            .iter()
            .cloned()
            .map(Line::Context),
    );
    lines.extend(next.lines.into_iter().skip(lead));

    Hunk {
        old: prev.old.start..next.old.end,
        new: prev.new.start..next.new.end,
        old_core: prev.old_core.start..next.old_core.end,
        new_core: prev.new_core.start..next.new_core.end,
        lines,
    }
}
