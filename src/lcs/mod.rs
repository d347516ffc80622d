mod types;
pub use types::*;

use std::cmp::max;

#[derive(Clone)]
struct V {
    data: Vec<usize>,
    offset: isize,
}

impl V {
    fn new(size: usize) -> Self {
        V {
            data: vec![0; 2 * size + 1],
            offset: size as isize,
        }
    }

    fn get(&self, k: isize) -> usize {
        self.data[(k + self.offset) as usize]
    }

    fn set(&mut self, k: isize, val: usize) {
        self.data[(k + self.offset) as usize] = val;
    }
}

/// Computes the edit script between two sequences and groups it into
/// maximal runs of deletions and insertions.
///
/// # Examples
///
/// ```
/// use linework::lcs::{compute, Piece};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "x", "c"];
/// let groups = compute(&old, &new);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(
///     groups[0].pieces,
///     vec![Piece::Delete(1, "b"), Piece::Insert(1, "x")],
/// );
/// ```
pub fn compute<T: Eq + Clone>(old: &[T], new: &[T]) -> Vec<Group<T>> {
    groups(diff(old, new))
}

/// Computes the flat edit script between two sequences using the
/// Myers algorithm. Deterministic: equal inputs yield an identical
/// script on every call.
pub fn diff<T: Eq + Clone>(old: &[T], new: &[T]) -> EditScript<T> {
    if old.is_empty() {
        return new
            .iter()
            .enumerate()
            .map(|(i, e)| Piece::Insert(i, e.clone()))
            .collect();
    }
    if new.is_empty() {
        return old
            .iter()
            .enumerate()
            .map(|(i, e)| Piece::Delete(i, e.clone()))
            .collect();
    }

    let n = old.len();
    let m = new.len();
    let maxi = n + m;
    let mut v = V::new(maxi);
    let mut trace: Vec<V> = Vec::new();
    let mut end_x = n;
    let mut end_y = m;
    'edits: for d in 0..=maxi as isize {
        for k in (-d..=d).step_by(2) {
            let mut x = if k == -d {
                v.get(k + 1)
            } else if k == d {
                v.get(k - 1) + 1
            } else {
                max(v.get(k + 1), v.get(k - 1) + 1)
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && old[x] == new[y] {
                x += 1;
                y += 1;
            }
            v.set(k, x);
            if x >= n && y >= m {
                end_x = x;
                end_y = y;
                trace.push(v.clone());
                break 'edits;
            }
        }
        trace.push(v.clone());
    }
    traceback(old, new, trace, end_x, end_y)
}

fn traceback<T: Eq + Clone>(
    old: &[T],
    new: &[T],
    trace: Vec<V>,
    mut x: usize,
    mut y: usize,
) -> EditScript<T> {
    let mut pieces: EditScript<T> = Vec::new();
    for d in (0..trace.len()).rev() {
        let d = d as isize;
        let k = x as isize - y as isize;
        let prev_k = if k == -d {
            k + 1
        } else if k == d || trace[d as usize].get(k - 1) + 1 >= trace[d as usize].get(k + 1) {
            k - 1
        } else {
            k + 1
        };
        let prev_x = trace[d as usize].get(prev_k);
        let prev_y = prev_x as isize - prev_k;
        while x as isize > prev_x as isize && y as isize > prev_y && old[x - 1] == new[y - 1] {
            pieces.push(Piece::Unchanged(x - 1, old[x - 1].clone()));
            x -= 1;
            y -= 1;
        }
        if d > 0 {
            if prev_k == k - 1 {
                pieces.push(Piece::Delete(x - 1, old[x - 1].clone()));
            } else {
                pieces.push(Piece::Insert(y - 1, new[y - 1].clone()));
            }
        }
        x = prev_x;
        y = prev_y as usize;
    }
    while x > 0 && y > 0 {
        pieces.push(Piece::Unchanged(x - 1, old[x - 1].clone()));
        x -= 1;
        y -= 1;
    }

    pieces.reverse();
    pieces
}

/// Splits a flat script into maximal runs of changed pieces. Within a
/// group, deletions are ordered before insertions.
pub fn groups<T>(script: EditScript<T>) -> Vec<Group<T>> {
    let mut groups = Vec::new();
    let mut deletes: Vec<Piece<T>> = Vec::new();
    let mut inserts: Vec<Piece<T>> = Vec::new();
    for piece in script {
        match piece {
            Piece::Unchanged(..) => {
                if !deletes.is_empty() || !inserts.is_empty() {
                    groups.push(close(&mut deletes, &mut inserts));
                }
            }
            Piece::Delete(..) => deletes.push(piece),
            Piece::Insert(..) => inserts.push(piece),
        }
    }
    if !deletes.is_empty() || !inserts.is_empty() {
        groups.push(close(&mut deletes, &mut inserts));
    }
    groups
}

fn close<T>(deletes: &mut Vec<Piece<T>>, inserts: &mut Vec<Piece<T>>) -> Group<T> {
    let mut pieces = std::mem::take(deletes);
    pieces.append(inserts);
    Group { pieces }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_length_invariant(old: Vec<u8>, new: Vec<u8>) {
            let result = diff(&old, &new);
            let deletes = result.iter().filter(|c| matches!(c, Piece::Delete(..))).count();
            let unchanged = result.iter().filter(|c| matches!(c, Piece::Unchanged(..))).count();
            let inserts = result.iter().filter(|c| matches!(c, Piece::Insert(..))).count();
            prop_assert_eq!(old.len(), deletes + unchanged);
            prop_assert_eq!(new.len(), inserts + unchanged);
        }

        #[test]
        fn test_self_diff_has_no_groups(els: Vec<u8>) {
            let result = diff(&els, &els);
            let expected: EditScript<u8> = els
                .iter()
                .enumerate()
                .map(|(i, e)| Piece::Unchanged(i, *e))
                .collect();
            prop_assert_eq!(result.clone(), expected);
            prop_assert!(groups(result).is_empty());
        }

        #[test]
        fn test_new_empty(els: Vec<u8>) {
            let result = diff(&els, &Vec::new());
            let expected: EditScript<u8> = els
                .iter()
                .enumerate()
                .map(|(i, e)| Piece::Delete(i, *e))
                .collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn test_old_empty(els: Vec<u8>) {
            let result = diff(&Vec::new(), &els);
            let expected: EditScript<u8> = els
                .iter()
                .enumerate()
                .map(|(i, e)| Piece::Insert(i, *e))
                .collect();
            prop_assert_eq!(result, expected);
        }

        #[test]
        fn test_symmetry(old: Vec<u8>, new: Vec<u8>) {
            let result = diff(&old, &new);
            let result_2 = diff(&new, &old);
            let deletes = result.iter().filter(|c| matches!(c, Piece::Delete(..))).count();
            let deletes_2 = result_2.iter().filter(|c| matches!(c, Piece::Delete(..))).count();
            let unchanged = result.iter().filter(|c| matches!(c, Piece::Unchanged(..))).count();
            let unchanged_2 = result_2.iter().filter(|c| matches!(c, Piece::Unchanged(..))).count();
            let inserts = result.iter().filter(|c| matches!(c, Piece::Insert(..))).count();
            let inserts_2 = result_2.iter().filter(|c| matches!(c, Piece::Insert(..))).count();

            prop_assert_eq!(unchanged, unchanged_2);
            prop_assert_eq!(inserts, deletes_2);
            prop_assert_eq!(deletes, inserts_2);
        }

        #[test]
        fn test_groups_are_changed_runs(old: Vec<u8>, new: Vec<u8>) {
            for group in compute(&old, &new) {
                prop_assert!(!group.pieces.is_empty());
                prop_assert!(group
                    .pieces
                    .iter()
                    .all(|p| !matches!(p, Piece::Unchanged(..))));
                // deletions first, then insertions
                let first_insert = group
                    .pieces
                    .iter()
                    .position(|p| matches!(p, Piece::Insert(..)));
                if let Some(at) = first_insert {
                    prop_assert!(group.pieces[at..]
                        .iter()
                        .all(|p| matches!(p, Piece::Insert(..))));
                }
            }
        }
    }

    #[test]
    fn test_simple_diff() {
        let old = vec!["a", "b", "c"];
        let new = vec!["a", "x", "c"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            [
                Piece::Unchanged(0, "a"),
                Piece::Insert(1, "x"),
                Piece::Delete(1, "b"),
                Piece::Unchanged(2, "c")
            ]
        );
    }

    #[test]
    fn test_simple_diff_grouping() {
        let old = vec!["a", "b", "c"];
        let new = vec!["a", "x", "c"];
        let groups = compute(&old, &new);
        assert_eq!(
            groups,
            vec![Group {
                pieces: vec![Piece::Delete(1, "b"), Piece::Insert(1, "x")],
            }]
        );
        assert_eq!(groups[0].old_span(), Some(1..2));
        assert_eq!(groups[0].new_span(), Some(1..2));
    }

    #[test]
    fn test_completely_different() {
        let old = vec!["a", "b", "c"];
        let new = vec!["x", "y", "z"];
        let groups = compute(&old, &new);
        assert_eq!(
            groups,
            vec![Group {
                pieces: vec![
                    Piece::Delete(0, "a"),
                    Piece::Delete(1, "b"),
                    Piece::Delete(2, "c"),
                    Piece::Insert(0, "x"),
                    Piece::Insert(1, "y"),
                    Piece::Insert(2, "z"),
                ],
            }]
        );
    }

    #[test]
    fn test_two_groups_far_apart() {
        let old = vec!["a", "b", "c", "d", "e"];
        let new = vec!["X", "b", "c", "d", "Y"];
        let groups = compute(&old, &new);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].old_span(), Some(0..1));
        assert_eq!(groups[0].new_span(), Some(0..1));
        assert_eq!(groups[1].old_span(), Some(4..5));
        assert_eq!(groups[1].new_span(), Some(4..5));
    }

    #[test]
    fn test_insertion_only_group() {
        let old = vec!["a", "c"];
        let new = vec!["a", "b", "c"];
        let groups = compute(&old, &new);
        assert_eq!(
            groups,
            vec![Group {
                pieces: vec![Piece::Insert(1, "b")],
            }]
        );
        assert_eq!(groups[0].old_span(), None);
        assert_eq!(groups[0].new_span(), Some(1..2));
    }

    #[test]
    fn test_duplicates() {
        let old = vec!["a", "a", "b"];
        let new = vec!["a", "b", "b"];
        let result = diff(&old, &new);
        assert_eq!(
            result,
            vec![
                Piece::Unchanged(0, "a"),
                Piece::Delete(1, "a"),
                Piece::Unchanged(2, "b"),
                Piece::Insert(2, "b")
            ]
        );
    }

    #[test]
    fn test_group_counts() {
        let old = vec!["a", "b", "c", "d"];
        let new = vec!["a", "x", "d"];
        let groups = compute(&old, &new);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].deletions(), 2);
        assert_eq!(groups[0].insertions(), 1);
        assert_eq!(groups[0].old_span(), Some(1..3));
        assert_eq!(groups[0].new_span(), Some(1..2));
    }
}
