use crate::{Budget, Change, DistanceTable, Edit, Error};

fn walk<'a, T, F>(
    table: &DistanceTable,
    xs: &'a [T],
    ys: &'a [T],
    eq: &mut F,
) -> Box<[Edit<&'a T>]>
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut i, mut j) = (0, 0);
    let mut edits = Vec::with_capacity(xs.len().max(ys.len()));

    while let Some(change) = table.step(xs, ys, eq, (i, j)) {
        match change {
            Change::Remove => {
                edits.push(Edit::remove(&xs[i], i));
                i += 1;
            }

            Change::Insert => {
                edits.push(Edit::insert(&ys[j], j));
                j += 1;
            }

            Change::Keep => {
                edits.push(Edit::keep(&xs[i], i));
                i += 1;
                j += 1;
            }
        }
    }

    debug_assert_eq!((i, j), (xs.len(), ys.len()));
    edits.into()
}

/// Finds the shortest sequence of [Edit]s that transforms `xs` into `ys`, comparing elements
/// with `eq`.
///
/// Among edit scripts of equal length, removals are preferred over insertions, and both over
/// keeping an element unless keeping it is strictly cheaper.
///
/// # Example
///
/// ```rust
/// use difft::{diff_by, Change::*};
///
/// let edits = diff_by(b"mario", b"darius", |x, y| x == y);
///
/// let script: Vec<_> = edits
///     .iter()
///     .map(|e| (e.change, *e.element as char, e.index))
///     .collect();
///
/// assert_eq!(script, [
///     (Remove, 'm', 0),
///     (Insert, 'd', 0),
///     (Keep, 'a', 1),
///     (Keep, 'r', 2),
///     (Keep, 'i', 3),
///     (Remove, 'o', 4),
///     (Insert, 'u', 4),
///     (Insert, 's', 5),
/// ]);
/// ```
pub fn diff_by<'a, T, F>(xs: &'a [T], ys: &'a [T], mut eq: F) -> Box<[Edit<&'a T>]>
where
    F: FnMut(&T, &T) -> bool,
{
    let table = DistanceTable::new(xs, ys, &mut eq);
    walk(&table, xs, ys, &mut eq)
}

/// Like [diff_by], but refuses to build a distance table larger than the [Budget] admits.
pub fn try_diff_by<'a, T, F>(
    xs: &'a [T],
    ys: &'a [T],
    budget: &Budget,
    mut eq: F,
) -> Result<Box<[Edit<&'a T>]>, Error>
where
    F: FnMut(&T, &T) -> bool,
{
    let table = DistanceTable::try_new(xs, ys, budget, &mut eq)?;
    Ok(walk(&table, xs, ys, &mut eq))
}

/// Finds the shortest sequence of [Edit]s that transforms `xs` into `ys`.
///
/// See [diff_by].
#[inline]
pub fn diff<'a, T: PartialEq>(xs: &'a [T], ys: &'a [T]) -> Box<[Edit<&'a T>]> {
    diff_by(xs, ys, T::eq)
}

/// The number of insertions and removals needed to transform `xs` into `ys`.
#[inline]
pub fn edit_distance<T, F>(xs: &[T], ys: &[T], eq: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    DistanceTable::new(xs, ys, eq).distance()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use proptest::collection::vec;
    use test_strategy::proptest;

    fn source<T: Clone>(edits: &[Edit<&T>]) -> Vec<T> {
        edits
            .iter()
            .filter(|e| !e.change.is_insert())
            .map(|e| e.element.clone())
            .collect()
    }

    fn target<T: Clone>(edits: &[Edit<&T>]) -> Vec<T> {
        edits
            .iter()
            .filter(|e| !e.change.is_remove())
            .map(|e| e.element.clone())
            .collect()
    }

    #[test]
    fn mario_becomes_darius() {
        use Change::*;

        let edits = diff("mario".as_bytes(), "darius".as_bytes());
        let changes: Vec<_> = edits.iter().map(|e| e.change).collect();
        let elements: String = edits.iter().map(|e| *e.element as char).collect();
        let indices: Vec<_> = edits.iter().map(|e| e.index).collect();

        assert_eq!(
            changes,
            [Remove, Insert, Keep, Keep, Keep, Remove, Insert, Insert]
        );
        assert_eq!(elements, "mdarious");
        assert_eq!(indices, [0, 0, 1, 2, 3, 4, 4, 5]);
    }

    #[test]
    fn removals_win_ties_against_insertions() {
        assert_eq!(&*diff(&[1], &[2]), &[Edit::remove(&1, 0), Edit::insert(&2, 0)]);
    }

    #[test]
    fn insertions_win_ties_against_keeps() {
        assert_eq!(
            &*diff(b"a", b"aa"),
            &[Edit::insert(&b'a', 0), Edit::keep(&b'a', 0)]
        );
    }

    #[test]
    fn removals_win_ties_against_keeps() {
        assert_eq!(
            &*diff(b"aa", b"a"),
            &[Edit::remove(&b'a', 0), Edit::keep(&b'a', 1)]
        );
    }

    /// Fills the table cell by cell with explicit comparisons and walks it back.
    fn recurrence(xs: &[u8], ys: &[u8]) -> Vec<(Change, u8, usize)> {
        let (m, n) = (xs.len(), ys.len());
        let mut t = vec![vec![0usize; n + 1]; m + 1];

        let choose = |t: &[Vec<usize>], i: usize, j: usize| -> (usize, Change) {
            if i == m {
                return (n - j, Change::Insert);
            }

            if j == n {
                return (m - i, Change::Remove);
            }

            let mut best = (1 + t[i + 1][j], Change::Remove);

            if 1 + t[i][j + 1] < best.0 {
                best = (1 + t[i][j + 1], Change::Insert);
            }

            if xs[i] == ys[j] && t[i + 1][j + 1] < best.0 {
                best = (t[i + 1][j + 1], Change::Keep);
            }

            best
        };

        for i in (0..=m).rev() {
            for j in (0..=n).rev() {
                let (cost, _) = choose(&t, i, j);
                t[i][j] = cost;
            }
        }

        let (mut i, mut j) = (0, 0);
        let mut script = Vec::new();

        while i < m || j < n {
            match choose(&t, i, j).1 {
                Change::Remove => {
                    script.push((Change::Remove, xs[i], i));
                    i += 1;
                }
                Change::Insert => {
                    script.push((Change::Insert, ys[j], j));
                    j += 1;
                }
                Change::Keep => {
                    script.push((Change::Keep, xs[i], i));
                    i += 1;
                    j += 1;
                }
            }
        }

        script
    }

    #[proptest]
    fn the_script_follows_the_recurrence_exactly(
        #[strategy(vec(0u8..3, ..12))] xs: Vec<u8>,
        #[strategy(vec(0u8..3, ..12))] ys: Vec<u8>,
    ) {
        let script: Vec<_> = diff(&xs, &ys)
            .iter()
            .map(|e| (e.change, *e.element, e.index))
            .collect();

        assert_eq!(script, recurrence(&xs, &ys));
    }

    #[test]
    fn swapped_elements_keep_the_later_one() {
        assert_eq!(
            &*diff(&[1, 2], &[2, 1]),
            &[Edit::remove(&1, 0), Edit::keep(&2, 1), Edit::insert(&1, 1)]
        );
    }

    #[test]
    fn the_equality_is_user_defined() {
        let edits = diff_by(&["Foo", "BAR"], &["foo", "bar"], |x, y| x.eq_ignore_ascii_case(y));
        assert!(edits.iter().all(|e| e.change.is_keep()));
        assert_eq!(source(&edits), ["Foo", "BAR"]);
    }

    #[proptest]
    fn removals_and_keeps_reconstruct_the_left_hand_side(xs: Vec<u8>, ys: Vec<u8>) {
        assert_eq!(source(&diff(&xs, &ys)), xs);
    }

    #[proptest]
    fn insertions_and_keeps_reconstruct_the_right_hand_side(xs: Vec<u8>, ys: Vec<u8>) {
        assert_eq!(target(&diff(&xs, &ys)), ys);
    }

    #[proptest]
    fn indices_point_into_the_originating_sequence(
        #[strategy(vec(0u8..4, ..16))] xs: Vec<u8>,
        #[strategy(vec(0u8..4, ..16))] ys: Vec<u8>,
    ) {
        let (mut i, mut j) = (0, 0);

        for e in diff(&xs, &ys).iter() {
            match e.change {
                Change::Insert => {
                    assert_eq!((e.index, e.element), (j, &ys[j]));
                    j += 1;
                }
                Change::Remove => {
                    assert_eq!((e.index, e.element), (i, &xs[i]));
                    i += 1;
                }
                Change::Keep => {
                    assert_eq!((e.index, e.element), (i, &xs[i]));
                    assert_eq!(xs[i], ys[j]);
                    i += 1;
                    j += 1;
                }
            }
        }
    }

    #[proptest]
    fn diffing_a_sequence_against_itself_only_keeps(xs: Vec<u8>) {
        let edits = diff(&xs, &xs);
        assert_eq!(edits.len(), xs.len());
        for (i, e) in edits.iter().enumerate() {
            assert_eq!(e, &Edit::keep(&xs[i], i));
        }
    }

    #[proptest]
    fn diffing_from_nothing_only_inserts(ys: Vec<u8>) {
        let edits = diff(&[], &ys);
        let expected: Vec<_> = ys.iter().enumerate().map(|(j, y)| Edit::insert(y, j)).collect();
        assert_eq!(&*edits, &expected[..]);
    }

    #[proptest]
    fn diffing_to_nothing_only_removes(xs: Vec<u8>) {
        let edits = diff(&xs, &[]);
        let expected: Vec<_> = xs.iter().enumerate().map(|(i, x)| Edit::remove(x, i)).collect();
        assert_eq!(&*edits, &expected[..]);
    }

    #[proptest]
    fn the_number_of_changes_is_the_edit_distance(
        #[strategy(vec(0u8..4, ..16))] xs: Vec<u8>,
        #[strategy(vec(0u8..4, ..16))] ys: Vec<u8>,
    ) {
        let edits = diff(&xs, &ys);
        let changes = edits.iter().filter(|e| !e.change.is_keep()).count();
        assert_eq!(changes, edit_distance(&xs, &ys, u8::eq));
    }

    #[proptest]
    fn budgeted_diffs_match_unbudgeted_ones(xs: Vec<u8>, ys: Vec<u8>) {
        let budgeted = try_diff_by(&xs, &ys, &Budget::unlimited(), u8::eq).unwrap();
        assert_eq!(budgeted, diff(&xs, &ys));
    }

    #[test]
    fn diffs_over_budget_are_refused() {
        assert_matches!(
            try_diff_by(b"abc", b"abcd", &Budget::cells(19), u8::eq),
            Err(Error::OverBudget {
                rows: 4,
                columns: 5,
                budget: 19
            })
        );
    }
}
