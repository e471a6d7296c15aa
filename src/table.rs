use crate::{Change, Error};
use arrayvec::ArrayVec;
use itertools::iproduct;
use pathfinding::matrix::Matrix;

/// An upper bound on the number of cells a [DistanceTable] may allocate.
///
/// Building a table between sequences of lengths `m` and `n` takes `(m + 1) * (n + 1)` cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Budget {
    cells: usize,
}

impl Budget {
    /// A budget that admits any table that can be addressed.
    #[inline]
    pub const fn unlimited() -> Self {
        Budget { cells: usize::MAX }
    }

    /// A budget that admits tables of at most `cells` cells.
    #[inline]
    pub const fn cells(cells: usize) -> Self {
        Budget { cells }
    }

    /// The maximum number of cells admitted.
    #[inline]
    pub const fn max_cells(&self) -> usize {
        self.cells
    }

    fn admit(&self, rows: usize, columns: usize) -> Result<(), Error> {
        match rows.checked_mul(columns) {
            Some(cells) if cells <= self.cells => Ok(()),
            _ => {
                debug!(rows, columns, budget = self.cells, "distance table over budget");
                Err(Error::OverBudget {
                    rows,
                    columns,
                    budget: self.cells,
                })
            }
        }
    }
}

impl Default for Budget {
    #[inline]
    fn default() -> Self {
        Self::unlimited()
    }
}

/// The minimal number of edits between every pair of suffixes of two sequences.
///
/// The cell at `(i, j)` holds the smallest number of insertions and removals that transforms
/// `xs[i..]` into `ys[j..]`, where equal elements may be kept for free.
///
/// # Example
///
/// ```rust
/// use difft::DistanceTable;
///
/// let table = DistanceTable::new(b"kitten", b"sitting", |x, y| x == y);
///
/// assert_eq!(table.distance(), 5);
/// assert_eq!(table.get(6, 7), Some(0));
/// assert_eq!(table.get(6, 0), Some(7));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DistanceTable {
    costs: Matrix<usize>,
}

/// Picks the cheapest move out of `(i, j)`.
///
/// Candidates are listed as Remove, Insert, Keep and only a strictly cheaper one displaces an
/// earlier one. The corner `(m, n)` has no moves.
fn choose<T, F>(
    costs: &Matrix<usize>,
    xs: &[T],
    ys: &[T],
    eq: &mut F,
    (i, j): (usize, usize),
) -> Option<(Change, usize)>
where
    F: FnMut(&T, &T) -> bool,
{
    let x = xs.get(i);
    let y = ys.get(j);

    let mut candidates = ArrayVec::<_, 3>::new();

    if x.is_some() {
        candidates.push((Change::Remove, 1 + costs[(i + 1, j)]));
    }

    if y.is_some() {
        candidates.push((Change::Insert, 1 + costs[(i, j + 1)]));
    }

    if let (Some(x), Some(y)) = (x, y) {
        if eq(x, y) {
            candidates.push((Change::Keep, costs[(i + 1, j + 1)]));
        }
    }

    candidates.into_iter().min_by_key(|&(_, cost)| cost)
}

impl DistanceTable {
    /// Fills the table backwards, from the end of both sequences towards their start.
    pub fn new<T, F>(xs: &[T], ys: &[T], mut eq: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut costs = Matrix::new(xs.len() + 1, ys.len() + 1, 0);

        for p in iproduct!((0..=xs.len()).rev(), (0..=ys.len()).rev()) {
            if let Some((_, cost)) = choose(&costs, xs, ys, &mut eq, p) {
                costs[p] = cost;
            }
        }

        debug!(
            rows = costs.rows,
            columns = costs.columns,
            distance = costs[(0, 0)],
            "built distance table"
        );

        DistanceTable { costs }
    }

    /// Like [DistanceTable::new], but refuses to allocate more cells than the [Budget] admits.
    pub fn try_new<T, F>(xs: &[T], ys: &[T], budget: &Budget, eq: F) -> Result<Self, Error>
    where
        F: FnMut(&T, &T) -> bool,
    {
        budget.admit(xs.len() + 1, ys.len() + 1)?;
        Ok(Self::new(xs, ys, eq))
    }

    /// The edit distance between the whole sequences.
    #[inline]
    pub fn distance(&self) -> usize {
        self.costs[(0, 0)]
    }

    /// The edit distance between `xs[i..]` and `ys[j..]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        self.costs.get((i, j)).copied()
    }

    /// One more than the length of the left-hand side.
    #[inline]
    pub fn rows(&self) -> usize {
        self.costs.rows
    }

    /// One more than the length of the right-hand side.
    #[inline]
    pub fn columns(&self) -> usize {
        self.costs.columns
    }

    /// Re-derives the move chosen while filling the cell at `(i, j)`.
    ///
    /// Must be called with the same sequences and equality the table was built from.
    pub(crate) fn step<T, F>(
        &self,
        xs: &[T],
        ys: &[T],
        eq: &mut F,
        p: (usize, usize),
    ) -> Option<Change>
    where
        F: FnMut(&T, &T) -> bool,
    {
        choose(&self.costs, xs, ys, eq, p).map(|(change, _)| change)
    }
}
