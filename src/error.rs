/// Errors returned by the budgeted entry points.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// The distance table would not fit in the [Budget][crate::Budget].
    #[error("a distance table of {rows}x{columns} cells exceeds the budget of {budget} cells")]
    OverBudget {
        rows: usize,
        columns: usize,
        budget: usize,
    },
}
