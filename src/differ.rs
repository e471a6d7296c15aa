/// Renders the difference between values of type `T` as values of type `R`.
///
/// Implementations decide how additions, removals and pairwise differences look, e.g. as strings
/// prefixed by `+` and `-`, or as rich values of a diff format.
///
/// # Example
///
/// ```rust
/// use difft::Differ;
///
/// struct Sed;
///
/// impl Differ<str, String> for Sed {
///     fn added(&self, x: &str) -> String {
///         format!("+{x}")
///     }
///
///     fn removed(&self, x: &str) -> String {
///         format!("-{x}")
///     }
///
///     fn diff(&self, x: &str, y: &str) -> (String, bool) {
///         (format!("s/{x}/{y}"), x != y)
///     }
/// }
///
/// assert_eq!(Sed.diff("a", "b"), ("s/a/b".to_string(), true));
/// ```
pub trait Differ<T: ?Sized, R> {
    /// Renders an incoming value.
    fn added(&self, x: &T) -> R;

    /// Renders an outgoing value.
    fn removed(&self, x: &T) -> R;

    /// Renders the difference between two values, along with whether they differ at all.
    ///
    /// The rendering is discarded when the values are reported to be equal.
    fn diff(&self, x: &T, y: &T) -> (R, bool);
}

impl<T: ?Sized, R, D: Differ<T, R> + ?Sized> Differ<T, R> for &D {
    #[inline]
    fn added(&self, x: &T) -> R {
        D::added(self, x)
    }

    #[inline]
    fn removed(&self, x: &T) -> R {
        D::removed(self, x)
    }

    #[inline]
    fn diff(&self, x: &T, y: &T) -> (R, bool) {
        D::diff(self, x, y)
    }
}
