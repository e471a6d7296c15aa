use crate::Differ;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Renders the keys of two mappings whose values differ.
///
/// Keys only present in `m1` are rendered by [Differ::removed], keys only present in `m2` by
/// [Differ::added], and keys present in both by [Differ::diff], unless it reports their values as
/// equal, in which case the key is left out.
///
/// # Example
///
/// ```rust
/// use difft::{diff_mapping, Differ};
/// use std::collections::HashMap;
///
/// struct Sed;
///
/// impl Differ<i32, String> for Sed {
///     fn added(&self, x: &i32) -> String {
///         format!("+{x}")
///     }
///
///     fn removed(&self, x: &i32) -> String {
///         format!("-{x}")
///     }
///
///     fn diff(&self, x: &i32, y: &i32) -> (String, bool) {
///         (format!("s/{x}/{y}"), x != y)
///     }
/// }
///
/// let old = HashMap::from([("a", 1), ("b", 2)]);
/// let new = HashMap::from([("a", 1), ("b", 3)]);
///
/// assert_eq!(diff_mapping(&Sed, &old, &new), HashMap::from([("b", "s/2/3".to_string())]));
/// ```
pub fn diff_mapping<K, T, R, D, H>(
    differ: &D,
    m1: &HashMap<K, T, H>,
    m2: &HashMap<K, T, H>,
) -> HashMap<K, R, H>
where
    K: Eq + Hash + Clone,
    D: Differ<T, R> + ?Sized,
    H: BuildHasher + Default,
{
    let mut delta = HashMap::default();

    for (k, x) in m1 {
        match m2.get(k) {
            None => {
                delta.insert(k.clone(), differ.removed(x));
            }

            Some(y) => {
                if let (r, true) = differ.diff(x, y) {
                    delta.insert(k.clone(), r);
                }
            }
        }
    }

    for (k, y) in m2 {
        if !m1.contains_key(k) {
            delta.insert(k.clone(), differ.added(y));
        }
    }

    delta
}
