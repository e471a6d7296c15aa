use crate::{diff_by, diff_mapping, Change, Differ};
use derive_more::IsVariant;
use std::collections::HashMap;

/// A recursively structured value.
///
/// Scalars of type `S` are opaque and only ever compared by the caller.
#[derive(Debug, Clone, Eq, PartialEq, IsVariant)]
pub enum Value<S> {
    /// An ordered sequence of values.
    Sequence(Vec<Value<S>>),

    /// A mapping from string keys to values.
    Mapping(HashMap<String, Value<S>>),

    /// Any other value.
    Scalar(S),
}

/// Recurses into pairs of sequences and pairs of mappings, delegating everything else.
struct Structural<'d, D: ?Sized, E> {
    differ: &'d D,
    equals: E,
}

impl<S, D, E> Differ<Value<S>, Value<S>> for Structural<'_, D, E>
where
    S: Clone,
    D: Differ<Value<S>, Value<S>> + ?Sized,
    E: Fn(&Value<S>, &Value<S>) -> bool,
{
    #[inline]
    fn added(&self, x: &Value<S>) -> Value<S> {
        self.differ.added(x)
    }

    #[inline]
    fn removed(&self, x: &Value<S>) -> Value<S> {
        self.differ.removed(x)
    }

    fn diff(&self, x: &Value<S>, y: &Value<S>) -> (Value<S>, bool) {
        match (x, y) {
            (Value::Sequence(xs), Value::Sequence(ys)) => {
                trace!(left = xs.len(), right = ys.len(), "diffing sequences");

                let edits = diff_by(xs, ys, &self.equals);
                let changed = edits.iter().any(|e| !e.change.is_keep());

                let items = edits
                    .iter()
                    .map(|e| match e.change {
                        Change::Insert => self.added(e.element),
                        Change::Remove => self.removed(e.element),
                        Change::Keep => e.element.clone(),
                    })
                    .collect();

                (Value::Sequence(items), changed)
            }

            (Value::Mapping(xs), Value::Mapping(ys)) => {
                trace!(left = xs.len(), right = ys.len(), "diffing mappings");

                let delta = diff_mapping(self, xs, ys);
                let changed = !delta.is_empty();
                (Value::Mapping(delta), changed)
            }

            _ => self.differ.diff(x, y),
        }
    }
}

/// Finds the difference between two [Value]s, recursing into sequences and mappings.
///
/// * Two sequences are aligned by [diff_by] using `equals`, whereby inserted and removed
///   elements are rendered by [Differ::added] and [Differ::removed] respectively, while kept
///   elements are cloned as they are.
/// * Two mappings are compared key by key as in [diff_mapping], recursing into the values of
///   keys present on both sides.
/// * Anything else, including values of different shapes, is rendered by [Differ::diff].
///
/// Returns the rendered difference along with whether the values differ at all.
///
/// The depth of recursion equals the depth of the values.
pub fn diff_tree<S, D, E>(differ: &D, equals: E, v1: &Value<S>, v2: &Value<S>) -> (Value<S>, bool)
where
    S: Clone,
    D: Differ<Value<S>, Value<S>> + ?Sized,
    E: Fn(&Value<S>, &Value<S>) -> bool,
{
    Structural { differ, equals }.diff(v1, v2)
}
