use derive_more::{Display, IsVariant};

/// The kind of a single [Edit].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, IsVariant)]
pub enum Change {
    /// Insert the incoming element in place.
    #[display(fmt = "insert")]
    Insert,

    /// Remove the existing element.
    #[display(fmt = "remove")]
    Remove,

    /// Keep the existing element, which is equal to the incoming one.
    #[display(fmt = "keep")]
    Keep,
}

/// A single operation of an edit script.
///
/// The [index][Edit::index] is the position of the [element][Edit::element] in the sequence it
/// was drawn from, i.e. the left-hand side for [Change::Remove] and [Change::Keep], and the
/// right-hand side for [Change::Insert].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Edit<T> {
    pub change: Change,
    pub element: T,
    pub index: usize,
}

impl<T> Edit<T> {
    #[inline]
    pub fn insert(element: T, index: usize) -> Self {
        Edit {
            change: Change::Insert,
            element,
            index,
        }
    }

    #[inline]
    pub fn remove(element: T, index: usize) -> Self {
        Edit {
            change: Change::Remove,
            element,
            index,
        }
    }

    #[inline]
    pub fn keep(element: T, index: usize) -> Self {
        Edit {
            change: Change::Keep,
            element,
            index,
        }
    }

    /// Maps the element, preserving the change and the index.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Edit<U> {
        Edit {
            change: self.change,
            element: f(self.element),
            index: self.index,
        }
    }
}

impl<T: Clone> Edit<&T> {
    /// Clones the borrowed element.
    #[inline]
    pub fn cloned(self) -> Edit<T> {
        self.map(T::clone)
    }
}
