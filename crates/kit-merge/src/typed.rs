//! Typed merge for closed configuration schemas

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::value::{merge_in_place, merge_map_in_place, union_dedup};

/// A configuration type that can absorb a partial override of itself.
///
/// Implementations follow the same policy as the generic engine:
/// sequences are unioned, maps recurse, scalars are replaced, and an
/// unspecified (`None`) override leaves the base alone.
pub trait Merge {
    /// Merge `other` into `self`.
    fn merge_from(&mut self, other: &Self);

    /// Return a merged copy, leaving `self` untouched.
    fn merged(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        let mut out = self.clone();
        out.merge_from(other);
        out
    }
}

/// Implement [`Merge`] as plain replacement for scalar-like types.
///
/// ```
/// use kit_merge::{Merge, replace_on_merge};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum EndOfLine {
///     Lf,
///     Crlf,
/// }
/// replace_on_merge!(EndOfLine);
///
/// let mut eol = Some(EndOfLine::Lf);
/// eol.merge_from(&Some(EndOfLine::Crlf));
/// assert_eq!(eol, Some(EndOfLine::Crlf));
/// ```
#[macro_export]
macro_rules! replace_on_merge {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Merge for $ty {
                fn merge_from(&mut self, other: &Self) {
                    self.clone_from(other);
                }
            }
        )*
    };
}

replace_on_merge!((), bool, String, i32, i64, u8, u16, u32, u64, usize, f64);

impl<T: Merge + Clone> Merge for Option<T> {
    fn merge_from(&mut self, other: &Self) {
        let Some(incoming) = other else {
            return;
        };
        match self {
            Some(current) => current.merge_from(incoming),
            None => *self = Some(incoming.clone()),
        }
    }
}

impl<T: PartialEq + Clone> Merge for Vec<T> {
    fn merge_from(&mut self, other: &Self) {
        *self = union_dedup(self, other);
    }
}

impl<V: Merge + Clone> Merge for BTreeMap<String, V> {
    fn merge_from(&mut self, other: &Self) {
        for (key, incoming) in other {
            match self.get_mut(key) {
                Some(current) => current.merge_from(incoming),
                None => {
                    self.insert(key.clone(), incoming.clone());
                }
            }
        }
    }
}

impl Merge for Value {
    fn merge_from(&mut self, other: &Self) {
        merge_in_place(self, Some(other));
    }
}

impl Merge for Map<String, Value> {
    fn merge_from(&mut self, other: &Self) {
        merge_map_in_place(self, other);
    }
}

/// Wrapper whose merge always takes the override as a whole.
///
/// For tuple-shaped entries such as `["error", {"max": 3}]` or
/// `[2, "always", 100]`, where a union of the two arrays would produce
/// nonsense.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Replace<T>(pub T);

impl<T: Clone> Merge for Replace<T> {
    fn merge_from(&mut self, other: &Self) {
        self.0.clone_from(&other.0);
    }
}

impl<T> From<T> for Replace<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
