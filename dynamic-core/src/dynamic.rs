//! The `Dynamic` wrapper and its sentinel
//!
//! A [`Dynamic`] holds one parsed JSON value and hands out new dynamics for
//! every successful navigation step. A failed step yields the sentinel,
//! [`Dynamic::NOOP`], which absorbs every further step, so a chain only needs
//! to be inspected once at the end.

use crate::error::ImmutabilityError;
use crate::iter::Iter;
use crate::kind::Kind;
use crate::views::{Items, Keys, Values};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, trace};

/// Immutable wrapper around a parsed JSON value, or the "not found" sentinel.
///
/// Dynamics either borrow the value they wrap ([`Dynamic::new`]) or own it
/// ([`Dynamic::owned`]). Children of a borrowed dynamic borrow from the same
/// document; children of an owned dynamic are owned copies.
///
/// ```
/// use dynamic_core::{Dynamic, NOOP};
/// use serde_json::json;
///
/// let doc = json!({"results": {"name": {"en": "One", "es": "Uno"}}});
/// let json = Dynamic::new(&doc);
///
/// assert_eq!(json.get("results").get("name").get("en").as_str(), Some("One"));
/// assert_eq!(json.get("foo").get("bar").get("baz"), NOOP);
/// ```
#[derive(Clone, PartialEq)]
pub struct Dynamic<'a> {
    inner: Inner<'a>,
}

#[derive(Clone, PartialEq)]
enum Inner<'a> {
    Held(Cow<'a, Value>),
    NoOp,
}

/// The sentinel returned by every failed navigation step
pub const NOOP: Dynamic<'static> = Dynamic::NOOP;

impl Dynamic<'static> {
    /// Wrap an owned value.
    ///
    /// Every successful step from an owned dynamic clones the child's
    /// subtree, so a chain of depth `d` copies nested data `d` times. Wrap a
    /// borrowed document with [`Dynamic::new`] for deep chains.
    pub fn owned(value: Value) -> Self {
        Dynamic {
            inner: Inner::Held(Cow::Owned(value)),
        }
    }
}

impl<'a> Dynamic<'a> {
    /// The sentinel: resolves to nothing and absorbs all navigation
    pub const NOOP: Self = Dynamic { inner: Inner::NoOp };

    /// Wrap a borrowed value
    pub fn new(value: &'a Value) -> Self {
        Dynamic {
            inner: Inner::Held(Cow::Borrowed(value)),
        }
    }

    /// Whether this is the sentinel
    pub fn is_noop(&self) -> bool {
        matches!(self.inner, Inner::NoOp)
    }

    /// Kind of the held value, `None` for the sentinel
    pub fn kind(&self) -> Option<Kind> {
        self.resolve().map(Kind::of)
    }

    /// Navigate to field `name` of a mapping.
    ///
    /// Returns the sentinel if the held value is not a mapping or has no
    /// such key.
    pub fn get(&self, name: &str) -> Dynamic<'a> {
        let child = self.descend(|value| value.as_object().and_then(|map| map.get(name)));
        if child.is_noop() {
            if let Some(kind) = self.kind() {
                trace!(field = name, %kind, "field not found");
            }
        }
        child
    }

    /// Navigate to element `index` of a sequence.
    ///
    /// Negative indices are never valid and yield the sentinel, as do
    /// out-of-range indices and non-sequence values.
    pub fn at(&self, index: isize) -> Dynamic<'a> {
        let child = match usize::try_from(index) {
            Ok(index) => self.descend(|value| value.as_array().and_then(|items| items.get(index))),
            Err(_) => Dynamic::NOOP,
        };
        if child.is_noop() {
            if let Some(kind) = self.kind() {
                trace!(index, %kind, "index not found");
            }
        }
        child
    }

    /// The raw held value, ending a navigation chain.
    ///
    /// `None` means the chain went through a failed step.
    pub fn resolve(&self) -> Option<&Value> {
        match &self.inner {
            Inner::Held(value) => Some(&**value),
            Inner::NoOp => None,
        }
    }

    /// Consume the dynamic and return its value with the document's lifetime
    pub fn into_resolved(self) -> Option<Cow<'a, Value>> {
        match self.inner {
            Inner::Held(value) => Some(value),
            Inner::NoOp => None,
        }
    }

    /// Attempt to assign field `name`.
    ///
    /// Always fails for a held value; the sentinel silently ignores it.
    pub fn set<V: Into<Value>>(&self, name: &str, _value: V) -> Result<(), ImmutabilityError> {
        if self.is_noop() {
            return Ok(());
        }
        debug!(field = name, "rejected assignment");
        Err(ImmutabilityError::Set {
            name: name.to_string(),
        })
    }

    /// Attempt to delete field `name`.
    ///
    /// Always fails for a held value; the sentinel silently ignores it.
    pub fn remove(&self, name: &str) -> Result<(), ImmutabilityError> {
        if self.is_noop() {
            return Ok(());
        }
        debug!(field = name, "rejected deletion");
        Err(ImmutabilityError::Delete {
            name: name.to_string(),
        })
    }

    /// Membership test.
    ///
    /// Sequences compare elements for equality (numbers by value, so `1`
    /// matches `1.0`), mappings check key presence and strings check for a
    /// substring. Scalars contain nothing.
    pub fn contains<Q: Into<Value>>(&self, needle: Q) -> bool {
        let needle = needle.into();
        match self.resolve() {
            Some(Value::Array(items)) => items.iter().any(|item| same_element(item, &needle)),
            Some(Value::Object(map)) => needle.as_str().is_some_and(|key| map.contains_key(key)),
            Some(Value::String(haystack)) => {
                needle.as_str().is_some_and(|sub| haystack.contains(sub))
            }
            _ => false,
        }
    }

    /// Iterate over the held value.
    ///
    /// Strings yield one dynamic per character, sequences one per element and
    /// mappings one per key. Every call starts a fresh, independent iterator.
    pub fn iter(&self) -> Iter<'a> {
        Iter::new(self)
    }

    /// `(key, value)` pairs of a mapping; empty for anything else
    pub fn items(&self) -> Items<'_> {
        Items::new(self.resolve().and_then(Value::as_object))
    }

    /// Keys of a mapping; empty for anything else
    pub fn keys(&self) -> Keys<'_> {
        Keys::new(self.resolve().and_then(Value::as_object))
    }

    /// Values of a mapping; empty for anything else
    pub fn values(&self) -> Values<'_> {
        Values::new(self.resolve().and_then(Value::as_object))
    }

    /// Held string, if any
    pub fn as_str(&self) -> Option<&str> {
        self.resolve().and_then(Value::as_str)
    }

    /// Held boolean, if any
    pub fn as_bool(&self) -> Option<bool> {
        self.resolve().and_then(Value::as_bool)
    }

    /// Held number as `i64`, if it fits
    pub fn as_i64(&self) -> Option<i64> {
        self.resolve().and_then(Value::as_i64)
    }

    /// Held number as `u64`, if it fits
    pub fn as_u64(&self) -> Option<u64> {
        self.resolve().and_then(Value::as_u64)
    }

    /// Held number as `f64`
    pub fn as_f64(&self) -> Option<f64> {
        self.resolve().and_then(Value::as_f64)
    }

    /// Whether the held value is JSON null (the sentinel is not)
    pub fn is_null(&self) -> bool {
        matches!(self.resolve(), Some(Value::Null))
    }

    pub(crate) fn held(&self) -> Option<&Cow<'a, Value>> {
        match &self.inner {
            Inner::Held(value) => Some(value),
            Inner::NoOp => None,
        }
    }

    /// Apply one navigation step, keeping borrowed children borrowed.
    pub(crate) fn descend<F>(&self, select: F) -> Dynamic<'a>
    where
        F: for<'v> FnOnce(&'v Value) -> Option<&'v Value>,
    {
        match self.inner {
            Inner::Held(Cow::Borrowed(value)) => select(value).map_or(Dynamic::NOOP, Dynamic::new),
            Inner::Held(Cow::Owned(ref value)) => {
                select(value).map_or(Dynamic::NOOP, |child| Dynamic {
                    inner: Inner::Held(Cow::Owned(child.clone())),
                })
            }
            Inner::NoOp => Dynamic::NOOP,
        }
    }
}

fn same_element(item: &Value, needle: &Value) -> bool {
    match (item, needle) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (a.as_u64(), b.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => a.as_f64() == b.as_f64(),
            },
        },
        _ => item == needle,
    }
}

impl<'a> From<&'a Value> for Dynamic<'a> {
    fn from(value: &'a Value) -> Self {
        Dynamic::new(value)
    }
}

impl From<Value> for Dynamic<'static> {
    fn from(value: Value) -> Self {
        Dynamic::owned(value)
    }
}

impl<'a, 'b> IntoIterator for &'b Dynamic<'a> {
    type Item = Dynamic<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Dynamic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolve() {
            Some(value) => f.debug_tuple("Dynamic").field(value).finish(),
            None => f.write_str("NoOp"),
        }
    }
}

impl fmt::Display for Dynamic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolve() {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("NoOp"),
        }
    }
}
