//! Read-only views over the entries of a held mapping
//!
//! The views yield raw `serde_json` data, not dynamics. Over anything other
//! than a mapping they are empty.

use serde_json::{map, Map, Value};
use std::iter::FusedIterator;

macro_rules! mapping_view {
    ($(#[$meta:meta])* $name:ident, $inner:ident, $method:ident) => {
        $(#[$meta])*
        pub struct $name<'a> {
            inner: Option<map::$inner<'a>>,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(map: Option<&'a Map<String, Value>>) -> Self {
                Self {
                    inner: map.map(Map::$method),
                }
            }
        }

        impl<'a> Iterator for $name<'a> {
            type Item = <map::$inner<'a> as Iterator>::Item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.as_mut()?.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                match &self.inner {
                    Some(inner) => inner.size_hint(),
                    None => (0, Some(0)),
                }
            }
        }

        impl ExactSizeIterator for $name<'_> {}

        impl FusedIterator for $name<'_> {}
    };
}

mapping_view!(
    /// `(key, value)` pairs of a mapping, in insertion order
    Items,
    Iter,
    iter
);

mapping_view!(
    /// Keys of a mapping, in insertion order
    Keys,
    Keys,
    keys
);

mapping_view!(
    /// Values of a mapping, in insertion order
    Values,
    Values,
    values
);
