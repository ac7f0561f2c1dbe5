//! Dynamic Core - Safe, chainable navigation through parsed JSON
//!
//! A [`Dynamic`] wraps a `serde_json::Value` and lets callers walk into it
//! field by field and index by index without checking every step. Missing
//! keys, out-of-range indices and type mismatches all produce the sentinel,
//! [`NOOP`], which absorbs any further navigation. Only the end of a chain
//! needs inspecting.
//!
//! ```
//! use dynamic_core::Dynamic;
//! use serde_json::json;
//!
//! let doc = json!({"results": [{"name": "first"}, {"name": "second"}, {"name": "third"}]});
//! let json = Dynamic::new(&doc);
//!
//! let names: Vec<String> = json
//!     .get("results")
//!     .iter()
//!     .filter_map(|item| item.get("name").as_str().map(str::to_owned))
//!     .collect();
//! assert_eq!(names, ["first", "second", "third"]);
//!
//! assert_eq!(json.get("results").at(1).resolve(), Some(&json!({"name": "second"})));
//! assert!(json.get("results").at(5).get("name").is_noop());
//! ```
//!
//! Dynamics are immutable. [`Dynamic::set`] and [`Dynamic::remove`] exist
//! only to reject the attempt with an [`ImmutabilityError`].
//!
//! This crate includes:
//!
//! - The wrapper and its sentinel
//! - Iteration and membership testing
//! - Read-only mapping views
//! - RFC 6901 pointer navigation and its limits
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod dynamic;
pub mod error;
pub mod iter;
pub mod kind;
pub mod limits;
pub mod pointer;
pub mod views;

// Re-export commonly used types
pub use dynamic::{Dynamic, NOOP};
pub use error::{ImmutabilityError, PointerError, Result};
pub use iter::Iter;
pub use kind::Kind;
pub use limits::PointerLimits;
pub use views::{Items, Keys, Values};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dynamic_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dynamic<'static>>();
        assert_send_sync::<Iter<'static>>();
    }

    #[test]
    fn noop_constants_agree() {
        assert_eq!(NOOP, Dynamic::NOOP);
        assert!(NOOP.is_noop());
    }

    #[test]
    fn from_conversions() {
        let doc = json!({"k": "v"});
        let borrowed: Dynamic<'_> = (&doc).into();
        let owned: Dynamic<'static> = doc.clone().into();
        assert_eq!(borrowed, owned);
        assert_eq!(borrowed.kind(), Some(Kind::Mapping));
    }
}
