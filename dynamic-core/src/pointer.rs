//! JSON Pointer (RFC 6901) navigation
//!
//! A pointer is a shortcut for a chain of [`Dynamic::get`] / [`Dynamic::at`]
//! calls. Only malformed pointers are errors; a pointer that does not match
//! the data resolves to the sentinel.

use crate::dynamic::Dynamic;
use crate::error::{PointerError, Result};
use crate::limits::PointerLimits;
use serde_json::Value;
use tracing::{debug, trace};

/// Split an RFC 6901 pointer into unescaped reference tokens.
///
/// `""` names the whole document and yields no tokens. Length and depth are
/// checked against `limits` before any token is decoded.
pub fn parse_pointer(pointer: &str, limits: &PointerLimits) -> Result<Vec<String>> {
    if pointer.len() > limits.max_pointer_length {
        return Err(PointerError::PointerTooLong {
            length: pointer.len(),
            max_length: limits.max_pointer_length,
        });
    }

    // Empty string is root
    if pointer.is_empty() {
        return Ok(Vec::new());
    }

    if !pointer.starts_with('/') {
        return Err(PointerError::InvalidPointer {
            pointer: pointer.to_string(),
            reason: "Pointer must start with '/' (or be empty for root)".to_string(),
        });
    }

    let raw_tokens: Vec<&str> = pointer.split('/').skip(1).collect();

    if raw_tokens.len() > limits.max_depth {
        return Err(PointerError::DepthLimitExceeded {
            pointer: pointer.to_string(),
            depth: raw_tokens.len(),
            max_depth: limits.max_depth,
        });
    }

    raw_tokens
        .into_iter()
        .map(|raw| {
            check_escapes(raw).map_err(|reason| PointerError::InvalidPointer {
                pointer: pointer.to_string(),
                reason,
            })?;
            Ok(unescape_token(raw))
        })
        .collect()
}

/// Decode one reference token: `~1` becomes `/` and `~0` becomes `~`.
pub fn unescape_token(token: &str) -> String {
    // ~1 before ~0, otherwise "~01" would become "/"
    token.replace("~1", "/").replace("~0", "~")
}

/// Encode a key so it can appear as one reference token.
pub fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Every `~` in a raw token must be followed by `0` or `1`.
fn check_escapes(token: &str) -> std::result::Result<(), String> {
    for rest in token.split('~').skip(1) {
        match rest.chars().next() {
            Some('0' | '1') => {}
            Some(other) => {
                return Err(format!(
                    "'~{}' is not an escape; only '~0' and '~1' are allowed",
                    other
                ))
            }
            None => return Err("token has a '~' with nothing after it".to_string()),
        }
    }
    Ok(())
}

/// Array index per RFC 6901: decimal digits, no leading zeros except "0".
/// `-` (one past the end) never names an existing element.
fn parse_array_index(token: &str) -> Option<usize> {
    let digits_only = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    token.parse().ok()
}

impl<'a> Dynamic<'a> {
    /// Navigate an RFC 6901 pointer with default [`PointerLimits`]
    ///
    /// ```
    /// use dynamic_core::Dynamic;
    /// use serde_json::json;
    ///
    /// let doc = json!({"results": [{"name": "first"}, {"name": "second"}]});
    /// let json = Dynamic::new(&doc);
    ///
    /// assert_eq!(json.pointer("/results/1/name")?.as_str(), Some("second"));
    /// assert!(json.pointer("/results/7/name")?.is_noop());
    /// # Ok::<(), dynamic_core::PointerError>(())
    /// ```
    pub fn pointer(&self, pointer: &str) -> Result<Dynamic<'a>> {
        self.pointer_with_limits(pointer, &PointerLimits::default())
    }

    /// Navigate an RFC 6901 pointer under explicit limits
    pub fn pointer_with_limits(&self, pointer: &str, limits: &PointerLimits) -> Result<Dynamic<'a>> {
        limits.validate()?;

        let tokens = parse_pointer(pointer, limits).map_err(|err| {
            debug!(pointer, error = %err, "rejected pointer");
            err
        })?;

        let mut current = self.clone();
        for (depth, token) in tokens.iter().enumerate() {
            let next = current.step(token);
            if next.is_noop() {
                if let Some(kind) = current.kind() {
                    trace!(pointer, depth, token = token.as_str(), %kind, "pointer token not found");
                }
                return Ok(Dynamic::NOOP);
            }
            current = next;
        }
        Ok(current)
    }

    fn step(&self, token: &str) -> Dynamic<'a> {
        self.descend(|value| match value {
            Value::Object(map) => map.get(token),
            Value::Array(items) => parse_array_index(token).and_then(|index| items.get(index)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_pointer_empty_is_root() {
        let tokens = parse_pointer("", &PointerLimits::default()).unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn parse_pointer_unescapes_tokens() {
        let tokens = parse_pointer("/a~1b/c~0d/~01", &PointerLimits::default()).unwrap();
        assert_eq!(tokens, vec!["a/b", "c~d", "~1"]);
    }

    #[test]
    fn parse_pointer_keeps_empty_tokens() {
        let tokens = parse_pointer("/a//b/", &PointerLimits::default()).unwrap();
        assert_eq!(tokens, vec!["a", "", "b", ""]);
    }

    #[test]
    fn parse_pointer_requires_leading_slash() {
        let result = parse_pointer("a/b", &PointerLimits::default());
        assert!(matches!(result, Err(PointerError::InvalidPointer { .. })));
    }

    #[test]
    fn parse_pointer_rejects_bad_escapes() {
        let limits = PointerLimits::default();
        assert!(matches!(
            parse_pointer("/a~2", &limits),
            Err(PointerError::InvalidPointer { .. })
        ));
        assert!(matches!(
            parse_pointer("/a~", &limits),
            Err(PointerError::InvalidPointer { .. })
        ));
        assert!(matches!(
            parse_pointer("/~~0", &limits),
            Err(PointerError::InvalidPointer { .. })
        ));
        assert!(parse_pointer("/~0~1", &limits).is_ok());
    }

    #[test]
    fn parse_pointer_enforces_limits() {
        let limits = PointerLimits {
            max_depth: 2,
            max_pointer_length: 8,
        };
        assert!(matches!(
            parse_pointer("/a/b/c", &limits),
            Err(PointerError::DepthLimitExceeded { depth: 3, .. })
        ));
        assert!(matches!(
            parse_pointer("/abcdefgh", &limits),
            Err(PointerError::PointerTooLong { length: 9, .. })
        ));
    }

    #[test]
    fn escape_roundtrips_special_characters() {
        let raw = "a/~b";
        assert_eq!(escape_token(raw), "a~1~0b");
        assert_eq!(unescape_token(&escape_token(raw)), raw);
    }

    #[test]
    fn array_index_rules() {
        assert_eq!(parse_array_index("0"), Some(0));
        assert_eq!(parse_array_index("12"), Some(12));
        assert_eq!(parse_array_index("01"), None);
        assert_eq!(parse_array_index("-"), None);
        assert_eq!(parse_array_index("-1"), None);
        assert_eq!(parse_array_index("+1"), None);
        assert_eq!(parse_array_index(""), None);
        assert_eq!(parse_array_index("99999999999999999999999"), None);
    }

    #[test]
    fn pointer_navigates_mappings_and_sequences() {
        let doc = json!({"api": {"data": [{"id": 1}, {"id": 2}]}});
        let json = Dynamic::new(&doc);
        assert_eq!(json.pointer("/api/data/1/id").unwrap().as_i64(), Some(2));
        assert_eq!(json.pointer("").unwrap(), json);
    }

    #[test]
    fn pointer_misses_are_noop_not_errors() {
        let doc = json!({"data": [1, 2, 3]});
        let json = Dynamic::new(&doc);
        assert!(json.pointer("/missing/path").unwrap().is_noop());
        assert!(json.pointer("/data/3").unwrap().is_noop());
        assert!(json.pointer("/data/-").unwrap().is_noop());
        assert!(json.pointer("/data/0/deeper").unwrap().is_noop());
    }

    #[test]
    fn pointer_uses_escaped_keys() {
        let doc = json!({"a/b": {"m~n": "found"}});
        let json = Dynamic::new(&doc);
        assert_eq!(json.pointer("/a~1b/m~0n").unwrap().as_str(), Some("found"));
    }

    #[test]
    fn pointer_numeric_key_on_mapping() {
        let doc = json!({"0": "zero"});
        assert_eq!(Dynamic::new(&doc).pointer("/0").unwrap().as_str(), Some("zero"));
    }

    #[test]
    fn pointer_on_noop_is_noop() {
        assert!(Dynamic::NOOP.pointer("/a/b").unwrap().is_noop());
        assert!(Dynamic::NOOP.pointer("bad").is_err());
    }

    #[test]
    fn pointer_rejects_invalid_limits() {
        let doc = json!({});
        let limits = PointerLimits {
            max_depth: usize::MAX,
            ..PointerLimits::default()
        };
        assert!(matches!(
            Dynamic::new(&doc).pointer_with_limits("/a", &limits),
            Err(PointerError::ConfigurationExceedsHardLimits { .. })
        ));
    }
}
