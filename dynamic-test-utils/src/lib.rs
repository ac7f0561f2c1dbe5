//! Dynamic Test Utilities
//!
//! Shared fixtures, builders, proptest strategies and tracing setup for the
//! Dynamic workspace tests.

use serde_json::{Map, Value};
use std::sync::Once;

pub mod strategies;

/// Builder for mappings that keeps fields in insertion order
pub struct MappingBuilder {
    fields: Map<String, Value>,
}

impl MappingBuilder {
    /// Create a new mapping builder
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a field with a string value
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a field with an integer value
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add a field with a boolean value
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Add a field with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.fields.insert(key.to_string(), Value::Null);
        self
    }

    /// Add a field with an object value
    pub fn object(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Add a field with an array value
    pub fn array(mut self, key: &str, value: Vec<Value>) -> Self {
        self.fields.insert(key.to_string(), Value::Array(value));
        self
    }

    /// Build the mapping
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for MappingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Canned documents shaped like typical API responses
pub struct Fixtures;

impl Fixtures {
    /// Translated name envelope: `results.name.{en,es,fr}`
    pub fn translations() -> Value {
        let name = MappingBuilder::new()
            .string("en", "One")
            .string("es", "Uno")
            .string("fr", "Une")
            .build();
        let results = MappingBuilder::new().object("name", name).build();
        MappingBuilder::new().object("results", results).build()
    }

    /// List of people, each a mapping with a `name`
    pub fn people() -> Value {
        Value::Array(
            ["vince", "hana", "leo"]
                .iter()
                .map(|name| MappingBuilder::new().string("name", name).build())
                .collect(),
        )
    }

    /// Paged API response with mixed field types
    pub fn paged_response() -> Value {
        MappingBuilder::new()
            .int("page", 1)
            .bool("has_more", false)
            .null("next_cursor")
            .array(
                "results",
                vec![
                    MappingBuilder::new()
                        .int("id", 1)
                        .string("name", "first")
                        .array("tags", vec![Value::from("new"), Value::from("featured")])
                        .build(),
                    MappingBuilder::new()
                        .int("id", 2)
                        .string("name", "second")
                        .array("tags", vec![])
                        .build(),
                ],
            )
            .build()
    }

    /// A chain of `depth` nested single-key mappings ending in `"leaf"`.
    ///
    /// Level `i` is keyed `level_i`, outermost first.
    pub fn deeply_nested(depth: usize) -> Value {
        (0..depth).rev().fold(Value::from("leaf"), |inner, i| {
            MappingBuilder::new()
                .object(&format!("level_{}", i), inner)
                .build()
        })
    }

    /// Strings with multi-byte characters
    pub fn unicode_strings() -> Vec<Value> {
        vec![
            Value::from("Hello, World!"),
            Value::from("Hello, 世界! 🌍"),
            Value::from("🚀🎉💯🔥⭐"),
            Value::from("ASCII + 中文 + 🎯 + العربية"),
        ]
    }
}

static TRACING: Once = Once::new();

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Honours `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Utility functions for test assertions
pub mod assertions {
    use serde_json::Value;

    /// Assert that a resolved chain produced the expected value
    pub fn assert_resolves_to(actual: Option<&Value>, expected: &Value, context: &str) {
        match actual {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "Resolve assertion failed in {}:\nExpected: {}\nActual: {}",
                context, expected, actual
            ),
            None => panic!(
                "Resolve assertion failed in {}:\nExpected: {}\nActual: NoOp",
                context, expected
            ),
        }
    }
}
