//! Proptest strategies for arbitrary JSON documents

use proptest::prelude::*;
use serde_json::{Map, Number, Value};

/// Scalar JSON values: null, booleans, integers, finite floats and short strings
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        (-1.0e9f64..1.0e9f64).prop_map(|f| Number::from_f64(f).map_or(Value::Null, Value::Number)),
        "[a-z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

/// Short mapping keys
pub fn arb_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

/// Arbitrary nested JSON values up to a few levels deep
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Arbitrary mappings whose values are arbitrary JSON
pub fn arb_mapping() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::vec((arb_key(), arb_value()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Arbitrary sequences whose elements are arbitrary JSON
pub fn arb_sequence() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_value(), 0..8)
}

/// A navigation step: field name or (possibly negative) index
#[derive(Debug, Clone)]
pub enum Step {
    /// Field access by name
    Field(String),
    /// Index access
    Index(isize),
}

/// Arbitrary navigation paths
pub fn arb_path() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            arb_key().prop_map(Step::Field),
            (-3isize..10).prop_map(Step::Index),
        ],
        0..6,
    )
}
