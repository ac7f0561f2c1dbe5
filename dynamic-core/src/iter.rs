//! Iteration over a dynamic

use crate::dynamic::Dynamic;
use crate::kind::Kind;
use serde_json::Value;
use std::borrow::Cow;
use std::iter::FusedIterator;

/// Iterator returned by [`Dynamic::iter`].
///
/// Each iterator carries its own position, so several may walk the same
/// dynamic at once. Items over a borrowed document are produced lazily; an
/// owned value is materialized when the iterator is created.
pub struct Iter<'a> {
    state: State<'a>,
}

enum State<'a> {
    Empty,
    Elements(std::slice::Iter<'a, Value>),
    Chars(std::str::Chars<'a>),
    Keys(serde_json::map::Keys<'a>),
    Materialized(std::vec::IntoIter<Value>),
}

impl<'a> Iter<'a> {
    pub(crate) fn new(dynamic: &Dynamic<'a>) -> Self {
        if !dynamic.kind().is_some_and(Kind::is_iterable) {
            return Iter {
                state: State::Empty,
            };
        }
        let state = match dynamic.held() {
            Some(Cow::Borrowed(value)) => match *value {
                Value::Array(items) => State::Elements(items.iter()),
                Value::String(text) => State::Chars(text.chars()),
                Value::Object(map) => State::Keys(map.keys()),
                _ => State::Empty,
            },
            Some(Cow::Owned(value)) => State::Materialized(materialize(value).into_iter()),
            None => State::Empty,
        };
        Iter { state }
    }
}

fn materialize(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::String(text) => text.chars().map(char_value).collect(),
        Value::Object(map) => map.keys().cloned().map(Value::String).collect(),
        _ => Vec::new(),
    }
}

fn char_value(c: char) -> Value {
    Value::String(c.to_string())
}

impl<'a> Iterator for Iter<'a> {
    type Item = Dynamic<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::Empty => None,
            State::Elements(items) => items.next().map(Dynamic::new),
            State::Chars(chars) => chars.next().map(|c| Dynamic::owned(char_value(c))),
            State::Keys(keys) => keys.next().map(|key| Dynamic::owned(Value::String(key.clone()))),
            State::Materialized(items) => items.next().map(Dynamic::owned),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Empty => (0, Some(0)),
            State::Elements(items) => items.size_hint(),
            State::Chars(chars) => chars.size_hint(),
            State::Keys(keys) => keys.size_hint(),
            State::Materialized(items) => items.size_hint(),
        }
    }
}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolved(dynamic: &Dynamic<'_>) -> Vec<Value> {
        dynamic
            .iter()
            .filter_map(|item| item.into_resolved().map(Cow::into_owned))
            .collect()
    }

    #[test]
    fn empty_list_yields_nothing() {
        let doc = json!([]);
        assert_eq!(Dynamic::new(&doc).iter().count(), 0);
    }

    #[test]
    fn string_yields_characters() {
        let doc = json!("abc");
        assert_eq!(
            resolved(&Dynamic::new(&doc)),
            vec![json!("a"), json!("b"), json!("c")]
        );
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        let doc = json!("né");
        assert_eq!(resolved(&Dynamic::new(&doc)), vec![json!("n"), json!("é")]);
    }

    #[test]
    fn mapping_yields_keys_in_insertion_order() {
        let doc = json!({"zeta": 1, "alpha": 2, "mid": 3});
        assert_eq!(
            resolved(&Dynamic::new(&doc)),
            vec![json!("zeta"), json!("alpha"), json!("mid")]
        );
    }

    #[test]
    fn scalars_yield_nothing() {
        for doc in [json!(1), json!(2.5), json!(true), json!(null)] {
            assert_eq!(Dynamic::new(&doc).iter().count(), 0);
        }
    }

    #[test]
    fn owned_scalars_and_noop_yield_nothing() {
        assert_eq!(Dynamic::owned(json!(7)).iter().count(), 0);
        assert_eq!(Dynamic::owned(json!(null)).iter().count(), 0);
        assert_eq!(Dynamic::NOOP.iter().size_hint(), (0, Some(0)));
    }

    #[test]
    fn list_items_are_navigable() {
        let doc = json!([{"name": "vince"}, {"name": "hana"}, {"name": "leo"}]);
        let json = Dynamic::new(&doc);
        for item in &json {
            assert!(item.contains("name"));
        }
        let names: Vec<&str> = json
            .iter()
            .filter_map(|item| item.get("name").into_resolved())
            .filter_map(|value| match value {
                Cow::Borrowed(Value::String(name)) => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["vince", "hana", "leo"]);
    }

    #[test]
    fn iteration_restarts_from_the_beginning() {
        let doc = json!([1, 2, 3]);
        let json = Dynamic::new(&doc);
        assert_eq!(json.iter().count(), 3);
        assert_eq!(json.iter().count(), 3);
    }

    #[test]
    fn nested_iteration_over_same_dynamic() {
        let doc = json!(["x", "y"]);
        let json = Dynamic::new(&doc);
        let mut pairs = 0;
        for _ in &json {
            for _ in &json {
                pairs += 1;
            }
        }
        assert_eq!(pairs, 4);
    }

    #[test]
    fn owned_value_iterates_the_same() {
        let json = Dynamic::owned(json!({"one": 1, "two": 2}));
        assert_eq!(resolved(&json), vec![json!("one"), json!("two")]);

        let json = Dynamic::owned(json!("hi"));
        assert_eq!(resolved(&json), vec![json!("h"), json!("i")]);
    }

    #[test]
    fn exact_hint_for_sequences() {
        let doc = json!([1, 2]);
        assert_eq!(Dynamic::new(&doc).iter().size_hint(), (2, Some(2)));
    }
}
