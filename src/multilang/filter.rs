//! Language-qualified key resolution.
//!
//! A key `title.gl` holds the value of `title` for Galician. Filtering data
//! for one language promotes that language's qualified values to their base
//! key and drops the qualified keys of every known language:
//!
//! ```text
//! { title: "Hi", title.gl: "Ola", title.es: "Hola" }
//!     │ filter_language(["en", "gl", "es"], "gl")
//!     ▼
//! { title: "Ola" }
//! ```
//!
//! Nested maps and maps inside arrays are filtered the same way. The input
//! is never mutated.

use crate::site::Data;
use rustc_hash::FxHashSet;
use serde_json::Value;

/// Filter `data` for `target`, given every language code in play.
pub fn filter_language<S: AsRef<str>>(languages: &[S], target: &str, data: &Data) -> Data {
    let languages: FxHashSet<&str> = languages.iter().map(AsRef::as_ref).collect();
    filter_map(&languages, target, data)
}

/// Unqualified keys are copied first and promoted values written last, so a
/// qualified value wins over its base key whatever the key order.
fn filter_map(languages: &FxHashSet<&str>, target: &str, data: &Data) -> Data {
    let mut filtered = Data::new();
    let mut promoted = Vec::new();

    for (key, value) in data {
        let value = filter_value(languages, target, value);
        match split_qualified(key, languages) {
            Some((base, lang)) if lang == target => promoted.push((base, value)),
            Some(_) => {}
            None => {
                filtered.insert(key.clone(), value);
            }
        }
    }

    for (base, value) in promoted {
        filtered.insert(base.to_owned(), value);
    }
    filtered
}

fn filter_value(languages: &FxHashSet<&str>, target: &str, value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(filter_map(languages, target, map)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Object(map) => Value::Object(filter_map(languages, target, map)),
                    other => other.clone(),
                })
                .collect(),
        ),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}

/// `title.gl` → `("title", "gl")` when `gl` is a known language.
fn split_qualified<'k>(key: &'k str, languages: &FxHashSet<&str>) -> Option<(&'k str, &'k str)> {
    key.rsplit_once('.').filter(|(_, suffix)| languages.contains(suffix))
}
