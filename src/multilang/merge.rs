//! `mergeLanguages` data helper.
//!
//! Zips per-language result lists (e.g. one page of search results per
//! language) into one list of records with language-qualified keys:
//!
//! ```text
//! { en: [{title: "Hi"}], fr: [{title: "Salut"}, {title: "Re"}] }
//!     ▼
//! [ {title.en: "Hi", title.fr: "Salut"}, {title.fr: "Re"} ]
//! ```

use crate::site::Data;
use serde_json::Value;

/// Name under which the helper is registered.
pub const MERGE_LANGUAGES: &str = "mergeLanguages";

/// Merge record lists keyed by language.
///
/// The result is as long as the longest list. A language whose list is too
/// short, or whose entry is not a record, contributes nothing at that index.
pub fn merge_languages(languages: &Data) -> Vec<Data> {
    let len = languages
        .values()
        .filter_map(Value::as_array)
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    (0..len)
        .map(|index| {
            let mut merged = Data::new();
            for (lang, records) in languages {
                let Some(Value::Object(record)) = records.as_array().and_then(|r| r.get(index))
                else {
                    continue;
                };
                for (key, value) in record {
                    merged.insert(format!("{key}.{lang}"), value.clone());
                }
            }
            merged
        })
        .collect()
}

/// Template-facing wrapper: non-object input merges to an empty list.
pub fn merge_languages_helper(input: &Value) -> Value {
    let merged = match input {
        Value::Object(languages) => merge_languages(languages),
        _ => Vec::new(),
    };
    Value::Array(merged.into_iter().map(Value::Object).collect())
}
