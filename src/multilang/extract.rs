//! Per-language views of one page's data.

use super::filter::filter_language;
use crate::site::{Data, Page};
use serde_json::Value;

/// Data of one page, resolved for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedFragment {
    pub data: Data,
    /// The language declares its own `url` (`url.<lang>` or `<lang>.url`).
    pub custom_url: bool,
}

/// Fragments in the order of the language list.
pub type Fragments = Vec<(String, TranslatedFragment)>;

/// Resolve `page`'s data once per language in `languages`.
///
/// With `only`, every other language is skipped but still counts as a known
/// language code, so its qualified keys are removed. A language listed twice
/// yields one fragment.
pub fn extract_languages<S: AsRef<str>>(
    languages: &[S],
    page: &Page,
    only: Option<&str>,
) -> Fragments {
    let mut fragments = Fragments::with_capacity(languages.len());

    for lang in languages.iter().map(AsRef::as_ref) {
        if only.is_some_and(|only| only != lang) || fragments.iter().any(|(l, _)| l == lang) {
            continue;
        }
        fragments.push((lang.to_owned(), extract_language(languages, lang, &page.data)));
    }
    fragments
}

fn extract_language<S: AsRef<str>>(languages: &[S], lang: &str, data: &Data) -> TranslatedFragment {
    let mut working = data.clone();
    let custom_url = has_custom_url(&working, lang);

    // Language blocks: `gl: { title: "Ola" }` overrides top-level fields for gl
    for code in languages.iter().map(AsRef::as_ref) {
        let Some(block) = working.shift_remove(code) else {
            continue;
        };
        if code == lang
            && let Value::Object(block) = block
        {
            working.extend(block);
        }
    }

    TranslatedFragment {
        data: filter_language(languages, lang, &working),
        custom_url,
    }
}

fn has_custom_url(data: &Data, lang: &str) -> bool {
    let qualified = data
        .get(&format!("url.{lang}"))
        .is_some_and(|url| !url.is_null());
    let in_block = data
        .get(lang)
        .and_then(Value::as_object)
        .is_some_and(|block| block.contains_key("url"));
    qualified || in_block
}

/// The `lang` field when it is a list, keeping only its string entries.
///
/// Returns `None` for a missing field, a single code, or an empty list.
pub fn language_list(page: &Page) -> Option<Vec<String>> {
    let languages: Vec<String> = page
        .data
        .get("lang")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();
    (!languages.is_empty()).then_some(languages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Source;
    use serde_json::json;

    fn page(data: Value) -> Page {
        let Value::Object(data) = data else {
            panic!("test data must be an object");
        };
        Page::new(Source::new("/about", ".md"), "/about/", data)
    }

    fn page_data(value: Value) -> Data {
        match value {
            Value::Object(map) => map,
            _ => panic!("test data must be an object"),
        }
    }

    fn fragment<'a>(fragments: &'a Fragments, lang: &str) -> &'a TranslatedFragment {
        &fragments.iter().find(|(l, _)| l == lang).unwrap().1
    }

    #[test]
    fn test_one_fragment_per_language_in_order() {
        let page = page(json!({ "lang": ["gl", "en", "gl"], "title": "Hi", "title.gl": "Ola" }));
        let fragments = extract_languages(&["gl", "en", "gl"], &page, None);

        let langs: Vec<_> = fragments.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(langs, vec!["gl", "en"]);
        assert_eq!(fragment(&fragments, "gl").data["title"], json!("Ola"));
        assert_eq!(fragment(&fragments, "en").data["title"], json!("Hi"));
    }

    #[test]
    fn test_language_block_overrides_and_is_removed() {
        let page = page(json!({
            "title": "Hi",
            "layout": "page.vto",
            "gl": { "title": "Ola", "summary.gl": "Resumo" },
            "en": { "summary": "Summary" },
        }));
        let fragments = extract_languages(&["en", "gl"], &page, None);

        assert_eq!(
            fragment(&fragments, "gl").data,
            page_data(json!({ "title": "Ola", "layout": "page.vto", "summary": "Resumo" }))
        );
        assert_eq!(
            fragment(&fragments, "en").data,
            page_data(json!({ "title": "Hi", "layout": "page.vto", "summary": "Summary" }))
        );
    }

    #[test]
    fn test_custom_url_detection() {
        let page = page(json!({
            "url.gl": "/gl/acerca/",
            "es": { "url": "/es/acerca/" },
            "url.pt": null,
        }));
        let fragments = extract_languages(&["en", "gl", "es", "pt"], &page, None);

        assert!(!fragment(&fragments, "en").custom_url);
        assert!(fragment(&fragments, "gl").custom_url);
        assert!(fragment(&fragments, "es").custom_url);
        assert!(!fragment(&fragments, "pt").custom_url);
        assert_eq!(fragment(&fragments, "gl").data["url"], json!("/gl/acerca/"));
        assert_eq!(fragment(&fragments, "es").data["url"], json!("/es/acerca/"));
        assert!(!fragment(&fragments, "en").data.contains_key("url"));
    }

    #[test]
    fn test_only_restricts_but_keeps_known_languages() {
        let page = page(json!({ "title.en": "Hi", "title.gl": "Ola" }));
        let fragments = extract_languages(&["en", "gl"], &page, Some("gl"));

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].0, "gl");
        assert_eq!(fragments[0].1.data, page_data(json!({ "title": "Ola" })));
    }

    #[test]
    fn test_partition_has_no_foreign_qualifiers() {
        let page = page(json!({
            "lang": ["a", "b"],
            "title.a": "A",
            "title.b": "B",
            "body": "shared",
            "tags": [{ "name.a": "x" }],
        }));
        let fragments = extract_languages(&["a", "b"], &page, None);

        for (lang, fragment) in &fragments {
            let keys: Vec<_> = fragment.data.keys().cloned().collect();
            assert_eq!(keys, vec!["lang", "body", "tags", "title"], "lang {lang}");
            assert!(fragment.data.keys().all(|k| !k.ends_with(".a") && !k.ends_with(".b")));
        }
        assert_eq!(fragment(&fragments, "a").data["tags"], json!([{ "name": "x" }]));
        assert_eq!(fragment(&fragments, "b").data["tags"], json!([{}]));
    }

    #[test]
    fn test_fragments_do_not_alias() {
        let page = page(json!({ "nav": { "label": "Home" } }));
        let mut fragments = extract_languages(&["en", "gl"], &page, None);

        fragments[0].1.data["nav"]["label"] = json!("Changed");
        assert_eq!(fragments[1].1.data["nav"]["label"], json!("Home"));
        assert_eq!(page.data["nav"]["label"], json!("Home"));
    }

    #[test]
    fn test_language_list() {
        assert_eq!(
            language_list(&page(json!({ "lang": ["en", 3, "gl"] }))),
            Some(vec!["en".to_string(), "gl".to_string()])
        );
        assert_eq!(language_list(&page(json!({ "lang": "en" }))), None);
        assert_eq!(language_list(&page(json!({ "lang": [] }))), None);
        assert_eq!(language_list(&page(json!({}))), None);
    }
}
