//! Link pages that are translations of each other by filename.
//!
//! Pages in one directory form a language group when their slugs share a
//! base and end in `_<lang>`; the page without a suffix joins the group too:
//!
//! | File | `lang` | URL before | URL after |
//! |------|--------|------------|-----------|
//! | `about.md` | `en` | `/about/` | `/about/` |
//! | `about_gl.md` | `gl` | `/about_gl/` | `/gl/about/` |
//! | `about_es.md` | `es` | `/about_es/` | `/es/about/` |

use super::{Alternates, extract_languages};
use crate::log;
use crate::site::{PageId, Site};
use anyhow::Result;
use std::sync::Arc;

/// Preprocess hook: group `id` with its filename siblings.
///
/// Skips pages without a single `lang`, pages already in a group, slugs
/// without a `_<lang>` suffix, and groups of fewer than two pages.
pub fn link_siblings(site: &mut Site, id: PageId) -> Result<()> {
    let Some(page) = site.page(id) else {
        return Ok(());
    };
    let (Some(lang), None, Some(parent)) = (page.lang(), &page.alternates, page.parent) else {
        return Ok(());
    };
    let Some(base_slug) = strip_lang_suffix(&page.source.slug, lang) else {
        return Ok(());
    };
    let base_path = format!("/{base_slug}");
    let group_name = format!("{}{base_path}", page.source.dir().trim_end_matches('/'));

    let mut group = Alternates::new();
    let siblings = site
        .collection(parent)
        .map(|collection| collection.pages.as_slice())
        .unwrap_or_default();
    for &sibling_id in siblings {
        let Some(sibling) = site.page(sibling_id) else {
            continue;
        };
        let (Some(sibling_lang), None) = (sibling.lang(), &sibling.alternates) else {
            continue;
        };
        let slug = sibling.source.slug.as_str();
        let sibling_base = strip_lang_suffix(slug, sibling_lang).unwrap_or(slug);
        if sibling_base == base_slug || sibling.source.path.ends_with(&base_path) {
            group.insert(sibling_lang, sibling_id);
        }
    }

    if group.len() < 2 {
        return Ok(());
    }

    let languages: Vec<String> = group.languages().map(str::to_owned).collect();
    for (lang, sibling_id) in group.iter() {
        let Some(sibling) = site.page(sibling_id) else {
            continue;
        };
        let original_url = sibling.url.clone();
        let Some((_, fragment)) = extract_languages(&languages, sibling, Some(lang)).pop() else {
            continue;
        };

        if let Some(sibling) = site.page_mut(sibling_id) {
            sibling.data = fragment.data;
        }
        let url = if fragment.custom_url {
            site.resolve_url(sibling_id, &original_url)?
        } else {
            rewrite_url(&original_url, lang)
        };
        if let Some(sibling) = site.page_mut(sibling_id) {
            sibling.url = url;
        }
    }

    let group = group.sorted().freeze();
    for sibling_id in group.pages() {
        if let Some(sibling) = site.page_mut(sibling_id) {
            sibling.alternates = Some(Arc::clone(&group));
        }
    }

    let languages: Vec<&str> = group.languages().collect();
    log!("multilang"; "linked {group_name} as {}", languages.join(", "));
    Ok(())
}

/// `about_gl` with `gl` → `about`. `None` when the suffix is absent.
pub fn strip_lang_suffix<'s>(slug: &'s str, lang: &str) -> Option<&'s str> {
    slug.strip_suffix(lang)?.strip_suffix('_')
}

/// Move the language marker from the end of a URL to a leading segment.
///
/// | URL | lang | Result |
/// |-----|------|--------|
/// | `/docs/index_de/` | `de` | `/de/docs/` |
/// | `/about_gl/` | `gl` | `/gl/about/` |
/// | `/blog/post_fr.html` | `fr` | `/fr/blog/post.html` |
/// | `/contact/` | `es` | `/contact/` |
pub fn rewrite_url(url: &str, lang: &str) -> String {
    if let Some(dir) = url.strip_suffix(&format!("/index_{lang}/")) {
        return format!("/{lang}{dir}/");
    }
    if let Some(stem) = url.strip_suffix(&format!("_{lang}/")) {
        return format!("/{lang}{stem}/");
    }
    if let Some(stem) = url.strip_suffix(&format!("_{lang}.html")) {
        return format!("/{lang}{stem}.html");
    }
    url.to_owned()
}
