//! Split pages that declare a list of languages.
//!
//! ```text
//! about.md  { lang: [en, gl], title.en: "About", title.gl: "Acerca" }  url /about/
//!     ▼
//! about.md[en]  { lang: en, title: "About" }   url /en/about/  ─┐
//! about.md[gl]  { lang: gl, title: "Acerca" }  url /gl/about/  ─┴─ one shared Alternates
//! ```

use super::{Alternates, extract_languages, language_list};
use crate::log;
use crate::site::{Page, PageId, Site};
use anyhow::{Result, anyhow};
use serde_json::Value;
use std::sync::Arc;

/// Preprocess hook: replace a page whose `lang` is a list with one page per
/// language, at the same position in the tree.
///
/// Pages without a `lang` list are left untouched.
pub fn expand_page(site: &mut Site, id: PageId) -> Result<()> {
    let Some(page) = site.page(id) else {
        return Ok(());
    };
    let Some(languages) = language_list(page) else {
        return Ok(());
    };

    let fragments = extract_languages(&languages, page, None);
    let original_url = page.url.clone();
    let display_path = page.display_path();

    let mut alternates = Alternates::new();
    let mut variants = Vec::with_capacity(fragments.len());

    for (lang, fragment) in fragments {
        let variant = site.duplicate(id, &lang)?;
        {
            let page = page_mut(site, variant)?;
            page.data = fragment.data;
            page.data.insert("lang".into(), Value::String(lang.clone()));
        }

        let url = if fragment.custom_url {
            site.resolve_url(variant, &original_url)?
        } else {
            format!("/{lang}{original_url}")
        };
        page_mut(site, variant)?.url = url;

        alternates.insert(lang, variant);
        variants.push(variant);
    }

    // Declared order is kept; only filename siblings get sorted
    let alternates = alternates.freeze();
    for &variant in &variants {
        page_mut(site, variant)?.alternates = Some(Arc::clone(&alternates));
    }

    site.splice(id, &variants)?;
    let languages: Vec<&str> = alternates.languages().collect();
    log!("multilang"; "split {display_path} into {}", languages.join(", "));
    Ok(())
}

fn page_mut(site: &mut Site, id: PageId) -> Result<&mut Page> {
    site.page_mut(id)
        .ok_or_else(|| anyhow!("page {id:?} vanished while splitting"))
}
