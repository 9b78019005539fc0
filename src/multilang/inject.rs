//! Advertise translations in rendered documents.
//!
//! For every page with a language group, the document gets
//! `<html lang="…">` (unless already set) and one
//! `<link rel="alternate" hreflang="…" href="…">` per other language, in
//! the order of the group's alternates.
//!
//! Running twice over the same document leaves `lang` alone but appends the
//! links again.

use crate::log;
use crate::site::{Document, PageId, Site};
use crate::utils::xml::{AlternateLink, annotate_html};
use anyhow::Result;

/// Process hook: annotate the rendered document of `id`.
pub fn inject_alternates(site: &mut Site, id: PageId) -> Result<()> {
    let Some(page) = site.page(id) else {
        return Ok(());
    };
    let (Some(document), Some(alternates), Some(lang)) =
        (&page.document, &page.alternates, page.lang())
    else {
        return Ok(());
    };

    let links: Vec<AlternateLink> = alternates
        .iter()
        .filter(|(alt_lang, _)| *alt_lang != lang)
        .filter_map(|(alt_lang, alt_id)| {
            site.page(alt_id).map(|alt| AlternateLink {
                lang: alt_lang.to_owned(),
                href: alt.url.clone(),
            })
        })
        .collect();

    let annotated = annotate_html(document.as_bytes(), lang, &links)?;
    if !annotated.head_found && !links.is_empty() {
        log!("multilang"; "no <head> in {}, alternate links skipped", page.display_path());
    }

    let html = String::from_utf8(annotated.html)?;
    if let Some(page) = site.page_mut(id) {
        page.document = Some(Document::new(html));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multilang::Alternates;
    use crate::site::{Data, Page, Source};
    use serde_json::json;

    const HTML: &str = "<html><head><title>t</title></head><body></body></html>";

    fn page(path: &str, url: &str, lang: Option<&str>) -> Page {
        let mut data = Data::new();
        if let Some(lang) = lang {
            data.insert("lang".into(), json!(lang));
        }
        let mut page = Page::new(Source::new(path, ".md"), url, data);
        page.document = Some(Document::new(HTML));
        page
    }

    /// Pages sharing one alternates map in the given order.
    fn group(order: &[&str]) -> (Site, Vec<PageId>) {
        let mut site = Site::new();
        let ids: Vec<_> = order
            .iter()
            .map(|&lang| {
                let url = format!("/{lang}/about/");
                site.add_page(page(&format!("/about_{lang}"), &url, Some(lang)))
            })
            .collect();

        let mut alternates = Alternates::new();
        for (lang, &id) in order.iter().zip(&ids) {
            alternates.insert(*lang, id);
        }
        let alternates = alternates.freeze();
        for &id in &ids {
            site.page_mut(id).unwrap().alternates = Some(alternates.clone());
        }
        (site, ids)
    }

    fn html(site: &Site, id: PageId) -> &str {
        site.page(id).unwrap().document.as_ref().unwrap().as_str()
    }

    #[test]
    fn test_links_every_other_language_in_map_order() {
        let (mut site, ids) = group(&["gl", "en", "es"]);
        inject_alternates(&mut site, ids[1]).unwrap();

        assert_eq!(
            html(&site, ids[1]),
            concat!(
                r#"<html lang="en"><head><title>t</title>"#,
                r#"<link rel="alternate" hreflang="gl" href="/gl/about/"/>"#,
                r#"<link rel="alternate" hreflang="es" href="/es/about/"/>"#,
                "</head><body></body></html>",
            )
        );
    }

    #[test]
    fn test_second_run_keeps_lang_but_repeats_links() {
        let (mut site, ids) = group(&["en", "gl"]);
        inject_alternates(&mut site, ids[0]).unwrap();
        let once = html(&site, ids[0]).to_owned();
        assert_eq!(once.matches("hreflang=").count(), 1);

        inject_alternates(&mut site, ids[0]).unwrap();
        let twice = html(&site, ids[0]);
        assert_eq!(twice.matches("lang=\"en\"").count(), 1);
        assert_eq!(twice.matches("hreflang=").count(), 2);
    }

    #[test]
    fn test_noop_without_group_document_or_lang() {
        let mut site = Site::new();
        let lone = site.add_page(page("/about", "/about/", Some("en")));
        inject_alternates(&mut site, lone).unwrap();
        assert_eq!(html(&site, lone), HTML);

        let (mut site, ids) = group(&["en", "gl"]);
        site.page_mut(ids[0]).unwrap().document = None;
        inject_alternates(&mut site, ids[0]).unwrap();
        assert!(site.page(ids[0]).unwrap().document.is_none());

        site.page_mut(ids[1]).unwrap().data.insert("lang".into(), json!(["gl"]));
        inject_alternates(&mut site, ids[1]).unwrap();
        assert_eq!(html(&site, ids[1]), HTML);
    }

    #[test]
    fn test_unreadable_markup_is_kept() {
        let (mut site, ids) = group(&["en", "gl"]);
        site.page_mut(ids[0]).unwrap().document = Some(Document::new("<html><head><!-- x"));
        inject_alternates(&mut site, ids[0]).unwrap();
        assert_eq!(html(&site, ids[0]), r#"<html lang="en"><head><!-- x"#);
    }

    #[test]
    fn test_html5_document() {
        let (mut site, ids) = group(&["en", "gl"]);
        let document = "<!DOCTYPE html><HTML lang=en-GB class=dark><HEAD></HEAD><body><br></body>";
        site.page_mut(ids[0]).unwrap().document = Some(Document::new(document));
        inject_alternates(&mut site, ids[0]).unwrap();

        assert_eq!(
            html(&site, ids[0]),
            concat!(
                "<!DOCTYPE html><HTML lang=en-GB class=dark><HEAD>",
                r#"<link rel="alternate" hreflang="gl" href="/gl/about/"/>"#,
                "</HEAD><body><br></body>",
            )
        );
    }
}
