//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── Manifest::from_path() ──► Site
//!     ├── Multilanguage::install()
//!     └── Site::build()
//!             ├── preprocess: expand_page, link_siblings
//!             ├── render: ContentRenderer
//!             └── process: inject_alternates
//! ```

use crate::{
    config::SiteConfig,
    multilang::Multilanguage,
    site::{ContentRenderer, Manifest, Page, Site},
};
use anyhow::Result;
use std::path::Path;

/// Load a manifest and run every build phase over it.
pub fn build_site(manifest: &Path, config: &SiteConfig) -> Result<Site> {
    let mut site = Manifest::from_path(manifest)?.into_site();
    Multilanguage::new(&config.multilang).install(&mut site);
    site.build(&ContentRenderer)?;
    Ok(site)
}

/// One log line per page: `url [lang] alt=url ...`.
pub fn page_summary(site: &Site, page: &Page) -> String {
    let lang = page.lang().unwrap_or("-");
    let alternates = page
        .alternates
        .iter()
        .flat_map(|alternates| alternates.iter())
        .filter(|(alt_lang, _)| *alt_lang != lang)
        .filter_map(|(alt_lang, id)| site.page(id).map(|alt| format!("{alt_lang}={}", alt.url)))
        .collect::<Vec<_>>()
        .join(" ");

    if alternates.is_empty() {
        format!("{} [{lang}]", page.url)
    } else {
        format!("{} [{lang}] {alternates}", page.url)
    }
}
