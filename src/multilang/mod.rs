//! Multilanguage pages.
//!
//! # Pipeline
//!
//! ```text
//! preprocess [extensions]  expand_page     lang: [en, gl]  → one page per language
//! preprocess [*]           link_siblings   about.md + about_gl.md → one group
//! render
//! process [extensions]     inject_alternates  <html lang> + <link rel="alternate">
//! ```
//!
//! Pages of one language group share a single [`Alternates`] through an
//! `Arc`. Groups from a `lang` list keep the declared language order;
//! groups found by filename are sorted by language code.

mod alternates;
mod expand;
mod extract;
mod filter;
mod inject;
mod merge;
mod siblings;

pub use alternates::Alternates;
pub use expand::expand_page;
pub use extract::{Fragments, TranslatedFragment, extract_languages, language_list};
pub use filter::filter_language;
pub use inject::inject_alternates;
pub use merge::{MERGE_LANGUAGES, merge_languages, merge_languages_helper};
pub use siblings::{link_siblings, rewrite_url, strip_lang_suffix};

use crate::config::MultilangConfig;
use crate::site::Site;

/// The multilanguage plugin, configured from `[multilang]`.
#[derive(Debug, Clone)]
pub struct Multilanguage {
    extensions: Vec<String>,
}

impl Multilanguage {
    pub fn new(config: &MultilangConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
        }
    }

    /// Register the helper and hooks on `site`.
    pub fn install(&self, site: &mut Site) {
        site.register_helper(MERGE_LANGUAGES, merge_languages_helper);
        site.preprocess(&self.extensions, expand_page);
        site.preprocess(["*"], link_siblings);
        site.process(&self.extensions, inject_alternates);
    }
}
