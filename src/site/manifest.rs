//! JSON manifest describing an already-loaded content tree.
//!
//! ```json
//! {
//!   "pages": [
//!     { "path": "/about", "url": "/about/", "data": { "lang": ["en", "gl"] } },
//!     {
//!       "path": "/blog/post_fr",
//!       "ext": ".md",
//!       "url": "/blog/post_fr.html",
//!       "data": { "lang": "fr" }
//!     }
//!   ]
//! }
//! ```

use super::{Data, Page, Site, Source};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub pages: Vec<ManifestPage>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestPage {
    /// Source path without extension
    pub path: String,
    #[serde(default = "default_ext")]
    pub ext: String,
    pub url: String,
    #[serde(default)]
    pub data: Data,
}

fn default_ext() -> String {
    ".md".into()
}

impl Manifest {
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest `{}`", path.display()))?;
        Self::from_str(&content).with_context(|| format!("invalid manifest `{}`", path.display()))
    }

    /// Load every page, in manifest order, into a fresh site.
    pub fn into_site(self) -> Site {
        let mut site = Site::new();
        for entry in self.pages {
            site.add_page(Page::new(Source::new(entry.path, entry.ext), entry.url, entry.data));
        }
        site
    }
}
