//! Content units and their rendered documents.

use crate::multilang::Alternates;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Page data: insertion-ordered map of author fields.
pub type Data = Map<String, Value>;

/// Index of a page slot in the [`Site`](super::Site) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub(crate) usize);

/// Index of a collection (one per source directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionId(pub(crate) usize);

/// Where a page was loaded from.
///
/// | Field | Example |
/// |-------|---------|
/// | `path` | `/blog/post_fr` (no extension) |
/// | `slug` | `post_fr` |
/// | `ext`  | `.md` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: String,
    pub slug: String,
    pub ext: String,
}

impl Source {
    pub fn new(path: impl Into<String>, ext: impl Into<String>) -> Self {
        let path = path.into();
        let slug = path.rsplit_once('/').map_or(path.as_str(), |(_, slug)| slug).to_owned();
        Self {
            path,
            slug,
            ext: ext.into(),
        }
    }

    /// Directory part of `path`, used as the collection key.
    pub fn dir(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some(("", _)) | None => "/",
            Some((dir, _)) => dir,
        }
    }
}

/// Rendered markup of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// A single page of the site.
#[derive(Debug, Clone)]
pub struct Page {
    pub source: Source,
    /// Output URL (e.g., "/gl/about/")
    pub url: String,
    pub data: Data,
    /// Collection this page was loaded alongside
    pub parent: Option<CollectionId>,
    /// Discriminator given by [`Site::duplicate`](super::Site::duplicate)
    pub variant: Option<String>,
    /// Language group, shared by every member of the group
    pub alternates: Option<Arc<Alternates>>,
    /// Present only after rendering
    pub document: Option<Document>,
}

impl Page {
    pub fn new(source: Source, url: impl Into<String>, data: Data) -> Self {
        Self {
            source,
            url: url.into(),
            data,
            parent: None,
            variant: None,
            alternates: None,
            document: None,
        }
    }

    /// The `lang` field when it is a single language code.
    pub fn lang(&self) -> Option<&str> {
        self.data.get("lang").and_then(Value::as_str)
    }

    /// Extension of the output file.
    ///
    /// Directory URLs (`/about/`) are written as `index.html`.
    pub fn output_extension(&self) -> &str {
        if self.url.ends_with('/') {
            return ".html";
        }
        let file = self.url.rsplit_once('/').map_or(self.url.as_str(), |(_, file)| file);
        file.rfind('.').map_or("", |dot| &file[dot..])
    }

    /// Whether the page is selected by a hook's extension list.
    pub fn matches_extensions(&self, extensions: &[String]) -> bool {
        let ext = self.output_extension();
        extensions.iter().any(|e| e == "*" || e == ext)
    }

    /// Human-readable identifier for logs and errors.
    pub fn display_path(&self) -> String {
        match &self.variant {
            Some(variant) => format!("{}{}[{variant}]", self.source.path, self.source.ext),
            None => format!("{}{}", self.source.path, self.source.ext),
        }
    }
}
