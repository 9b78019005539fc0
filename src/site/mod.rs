//! In-memory content tree and build phases.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            Site::build                           │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  Preprocess          Render                 Process              │
//! │  ┌─────────────┐     ┌────────────────┐     ┌────────────────┐   │
//! │  │ hooks mutate│ ──► │ Renderer turns │ ──► │ hooks annotate │   │
//! │  │ data / tree │     │ pages to HTML  │     │ documents      │   │
//! │  └─────────────┘     └────────────────┘     └────────────────┘   │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pages live in an arena addressed by [`PageId`]. Each page belongs to one
//! collection (its source directory); the site also keeps the global page
//! order. Splitting a page splices its replacements into both, at the
//! position of the original.

mod manifest;
mod page;
mod render;
mod url;

pub use manifest::Manifest;
pub use page::{CollectionId, Data, Document, Page, PageId, Source};
pub use render::{ContentRenderer, Renderer};
pub use url::{DataUrlResolver, UrlError, UrlResolver};

use anyhow::{Result, anyhow};
use serde_json::Value;
use std::{collections::BTreeMap, rc::Rc};

/// A preprocess or process hook.
pub type HookFn = dyn Fn(&mut Site, PageId) -> Result<()>;

/// A data helper exposed to templates.
pub type Helper = fn(&Value) -> Value;

#[derive(Clone)]
struct Hook {
    extensions: Vec<String>,
    run: Rc<HookFn>,
}

/// Pages loaded from the same directory.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub path: String,
    pub pages: Vec<PageId>,
}

pub struct Site {
    /// Removed pages leave an empty slot so ids stay stable
    pages: Vec<Option<Page>>,
    collections: Vec<Collection>,
    order: Vec<PageId>,
    preprocessors: Vec<Hook>,
    processors: Vec<Hook>,
    helpers: BTreeMap<String, Helper>,
    url_resolver: Box<dyn UrlResolver>,
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

impl Site {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            collections: Vec::new(),
            order: Vec::new(),
            preprocessors: Vec::new(),
            processors: Vec::new(),
            helpers: BTreeMap::new(),
            url_resolver: Box::new(DataUrlResolver),
        }
    }

    /// Replace the resolver used for custom language URLs.
    pub fn with_url_resolver(mut self, resolver: impl UrlResolver + 'static) -> Self {
        self.url_resolver = Box::new(resolver);
        self
    }

    // ------------------------------------------------------------------------
    // Tree
    // ------------------------------------------------------------------------

    /// Add a page to the collection of its source directory.
    pub fn add_page(&mut self, mut page: Page) -> PageId {
        let collection = self.collection_for(page.source.dir());
        let id = PageId(self.pages.len());

        page.parent = Some(collection);
        self.pages.push(Some(page));
        self.collections[collection.0].pages.push(id);
        self.order.push(id);
        id
    }

    fn collection_for(&mut self, path: &str) -> CollectionId {
        if let Some(index) = self.collections.iter().position(|c| c.path == path) {
            return CollectionId(index);
        }
        self.collections.push(Collection {
            path: path.to_owned(),
            pages: Vec::new(),
        });
        CollectionId(self.collections.len() - 1)
    }

    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id.0).and_then(Option::as_ref)
    }

    pub fn page_mut(&mut self, id: PageId) -> Option<&mut Page> {
        self.pages.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Pages in site order.
    pub fn pages(&self) -> impl Iterator<Item = (PageId, &Page)> {
        self.order
            .iter()
            .filter_map(|&id| self.page(id).map(|page| (id, page)))
    }

    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.get(id.0)
    }

    /// Copy a page into a new, unattached slot.
    ///
    /// The copy keeps source, URL, data and parent; it has no alternates and
    /// no document. Attach it with [`Site::splice`].
    pub fn duplicate(&mut self, id: PageId, discriminator: &str) -> Result<PageId> {
        let page = self
            .page(id)
            .ok_or_else(|| anyhow!("cannot duplicate missing page {id:?}"))?;

        let copy = Page {
            variant: Some(discriminator.to_owned()),
            alternates: None,
            document: None,
            ..page.clone()
        };
        self.pages.push(Some(copy));
        Ok(PageId(self.pages.len() - 1))
    }

    /// Replace `id` with `replacement`, at the same position, in both its
    /// collection and the site order. The original page is removed.
    pub fn splice(&mut self, id: PageId, replacement: &[PageId]) -> Result<()> {
        let parent = self
            .page(id)
            .ok_or_else(|| anyhow!("cannot splice missing page {id:?}"))?
            .parent;

        replace_in(&mut self.order, id, replacement);
        if let Some(parent) = parent
            && let Some(collection) = self.collections.get_mut(parent.0)
        {
            replace_in(&mut collection.pages, id, replacement);
        }
        for &new_id in replacement {
            if let Some(page) = self.page_mut(new_id) {
                page.parent = parent;
            }
        }

        self.pages[id.0] = None;
        Ok(())
    }

    /// Resolve the custom URL of a page.
    pub fn resolve_url(&self, id: PageId, original_url: &str) -> Result<String> {
        let page = self
            .page(id)
            .ok_or_else(|| anyhow!("cannot resolve url of missing page {id:?}"))?;
        Ok(self.url_resolver.resolve(page, original_url)?)
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    pub fn register_helper(&mut self, name: impl Into<String>, helper: Helper) {
        self.helpers.insert(name.into(), helper);
    }

    pub fn helper(&self, name: &str) -> Option<Helper> {
        self.helpers.get(name).copied()
    }

    // ------------------------------------------------------------------------
    // Phases
    // ------------------------------------------------------------------------

    /// Register a hook that runs before rendering.
    pub fn preprocess<F, E>(&mut self, extensions: E, hook: F)
    where
        E: IntoIterator<Item: Into<String>>,
        F: Fn(&mut Site, PageId) -> Result<()> + 'static,
    {
        self.preprocessors.push(Hook {
            extensions: extensions.into_iter().map(Into::into).collect(),
            run: Rc::new(hook),
        });
    }

    /// Register a hook that runs after rendering.
    pub fn process<F, E>(&mut self, extensions: E, hook: F)
    where
        E: IntoIterator<Item: Into<String>>,
        F: Fn(&mut Site, PageId) -> Result<()> + 'static,
    {
        self.processors.push(Hook {
            extensions: extensions.into_iter().map(Into::into).collect(),
            run: Rc::new(hook),
        });
    }

    /// Run every phase in order.
    pub fn build(&mut self, renderer: &dyn Renderer) -> Result<()> {
        self.run_preprocessors()?;
        self.render(renderer)?;
        self.run_processors()
    }

    pub fn run_preprocessors(&mut self) -> Result<()> {
        for hook in self.preprocessors.clone() {
            self.run_hook(&hook)?;
        }
        Ok(())
    }

    pub fn render(&mut self, renderer: &dyn Renderer) -> Result<()> {
        for id in self.order.clone() {
            let Some(page) = self.page(id) else { continue };
            let html = renderer.render(page)?;
            if let Some(page) = self.page_mut(id) {
                page.document = Some(Document::new(html));
            }
        }
        Ok(())
    }

    pub fn run_processors(&mut self) -> Result<()> {
        for hook in self.processors.clone() {
            self.run_hook(&hook)?;
        }
        Ok(())
    }

    /// Run one hook over the pages matching it when it starts.
    ///
    /// Pages added during the run are not visited; pages removed during the
    /// run are skipped.
    fn run_hook(&mut self, hook: &Hook) -> Result<()> {
        let targets: Vec<PageId> = self
            .pages()
            .filter(|(_, page)| page.matches_extensions(&hook.extensions))
            .map(|(id, _)| id)
            .collect();

        for id in targets {
            if self.page(id).is_some() {
                (hook.run)(self, id)?;
            }
        }
        Ok(())
    }
}

fn replace_in(list: &mut Vec<PageId>, id: PageId, replacement: &[PageId]) {
    if let Some(pos) = list.iter().position(|&p| p == id) {
        list.splice(pos..=pos, replacement.iter().copied());
    }
}
