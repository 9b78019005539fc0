//! Shared registry of the pages in one language group.

use crate::site::PageId;
use std::sync::Arc;

/// Language code → page, for one language group.
///
/// Built once while splitting or linking, then frozen behind an [`Arc`] that
/// every member of the group holds. Iteration follows insertion order unless
/// [`Alternates::sorted`] was applied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Alternates {
    entries: Vec<(String, PageId)>,
}

impl Alternates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `page` for `lang`. A later page for the same language
    /// replaces the earlier one in place.
    pub fn insert(&mut self, lang: impl Into<String>, page: PageId) {
        let lang = lang.into();
        match self.entries.iter_mut().find(|(l, _)| *l == lang) {
            Some(entry) => entry.1 = page,
            None => self.entries.push((lang, page)),
        }
    }

    pub fn get(&self, lang: &str) -> Option<PageId> {
        self.entries
            .iter()
            .find_map(|(l, page)| (l == lang).then_some(*page))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PageId)> {
        self.entries.iter().map(|(lang, page)| (lang.as_str(), *page))
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(lang, _)| lang.as_str())
    }

    pub fn pages(&self) -> impl Iterator<Item = PageId> {
        self.entries.iter().map(|(_, page)| *page)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Order entries by language code (codepoint order).
    pub fn sorted(mut self) -> Self {
        self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        self
    }

    pub fn freeze(self) -> Arc<Self> {
        Arc::new(self)
    }
}
