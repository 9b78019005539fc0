//! Rendering seam between preprocessing and processing.

use super::Page;
use anyhow::Result;
use serde_json::Value;

/// Turns a preprocessed page into markup.
pub trait Renderer {
    fn render(&self, page: &Page) -> Result<String>;
}

/// Renders the page's `content` field verbatim.
///
/// Pages without a string `content` render to an empty document.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentRenderer;

impl Renderer for ContentRenderer {
    fn render(&self, page: &Page) -> Result<String> {
        Ok(match page.data.get("content") {
            Some(Value::String(content)) => content.clone(),
            _ => String::new(),
        })
    }
}
