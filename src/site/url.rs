//! Custom URL resolution for language variants.

use super::Page;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while resolving an authored `url` field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("page `{0}` declares no `url`")]
    Missing(String),

    #[error("`url` of page `{0}` is not a string")]
    NotString(String),

    #[error("`url` of page `{0}` is empty")]
    Empty(String),

    #[error("`url` `{url}` of page `{page}` escapes the site root")]
    Escapes { page: String, url: String },
}

/// Turns a page's authored URL into its final output URL.
pub trait UrlResolver {
    /// `original_url` is the URL the page had before it was split or relinked.
    fn resolve(&self, page: &Page, original_url: &str) -> Result<String, UrlError>;
}

/// Resolves the page's `url` data field.
///
/// - `/docs/intro/` is used as-is
/// - `./intro/` and `../intro/` are relative to the directory of the original URL
/// - bare `intro/` is treated like `./intro/`
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUrlResolver;

impl UrlResolver for DataUrlResolver {
    fn resolve(&self, page: &Page, original_url: &str) -> Result<String, UrlError> {
        let url = match page.data.get("url") {
            None | Some(Value::Null) => return Err(UrlError::Missing(page.display_path())),
            Some(Value::String(url)) => url.trim(),
            Some(_) => return Err(UrlError::NotString(page.display_path())),
        };

        if url.is_empty() {
            return Err(UrlError::Empty(page.display_path()));
        }
        if url.starts_with('/') {
            return Ok(url.to_owned());
        }

        join_relative(url_dir(original_url), url).ok_or_else(|| UrlError::Escapes {
            page: page.display_path(),
            url: url.to_owned(),
        })
    }
}

/// Directory part of a URL: `/blog/post.html` → `/blog/`, `/blog/` → `/blog/`.
fn url_dir(url: &str) -> &str {
    url.rfind('/').map_or("/", |slash| &url[..=slash])
}

/// Join a relative URL onto a directory, folding `.` and `..` segments.
///
/// Returns `None` when `..` climbs above the root.
fn join_relative(dir: &str, relative: &str) -> Option<String> {
    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();

    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            segment => segments.push(segment),
        }
    }

    let mut url = format!("/{}", segments.join("/"));
    if relative.ends_with('/') && !url.ends_with('/') {
        url.push('/');
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{Data, Source};
    use serde_json::json;

    fn page_with_url(url: Value) -> Page {
        let mut data = Data::new();
        data.insert("url".into(), url);
        Page::new(Source::new("/docs/intro", ".md"), "/docs/intro/", data)
    }

    #[test]
    fn test_absolute_url_is_kept() {
        let page = page_with_url(json!("/gl/introducion/"));
        let url = DataUrlResolver.resolve(&page, "/docs/intro/").unwrap();
        assert_eq!(url, "/gl/introducion/");
    }

    #[test]
    fn test_relative_url_uses_original_directory() {
        let page = page_with_url(json!("./introducion/"));
        let url = DataUrlResolver.resolve(&page, "/docs/intro.html").unwrap();
        assert_eq!(url, "/docs/introducion/");

        let page = page_with_url(json!("../gl/intro.html"));
        let url = DataUrlResolver.resolve(&page, "/docs/intro/").unwrap();
        assert_eq!(url, "/docs/gl/intro.html");
    }

    #[test]
    fn test_bare_url_is_relative() {
        let page = page_with_url(json!("acerca/"));
        let url = DataUrlResolver.resolve(&page, "/about.html").unwrap();
        assert_eq!(url, "/acerca/");
    }

    #[test]
    fn test_url_errors() {
        let mut page = page_with_url(json!(3));
        assert_eq!(
            DataUrlResolver.resolve(&page, "/"),
            Err(UrlError::NotString("/docs/intro.md".into()))
        );

        page.data.remove("url");
        assert_eq!(
            DataUrlResolver.resolve(&page, "/"),
            Err(UrlError::Missing("/docs/intro.md".into()))
        );

        let page = page_with_url(json!("  "));
        assert!(matches!(
            DataUrlResolver.resolve(&page, "/"),
            Err(UrlError::Empty(_))
        ));

        let page = page_with_url(json!("../../x/"));
        assert!(matches!(
            DataUrlResolver.resolve(&page, "/docs/"),
            Err(UrlError::Escapes { .. })
        ));
    }
}
