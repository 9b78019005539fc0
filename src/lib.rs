//! Multilanguage pages for static site pipelines.
//!
//! Splits pages that declare several languages into one page per language,
//! links translations found by filename (`about.md`, `about_gl.md`), and
//! advertises every translation in the rendered `<head>`.
//!
//! ```ignore
//! let mut site = Manifest::from_path(path)?.into_site();
//! Multilanguage::new(&config.multilang).install(&mut site);
//! site.build(&ContentRenderer)?;
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod multilang;
pub mod site;
pub mod utils;
