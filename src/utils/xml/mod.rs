//! XML/HTML processing utilities.

pub mod common;
pub mod head;
pub mod processor;

pub use head::AlternateLink;
pub use processor::{Annotated, annotate_html};
