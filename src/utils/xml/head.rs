use anyhow::Result;
use quick_xml::events::{BytesEnd, Event};

use super::common::{XmlWriter, write_empty_elem};

/// A translation of the current page, advertised in `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    pub lang: String,
    pub href: String,
}

/// Write alternate links, then the closing `</head>` tag as it was read.
pub fn write_head_content(
    writer: &mut XmlWriter,
    alternates: &[AlternateLink],
    end: BytesEnd<'_>,
) -> Result<()> {
    for link in alternates {
        write_empty_elem(
            writer,
            "link",
            &[
                ("rel", "alternate"),
                ("hreflang", &link.lang),
                ("href", &link.href),
            ],
        )?;
    }

    writer.write_event(Event::End(end))?;
    Ok(())
}
