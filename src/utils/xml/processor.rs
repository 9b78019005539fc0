use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};
use std::io::Cursor;

use super::common::{XmlWriter, create_xml_reader, retain_attrs};
use super::head::{AlternateLink, write_head_content};

/// Output of [`annotate_html`].
#[derive(Debug)]
pub struct Annotated {
    pub html: Vec<u8>,
    /// Whether a `</head>` was found to receive the links
    pub head_found: bool,
}

/// Stream `content` through, setting `<html lang>` when missing and adding
/// one `<link rel="alternate">` per entry of `alternates` before `</head>`.
///
/// Tag names match case-insensitively. Everything after the first `</head>`
/// is copied byte for byte, as is everything from the first construct the
/// reader rejects.
pub fn annotate_html(
    content: &[u8],
    lang: &str,
    alternates: &[AlternateLink],
) -> Result<Annotated> {
    let mut writer = Writer::new(Cursor::new(Vec::with_capacity(content.len())));
    let mut reader = create_xml_reader(content);
    let mut head_found = false;

    let rest = loop {
        let start = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(elem)) if is_tag(elem.name().as_ref(), b"html") => {
                write_html_with_lang(&elem, &mut writer, lang)?;
            }
            Ok(Event::End(elem)) if is_tag(elem.name().as_ref(), b"head") => {
                write_head_content(&mut writer, alternates, elem)?;
                head_found = true;
                break reader.buffer_position() as usize;
            }
            Ok(Event::Eof) => break content.len(),
            Ok(event) => writer.write_event(event)?,
            Err(_) => break start,
        }
    };

    let mut html = writer.into_inner().into_inner();
    html.extend_from_slice(&content[rest.min(content.len())..]);
    Ok(Annotated { html, head_found })
}

#[inline]
fn is_tag(name: &[u8], tag: &[u8]) -> bool {
    name.eq_ignore_ascii_case(tag)
}

fn is_lang(key: &[u8]) -> bool {
    key.eq_ignore_ascii_case(b"lang")
}

/// Write `<html>` element, adding `lang` unless a non-empty one is present.
///
/// Attributes are read with HTML rules, so `lang=en` and bare `hidden`
/// count. The tag is only rebuilt when an empty `lang` has to be replaced.
pub fn write_html_with_lang(
    elem: &BytesStart<'_>,
    writer: &mut XmlWriter,
    lang: &str,
) -> Result<()> {
    let current = elem
        .html_attributes()
        .flatten()
        .find(|attr| is_lang(attr.key.as_ref()))
        .map(|attr| !attr.value.trim_ascii().is_empty());

    let elem = match current {
        Some(true) => elem.borrow(),
        Some(false) => {
            let mut elem = retain_attrs(elem, |key| !is_lang(key));
            elem.push_attribute(("lang", lang));
            elem
        }
        None => {
            let mut elem = elem.borrow();
            elem.push_attribute(("lang", lang));
            elem
        }
    };
    writer.write_event(Event::Start(elem))?;
    Ok(())
}
