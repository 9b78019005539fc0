use anyhow::Result;
use quick_xml::{
    Reader, Writer,
    events::{BytesStart, Event},
};
use std::io::Cursor;

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

#[inline]
pub fn create_xml_reader(content: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader.config_mut().allow_unmatched_ends = true;
    reader
}

/// Rebuild an element keeping only the attributes `keep` accepts.
///
/// Attributes are read with HTML rules; unquoted values come back quoted and
/// bare attributes get an empty value.
pub fn retain_attrs<F>(elem: &BytesStart<'_>, mut keep: F) -> BytesStart<'static>
where
    F: FnMut(&[u8]) -> bool,
{
    let tag = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    let mut new_elem = BytesStart::new(tag);
    for attr in elem.html_attributes().flatten() {
        if keep(attr.key.as_ref()) {
            new_elem.push_attribute((attr.key.as_ref(), attr.value.as_ref()));
        }
    }
    new_elem
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}
