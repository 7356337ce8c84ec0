//! Building an [`Element`] tree from text with `quick-xml`.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlError;
use crate::node::{Document, Element, Node};
use crate::write::to_xml_string;

/// Parses a UTF-8 byte slice into a [`Document`].
///
/// # Errors
///
/// Returns `XmlError` if the bytes are not UTF-8 or not well-formed XML.
pub fn parse_bytes(input: &[u8]) -> Result<Document, XmlError> {
    parse_str(std::str::from_utf8(input)?)
}

/// Parses a string into a [`Document`].
///
/// Whitespace is preserved exactly; adjacent text and CDATA runs are merged
/// into a single text node.
///
/// # Errors
///
/// Returns `XmlError` if:
/// - The input is not well-formed (mismatched or unclosed tags, bad escapes)
/// - There is no root element, or more than one
/// - Non-whitespace text appears outside the root element
///
/// # Examples
///
/// ```
/// use eidas_xml::parse_str;
///
/// let doc = parse_str("<a><b>x &amp; y</b></a>").unwrap();
/// let b = doc.root().child_elements().next().unwrap();
/// assert_eq!(b.text(), "x & y");
/// ```
pub fn parse_str(input: &str) -> Result<Document, XmlError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let element = open_element(&start)?;
                if stack.is_empty() {
                    ensure_single_root(root.as_ref(), &element)?;
                }
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open_element(&start)?;
                close_element(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                // End names are checked by the reader.
                if let Some(element) = stack.pop() {
                    close_element(element, &mut stack, &mut root)?;
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(cdata) => {
                let raw = cdata.into_inner();
                let text = std::str::from_utf8(&raw)?;
                append_text(&mut stack, text)?;
            }
            Event::DocType(_) => {
                tracing::debug!("ignoring document type declaration");
            }
            Event::Comment(_) | Event::PI(_) | Event::Decl(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::UnexpectedEof {
            open: open.name().to_string(),
        });
    }

    root.map(Document::new).ok_or(XmlError::NoRoot)
}

/// Parses a fragment with no single root as the content of `root`.
///
/// The fragment may hold any number of elements and text runs. `root`
/// supplies the element name and the namespace declarations that the
/// fragment relies on; its existing children are discarded.
///
/// # Errors
///
/// Returns `XmlError` if the fragment is not well-formed inside the
/// synthesized root, including when it closes the root early.
///
/// # Examples
///
/// ```
/// use eidas_xml::{parse_fragment, Element};
///
/// let root = Element::new("wrapper").with_attribute("xmlns:p", "urn:p");
/// let parsed = parse_fragment("<p:a>1</p:a><p:b>2</p:b>", &root).unwrap();
/// assert_eq!(parsed.child_elements().count(), 2);
/// assert_eq!(parsed.attribute("xmlns:p"), Some("urn:p"));
/// ```
pub fn parse_fragment(fragment: &str, root: &Element) -> Result<Element, XmlError> {
    let mut shell = root.clone();
    shell.clear_children();
    let open = to_xml_string(&shell);
    // An element without children serializes as `<name .../>`.
    let open = open.strip_suffix("/>").unwrap_or(&open);

    let mut document = String::with_capacity(open.len() + fragment.len() + root.name().len() + 4);
    document.push_str(open);
    document.push('>');
    document.push_str(fragment);
    document.push_str("</");
    document.push_str(root.name());
    document.push('>');

    Ok(parse_str(&document)?.into_root())
}

fn open_element(start: &BytesStart<'_>) -> Result<Element, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())?.to_string();
    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        element.set_attribute(key, value);
    }
    Ok(element)
}

fn ensure_single_root(root: Option<&Element>, next: &Element) -> Result<(), XmlError> {
    if root.is_some() {
        return Err(XmlError::MultipleRoots {
            name: next.name().to_string(),
        });
    }
    Ok(())
}

fn close_element(
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(parent) => parent.push_element(element),
        None => {
            ensure_single_root(root.as_ref(), &element)?;
            *root = Some(element);
        }
    }
    Ok(())
}

fn append_text(stack: &mut [Element], text: &str) -> Result<(), XmlError> {
    let Some(current) = stack.last_mut() else {
        if text.trim().is_empty() {
            return Ok(());
        }
        return Err(XmlError::TextOutsideRoot);
    };
    if text.is_empty() {
        return Ok(());
    }
    let children = current.children_mut();
    match children.last_mut() {
        Some(Node::Text(previous)) => previous.push_str(text),
        _ => children.push(Node::Text(text.to_string())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_elements() {
        let doc = parse_str("<a x=\"1\"><b/><c>t</c></a>").unwrap();
        let root = doc.root();
        assert_eq!(root.name(), "a");
        assert_eq!(root.attribute("x"), Some("1"));
        let names: Vec<_> = root.child_elements().map(Element::name).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn whitespace_text_preserved() {
        let doc = parse_str("<a>\r\n<b/>\n</a>").unwrap();
        assert_eq!(doc.root().children().len(), 3);
        assert_eq!(doc.root().children()[0].as_text(), Some("\r\n"));
    }

    #[test]
    fn escaped_attribute_values() {
        let doc = parse_str(r#"<a v="&lt;&quot;&gt;"/>"#).unwrap();
        assert_eq!(doc.root().attribute("v"), Some("<\">"));
    }

    #[test]
    fn cdata_merges_with_text() {
        let doc = parse_str("<a>x<![CDATA[<y>]]>z</a>").unwrap();
        assert_eq!(doc.root().children().len(), 1);
        assert_eq!(doc.root().text(), "x<y>z");
    }

    #[test]
    fn declaration_and_comments_dropped() {
        let doc = parse_str("<?xml version=\"1.0\"?><!-- c --><a><!-- d --></a>").unwrap();
        assert!(doc.root().children().is_empty());
    }

    #[test]
    fn mismatched_end_fails() {
        assert!(matches!(parse_str("<a><b></a>"), Err(XmlError::Syntax(_))));
    }

    #[test]
    fn unclosed_element_fails() {
        assert!(matches!(
            parse_str("<a><b>"),
            Err(XmlError::UnexpectedEof { .. }) | Err(XmlError::Syntax(_))
        ));
    }

    #[test]
    fn fragment_without_root_fails() {
        assert!(matches!(
            parse_str("<a/><b/>"),
            Err(XmlError::MultipleRoots { .. })
        ));
    }

    #[test]
    fn text_outside_root_fails() {
        assert!(matches!(parse_str("junk<a/>"), Err(XmlError::TextOutsideRoot)));
    }

    #[test]
    fn empty_input_has_no_root() {
        assert!(matches!(parse_str(""), Err(XmlError::NoRoot)));
        assert!(matches!(parse_str("   "), Err(XmlError::NoRoot)));
    }

    #[test]
    fn fragment_parsed_inside_root() {
        let root = Element::new("saml:AttributeValue")
            .with_attribute("xmlns:eidas", "urn:e")
            .with_text("replaced");
        let parsed = parse_fragment("<eidas:A>1</eidas:A>\r\n<eidas:B/>", &root).unwrap();
        assert_eq!(parsed.name(), "saml:AttributeValue");
        assert_eq!(parsed.children().len(), 3);
        let names: Vec<_> = parsed.child_elements().map(Element::name).collect();
        assert_eq!(names, vec!["eidas:A", "eidas:B"]);
    }

    #[test]
    fn empty_fragment_gives_empty_root() {
        let parsed = parse_fragment("", &Element::new("r")).unwrap();
        assert!(parsed.children().is_empty());
    }

    #[test]
    fn fragment_closing_root_early_fails() {
        let result = parse_fragment("</r><x/>", &Element::new("r"));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_utf8_bytes_fail() {
        assert!(matches!(parse_bytes(&[0x3c, 0x61, 0xff, 0x3e]), Err(XmlError::Utf8(_))));
    }
}
