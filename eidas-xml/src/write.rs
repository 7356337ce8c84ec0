//! Serializing an [`Element`] tree back to text.

use quick_xml::escape::escape;

use crate::node::{Element, Node};

/// Serializes an element and its subtree without an XML declaration.
///
/// Attribute values and text are escaped; nothing is reformatted, so the
/// output parses back into an equal tree.
///
/// # Examples
///
/// ```
/// use eidas_xml::{to_xml_string, Element};
///
/// let element = Element::new("eidas:PostName")
///     .with_attribute("xmlns:eidas", "http://eidas.europa.eu/attributes/naturalperson")
///     .with_text("Salt & Pepper");
/// assert_eq!(
///     to_xml_string(&element),
///     r#"<eidas:PostName xmlns:eidas="http://eidas.europa.eu/attributes/naturalperson">Salt &amp; Pepper</eidas:PostName>"#
/// );
/// ```
#[must_use]
pub fn to_xml_string(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }

    if element.children().is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in element.children() {
        match child {
            Node::Element(e) => write_element(e, out),
            Node::Text(t) => out.push_str(&escape(t.as_str())),
        }
    }
    out.push_str("</");
    out.push_str(element.name());
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_str;

    #[test]
    fn empty_element_self_closes() {
        assert_eq!(to_xml_string(&Element::new("a")), "<a/>");
    }

    #[test]
    fn escapes_attribute_quotes() {
        let e = Element::new("a").with_attribute("v", "say \"hi\"");
        assert_eq!(to_xml_string(&e), "<a v=\"say &quot;hi&quot;\"/>");
    }

    #[test]
    fn output_reparses_to_same_tree() {
        let mut root = Element::new("p:root").with_attribute("xmlns:p", "urn:p");
        root.push_element(Element::new("p:child").with_text("<1 & 2>"));
        root.push_text("\n");
        root.push_element(Element::new("p:empty"));

        let text = to_xml_string(&root);
        let reparsed = parse_str(&text).unwrap();
        assert_eq!(reparsed.root(), &root);
    }
}
