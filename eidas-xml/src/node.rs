//! Owned XML tree nodes.

use std::fmt;

/// Splits a qualified name into its optional prefix and local part.
///
/// ```
/// use eidas_xml::split_qname;
///
/// assert_eq!(split_qname("saml:Attribute"), (Some("saml"), "Attribute"));
/// assert_eq!(split_qname("Attribute"), (None, "Attribute"));
/// ```
#[must_use]
pub fn split_qname(name: &str) -> (Option<&str>, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (Some(prefix), local),
        None => (None, name),
    }
}

/// A child node of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A nested element
    Element(Element),
    /// Character data, already unescaped
    Text(String),
}

impl Node {
    /// Returns the element if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    /// Returns the text if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Element(_) => None,
        }
    }
}

/// An XML element with its attributes and ordered children.
///
/// Names are stored exactly as written (`prefix:local` or `local`).
/// Namespace declarations are ordinary attributes named `xmlns` or
/// `xmlns:<prefix>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes and no children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the qualified name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace prefix of the element name, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        split_qname(&self.name).0
    }

    /// Returns the local part of the element name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        split_qname(&self.name).1
    }

    /// Returns the value of an attribute by its qualified name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all attributes in document order, including namespace declarations.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sets an attribute, replacing an existing one with the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Builder-style variant of [`set_attribute`](Self::set_attribute).
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Declares a namespace on this element. An empty prefix declares the
    /// default namespace.
    pub fn declare_namespace(&mut self, prefix: &str, uri: impl Into<String>) {
        if prefix.is_empty() {
            self.set_attribute("xmlns", uri);
        } else {
            self.set_attribute(format!("xmlns:{prefix}"), uri);
        }
    }

    /// Returns the namespace declarations made on this element as
    /// `(prefix, uri)` pairs. The default namespace has an empty prefix.
    pub fn namespace_declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().filter_map(|(k, v)| {
            if k == "xmlns" {
                Some(("", v.as_str()))
            } else {
                k.strip_prefix("xmlns:").map(|p| (p, v.as_str()))
            }
        })
    }

    /// Returns all child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Returns the child elements in document order, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Appends a child element.
    pub fn push_element(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Appends a text node. Empty text is not stored.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Node::Text(text));
        }
    }

    /// Builder-style variant of [`push_text`](Self::push_text).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    /// Removes every child node.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Returns the concatenation of the direct text children.
    #[must_use]
    pub fn text(&self) -> String {
        self.children.iter().filter_map(Node::as_text).collect()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::write::to_xml_string(self))
    }
}

/// A parsed XML document, owning its root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wraps an element as the root of a new document.
    #[must_use]
    pub const fn new(root: Element) -> Self {
        Self { root }
    }

    /// Returns the root element.
    #[must_use]
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// Consumes the document, returning its root element.
    #[must_use]
    pub fn into_root(self) -> Element {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_parts() {
        let e = Element::new("eidas:PostCode");
        assert_eq!(e.prefix(), Some("eidas"));
        assert_eq!(e.local_name(), "PostCode");

        let e = Element::new("PostCode");
        assert_eq!(e.prefix(), None);
        assert_eq!(e.local_name(), "PostCode");
    }

    #[test]
    fn set_attribute_replaces() {
        let mut e = Element::new("a");
        e.set_attribute("x", "1");
        e.set_attribute("x", "2");
        assert_eq!(e.attribute("x"), Some("2"));
        assert_eq!(e.attributes().count(), 1);
    }

    #[test]
    fn namespace_declarations_listed() {
        let mut e = Element::new("a");
        e.declare_namespace("", "urn:default");
        e.declare_namespace("p", "urn:p");
        e.set_attribute("other", "v");
        let decls: Vec<_> = e.namespace_declarations().collect();
        assert_eq!(decls, vec![("", "urn:default"), ("p", "urn:p")]);
    }

    #[test]
    fn text_concatenates_direct_text_only() {
        let mut e = Element::new("a");
        e.push_text("AB");
        e.push_element(Element::new("b").with_text("ignored"));
        e.push_text("CD");
        assert_eq!(e.text(), "ABCD");
    }

    #[test]
    fn empty_text_not_stored() {
        let e = Element::new("a").with_text("");
        assert!(e.children().is_empty());
    }
}
