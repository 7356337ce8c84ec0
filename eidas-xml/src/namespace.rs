//! Namespace binding tables and ancestor-aware element references.

use std::collections::BTreeMap;

use crate::node::{Element, split_qname};

/// The reserved prefix used for namespace declarations.
pub const XMLNS_PREFIX: &str = "xmlns";

/// A prefix to namespace URI table.
///
/// The default namespace is stored under the empty prefix. Iteration is
/// ordered by prefix, which keeps serialized output deterministic.
///
/// # Examples
///
/// ```
/// use eidas_xml::NamespaceBindings;
///
/// let mut bindings = NamespaceBindings::new();
/// bindings.bind("eidas", "http://eidas.europa.eu/attributes/naturalperson");
/// assert_eq!(
///     bindings.uri_for("eidas"),
///     Some("http://eidas.europa.eu/attributes/naturalperson")
/// );
/// assert_eq!(
///     bindings.prefix_for("http://eidas.europa.eu/attributes/naturalperson"),
///     Some("eidas")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespaceBindings {
    bindings: BTreeMap<String, String>,
}

impl NamespaceBindings {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a prefix, replacing any earlier binding for it.
    pub fn bind(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.bindings.insert(prefix.into(), uri.into());
    }

    /// Binds a prefix only if it is not bound yet. Returns true if the
    /// binding was added.
    pub fn bind_if_absent(&mut self, prefix: &str, uri: &str) -> bool {
        if self.bindings.contains_key(prefix) {
            return false;
        }
        self.bindings.insert(prefix.to_string(), uri.to_string());
        true
    }

    /// Returns the URI bound to a prefix. Use `""` for the default namespace.
    #[must_use]
    pub fn uri_for(&self, prefix: &str) -> Option<&str> {
        self.bindings.get(prefix).map(String::as_str)
    }

    /// Returns a non-default prefix bound to the given URI, if any.
    ///
    /// When several prefixes are bound to the same URI the first one in
    /// prefix order is returned.
    #[must_use]
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, u)| !p.is_empty() && *u == uri)
            .map(|(p, _)| p.as_str())
    }

    /// Returns true if no prefix is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the number of bound prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns an iterator over `(prefix, uri)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    /// Adds the declarations of one element without overriding bindings
    /// already present. Used when walking from an element outward, so the
    /// nearest declaration of a prefix wins.
    fn absorb_outer(&mut self, element: &Element) {
        for (prefix, uri) in element.namespace_declarations() {
            self.bind_if_absent(prefix, uri);
        }
    }
}

/// A borrowed element together with the chain of its ancestors.
///
/// The owned tree has no parent links, so anything that needs the
/// namespace context of an element (inherited declarations) works on an
/// `ElementRef` obtained by walking down from the document root.
#[derive(Debug, Clone)]
pub struct ElementRef<'a> {
    element: &'a Element,
    ancestors: Vec<&'a Element>,
}

impl<'a> ElementRef<'a> {
    /// Creates a reference to a root element (one without ancestors).
    #[must_use]
    pub const fn root(element: &'a Element) -> Self {
        Self {
            element,
            ancestors: Vec::new(),
        }
    }

    /// Creates a reference with an explicit ancestor chain, outermost first.
    #[must_use]
    pub const fn with_ancestors(element: &'a Element, ancestors: Vec<&'a Element>) -> Self {
        Self { element, ancestors }
    }

    /// Returns the referenced element.
    #[must_use]
    pub const fn element(&self) -> &'a Element {
        self.element
    }

    /// Returns the local part of the element name.
    #[must_use]
    pub fn local_name(&self) -> &'a str {
        self.element.local_name()
    }

    /// Returns references to the child elements in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = ElementRef<'a>> + '_ {
        self.element.child_elements().map(move |child| {
            let mut ancestors = self.ancestors.clone();
            ancestors.push(self.element);
            ElementRef {
                element: child,
                ancestors,
            }
        })
    }

    /// Collects every namespace binding in scope at this element.
    ///
    /// Declarations on the element itself take precedence over those of its
    /// ancestors; a nearer ancestor takes precedence over a farther one.
    #[must_use]
    pub fn in_scope_namespaces(&self) -> NamespaceBindings {
        let mut bindings = NamespaceBindings::new();
        bindings.absorb_outer(self.element);
        for ancestor in self.ancestors.iter().rev() {
            bindings.absorb_outer(ancestor);
        }
        bindings
    }

    /// Resolves a prefix (`""` for the default namespace) in the scope of
    /// this element.
    #[must_use]
    pub fn lookup_namespace(&self, prefix: &str) -> Option<&'a str> {
        std::iter::once(self.element)
            .chain(self.ancestors.iter().rev().copied())
            .find_map(|e| {
                e.namespace_declarations()
                    .find(|(p, _)| *p == prefix)
                    .map(|(_, uri)| uri)
            })
    }

    /// Returns the namespace URI of the element name, if it can be resolved.
    #[must_use]
    pub fn namespace_uri(&self) -> Option<&'a str> {
        self.lookup_namespace(self.element.prefix().unwrap_or(""))
    }

    /// Finds an attribute by namespace URI and local name.
    ///
    /// Attributes without a prefix are never in a namespace, so `namespace`
    /// must be `None` to match them.
    #[must_use]
    pub fn attribute_ns(&self, namespace: Option<&str>, local_name: &str) -> Option<&'a str> {
        self.element.attributes().find_map(|(name, value)| {
            let (prefix, local) = split_qname(name);
            if local != local_name || prefix == Some(XMLNS_PREFIX) || name == XMLNS_PREFIX {
                return None;
            }
            let resolved = match prefix {
                Some(p) => Some(self.lookup_namespace(p)?),
                None => None,
            };
            (resolved == namespace).then_some(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_str;

    #[test]
    fn nearest_declaration_wins() {
        let doc = parse_str(
            r#"<a xmlns:p="urn:outer"><b xmlns:p="urn:inner"><c/></b></a>"#,
        )
        .unwrap();
        let root = ElementRef::root(doc.root());
        let b = root.child_elements().next().unwrap();
        let c = b.child_elements().next().unwrap();

        assert_eq!(c.lookup_namespace("p"), Some("urn:inner"));
        assert_eq!(c.in_scope_namespaces().uri_for("p"), Some("urn:inner"));
        assert_eq!(root.lookup_namespace("p"), Some("urn:outer"));
    }

    #[test]
    fn inherited_bindings_collected() {
        let doc = parse_str(
            r#"<a xmlns="urn:d" xmlns:x="urn:x"><b xmlns:y="urn:y"/></a>"#,
        )
        .unwrap();
        let root = ElementRef::root(doc.root());
        let b = root.child_elements().next().unwrap();
        let scope = b.in_scope_namespaces();

        assert!(!scope.is_empty());
        assert_eq!(scope.len(), 3);
        assert!(ElementRef::root(&Element::new("lonely")).in_scope_namespaces().is_empty());
        assert_eq!(scope.uri_for(""), Some("urn:d"));
        assert_eq!(scope.uri_for("x"), Some("urn:x"));
        assert_eq!(scope.uri_for("y"), Some("urn:y"));
        assert_eq!(b.namespace_uri(), Some("urn:d"));
    }

    #[test]
    fn attribute_lookup_by_namespace() {
        let doc = parse_str(
            r#"<a xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:type="t:T" type="plain"/>"#,
        )
        .unwrap();
        let root = ElementRef::root(doc.root());

        assert_eq!(
            root.attribute_ns(Some("http://www.w3.org/2001/XMLSchema-instance"), "type"),
            Some("t:T")
        );
        assert_eq!(root.attribute_ns(None, "type"), Some("plain"));
    }

    #[test]
    fn prefix_for_skips_default_namespace() {
        let mut bindings = NamespaceBindings::new();
        bindings.bind("", "urn:n");
        assert_eq!(bindings.prefix_for("urn:n"), None);
        bindings.bind("n", "urn:n");
        assert_eq!(bindings.prefix_for("urn:n"), Some("n"));
    }

    #[test]
    fn bind_if_absent_keeps_existing() {
        let mut bindings = NamespaceBindings::new();
        assert!(bindings.bind_if_absent("p", "urn:first"));
        assert!(!bindings.bind_if_absent("p", "urn:second"));
        assert_eq!(bindings.uri_for("p"), Some("urn:first"));
    }
}
