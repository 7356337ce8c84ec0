//! Minimal owned XML tree for eIDAS attribute value codecs.
//!
//! This crate is the XML boundary the attribute codecs are written against.
//! It offers exactly what they need and nothing more:
//!
//! - [`parse_str`] / [`parse_bytes`]: build an owned [`Element`] tree
//! - [`parse_fragment`]: parse rootless content inside a synthesized root
//! - [`to_xml_string`]: serialize a tree back to text
//! - [`ElementRef`]: a borrowed element that remembers its ancestors, so
//!   namespace declarations inherited from enclosing elements can be resolved
//! - [`NamespaceBindings`]: a prefix to URI table
//!
//! # Quick Start
//!
//! ```rust
//! use eidas_xml::{parse_str, ElementRef};
//!
//! let doc = parse_str(
//!     r#"<saml:Attribute xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion">
//!          <saml:AttributeValue>SE</saml:AttributeValue>
//!        </saml:Attribute>"#,
//! ).unwrap();
//!
//! let root = ElementRef::root(doc.root());
//! let value = root.child_elements().next().unwrap();
//! assert_eq!(value.local_name(), "AttributeValue");
//! assert_eq!(value.namespace_uri(), Some("urn:oasis:names:tc:SAML:2.0:assertion"));
//! assert_eq!(value.element().text(), "SE");
//! ```
//!
//! # Limitations
//!
//! Parsing is not namespace-aware: prefixes are kept verbatim and resolved on
//! demand through [`ElementRef`]. Comments, processing instructions and the
//! document type declaration are dropped. CDATA sections become text nodes.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod namespace;
mod node;
mod parse;
mod write;

pub use error::XmlError;
pub use namespace::{ElementRef, NamespaceBindings, XMLNS_PREFIX};
pub use node::{Document, Element, Node, split_qname};
pub use parse::{parse_bytes, parse_fragment, parse_str};
pub use write::to_xml_string;
