//! Error types for XML parsing.

use thiserror::Error;

/// Errors raised while turning text into an [`Element`](crate::Element) tree.
#[derive(Debug, Error)]
pub enum XmlError {
    /// The underlying tokenizer rejected the input.
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// A name or a character data run was not valid UTF-8.
    #[error("XML content is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The input ended while elements were still open.
    #[error("unexpected end of input; element '{open}' is not closed")]
    UnexpectedEof {
        /// Name of the innermost element left open
        open: String,
    },

    /// A second top-level element was found.
    #[error("document has more than one root element; found '{name}'")]
    MultipleRoots {
        /// Name of the offending element
        name: String,
    },

    /// Non-whitespace character data appeared outside the root element.
    #[error("character data outside of the root element")]
    TextOutsideRoot,

    /// The input did not contain any element.
    #[error("document has no root element")]
    NoRoot,
}
