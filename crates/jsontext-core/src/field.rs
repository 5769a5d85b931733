//! The document facade the hosting field type talks to.
//!
//! [`JsonText`] owns the raw JSON text and the configured output shape, and
//! exposes the engine's five operations. Each call parses the stored text
//! freshly and discards the tree afterwards; the facade carries no other
//! state, so instances are cheap and safe to share across threads by value.

use crate::error::Result;
use crate::query::{self, Matcher, Operator, Selection};
use crate::render::{render, Rendered, ReturnType};
use crate::value::{parse, Value};

/// A queryable JSON document with a configured output shape.
#[derive(Debug, Clone)]
pub struct JsonText {
    text: String,
    return_type: ReturnType,
}

impl JsonText {
    /// Wrap raw JSON text. The output shape defaults to [`ReturnType::Json`].
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            return_type: ReturnType::default(),
        }
    }

    /// Builder-style output shape selection.
    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn set_return_type(&mut self, return_type: ReturnType) {
        self.return_type = return_type;
    }

    pub fn return_type(&self) -> ReturnType {
        self.return_type
    }

    /// The raw text this document wraps.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parse the stored text into the native container form.
    pub fn parse_as_iterable(&self) -> Result<Value> {
        parse(&self.text)
    }

    /// First element of the top-level array, as `{0: value}`.
    pub fn first(&self) -> Result<Rendered> {
        let doc = parse(&self.text)?;
        self.render(query::first(&doc)?)
    }

    /// Last element of the top-level array, as `{N-1: value}`.
    pub fn last(&self) -> Result<Rendered> {
        let doc = parse(&self.text)?;
        self.render(query::last(&doc)?)
    }

    /// Element at `index` of the top-level array, as `{index: value}`.
    pub fn nth(&self, index: usize) -> Result<Rendered> {
        let doc = parse(&self.text)?;
        self.render(query::nth(&doc, index)?)
    }

    /// Evaluate one of `->`, `->>`, `#>` with the given matcher.
    pub fn query(&self, operator: Operator, matcher: &Matcher) -> Result<Rendered> {
        let doc = parse(&self.text)?;
        self.render(query::query(&doc, operator, matcher)?)
    }

    fn render(&self, selection: Selection) -> Result<Rendered> {
        render(&selection, self.return_type)
    }
}
