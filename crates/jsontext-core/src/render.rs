//! Output-shape rendering for query results.
//!
//! Queries produce a [`Selection`]; this module is the only place that
//! consumes the caller-chosen [`ReturnType`], keeping the navigator and
//! matchers shape-agnostic. Three shapes exist:
//!
//! - [`ReturnType::Native`] — the selection materialized as a composite
//!   [`Value`], order and duplicate keys preserved.
//! - [`ReturnType::Json`] — compact JSON text of that composite; an empty
//!   result serializes as `[]`.
//! - [`ReturnType::TypedScalars`] — every scalar leaf of the composite, in
//!   document order, as [`TypedScalar`] descriptors for a host framework's
//!   own scalar types. Wrapper construction stays on the host side, behind
//!   [`ScalarRenderer`].

use crate::error::Result;
use crate::query::{Key, Selection};
use crate::value::{to_json, Value};

/// The output shape requested by the caller, chosen once before a query runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnType {
    /// Engine-native composite `Value`.
    Native,
    /// Compact JSON text of the native composite.
    #[default]
    Json,
    /// Scalar leaves flattened into typed descriptors for host ORM casting.
    TypedScalars,
}

/// A query result rendered into the requested shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Native(Value),
    Json(String),
    TypedScalars(Vec<TypedScalar>),
}

impl Rendered {
    /// The composite value, when rendered with [`ReturnType::Native`].
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Rendered::Native(value) => Some(value),
            _ => None,
        }
    }

    /// The JSON text, when rendered with [`ReturnType::Json`].
    pub fn as_json(&self) -> Option<&str> {
        match self {
            Rendered::Json(text) => Some(text),
            _ => None,
        }
    }

    /// The flattened scalars, when rendered with [`ReturnType::TypedScalars`].
    pub fn as_scalars(&self) -> Option<&[TypedScalar]> {
        match self {
            Rendered::TypedScalars(scalars) => Some(scalars),
            _ => None,
        }
    }
}

/// Kind tag a host framework dispatches on when wrapping a scalar. Boolean
/// columns are the one case hosts treat specially; everything else is
/// handed over undifferentiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Boolean,
    Other,
}

/// One flattened scalar leaf of a result, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedScalar {
    value: Value,
}

impl TypedScalar {
    pub fn kind(&self) -> ScalarKind {
        match self.value {
            Value::Bool(_) => ScalarKind::Boolean,
            _ => ScalarKind::Other,
        }
    }

    /// The scalar's native value (never an array or object).
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Hook for mapping flattened scalars onto a host framework's own scalar
/// wrappers. The engine never constructs host types itself; it hands each
/// leaf to the renderer with its kind already split out.
pub trait ScalarRenderer {
    type Output;

    fn boolean(&self, value: bool) -> Self::Output;
    fn other(&self, value: &Value) -> Self::Output;
}

/// Render a selection into the requested output shape.
pub fn render(selection: &Selection, return_type: ReturnType) -> Result<Rendered> {
    let composite = selection_to_value(selection);
    Ok(match return_type {
        ReturnType::Native => Rendered::Native(composite),
        ReturnType::Json => Rendered::Json(to_json(&composite)?),
        ReturnType::TypedScalars => Rendered::TypedScalars(flatten_scalars(&composite)),
    })
}

/// Materialize a selection as a composite [`Value`] (the native shape).
///
/// A located entry keyed by index 0 renders as a one-element array, any
/// other index as an object keyed by the decimal index, and a named key as
/// a one-entry object. An empty selection is `[]`.
pub fn selection_to_value(selection: &Selection) -> Value {
    match selection {
        Selection::Empty => Value::Array(Vec::new()),
        Selection::Entry(Key::Index(0), value) => Value::Array(vec![value.clone()]),
        Selection::Entry(Key::Index(index), value) => {
            Value::Object(vec![(index.to_string(), value.clone())])
        }
        Selection::Entry(Key::Name(name), value) => {
            Value::Object(vec![(name.clone(), value.clone())])
        }
        Selection::One(value) => value.clone(),
        Selection::Many(values) => Value::Array(values.clone()),
    }
}

/// Flatten every scalar leaf of a composite, in document order. Keys are
/// positional provenance only and are dropped; hosts wrap bare scalars.
pub fn flatten_scalars(value: &Value) -> Vec<TypedScalar> {
    let mut out = Vec::new();
    collect_scalars(value, &mut out);
    out
}

fn collect_scalars(value: &Value, out: &mut Vec<TypedScalar>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_scalars(item, out);
            }
        }
        Value::Object(entries) => {
            for (_, child) in entries {
                collect_scalars(child, out);
            }
        }
        scalar => out.push(TypedScalar {
            value: scalar.clone(),
        }),
    }
}

/// Apply a host-framework renderer to every flattened scalar of a selection.
pub fn render_scalars_with<R: ScalarRenderer>(
    selection: &Selection,
    renderer: &R,
) -> Vec<R::Output> {
    flatten_scalars(&selection_to_value(selection))
        .iter()
        .map(|scalar| match scalar.value() {
            Value::Bool(b) => renderer.boolean(*b),
            other => renderer.other(other),
        })
        .collect()
}
