//! # jsontext-core
//!
//! A Postgres-jsonb-style query engine over raw JSON text: positional
//! extraction (first/last/nth), key/index lookup (`->`, `->>`), and
//! recursive path matching (`#>`), with results rendered as a native value
//! tree, compact JSON text, or a flattened typed-scalar list.
//!
//! The engine is purely functional: text in, result out, no caches and no
//! mutation. Objects preserve source order and duplicate keys, which is what
//! lets `#>` report several independently-located matches for the same key
//! name.
//!
//! ## Quick start
//!
//! ```rust
//! use jsontext_core::{JsonText, Matcher, Operator};
//!
//! // Positional access over a top-level array
//! let cars = JsonText::new(r#"["great wall","lada","trabant"]"#);
//! assert_eq!(cars.first().unwrap().as_json(), Some(r#"["great wall"]"#));
//! assert_eq!(cars.nth(2).unwrap().as_json(), Some(r#"{"2":"trabant"}"#));
//!
//! // Key lookup over a top-level object
//! let makes = JsonText::new(r#"{"chinese":"great wall","british":["vauxhall","morris"]}"#);
//! let hit = makes
//!     .query(Operator::KeyMatch, &Matcher::Str("british".into()))
//!     .unwrap();
//! assert_eq!(hit.as_json(), Some(r#"{"british":["vauxhall","morris"]}"#));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` model plus `parse`/`to_json`
//! - [`query`] — navigation and the three operators over a `Value`
//! - [`render`] — output-shape rendering (`Native` / `Json` / `TypedScalars`)
//! - [`field`] — the `JsonText` facade a hosting field type drives
//! - [`error`] — `Parse` vs `Query` error split

pub mod error;
pub mod field;
pub mod query;
pub mod render;
pub mod value;

pub use error::{JsonTextError, Result};
pub use field::JsonText;
pub use query::{Key, Matcher, Operator, Selection};
pub use render::{
    flatten_scalars, render_scalars_with, Rendered, ReturnType, ScalarKind, ScalarRenderer,
    TypedScalar,
};
pub use value::{parse, to_json, Value};
