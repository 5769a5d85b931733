//! Query operations over a parsed [`Value`]: positional navigation
//! (first/last/nth) and the Postgres-style operators `->`, `->>`, `#>`.
//!
//! Every function here is output-shape-agnostic: it returns a [`Selection`],
//! and the `render` module turns that into the caller's requested form.
//!
//! # Empty vs. error
//!
//! The one contract that matters throughout this module: a request the
//! engine cannot interpret (non-array top level for positional access, a
//! matcher `#>` cannot parse) is a [`JsonTextError::Query`]; a well-formed
//! request that matches nothing (wrong-kind scalar matcher, out-of-range
//! index, zero path hits) is [`Selection::Empty`].

use crate::error::{JsonTextError, Result};
use crate::value::{parse, Value};

/// Where a located entry came from: an array position or an object key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Index(usize),
    Name(String),
}

/// The raw outcome of a query, before output-shape rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Well-formed request that matched nothing.
    Empty,
    /// A single located entry `{key: value}`.
    Entry(Key, Value),
    /// A single path match, carried as the bare matched value.
    One(Value),
    /// Multiple path matches, in discovery order.
    Many(Vec<Value>),
}

/// The three query operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `->` — match a direct entry by 0-based position; integer matchers only.
    IndexMatch,
    /// `->>` — match an object entry by key; string matchers only.
    KeyMatch,
    /// `#>` — recursive two-segment path match; the matcher is JSON text.
    PathMatch,
}

impl Operator {
    /// Admission rule checked before any comparison: can this matcher kind
    /// be compared at all under this operator? No coercion is ever applied,
    /// so `->` with a numeric *string* is simply inadmissible.
    fn admits(self, matcher: &Matcher) -> bool {
        matches!(
            (self, matcher),
            (Operator::IndexMatch, Matcher::Int(_))
                | (Operator::KeyMatch, Matcher::Str(_))
                | (Operator::PathMatch, Matcher::Str(_))
        )
    }
}

impl std::str::FromStr for Operator {
    type Err = JsonTextError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "->" => Ok(Operator::IndexMatch),
            "->>" => Ok(Operator::KeyMatch),
            "#>" => Ok(Operator::PathMatch),
            other => Err(JsonTextError::Query(format!("unknown operator: {other}"))),
        }
    }
}

/// A caller-supplied matcher argument.
///
/// For `#>` the string variant carries JSON text naming the two path
/// segments, e.g. `{"bikes":"japanese"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    Int(i64),
    Str(String),
}

/// First element of a top-level array, located as `{0: value}`.
pub fn first(doc: &Value) -> Result<Selection> {
    let items = require_array(doc)?;
    Ok(match items.first() {
        Some(value) => Selection::Entry(Key::Index(0), value.clone()),
        None => Selection::Empty,
    })
}

/// Last element of a top-level array, located as `{N-1: value}`.
pub fn last(doc: &Value) -> Result<Selection> {
    let items = require_array(doc)?;
    Ok(match items.last() {
        Some(value) => Selection::Entry(Key::Index(items.len() - 1), value.clone()),
        None => Selection::Empty,
    })
}

/// Element at `index` of a top-level array, located as `{index: value}`.
/// Out-of-range indexes are an empty selection, not an error.
pub fn nth(doc: &Value, index: usize) -> Result<Selection> {
    let items = require_array(doc)?;
    Ok(match items.get(index) {
        Some(value) => Selection::Entry(Key::Index(index), value.clone()),
        None => Selection::Empty,
    })
}

fn require_array(doc: &Value) -> Result<&[Value]> {
    match doc {
        Value::Array(items) => Ok(items),
        _ => Err(JsonTextError::Query(
            "positional access requires a top-level array".to_string(),
        )),
    }
}

/// Evaluate `operator` with `matcher` against the document.
pub fn query(doc: &Value, operator: Operator, matcher: &Matcher) -> Result<Selection> {
    if !operator.admits(matcher) {
        if operator == Operator::PathMatch {
            return Err(JsonTextError::Query(
                "#> requires a JSON path matcher such as {\"bikes\":\"japanese\"}".to_string(),
            ));
        }
        // Wrong kind of scalar for -> / ->> is a no-match, not an error.
        return Ok(Selection::Empty);
    }
    match (operator, matcher) {
        (Operator::IndexMatch, Matcher::Int(wanted)) => Ok(match_on_index(doc, *wanted)),
        (Operator::KeyMatch, Matcher::Str(wanted)) => Ok(match_on_key(doc, wanted)),
        (Operator::PathMatch, Matcher::Str(path_json)) => match_on_path(doc, path_json),
        // admits() already ruled out every other pairing.
        _ => Ok(Selection::Empty),
    }
}

/// `->`: compare the matcher against each direct entry's 0-based position.
/// Array entries keep their index; object entries are located by their key.
fn match_on_index(doc: &Value, wanted: i64) -> Selection {
    if wanted < 0 {
        return Selection::Empty;
    }
    let wanted = wanted as usize;
    match doc {
        Value::Array(items) => match items.get(wanted) {
            Some(value) => Selection::Entry(Key::Index(wanted), value.clone()),
            None => Selection::Empty,
        },
        Value::Object(entries) => match entries.get(wanted) {
            Some((key, value)) => Selection::Entry(Key::Name(key.clone()), value.clone()),
            None => Selection::Empty,
        },
        // A scalar top level has no direct entries to scan.
        _ => Selection::Empty,
    }
}

/// `->>`: exact string equality against object keys, first hit wins.
/// Array positions have no string key and never match.
fn match_on_key(doc: &Value, wanted: &str) -> Selection {
    if let Value::Object(entries) = doc {
        for (key, value) in entries {
            if key == wanted {
                return Selection::Entry(Key::Name(key.clone()), value.clone());
            }
        }
    }
    Selection::Empty
}

/// `#>`: parse the two path segments out of the matcher text, then walk the
/// whole tree collecting every match in discovery order.
fn match_on_path(doc: &Value, path_json: &str) -> Result<Selection> {
    let (outer, inner) = parse_path_matcher(path_json)?;
    let mut matches = Vec::new();
    collect_path_matches(doc, &outer, &inner, &mut matches);
    Ok(match matches.len() {
        0 => Selection::Empty,
        1 => Selection::One(matches.remove(0)),
        _ => Selection::Many(matches),
    })
}

/// The `#>` matcher must be a single-entry object mapping one string to
/// another, e.g. `{"bikes":"japanese"}`. Anything else is a hard error.
fn parse_path_matcher(text: &str) -> Result<(String, String)> {
    let matcher = parse(text).map_err(|_| bad_path_matcher(text))?;
    if let Value::Object(entries) = &matcher {
        if let [(outer, Value::String(inner))] = entries.as_slice() {
            return Ok((outer.clone(), inner.clone()));
        }
    }
    Err(bad_path_matcher(text))
}

fn bad_path_matcher(text: &str) -> JsonTextError {
    JsonTextError::Query(format!(
        "#> matcher must be a single-entry object of two strings, got: {text}"
    ))
}

/// Depth-first walk through objects and arrays. At every object entry named
/// `outer`, the *direct* children of its value are scanned for `inner`; each
/// hit's value is one match. The walk also descends into the entry's value,
/// so an `outer` nested beneath another `outer` contributes its own
/// independent occurrence.
fn collect_path_matches(value: &Value, outer: &str, inner: &str, out: &mut Vec<Value>) {
    match value {
        Value::Object(entries) => {
            for (key, child) in entries {
                if key == outer {
                    if let Value::Object(children) = child {
                        for (child_key, grandchild) in children {
                            if child_key == inner {
                                out.push(grandchild.clone());
                            }
                        }
                    }
                }
                collect_path_matches(child, outer, inner, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_path_matches(item, outer, inner, out);
            }
        }
        _ => {}
    }
}
