use jsontext_core::{
    flatten_scalars, parse, render_scalars_with, to_json, JsonText, Key, Matcher, Operator,
    ReturnType, ScalarKind, ScalarRenderer, Selection, Value,
};

// ============================================================================
// Selection → composite value rules
// ============================================================================

#[test]
fn empty_selection_renders_as_empty_array() {
    let value = jsontext_core::render::selection_to_value(&Selection::Empty);
    assert_eq!(value, Value::Array(vec![]));
    assert_eq!(to_json(&value).unwrap(), "[]");
}

#[test]
fn entry_at_index_zero_renders_as_a_list() {
    let selection = Selection::Entry(Key::Index(0), Value::String("great wall".into()));
    assert_eq!(
        jsontext_core::render::selection_to_value(&selection),
        Value::Array(vec![Value::String("great wall".into())])
    );
}

#[test]
fn entry_at_nonzero_index_renders_keyed_by_decimal_index() {
    let selection = Selection::Entry(Key::Index(6), Value::String("morris".into()));
    assert_eq!(
        jsontext_core::render::selection_to_value(&selection),
        Value::Object(vec![("6".into(), Value::String("morris".into()))])
    );
}

#[test]
fn named_entry_renders_as_single_entry_object() {
    let selection = Selection::Entry(Key::Name("british".into()), Value::Bool(true));
    assert_eq!(
        jsontext_core::render::selection_to_value(&selection),
        Value::Object(vec![("british".into(), Value::Bool(true))])
    );
}

#[test]
fn one_renders_bare_and_many_renders_as_list() {
    let one = Selection::One(Value::Number(7.0));
    assert_eq!(
        jsontext_core::render::selection_to_value(&one),
        Value::Number(7.0)
    );

    let many = Selection::Many(vec![Value::Number(1.0), Value::Number(2.0)]);
    assert_eq!(
        jsontext_core::render::selection_to_value(&many),
        Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
    );
}

// ============================================================================
// Json shape always equals to_json of the Native shape
// ============================================================================

#[test]
fn json_shape_matches_serialized_native_shape() {
    let doc = r#"{"chinese":"great wall","british":["vauxhall","morris"],"electric":true}"#;
    let cases: Vec<(Operator, Matcher)> = vec![
        (Operator::IndexMatch, Matcher::Int(1)),
        (Operator::IndexMatch, Matcher::Int(42)),
        (Operator::IndexMatch, Matcher::Str("6".into())),
        (Operator::KeyMatch, Matcher::Str("british".into())),
        (Operator::KeyMatch, Matcher::Str("italian".into())),
        (Operator::PathMatch, Matcher::Str(r#"{"british":"0"}"#.into())),
    ];
    for (operator, matcher) in cases {
        let as_native = JsonText::new(doc)
            .with_return_type(ReturnType::Native)
            .query(operator, &matcher)
            .unwrap();
        let as_json = JsonText::new(doc)
            .with_return_type(ReturnType::Json)
            .query(operator, &matcher)
            .unwrap();
        assert_eq!(
            as_json.as_json().unwrap(),
            to_json(as_native.as_value().unwrap()).unwrap(),
            "shapes diverged for {operator:?}"
        );
    }
}

// ============================================================================
// Typed-scalar flattening
// ============================================================================

#[test]
fn flattening_walks_leaves_in_document_order() {
    let value = parse(r#"{"a":[1,{"b":true}],"c":"x","d":null}"#).unwrap();
    let leaves = flatten_scalars(&value);
    assert_eq!(
        leaves.iter().map(|l| l.value().clone()).collect::<Vec<_>>(),
        vec![
            Value::Number(1.0),
            Value::Bool(true),
            Value::String("x".into()),
            Value::Null,
        ]
    );
    assert_eq!(
        leaves.iter().map(|l| l.kind()).collect::<Vec<_>>(),
        vec![
            ScalarKind::Other,
            ScalarKind::Boolean,
            ScalarKind::Other,
            ScalarKind::Other,
        ]
    );
}

#[test]
fn flattening_a_scalar_is_itself() {
    let leaves = flatten_scalars(&Value::Bool(false));
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].kind(), ScalarKind::Boolean);
}

// ============================================================================
// Pluggable host renderer
// ============================================================================

/// A stand-in for a host ORM's scalar type system.
struct LabelRenderer;

impl ScalarRenderer for LabelRenderer {
    type Output = String;

    fn boolean(&self, value: bool) -> String {
        format!("Boolean({value})")
    }

    fn other(&self, value: &Value) -> String {
        format!("Varchar({})", to_json(value).unwrap())
    }
}

#[test]
fn host_renderer_sees_kind_split_scalars() {
    let doc = parse(r#"[true,"morris",3]"#).unwrap();
    let selection = jsontext_core::query::first(&doc).unwrap();
    let labels = render_scalars_with(&selection, &LabelRenderer);
    assert_eq!(labels, vec!["Boolean(true)".to_string()]);

    let selection = Selection::Many(vec![Value::String("morris".into()), Value::Bool(false)]);
    let labels = render_scalars_with(&selection, &LabelRenderer);
    assert_eq!(labels, vec!["Varchar(\"morris\")", "Boolean(false)"]);
}

#[test]
fn empty_selection_yields_no_scalars_for_the_host() {
    let labels = render_scalars_with(&Selection::Empty, &LabelRenderer);
    assert!(labels.is_empty());
}
