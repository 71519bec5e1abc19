//! Property-based tests for normalization over generated documents.
//!
//! Documents are built from arbitrary JSON plus a bias towards the shapes the
//! normalizer cares about: `{type: "null"}` branches, `$ref` branches and
//! two-branch `anyOf` arrays, so that rewrites actually happen.
//!
//! Invariants:
//! 1. `normalize(normalize(d)) == normalize(d)` and the second report is empty.
//! 2. No reachable object still carries a two-branch nullable union.
//! 3. Every reported path resolves to an object in the output.
//! 4. The document changes if and only if something was reported.

use openapi_preprocess_core::{is_null_branch, normalize_value};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
        Just(json!("null")),
    ]
}

fn arb_branch_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({ "type": "null" })),
        Just(json!({ "type": "string" })),
        Just(json!({ "type": "integer", "format": "int64" })),
        Just(json!({ "type": ["string", "null"] })),
        "[A-Z][a-z]{0,6}".prop_map(|name| json!({ "$ref": format!("#/components/schemas/{name}") })),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("anyOf".to_string()),
        Just("type".to_string()),
        Just("description".to_string()),
        Just("properties".to_string()),
        "[a-z/~]{1,6}",
    ]
}

fn arb_document() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![arb_scalar(), arb_branch_leaf()];
    leaf.prop_recursive(5, 64, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map(arb_key(), inner.clone(), 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            // Two-branch union with optional siblings.
            (
                inner.clone(),
                inner,
                proptest::collection::btree_map(arb_key(), arb_scalar(), 0..2),
            )
                .prop_map(|(a, b, siblings)| {
                    let mut obj: Map<String, Value> = siblings.into_iter().collect();
                    obj.insert("anyOf".to_string(), Value::Array(vec![a, b]));
                    Value::Object(obj)
                }),
        ]
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn has_nullable_union(value: &Value) -> bool {
    match value {
        Value::Object(obj) => {
            let here = match obj.get("anyOf") {
                Some(Value::Array(branches)) if branches.len() == 2 => {
                    branches.iter().all(Value::is_object)
                        && branches.iter().filter(|b| is_null_branch(b)).count() == 1
                }
                _ => false,
            };
            here || obj.values().any(has_nullable_union)
        }
        Value::Array(items) => items.iter().any(has_nullable_union),
        _ => false,
    }
}

fn to_rfc6901(path: &str) -> String {
    path.strip_prefix('#').unwrap_or(path).to_string()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..Default::default() })]

    #[test]
    fn normalize_is_idempotent(doc in arb_document()) {
        let (once, _) = normalize_value(doc);
        let (twice, second_report) = normalize_value(once.clone());
        prop_assert_eq!(twice, once);
        prop_assert!(second_report.is_empty());
    }

    #[test]
    fn no_nullable_union_survives(doc in arb_document()) {
        let (output, _) = normalize_value(doc);
        prop_assert!(!has_nullable_union(&output), "left a nullable union in {}", output);
    }

    #[test]
    fn reported_paths_point_at_objects(doc in arb_document()) {
        let (output, report) = normalize_value(doc);
        for path in report.paths() {
            let node = output.pointer(&to_rfc6901(path));
            prop_assert!(
                node.is_some_and(Value::is_object),
                "report path {} does not resolve to an object in {}", path, output
            );
        }
    }

    #[test]
    fn empty_report_means_unchanged(doc in arb_document()) {
        let (output, report) = normalize_value(doc.clone());
        if report.is_empty() {
            prop_assert_eq!(output, doc);
        } else {
            prop_assert_ne!(output, doc);
        }
    }
}
