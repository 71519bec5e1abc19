//! Nullable-union normalization.
//!
//! OpenAPI 3.1 documents spell optional values as
//! `anyOf: [{type: T, ...}, {type: "null"}]`. Strict generators cannot bind a
//! null-typed branch in some positions (header and query parameters with
//! `style: simple`), so this pass collapses the union into its non-null
//! branch:
//!
//! ```text
//! { "description": "d", "anyOf": [ { "type": "string" }, { "type": "null" } ] }
//!   → { "description": "d", "type": "string" }
//! ```
//!
//! The walk is purely syntactic and covers the whole document, not just
//! schema-bearing keywords: every object value and array element is visited
//! whatever its key. `$ref` branches are merged like any other branch; nothing
//! is dereferenced.
//!
//! Only the exact two-branch shape with exactly one null branch is rewritten.
//! Anything else (one or three branches, a non-object branch, two null
//! branches, no null branch) is left untouched.

use serde_json::{Map, Value};

use crate::pointer::build_path;
use crate::report::NormalizeReport;

/// The union marker this pass collapses.
pub const UNION_KEYWORD: &str = "anyOf";

/// Collapse every nullable union reachable from `doc`, in place.
///
/// Idempotent: a second call finds nothing to rewrite and returns an empty
/// report.
pub fn normalize(doc: &mut Value) -> NormalizeReport {
    let mut report = NormalizeReport::new();
    walk(doc, "#", &mut report);
    report
}

/// Owning variant of [`normalize`].
pub fn normalize_value(mut doc: Value) -> (Value, NormalizeReport) {
    let report = normalize(&mut doc);
    (doc, report)
}

fn walk(node: &mut Value, path: &str, report: &mut NormalizeReport) {
    match node {
        Value::Object(obj) => {
            // The merged branch may itself carry a nullable union; keep
            // collapsing the same node before descending.
            while let Some(real_branch) = try_collapse_nullable_union(obj) {
                tracing::debug!(path = %path, real_branch, "collapsed nullable anyOf");
                report.record(path, real_branch);
            }

            for (key, child) in obj.iter_mut() {
                if is_container(child) {
                    walk(child, &build_path(path, &[key]), report);
                }
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter_mut().enumerate() {
                if is_container(child) {
                    walk(child, &build_path(path, &[&index.to_string()]), report);
                }
            }
        }
        _ => {}
    }
}

fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

/// Attempt a single rewrite on one object node.
///
/// On a match, `anyOf` is removed and every key of the non-null branch is
/// copied onto `node`, overwriting siblings of the same name. Returns the
/// index of the merged branch, or `None` (node unchanged) when the node does
/// not carry a two-branch nullable union.
pub fn try_collapse_nullable_union(node: &mut Map<String, Value>) -> Option<usize> {
    let Some(Value::Array(branches)) = node.get_mut(UNION_KEYWORD) else {
        return None;
    };
    let real_branch = real_branch_index(branches)?;
    let merged = branches[real_branch].take();

    node.remove(UNION_KEYWORD);
    if let Value::Object(fields) = merged {
        node.extend(fields);
    }

    Some(real_branch)
}

/// Index of the non-null branch of a `[real, null]` / `[null, real]` pair.
fn real_branch_index(branches: &[Value]) -> Option<usize> {
    let [first, second] = branches else {
        return None;
    };
    if !(first.is_object() && second.is_object()) {
        return None;
    }

    match (is_null_branch(first), is_null_branch(second)) {
        (false, true) => Some(0),
        (true, false) => Some(1),
        // Neither or both null: ambiguous, skip rather than guess.
        _ => None,
    }
}

/// True for an object branch whose `type` is exactly the string `"null"`.
///
/// A type array such as `["string", "null"]` is not a null branch.
pub fn is_null_branch(branch: &Value) -> bool {
    branch
        .as_object()
        .and_then(|obj| obj.get("type"))
        .and_then(Value::as_str)
        == Some("null")
}
