//! Structural projection of syntax trees to JSON.
//!
//! Every node struct carries a `$type` key naming its node type and
//! PascalCase keys for its fields. Absent optional children are dropped from
//! the projection; empty collections are kept. Maps are key-ordered, so the
//! textual form is stable for a given tree.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

/// Projects a tree (usually a [`Script`](crate::ast::Script)) to a JSON
/// value.
///
/// ```
/// let result = oxide_tsql::parse("SELECT 1;");
/// let value = oxide_tsql::serialize::to_value(&result.script);
///
/// assert_eq!(value["$type"], "Script");
/// let statement = &value["Batches"][0]["Statements"][0];
/// assert_eq!(statement["$type"], "SelectStatement");
/// assert!(statement.get("OptionClause").is_none());
/// ```
#[must_use]
pub fn to_value<T: Serialize + ?Sized>(node: &T) -> Value {
    match serde_json::to_value(node) {
        Ok(value) => strip_nulls(value),
        Err(error) => {
            warn!(%error, "syntax tree projection failed");
            Value::Null
        }
    }
}

/// Projects a tree to pretty-printed JSON text.
#[must_use]
pub fn to_json_string<T: Serialize + ?Sized>(node: &T) -> String {
    format!("{:#}", to_value(node))
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_nulls_are_dropped_and_empty_lists_kept() {
        let value = strip_nulls(serde_json::json!({
            "A": null,
            "B": [],
            "C": [{"D": null, "E": 1}],
        }));
        assert_eq!(value, serde_json::json!({"B": [], "C": [{"E": 1}]}));
    }

    #[test]
    fn test_script_projection() {
        let result = parse("SELECT TOP 5 name FROM dbo.t WHERE id = 1.50;\nGO 2");
        let value = to_value(&result.script);

        let batch = &value["Batches"][0];
        assert_eq!(batch["$type"], "Batch");
        assert_eq!(batch["RepeatCount"], 2);

        let query = &batch["Statements"][0]["QueryExpression"];
        assert_eq!(query["$type"], "QuerySpecification");
        assert!(query.get("GroupByClause").is_none());
        assert_eq!(query["SelectElements"].as_array().map(Vec::len), Some(1));

        let right = &query["WhereClause"]["SearchCondition"]["SecondExpression"];
        assert_eq!(right["$type"], "NumericLiteral");
        assert_eq!(right["Value"], "1.50");
        assert_eq!(right["LiteralType"], "Numeric");
    }

    #[test]
    fn test_spans_are_projected() {
        let result = parse("PRINT 'x'");
        let value = to_value(&result.script);
        let span = &value["Batches"][0]["Statements"][0]["Span"];
        assert_eq!(span["Start"], 0);
        assert_eq!(span["End"], 9);
        assert_eq!(span["Line"], 1);
    }

    #[test]
    fn test_json_text_is_stable() {
        let script = parse("DECLARE @a INT = 1; SET @a += 2;").script;
        let first = to_json_string(&script);
        let second = to_json_string(&script.clone());
        assert_eq!(first, second);
        assert!(first.starts_with("{\n"));
        assert!(first.contains("\"$type\": \"DeclareVariableStatement\""));
    }
}
