//! Shape-tagged copy of a record's raw fields, in document order.
//!
//! Built once at parse time so consumers (the CSV exporter) can match on the
//! field shape instead of inspecting JSON values.

use serde_json::{Map, Number, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(ScalarValue),
    Sequence(Vec<ScalarValue>),
    NestedMap(Vec<(String, ScalarValue)>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Text(String),
    Number(Number),
    Bool(bool),
    Null,
    /// A container nested below the first level, kept as compact JSON.
    Json(String),
}

impl ScalarValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => ScalarValue::Text(s.clone()),
            Value::Number(n) => ScalarValue::Number(n.clone()),
            Value::Bool(b) => ScalarValue::Bool(*b),
            Value::Null => ScalarValue::Null,
            Value::Array(_) | Value::Object(_) => ScalarValue::Json(value.to_string()),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) => f.write_str(s),
            ScalarValue::Number(n) => write!(f, "{n}"),
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::Null => Ok(()),
            ScalarValue::Json(s) => f.write_str(s),
        }
    }
}

impl FieldValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => {
                FieldValue::Sequence(items.iter().map(ScalarValue::from_json).collect())
            }
            Value::Object(map) => FieldValue::NestedMap(
                map.iter()
                    .map(|(key, v)| (key.clone(), ScalarValue::from_json(v)))
                    .collect(),
            ),
            other => FieldValue::Scalar(ScalarValue::from_json(other)),
        }
    }
}

pub fn capture_fields(object: &Map<String, Value>) -> Vec<RecordField> {
    object
        .iter()
        .map(|(name, value)| RecordField {
            name: name.clone(),
            value: FieldValue::from_json(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shapes_are_tagged() {
        assert_eq!(
            FieldValue::from_json(&json!("Al-Si")),
            FieldValue::Scalar(ScalarValue::Text("Al-Si".to_string()))
        );
        assert!(matches!(
            FieldValue::from_json(&json!([1.0, 2.0])),
            FieldValue::Sequence(ref items) if items.len() == 2
        ));
        assert!(matches!(
            FieldValue::from_json(&json!({"type": "linear"})),
            FieldValue::NestedMap(ref entries) if entries[0].0 == "type"
        ));
    }

    #[test]
    fn scalar_display_keeps_number_text() {
        let values = [json!(100), json!(1.0), json!(-0.0015), json!(true), json!(null)];
        let rendered: Vec<String> = values
            .iter()
            .map(|v| ScalarValue::from_json(v).to_string())
            .collect();
        assert_eq!(rendered, vec!["100", "1.0", "-0.0015", "true", ""]);
    }

    #[test]
    fn deep_containers_render_as_json() {
        let value = ScalarValue::from_json(&json!({"a": [1, 2]}));
        assert_eq!(value.to_string(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn capture_keeps_document_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let Value::Object(object) = value else {
            panic!("expected object");
        };
        let names: Vec<String> = capture_fields(&object)
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
