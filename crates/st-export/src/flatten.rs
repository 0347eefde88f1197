//! Record → `(key, value)` rows.

use st_db::{FieldValue, RecordField, ScalarValue};

pub const HEADER_KEY: &str = "Key";
pub const HEADER_VALUE: &str = "Value";

/// Separator between sequence items inside one cell.
pub const SEQUENCE_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub key: String,
    pub value: String,
}

impl CsvRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn header() -> Self {
        Self::new(HEADER_KEY, HEADER_VALUE)
    }
}

/// Header row followed by one row per scalar/sequence field and one row per
/// nested key, in field order.
pub fn flatten(fields: &[RecordField]) -> Vec<CsvRow> {
    let mut rows = Vec::with_capacity(fields.len() + 4);
    rows.push(CsvRow::header());

    for field in fields {
        match &field.value {
            FieldValue::Scalar(value) => rows.push(CsvRow::new(&field.name, value.to_string())),
            FieldValue::Sequence(items) => {
                rows.push(CsvRow::new(&field.name, join_sequence(items)));
            }
            FieldValue::NestedMap(entries) => {
                for (sub_key, value) in entries {
                    rows.push(CsvRow::new(
                        format!("{} - {}", field.name, sub_key),
                        value.to_string(),
                    ));
                }
            }
        }
    }

    rows
}

fn join_sequence(items: &[ScalarValue]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SEQUENCE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    fn number(v: f64) -> ScalarValue {
        ScalarValue::Number(Number::from_f64(v).unwrap())
    }

    #[test]
    fn header_comes_first() {
        assert_eq!(flatten(&[]), vec![CsvRow::new("Key", "Value")]);
    }

    #[test]
    fn each_shape_flattens() {
        let fields = vec![
            RecordField {
                name: "alloy".to_string(),
                value: FieldValue::Scalar(ScalarValue::Text("CuSn10".to_string())),
            },
            RecordField {
                name: "sigma".to_string(),
                value: FieldValue::Sequence(vec![number(1.0), number(0.95), number(0.9)]),
            },
            RecordField {
                name: "model".to_string(),
                value: FieldValue::NestedMap(vec![
                    ("type".to_string(), ScalarValue::Text("linear".to_string())),
                    ("sigma_L".to_string(), number(1.2)),
                ]),
            },
        ];

        assert_eq!(
            flatten(&fields),
            vec![
                CsvRow::header(),
                CsvRow::new("alloy", "CuSn10"),
                CsvRow::new("sigma", "1.0, 0.95, 0.9"),
                CsvRow::new("model - type", "linear"),
                CsvRow::new("model - sigma_L", "1.2"),
            ]
        );
    }

    #[test]
    fn empty_sequence_is_an_empty_cell() {
        let fields = vec![RecordField {
            name: "T_superheat".to_string(),
            value: FieldValue::Sequence(vec![]),
        }];
        assert_eq!(flatten(&fields)[1], CsvRow::new("T_superheat", ""));
    }

    #[test]
    fn empty_nested_map_emits_no_rows() {
        let fields = vec![RecordField {
            name: "model".to_string(),
            value: FieldValue::NestedMap(vec![]),
        }];
        assert_eq!(flatten(&fields).len(), 1);
    }
}
