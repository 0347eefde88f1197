use st_db::parse_str;
use st_export::*;

const DATABASE: &str = r#"{
    "rec-1": {
        "alloy": "CuSn10, \"bronze\"",
        "category": "copper",
        "T_superheat": [100, 150, 200],
        "sigma": [1.0, 0.95, 0.90],
        "sigma_stddev": [0.01, 0.02, 0.01],
        "model": {"type": "linear", "sigma_L": 1.2, "dsigma_dT": -0.0015},
        "liquidus": 1020.0,
        "experimentID": "X-1",
        "funding": "internal",
        "reference": "Lab notebook 7\nsecond line",
        "verified": true
    }
}"#;

fn read_back(text: &str) -> Vec<CsvRow> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|r| {
            let record = r.unwrap();
            CsvRow::new(&record[0], &record[1])
        })
        .collect()
}

#[test]
fn flattened_record_survives_csv_round_trip() {
    let set = parse_str(DATABASE).unwrap();
    let entry = set.get("rec-1").unwrap();
    let rows = flatten(&entry.fields);

    let text = to_csv_string(&rows).unwrap();
    assert!(text.starts_with("Key,Value\n"));
    assert_eq!(read_back(&text), rows);
}

#[test]
fn rows_follow_field_order_and_shapes() {
    let set = parse_str(DATABASE).unwrap();
    let rows = flatten(&set.get("rec-1").unwrap().fields);
    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.key.as_str(), r.value.as_str()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("Key", "Value"),
            ("alloy", "CuSn10, \"bronze\""),
            ("category", "copper"),
            ("T_superheat", "100, 150, 200"),
            ("sigma", "1.0, 0.95, 0.9"),
            ("sigma_stddev", "0.01, 0.02, 0.01"),
            ("model - type", "linear"),
            ("model - sigma_L", "1.2"),
            ("model - dsigma_dT", "-0.0015"),
            ("liquidus", "1020.0"),
            ("experimentID", "X-1"),
            ("funding", "internal"),
            ("reference", "Lab notebook 7\nsecond line"),
            ("verified", "true"),
        ]
    );
}

#[test]
fn write_csv_creates_file() {
    let set = parse_str(DATABASE).unwrap();
    let rows = flatten(&set.get("rec-1").unwrap().fields);

    let path = std::env::temp_dir().join("st_export_write_test.csv");
    let _ = std::fs::remove_file(&path);
    write_csv(&path, &rows).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(read_back(&text), rows);
}

#[test]
fn write_csv_reports_unwritable_path() {
    let path = std::env::temp_dir()
        .join("st_export_missing_dir")
        .join("nested")
        .join("out.csv");
    let _ = std::fs::remove_dir_all(std::env::temp_dir().join("st_export_missing_dir"));
    assert!(matches!(
        write_csv(&path, &[CsvRow::header()]),
        Err(ExportError::Io(_))
    ));
}
