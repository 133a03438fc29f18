use std::io::Write as _;
use std::path::PathBuf;

use super::{create_test_profiles, create_test_storage};
use crate::{LoadError, load_csv, read_profiles};

const HEADER: &str =
    "sample_id,latitude,longitude,depth_m,temperature_C,salinity_psu,density_kg_m3,current_speed_m_s";

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn parses_records_by_header_name() {
    let csv = "depth_m,sample_id,latitude,longitude,temperature_C,salinity_psu,density_kg_m3,current_speed_m_s,float_id\n\
               120.5,1,10.0,20.0,18.2,35.1,1025.9,0.31,A7\n";
    let rows = read_profiles(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sample_id, 1);
    assert_eq!(rows[0].depth_m, 120.5);
    assert_eq!(rows[0].temperature_c, 18.2);
}

#[test]
fn header_only_file_yields_no_rows() {
    assert!(read_profiles(format!("{HEADER}\n").as_bytes()).unwrap().is_empty());
}

#[test]
fn missing_column_is_reported_by_name() {
    let csv = "sample_id,latitude,longitude,depth_m\n1,0,0,0\n";
    match read_profiles(csv.as_bytes()) {
        Err(LoadError::MissingColumns(cols)) => {
            assert!(cols.contains("temperature_C"));
            assert!(cols.contains("current_speed_m_s"));
        },
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn ragged_record_is_schema_error() {
    let csv = format!("{HEADER}\n1,0,0,10,1,1,1,1\n2,0,0,10,1,1\n");
    match read_profiles(csv.as_bytes()) {
        Err(LoadError::Schema { line, expected, found }) => {
            assert_eq!(line, 3);
            assert_eq!(expected, 8);
            assert_eq!(found, 6);
        },
        other => panic!("expected Schema, got {other:?}"),
    }
}

#[test]
fn non_numeric_value_is_input_error() {
    let csv = format!("{HEADER}\n1,north,0,10,1,1,1,1\n");
    let err = read_profiles(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)), "got {err:?}");
    assert!(err.is_input_error());
}

#[test]
fn load_replaces_profiles_and_reports_summary() {
    let (storage, temp_dir) = create_test_storage();
    storage.replace_profiles(&create_test_profiles()).unwrap();
    storage.insert_annotation(1, "alice", "before reload").unwrap();

    let path = write_csv(
        &temp_dir,
        "argo.csv",
        &format!("{HEADER}\n100,10,20,100,18,35,1025,0.3\n101,-5,-40,900,4,34.7,1027.8,0.05\n"),
    );
    let summary = load_csv(&storage, &path).unwrap();

    assert_eq!(summary.profiles, 2);
    assert_eq!(summary.annotations_preserved, 1);
    assert_eq!(summary.db_path, temp_dir.path().join("test.sqlite"));
    let bounds = storage.profile_bounds().unwrap();
    assert_eq!((bounds.min_sample_id, bounds.max_sample_id), (Some(100), Some(101)));
    assert_eq!(storage.query_annotations(1).unwrap().len(), 1);
}

#[test]
fn failed_load_leaves_previous_table_intact() {
    let (storage, temp_dir) = create_test_storage();
    storage.replace_profiles(&create_test_profiles()).unwrap();

    let out_of_range = write_csv(
        &temp_dir,
        "bad.csv",
        &format!("{HEADER}\n1,10,20,100,18,35,1025,0.3\n2,95,20,100,18,35,1025,0.3\n"),
    );
    let err = load_csv(&storage, &out_of_range).unwrap_err();
    assert!(matches!(err, LoadError::Validation(ref msg) if msg.contains("latitude")), "got {err:?}");

    let duplicated = write_csv(
        &temp_dir,
        "dupes.csv",
        &format!("{HEADER}\n1,10,20,100,18,35,1025,0.3\n1,11,21,10,18,35,1025,0.3\n"),
    );
    assert!(matches!(load_csv(&storage, &duplicated), Err(LoadError::Validation(_))));

    assert_eq!(storage.profile_bounds().unwrap().count, 10);
}

#[test]
fn missing_file_is_open_error() {
    let (storage, temp_dir) = create_test_storage();
    let err = load_csv(&storage, &temp_dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.is_input_error());
}
