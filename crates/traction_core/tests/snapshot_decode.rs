use std::io::Write;

use traction_core::{decode_snapshot, load_snapshot_file, SnapshotError};

#[test]
fn snapshot_file_round_trips_through_the_boundary() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file creates");
    write!(
        file,
        r#"{{
            "projects": [{{
                "id": "11111111-2222-4333-8444-555555555555",
                "title": "Quarterly review",
                "status": "Not Started",
                "priority": "Medium",
                "dueDate": "2024-09-30",
                "createdAt": "2024-07-01T09:00:00Z"
            }}],
            "tasks": []
        }}"#
    )
    .expect("payload writes");

    let snapshot = load_snapshot_file(file.path()).expect("file decodes");
    assert_eq!(snapshot.projects.len(), 1);
    assert_eq!(snapshot.projects[0].title, "Quarterly review");
    assert_eq!(
        snapshot.projects[0].due_date.map(|d| d.to_string()),
        Some("2024-09-30".to_string())
    );
}

#[test]
fn missing_file_reports_the_path() {
    let err = load_snapshot_file("/nonexistent/traction-snapshot.json").unwrap_err();
    match &err {
        SnapshotError::Io { path, .. } => {
            assert!(path.to_string_lossy().contains("traction-snapshot"));
        }
        other => panic!("expected Io error, got {other}"),
    }
    assert!(err.to_string().contains("cannot read snapshot file"));
}

#[test]
fn decode_rejects_non_object_payloads() {
    assert!(decode_snapshot("[1, 2, 3]").is_err());
    assert!(decode_snapshot("").is_err());
}

#[test]
fn unparseable_dates_collapse_to_unset() {
    let snapshot = decode_snapshot(
        r#"{
            "tasks": [{
                "id": "21111111-2222-4333-8444-555555555555",
                "title": "Fuzzy dates",
                "dueDate": "sometime soon",
                "startDate": "2024-05-01"
            }]
        }"#,
    )
    .expect("payload decodes");

    assert_eq!(snapshot.tasks[0].due_date, None);
    assert_eq!(
        snapshot.tasks[0].start_date.map(|d| d.to_string()),
        Some("2024-05-01".to_string())
    );
}
