//! File-backed store behind the HTTP service.

use serde_json::{json, Value};
use student_records::model::StoreBackend;

use crate::support::start_server;

#[tokio::test]
async fn records_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("file://{}", dir.path().join("students.json").display());
    let client = reqwest::Client::new();

    let base = start_server(StoreBackend::connect(&url).unwrap()).await;
    let created: Value = client
        .post(format!("{base}/api/students"))
        .json(&json!({ "name": "Phạm Minh D", "age": 15, "class": "9A2" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // A second server over the same file sees the record.
    let restarted = start_server(StoreBackend::connect(&url).unwrap()).await;
    let list: Value = client
        .get(format!("{restarted}/api/students"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([created]));
}

#[tokio::test]
async fn file_backed_writes_round_trip_over_http() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("file://{}", dir.path().join("students.json").display());
    let client = reqwest::Client::new();
    let base = start_server(StoreBackend::connect(&url).unwrap()).await;

    let created: Value = client
        .post(format!("{base}/api/students"))
        .json(&json!({ "name": "  Võ Thị E ", "age": "14", "class": "8B1" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["name"], "Võ Thị E");
    let id = created["id"].as_str().unwrap();

    let resp = client
        .put(format!("{base}/api/students/{id}"))
        .json(&json!({ "age": 15 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .delete(format!("{base}/api/students/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let restarted = start_server(StoreBackend::connect(&url).unwrap()).await;
    let list: Value = reqwest::get(format!("{restarted}/api/students"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([]));
}

#[test]
fn unsupported_scheme_fails_to_connect() {
    assert!(StoreBackend::connect("mongodb://localhost:27017/student_db").is_err());
}
