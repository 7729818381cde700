//! HTTP transport integration tests.

use serde_json::{json, Value};

use crate::support::start_memory_server;

async fn create(client: &reqwest::Client, base: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{base}/api/students"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_check() {
    let base = start_memory_server().await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn empty_list_is_200() {
    let base = start_memory_server().await;
    let resp = reqwest::get(format!("{base}/api/students")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn full_lifecycle() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    // Create
    let resp = create(
        &client,
        &base,
        json!({ "name": "Nguyễn Văn A", "age": 18, "class": "12A1" }),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(
        created,
        json!({ "id": id, "name": "Nguyễn Văn A", "age": 18, "class": "12A1" })
    );

    // List holds exactly that record
    let list: Value = client
        .get(format!("{base}/api/students"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([created]));

    // Get by id
    let resp = client
        .get(format!("{base}/api/students/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);

    // Partial update
    let resp = client
        .put(format!("{base}/api/students/{id}"))
        .json(&json!({ "age": 19 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(
        updated,
        json!({ "id": id, "name": "Nguyễn Văn A", "age": 19, "class": "12A1" })
    );

    // Delete
    let resp = client
        .delete(format!("{base}/api/students/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Deleted student", "id": id }));

    // Gone
    let resp = client
        .get(format!("{base}/api/students/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_missing_name_is_400_and_not_persisted() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let resp = create(&client, &base, json!({ "age": 18, "class": "12A1" })).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "name is required" }));

    let list: Value = reqwest::get(format!("{base}/api/students"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn malformed_json_is_400_with_error_body() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/students"))
        .header("content-type", "application/json")
        .body("{ \"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn update_unknown_id_is_404_and_creates_nothing() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/api/students/does-not-exist"))
        .json(&json!({ "name": "X", "age": 1, "class": "1A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let list: Value = reqwest::get(format!("{base}/api/students"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn invalid_update_is_400() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let created: Value = create(
        &client,
        &base,
        json!({ "name": "Trần Thị B", "age": 17, "class": "11B2" }),
    )
    .await
    .json()
    .await
    .unwrap();
    let id = created["id"].as_str().unwrap();

    let resp = client
        .put(format!("{base}/api/students/{id}"))
        .json(&json!({ "age": -1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn second_delete_is_404() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let created: Value = create(
        &client,
        &base,
        json!({ "name": "Lê Văn C", "age": 16, "class": "10C3" }),
    )
    .await
    .json()
    .await
    .unwrap();
    let id = created["id"].as_str().unwrap();

    let first = client
        .delete(format!("{base}/api/students/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);

    let second = client
        .delete(format!("{base}/api/students/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 404);
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .request(reqwest::Method::OPTIONS, format!("{base}/api/students"))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    assert!(resp.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let base = start_memory_server().await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..16 {
        let client = client.clone();
        let base = base.clone();
        tasks.push(tokio::spawn(async move {
            let resp = create(
                &client,
                &base,
                json!({ "name": format!("Học sinh {i}"), "age": 10 + i, "class": "9A" }),
            )
            .await;
            assert_eq!(resp.status(), 201);
            let body: Value = resp.json().await.unwrap();
            body["id"].as_str().unwrap().to_string()
        }));
    }

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}
