// Integration tests for the execution result API

mod common {
    pub mod helper;
}

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::helper;

#[tokio::test]
async fn test_record_and_list_execution_results() {
    let state = helper::test_state().await;
    let app = helper::app(&state);

    let (status, body) = helper::send(
        &app,
        Method::POST,
        "/api/execution",
        None,
        Some(&json!({ "test_case_id": 1, "result": "pass" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["test_case_id"], 1);
    assert_eq!(body["result"], "pass");

    let (status, body) = helper::send(&app, Method::GET, "/api/execution/1", None, None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("Expected an array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["test_case_id"], 1);
    assert_eq!(items[0]["result"], "pass");
    assert!(items[0]["execution_time"].as_i64().is_some());
}

#[tokio::test]
async fn test_results_are_scoped_to_their_test_case() {
    let state = helper::test_state().await;
    let app = helper::app(&state);

    for (id, outcome) in [(1, "pass"), (1, "fail"), (2, "pass")] {
        let (status, _) = helper::send(
            &app,
            Method::POST,
            "/api/execution",
            None,
            Some(&json!({ "test_case_id": id, "result": outcome })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = helper::send(&app, Method::GET, "/api/execution/1", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["result"], "pass");
    assert_eq!(items[1]["result"], "fail");
}

#[tokio::test]
async fn test_listing_an_unused_id_yields_an_empty_list() {
    let state = helper::test_state().await;
    let app = helper::app(&state);

    let (status, body) = helper::send(&app, Method::GET, "/api/execution/42", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_non_integer_test_case_id_in_path_is_rejected() {
    let state = helper::test_state().await;
    let app = helper::app(&state);

    for uri in ["/api/execution/abc", "/api/execution/-1"] {
        let (status, _) = helper::send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
    }
}

#[tokio::test]
async fn test_invalid_execution_payloads_are_rejected() {
    let state = helper::test_state().await;
    let app = helper::app(&state);

    for payload in [
        json!({}),
        json!({ "result": "pass" }),
        json!({ "test_case_id": 1 }),
        json!({ "test_case_id": 0, "result": "pass" }),
        json!({ "test_case_id": "abc", "result": "pass" }),
        json!({ "test_case_id": 1, "result": "" }),
        json!({ "test_case_id": 1, "result": 7 }),
    ] {
        let (status, body) = helper::send(
            &app,
            Method::POST,
            "/api/execution",
            None,
            Some(&payload),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert!(body["error"].is_string());
    }

    let results = casebook::store::executions::list_for_test_case(&state.pool, 1)
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_string_test_case_ids_are_accepted() {
    let state = helper::test_state().await;
    let app = helper::app(&state);

    let (status, body) = helper::send(
        &app,
        Method::POST,
        "/api/execution",
        None,
        Some(&json!({ "test_case_id": "7", "result": "fail" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["test_case_id"], 7);
}
