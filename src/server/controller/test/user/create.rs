use super::*;

/// Tests `POST /api/v1/users` with a valid document.
///
/// Expected: 201 with `userId`, `name` and a `createdOn` timestamp
#[tokio::test]
async fn creates_user_and_returns_document() {
    let test = TestBuilder::new().build();

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/v1/users",
        Some(json!({"userId": "1", "name": "John Doe"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["userId"], "1");
    assert_eq!(body["name"], "John Doe");
    assert!(body["createdOn"].is_string());
    assert_eq!(test.users().len(), 1);
}

/// Tests a failing insert.
///
/// Expected: 400 with the store's message
#[tokio::test]
async fn returns_bad_request_when_insert_fails() {
    let test = TestBuilder::new().failing_with("Creation failed").build();

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/v1/users",
        Some(json!({"name": "John Doe"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Creation failed"}));
}

/// Tests a body that is not a JSON object.
///
/// Expected: 400 with an `error` string and nothing stored
#[tokio::test]
async fn rejects_non_object_body() {
    let test = TestBuilder::new().build();

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/v1/users",
        Some(json!(["not", "an", "object"])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(test.users().is_empty());
}

/// Tests creating while the store is unreachable.
///
/// Expected: 503 with the generic connection message
#[tokio::test]
async fn returns_service_unavailable_when_store_unreachable() {
    let test = TestBuilder::new().unreachable().build();

    let (status, body) = send(
        test.app(),
        Method::POST,
        "/api/v1/users",
        Some(json!({"userId": "1"})),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "Connection failed"}));
}
