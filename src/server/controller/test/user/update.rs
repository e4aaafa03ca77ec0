use super::*;

/// Tests `PUT /api/v1/users/{id}` on an existing account.
///
/// Verifies the response echoes the submitted body while the store holds the merged
/// document.
///
/// Expected: 200 with the submitted document
#[tokio::test]
async fn updates_user_and_echoes_submitted_document() {
    let test = TestBuilder::new().build();
    factory::user::UserFactory::new(&test.store)
        .user_id("1")
        .field("email", "john@example.com")
        .build()
        .await
        .unwrap();
    let submitted = json!({"userId": "1", "name": "John Doe Updated"});

    let (status, body) = send(
        test.app(),
        Method::PUT,
        "/api/v1/users/1",
        Some(submitted.clone()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, submitted);

    let stored = test.users();
    assert_eq!(stored[0]["name"], "John Doe Updated");
    assert_eq!(stored[0]["email"], "john@example.com");
}

/// Tests updating an identifier with no document.
///
/// Expected: 200 and a new document created by upsert
#[tokio::test]
async fn upserts_missing_user() {
    let test = TestBuilder::new().build();

    let (status, body) = send(
        test.app(),
        Method::PUT,
        "/api/v1/users/5",
        Some(json!({"name": "Created By Update"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Created By Update"}));
    assert_eq!(test.users()[0]["userId"], "5");
}

/// Tests an update that neither modifies nor inserts.
///
/// Expected: 404 `{"error": "User not found"}`
#[tokio::test]
async fn returns_not_found_when_nothing_changes() {
    let test = TestBuilder::new().build();
    factory::user::UserFactory::new(&test.store)
        .user_id("1")
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        test.app(),
        Method::PUT,
        "/api/v1/users/1",
        Some(json!({"name": "John Doe"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

/// Tests a failing update.
///
/// Expected: 400 with the store's message
#[tokio::test]
async fn returns_bad_request_when_update_fails() {
    let test = TestBuilder::new().failing_with("Update failed").build();

    let (status, body) = send(
        test.app(),
        Method::PUT,
        "/api/v1/users/1",
        Some(json!({"name": "John Doe Updated"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Update failed"}));
}
