use super::*;

/// Tests `DELETE /api/v1/users/{id}` for an existing account.
///
/// Verifies the success message and that the account is gone from the list.
///
/// Expected: 200 `{"message": "User deleted successfully"}`
#[tokio::test]
async fn deletes_user_and_returns_message() {
    let test = TestBuilder::new().build();
    factory::user::UserFactory::new(&test.store)
        .user_id("1")
        .build()
        .await
        .unwrap();

    let (status, body) = send(test.app(), Method::DELETE, "/api/v1/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User deleted successfully"}));

    let (_, list) = send(test.app(), Method::GET, "/api/v1/users", None).await;
    assert_eq!(list, json!([]));
}

/// Tests deleting an unknown identifier.
///
/// Expected: 404 `{"error": "User not found"}`
#[tokio::test]
async fn returns_not_found_when_nothing_deleted() {
    let test = TestBuilder::new().build();

    let (status, body) = send(test.app(), Method::DELETE, "/api/v1/users/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found());
}

/// Tests a failing delete.
///
/// Expected: 400 with the store's message
#[tokio::test]
async fn returns_bad_request_when_delete_fails() {
    let test = TestBuilder::new().failing_with("Delete failed").build();

    let (status, body) = send(test.app(), Method::DELETE, "/api/v1/users/1", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Delete failed"}));
}
