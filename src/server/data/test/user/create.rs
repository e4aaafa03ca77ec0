use super::*;

/// Tests creating a user account.
///
/// Verifies that the stored and returned documents are the submitted fields plus a
/// `createdOn` timestamp in `YYYY-MM-DD HH:mm:ss` format.
///
/// Expected: Ok with the augmented document stored once
#[tokio::test]
async fn stores_document_with_created_on() -> Result<(), StoreError> {
    let test = TestBuilder::new().build();
    let repo = UserRepository::new(&test.connection);

    let created = repo
        .create(account(json!({"userId": "1", "name": "John Doe"})))
        .await?;

    let mut returned = created.into_document();
    let created_on = returned.remove("createdOn").unwrap();
    let created_on = created_on.as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(created_on, "%Y-%m-%d %H:%M:%S").is_ok());
    assert_eq!(created_on.len(), 19);
    assert_eq!(returned, document(json!({"userId": "1", "name": "John Doe"})));

    let stored = test.users();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["userId"], "1");
    assert_eq!(stored[0]["createdOn"], created_on);

    Ok(())
}

/// Tests that a caller-supplied `createdOn` is replaced.
///
/// Expected: Ok with a fresh timestamp
#[tokio::test]
async fn overwrites_supplied_created_on() -> Result<(), StoreError> {
    let test = TestBuilder::new().build();
    let repo = UserRepository::new(&test.connection);

    let created = repo
        .create(account(json!({"userId": "1", "createdOn": "yesterday"})))
        .await?;

    assert_ne!(created.document()["createdOn"], "yesterday");

    Ok(())
}

/// Tests that duplicate identifiers are accepted.
///
/// Expected: Ok with two documents sharing a `userId`
#[tokio::test]
async fn allows_duplicate_user_ids() -> Result<(), StoreError> {
    let test = TestBuilder::new().build();
    let repo = UserRepository::new(&test.connection);

    repo.create(account(json!({"userId": "1"}))).await?;
    repo.create(account(json!({"userId": "1"}))).await?;

    assert_eq!(test.users().len(), 2);

    Ok(())
}

/// Tests an insert failure.
///
/// Expected: Err(OperationFailed) carrying the store's message
#[tokio::test]
async fn wraps_insert_failure() {
    let test = TestBuilder::new().failing_with("Insert failed").build();
    let repo = UserRepository::new(&test.connection);

    let result = repo.create(account(json!({"userId": "1"}))).await;

    assert!(matches!(result, Err(StoreError::OperationFailed(m)) if m == "Insert failed"));
}

/// Tests creating while the store is unreachable.
///
/// Expected: Err(ConnectionFailed)
#[tokio::test]
async fn fails_when_store_unreachable() {
    let test = TestBuilder::new().unreachable().build();
    let repo = UserRepository::new(&test.connection);

    let result = repo.create(account(json!({"userId": "1"}))).await;

    assert!(matches!(result, Err(StoreError::ConnectionFailed { .. })));
}
