use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::UserDocumentDto,
    },
    server::{
        error::AppError, model::user::UserAccount, service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Returns a logger for failed requests. Not-found outcomes are expected and skipped.
fn log_failure(action: &'static str) -> impl Fn(&AppError) {
    move |err| {
        if !matches!(err, AppError::NotFound(_)) {
            tracing::debug!("Error {}: {}", action, err);
        }
    }
}

/// Create a new user account.
///
/// Stores the submitted document with an added `createdOn` timestamp. The identifier
/// field `userId` is expected in the body but not enforced.
///
/// # Returns
/// - `201 Created` - The stored document including `createdOn`
/// - `400 Bad Request` - Body is not a JSON object, or the insert failed
/// - `503 Service Unavailable` - The document store could not be reached
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UserDocumentDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDocumentDto),
        (status = 400, description = "Invalid body or failed insert", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserDocumentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("insert new user");

    let log = log_failure("creating user");
    let Json(payload) = payload.map_err(AppError::from).inspect_err(&log)?;

    let user = UserService::new(&state.connection)
        .create(UserAccount::from_dto(payload))
        .await
        .inspect_err(&log)?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Get all user accounts.
///
/// # Returns
/// - `200 OK` - Every stored user document, in no particular order
/// - `400 Bad Request` - The query failed
/// - `503 Service Unavailable` - The document store could not be reached
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDocumentDto>),
        (status = 400, description = "Failed query", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("get all users");

    let users = UserService::new(&state.connection)
        .get_all()
        .await
        .inspect_err(log_failure("retrieving users"))?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get a user account by its `userId`.
///
/// # Returns
/// - `200 OK` - The matching document
/// - `404 Not Found` - No document has that `userId`
/// - `400 Bad Request` - The query failed
/// - `503 Service Unavailable` - The document store could not be reached
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "Application user identifier (`userId`)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDocumentDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 400, description = "Failed query", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("get user by id");

    let user = UserService::new(&state.connection)
        .get_by_id(&id)
        .await
        .inspect_err(log_failure("retrieving user"))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user account by its `userId`.
///
/// Merges the submitted fields into the stored document, creating it when no document
/// has that `userId`. Fields not present in the body are left unchanged.
///
/// # Returns
/// - `200 OK` - The submitted document
/// - `404 Not Found` - The update neither modified nor created a document
/// - `400 Bad Request` - Body is not a JSON object, or the update failed
/// - `503 Service Unavailable` - The document store could not be reached
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "Application user identifier (`userId`)")
    ),
    request_body = UserDocumentDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDocumentDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 400, description = "Invalid body or failed update", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserDocumentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("update user by id");

    let log = log_failure("updating user");
    let Json(payload) = payload.map_err(AppError::from).inspect_err(&log)?;

    let user = UserService::new(&state.connection)
        .update(&id, UserAccount::from_dto(payload))
        .await
        .inspect_err(&log)?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user account by its `userId`.
///
/// # Returns
/// - `200 OK` - `{"message": "User deleted successfully"}`
/// - `404 Not Found` - No document has that `userId`
/// - `400 Bad Request` - The delete failed
/// - `503 Service Unavailable` - The document store could not be reached
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "Application user identifier (`userId`)")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 400, description = "Failed delete", body = ErrorDto),
        (status = 503, description = "Document store unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("delete user by id {}", id);

    UserService::new(&state.connection)
        .delete(&id)
        .await
        .inspect_err(log_failure("deleting user"))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User deleted successfully".to_string(),
        }),
    ))
}
