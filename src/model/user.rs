use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// User account document as sent and received over the API.
///
/// The document is free-form: apart from the `userId` lookup key and the
/// `createdOn` timestamp added at creation, every field is supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(
    value_type = Object,
    example = json!({"userId": "1", "name": "John Doe", "createdOn": "2024-05-01 09:30:00"})
)]
pub struct UserDocumentDto(pub Map<String, Value>);
