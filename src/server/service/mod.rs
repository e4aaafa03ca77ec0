//! Service layer between the controllers and the repositories.
//!
//! Services call the repositories and decide what their outcomes mean for the API:
//! an absent document, or an update or delete that touched nothing, becomes
//! `AppError::NotFound`.

pub mod user;
