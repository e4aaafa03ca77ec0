//! HTTP request handlers.
//!
//! Controllers extract path parameters and request bodies, call the service layer, and
//! convert domain models into DTOs. Errors propagate as `AppError`, whose `IntoResponse`
//! implementation produces the JSON error body.

pub mod user;

#[cfg(test)]
mod test;
