//! Server-side API backend and data access.
//!
//! This module contains the complete backend for the admin application: the HTTP
//! endpoints for user account management, the data access layer over the document
//! store, and the infrastructure needed to start the service. The backend uses Axum as
//! the web framework, the MongoDB driver for persistence and utoipa for generated API
//! documentation.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Interprets data layer outcomes as API results
//! - **Data Layer** (`data/`) - Document operations and the shared store connection
//! - **Model Layer** (`model/`) - Domain models used between the layers
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the connection manager)
//! - **Startup** (`startup`) - Logging, store connector and HTTP app assembly
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts the path and body, calls the service
//! 3. **Service** calls the repository and turns empty outcomes into `NotFound`
//! 4. **Data** obtains the cached store handle and runs the document operation
//! 5. **Controller** converts the result to a DTO, or the error to a JSON error body

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
