//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Transactions and orchestration over repositories
//! - **Data Layer** (`data/`) - Database queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state holding the connection pool
//! - **Startup** (`startup`) - Tracing, database connection and migrations
//! - **Router** (`router`) - Route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** trims trailing slashes and routes to a controller
//! 2. **Controller** checks required data, converts DTOs to params, calls service
//! 3. **Service** executes the operation, inside a transaction when it writes more than once
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

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
