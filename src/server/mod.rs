//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the brands API: HTTP
//! endpoints, business rules, data access and infrastructure. The backend uses Axum as the
//! web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, authentication and DTO conversion
//! - **Service Layer** (`service/`) - Transactions, uniqueness and existence checks, password and token handling
//! - **Data Layer** (`data/`) - Database operations, audit stamping and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models, lookups and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//! - **Util** (`util/`) - Request extractors reporting input problems as 422
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token keys, audit policy)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route table and OpenAPI documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Extractors** reject malformed paths, queries and bodies with 422
//! 3. **Controller** authenticates the caller where required, converts DTOs to params
//! 4. **Service** opens a transaction, runs pre-checks and the write, then commits
//! 5. **Data** queries the database and converts rows to domain models
//! 6. **Controller** projects the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
