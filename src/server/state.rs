//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{model::audit::AuditPolicy, service::auth::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<TokenService>` shares the signing keys
/// - `AuditPolicy` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Each mutating request begins its own transaction on this pool.
    pub db: DatabaseConnection,

    /// Issues and verifies access and refresh tokens.
    pub tokens: Arc<TokenService>,

    /// Whether soft-deleted records may still be updated.
    pub audit_policy: AuditPolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service built from configuration
    /// - `audit_policy` - Update-after-delete policy
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService, audit_policy: AuditPolicy) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
            audit_policy,
        }
    }
}
