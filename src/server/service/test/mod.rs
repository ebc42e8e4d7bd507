use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::server::{model::audit::AuditPolicy, service::auth::token::TokenService};

mod category;

fn strict() -> AuditPolicy {
    AuditPolicy {
        allow_update_after_delete: false,
    }
}

fn lenient() -> AuditPolicy {
    AuditPolicy {
        allow_update_after_delete: true,
    }
}

fn tokens() -> TokenService {
    TokenService::new(
        Algorithm::HS256,
        "access-secret",
        "refresh-secret",
        Duration::minutes(30),
        Duration::minutes(60),
    )
}
