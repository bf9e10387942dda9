use sqlx::PgPool;
use std::sync::Arc;

use crate::config;
use crate::modules::auth::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub env: config::Config,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(db: PgPool, env: config::Config) -> Self {
        let tokens = Arc::new(TokenService::new(
            env.auth.token_secret.clone(),
            env.auth.token_ttl_minutes,
        ));
        Self { db, env, tokens }
    }
}
