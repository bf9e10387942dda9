use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{login, me};
use crate::app_state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
}
