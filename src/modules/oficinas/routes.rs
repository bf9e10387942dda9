use axum::{routing::get, Router};

use super::handlers::{departamentos, listar};
use crate::app_state::AppState;

pub fn oficinas_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(listar))
        .route("/{id}/departamentos", get(departamentos))
}
