use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{cambiar_estado, crear, detalle, listar, parrafo};
use crate::app_state::AppState;

pub fn informes_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(listar).post(crear))
        .route("/{id}", get(detalle))
        .route("/{id}/estado", patch(cambiar_estado))
        .route("/{id}/parrafo", get(parrafo))
}
