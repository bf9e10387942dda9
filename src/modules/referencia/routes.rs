use axum::{routing::get, Router};

use super::handlers::{ciudades, departamentos_geograficos, tipos_hecho};
use crate::app_state::AppState;

pub fn referencia_routes() -> Router<AppState> {
    Router::new()
        .route("/departamentos", get(departamentos_geograficos))
        .route("/departamentos/{nombre}/ciudades", get(ciudades))
        .route("/tipos-hecho", get(tipos_hecho))
}
