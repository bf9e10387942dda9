use axum::{middleware, routing::get, Json, Router};
use serde_json::json;
use time::OffsetDateTime;

use crate::{
    app_state::AppState,
    middleware::tracing::observability_middleware,
    modules::auth::routes::auth_routes,
    modules::informes::routes::informes_routes,
    modules::oficinas::routes::oficinas_routes,
    modules::referencia::routes::referencia_routes,
};

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", auth_routes())
        .nest("/informes", informes_routes())
        .nest("/oficinas", oficinas_routes())
        .nest("/referencia", referencia_routes());

    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(middleware::from_fn(observability_middleware))
        .with_state(state)
}

async fn hello() -> &'static str {
    "Criminalistica Backend\n"
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let db_result = sqlx::query("SELECT 1").execute(&state.db).await;

    let db_status = match db_result {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::info!("Database health check failed: {}", e);
            "unhealthy"
        }
    };

    Json(json!({
        "status": "ok",
        "timestamp": OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default(),
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "database": db_status,
        }
    }))
}
