use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::db::repositories::OficinaRepository;
use crate::error::{AppError, AppResult};
use crate::modules::auth::authenticate;

#[derive(Debug, Deserialize)]
pub struct ParametrosOficinas {
    codigo: Option<String>,
}

/// GET /api/oficinas — active offices, optionally a single one by code.
pub async fn listar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ParametrosOficinas>,
) -> AppResult<Json<Value>> {
    authenticate(&state, &headers).await?;

    let oficinas = match params.codigo.as_deref() {
        Some(codigo) => {
            let oficina = OficinaRepository::buscar_por_codigo(&state.db, codigo)
                .await?
                .ok_or_else(|| AppError::NotFound("Oficina no encontrada".to_string()))?;
            vec![oficina]
        }
        None => OficinaRepository::listar_activas(&state.db).await?,
    };

    Ok(Json(json!({
        "success": true,
        "oficinas": oficinas,
    })))
}

/// GET /api/oficinas/{id}/departamentos — departments available to an office.
pub async fn departamentos(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(oficina_id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    authenticate(&state, &headers).await?;

    OficinaRepository::buscar_por_id(&state.db, oficina_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Oficina no encontrada".to_string()))?;

    let departamentos = OficinaRepository::departamentos_activos(&state.db, oficina_id).await?;

    Ok(Json(json!({
        "success": true,
        "departamentos": departamentos,
    })))
}
