use axum::{extract::State, http::HeaderMap, Json};
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use tracing::info;
use validator::Validate;

use super::password::verify_password;
use crate::app_state::AppState;
use crate::db::models::{Credenciales, SesionUsuario};
use crate::db::repositories::UsuarioRepository;
use crate::error::{AppError, AppResult};

/// Resolves the caller's session from the `Authorization: Bearer` header.
/// Every protected handler goes through here; authorization decisions are
/// made against this server-side context, never against client-sent ids.
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> AppResult<SesionUsuario> {
    let token = headers
        .get("authorization")
        .and_then(|valor| valor.to_str().ok())
        .and_then(|valor| valor.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Authentication("Usuario no autenticado".to_string()))?;

    let usuario_id = state.tokens.validar(token)?;

    UsuarioRepository::sesion_por_id(&state.db, usuario_id)
        .await?
        .ok_or_else(|| AppError::Authentication("Usuario no válido o inactivo".to_string()))
}

pub async fn login(
    State(state): State<AppState>,
    Json(credenciales): Json<Credenciales>,
) -> AppResult<Json<Value>> {
    credenciales.validate()?;

    let usuario = UsuarioRepository::buscar_por_username(&state.db, &credenciales.username)
        .await?
        .filter(|usuario| usuario.activo)
        .ok_or_else(|| AppError::Authentication("Credenciales inválidas".to_string()))?;

    if !verify_password(credenciales.password.expose_secret(), &usuario.password_hash) {
        return Err(AppError::Authentication("Credenciales inválidas".to_string()));
    }

    UsuarioRepository::marcar_ultimo_acceso(&state.db, usuario.id).await?;

    let sesion = UsuarioRepository::sesion_por_id(&state.db, usuario.id)
        .await?
        .ok_or_else(|| AppError::Authentication("Usuario no válido o inactivo".to_string()))?;

    let token = state.tokens.emitir(usuario.id)?;
    info!(usuario = %sesion.username, rol = ?sesion.rol, "inicio de sesión");

    Ok(Json(json!({
        "success": true,
        "token": token,
        "usuario": sesion,
    })))
}

pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Json<Value>> {
    let sesion = authenticate(&state, &headers).await?;
    Ok(Json(json!({
        "success": true,
        "usuario": sesion,
    })))
}
