use axum::{extract::Path, Json};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::reference::{incident_types, paraguay};

/// GET /api/referencia/departamentos — geographic departments of Paraguay.
pub async fn departamentos_geograficos() -> Json<Value> {
    Json(json!({
        "success": true,
        "departamentos": paraguay::nombres_departamentos(),
    }))
}

/// GET /api/referencia/departamentos/{nombre}/ciudades
pub async fn ciudades(Path(nombre): Path<String>) -> AppResult<Json<Value>> {
    let ciudades = paraguay::ciudades_de(&nombre)
        .ok_or_else(|| AppError::NotFound("Departamento geográfico no encontrado".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "departamento": nombre,
        "ciudades": ciudades,
    })))
}

/// GET /api/referencia/tipos-hecho — incident-type catalog for the form.
pub async fn tipos_hecho() -> Json<Value> {
    let tipos: Vec<Value> = incident_types::TIPOS_HECHO
        .iter()
        .map(|tipo| {
            json!({
                "valor": tipo.valor,
                "etiqueta": tipo.etiqueta,
            })
        })
        .collect();

    Json(json!({
        "success": true,
        "tipos": tipos,
        "otro": incident_types::TIPO_HECHO_OTRO,
    }))
}
