use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{CambioEstado, EstadoInforme, Informe, NuevoInforme};
use crate::db::repositories::{
    FiltrosInforme, InformeRepository, OficinaRepository, UsuarioRepository,
};
use crate::domain::{narrative, numbering, policy, workflow};
use crate::error::{AppError, AppResult};
use crate::modules::auth::authenticate;
use crate::reference::{incident_types, paraguay};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParametrosListado {
    departamento_id: Option<Uuid>,
    oficina_id: Option<Uuid>,
    estado: Option<EstadoInforme>,
    limit: Option<i64>,
    offset: Option<i64>,
}

/// GET /api/informes — list visible reports, newest first.
pub async fn listar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ParametrosListado>,
) -> AppResult<Json<Value>> {
    let sesion = authenticate(&state, &headers).await?;

    // The role scope always applies first; query filters narrow within it.
    let alcance = policy::alcance_visibilidad(&sesion);
    let filtros = FiltrosInforme {
        departamento_id: params.departamento_id,
        oficina_id: params.oficina_id,
        estado: params.estado,
        limit: params.limit.unwrap_or(50).clamp(1, 200),
        offset: params.offset.unwrap_or(0).max(0),
    };

    let (informes, total) = InformeRepository::listar(&state.db, &alcance, &filtros).await?;

    Ok(Json(json!({
        "success": true,
        "informes": informes,
        "pagination": {
            "total": total,
            "limit": filtros.limit,
            "offset": filtros.offset,
            "has_more": filtros.offset + filtros.limit < total,
        }
    })))
}

/// POST /api/informes — create a report in BORRADOR, without a number.
pub async fn crear(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(mut datos): Json<NuevoInforme>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let sesion = authenticate(&state, &headers).await?;

    datos.validate()?;
    if !workflow::hora_valida(&datos.hora_recepcion) {
        return Err(AppError::Validation(
            "Formato de hora inválido (HH:MM)".to_string(),
        ));
    }

    let Some(ciudades) = paraguay::ciudades_de(&datos.departamento_comisaria) else {
        return Err(AppError::Validation(
            "Departamento geográfico de la comisaría desconocido".to_string(),
        ));
    };
    if !ciudades.iter().any(|ciudad| *ciudad == datos.ciudad_comisaria) {
        return Err(AppError::Validation(
            "Ciudad de la comisaría desconocida para ese departamento".to_string(),
        ));
    }

    // Catalog values get the SUPUESTO prefix; "otro" free text passes as-is.
    datos.tipo_hecho = incident_types::normalizar_tipo_hecho(&datos.tipo_hecho);
    if datos
        .comisaria_texto_completo
        .as_deref()
        .map_or(true, |texto| texto.trim().is_empty())
    {
        datos.comisaria_texto_completo = Some(narrative::texto_comisaria(
            &datos.categoria_comisaria,
            &datos.numero_comisaria,
            &datos.departamento_comisaria,
            &datos.ciudad_comisaria,
        ));
    }

    if !policy::puede_crear_informe(sesion.rol, sesion.departamento_id, datos.departamento_id) {
        return Err(AppError::Authorization(
            "No tiene permisos para crear informes en este departamento".to_string(),
        ));
    }

    // Only lifecycle entry states can be requested at creation.
    if let Some(estado) = datos.estado {
        if !matches!(estado, EstadoInforme::Borrador | EstadoInforme::EnRevision) {
            return Err(AppError::Validation(
                "Un informe nuevo solo puede crearse en BORRADOR o EN_REVISION".to_string(),
            ));
        }
    }

    OficinaRepository::buscar_departamento(&state.db, datos.departamento_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Departamento no encontrado".to_string()))?;
    OficinaRepository::buscar_por_id(&state.db, datos.oficina_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Oficina no encontrada".to_string()))?;
    if let Some(asignado_id) = datos.usuario_asignado_id {
        if !UsuarioRepository::existe_activo(&state.db, asignado_id).await? {
            return Err(AppError::Validation(
                "El usuario asignado no existe o está inactivo".to_string(),
            ));
        }
    }

    let informe = InformeRepository::crear(&state.db, sesion.id, &datos).await?;
    info!(informe = %informe.id, usuario = %sesion.username, "informe creado");

    let resumen = InformeRepository::buscar_resumen(&state.db, informe.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "informe": resumen,
        })),
    ))
}

/// GET /api/informes/{id}
pub async fn detalle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(informe_id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    let sesion = authenticate(&state, &headers).await?;

    let informe = InformeRepository::buscar_resumen(&state.db, informe_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Informe no encontrado".to_string()))?;

    if !policy::puede_ver_informe(
        &sesion,
        informe.usuario_creador_id,
        informe.usuario_asignado_id,
        informe.departamento_id,
        informe.oficina_id,
    ) {
        return Err(AppError::Authorization(
            "No tiene permisos para ver este informe".to_string(),
        ));
    }

    Ok(Json(json!({
        "success": true,
        "informe": informe,
    })))
}

/// PATCH /api/informes/{id}/estado — drive the workflow; approving assigns
/// the report number as part of the same operation.
pub async fn cambiar_estado(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(informe_id): Path<Uuid>,
    Json(cambio): Json<CambioEstado>,
) -> AppResult<Json<Value>> {
    let sesion = authenticate(&state, &headers).await?;

    if !policy::puede_cambiar_estado(sesion.rol) {
        return Err(AppError::Authorization(
            "No tiene permisos para cambiar el estado de informes".to_string(),
        ));
    }

    let informe = InformeRepository::buscar_por_id(&state.db, informe_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Informe no encontrado".to_string()))?;

    if !policy::puede_ver_informe(
        &sesion,
        informe.usuario_creador_id,
        informe.usuario_asignado_id,
        informe.departamento_id,
        informe.oficina_id,
    ) {
        return Err(AppError::Authorization(
            "No tiene permisos para ver este informe".to_string(),
        ));
    }

    workflow::validar_transicion(&informe, cambio.estado)?;

    let actualizado = if workflow::requiere_numeracion(&informe, cambio.estado) {
        let departamento = OficinaRepository::buscar_departamento(&state.db, informe.departamento_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Departamento no encontrado".to_string()))?;
        let codigo = departamento
            .codigo
            .unwrap_or_else(|| numbering::codigo_departamento_desde_nombre(&departamento.nombre));

        // validar_transicion guarantees the reception date for approvals;
        // its year scopes the sequence.
        let anio = informe
            .fecha_recepcion
            .map(|fecha| fecha.year())
            .ok_or_else(|| {
                AppError::Validation(
                    "La fecha de recepción es requerida para aprobar el informe".to_string(),
                )
            })?;

        InformeRepository::aprobar_con_numero(&state.db, informe.id, sesion.id, &codigo, anio)
            .await
            .map_err(|err| {
                if err.is_unique_violation() {
                    AppError::Conflict(
                        "No se pudo asignar un número de informe por aprobaciones concurrentes"
                            .to_string(),
                    )
                } else {
                    err.into()
                }
            })?
            .ok_or_else(|| {
                AppError::Conflict("El informe ya fue aprobado o cambió de estado".to_string())
            })?
    } else {
        InformeRepository::cambiar_estado(&state.db, informe.id, informe.estado, cambio.estado)
            .await?
            .ok_or_else(|| {
                AppError::Conflict(
                    "El estado del informe cambió; vuelva a cargarlo e intente de nuevo"
                        .to_string(),
                )
            })?
    };

    info!(
        informe = %actualizado.id,
        estado = ?actualizado.estado,
        numero = actualizado.numero_informe.as_deref().unwrap_or("-"),
        usuario = %sesion.username,
        "cambio de estado"
    );

    Ok(Json(json!({
        "success": true,
        "informe": actualizado,
    })))
}

/// GET /api/informes/{id}/parrafo — rendered legal paragraph.
pub async fn parrafo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(informe_id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    let sesion = authenticate(&state, &headers).await?;

    let informe = InformeRepository::buscar_por_id(&state.db, informe_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Informe no encontrado".to_string()))?;

    if !policy::puede_ver_informe(
        &sesion,
        informe.usuario_creador_id,
        informe.usuario_asignado_id,
        informe.departamento_id,
        informe.oficina_id,
    ) {
        return Err(AppError::Authorization(
            "No tiene permisos para ver este informe".to_string(),
        ));
    }

    let oficina = OficinaRepository::buscar_por_id(&state.db, informe.oficina_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Oficina no encontrada".to_string()))?;

    let parrafo = narrative::generar_parrafo(&datos_parrafo(&informe, &oficina.nombre));

    Ok(Json(json!({
        "success": true,
        "parrafo": parrafo,
        "fecha_recepcion": narrative::formatear_fecha_ddmmaaaa(informe.fecha_recepcion),
        "numero_informe": informe.numero_informe,
    })))
}

fn datos_parrafo<'a>(informe: &'a Informe, oficina_nombre: &'a str) -> narrative::DatosParrafo<'a> {
    narrative::DatosParrafo {
        fecha_recepcion: informe.fecha_recepcion,
        hora_recepcion: &informe.hora_recepcion,
        numero_telefono: informe.numero_telefono.as_deref(),
        grado_solicitante: &informe.grado_solicitante,
        nombre_solicitante: &informe.nombre_solicitante,
        genero_solicitante: informe.genero_solicitante,
        comisaria_texto: &informe.comisaria_texto_completo,
        tipo_hecho: &informe.tipo_hecho,
        oficina_nombre,
    }
}
