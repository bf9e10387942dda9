use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Date, OffsetDateTime};
use validator::Validate;

/// Estados del ciclo de vida de un informe. APROBADO and RECHAZADO are
/// terminal; the report number is assigned on the first transition into
/// APROBADO and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "estado_informe")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoInforme {
    #[sqlx(rename = "BORRADOR")]
    Borrador,
    #[sqlx(rename = "EN_REVISION")]
    EnRevision,
    #[sqlx(rename = "APROBADO")]
    Aprobado,
    #[sqlx(rename = "RECHAZADO")]
    Rechazado,
}

impl EstadoInforme {
    pub fn label(&self) -> &'static str {
        match self {
            EstadoInforme::Borrador => "Borrador",
            EstadoInforme::EnRevision => "En Revisión",
            EstadoInforme::Aprobado => "Aprobado",
            EstadoInforme::Rechazado => "Rechazado",
        }
    }
}

/// Género del solicitante; drives the article in the generated paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Genero {
    Masculino,
    Femenino,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Informe {
    pub id: Uuid,
    pub numero_informe: Option<String>,
    pub estado: EstadoInforme,
    #[serde(with = "time::serde::rfc3339::option")]
    pub fecha_aprobacion: Option<OffsetDateTime>,

    pub usuario_creador_id: Uuid,
    pub usuario_asignado_id: Option<Uuid>,
    pub usuario_aprobador_id: Option<Uuid>,
    pub departamento_id: Uuid,
    pub oficina_id: Uuid,

    // Datos de recepción del pedido
    pub fecha_recepcion: Option<Date>,
    pub hora_recepcion: String,
    pub numero_telefono: Option<String>,
    pub grado_solicitante: String,
    pub nombre_solicitante: String,
    pub genero_solicitante: Option<Genero>,
    pub categoria_comisaria: String,
    pub numero_comisaria: String,
    pub departamento_comisaria: String,
    pub ciudad_comisaria: String,
    pub comisaria_texto_completo: String,
    pub tipo_hecho: String,
    pub jurisdiccion: Option<String>,

    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// List/detail row with the display fields joined in (department code and
/// name, office name, creator and assignee).
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct InformeResumen {
    pub id: Uuid,
    pub numero_informe: Option<String>,
    pub estado: EstadoInforme,
    pub fecha_recepcion: Option<Date>,
    pub hora_recepcion: String,
    pub tipo_hecho: String,
    pub comisaria_texto_completo: String,
    pub departamento_id: Uuid,
    pub departamento_nombre: String,
    pub departamento_codigo: Option<String>,
    pub oficina_id: Uuid,
    pub oficina_nombre: String,
    pub usuario_creador_id: Uuid,
    pub creador_nombre: String,
    pub creador_apellido: String,
    pub creador_grado: Option<String>,
    pub usuario_asignado_id: Option<Uuid>,
    pub asignado_nombre: Option<String>,
    pub asignado_apellido: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NuevoInforme {
    pub departamento_id: Uuid,
    pub oficina_id: Uuid,
    pub usuario_asignado_id: Option<Uuid>,
    pub estado: Option<EstadoInforme>,

    pub fecha_recepcion: Option<Date>,
    /// Hora en formato HH:MM; checked by the workflow, not the derive.
    #[validate(length(min = 1))]
    pub hora_recepcion: String,
    pub numero_telefono: Option<String>,
    #[validate(length(min = 1, message = "El grado del solicitante es requerido"))]
    pub grado_solicitante: String,
    #[validate(length(min = 1, message = "El nombre del solicitante es requerido"))]
    pub nombre_solicitante: String,
    pub genero_solicitante: Option<Genero>,
    #[validate(length(min = 1, message = "La categoría de comisaría es requerida"))]
    pub categoria_comisaria: String,
    #[validate(length(min = 1, message = "El número de comisaría es requerido"))]
    pub numero_comisaria: String,
    #[validate(length(min = 1, message = "El departamento de la comisaría es requerido"))]
    pub departamento_comisaria: String,
    #[validate(length(min = 1, message = "La ciudad de la comisaría es requerida"))]
    pub ciudad_comisaria: String,
    /// Composed from categoría/número/ciudad when absent or blank.
    pub comisaria_texto_completo: Option<String>,
    #[validate(length(min = 1, message = "El tipo de hecho es requerido"))]
    pub tipo_hecho: String,
    pub jurisdiccion: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CambioEstado {
    pub estado: EstadoInforme,
}
