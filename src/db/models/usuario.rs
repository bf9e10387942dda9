use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

/// Roles del sistema, from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "rol")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rol {
    #[sqlx(rename = "OPERADOR")]
    Operador,
    #[sqlx(rename = "SUPERVISOR_DEPARTAMENTAL")]
    SupervisorDepartamental,
    #[sqlx(rename = "SUPERVISOR_REGIONAL")]
    SupervisorRegional,
    #[sqlx(rename = "SUPERVISOR_GENERAL")]
    SupervisorGeneral,
    #[sqlx(rename = "ADMIN")]
    Admin,
}

impl Rol {
    pub fn label(&self) -> &'static str {
        match self {
            Rol::Operador => "Operador",
            Rol::SupervisorDepartamental => "Supervisor Departamental",
            Rol::SupervisorRegional => "Supervisor Regional",
            Rol::SupervisorGeneral => "Supervisor General",
            Rol::Admin => "Administrador",
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Usuario {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub nombre: String,
    pub apellido: String,
    pub grado: Option<String>,
    pub numero_cedula: Option<String>,
    pub numero_credencial: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub rol: Rol,
    pub departamento_id: Option<Uuid>,
    pub oficina_id: Option<Uuid>,
    pub activo: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ultimo_acceso: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Per-request session context resolved from the bearer token. Authorization
/// decisions read role and affiliations from here, never from client input.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct SesionUsuario {
    pub id: Uuid,
    pub username: String,
    pub nombre: String,
    pub apellido: String,
    pub grado: Option<String>,
    pub rol: Rol,
    pub departamento_id: Option<Uuid>,
    pub departamento_nombre: Option<String>,
    pub oficina_id: Option<Uuid>,
    pub oficina_nombre: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct Credenciales {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: SecretString,
}
