use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{Departamento, Oficina};
use crate::db::DatabaseError;

pub struct OficinaRepository;

impl OficinaRepository {
    pub async fn listar_activas(pool: &PgPool) -> Result<Vec<Oficina>, DatabaseError> {
        let oficinas =
            sqlx::query_as::<_, Oficina>("SELECT * FROM oficinas WHERE activo ORDER BY nombre ASC")
                .fetch_all(pool)
                .await?;
        Ok(oficinas)
    }

    pub async fn buscar_por_id(
        pool: &PgPool,
        oficina_id: Uuid,
    ) -> Result<Option<Oficina>, DatabaseError> {
        let oficina = sqlx::query_as::<_, Oficina>("SELECT * FROM oficinas WHERE id = $1")
            .bind(oficina_id)
            .fetch_optional(pool)
            .await?;
        Ok(oficina)
    }

    pub async fn buscar_por_codigo(
        pool: &PgPool,
        codigo: &str,
    ) -> Result<Option<Oficina>, DatabaseError> {
        let oficina = sqlx::query_as::<_, Oficina>("SELECT * FROM oficinas WHERE codigo = $1")
            .bind(codigo)
            .fetch_optional(pool)
            .await?;
        Ok(oficina)
    }

    /// Active departments available to an office. Every department serves
    /// every office today; the office id scopes this in a future relation.
    pub async fn departamentos_activos(
        pool: &PgPool,
        _oficina_id: Uuid,
    ) -> Result<Vec<Departamento>, DatabaseError> {
        let departamentos = sqlx::query_as::<_, Departamento>(
            "SELECT * FROM departamentos WHERE activo ORDER BY nombre ASC",
        )
        .fetch_all(pool)
        .await?;
        Ok(departamentos)
    }

    pub async fn buscar_departamento(
        pool: &PgPool,
        departamento_id: Uuid,
    ) -> Result<Option<Departamento>, DatabaseError> {
        let departamento =
            sqlx::query_as::<_, Departamento>("SELECT * FROM departamentos WHERE id = $1")
                .bind(departamento_id)
                .fetch_optional(pool)
                .await?;
        Ok(departamento)
    }
}
