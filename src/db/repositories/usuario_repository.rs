use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{SesionUsuario, Usuario};
use crate::db::DatabaseError;

pub struct UsuarioRepository;

impl UsuarioRepository {
    /// Full record for credential verification; inactive users included so
    /// the caller can distinguish them.
    pub async fn buscar_por_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Usuario>, DatabaseError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?;
        Ok(usuario)
    }

    /// Session context with affiliation names joined in. Only active users
    /// resolve to a session.
    pub async fn sesion_por_id(
        pool: &PgPool,
        usuario_id: Uuid,
    ) -> Result<Option<SesionUsuario>, DatabaseError> {
        let sesion = sqlx::query_as::<_, SesionUsuario>(
            r#"
            SELECT u.id, u.username, u.nombre, u.apellido, u.grado, u.rol,
                   u.departamento_id, d.nombre AS departamento_nombre,
                   u.oficina_id, o.nombre AS oficina_nombre
            FROM usuarios u
            LEFT JOIN departamentos d ON d.id = u.departamento_id
            LEFT JOIN oficinas o ON o.id = u.oficina_id
            WHERE u.id = $1 AND u.activo
            "#,
        )
        .bind(usuario_id)
        .fetch_optional(pool)
        .await?;
        Ok(sesion)
    }

    /// Used to validate assignee references before inserting a report.
    pub async fn existe_activo(pool: &PgPool, usuario_id: Uuid) -> Result<bool, DatabaseError> {
        let existe: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM usuarios WHERE id = $1 AND activo)",
        )
        .bind(usuario_id)
        .fetch_one(pool)
        .await?;
        Ok(existe)
    }

    pub async fn marcar_ultimo_acceso(
        pool: &PgPool,
        usuario_id: Uuid,
    ) -> Result<(), DatabaseError> {
        sqlx::query("UPDATE usuarios SET ultimo_acceso = now(), updated_at = now() WHERE id = $1")
            .bind(usuario_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insertar_usuario(pool: &PgPool, activo: bool) -> Uuid {
        sqlx::query_scalar(
            r#"
            INSERT INTO usuarios (username, password_hash, nombre, apellido, rol, activo)
            VALUES ($1, 'x', 'Ana', 'Prueba', 'OPERADOR', $2)
            RETURNING id
            "#,
        )
        .bind(format!("op-{}", Uuid::new_v4()))
        .bind(activo)
        .fetch_one(pool)
        .await
        .expect("usuario")
    }

    #[sqlx::test]
    async fn existe_activo_segun_estado_del_usuario(pool: PgPool) {
        let activo = insertar_usuario(&pool, true).await;
        let inactivo = insertar_usuario(&pool, false).await;

        assert!(UsuarioRepository::existe_activo(&pool, activo)
            .await
            .expect("consulta"));
        assert!(!UsuarioRepository::existe_activo(&pool, inactivo)
            .await
            .expect("consulta"));
        assert!(!UsuarioRepository::existe_activo(&pool, Uuid::new_v4())
            .await
            .expect("consulta"));
    }
}
