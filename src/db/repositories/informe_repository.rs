use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::warn;
use uuid::Uuid;

use crate::db::models::{EstadoInforme, Informe, InformeResumen, NuevoInforme};
use crate::db::DatabaseError;
use crate::domain::numbering;
use crate::domain::policy::AlcanceInformes;

/// Optional narrowing filters on top of the role visibility scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct FiltrosInforme {
    pub departamento_id: Option<Uuid>,
    pub oficina_id: Option<Uuid>,
    pub estado: Option<EstadoInforme>,
    pub limit: i64,
    pub offset: i64,
}

const SELECT_RESUMEN: &str = r#"
SELECT i.id, i.numero_informe, i.estado, i.fecha_recepcion, i.hora_recepcion,
       i.tipo_hecho, i.comisaria_texto_completo,
       i.departamento_id, d.nombre AS departamento_nombre, d.codigo AS departamento_codigo,
       i.oficina_id, o.nombre AS oficina_nombre,
       i.usuario_creador_id, uc.nombre AS creador_nombre, uc.apellido AS creador_apellido,
       uc.grado AS creador_grado,
       i.usuario_asignado_id, ua.nombre AS asignado_nombre, ua.apellido AS asignado_apellido,
       i.created_at
FROM informes i
JOIN departamentos d ON d.id = i.departamento_id
JOIN oficinas o ON o.id = i.oficina_id
JOIN usuarios uc ON uc.id = i.usuario_creador_id
LEFT JOIN usuarios ua ON ua.id = i.usuario_asignado_id
"#;

pub struct InformeRepository;

impl InformeRepository {
    /// Visible reports for the caller's scope, newest first, plus the total
    /// count for pagination. Extra filters only narrow within the scope.
    pub async fn listar(
        pool: &PgPool,
        alcance: &AlcanceInformes,
        filtros: &FiltrosInforme,
    ) -> Result<(Vec<InformeResumen>, i64), DatabaseError> {
        let mut consulta: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_RESUMEN);
        aplicar_condiciones(&mut consulta, alcance, filtros);
        consulta
            .push(" ORDER BY i.created_at DESC LIMIT ")
            .push_bind(filtros.limit)
            .push(" OFFSET ")
            .push_bind(filtros.offset);

        let informes = consulta
            .build_query_as::<InformeResumen>()
            .fetch_all(pool)
            .await?;

        let mut conteo: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM informes i");
        aplicar_condiciones(&mut conteo, alcance, filtros);
        let total: i64 = conteo.build_query_scalar().fetch_one(pool).await?;

        Ok((informes, total))
    }

    pub async fn buscar_resumen(
        pool: &PgPool,
        informe_id: Uuid,
    ) -> Result<Option<InformeResumen>, DatabaseError> {
        let mut consulta: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_RESUMEN);
        consulta.push(" WHERE i.id = ").push_bind(informe_id);
        let informe = consulta
            .build_query_as::<InformeResumen>()
            .fetch_optional(pool)
            .await?;
        Ok(informe)
    }

    pub async fn buscar_por_id(
        pool: &PgPool,
        informe_id: Uuid,
    ) -> Result<Option<Informe>, DatabaseError> {
        let informe = sqlx::query_as::<_, Informe>("SELECT * FROM informes WHERE id = $1")
            .bind(informe_id)
            .fetch_optional(pool)
            .await?;
        Ok(informe)
    }

    /// Creates the report without a number; numbering happens at approval.
    pub async fn crear(
        pool: &PgPool,
        usuario_creador_id: Uuid,
        datos: &NuevoInforme,
    ) -> Result<Informe, DatabaseError> {
        let informe = sqlx::query_as::<_, Informe>(
            r#"
            INSERT INTO informes (
                numero_informe, estado,
                usuario_creador_id, usuario_asignado_id, departamento_id, oficina_id,
                fecha_recepcion, hora_recepcion, numero_telefono,
                grado_solicitante, nombre_solicitante, genero_solicitante,
                categoria_comisaria, numero_comisaria, departamento_comisaria,
                ciudad_comisaria, comisaria_texto_completo, tipo_hecho, jurisdiccion
            )
            VALUES (NULL, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                    $15, $16, $17, $18)
            RETURNING *
            "#,
        )
        .bind(datos.estado.unwrap_or(EstadoInforme::Borrador))
        .bind(usuario_creador_id)
        .bind(datos.usuario_asignado_id)
        .bind(datos.departamento_id)
        .bind(datos.oficina_id)
        .bind(datos.fecha_recepcion)
        .bind(&datos.hora_recepcion)
        .bind(datos.numero_telefono.as_deref())
        .bind(&datos.grado_solicitante)
        .bind(&datos.nombre_solicitante)
        .bind(datos.genero_solicitante)
        .bind(&datos.categoria_comisaria)
        .bind(&datos.numero_comisaria)
        .bind(&datos.departamento_comisaria)
        .bind(&datos.ciudad_comisaria)
        .bind(datos.comisaria_texto_completo.as_deref())
        .bind(&datos.tipo_hecho)
        .bind(datos.jurisdiccion.as_deref())
        .fetch_one(pool)
        .await?;
        Ok(informe)
    }

    /// Estado update for transitions without side effects. The expected
    /// current estado is part of the predicate, so a request that validated
    /// against a stale read never reaches the row; `None` means the estado
    /// changed underneath the caller.
    pub async fn cambiar_estado(
        pool: &PgPool,
        informe_id: Uuid,
        desde: EstadoInforme,
        hacia: EstadoInforme,
    ) -> Result<Option<Informe>, DatabaseError> {
        let informe = sqlx::query_as::<_, Informe>(
            r#"
            UPDATE informes SET estado = $1, updated_at = now()
            WHERE id = $2 AND estado = $3
            RETURNING *
            "#,
        )
        .bind(hacia)
        .bind(informe_id)
        .bind(desde)
        .fetch_optional(pool)
        .await?;
        Ok(informe)
    }

    /// Approval transition with number assignment, atomic per report.
    ///
    /// The read-compute-write runs in one transaction. The UPDATE only
    /// matches the row while it is still EN_REVISION and unnumbered, so a
    /// second approval that raced past the handler checks finds no row and
    /// gets `None` back; an assigned number is never rewritten. The unique
    /// index on `numero_informe` catches two approvals of *different*
    /// reports computing the same sequence, and the losing transaction
    /// re-reads and recomputes, up to
    /// [`numbering::MAX_INTENTOS_ASIGNACION`] times before surfacing the
    /// conflict.
    pub async fn aprobar_con_numero(
        pool: &PgPool,
        informe_id: Uuid,
        aprobador_id: Uuid,
        codigo_departamento: &str,
        anio: i32,
    ) -> Result<Option<Informe>, DatabaseError> {
        let prefijo = numbering::prefijo(codigo_departamento, anio);

        for intento in 1..=numbering::MAX_INTENTOS_ASIGNACION {
            let mut tx = pool.begin().await?;

            let ultimo_numero: Option<String> = sqlx::query_scalar(
                r#"
                SELECT numero_informe FROM informes
                WHERE numero_informe LIKE $1
                ORDER BY numero_informe DESC
                LIMIT 1
                "#,
            )
            .bind(format!("{prefijo}%"))
            .fetch_optional(&mut *tx)
            .await?;

            let numero =
                numbering::formatear(&prefijo, numbering::siguiente_secuencia(ultimo_numero.as_deref()));

            let resultado = sqlx::query_as::<_, Informe>(
                r#"
                UPDATE informes
                SET estado = $1, numero_informe = $2, fecha_aprobacion = now(),
                    usuario_aprobador_id = $3, updated_at = now()
                WHERE id = $4 AND estado = 'EN_REVISION' AND numero_informe IS NULL
                RETURNING *
                "#,
            )
            .bind(EstadoInforme::Aprobado)
            .bind(&numero)
            .bind(aprobador_id)
            .bind(informe_id)
            .fetch_optional(&mut *tx)
            .await;

            match resultado {
                Ok(Some(informe)) => {
                    tx.commit().await?;
                    return Ok(Some(informe));
                }
                Ok(None) => {
                    // The report was approved (or moved) by someone else.
                    tx.rollback().await.ok();
                    return Ok(None);
                }
                Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                    // Another approval took this number first; recompute.
                    warn!(%numero, intento, "número de informe en conflicto, reintentando");
                    tx.rollback().await.ok();
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(DatabaseError::Duplicate)
    }
}

fn aplicar_condiciones(
    consulta: &mut QueryBuilder<'_, Postgres>,
    alcance: &AlcanceInformes,
    filtros: &FiltrosInforme,
) {
    consulta.push(" WHERE TRUE");

    match *alcance {
        AlcanceInformes::Total => {}
        AlcanceInformes::Oficina(oficina_id) => {
            consulta.push(" AND i.oficina_id = ").push_bind(oficina_id);
        }
        AlcanceInformes::Departamento(departamento_id) => {
            consulta
                .push(" AND i.departamento_id = ")
                .push_bind(departamento_id);
        }
        AlcanceInformes::Propios {
            usuario,
            departamento,
        } => {
            consulta
                .push(" AND (i.usuario_creador_id = ")
                .push_bind(usuario)
                .push(" OR i.usuario_asignado_id = ")
                .push_bind(usuario)
                .push(")");
            if let Some(departamento_id) = departamento {
                consulta
                    .push(" AND i.departamento_id = ")
                    .push_bind(departamento_id);
            }
        }
    }

    if let Some(departamento_id) = filtros.departamento_id {
        consulta
            .push(" AND i.departamento_id = ")
            .push_bind(departamento_id);
    }
    if let Some(oficina_id) = filtros.oficina_id {
        consulta.push(" AND i.oficina_id = ").push_bind(oficina_id);
    }
    if let Some(estado) = filtros.estado {
        consulta.push(" AND i.estado = ").push_bind(estado);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn semilla(pool: &PgPool) -> (Uuid, Uuid, Uuid) {
        let oficina_id: Uuid =
            sqlx::query_scalar("SELECT id FROM oficinas WHERE codigo = 'DIR-CRIM'")
                .fetch_one(pool)
                .await
                .expect("oficina sembrada");
        let departamento_id: Uuid =
            sqlx::query_scalar("SELECT id FROM departamentos WHERE codigo = 'DEP-CAM'")
                .fetch_one(pool)
                .await
                .expect("departamento sembrado");
        let supervisor_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO usuarios (username, password_hash, nombre, apellido, rol)
            VALUES ($1, 'x', 'Ana', 'Prueba', 'SUPERVISOR_GENERAL')
            RETURNING id
            "#,
        )
        .bind(format!("sup-{}", Uuid::new_v4()))
        .fetch_one(pool)
        .await
        .expect("supervisor");
        (oficina_id, departamento_id, supervisor_id)
    }

    async fn informe_en_revision(
        pool: &PgPool,
        departamento_id: Uuid,
        oficina_id: Uuid,
        creador_id: Uuid,
    ) -> Informe {
        sqlx::query_as::<_, Informe>(
            r#"
            INSERT INTO informes (
                estado, usuario_creador_id, departamento_id, oficina_id,
                fecha_recepcion, hora_recepcion, grado_solicitante, nombre_solicitante,
                categoria_comisaria, numero_comisaria, departamento_comisaria,
                ciudad_comisaria, comisaria_texto_completo, tipo_hecho
            )
            VALUES (
                'EN_REVISION', $1, $2, $3,
                '2025-06-16', '09:15', 'Comisario', 'HECTOR GAYOSO',
                'Comisaría', '8', 'Central',
                'Capiatá', 'la Comisaría 8va. Central – Capiatá', 'SUPUESTO HECHO DE ROBO'
            )
            RETURNING *
            "#,
        )
        .bind(creador_id)
        .bind(departamento_id)
        .bind(oficina_id)
        .fetch_one(pool)
        .await
        .expect("informe")
    }

    #[sqlx::test]
    async fn aprobar_asigna_numero_una_sola_vez(pool: PgPool) {
        let (oficina, departamento, supervisor) = semilla(&pool).await;
        let informe = informe_en_revision(&pool, departamento, oficina, supervisor).await;

        let aprobado =
            InformeRepository::aprobar_con_numero(&pool, informe.id, supervisor, "DEP-CAM", 2025)
                .await
                .expect("primera aprobación")
                .expect("fila actualizada");
        assert_eq!(aprobado.numero_informe.as_deref(), Some("DEP-CAM-2025-0001"));
        assert_eq!(aprobado.estado, EstadoInforme::Aprobado);

        // A second caller that also observed the report as EN_REVISION and
        // unnumbered must find no row and leave the number untouched.
        let repetido =
            InformeRepository::aprobar_con_numero(&pool, informe.id, supervisor, "DEP-CAM", 2025)
                .await
                .expect("sin error de base");
        assert!(repetido.is_none());

        let persistido: Option<String> =
            sqlx::query_scalar("SELECT numero_informe FROM informes WHERE id = $1")
                .bind(informe.id)
                .fetch_one(&pool)
                .await
                .expect("fila");
        assert_eq!(persistido.as_deref(), Some("DEP-CAM-2025-0001"));
    }

    #[sqlx::test]
    async fn numeracion_secuencial_sin_gaps(pool: PgPool) {
        let (oficina, departamento, supervisor) = semilla(&pool).await;

        for esperado in 1..=5u32 {
            let informe = informe_en_revision(&pool, departamento, oficina, supervisor).await;
            let aprobado = InformeRepository::aprobar_con_numero(
                &pool, informe.id, supervisor, "DEP-CAM", 2025,
            )
            .await
            .expect("aprobación")
            .expect("fila actualizada");
            assert_eq!(
                aprobado.numero_informe,
                Some(format!("DEP-CAM-2025-{esperado:04}"))
            );
        }
    }

    #[sqlx::test]
    async fn cambio_de_estado_obsoleto_no_toca_la_fila(pool: PgPool) {
        let (oficina, departamento, supervisor) = semilla(&pool).await;
        let informe = informe_en_revision(&pool, departamento, oficina, supervisor).await;

        InformeRepository::aprobar_con_numero(&pool, informe.id, supervisor, "DEP-CAM", 2025)
            .await
            .expect("aprobación")
            .expect("fila actualizada");

        // A stale request that still saw EN_REVISION cannot drive the
        // already-approved report to RECHAZADO.
        let rechazo = InformeRepository::cambiar_estado(
            &pool,
            informe.id,
            EstadoInforme::EnRevision,
            EstadoInforme::Rechazado,
        )
        .await
        .expect("sin error de base");
        assert!(rechazo.is_none());

        let estado: EstadoInforme =
            sqlx::query_scalar("SELECT estado FROM informes WHERE id = $1")
                .bind(informe.id)
                .fetch_one(&pool)
                .await
                .expect("fila");
        assert_eq!(estado, EstadoInforme::Aprobado);
    }
}
