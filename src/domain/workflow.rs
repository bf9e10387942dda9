//! Máquina de estados del informe: BORRADOR → EN_REVISION → APROBADO | RECHAZADO.

use crate::db::models::{EstadoInforme, Informe};
use crate::error::AppError;

/// APROBADO and RECHAZADO are terminal; reports are never re-opened.
pub fn transicion_permitida(desde: EstadoInforme, hacia: EstadoInforme) -> bool {
    use EstadoInforme::*;
    matches!(
        (desde, hacia),
        (Borrador, EnRevision) | (EnRevision, Aprobado) | (EnRevision, Rechazado)
    )
}

/// Checks the requested transition against the current record, including the
/// approval precondition: a report cannot be approved without its reception
/// date, since the date scopes the number sequence.
pub fn validar_transicion(informe: &Informe, hacia: EstadoInforme) -> Result<(), AppError> {
    if !transicion_permitida(informe.estado, hacia) {
        return Err(AppError::Validation(format!(
            "Transición no permitida: {} → {}",
            informe.estado.label(),
            hacia.label()
        )));
    }

    if hacia == EstadoInforme::Aprobado && informe.fecha_recepcion.is_none() {
        return Err(AppError::Validation(
            "La fecha de recepción es requerida para aprobar el informe".to_string(),
        ));
    }

    Ok(())
}

/// Numbering runs exactly once, on the first transition into APROBADO.
pub fn requiere_numeracion(informe: &Informe, hacia: EstadoInforme) -> bool {
    hacia == EstadoInforme::Aprobado && informe.numero_informe.is_none()
}

/// Valid `HH:MM` reception time (24h).
pub fn hora_valida(hora: &str) -> bool {
    let Some((horas, minutos)) = hora.split_once(':') else {
        return false;
    };
    let (Ok(h), Ok(m)) = (horas.parse::<u8>(), minutos.parse::<u8>()) else {
        return false;
    };
    h < 24 && m < 60
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Uuid;
    use time::macros::{date, datetime};

    fn informe(estado: EstadoInforme, fecha_recepcion: Option<time::Date>) -> Informe {
        Informe {
            id: Uuid::new_v4(),
            numero_informe: None,
            estado,
            fecha_aprobacion: None,
            usuario_creador_id: Uuid::new_v4(),
            usuario_asignado_id: None,
            usuario_aprobador_id: None,
            departamento_id: Uuid::new_v4(),
            oficina_id: Uuid::new_v4(),
            fecha_recepcion,
            hora_recepcion: "09:15".into(),
            numero_telefono: None,
            grado_solicitante: "Comisario".into(),
            nombre_solicitante: "HECTOR GAYOSO".into(),
            genero_solicitante: None,
            categoria_comisaria: "Comisaría".into(),
            numero_comisaria: "8".into(),
            departamento_comisaria: "Central".into(),
            ciudad_comisaria: "Capiatá".into(),
            comisaria_texto_completo: "la Comisaría 8ª Central – Capiatá".into(),
            tipo_hecho: "SUPUESTO HECHO DE ROBO".into(),
            jurisdiccion: None,
            created_at: datetime!(2025-06-16 10:00 UTC),
            updated_at: datetime!(2025-06-16 10:00 UTC),
        }
    }

    #[test]
    fn flujo_normal_de_estados() {
        use EstadoInforme::*;
        assert!(transicion_permitida(Borrador, EnRevision));
        assert!(transicion_permitida(EnRevision, Aprobado));
        assert!(transicion_permitida(EnRevision, Rechazado));
    }

    #[test]
    fn estados_terminales_no_se_reabren() {
        use EstadoInforme::*;
        assert!(!transicion_permitida(Aprobado, EnRevision));
        assert!(!transicion_permitida(Aprobado, Borrador));
        assert!(!transicion_permitida(Rechazado, EnRevision));
        assert!(!transicion_permitida(Borrador, Aprobado));
    }

    #[test]
    fn aprobar_sin_fecha_recepcion_falla_con_validacion() {
        let registro = informe(EstadoInforme::EnRevision, None);
        let resultado = validar_transicion(&registro, EstadoInforme::Aprobado);
        assert!(matches!(resultado, Err(AppError::Validation(_))));
        // The record itself is untouched; the caller never persists on error.
        assert_eq!(registro.estado, EstadoInforme::EnRevision);
    }

    #[test]
    fn aprobar_con_fecha_recepcion_pasa() {
        let registro = informe(EstadoInforme::EnRevision, Some(date!(2025 - 06 - 16)));
        assert!(validar_transicion(&registro, EstadoInforme::Aprobado).is_ok());
        assert!(requiere_numeracion(&registro, EstadoInforme::Aprobado));
    }

    #[test]
    fn informe_ya_numerado_no_se_renumera() {
        let mut registro = informe(EstadoInforme::EnRevision, Some(date!(2025 - 06 - 16)));
        registro.numero_informe = Some("DEP-CAM-2025-0001".into());
        assert!(!requiere_numeracion(&registro, EstadoInforme::Aprobado));
    }

    #[test]
    fn validacion_de_hora() {
        assert!(hora_valida("09:15"));
        assert!(hora_valida("23:59"));
        assert!(hora_valida("0:05"));
        assert!(!hora_valida("24:00"));
        assert!(!hora_valida("12:60"));
        assert!(!hora_valida("0915"));
        assert!(!hora_valida("nueve y cuarto"));
    }
}
