//! Numeración secuencial de informes: `{CODIGO}-{AÑO}-{SECUENCIA}`
//! (ej.: `DEP-CAM-2025-0001`), por departamento y año.

/// Bounded retries for the approve-and-number transaction when the unique
/// index on `numero_informe` reports a concurrent assignment.
pub const MAX_INTENTOS_ASIGNACION: u32 = 3;

/// Prefix that scopes sequence assignment to one department and year.
pub fn prefijo(codigo_departamento: &str, anio: i32) -> String {
    format!("{codigo_departamento}-{anio}-")
}

/// Next sequence value given the greatest stored number for the prefix.
///
/// The trailing segment (text after the last `-`) is parsed as the sequence;
/// an unparseable segment or no prior number restarts the sequence at 1.
pub fn siguiente_secuencia(ultimo_numero: Option<&str>) -> u32 {
    ultimo_numero
        .and_then(|numero| numero.rsplit('-').next())
        .and_then(|segmento| segmento.parse::<u32>().ok())
        .map(|ultimo| ultimo + 1)
        .unwrap_or(1)
}

/// Zero-pads the sequence to 4 digits; values beyond 9999 keep their width.
pub fn formatear(prefijo: &str, secuencia: u32) -> String {
    format!("{prefijo}{secuencia:04}")
}

pub fn siguiente_numero(codigo_departamento: &str, anio: i32, ultimo_numero: Option<&str>) -> String {
    let prefijo = prefijo(codigo_departamento, anio);
    let secuencia = siguiente_secuencia(ultimo_numero);
    formatear(&prefijo, secuencia)
}

/// Fallback 3-character code for departments without a stored one:
/// uppercase, ASCII alphanumerics only, truncated to 3; `DEP` when the
/// name yields nothing.
pub fn codigo_departamento_desde_nombre(nombre: &str) -> String {
    let codigo: String = nombre
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .collect();

    if codigo.is_empty() {
        "DEP".to_string()
    } else {
        codigo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primera_secuencia_arranca_en_uno() {
        assert_eq!(siguiente_secuencia(None), 1);
        assert_eq!(siguiente_numero("DEP-CAM", 2025, None), "DEP-CAM-2025-0001");
    }

    #[test]
    fn secuencia_incrementa_sobre_el_ultimo_numero() {
        assert_eq!(siguiente_secuencia(Some("DEP-CAM-2025-0009")), 10);
        assert_eq!(
            siguiente_numero("DEP-CAM", 2025, Some("DEP-CAM-2025-0042")),
            "DEP-CAM-2025-0043"
        );
    }

    #[test]
    fn secuencia_sin_gaps_en_llamadas_repetidas() {
        let mut ultimo: Option<String> = None;
        for esperado in 1..=12u32 {
            let numero = siguiente_numero("BAL", 2025, ultimo.as_deref());
            assert_eq!(numero, format!("BAL-2025-{esperado:04}"));
            ultimo = Some(numero);
        }
    }

    #[test]
    fn segmento_ilegible_reinicia_en_uno() {
        assert_eq!(siguiente_secuencia(Some("CAM-2025-basura")), 1);
        assert_eq!(siguiente_secuencia(Some("CAM-2025-")), 1);
    }

    #[test]
    fn secuencias_grandes_no_se_recortan() {
        assert_eq!(formatear("CAM-2025-", 10000), "CAM-2025-10000");
        assert_eq!(
            siguiente_secuencia(Some("CAM-2025-10000")),
            10001
        );
    }

    #[test]
    fn codigo_alternativo_desde_el_nombre() {
        assert_eq!(codigo_departamento_desde_nombre("Criminalística de Campo"), "CRI");
        assert_eq!(codigo_departamento_desde_nombre("Balística"), "BAL");
        assert_eq!(codigo_departamento_desde_nombre("ñandutí"), "AND");
        assert_eq!(codigo_departamento_desde_nombre("---"), "DEP");
        assert_eq!(codigo_departamento_desde_nombre(""), "DEP");
    }
}
