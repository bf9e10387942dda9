//! Generación del párrafo legal del informe: a deterministic render of the
//! intake fields into a single fixed sentence of Spanish legal prose.

use time::Date;

use crate::db::models::Genero;

/// Rendered instead of the paragraph whenever a required field is missing;
/// legal prose is never emitted with interpolated blanks.
pub const PARRAFO_INSUFICIENTE: &str =
    "Información insuficiente para generar el párrafo del informe.";

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// `16 de junio de 2025` (day without zero-padding).
pub fn formatear_fecha_espanol(fecha: Date) -> String {
    let mes = MESES[fecha.month() as usize - 1];
    format!("{} de {} de {}", fecha.day(), mes, fecha.year())
}

/// `16/06/2025`, or `-` for an absent date.
pub fn formatear_fecha_ddmmaaaa(fecha: Option<Date>) -> String {
    match fecha {
        Some(fecha) => format!(
            "{:02}/{:02}/{}",
            fecha.day(),
            fecha.month() as u8,
            fecha.year()
        ),
        None => "-".to_string(),
    }
}

/// Ensures `HH:MM` and appends `horas`: `9:15` → `09:15 horas`. Anything not
/// shaped like an hour is passed through untouched.
pub fn formatear_hora(hora: &str) -> String {
    match hora.split_once(':') {
        Some((horas, minutos)) => format!("{horas:0>2}:{minutos:0>2} horas"),
        None => hora.to_string(),
    }
}

/// Phone fragment for the paragraph: digits grouped as 4 + groups of 3
/// (`0973505505` → `el número 0973 505 505, corporativo de`), or the fixed
/// `el número corporativo` when no digits are available.
pub fn formatear_numero_telefono(numero: Option<&str>) -> String {
    let digitos: String = numero
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digitos.is_empty() {
        return "el número corporativo".to_string();
    }

    let agrupado = if digitos.len() > 4 {
        let (inicio, resto) = digitos.split_at(4);
        let grupos: Vec<String> = resto
            .as_bytes()
            .chunks(3)
            .map(|grupo| String::from_utf8_lossy(grupo).into_owned())
            .collect();
        format!("{} {}", inicio, grupos.join(" "))
    } else {
        digitos
    };

    format!("el número {agrupado}, corporativo de")
}

/// Ordinal en español: `8` → `8va.`, `1` → `1ra.`, `2` → `2da.`, `3` → `3ra.`;
/// non-numeric or non-positive input is returned unchanged.
pub fn numero_a_ordinal(numero: &str) -> String {
    let Ok(num) = numero.trim().parse::<u32>() else {
        return numero.to_string();
    };
    if num == 0 {
        return numero.to_string();
    }

    let sufijo = match num % 100 {
        11..=13 => "va.",
        _ => match num % 10 {
            1 | 3 => "ra.",
            2 => "da.",
            _ => "va.",
        },
    };
    format!("{num}{sufijo}")
}

/// Station description stored with the intake and interpolated into the
/// paragraph: `la Comisaría 8va. Central – Capiatá`.
pub fn texto_comisaria(categoria: &str, numero: &str, departamento: &str, ciudad: &str) -> String {
    format!(
        "la {categoria} {} {departamento} – {ciudad}",
        numero_a_ordinal(numero)
    )
}

/// Intake fields the paragraph is rendered from.
#[derive(Debug, Clone)]
pub struct DatosParrafo<'a> {
    pub fecha_recepcion: Option<Date>,
    pub hora_recepcion: &'a str,
    pub numero_telefono: Option<&'a str>,
    pub grado_solicitante: &'a str,
    pub nombre_solicitante: &'a str,
    pub genero_solicitante: Option<Genero>,
    /// Pre-composed station description, e.g. `la Comisaría 8ª Central – Capiatá`.
    pub comisaria_texto: &'a str,
    /// Interpolated verbatim; callers decide whether to prepend `SUPUESTO`.
    pub tipo_hecho: &'a str,
    pub oficina_nombre: &'a str,
}

impl DatosParrafo<'_> {
    fn completo(&self) -> bool {
        self.fecha_recepcion.is_some()
            && !self.hora_recepcion.trim().is_empty()
            && !self.grado_solicitante.trim().is_empty()
            && !self.nombre_solicitante.trim().is_empty()
            && !self.comisaria_texto.trim().is_empty()
            && !self.tipo_hecho.trim().is_empty()
            && !self.oficina_nombre.trim().is_empty()
    }
}

/// Renders the full legal paragraph, statutory citations included. Pure
/// function of its inputs; returns [`PARRAFO_INSUFICIENTE`] when any
/// required field is missing.
pub fn generar_parrafo(datos: &DatosParrafo) -> String {
    let Some(fecha) = datos.fecha_recepcion else {
        return PARRAFO_INSUFICIENTE.to_string();
    };
    if !datos.completo() {
        return PARRAFO_INSUFICIENTE.to_string();
    }

    let fecha_texto = formatear_fecha_espanol(fecha);
    let hora_texto = if datos.hora_recepcion.contains("horas") {
        datos.hora_recepcion.to_string()
    } else {
        formatear_hora(datos.hora_recepcion)
    };
    let numero_tel = formatear_numero_telefono(datos.numero_telefono);
    let articulo = match datos.genero_solicitante {
        Some(Genero::Femenino) => "de la",
        _ => "del",
    };

    format!(
        "En fecha {fecha_texto}, siendo las {hora_texto}, se recepcionó una llamada telefónica \
         en {numero_tel} la Guardia de {oficina}, por parte {articulo} {grado} {nombre}, \
         personal de {comisaria}, por la que solicita la constitución de personal de este \
         Departamento para realizar procedimiento en relación a un {tipo_hecho}, en la \
         jurisdicción de dicha dependencia policial, por lo que se da inmediato cumplimiento \
         al pedido constituyéndose personal de este Departamento, conforme a lo dispuesto en \
         el Título I, Art. 6°, numerales 4, 5, 6, 18, 28, 29 y 30 de la Ley 7280/2024 – De \
         Reforma y Modernización de la Policía Nacional, concordante con el Art. 297, \
         numeral 8 de la Ley 1286/1998 – Código Procesal Penal.",
        oficina = datos.oficina_nombre,
        grado = datos.grado_solicitante,
        nombre = datos.nombre_solicitante,
        comisaria = datos.comisaria_texto,
        tipo_hecho = datos.tipo_hecho,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn datos_completos() -> DatosParrafo<'static> {
        DatosParrafo {
            fecha_recepcion: Some(date!(2025 - 06 - 16)),
            hora_recepcion: "09:15",
            numero_telefono: Some("0973505505"),
            grado_solicitante: "Comisario",
            nombre_solicitante: "HECTOR GAYOSO",
            genero_solicitante: Some(Genero::Masculino),
            comisaria_texto: "la Comisaría 8ª Central – Capiatá",
            tipo_hecho: "SUPUESTO HECHO DE ROBO",
            oficina_nombre: "Departamento Central",
        }
    }

    #[test]
    fn parrafo_completo_exacto() {
        let esperado = "En fecha 16 de junio de 2025, siendo las 09:15 horas, se recepcionó una \
            llamada telefónica en el número 0973 505 505, corporativo de la Guardia de \
            Departamento Central, por parte del Comisario HECTOR GAYOSO, personal de la \
            Comisaría 8ª Central – Capiatá, por la que solicita la constitución de personal de \
            este Departamento para realizar procedimiento en relación a un SUPUESTO HECHO DE \
            ROBO, en la jurisdicción de dicha dependencia policial, por lo que se da inmediato \
            cumplimiento al pedido constituyéndose personal de este Departamento, conforme a lo \
            dispuesto en el Título I, Art. 6°, numerales 4, 5, 6, 18, 28, 29 y 30 de la Ley \
            7280/2024 – De Reforma y Modernización de la Policía Nacional, concordante con el \
            Art. 297, numeral 8 de la Ley 1286/1998 – Código Procesal Penal.";
        assert_eq!(generar_parrafo(&datos_completos()), esperado);
    }

    #[test]
    fn sin_grado_devuelve_placeholder() {
        let mut datos = datos_completos();
        datos.grado_solicitante = "";
        assert_eq!(generar_parrafo(&datos), PARRAFO_INSUFICIENTE);
    }

    #[test]
    fn sin_fecha_devuelve_placeholder() {
        let mut datos = datos_completos();
        datos.fecha_recepcion = None;
        assert_eq!(generar_parrafo(&datos), PARRAFO_INSUFICIENTE);
    }

    #[test]
    fn genero_femenino_cambia_el_articulo() {
        let mut datos = datos_completos();
        datos.genero_solicitante = Some(Genero::Femenino);
        let parrafo = generar_parrafo(&datos);
        assert!(parrafo.contains("por parte de la Comisario HECTOR GAYOSO"));
    }

    #[test]
    fn genero_ausente_usa_masculino() {
        let mut datos = datos_completos();
        datos.genero_solicitante = None;
        assert!(generar_parrafo(&datos).contains("por parte del Comisario"));
    }

    #[test]
    fn telefono_ausente_usa_el_corporativo() {
        let mut datos = datos_completos();
        datos.numero_telefono = None;
        assert!(generar_parrafo(&datos)
            .contains("en el número corporativo la Guardia de Departamento Central"));
    }

    #[test]
    fn formato_de_telefono() {
        assert_eq!(
            formatear_numero_telefono(Some("0973505505")),
            "el número 0973 505 505, corporativo de"
        );
        assert_eq!(
            formatear_numero_telefono(Some("(0973) 50-55")),
            "el número 0973 505 5, corporativo de"
        );
        assert_eq!(formatear_numero_telefono(Some("sin dígitos")), "el número corporativo");
        assert_eq!(formatear_numero_telefono(Some("0973")), "el número 0973, corporativo de");
        assert_eq!(formatear_numero_telefono(None), "el número corporativo");
    }

    #[test]
    fn formato_de_fecha_y_hora() {
        assert_eq!(formatear_fecha_espanol(date!(2025 - 06 - 16)), "16 de junio de 2025");
        assert_eq!(formatear_fecha_espanol(date!(2024 - 01 - 01)), "1 de enero de 2024");
        assert_eq!(formatear_fecha_ddmmaaaa(Some(date!(2025 - 06 - 16))), "16/06/2025");
        assert_eq!(formatear_fecha_ddmmaaaa(None), "-");
        assert_eq!(formatear_hora("9:15"), "09:15 horas");
        assert_eq!(formatear_hora("09:15"), "09:15 horas");
        assert_eq!(formatear_hora("0915"), "0915");
    }

    #[test]
    fn texto_de_comisaria_compuesto() {
        assert_eq!(
            texto_comisaria("Comisaría", "8", "Central", "Capiatá"),
            "la Comisaría 8va. Central – Capiatá"
        );
        assert_eq!(
            texto_comisaria("Subcomisaría", "21", "Itapúa", "Encarnación"),
            "la Subcomisaría 21ra. Itapúa – Encarnación"
        );
    }

    #[test]
    fn ordinales_en_espanol() {
        assert_eq!(numero_a_ordinal("1"), "1ra.");
        assert_eq!(numero_a_ordinal("2"), "2da.");
        assert_eq!(numero_a_ordinal("3"), "3ra.");
        assert_eq!(numero_a_ordinal("8"), "8va.");
        assert_eq!(numero_a_ordinal("11"), "11va.");
        assert_eq!(numero_a_ordinal("12"), "12va.");
        assert_eq!(numero_a_ordinal("13"), "13va.");
        assert_eq!(numero_a_ordinal("21"), "21ra.");
        assert_eq!(numero_a_ordinal("comisaría"), "comisaría");
        assert_eq!(numero_a_ordinal("0"), "0");
    }
}
