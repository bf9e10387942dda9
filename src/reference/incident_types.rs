//! Catálogo de tipos de hecho para los informes. Las opciones predefinidas
//! llevan solo el texto posterior a "SUPUESTO"; the caller prepends it when
//! composing the paragraph text. "otro" escapes to free text, used verbatim.

#[derive(Debug, Clone, Copy)]
pub struct TipoHecho {
    pub valor: &'static str,
    pub etiqueta: &'static str,
}

pub const TIPO_HECHO_OTRO: &str = "otro";

pub static TIPOS_HECHO: &[TipoHecho] = &[
    TipoHecho {
        valor: "hecho de hurto agravado",
        etiqueta: "Supuesto hecho de hurto agravado",
    },
    TipoHecho {
        valor: "hecho de abigeato",
        etiqueta: "Supuesto hecho de abigeato",
    },
    TipoHecho {
        valor: "hecho de hurto especialmente grave",
        etiqueta: "Supuesto hecho de hurto especialmente grave",
    },
    TipoHecho {
        valor: "hecho de robo",
        etiqueta: "Supuesto hecho de robo",
    },
    TipoHecho {
        valor: "hecho de robo agravado",
        etiqueta: "Supuesto hecho de robo agravado",
    },
    TipoHecho {
        valor: "hecho de robo con resultado de muerte o lesión grave",
        etiqueta: "Supuesto hecho de robo con resultado de muerte o lesión grave",
    },
    TipoHecho {
        valor: "hecho de estafa",
        etiqueta: "Supuesto hecho de estafa",
    },
    TipoHecho {
        valor: "hecho de producción de riesgos comunes",
        etiqueta: "Supuesto hecho de producción de riesgos comunes",
    },
    TipoHecho {
        valor: "hecho de homicidio doloso",
        etiqueta: "Supuesto hecho de homicidio doloso",
    },
    TipoHecho {
        valor: "hecho de homicidio culposo",
        etiqueta: "Supuesto hecho de homicidio culposo",
    },
    TipoHecho {
        valor: TIPO_HECHO_OTRO,
        etiqueta: "Otro (especificar)",
    },
];

/// Paragraph text for a predefined incident type: `SUPUESTO` plus the value
/// in uppercase. Free-text ("otro") values are the caller's responsibility.
pub fn texto_supuesto(valor: &str) -> String {
    format!("SUPUESTO {}", valor.to_uppercase())
}

pub fn es_tipo_predefinido(valor: &str) -> bool {
    valor != TIPO_HECHO_OTRO && TIPOS_HECHO.iter().any(|t| t.valor == valor)
}

/// Stored text for an incoming tipo de hecho: predefined catalog values get
/// the `SUPUESTO` prefix; free text (the "otro" escape) is stored verbatim.
pub fn normalizar_tipo_hecho(valor: &str) -> String {
    if es_tipo_predefinido(valor) {
        texto_supuesto(valor)
    } else {
        valor.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogo_con_escape_a_texto_libre() {
        assert!(TIPOS_HECHO.iter().any(|t| t.valor == TIPO_HECHO_OTRO));
        assert!(es_tipo_predefinido("hecho de robo"));
        assert!(!es_tipo_predefinido(TIPO_HECHO_OTRO));
        assert!(!es_tipo_predefinido("hecho inventado"));
    }

    #[test]
    fn normalizacion_del_tipo_recibido() {
        assert_eq!(
            normalizar_tipo_hecho("hecho de robo"),
            "SUPUESTO HECHO DE ROBO"
        );
        assert_eq!(
            normalizar_tipo_hecho("HECHO DE SECUESTRO EXPRESS"),
            "HECHO DE SECUESTRO EXPRESS"
        );
    }

    #[test]
    fn texto_para_el_parrafo() {
        assert_eq!(texto_supuesto("hecho de robo"), "SUPUESTO HECHO DE ROBO");
        assert_eq!(
            texto_supuesto("hecho de homicidio doloso"),
            "SUPUESTO HECHO DE HOMICIDIO DOLOSO"
        );
    }
}
