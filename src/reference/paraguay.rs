//! Datos geográficos estáticos del Paraguay: 17 departamentos más la Capital,
//! con sus ciudades. Pure lookups, no state.

/// División territorial usada por los selectores de comisaría.
#[derive(Debug, Clone, Copy)]
pub struct GeoDepartamento {
    pub nombre: &'static str,
    pub ciudades: &'static [&'static str],
}

pub static DEPARTAMENTOS_PY: &[GeoDepartamento] = &[
    GeoDepartamento {
        nombre: "Alto Paraguay",
        ciudades: &[
            "Bahía Negra", "Capitán Carmelo Peralta", "Fuerte Olimpo", "Puerto Casado",
        ],
    },
    GeoDepartamento {
        nombre: "Alto Paraná",
        ciudades: &[
            "Ciudad del Este", "Doctor Juan León Mallorquín", "Doctor Raúl Peña",
            "Domingo Martínez de Irala", "Hernandarias", "Iruña", "Itakyry",
            "Juan Emiliano O'Leary", "Los Cedrales", "Mbaracayú", "Minga Guazú", "Minga Porá",
            "Naranjal", "Ñacunday", "Presidente Franco", "San Alberto", "San Cristóbal",
            "Santa Fe del Paraná", "Santa Rita", "Santa Rosa del Monday", "Tavapy", "Yguazú",
        ],
    },
    GeoDepartamento {
        nombre: "Amambay",
        ciudades: &[
            "Bella Vista Norte", "Capitán Bado", "Cerro Corá", "Karapaí", "Pedro Juan Caballero",
            "Zanja Pytá",
        ],
    },
    GeoDepartamento {
        nombre: "Asunción",
        ciudades: &[
            "Asunción",
        ],
    },
    GeoDepartamento {
        nombre: "Boquerón",
        ciudades: &[
            "Boquerón", "Filadelfia", "Loma Plata", "Mariscal José Félix Estigarribia",
        ],
    },
    GeoDepartamento {
        nombre: "Caaguazú",
        ciudades: &[
            "Caaguazú", "Carayaó", "Coronel Oviedo", "Doctor Cecilio Báez",
            "Doctor Juan Eulogio Estigarribia", "Doctor Juan Manuel Frutos",
            "José Domingo Ocampos", "La Pastora", "Mariscal Francisco Solano López",
            "Nueva Londres", "Nueva Toledo", "Raúl Arsenio Oviedo",
            "Regimiento de Infantería Tres Corrales", "Repatriación", "San Joaquín",
            "San José de los Arroyos", "Santa Rosa del Mbutuy", "Simón Bolívar", "Tembiaporá",
            "Tres de Febrero", "Vaquería", "Yhú",
        ],
    },
    GeoDepartamento {
        nombre: "Caazapá",
        ciudades: &[
            "Abaí", "Buena Vista", "Caazapá", "Doctor Moisés Santiago Bertoni",
            "Fulgencio Yegros", "General Higinio Morínigo", "Maciel", "San Juan Nepomuceno",
            "Tavaí", "Tres de Mayo", "Yuty",
        ],
    },
    GeoDepartamento {
        nombre: "Canindeyú",
        ciudades: &[
            "Corpus Christi", "Curuguaty", "General Francisco Caballero Álvarez", "Itanará",
            "Katueté", "La Paloma del Espíritu Santo", "Laurel", "Maracaná", "Nueva Esperanza",
            "Puerto Adela", "Salto del Guairá", "Villa Ygatimí", "Yasy Cañy", "Yby Pytá",
            "Ybyrarobaná", "Ypejhú",
        ],
    },
    GeoDepartamento {
        nombre: "Central",
        ciudades: &[
            "Areguá", "Capiatá", "Fernando de la Mora", "Guarambaré", "Itá", "Itauguá",
            "Julián Augusto Saldívar", "Lambaré", "Limpio", "Luque", "Mariano Roque Alonso",
            "Nueva Italia", "Ñemby", "San Antonio", "San Lorenzo", "Villa Elisa", "Villeta",
            "Ypacaraí", "Ypané",
        ],
    },
    GeoDepartamento {
        nombre: "Concepción",
        ciudades: &[
            "Arroyito", "Azotey", "Belén", "Concepción", "Horqueta", "Itacuá", "Loreto",
            "Paso Barreto", "Paso Horqueta", "San Alfredo", "San Carlos del Apa", "San Lázaro",
            "Sargento José Félix López", "Yby Yaú",
        ],
    },
    GeoDepartamento {
        nombre: "Cordillera",
        ciudades: &[
            "Altos", "Arroyos y Esteros", "Atyrá", "Caacupé", "Caraguatay", "Emboscada",
            "Eusebio Ayala", "Isla Pucú", "Itacurubí de la Cordillera", "Juan de Mena",
            "Loma Grande", "Mbocayaty del Yhaguy", "Nueva Colombia", "Piribebuy",
            "Primero de Marzo", "San Bernardino", "San José Obrero", "Santa Elena", "Tobatí",
            "Valenzuela",
        ],
    },
    GeoDepartamento {
        nombre: "Guairá",
        ciudades: &[
            "Borja", "Capitán Mauricio José Troche", "Coronel Martínez", "Doctor Botrell",
            "Félix Pérez Cardozo", "General Eugenio Alejandrino Garay", "Independencia", "Itapé",
            "Iturbe", "José A. Fassardi", "Mbocayaty del Guairá", "Natalicio Talavera", "Ñumí",
            "Paso Yobái", "San Salvador", "Tebicuary", "Villarrica", "Yataity del Guairá",
        ],
    },
    GeoDepartamento {
        nombre: "Itapúa",
        ciudades: &[
            "Alto Verá", "Bella Vista", "Cambyretá", "Capitán Meza", "Capitán Miranda",
            "Carlos Antonio López", "Carmen del Paraná", "Coronel José Félix Bogado", "Edelira",
            "Encarnación", "Fram", "General Artigas", "General Delgado", "Hohenau", "Itapúa Poty",
            "Jesús de Tavarangüé", "José Leandro Oviedo", "La Paz", "Mayor Julio Dionisio Otaño",
            "Natalio", "Nueva Alborada", "Obligado",
        ],
    },
    GeoDepartamento {
        nombre: "Misiones",
        ciudades: &[
            "Ayolas", "San Ignacio Guazú", "San Juan Bautista", "San Miguel", "San Patricio",
            "Santa María de Fe", "Santa Rosa de Lima", "Santiago", "Villa Florida", "Yabebyry",
        ],
    },
    GeoDepartamento {
        nombre: "Ñeembucú",
        ciudades: &[
            "Alberdi", "Cerrito", "Desmochados", "General José Eduvigis Díaz", "Guazú Cuá",
            "Humaitá", "Isla Umbú", "Laureles", "Mayor José Martínez", "Paso de Patria", "Pilar",
            "San Juan Bautista de Ñeembucú", "Tacuaras", "Villa Franca", "Villa Oliva",
            "Villalbín",
        ],
    },
    GeoDepartamento {
        nombre: "Paraguarí",
        ciudades: &[
            "Acahay", "Caapucú", "Carapeguá", "Escobar", "General Bernardino Caballero",
            "La Colmena", "María Antonia", "Mbuyapey", "Paraguarí", "Pirayú", "Quiindy",
            "Quyquyhó", "San Roque González de Santa Cruz", "Sapucai", "Tebicuarymí", "Yaguarón",
            "Ybycuí", "Ybytymí",
        ],
    },
    GeoDepartamento {
        nombre: "Presidente Hayes",
        ciudades: &[
            "Benjamín Aceval", "Campo Aceval", "General José María Bruguez", "José Falcón",
            "Nanawa", "Nueva Asunción", "Puerto Pinasco", "Teniente Esteban Martínez",
            "Teniente Primero Manuel Irala Fernández", "Villa Hayes",
        ],
    },
    GeoDepartamento {
        nombre: "San Pedro",
        ciudades: &[
            "Antequera", "Capiibary", "Choré", "General Elizardo Aquino",
            "General Isidoro Resquín", "Guayaibí", "Itacurubí del Rosario", "Liberación", "Lima",
            "Nueva Germania", "San Estanislao", "San José del Rosario", "San Pablo",
            "San Pedro de Ycuamandiyú", "San Vicente Pancholo", "Santa Rosa del Aguaray",
            "Tacuatí", "Unión", "Veinticinco de Diciembre", "Villa del Rosario",
            "Yataity del Norte", "Yrybucuá",
        ],
    },];

/// Nombres de todos los departamentos, in declaration order.
pub fn nombres_departamentos() -> Vec<&'static str> {
    DEPARTAMENTOS_PY.iter().map(|d| d.nombre).collect()
}

/// Case-insensitive department lookup.
pub fn buscar_departamento(nombre: &str) -> Option<&'static GeoDepartamento> {
    DEPARTAMENTOS_PY
        .iter()
        .find(|d| d.nombre.to_lowercase() == nombre.to_lowercase())
}

pub fn ciudades_de(departamento: &str) -> Option<&'static [&'static str]> {
    buscar_departamento(departamento).map(|d| d.ciudades)
}

pub fn existe_departamento(nombre: &str) -> bool {
    buscar_departamento(nombre).is_some()
}
