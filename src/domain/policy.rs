//! Política de autorización sobre informes: pure predicates and filters,
//! keyed by role through a single capability table so creation, visibility
//! and state-change checks never drift apart.

use sqlx::types::Uuid;

use crate::db::models::{Rol, SesionUsuario};

/// What a role is allowed to do with reports.
#[derive(Debug, Clone, Copy)]
pub struct Capacidades {
    /// May create reports in any department, not just their own.
    pub crear_en_cualquier_departamento: bool,
    /// May drive the estado workflow (review/approve/reject).
    pub cambiar_estado: bool,
    /// How far the role sees into the report store.
    pub alcance: AlcanceRol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlcanceRol {
    /// Own reports only (created by or assigned to the user).
    Propio,
    /// Every report of the user's department.
    Departamento,
    /// Every report of the user's office.
    Oficina,
    /// Everything.
    Total,
}

pub const fn capacidades(rol: Rol) -> Capacidades {
    match rol {
        Rol::Operador => Capacidades {
            crear_en_cualquier_departamento: false,
            cambiar_estado: false,
            alcance: AlcanceRol::Propio,
        },
        Rol::SupervisorDepartamental => Capacidades {
            crear_en_cualquier_departamento: false,
            cambiar_estado: true,
            alcance: AlcanceRol::Departamento,
        },
        Rol::SupervisorRegional => Capacidades {
            crear_en_cualquier_departamento: true,
            cambiar_estado: true,
            alcance: AlcanceRol::Oficina,
        },
        Rol::SupervisorGeneral => Capacidades {
            crear_en_cualquier_departamento: true,
            cambiar_estado: true,
            alcance: AlcanceRol::Total,
        },
        Rol::Admin => Capacidades {
            crear_en_cualquier_departamento: true,
            cambiar_estado: true,
            alcance: AlcanceRol::Total,
        },
    }
}

/// Visibility filter over the report store, ready to be translated to SQL by
/// the repository. A role scoped to a department or office the user does not
/// actually have falls back to unrestricted, matching the store semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlcanceInformes {
    Total,
    Oficina(Uuid),
    Departamento(Uuid),
    Propios {
        usuario: Uuid,
        departamento: Option<Uuid>,
    },
}

pub fn alcance_visibilidad(usuario: &SesionUsuario) -> AlcanceInformes {
    match capacidades(usuario.rol).alcance {
        AlcanceRol::Total => AlcanceInformes::Total,
        AlcanceRol::Oficina => match usuario.oficina_id {
            Some(oficina) => AlcanceInformes::Oficina(oficina),
            None => AlcanceInformes::Total,
        },
        AlcanceRol::Departamento => match usuario.departamento_id {
            Some(departamento) => AlcanceInformes::Departamento(departamento),
            None => AlcanceInformes::Total,
        },
        AlcanceRol::Propio => AlcanceInformes::Propios {
            usuario: usuario.id,
            departamento: usuario.departamento_id,
        },
    }
}

pub fn puede_crear_informe(
    rol: Rol,
    departamento_usuario: Option<Uuid>,
    departamento_informe: Uuid,
) -> bool {
    let caps = capacidades(rol);
    caps.crear_en_cualquier_departamento || departamento_usuario == Some(departamento_informe)
}

/// Single-record form of the visibility rule.
pub fn puede_ver_informe(
    usuario: &SesionUsuario,
    usuario_creador_id: Uuid,
    usuario_asignado_id: Option<Uuid>,
    departamento_id: Uuid,
    oficina_id: Uuid,
) -> bool {
    match capacidades(usuario.rol).alcance {
        AlcanceRol::Total => true,
        AlcanceRol::Oficina => usuario
            .oficina_id
            .map_or(true, |oficina| oficina == oficina_id),
        AlcanceRol::Departamento => usuario
            .departamento_id
            .map_or(true, |departamento| departamento == departamento_id),
        AlcanceRol::Propio => {
            usuario_creador_id == usuario.id || usuario_asignado_id == Some(usuario.id)
        }
    }
}

pub fn puede_cambiar_estado(rol: Rol) -> bool {
    capacidades(rol).cambiar_estado
}
