pub mod auth;
pub mod informes;
pub mod oficinas;
pub mod referencia;
