mod informe_repository;
mod oficina_repository;
mod usuario_repository;

pub use informe_repository::{FiltrosInforme, InformeRepository};
pub use oficina_repository::OficinaRepository;
pub use usuario_repository::UsuarioRepository;
