mod departamento;
mod informe;
mod oficina;
mod usuario;

pub use departamento::*;
pub use informe::*;
pub use oficina::*;
pub use usuario::*;
