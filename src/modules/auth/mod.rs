pub mod handlers;
pub mod password;
pub mod routes;
pub mod token;

pub use handlers::authenticate;
pub use token::TokenService;
