//! Emisión y validación de tokens de sesión (JWT HS256).

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_minutes: i64,
}

impl TokenService {
    pub fn new(secret: String, ttl_minutes: i64) -> Self {
        Self {
            secret,
            ttl_minutes,
        }
    }

    pub fn emitir(&self, usuario_id: Uuid) -> Result<String, AppError> {
        let ahora = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            sub: usuario_id.to_string(),
            iat: ahora,
            exp: ahora + self.ttl_minutes * 60,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|err| AppError::InternalServerError(format!("Error al emitir el token: {err}")))
    }

    /// Returns the user id carried by a valid, unexpired token.
    pub fn validar(&self, token: &str) -> Result<Uuid, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|_| AppError::Authentication("Token inválido o expirado".to_string()))?;

        Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AppError::Authentication("Token inválido".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ida_y_vuelta_del_token() {
        let servicio = TokenService::new("secreto-de-prueba".to_string(), 15);
        let usuario_id = Uuid::new_v4();
        let token = servicio.emitir(usuario_id).expect("token");
        assert_eq!(servicio.validar(&token).expect("claims"), usuario_id);
    }

    #[test]
    fn token_con_otro_secreto_es_rechazado() {
        let emisor = TokenService::new("secreto-a".to_string(), 15);
        let validador = TokenService::new("secreto-b".to_string(), 15);
        let token = emisor.emitir(Uuid::new_v4()).expect("token");
        assert!(validador.validar(&token).is_err());
    }

    #[test]
    fn token_expirado_es_rechazado() {
        let servicio = TokenService::new("secreto".to_string(), -10);
        let token = servicio.emitir(Uuid::new_v4()).expect("token");
        assert!(servicio.validar(&token).is_err());
    }
}
