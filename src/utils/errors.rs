//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores de la aplicación
//! y helpers para construirlos de forma consistente.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} '{}' no encontrado", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_field() {
        let error = validation_error("name", "El nombre es requerido");
        match error {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("name"));
            }
            other => panic!("Se esperaba un error de validación, se obtuvo: {}", other),
        }
    }

    #[test]
    fn test_not_found_error_message() {
        let error = not_found_error("Vehículo", "abc");
        assert_eq!(error.to_string(), "Not found: Vehículo 'abc' no encontrado");
    }
}
