//! Error types for the repository and handler layers.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Repository-level errors.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("registro no encontrado")]
    NotFound,

    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

/// Application-level errors, mapped onto the HTTP contract.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing/invalid required field. Client fault, never logged as a
    /// server error.
    #[error("{0}")]
    Validation(String),

    /// Lookup miss. Not a fault.
    #[error("{0}")]
    NotFound(&'static str),

    /// Store or connectivity failure. The response carries only the
    /// operation's public context message; the source error is logged
    /// server-side.
    #[error("{context}")]
    Database {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },
}

impl AppError {
    /// Wrap a repository failure with the public message for the failed
    /// operation.
    pub fn db(context: &'static str, source: RepositoryError) -> Self {
        Self::Database { context, source }
    }
}

pub type AppResult<T> = Result<T, AppError>;
pub type RepoResult<T> = Result<T, RepositoryError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Database { context, source } = self {
            error!(error = %source, "{context}");
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Validation("Nombre y Precio son campos requeridos".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::NotFound("Producto no encontrado");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_maps_to_500() {
        let err = AppError::db("Error al obtener productos", RepositoryError::NotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn database_response_hides_the_source_error() {
        let err = AppError::db(
            "Error al crear producto",
            RepositoryError::Query(sqlx::Error::PoolTimedOut),
        );

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Error al crear producto");
    }

    #[actix_web::test]
    async fn responses_carry_a_json_error_field() {
        let err = AppError::NotFound("Producto no encontrado");
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "Producto no encontrado");
    }
}
