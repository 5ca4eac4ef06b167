//! HTTP handlers, plus the fallbacks that keep every response on the JSON
//! contract.

pub mod category_handlers;
pub mod product_handlers;

use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

/// Uniform fallback for unmatched method/path pairs.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Ruta no encontrada" }))
}

/// Undeserializable JSON bodies answer 400 with a JSON body instead of the
/// framework's plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(json!({ "error": "Cuerpo de la petición inválido" }));
    InternalError::from_response(err, response).into()
}

/// A non-numeric id segment matches no row; answer it like any other miss.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::NotFound().json(json!({ "error": "Producto no encontrado" }));
    InternalError::from_response(err, response).into()
}
