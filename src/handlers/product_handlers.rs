//! Product HTTP handlers.
//!
//! Each handler validates required fields, calls the repository, and maps
//! outcomes onto the HTTP contract. Writes re-fetch the enriched row so
//! the response reflects exactly what the store persisted.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;

use crate::errors::{AppError, AppResult, RepositoryError};
use crate::models::{NuevoProducto, ProductoPayload};
use crate::repository::ProductRepository;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .service(list_products)
            .service(get_product)
            .service(create_product)
            .service(update_product)
            .service(delete_product),
    );
}

#[get("")]
async fn list_products(repo: web::Data<ProductRepository>) -> AppResult<HttpResponse> {
    let productos = repo
        .list()
        .await
        .map_err(|e| AppError::db("Error al obtener productos", e))?;

    Ok(HttpResponse::Ok().json(productos))
}

#[get("/{id}")]
async fn get_product(
    repo: web::Data<ProductRepository>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    match repo.find_by_id(path.into_inner()).await {
        Ok(producto) => Ok(HttpResponse::Ok().json(producto)),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound("Producto no encontrado")),
        Err(e) => Err(AppError::db("Error al obtener producto", e)),
    }
}

#[post("")]
async fn create_product(
    repo: web::Data<ProductRepository>,
    body: web::Json<ProductoPayload>,
) -> AppResult<HttpResponse> {
    let nuevo = validar_producto(body.into_inner())?;

    let id = repo
        .create(&nuevo)
        .await
        .map_err(|e| AppError::db("Error al crear producto", e))?;

    // Respond with the store-confirmed enriched row, not the input.
    let producto = repo
        .find_by_id(id)
        .await
        .map_err(|e| AppError::db("Error al crear producto", e))?;

    Ok(HttpResponse::Created().json(producto))
}

#[put("/{id}")]
async fn update_product(
    repo: web::Data<ProductRepository>,
    path: web::Path<i64>,
    body: web::Json<ProductoPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let datos = validar_producto(body.into_inner())?;

    repo.update(id, &datos)
        .await
        .map_err(|e| AppError::db("Error al actualizar producto", e))?;

    // The update itself is silent about missing rows; the re-fetch is
    // where a nonexistent ID surfaces.
    match repo.find_by_id(id).await {
        Ok(producto) => Ok(HttpResponse::Ok().json(producto)),
        Err(RepositoryError::NotFound) => Err(AppError::NotFound("Producto no encontrado")),
        Err(e) => Err(AppError::db("Error al actualizar producto", e)),
    }
}

#[delete("/{id}")]
async fn delete_product(
    repo: web::Data<ProductRepository>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    repo.delete(path.into_inner())
        .await
        .map_err(|e| AppError::db("Error al eliminar producto", e))?;

    // Delete is idempotent: success regardless of prior existence.
    Ok(HttpResponse::Ok().json(json!({ "message": "Producto eliminado correctamente" })))
}

/// Required-field check for create and update: `Nombre` must be a
/// non-empty string and `Precio` must be present (zero is valid).
fn validar_producto(payload: ProductoPayload) -> Result<NuevoProducto, AppError> {
    let ProductoPayload {
        codigo_barra,
        nombre,
        categoria_id,
        marca,
        precio,
    } = payload;

    match (nombre, precio) {
        (Some(nombre), Some(precio)) if !nombre.is_empty() => Ok(NuevoProducto {
            codigo_barra,
            nombre,
            categoria_id,
            marca,
            precio,
        }),
        _ => Err(AppError::Validation(
            "Nombre y Precio son campos requeridos".to_string(),
        )),
    }
}
