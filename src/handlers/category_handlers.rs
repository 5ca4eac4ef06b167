//! Category HTTP handlers.

use actix_web::{get, post, web, HttpResponse};

use crate::errors::{AppError, AppResult};
use crate::models::CategoriaPayload;
use crate::repository::CategoryRepository;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/categories")
            .service(list_categories)
            .service(create_category),
    );
}

#[get("")]
async fn list_categories(repo: web::Data<CategoryRepository>) -> AppResult<HttpResponse> {
    let categorias = repo
        .list()
        .await
        .map_err(|e| AppError::db("Error al obtener categorías", e))?;

    Ok(HttpResponse::Ok().json(categorias))
}

#[post("")]
async fn create_category(
    repo: web::Data<CategoryRepository>,
    body: web::Json<CategoriaPayload>,
) -> AppResult<HttpResponse> {
    let nombre = body
        .into_inner()
        .nombre
        .filter(|nombre| !nombre.is_empty())
        .ok_or_else(|| AppError::Validation("El nombre es obligatorio".to_string()))?;

    let categoria = repo
        .create(&nombre)
        .await
        .map_err(|e| AppError::db("Error al crear categoría", e))?;

    Ok(HttpResponse::Created().json(categoria))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::json;
    use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

    use super::*;

    fn repo_sin_almacen() -> web::Data<CategoryRepository> {
        let options = MySqlConnectOptions::new()
            .host("127.0.0.1")
            .port(9)
            .username("root")
            .database("api_productos");

        let pool = MySqlPoolOptions::new()
            .acquire_timeout(Duration::from_millis(250))
            .connect_lazy_with(options);

        web::Data::new(CategoryRepository::new(pool))
    }

    #[actix_web::test]
    async fn create_rejects_missing_nombre() {
        let app =
            test::init_service(App::new().app_data(repo_sin_almacen()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/categories")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "El nombre es obligatorio");
    }

    #[actix_web::test]
    async fn create_rejects_empty_nombre() {
        let app =
            test::init_service(App::new().app_data(repo_sin_almacen()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/categories")
            .set_json(json!({ "nombre": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn list_maps_store_failure_to_500() {
        let app =
            test::init_service(App::new().app_data(repo_sin_almacen()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Error al obtener categorías");
    }
}
