//! Domain models and request payloads.
//!
//! Wire field names are part of the API contract and are preserved via
//! serde renames; struct fields stay snake_case.

use serde::{Deserialize, Serialize};

/// Product row enriched with its category's display name.
///
/// `categoria` comes from a LEFT JOIN, so it is null both for
/// uncategorized products and for dangling category references.
#[derive(Debug, Clone, Serialize)]
pub struct Producto {
    #[serde(rename = "IdProducto")]
    pub id_producto: i64,
    #[serde(rename = "CodigoBarra")]
    pub codigo_barra: Option<String>,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    pub categoria_id: Option<i64>,
    #[serde(rename = "Categoria")]
    pub categoria: Option<String>,
    #[serde(rename = "Marca")]
    pub marca: Option<String>,
    #[serde(rename = "Precio")]
    pub precio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Categoria {
    pub id: i64,
    pub nombre: String,
}

/// Inbound body for product create/update.
///
/// Every field deserializes as `Option` so the handler can answer the
/// contract's 400 message for missing required fields instead of a serde
/// error.
#[derive(Debug, Deserialize)]
pub struct ProductoPayload {
    #[serde(rename = "CodigoBarra")]
    pub codigo_barra: Option<String>,
    #[serde(rename = "Nombre")]
    pub nombre: Option<String>,
    pub categoria_id: Option<i64>,
    #[serde(rename = "Marca")]
    pub marca: Option<String>,
    #[serde(rename = "Precio")]
    pub precio: Option<f64>,
}

/// Validated write set for a product insert or wholesale update.
///
/// Optional fields bind as SQL NULL when `None`; provided values are
/// stored as-is (an explicit empty string stays an empty string).
#[derive(Debug, Clone)]
pub struct NuevoProducto {
    pub codigo_barra: Option<String>,
    pub nombre: String,
    pub categoria_id: Option<i64>,
    pub marca: Option<String>,
    pub precio: f64,
}

/// Inbound body for category create.
#[derive(Debug, Deserialize)]
pub struct CategoriaPayload {
    pub nombre: Option<String>,
}
