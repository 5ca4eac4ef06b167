//! Product data access.
//!
//! Fixed parameterized queries; values are always bound out-of-band.
//! Reads go through the enriched select so every returned row carries the
//! category display name, null included.

use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;

use crate::errors::{RepoResult, RepositoryError};
use crate::models::{NuevoProducto, Producto};

const LIST_SQL: &str = r#"
SELECT p.IdProducto, p.CodigoBarra, p.Nombre, p.categoria_id,
       c.nombre AS Categoria, p.Marca, p.Precio
FROM productos p
LEFT JOIN categorias c ON p.categoria_id = c.id
ORDER BY p.IdProducto
"#;

const FIND_SQL: &str = r#"
SELECT p.IdProducto, p.CodigoBarra, p.Nombre, p.categoria_id,
       c.nombre AS Categoria, p.Marca, p.Precio
FROM productos p
LEFT JOIN categorias c ON p.categoria_id = c.id
WHERE p.IdProducto = ?
"#;

pub struct ProductRepository {
    pool: MySqlPool,
}

impl ProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// All products, enriched, ordered by ascending ID.
    pub async fn list(&self) -> RepoResult<Vec<Producto>> {
        let rows = sqlx::query(LIST_SQL).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(map_producto).collect())
    }

    /// One enriched product, or `RepositoryError::NotFound`.
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Producto> {
        let row = sqlx::query(FIND_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(map_producto(&row))
    }

    /// Insert a product and return the store-assigned ID.
    pub async fn create(&self, nuevo: &NuevoProducto) -> RepoResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO productos (CodigoBarra, Nombre, categoria_id, Marca, Precio)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&nuevo.codigo_barra)
        .bind(&nuevo.nombre)
        .bind(nuevo.categoria_id)
        .bind(&nuevo.marca)
        .bind(nuevo.precio)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i64)
    }

    /// Replace every writable column of the row matching `id`.
    ///
    /// No existence check: updating a missing ID succeeds silently at the
    /// store level and is caught by the caller's re-fetch.
    pub async fn update(&self, id: i64, datos: &NuevoProducto) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE productos
            SET CodigoBarra = ?, Nombre = ?, categoria_id = ?, Marca = ?, Precio = ?
            WHERE IdProducto = ?
            "#,
        )
        .bind(&datos.codigo_barra)
        .bind(&datos.nombre)
        .bind(datos.categoria_id)
        .bind(&datos.marca)
        .bind(datos.precio)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete the row matching `id`. Idempotent: zero matched rows still
    /// reports success.
    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        sqlx::query("DELETE FROM productos WHERE IdProducto = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn map_producto(row: &MySqlRow) -> Producto {
    Producto {
        id_producto: row.get("IdProducto"),
        codigo_barra: row.get("CodigoBarra"),
        nombre: row.get("Nombre"),
        categoria_id: row.get("categoria_id"),
        categoria: row.get("Categoria"),
        marca: row.get("Marca"),
        precio: row.get("Precio"),
    }
}
