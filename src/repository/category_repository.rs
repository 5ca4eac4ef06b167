//! Category data access.

use sqlx::mysql::MySqlPool;
use sqlx::Row;

use crate::errors::RepoResult;
use crate::models::Categoria;

pub struct CategoryRepository {
    pool: MySqlPool,
}

impl CategoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// All categories in the store's natural order.
    pub async fn list(&self) -> RepoResult<Vec<Categoria>> {
        let rows = sqlx::query("SELECT id, nombre FROM categorias")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Categoria {
                id: row.get("id"),
                nombre: row.get("nombre"),
            })
            .collect())
    }

    /// Insert a category and return the assigned ID paired with the given
    /// name. No re-fetch: the row has no derived fields.
    pub async fn create(&self, nombre: &str) -> RepoResult<Categoria> {
        let result = sqlx::query("INSERT INTO categorias (nombre) VALUES (?)")
            .bind(nombre)
            .execute(&self.pool)
            .await?;

        Ok(Categoria {
            id: result.last_insert_id() as i64,
            nombre: nombre.to_string(),
        })
    }
}
