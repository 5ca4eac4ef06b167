//! Data access layer: one repository per entity, each owning a handle to
//! the shared connection pool.

pub mod category_repository;
pub mod product_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::ProductRepository;
