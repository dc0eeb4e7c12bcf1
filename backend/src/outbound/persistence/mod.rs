//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! The repository only translates between Diesel rows and domain types; row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module. Connections come from a shared `bb8` pool driven by
//! `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use area_calculator::outbound::persistence::{
//!     DbPool, DieselCalculationRepository, PoolConfig, ensure_schema,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/polygon_calculator")).await?;
//! ensure_schema(&pool).await?;
//! let repo = DieselCalculationRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_calculation_repository;
mod models;
mod pool;
mod schema;
mod schema_bootstrap;

pub use diesel_calculation_repository::DieselCalculationRepository;
pub use pool::{DbPool, DEFAULT_MAX_SIZE, PoolConfig, PoolError};
pub use schema_bootstrap::{SchemaError, ensure_schema};
