//! Idempotent startup DDL for the `calculations` table.
//!
//! Runs once before the server binds. Every statement uses `IF NOT EXISTS`
//! so repeated startups against the same database are no-ops.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::pool::{DbPool, PoolError};

const CREATE_CALCULATIONS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS calculations (
    id BIGSERIAL PRIMARY KEY,
    shape VARCHAR(50) NOT NULL,
    input_value DOUBLE PRECISION NOT NULL,
    result DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

const CREATE_RECENCY_INDEX: &str = "\
CREATE INDEX IF NOT EXISTS calculations_created_at_idx \
ON calculations (created_at DESC, id DESC)";

/// Errors raised while ensuring the schema exists.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// No connection could be checked out.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A DDL statement failed.
    #[error("schema statement failed: {0}")]
    Statement(#[from] diesel::result::Error),
}

/// Create the `calculations` table and its recency index when missing.
///
/// # Errors
///
/// Returns [`SchemaError`] when a connection cannot be obtained or a
/// statement is rejected.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    let mut conn = pool.get().await?;
    for statement in [CREATE_CALCULATIONS_TABLE, CREATE_RECENCY_INDEX] {
        diesel::sql_query(statement).execute(&mut conn).await?;
    }
    info!("calculations schema ready");
    Ok(())
}
