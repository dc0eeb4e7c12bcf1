//! PostgreSQL-backed `CalculationRepository` implementation using Diesel ORM.
//!
//! Listings order by `created_at DESC, id DESC` so rows inserted within the
//! same timestamp still page deterministically.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{
    CalculationRepository, CalculationRepositoryError, CountCalculationsRequest,
    ListCalculationsByShapeRequest, ListCalculationsRequest,
};
use crate::domain::{Calculation, CalculationId, NewCalculation};

use super::models::{CalculationRow, NewCalculationRow};
use super::pool::{DbPool, PoolError};
use super::schema::calculations;

/// Diesel-backed implementation of the calculation repository port.
#[derive(Clone)]
pub struct DieselCalculationRepository {
    pool: DbPool,
}

impl DieselCalculationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CalculationRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    CalculationRepositoryError::connection(message)
}

fn map_diesel_error(error: diesel::result::Error) -> CalculationRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CalculationRepositoryError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => {
            CalculationRepositoryError::query("database query error")
        }
        _ => CalculationRepositoryError::query("database error"),
    }
}

fn to_count(value: impl TryInto<u64>) -> Result<u64, CalculationRepositoryError> {
    value
        .try_into()
        .map_err(|_| CalculationRepositoryError::query("row count out of range"))
}

#[async_trait]
impl CalculationRepository for DieselCalculationRepository {
    async fn create(
        &self,
        calculation: &NewCalculation,
    ) -> Result<Calculation, CalculationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: CalculationRow = diesel::insert_into(calculations::table)
            .values(NewCalculationRow::from(calculation))
            .returning(CalculationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(id = row.id, shape = %row.shape, "stored calculation");
        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: CalculationId,
    ) -> Result<Option<Calculation>, CalculationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        calculations::table
            .find(id.get())
            .select(CalculationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Calculation::from))
            .map_err(map_diesel_error)
    }

    async fn list(
        &self,
        request: &ListCalculationsRequest,
    ) -> Result<Vec<Calculation>, CalculationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CalculationRow> = calculations::table
            .select(CalculationRow::as_select())
            .order((calculations::created_at.desc(), calculations::id.desc()))
            .offset(i64::from(request.skip))
            .limit(i64::from(request.limit))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Calculation::from).collect())
    }

    async fn list_by_shape(
        &self,
        request: &ListCalculationsByShapeRequest,
    ) -> Result<Vec<Calculation>, CalculationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CalculationRow> = calculations::table
            .filter(calculations::shape.eq(&request.shape))
            .select(CalculationRow::as_select())
            .order((calculations::created_at.desc(), calculations::id.desc()))
            .limit(i64::from(request.limit))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Calculation::from).collect())
    }

    async fn count(
        &self,
        request: &CountCalculationsRequest,
    ) -> Result<u64, CalculationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = calculations::table.into_boxed::<diesel::pg::Pg>();
        if let Some(shape) = &request.shape {
            query = query.filter(calculations::shape.eq(shape.clone()));
        }

        let total: i64 = query
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        to_count(total)
    }

    async fn update_result(
        &self,
        id: CalculationId,
        result: f64,
    ) -> Result<Option<Calculation>, CalculationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(calculations::table.find(id.get()))
            .set(calculations::result.eq(result))
            .returning(CalculationRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map(|row| row.map(Calculation::from))
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: CalculationId) -> Result<bool, CalculationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(calculations::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, CalculationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(calculations::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        to_count(affected)
    }
}
