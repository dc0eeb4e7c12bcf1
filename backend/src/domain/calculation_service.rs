//! Calculation domain services.
//!
//! These services implement the calculation driving ports on top of any
//! [`CalculationRepository`] adapter.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    CalculationCommand, CalculationQuery, CalculationRepository, CalculationRepositoryError,
    CountCalculationsRequest, ListCalculationsByShapeRequest, ListCalculationsRequest,
    UpdateCalculationResultRequest,
};
use crate::domain::{Calculation, CalculationId, Error, NewCalculation, SideLength};

/// Detail message returned when a record cannot be found.
pub const CALCULATION_NOT_FOUND: &str = "Calculation not found";

fn map_repository_error(error: CalculationRepositoryError) -> Error {
    match error {
        CalculationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("calculation repository unavailable: {message}"))
        }
        CalculationRepositoryError::Query { message } => {
            Error::internal(format!("calculation repository error: {message}"))
        }
    }
}

fn not_found() -> Error {
    Error::not_found(CALCULATION_NOT_FOUND)
}

/// Calculation service implementing the command driving port.
#[derive(Clone)]
pub struct CalculationCommandService<R> {
    calculation_repo: Arc<R>,
}

impl<R> CalculationCommandService<R> {
    /// Create a new command service with the calculation repository.
    pub fn new(calculation_repo: Arc<R>) -> Self {
        Self { calculation_repo }
    }
}

#[async_trait]
impl<R> CalculationCommand for CalculationCommandService<R>
where
    R: CalculationRepository,
{
    async fn record_square_area(&self, side: SideLength) -> Result<Calculation, Error> {
        self.calculation_repo
            .create(&NewCalculation::square(side))
            .await
            .map_err(map_repository_error)
    }

    async fn update_result(
        &self,
        request: UpdateCalculationResultRequest,
    ) -> Result<Calculation, Error> {
        self.calculation_repo
            .update_result(request.id, request.result)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)
    }

    async fn delete(&self, id: CalculationId) -> Result<(), Error> {
        let removed = self
            .calculation_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(not_found());
        }
        debug!(%id, "deleted calculation");
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, Error> {
        let deleted = self
            .calculation_repo
            .delete_all()
            .await
            .map_err(map_repository_error)?;
        debug!(deleted, "cleared calculations");
        Ok(deleted)
    }
}

/// Calculation service implementing the query driving port.
#[derive(Clone)]
pub struct CalculationQueryService<R> {
    calculation_repo: Arc<R>,
}

impl<R> CalculationQueryService<R> {
    /// Create a new query service with the calculation repository.
    pub fn new(calculation_repo: Arc<R>) -> Self {
        Self { calculation_repo }
    }
}

#[async_trait]
impl<R> CalculationQuery for CalculationQueryService<R>
where
    R: CalculationRepository,
{
    async fn get(&self, id: CalculationId) -> Result<Calculation, Error> {
        self.calculation_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)
    }

    async fn list(&self, request: ListCalculationsRequest) -> Result<Vec<Calculation>, Error> {
        self.calculation_repo
            .list(&request)
            .await
            .map_err(map_repository_error)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Calculation>, Error> {
        self.list(ListCalculationsRequest::first(limit)).await
    }

    async fn list_by_shape(
        &self,
        request: ListCalculationsByShapeRequest,
    ) -> Result<Vec<Calculation>, Error> {
        self.calculation_repo
            .list_by_shape(&request)
            .await
            .map_err(map_repository_error)
    }

    async fn count(&self, request: CountCalculationsRequest) -> Result<u64, Error> {
        self.calculation_repo
            .count(&request)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "calculation_service_tests.rs"]
mod tests;
