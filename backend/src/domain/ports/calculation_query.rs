//! Driving port for calculation read operations.

use async_trait::async_trait;

use crate::domain::{Calculation, CalculationId, Error};

use super::calculation_repository::{
    CountCalculationsRequest, ListCalculationsByShapeRequest, ListCalculationsRequest,
};

/// Driving port for calculation read operations.
///
/// Every listing is ordered newest first by creation time, with the
/// identifier as a descending tie-break.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalculationQuery: Send + Sync {
    /// Fetch one record, returning a `not_found` error when it is missing.
    async fn get(&self, id: CalculationId) -> Result<Calculation, Error>;

    /// List records with offset pagination.
    async fn list(&self, request: ListCalculationsRequest) -> Result<Vec<Calculation>, Error>;

    /// The `limit` newest records.
    async fn recent(&self, limit: u32) -> Result<Vec<Calculation>, Error>;

    /// List records for one shape name.
    async fn list_by_shape(
        &self,
        request: ListCalculationsByShapeRequest,
    ) -> Result<Vec<Calculation>, Error>;

    /// Count records, optionally restricted to one shape.
    async fn count(&self, request: CountCalculationsRequest) -> Result<u64, Error>;
}
