//! Driving port for calculation mutations.
//!
//! Inbound adapters use this port to record new square-area computations and
//! to maintain stored records without depending on repository details.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Calculation, CalculationId, Error, SideLength};

/// Request to overwrite the stored result of one calculation.
///
/// The new value is stored verbatim; it is not recomputed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateCalculationResultRequest {
    pub id: CalculationId,
    pub result: f64,
}

/// Driving port for calculation write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalculationCommand: Send + Sync {
    /// Compute the area of a square and persist the record.
    ///
    /// Callers validate the side length up front by constructing a
    /// [`SideLength`]; persistence failures surface as `Err(Error)`.
    async fn record_square_area(&self, side: SideLength) -> Result<Calculation, Error>;

    /// Overwrite the result of one record.
    ///
    /// Returns a `not_found` error when the identifier is unknown.
    async fn update_result(
        &self,
        request: UpdateCalculationResultRequest,
    ) -> Result<Calculation, Error>;

    /// Delete one record.
    ///
    /// Returns a `not_found` error when the identifier is unknown.
    async fn delete(&self, id: CalculationId) -> Result<(), Error>;

    /// Delete every record and report how many were removed.
    async fn delete_all(&self) -> Result<u64, Error>;
}
