//! Driven port for calculation persistence.
//!
//! Every operation runs against the single `calculations` table and commits
//! on its own; there is no cross-operation transaction and no optimistic
//! concurrency check, so concurrent updates to one record are last-writer-wins.

use async_trait::async_trait;

use crate::domain::{Calculation, CalculationId, NewCalculation};

use super::define_port_error;

/// Cap applied to every shape-filtered listing.
pub const SHAPE_LIST_LIMIT: u32 = 50;

/// Offset pagination over the newest-first ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCalculationsRequest {
    /// Records to skip from the newest end.
    pub skip: u32,
    /// Maximum records to return.
    pub limit: u32,
}

impl ListCalculationsRequest {
    /// Construct a page request.
    pub const fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// First page of `limit` records.
    pub const fn first(limit: u32) -> Self {
        Self::new(0, limit)
    }
}

/// Newest-first listing restricted to one shape name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCalculationsByShapeRequest {
    /// Exact shape name to match.
    pub shape: String,
    /// Maximum records to return.
    pub limit: u32,
}

impl ListCalculationsByShapeRequest {
    /// Filter by `shape`, capped at [`SHAPE_LIST_LIMIT`].
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            limit: SHAPE_LIST_LIMIT,
        }
    }
}

/// Row count, optionally restricted to one shape name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountCalculationsRequest {
    /// Exact shape name to match; `None` counts every row.
    pub shape: Option<String>,
}

impl CountCalculationsRequest {
    /// Count every row.
    pub const fn all() -> Self {
        Self { shape: None }
    }

    /// Count rows for one shape.
    pub fn for_shape(shape: impl Into<String>) -> Self {
        Self {
            shape: Some(shape.into()),
        }
    }
}

define_port_error! {
    /// Errors raised by calculation repository adapters.
    pub enum CalculationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "calculation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "calculation repository query failed: {message}",
    }
}

/// Port for reading and writing calculation records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalculationRepository: Send + Sync {
    /// Insert one record; the store assigns `id` and `created_at`.
    async fn create(
        &self,
        calculation: &NewCalculation,
    ) -> Result<Calculation, CalculationRepositoryError>;

    /// Fetch one record by identifier.
    async fn find_by_id(
        &self,
        id: CalculationId,
    ) -> Result<Option<Calculation>, CalculationRepositoryError>;

    /// List records newest first with offset pagination.
    async fn list(
        &self,
        request: &ListCalculationsRequest,
    ) -> Result<Vec<Calculation>, CalculationRepositoryError>;

    /// List records for one shape, newest first.
    async fn list_by_shape(
        &self,
        request: &ListCalculationsByShapeRequest,
    ) -> Result<Vec<Calculation>, CalculationRepositoryError>;

    /// Count records, optionally for one shape.
    async fn count(
        &self,
        request: &CountCalculationsRequest,
    ) -> Result<u64, CalculationRepositoryError>;

    /// Overwrite the stored result without recomputing it.
    ///
    /// Returns `None` when no record has the identifier.
    async fn update_result(
        &self,
        id: CalculationId,
        result: f64,
    ) -> Result<Option<Calculation>, CalculationRepositoryError>;

    /// Delete one record, reporting whether a row was removed.
    async fn delete(&self, id: CalculationId) -> Result<bool, CalculationRepositoryError>;

    /// Delete every record, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, CalculationRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_page_starts_at_the_newest_record() {
        assert_eq!(
            ListCalculationsRequest::first(5),
            ListCalculationsRequest::new(0, 5)
        );
    }

    #[rstest]
    fn shape_request_is_capped() {
        let request = ListCalculationsByShapeRequest::new("square");
        assert_eq!(request.limit, SHAPE_LIST_LIMIT);
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = CalculationRepositoryError::connection("pool timed out");
        assert_eq!(
            err.to_string(),
            "calculation repository connection failed: pool timed out"
        );
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = CalculationRepositoryError::query("relation missing");
        assert!(err.to_string().contains("relation missing"));
    }
}
