//! Test utilities shared by unit tests and the `tests/` integration suites.
//!
//! Compiled for unit tests and whenever the `test-support` feature is enabled.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    CalculationRepository, CalculationRepositoryError, CountCalculationsRequest,
    ListCalculationsByShapeRequest, ListCalculationsRequest,
};
use crate::domain::{Calculation, CalculationId, NewCalculation};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Calculation>,
    last_id: i64,
}

/// Process-local `CalculationRepository` with the same ordering and
/// identifier rules as the PostgreSQL adapter.
///
/// Identifiers come from a monotonic counter and are never reused after a
/// delete. Listings are newest first with the identifier as tie-break.
///
/// # Examples
/// ```
/// use area_calculator::domain::ports::{CalculationRepository, CountCalculationsRequest};
/// use area_calculator::domain::{NewCalculation, SideLength};
/// use area_calculator::test_support::InMemoryCalculationRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryCalculationRepository::default();
/// let side = SideLength::new(5.0).expect("valid side");
/// let stored = repo.create(&NewCalculation::square(side)).await.expect("insert");
/// assert_eq!(stored.result, 25.0);
/// assert_eq!(repo.count(&CountCalculationsRequest::all()).await.expect("count"), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCalculationRepository {
    table: Mutex<Table>,
}

impl InMemoryCalculationRepository {
    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn newest_first(rows: &[Calculation]) -> impl Iterator<Item = &Calculation> {
        let mut ordered: Vec<&Calculation> = rows.iter().collect();
        ordered.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        ordered.into_iter()
    }
}

fn to_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[async_trait]
impl CalculationRepository for InMemoryCalculationRepository {
    async fn create(
        &self,
        calculation: &NewCalculation,
    ) -> Result<Calculation, CalculationRepositoryError> {
        let mut table = self.table();
        table.last_id += 1;
        let stored = Calculation {
            id: CalculationId::new(table.last_id),
            shape: calculation.shape.clone(),
            input_value: calculation.input_value,
            result: calculation.result,
            created_at: Utc::now(),
        };
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: CalculationId,
    ) -> Result<Option<Calculation>, CalculationRepositoryError> {
        Ok(self.table().rows.iter().find(|row| row.id == id).cloned())
    }

    async fn list(
        &self,
        request: &ListCalculationsRequest,
    ) -> Result<Vec<Calculation>, CalculationRepositoryError> {
        let table = self.table();
        Ok(Self::newest_first(&table.rows)
            .skip(to_usize(request.skip))
            .take(to_usize(request.limit))
            .cloned()
            .collect())
    }

    async fn list_by_shape(
        &self,
        request: &ListCalculationsByShapeRequest,
    ) -> Result<Vec<Calculation>, CalculationRepositoryError> {
        let table = self.table();
        Ok(Self::newest_first(&table.rows)
            .filter(|row| row.shape == request.shape)
            .take(to_usize(request.limit))
            .cloned()
            .collect())
    }

    async fn count(
        &self,
        request: &CountCalculationsRequest,
    ) -> Result<u64, CalculationRepositoryError> {
        let table = self.table();
        let total = table
            .rows
            .iter()
            .filter(|row| request.shape.as_deref().is_none_or(|shape| row.shape == shape))
            .count();
        u64::try_from(total).map_err(|_| CalculationRepositoryError::query("count overflow"))
    }

    async fn update_result(
        &self,
        id: CalculationId,
        result: f64,
    ) -> Result<Option<Calculation>, CalculationRepositoryError> {
        let mut table = self.table();
        Ok(table.rows.iter_mut().find(|row| row.id == id).map(|row| {
            row.result = result;
            row.clone()
        }))
    }

    async fn delete(&self, id: CalculationId) -> Result<bool, CalculationRepositoryError> {
        let mut table = self.table();
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        Ok(table.rows.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, CalculationRepositoryError> {
        let mut table = self.table();
        let removed = table.rows.len();
        table.rows.clear();
        u64::try_from(removed).map_err(|_| CalculationRepositoryError::query("count overflow"))
    }
}
