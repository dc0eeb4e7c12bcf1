//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CalculationCommand, CalculationQuery, CalculationRepository};
use crate::domain::{CalculationCommandService, CalculationQueryService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub calculations: Arc<dyn CalculationCommand>,
    pub calculations_query: Arc<dyn CalculationQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        calculations: Arc<dyn CalculationCommand>,
        calculations_query: Arc<dyn CalculationQuery>,
    ) -> Self {
        Self {
            calculations,
            calculations_query,
        }
    }

    /// Wire the command and query services over one shared repository.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use area_calculator::inbound::http::state::HttpState;
    /// use area_calculator::outbound::persistence::{DbPool, DieselCalculationRepository};
    ///
    /// fn wire(pool: DbPool) -> HttpState {
    ///     HttpState::from_repository(Arc::new(DieselCalculationRepository::new(pool)))
    /// }
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: CalculationRepository + 'static,
    {
        Self::new(
            Arc::new(CalculationCommandService::new(Arc::clone(&repository))),
            Arc::new(CalculationQueryService::new(repository)),
        )
    }
}
