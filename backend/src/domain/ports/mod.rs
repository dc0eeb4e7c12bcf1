//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`CalculationCommand`, `CalculationQuery`) are what inbound
//! adapters call. The driven port (`CalculationRepository`) is what the
//! persistence adapter implements.

mod macros;
pub(crate) use macros::define_port_error;

mod calculation_command;
mod calculation_query;
mod calculation_repository;

#[cfg(test)]
pub use calculation_command::MockCalculationCommand;
pub use calculation_command::{CalculationCommand, UpdateCalculationResultRequest};
#[cfg(test)]
pub use calculation_query::MockCalculationQuery;
pub use calculation_query::CalculationQuery;
#[cfg(test)]
pub use calculation_repository::MockCalculationRepository;
pub use calculation_repository::{
    CalculationRepository, CalculationRepositoryError, CountCalculationsRequest,
    ListCalculationsByShapeRequest, ListCalculationsRequest, SHAPE_LIST_LIMIT,
};
