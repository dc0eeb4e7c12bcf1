//! Domain primitives, ports, and services.
//!
//! Purpose: define the calculation record, the input rules that guard it, and
//! the services that inbound adapters drive. Types here carry no framework
//! dependencies beyond serde.
//!
//! Public surface:
//! - Calculation (alias to `calculation::Calculation`): one stored record.
//! - SideLength (alias to `calculation::SideLength`): validated square side.
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - TraceId (alias to `trace_id::TraceId`): request correlation identifier.

pub mod calculation;
mod calculation_service;
pub mod error;
pub mod geometry;
pub mod ports;
pub mod trace_id;

pub use self::calculation::{
    Calculation, CalculationId, MAX_SIDE_LENGTH, NewCalculation, SideLength,
    SideLengthValidationError,
};
pub use self::calculation_service::{
    CALCULATION_NOT_FOUND, CalculationCommandService, CalculationQueryService,
};
pub use self::error::{Error, ErrorCode};
pub use self::geometry::Shape;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use area_calculator::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Calculation not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
