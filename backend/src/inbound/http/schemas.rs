//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request could not be decoded.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested calculation does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The database is unreachable or the pool is exhausted.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Calculation not found")]
    message: String,
    /// Correlation identifier matching the `Trace-Id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Calculation`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Calculation)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CalculationSchema {
    /// Store-assigned identifier.
    #[schema(example = 42)]
    id: i64,
    /// Shape name.
    #[schema(example = "square")]
    shape: String,
    /// Side length supplied by the caller.
    #[schema(example = 5.0)]
    input_value: f64,
    /// Stored area.
    #[schema(example = 25.0)]
    result: f64,
    /// Insert timestamp (RFC 3339).
    #[schema(value_type = String, format = DateTime, example = "2026-03-01T12:00:00Z")]
    created_at: String,
}
