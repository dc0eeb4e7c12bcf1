//! Calculation record HTTP handlers.
//!
//! ```text
//! GET    /api/calculations?skip=&limit=
//! GET    /api/calculations/recent?limit=
//! GET    /api/calculations/shape/{shape}
//! GET    /api/calculations/{id}
//! PUT    /api/calculations/{id}/result
//! DELETE /api/calculations/{id}
//! DELETE /api/calculations
//! ```
//!
//! `recent` and `shape/{shape}` must be registered ahead of `{id}` so the
//! literal segments win. [`configure`] does this.
//!
//! A missing record is answered with 404 and the shared error payload,
//! `{"code": "not_found", "message": "Calculation not found", "traceId": ...}`.
//! Clients written against a bare `{"detail": ...}` body should read
//! `message` instead.

use actix_web::{delete, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{
    ListCalculationsByShapeRequest, ListCalculationsRequest, UpdateCalculationResultRequest,
};
use crate::domain::{Calculation, CalculationId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CalculationSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Page size used by `GET /api/calculations` when `limit` is omitted.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
/// Page size used by `GET /api/calculations/recent` when `limit` is omitted.
pub const DEFAULT_RECENT_PAGE_LIMIT: u32 = 5;

/// Offset pagination for the full listing.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Records to skip from the newest end.
    #[serde(default)]
    pub skip: u32,
    /// Maximum records to return.
    #[serde(default = "default_page_limit")]
    #[param(default = 10)]
    pub limit: u32,
}

const fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

/// Size of the recent listing.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentQuery {
    /// Maximum records to return.
    #[serde(default = "default_recent_limit")]
    #[param(default = 5)]
    pub limit: u32,
}

const fn default_recent_limit() -> u32 {
    DEFAULT_RECENT_PAGE_LIMIT
}

/// Body of `PUT /api/calculations/{id}/result`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
pub struct UpdateResultBody {
    #[schema(example = 30.0)]
    pub result: f64,
}

/// Confirmation returned after deleting one record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeletedMessage {
    #[schema(example = "Calculation 42 deleted")]
    pub message: String,
}

/// Confirmation returned after clearing every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeletedCount {
    #[schema(example = 12)]
    pub deleted: u64,
}

/// Register every calculation route in matching order.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_recent_calculations)
        .service(list_calculations_by_shape)
        .service(list_calculations)
        .service(delete_all_calculations)
        .service(get_calculation)
        .service(update_calculation_result)
        .service(delete_calculation);
}

/// List records newest first.
#[utoipa::path(
    get,
    path = "/api/calculations",
    params(ListQuery),
    responses(
        (status = 200, description = "Records, newest first", body = [CalculationSchema]),
        (status = 400, description = "Undecodable query parameters", body = ErrorSchema)
    ),
    tags = ["calculations"],
    operation_id = "listCalculations"
)]
#[get("/calculations")]
pub async fn list_calculations(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<Vec<Calculation>>> {
    let ListQuery { skip, limit } = query.into_inner();
    let records = state
        .calculations_query
        .list(ListCalculationsRequest::new(skip, limit))
        .await?;
    Ok(web::Json(records))
}

/// The most recent records.
#[utoipa::path(
    get,
    path = "/api/calculations/recent",
    params(RecentQuery),
    responses(
        (status = 200, description = "Records, newest first", body = [CalculationSchema]),
        (status = 400, description = "Undecodable query parameters", body = ErrorSchema)
    ),
    tags = ["calculations"],
    operation_id = "listRecentCalculations"
)]
#[get("/calculations/recent")]
pub async fn list_recent_calculations(
    state: web::Data<HttpState>,
    query: web::Query<RecentQuery>,
) -> ApiResult<web::Json<Vec<Calculation>>> {
    let records = state.calculations_query.recent(query.limit).await?;
    Ok(web::Json(records))
}

/// Records for one shape name.
#[utoipa::path(
    get,
    path = "/api/calculations/shape/{shape}",
    params(("shape" = String, Path, description = "Exact shape name", example = "square")),
    responses(
        (status = 200, description = "Matching records, newest first", body = [CalculationSchema])
    ),
    tags = ["calculations"],
    operation_id = "listCalculationsByShape"
)]
#[get("/calculations/shape/{shape}")]
pub async fn list_calculations_by_shape(
    state: web::Data<HttpState>,
    shape: web::Path<String>,
) -> ApiResult<web::Json<Vec<Calculation>>> {
    let request = ListCalculationsByShapeRequest::new(shape.into_inner());
    let records = state.calculations_query.list_by_shape(request).await?;
    Ok(web::Json(records))
}

/// Fetch one record.
#[utoipa::path(
    get,
    path = "/api/calculations/{id}",
    params(("id" = i64, Path, description = "Calculation identifier")),
    responses(
        (status = 200, description = "The record", body = CalculationSchema),
        (status = 404, description = "Calculation not found", body = ErrorSchema)
    ),
    tags = ["calculations"],
    operation_id = "getCalculation"
)]
#[get("/calculations/{id}")]
pub async fn get_calculation(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<Calculation>> {
    let record = state
        .calculations_query
        .get(CalculationId::new(id.into_inner()))
        .await?;
    Ok(web::Json(record))
}

/// Overwrite the stored result of one record without recomputing it.
#[utoipa::path(
    put,
    path = "/api/calculations/{id}/result",
    params(("id" = i64, Path, description = "Calculation identifier")),
    request_body = UpdateResultBody,
    responses(
        (status = 200, description = "The updated record", body = CalculationSchema),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 404, description = "Calculation not found", body = ErrorSchema)
    ),
    tags = ["calculations"],
    operation_id = "updateCalculationResult"
)]
#[put("/calculations/{id}/result")]
pub async fn update_calculation_result(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    body: web::Json<UpdateResultBody>,
) -> ApiResult<web::Json<Calculation>> {
    let record = state
        .calculations
        .update_result(UpdateCalculationResultRequest {
            id: CalculationId::new(id.into_inner()),
            result: body.result,
        })
        .await?;
    Ok(web::Json(record))
}

/// Delete one record.
#[utoipa::path(
    delete,
    path = "/api/calculations/{id}",
    params(("id" = i64, Path, description = "Calculation identifier")),
    responses(
        (status = 200, description = "Record deleted", body = DeletedMessage),
        (status = 404, description = "Calculation not found", body = ErrorSchema)
    ),
    tags = ["calculations"],
    operation_id = "deleteCalculation"
)]
#[delete("/calculations/{id}")]
pub async fn delete_calculation(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<DeletedMessage>> {
    let id = CalculationId::new(id.into_inner());
    state.calculations.delete(id).await?;
    Ok(web::Json(DeletedMessage {
        message: format!("Calculation {id} deleted"),
    }))
}

/// Delete every record.
#[utoipa::path(
    delete,
    path = "/api/calculations",
    responses(
        (status = 200, description = "Records deleted", body = DeletedCount)
    ),
    tags = ["calculations"],
    operation_id = "deleteAllCalculations"
)]
#[delete("/calculations")]
pub async fn delete_all_calculations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<DeletedCount>> {
    let deleted = state.calculations.delete_all().await?;
    Ok(web::Json(DeletedCount { deleted }))
}

#[cfg(test)]
#[path = "calculations_tests.rs"]
mod tests;
