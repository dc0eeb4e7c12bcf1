//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint plus the schema wrappers that
//! describe domain types without coupling them to utoipa. The document backs
//! Swagger UI in debug builds and is exported by the `openapi-dump` binary.

use crate::inbound::http::area::{SideRejectedResponse, SquareAreaRequest, SquareAreaResponse};
use crate::inbound::http::calculations::{DeletedCount, DeletedMessage, UpdateResultBody};
use crate::inbound::http::health::RootMessage;
use crate::inbound::http::schemas::{CalculationSchema, ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::stats::CountResponse;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Polygon calculator API",
        description = "Compute square areas and manage the stored calculation history."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::area::calculate_square_area,
        crate::inbound::http::calculations::list_calculations,
        crate::inbound::http::calculations::list_recent_calculations,
        crate::inbound::http::calculations::list_calculations_by_shape,
        crate::inbound::http::calculations::get_calculation,
        crate::inbound::http::calculations::update_calculation_result,
        crate::inbound::http::calculations::delete_calculation,
        crate::inbound::http::calculations::delete_all_calculations,
        crate::inbound::http::stats::count_calculations,
        crate::inbound::http::health::root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CalculationSchema,
        ErrorSchema,
        ErrorCodeSchema,
        SquareAreaRequest,
        SquareAreaResponse,
        SideRejectedResponse,
        UpdateResultBody,
        DeletedMessage,
        DeletedCount,
        CountResponse,
        RootMessage
    )),
    tags(
        (name = "area", description = "Area computations"),
        (name = "calculations", description = "Stored calculation records"),
        (name = "stats", description = "Aggregates over stored records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
