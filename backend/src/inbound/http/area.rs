//! Area computation HTTP handler.
//!
//! ```text
//! POST /api/area/square {"side": 5}
//! ```
//!
//! A side outside `(0, 1_000_000]` is answered with HTTP 200 and an
//! `{"error": ...}` body. Clients must inspect the body to tell the outcomes
//! apart.

use actix_web::{HttpResponse, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Calculation, SideLength};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request payload for a square area computation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SquareAreaRequest {
    #[schema(example = 5.0)]
    pub side: f64,
}

/// Successful computation: the area plus the stored record's identity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct SquareAreaResponse {
    #[schema(example = 25.0)]
    pub area: f64,
    #[schema(example = 42)]
    pub calculation_id: i64,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
}

impl From<Calculation> for SquareAreaResponse {
    fn from(value: Calculation) -> Self {
        Self {
            area: value.result,
            calculation_id: value.id.get(),
            timestamp: value.created_at,
        }
    }
}

/// Validation outcome for a rejected side length.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SideRejectedResponse {
    #[schema(example = "Side length must be positive")]
    pub error: String,
}

/// Compute and persist the area of a square.
#[utoipa::path(
    post,
    path = "/api/area/square",
    request_body = SquareAreaRequest,
    responses(
        (status = 200, description = "Area computed and stored, or side rejected",
            body = SquareAreaResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["area"],
    operation_id = "calculateSquareArea"
)]
#[post("/area/square")]
pub async fn calculate_square_area(
    state: web::Data<HttpState>,
    payload: web::Json<SquareAreaRequest>,
) -> ApiResult<HttpResponse> {
    let side = match SideLength::new(payload.side) {
        Ok(side) => side,
        Err(rejection) => {
            info!(side = payload.side, %rejection, "side length rejected");
            return Ok(HttpResponse::Ok().json(SideRejectedResponse {
                error: rejection.to_string(),
            }));
        }
    };

    let calculation = state.calculations.record_square_area(side).await?;
    Ok(HttpResponse::Ok().json(SquareAreaResponse::from(calculation)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{MockCalculationCommand, MockCalculationQuery};
    use crate::domain::{CalculationId, Error, NewCalculation};
    use crate::inbound::http::error::json_config;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn stored_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    async fn post_side(command: MockCalculationCommand, body: Value) -> (StatusCode, Value) {
        let state = HttpState::new(Arc::new(command), Arc::new(MockCalculationQuery::new()));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config())
                .service(web::scope("/api").service(calculate_square_area)),
        )
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/area/square")
                .set_json(body)
                .to_request(),
        )
        .await;
        let status = res.status();
        (status, actix_test::read_body_json(res).await)
    }

    #[actix_web::test]
    async fn valid_side_returns_area_and_record_identity() {
        let mut command = MockCalculationCommand::new();
        command
            .expect_record_square_area()
            .withf(|side| side.get() == 5.0)
            .times(1)
            .return_once(|side| {
                let new = NewCalculation::square(side);
                Ok(Calculation {
                    id: CalculationId::new(7),
                    shape: new.shape,
                    input_value: new.input_value,
                    result: new.result,
                    created_at: stored_at(),
                })
            });

        let (status, body) = post_side(command, json!({"side": 5})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["area"], json!(25.0));
        assert_eq!(body["calculation_id"], json!(7));
        assert_eq!(body["timestamp"], json!("2026-03-01T12:00:00Z"));
    }

    #[rstest]
    #[case(json!({"side": 0}), "Side length must be positive")]
    #[case(json!({"side": -3}), "Side length must be positive")]
    #[case(json!({"side": 1_000_001}), "Value too large - maximum is 1,000,000")]
    #[actix_web::test]
    async fn rejected_sides_answer_200_without_writing(
        #[case] body: Value,
        #[case] expected: &str,
    ) {
        let mut command = MockCalculationCommand::new();
        command.expect_record_square_area().times(0);

        let (status, payload) = post_side(command, body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload, json!({ "error": expected }));
    }

    #[actix_web::test]
    async fn missing_side_is_a_bad_request() {
        let mut command = MockCalculationCommand::new();
        command.expect_record_square_area().times(0);

        let (status, payload) = post_side(command, json!({"length": 5})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn store_outage_maps_to_service_unavailable() {
        let mut command = MockCalculationCommand::new();
        command
            .expect_record_square_area()
            .return_once(|_| Err(Error::service_unavailable("pool exhausted")));

        let (status, payload) = post_side(command, json!({"side": 2})).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload["code"], "service_unavailable");
    }
}
