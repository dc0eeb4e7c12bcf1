//! Aggregate statistics over stored calculations.
//!
//! ```text
//! GET /api/stats/count?shape=square
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::CountCalculationsRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Optional shape filter for the count.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountQuery {
    /// Exact shape name; omit or leave blank to count every record.
    pub shape: Option<String>,
}

impl CountQuery {
    fn into_request(self) -> CountCalculationsRequest {
        let shape = self.shape.filter(|shape| !shape.trim().is_empty());
        CountCalculationsRequest { shape }
    }
}

/// Body of `GET /api/stats/count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CountResponse {
    #[schema(example = 12)]
    pub count: u64,
}

/// Count stored records, optionally for one shape.
#[utoipa::path(
    get,
    path = "/api/stats/count",
    params(CountQuery),
    responses(
        (status = 200, description = "Number of matching records", body = CountResponse),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["stats"],
    operation_id = "countCalculations"
)]
#[get("/stats/count")]
pub async fn count_calculations(
    state: web::Data<HttpState>,
    query: web::Query<CountQuery>,
) -> ApiResult<web::Json<CountResponse>> {
    let request = query.into_inner().into_request();
    let count = state.calculations_query.count(request).await?;
    Ok(web::Json(CountResponse { count }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{MockCalculationCommand, MockCalculationQuery};
    use actix_web::{App, test as actix_test};
    use mockall::predicate::eq;
    use rstest::rstest;

    #[rstest]
    #[case("/api/stats/count", CountCalculationsRequest::all(), 7)]
    #[case("/api/stats/count?shape=", CountCalculationsRequest::all(), 7)]
    #[case("/api/stats/count?shape=%20", CountCalculationsRequest::all(), 7)]
    #[case(
        "/api/stats/count?shape=square",
        CountCalculationsRequest::for_shape("square"),
        4
    )]
    #[actix_web::test]
    async fn count_forwards_optional_shape(
        #[case] uri: &str,
        #[case] expected: CountCalculationsRequest,
        #[case] total: u64,
    ) {
        let mut query = MockCalculationQuery::new();
        query
            .expect_count()
            .with(eq(expected))
            .times(1)
            .return_once(move |_| Ok(total));
        let state = HttpState::new(Arc::new(MockCalculationCommand::new()), Arc::new(query));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api").service(count_calculations)),
        )
        .await;

        let body: CountResponse = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;

        assert_eq!(body, CountResponse { count: total });
    }
}
