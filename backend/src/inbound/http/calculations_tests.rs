//! Tests for calculation record HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use chrono::{TimeZone, Utc};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockCalculationCommand, MockCalculationQuery, SHAPE_LIST_LIMIT};
use crate::domain::{CALCULATION_NOT_FOUND, Error};
use crate::inbound::http::error::{json_config, path_config, query_config};

fn record(id: i64, input_value: f64, result: f64) -> Calculation {
    Calculation {
        id: CalculationId::new(id),
        shape: "square".to_owned(),
        input_value,
        result,
        created_at: Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

async fn call(
    command: MockCalculationCommand,
    query: MockCalculationQuery,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let state = HttpState::new(Arc::new(command), Arc::new(query));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(query_config())
            .app_data(path_config())
            .app_data(json_config())
            .service(web::scope("/api").configure(configure)),
    )
    .await;

    let res = actix_test::call_service(&app, request.to_request()).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

#[rstest]
#[case("/api/calculations", ListCalculationsRequest::new(0, DEFAULT_PAGE_LIMIT))]
#[case("/api/calculations?skip=3", ListCalculationsRequest::new(3, DEFAULT_PAGE_LIMIT))]
#[case("/api/calculations?skip=2&limit=4", ListCalculationsRequest::new(2, 4))]
#[actix_web::test]
async fn list_applies_request_defaults(
    #[case] uri: &str,
    #[case] expected: ListCalculationsRequest,
) {
    let mut query = MockCalculationQuery::new();
    query
        .expect_list()
        .with(eq(expected))
        .times(1)
        .return_once(|_| Ok(vec![record(2, 2.0, 4.0), record(1, 1.0, 1.0)]));

    let (status, body) = call(
        MockCalculationCommand::new(),
        query,
        actix_test::TestRequest::get().uri(uri),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], json!(2));
    assert_eq!(body[0]["shape"], json!("square"));
    assert_eq!(body[0]["input_value"], json!(2.0));
    assert_eq!(body[0]["created_at"], json!("2026-03-01T12:00:00Z"));
}

#[rstest]
#[case("/api/calculations?skip=-1")]
#[case("/api/calculations?limit=lots")]
#[case("/api/calculations/recent?limit=-5")]
#[actix_web::test]
async fn undecodable_query_parameters_are_bad_requests(#[case] uri: &str) {
    let mut query = MockCalculationQuery::new();
    query.expect_list().times(0);
    query.expect_recent().times(0);

    let (status, body) = call(
        MockCalculationCommand::new(),
        query,
        actix_test::TestRequest::get().uri(uri),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[case("/api/calculations/recent", DEFAULT_RECENT_PAGE_LIMIT)]
#[case("/api/calculations/recent?limit=2", 2)]
#[actix_web::test]
async fn recent_is_routed_ahead_of_id_lookup(#[case] uri: &str, #[case] limit: u32) {
    let mut query = MockCalculationQuery::new();
    query.expect_get().times(0);
    query
        .expect_recent()
        .with(eq(limit))
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let (status, body) = call(
        MockCalculationCommand::new(),
        query,
        actix_test::TestRequest::get().uri(uri),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn shape_listing_uses_fixed_limit() {
    let mut query = MockCalculationQuery::new();
    query
        .expect_list_by_shape()
        .withf(|request| request.shape == "square" && request.limit == SHAPE_LIST_LIMIT)
        .times(1)
        .return_once(|_| Ok(vec![record(5, 3.0, 9.0)]));

    let (status, body) = call(
        MockCalculationCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/api/calculations/shape/square"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn get_returns_the_record() {
    let mut query = MockCalculationQuery::new();
    query
        .expect_get()
        .with(eq(CalculationId::new(9)))
        .return_once(|id| Ok(record(id.get(), 5.0, 25.0)));

    let (status, body) = call(
        MockCalculationCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/api/calculations/9"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!(25.0));
}

#[actix_web::test]
async fn get_missing_record_is_not_found() {
    let mut query = MockCalculationQuery::new();
    query
        .expect_get()
        .return_once(|_| Err(Error::not_found(CALCULATION_NOT_FOUND)));

    let (status, body) = call(
        MockCalculationCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/api/calculations/99999"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], CALCULATION_NOT_FOUND);
}

#[actix_web::test]
async fn non_numeric_id_is_a_bad_request() {
    let mut query = MockCalculationQuery::new();
    query.expect_get().times(0);

    let (status, _) = call(
        MockCalculationCommand::new(),
        query,
        actix_test::TestRequest::get().uri("/api/calculations/abc"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_result_returns_updated_record() {
    let mut command = MockCalculationCommand::new();
    command
        .expect_update_result()
        .withf(|request| request.id == CalculationId::new(3) && request.result == 30.0)
        .times(1)
        .return_once(|request| Ok(record(request.id.get(), 5.0, request.result)));

    let (status, body) = call(
        command,
        MockCalculationQuery::new(),
        actix_test::TestRequest::put()
            .uri("/api/calculations/3/result")
            .set_json(json!({"result": 30.0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input_value"], json!(5.0));
    assert_eq!(body["result"], json!(30.0));
}

#[actix_web::test]
async fn delete_reports_message() {
    let mut command = MockCalculationCommand::new();
    command
        .expect_delete()
        .with(eq(CalculationId::new(42)))
        .times(1)
        .return_once(|_| Ok(()));

    let (status, body) = call(
        command,
        MockCalculationQuery::new(),
        actix_test::TestRequest::delete().uri("/api/calculations/42"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Calculation 42 deleted"}));
}

#[actix_web::test]
async fn delete_missing_record_is_not_found() {
    let mut command = MockCalculationCommand::new();
    command
        .expect_delete()
        .return_once(|_| Err(Error::not_found(CALCULATION_NOT_FOUND)));

    let (status, body) = call(
        command,
        MockCalculationQuery::new(),
        actix_test::TestRequest::delete().uri("/api/calculations/404"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], CALCULATION_NOT_FOUND);
}

#[actix_web::test]
async fn delete_all_reports_count() {
    let mut command = MockCalculationCommand::new();
    command.expect_delete_all().times(1).return_once(|| Ok(3));

    let (status, body) = call(
        command,
        MockCalculationQuery::new(),
        actix_test::TestRequest::delete().uri("/api/calculations"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": 3}));
}
