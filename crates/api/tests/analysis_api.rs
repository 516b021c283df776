//! HTTP-level tests for the pipeline hand-off endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, post_json, post_json_auth, post_raw};
use sentiment_api::handlers::analysis::{PUBLISHED_MESSAGE, RECEIVED_MESSAGE};
use sentiment_events::RecordingPublisher;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Ingestion (no database)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ingestion_acknowledges_valid_result() {
    let app = common::build_test_app(common::lazy_pool());

    let body = json!({ "texto": "cliente insatisfeito", "resultado": "negativo" });
    let response = post_json(app, "/sentimento/recebido", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], RECEIVED_MESSAGE);
}

#[tokio::test]
async fn ingestion_missing_field_returns_400() {
    let app = common::build_test_app(common::lazy_pool());

    let response = post_json(app, "/sentimento/recebido", json!({ "texto": "oi" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ingestion_empty_field_returns_400() {
    let app = common::build_test_app(common::lazy_pool());

    let body = json!({ "texto": "oi", "resultado": "" });
    let response = post_json(app, "/sentimento/recebido", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn ingestion_accepts_numeric_and_structured_results() {
    for resultado in [
        json!(0.9),
        json!({ "label": "negativo", "score": 0.2 }),
        json!(["negativo"]),
        json!(true),
    ] {
        let app = common::build_test_app(common::lazy_pool());

        let body = json!({ "texto": "cliente insatisfeito", "resultado": resultado });
        let response = post_json(app, "/sentimento/recebido", body).await;

        assert_eq!(response.status(), StatusCode::CREATED, "{resultado}");
    }
}

#[tokio::test]
async fn ingestion_rejects_empty_results_of_any_type() {
    for resultado in [
        json!(null),
        json!(0),
        json!(0.0),
        json!(false),
        json!([]),
        json!({}),
    ] {
        let app = common::build_test_app(common::lazy_pool());

        let body = json!({ "texto": "oi", "resultado": resultado });
        let response = post_json(app, "/sentimento/recebido", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{resultado}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR", "{resultado}");
    }
}

#[tokio::test]
async fn ingestion_wrong_texto_type_returns_400() {
    let app = common::build_test_app(common::lazy_pool());

    let body = json!({ "texto": 42, "resultado": "negativo" });
    let response = post_json(app, "/sentimento/recebido", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ingestion_malformed_json_returns_400() {
    let app = common::build_test_app(common::lazy_pool());

    let response = post_raw(
        app,
        "/sentimento/recebido",
        "application/json",
        "{\"texto\": ",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Publish (database for the account lookup)
// ---------------------------------------------------------------------------

fn action(description: &str) -> serde_json::Value {
    json!({
        "acao_id": 7,
        "event_id": 3,
        "descricao": description,
        "agent_id": 2,
        "user_id": null,
        "data_acao": "2024-03-01T10:00:00Z"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_publishes_exactly_one_persistent_message(pool: PgPool) {
    let token = common::token_for(common::create_account(&pool, "operador").await);
    let (app, recorder) = common::build_test_app_with_recorder(pool);

    let response = post_json_auth(
        app,
        "/sentimento/create",
        action("cliente insatisfeito"),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], PUBLISHED_MESSAGE);

    let messages = recorder.messages().await;
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_persistent());
    assert_eq!(messages[0].description().unwrap(), "cliente insatisfeito");
    assert_eq!(messages[0].exchange, "datas_exchanges");
    assert_eq!(messages[0].routing_key, "minha_routing_key");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_blank_description(pool: PgPool) {
    let token = common::token_for(common::create_account(&pool, "operador").await);
    let (app, recorder) = common::build_test_app_with_recorder(pool);

    let response = post_json_auth(app, "/sentimento/create", action("   "), &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(recorder.messages().await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn broker_failure_returns_500(pool: PgPool) {
    let token = common::token_for(common::create_account(&pool, "operador").await);
    let publisher = Arc::new(RecordingPublisher::unavailable("connection refused"));
    let app = common::build_app(pool, publisher);

    let response = post_json_auth(
        app,
        "/sentimento/create",
        action("cliente insatisfeito"),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "An internal error occurred");
}
