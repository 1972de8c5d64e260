//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt) against an in-memory catalog.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use riasec_api::matching::catalog::{CatalogRow, CatalogSource, StaticCatalogSource};
use riasec_api::matching::pipeline::EngineSettings;
use riasec_api::routes::build_router;
use riasec_api::state::AppState;

async fn app() -> axum::Router {
    let source = StaticCatalogSource(vec![
        CatalogRow::new("Mapua", "Intramuros", "Civil Engineering", "Structural", "RIC")
            .with_careers(["Civil Engineer", "Construction Manager"]),
        CatalogRow::new("BatStateU", "Alangilan", "Civil Engineering", "Transportation", "RIC"),
        CatalogRow::new("UP Manila", "Manila", "Medical Technology", "", "IRS"),
        CatalogRow::new("UST", "Manila", "Nursing", "", "SIC"),
        CatalogRow::new("Benilde", "Manila", "Multimedia Arts", "Animation", "ASI"),
        CatalogRow::new("DLSU", "Manila", "Accountancy", "", "ESC"),
    ]);
    let catalog = source.load().await.unwrap();
    build_router(AppState::new(catalog, EngineSettings::default()))
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn form_body(pairs: &[(u32, &str)]) -> String {
    pairs
        .iter()
        .map(|(id, v)| format!("q{id}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

// ── GET /health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_200() {
    let resp = app()
        .await
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["status"], "ok");
}

// ── GET /api/v1/questions ────────────────────────────────────────────

#[tokio::test]
async fn questions_returns_full_bank() {
    let resp = app()
        .await
        .oneshot(Request::get("/api/v1/questions").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 48);

    let mut ids: Vec<u64> = questions.iter().map(|q| q["id"].as_u64().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=48).collect::<Vec<_>>());
    assert!(questions[0]["text"].is_string());
    assert!(questions[0]["category"].is_string());
}

// ── POST /api/v1/submit ──────────────────────────────────────────────

#[tokio::test]
async fn submit_scores_and_matches() {
    // strongly agree with every R (1..=8) and I (9..=16) item, mildly with C (41..=48)
    let mut answers: Vec<(u32, &str)> = (1..=16).map(|id| (id, "5")).collect();
    answers.extend((41..=48).map(|id| (id, "4")));
    answers.extend((17..=40).map(|id| (id, "2")));

    let resp = app()
        .await
        .oneshot(
            Request::post("/api/v1/submit")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body(&answers)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["hollandCode"], "RIC");
    assert_eq!(json["diagnosticMode"], false);
    assert_eq!(json["scores"]["R"], 24);
    assert_eq!(json["scores"]["C"], 8);
    assert_eq!(json["scores"]["A"], -8);

    let top = json["topMatches"].as_array().unwrap();
    assert_eq!(top[0]["courseName"], "Civil Engineering");
    assert_eq!(top[0]["score"], 30);
    assert_eq!(top[0]["providers"].as_array().unwrap().len(), 2);
    assert_eq!(top[0]["providers"][0]["university"], "Mapua");
    assert_eq!(
        top[0]["careers"],
        serde_json::json!(["Civil Engineer", "Construction Manager"])
    );
}

#[tokio::test]
async fn submit_accepts_json_answers() {
    // same profile as the form case, mixing string and numeric values
    let mut answers = serde_json::Map::new();
    for id in 1..=16 {
        answers.insert(format!("q{id}"), serde_json::json!("5"));
    }
    for id in 41..=48 {
        answers.insert(format!("q{id}"), serde_json::json!(4));
    }
    for id in 17..=40 {
        answers.insert(format!("q{id}"), serde_json::json!(2));
    }

    let resp = app()
        .await
        .oneshot(
            Request::post("/api/v1/submit")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::Value::Object(answers).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["hollandCode"], "RIC");
    assert_eq!(json["scores"]["R"], 24);
    assert_eq!(json["scores"]["C"], 8);
    assert_eq!(json["topMatches"][0]["score"], 30);
}

#[tokio::test]
async fn submit_with_malformed_json_is_rejected() {
    let resp = app()
        .await
        .oneshot(
            Request::post("/api/v1/submit")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"q1\": "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(resp.status().is_client_error(), "{}", resp.status());

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["error"]["code"], "INVALID_SUBMISSION");
}

#[tokio::test]
async fn submit_with_unsupported_content_type_is_415() {
    let resp = app()
        .await
        .oneshot(
            Request::post("/api/v1/submit")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("q1=5"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["error"]["code"], "INVALID_SUBMISSION");
}

#[tokio::test]
async fn submit_with_no_answers_is_not_an_error() {
    let resp = app()
        .await
        .oneshot(
            Request::post("/api/v1/submit")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    // all-zero profile: canonical order, positive-only falls back to the top three
    assert_eq!(json["hollandCode"], "RIA");
}

// ── GET /api/v1/results ──────────────────────────────────────────────

#[tokio::test]
async fn diagnostic_results_use_raw_scores() {
    let resp = app()
        .await
        .oneshot(
            Request::get("/api/v1/results?r=1&i=2&a=3&s=20&e=5&c=12")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["hollandCode"], "SCE");
    assert_eq!(json["diagnosticMode"], true);
    // top S/C/E: "SIC" = 15 + 3 + 0 = 18, "ESC" = 5 + 3 + 1 = 9 (below threshold)
    let top = json["topMatches"].as_array().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0]["courseName"], "Nursing");
    assert_eq!(top[0]["score"], 18);
}

#[tokio::test]
async fn diagnostic_results_with_no_matches_returns_empty_list() {
    let resp = app()
        .await
        .oneshot(
            Request::get("/api/v1/results?c=9&a=7&e=-1&r=-5&i=-5&s=-5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["hollandCode"], "CA");
    // no catalog code starts with C, so nothing reaches the threshold
    assert_eq!(json["topMatches"], serde_json::json!([]));
}

// ── GET /api/v1/catalog ──────────────────────────────────────────────

#[tokio::test]
async fn catalog_summary_counts_rows_and_courses() {
    let resp = app()
        .await
        .oneshot(Request::get("/api/v1/catalog").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["rows"], 6);
    assert_eq!(json["courses"], 5);
}
