use crate::infra::{AppState, DonorQuery, FilterQuery, HomeQuery};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use polywatch::donors::DonorPanelView;
use polywatch::views::{HomeView, RosterView};
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::Ordering;

/// Donor panel payload; `available` is false when the donor feed did not load.
#[derive(Debug, Serialize)]
pub(crate) struct DonorsResponse {
    pub(crate) available: bool,
    #[serde(flatten)]
    pub(crate) panel: Option<DonorPanelView>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/home", get(home_endpoint))
        .route("/api/v1/roster", get(roster_endpoint))
        .route("/api/v1/profiles/:official_id", get(profile_endpoint))
        .route("/api/v1/donors", get(donors_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn home_endpoint(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Json<HomeView> {
    Json(state.dashboard.home(&query.into_state()))
}

pub(crate) async fn roster_endpoint(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<RosterView> {
    Json(state.dashboard.roster_view(&query.into_predicate()))
}

pub(crate) async fn profile_endpoint(
    State(state): State<AppState>,
    Path(official_id): Path<String>,
) -> Response {
    match state.dashboard.profile(&official_id) {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        None => {
            let payload = json!({
                "official_id": official_id,
                "error": "official not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn donors_endpoint(
    State(state): State<AppState>,
    Query(query): Query<DonorQuery>,
) -> Json<DonorsResponse> {
    let panel = state.dashboard.donor_panel(&query.into_state());
    Json(DonorsResponse {
        available: panel.is_some(),
        panel,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use polywatch::dataset::{
        Dataset, MemorySource, DISCLOSURES_DOCUMENT, DONORS_DOCUMENT, META_DOCUMENT,
        PROFILES_DOCUMENT, ROSTER_DOCUMENT,
    };
    use polywatch::views::Dashboard;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn state(with_donors: bool) -> AppState {
        let mut source = MemorySource::new()
            .with_document(
                ROSTER_DOCUMENT,
                r#"[
                  {"id":"1","name":"Hon Jane O'Brien MP","chamber":"House","party":"Green","featured":true},
                  {"id":"2","name":"Senator Penny Wong","chamber":"Senate","party":"Labor"}
                ]"#,
            )
            .with_document(PROFILES_DOCUMENT, "{}")
            .with_document(META_DOCUMENT, r#"{"generated_at":"2025-03-01T00:00:00Z"}"#)
            .with_document(
                DISCLOSURES_DOCUMENT,
                r#"{"house":{"obrien":[{"url":"a.pdf","label":"2023"}]},"senate":[{"url":"s.pdf"}]}"#,
            );
        if with_donors {
            source.insert(
                DONORS_DOCUMENT,
                r#"{"source":"AEC","financial_year":"2023-24","parties":[
                    {"party":"Labor","top_donors":[
                        {"name":"d1","amount":6},{"name":"d2","amount":5},{"name":"d3","amount":4},
                        {"name":"d4","amount":3},{"name":"d5","amount":2},{"name":"d6","amount":null}
                    ],"yearly_totals":[{"year":"2023-24","amount":20}]}
                ]}"#,
            );
        }
        let dataset = Dataset::load(&source).await.expect("dataset loads");
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            dashboard: Arc::new(Dashboard::new(dataset)),
        }
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn roster_endpoint_applies_query_filter() {
        let app = router(state(false).await);
        let (status, body) = get_json(app, "/api/v1/roster?text=green&chamber=Senate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);

        let app = router(state(false).await);
        let (_, body) = get_json(app, "/api/v1/roster?chamber=House").await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["officials"][0]["link"]["href"], "a.pdf");
    }

    #[tokio::test]
    async fn home_endpoint_reports_totals_and_hides_missing_donors() {
        let app = router(state(false).await);
        let (status, body) = get_json(app, "/api/v1/home").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totals"]["total"], 2);
        assert_eq!(body["totals"]["senate"], 1);
        assert_eq!(body["freshness"], "2025-03-01");
        assert!(body.get("donors").is_none());
    }

    #[tokio::test]
    async fn profile_endpoint_returns_not_found_for_unknown_id() {
        let app = router(state(false).await);
        let (status, body) = get_json(app, "/api/v1/profiles/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["official_id"], "999");

        let app = router(state(false).await);
        let (status, body) = get_json(app, "/api/v1/profiles/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["counts"]["investments"], 0);
        assert_eq!(body["disclosures"]["state"], "links");
        assert_eq!(
            body["disclosures"]["links"][0]["label"],
            "Senate Register PDF 1"
        );
    }

    #[tokio::test]
    async fn donors_endpoint_honours_reveal_flag() {
        let app = router(state(true).await);
        let (_, body) = get_json(app, "/api/v1/donors?party=Labor").await;
        assert_eq!(body["available"], true);
        assert_eq!(body["content"]["donors"].as_array().map(Vec::len), Some(5));
        assert_eq!(body["content"]["toggle"]["label"], "Show more");

        let app = router(state(true).await);
        let (_, body) = get_json(app, "/api/v1/donors?party=Labor&expanded=true").await;
        assert_eq!(body["content"]["donors"].as_array().map(Vec::len), Some(6));
        assert_eq!(body["content"]["donors"][5]["amount_label"], "—");

        let app = router(state(false).await);
        let (_, body) = get_json(app, "/api/v1/donors?party=Labor").await;
        assert_eq!(body["available"], false);
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let state = state(false).await;
        state.readiness.store(false, Ordering::Release);
        let (status, body) = get_json(router(state), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");
    }
}
