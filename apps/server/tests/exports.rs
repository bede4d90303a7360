use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
};
use finmirror_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use std::{net::SocketAddr, path::Path, time::Duration};
use tempfile::tempdir;
use tower::ServiceExt;

fn test_config(dir: &Path) -> Config {
    Config {
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        settings_file: dir.join("settings.yml"),
        data_file: dir.join("snapshot.json"),
        export_interval: None,
        // Nothing listens here, so every grid call fails fast.
        sheets_api_url: "http://127.0.0.1:9".to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
    }
}

async fn post_export(app: axum::Router) -> (u16, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/exports/sheets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn healthz_works() {
    let tmp = tempdir().unwrap();
    let config = test_config(tmp.path());
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn export_without_settings_is_bad_request() {
    let tmp = tempdir().unwrap();
    let config = test_config(tmp.path());
    let app = app_router(build_state(&config).unwrap(), &config);

    let (status, body) = post_export(app).await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("not enabled"));
}

#[tokio::test]
async fn export_reports_transport_failures_per_sheet() {
    let tmp = tempdir().unwrap();
    let config = test_config(tmp.path());
    std::fs::write(
        &config.settings_file,
        r#"
integrations:
  sheets:
    credentials: { accessToken: "token" }
export:
  sheets:
    enabled: true
    globals: { spreadsheetId: "sheet-1" }
    summary: [ { range: "Summary" } ]
    historic: [ { range: "History" } ]
"#,
    )
    .unwrap();
    let app = app_router(build_state(&config).unwrap(), &config);

    let (status, body) = post_export(app).await;

    assert_eq!(status, 200);
    let sheets = body["sheets"].as_array().unwrap();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0]["purpose"], "SUMMARY");
    assert_eq!(sheets[0]["outcome"]["status"], "FAILED");
    assert_eq!(sheets[1]["purpose"], "HISTORIC");
    assert_eq!(sheets[1]["spreadsheetId"], "sheet-1");
    assert_eq!(sheets[1]["outcome"]["status"], "FAILED");
}
