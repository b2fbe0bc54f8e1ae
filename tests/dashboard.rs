//! Dashboard routes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use panel_poller::config::DashboardConfig;
use panel_poller::dashboard::{setup_dashboard_router, DashboardServer, DashboardState};
use panel_poller::{DisplaySurface, RegionStore, Shutdown};

fn regions() -> Arc<RegionStore> {
    let regions = Arc::new(RegionStore::new());
    regions.register("summary", "<i>loading</i>");
    regions.register("news", "");
    regions.set_content("summary", "<b>OK</b>");
    regions
}

fn state() -> DashboardState {
    DashboardState {
        regions: regions(),
        title: Arc::from("Router <Console>"),
    }
}

async fn get(path: &str) -> (StatusCode, String) {
    let response = setup_dashboard_router(state())
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_index_embeds_raw_regions() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Router &lt;Console&gt;</title>"));
    assert!(body.contains("<div id=\"summary\"><b>OK</b></div>"));
    assert!(body.contains("<div id=\"news\"></div>"));
    assert!(body.find("summary").unwrap() < body.find("news").unwrap());
}

#[tokio::test]
async fn test_region_returns_raw_content() {
    let (status, body) = get("/regions/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<b>OK</b>");
}

#[tokio::test]
async fn test_unknown_region_is_404() {
    let (status, _) = get("/regions/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_regions_json() {
    let (status, body) = get("/regions").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "id": "summary", "content": "<b>OK</b>", "updates": 1 },
            { "id": "news", "content": "", "updates": 0 },
        ])
    );
}

#[tokio::test]
async fn test_status() {
    let (status, body) = get("/status").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "operational");
    assert_eq!(json["regions"], 2);
}

#[tokio::test]
async fn test_server_serves_until_shutdown() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();

    let server = DashboardServer::new(&DashboardConfig::default(), regions());
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .get(format!("http://{}/regions/summary", addr))
        .send()
        .await
        .expect("dashboard unreachable");
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "<b>OK</b>");

    shutdown.trigger();
    assert!(handle.await.unwrap().is_ok());
}
