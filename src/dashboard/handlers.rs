use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Serialize;

use crate::dashboard::DashboardState;
use crate::display::RegionSnapshot;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub regions: usize,
}

pub async fn get_status(State(state): State<DashboardState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        regions: state.regions.len(),
    })
}

/// Every region laid out as `<div id="...">`, content inserted raw.
pub async fn get_index(State(state): State<DashboardState>) -> Html<String> {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    page.push_str(&escape(&state.title));
    page.push_str("</title>\n</head>\n<body>\n");

    for region in state.regions.snapshot() {
        page.push_str("<div id=\"");
        page.push_str(&escape(&region.id));
        page.push_str("\">");
        page.push_str(&region.content);
        page.push_str("</div>\n");
    }

    page.push_str("</body>\n</html>\n");
    Html(page)
}

pub async fn get_regions(State(state): State<DashboardState>) -> Json<Vec<RegionSnapshot>> {
    Json(state.regions.snapshot())
}

pub async fn get_region(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StatusCode> {
    state
        .regions
        .content(&id)
        .map(Html)
        .ok_or(StatusCode::NOT_FOUND)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
