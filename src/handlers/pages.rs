use axum::response::Html;

/// GET /app -> the embedded browser client.
///
/// Compiled into the binary so the service ships as one artifact; the page
/// drives the JSON routes with plain `fetch` calls.
pub async fn app_page() -> Html<&'static str> {
    Html(include_str!("../../static/app.html"))
}
