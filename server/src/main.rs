use std::env;
use std::sync::Arc;

use pacs_sizing::config::DEFAULT_PORT;
use pacs_sizing::PdfReportRenderer;

use pacs_sizing_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let state = Arc::new(AppState {
        renderer: Box::new(PdfReportRenderer::new()),
    });
    let app = pacs_sizing_server::app(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = format!("0.0.0.0:{port}");
    tracing::info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
