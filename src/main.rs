mod llm;
mod mermaid;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .expect("invalid PORT");

    // The service exists only to call the provider, so a missing key is fatal.
    let llm = llm::LlmClient::from_env().expect("GEMINI_API_KEY required");
    tracing::info!(model = llm.model(), "LLM client initialized");

    let state = state::AppState::new(Arc::new(llm));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "flowgen listening");
    axum::serve(listener, app).await.expect("server failed");
}
