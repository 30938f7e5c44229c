use reqwest::Client as ReqwestClient;

/// Shared application state passed to all handlers.
/// The outbound HTTP client is built once at startup (timeout and User-Agent
/// baked in) rather than re-built on every request; `reqwest::Client` is a
/// cheap handle over a shared connection pool.
#[derive(Clone)]
pub struct AppState {
    pub http: ReqwestClient,
}
