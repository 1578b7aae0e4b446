use serde::Serialize;

/// Liveness payload returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}
