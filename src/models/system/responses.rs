use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SystemInfoResponse {
    pub system_name: String,
    pub version: String,
    pub environment: String,
    pub model: String,
    pub model_configured: bool,
    pub read_only: bool,
    pub uptime_seconds: i64,
}
