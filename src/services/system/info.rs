use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::ApiResponse;
use crate::models::system::responses::SystemInfoResponse;

pub async fn get_info(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config(request);
    let start_time = service.get_start_time(request);

    let uptime_seconds = chrono::Utc::now()
        .signed_duration_since(start_time.start_datetime)
        .num_seconds();

    let info = SystemInfoResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        model: config.model.name.clone(),
        model_configured: config.has_model_credentials(),
        read_only: config.query.read_only,
        uptime_seconds,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(info, "System info retrieved successfully")))
}
