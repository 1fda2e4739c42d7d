use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn get_info(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_info(&request).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/system").route("/info", web::get().to(get_info)));
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::Value;

    use super::*;
    use crate::config::AppConfig;
    use crate::models::AppStartTime;

    #[actix_web::test]
    async fn test_info_reports_model_and_uptime() {
        let mut config = AppConfig::default();
        config.model.api_key = "test-key".to_string();
        let start_time = AppStartTime {
            start_datetime: chrono::Utc::now() - chrono::Duration::seconds(90),
        };

        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .app_data(web::Data::new(start_time))
                .configure(configure_system_routes),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/system/info")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        let info = &body["data"];
        assert_eq!(info["model"], "gemini-1.5-flash");
        assert_eq!(info["model_configured"], true);
        assert_eq!(info["read_only"], false);
        assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
        assert!(info["uptime_seconds"].as_i64().unwrap() >= 90);
    }
}
