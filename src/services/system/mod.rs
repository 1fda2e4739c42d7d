pub mod info;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::AppStartTime;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config<'a>(&self, request: &'a HttpRequest) -> &'a AppConfig {
        request
            .app_data::<actix_web::web::Data<AppConfig>>()
            .expect("AppConfig not found in app data")
            .get_ref()
    }

    pub(crate) fn get_start_time<'a>(&self, request: &'a HttpRequest) -> &'a AppStartTime {
        request
            .app_data::<actix_web::web::Data<AppStartTime>>()
            .expect("AppStartTime not found in app data")
            .get_ref()
    }

    // 获取系统信息
    pub async fn get_info(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        info::get_info(self, request).await
    }
}
