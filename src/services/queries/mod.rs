pub mod ask;
pub mod execute;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::SqlGenerator;
use crate::models::queries::requests::AskQuestionRequest;
use crate::storage::Storage;

pub struct QueryService {
    storage: Option<Arc<dyn Storage>>,
    generator: Option<Arc<dyn SqlGenerator>>,
}

impl QueryService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            generator: None,
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_generator(&self, request: &HttpRequest) -> Arc<dyn SqlGenerator> {
        if let Some(generator) = &self.generator {
            generator.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn SqlGenerator>>>()
                .expect("SqlGenerator not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config<'a>(&self, request: &'a HttpRequest) -> &'a AppConfig {
        request
            .app_data::<actix_web::web::Data<AppConfig>>()
            .expect("AppConfig not found in app data")
            .get_ref()
    }

    // 提问：生成 SQL 并执行
    pub async fn ask_question(
        &self,
        request: &HttpRequest,
        body: AskQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        ask::ask_question(self, request, body).await
    }
}
