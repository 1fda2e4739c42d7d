use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::queries::requests::AskQuestionRequest;
use crate::services::QueryService;

// 懒加载的全局 QueryService 实例
static QUERY_SERVICE: Lazy<QueryService> = Lazy::new(QueryService::new_lazy);

// HTTP处理程序
pub async fn ask_question(
    req: HttpRequest,
    body: web::Json<AskQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUERY_SERVICE.ask_question(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_query_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/query").service(web::resource("").route(web::post().to(ask_question))));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::config::AppConfig;
    use crate::llm::SqlGenerator;
    use crate::llm::testing::StubGenerator;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::tests::temp_storage;
    use crate::errors::{Nl2SqlError, Result};
    use crate::models::students::entities::Student;
    use crate::storage::QueryRows;
    use crate::utils::json_error_handler;

    /// 数据库文件无法打开时的存储
    struct UnavailableStorage;

    #[async_trait::async_trait]
    impl Storage for UnavailableStorage {
        async fn bootstrap(&self) -> Result<()> {
            Err(Nl2SqlError::database_connection("unable to open database file"))
        }

        async fn count_students(&self) -> Result<u64> {
            Err(Nl2SqlError::database_connection("unable to open database file"))
        }

        async fn list_students(&self) -> Result<Vec<Student>> {
            Err(Nl2SqlError::database_connection("unable to open database file"))
        }

        async fn read_sql_query(&self, _sql: &str) -> Result<QueryRows> {
            Err(Nl2SqlError::database_connection("unable to open database file"))
        }
    }

    async fn post_question(
        storage: Arc<dyn Storage>,
        generator: Arc<dyn SqlGenerator>,
        payload: Value,
    ) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(generator))
                .app_data(web::Data::new(AppConfig::default()))
                .configure(configure_query_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/query")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_empty_question_returns_warning() {
        let (_dir, storage) = temp_storage(false).await;
        let generator = Arc::new(StubGenerator::replying("SELECT 1"));

        let (status, body) =
            post_question(Arc::new(storage), generator.clone(), json!({"question": "   "})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 1001);
        assert_eq!(body["message"], "Please enter a valid question.");
        assert_eq!(generator.calls(), 0);
    }

    #[actix_web::test]
    async fn test_count_question() {
        let (_dir, storage) = temp_storage(false).await;
        let generator = Arc::new(StubGenerator::replying("SELECT COUNT(*) FROM STUDENT;"));

        let (status, body) = post_question(
            Arc::new(storage),
            generator,
            json!({"question": "How many entries of records are present?"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["sql"], "SELECT COUNT(*) FROM STUDENT;");
        assert_eq!(body["data"]["rows"], json!([[5]]));
    }

    #[actix_web::test]
    async fn test_database_error_is_visible() {
        let (_dir, storage) = temp_storage(false).await;
        let generator = Arc::new(StubGenerator::replying("SELECT * FROM COURSES"));

        let (status, body) =
            post_question(Arc::new(storage), generator, json!({"question": "list all courses"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 5003);
        assert!(body["message"].as_str().unwrap().starts_with("Database error:"));
        assert_eq!(body["data"]["rows"], json!([]));
    }

    #[actix_web::test]
    async fn test_model_failure_is_bad_gateway() {
        let (_dir, storage) = temp_storage(false).await;
        let generator = Arc::new(StubGenerator::failing("upstream unavailable"));

        let (status, body) =
            post_question(Arc::new(storage), generator, json!({"question": "anything"})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], 5002);
    }

    #[actix_web::test]
    async fn test_malformed_body_uses_json_error_handler() {
        let (_dir, storage) = temp_storage(false).await;
        let generator = Arc::new(StubGenerator::replying("SELECT 1"));

        let (status, body) =
            post_question(Arc::new(storage), generator, json!(42)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 1000);
    }

    #[actix_web::test]
    async fn test_bootstrap_failure_is_service_unavailable() {
        let generator = Arc::new(StubGenerator::replying("SELECT 1"));

        let (status, body) = post_question(
            Arc::new(UnavailableStorage),
            generator.clone(),
            json!({"question": "how many students?"}),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], 5004);
        assert_eq!(generator.calls(), 0);
    }
}
