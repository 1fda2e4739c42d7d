use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{Instrument, error, info, info_span, warn};

use super::QueryService;
use super::execute::execute_generated_sql;
use crate::config::AppConfig;
use crate::errors::{Nl2SqlError, Result};
use crate::llm::SqlGenerator;
use crate::models::queries::requests::AskQuestionRequest;
use crate::models::queries::responses::AskQuestionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::{EMPTY_QUESTION_WARNING, validate_question};

/// 一次提问的结果
#[derive(Debug)]
pub enum AskOutcome {
    /// 问题为空，模型和数据库都未被调用
    EmptyQuestion,
    /// 语句执行成功（结果可能为空）
    Answered(AskQuestionResponse),
    /// 语句执行失败，结果集为空
    QueryFailed {
        response: AskQuestionResponse,
        message: String,
    },
}

/// 初始化数据库 -> 调用模型 -> 执行语句
///
/// 只有数据库执行错误会被转换为 `QueryFailed`，其余错误（模型调用、建表失败）直接返回。
pub async fn run_question(
    storage: &dyn Storage,
    generator: &dyn SqlGenerator,
    config: &AppConfig,
    question: &str,
) -> Result<AskOutcome> {
    let question = match validate_question(question) {
        Ok(q) => q,
        Err(_) => {
            warn!("Rejected empty question");
            return Ok(AskOutcome::EmptyQuestion);
        }
    };

    storage.bootstrap().await?;

    let sql = generator.generate_sql(question).await?;
    info!(model = generator.model_name(), "Generated SQL: {}", sql);

    let report = execute_generated_sql(storage, &sql, config.query.read_only).await;
    let response = AskQuestionResponse::new(question, sql, report.result);

    Ok(match report.error {
        None => AskOutcome::Answered(response),
        Some(message) => AskOutcome::QueryFailed { response, message },
    })
}

pub async fn ask_question(
    service: &QueryService,
    request: &HttpRequest,
    body: AskQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let generator = service.get_generator(request);
    let config = service.get_config(request);

    let request_id = uuid::Uuid::new_v4();
    let outcome = run_question(storage.as_ref(), generator.as_ref(), config, &body.question)
        .instrument(info_span!("ask", %request_id))
        .await;

    match outcome {
        Ok(AskOutcome::EmptyQuestion) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::EmptyQuestion, EMPTY_QUESTION_WARNING),
        )),
        Ok(AskOutcome::Answered(response)) => {
            let message = if response.rows.is_empty() {
                "No results found."
            } else {
                "Query executed successfully"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
        }
        Ok(AskOutcome::QueryFailed { response, message }) => Ok(HttpResponse::Ok().json(
            ApiResponse::error(ErrorCode::QueryExecutionFailed, response, message),
        )),
        Err(e) => {
            error!("Question {} failed: {}", request_id, e);
            Ok(error_response(&e))
        }
    }
}

fn error_response(err: &Nl2SqlError) -> HttpResponse {
    match err {
        Nl2SqlError::ModelConfig(msg) => HttpResponse::InternalServerError()
            .json(ApiResponse::error_empty(ErrorCode::ModelNotConfigured, msg.as_str())),
        e if e.is_model_error() => HttpResponse::BadGateway().json(ApiResponse::error_empty(
            ErrorCode::ModelRequestFailed,
            e.format_simple(),
        )),
        e if e.is_database_error() => HttpResponse::ServiceUnavailable().json(
            ApiResponse::error_empty(ErrorCode::DatabaseUnavailable, e.format_simple()),
        ),
        e => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            e.format_simple(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::llm::testing::StubGenerator;
    use crate::models::students::entities::Student;
    use crate::storage::QueryRows;
    use crate::storage::sea_orm_storage::tests::temp_storage;

    /// 只计数、不落盘的存储替身
    #[derive(Default)]
    struct CountingStorage {
        bootstraps: AtomicUsize,
        queries: AtomicUsize,
        fail_bootstrap: bool,
    }

    #[async_trait::async_trait]
    impl Storage for CountingStorage {
        async fn bootstrap(&self) -> Result<()> {
            self.bootstraps.fetch_add(1, Ordering::SeqCst);
            if self.fail_bootstrap {
                return Err(Nl2SqlError::database_connection("unable to open database file"));
            }
            Ok(())
        }

        async fn count_students(&self) -> Result<u64> {
            Ok(0)
        }

        async fn list_students(&self) -> Result<Vec<Student>> {
            Ok(vec![])
        }

        async fn read_sql_query(&self, _sql: &str) -> Result<QueryRows> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            Ok(QueryRows::default())
        }
    }

    #[tokio::test]
    async fn test_empty_question_skips_model_and_executor() {
        let storage = CountingStorage::default();
        let generator = StubGenerator::replying("SELECT 1");
        let config = AppConfig::default();

        for question in ["", "   ", "\n\t"] {
            let outcome = run_question(&storage, &generator, &config, question)
                .await
                .unwrap();
            assert!(matches!(outcome, AskOutcome::EmptyQuestion));
        }

        assert_eq!(generator.calls(), 0);
        assert_eq!(storage.queries.load(Ordering::SeqCst), 0);
        assert_eq!(storage.bootstraps.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_question_runs_generated_sql() {
        let (_dir, storage) = temp_storage(false).await;
        let generator =
            StubGenerator::replying("  SELECT * FROM STUDENT WHERE CLASS='Data Science';\n");
        let config = AppConfig::default();

        let outcome = run_question(
            &storage,
            &generator,
            &config,
            " Tell me all the students studying in Data Science class? ",
        )
        .await
        .unwrap();

        let AskOutcome::Answered(response) = outcome else {
            panic!("expected an answer, got {outcome:?}");
        };
        assert_eq!(generator.calls(), 1);
        assert_eq!(
            response.question,
            "Tell me all the students studying in Data Science class?"
        );
        assert_eq!(response.sql, "SELECT * FROM STUDENT WHERE CLASS='Data Science';");
        assert_eq!(response.row_count, 3);
    }

    #[tokio::test]
    async fn test_database_error_is_reported_not_raised() {
        let (_dir, storage) = temp_storage(false).await;
        let generator = StubGenerator::replying("SELEC * FROM STUDENT");
        let config = AppConfig::default();

        let outcome = run_question(&storage, &generator, &config, "everything")
            .await
            .unwrap();

        let AskOutcome::QueryFailed { response, message } = outcome else {
            panic!("expected a query failure, got {outcome:?}");
        };
        assert!(response.rows.is_empty());
        assert_eq!(response.row_count, 0);
        assert!(message.starts_with("Database error:"));
    }

    #[tokio::test]
    async fn test_model_error_propagates() {
        let storage = CountingStorage::default();
        let generator = StubGenerator::failing("quota exceeded");
        let config = AppConfig::default();

        let err = run_question(&storage, &generator, &config, "how many?")
            .await
            .unwrap_err();

        assert!(err.is_model_error());
        assert_eq!(storage.queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_bootstrap_failure_stops_before_model() {
        let storage = CountingStorage {
            fail_bootstrap: true,
            ..Default::default()
        };
        let generator = StubGenerator::replying("SELECT 1");
        let config = AppConfig::default();

        let err = run_question(&storage, &generator, &config, "how many?")
            .await
            .unwrap_err();

        assert!(err.is_database_error());
        assert_eq!(
            error_response(&err).status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(storage.bootstraps.load(Ordering::SeqCst), 1);
        assert_eq!(generator.calls(), 0);
        assert_eq!(storage.queries.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_error_response_status() {
        assert_eq!(
            error_response(&Nl2SqlError::model_config("missing key")).status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_response(&Nl2SqlError::model_request("503")).status(),
            actix_web::http::StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            error_response(&Nl2SqlError::database_connection("locked")).status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
