use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students").service(web::resource("").route(web::get().to(list_students))),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::Value;

    use super::*;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::tests::temp_storage;

    #[actix_web::test]
    async fn test_list_returns_seed_rows_in_insert_order() {
        let (_dir, storage) = temp_storage(false).await;
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_student_routes),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/students")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["code"], 0);
        assert_eq!(body["data"]["total"], 5);

        let names: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Krish", "Sudhanshu", "Darius", "Vikash", "Dipesh"]);
        assert_eq!(body["data"]["items"][1]["marks"], 100);
        assert_eq!(body["data"]["items"][3]["class"], "DEVOPS");
    }
}
