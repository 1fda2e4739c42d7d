use serde::{Deserialize, Serialize};

/// 业务错误码，随 `ApiResponse::code` 返回给前端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求参数
    BadRequest = 1000,
    EmptyQuestion = 1001,

    // 服务端
    InternalServerError = 5000,
    ModelNotConfigured = 5001,
    ModelRequestFailed = 5002,
    QueryExecutionFailed = 5003,
    DatabaseUnavailable = 5004,
}
