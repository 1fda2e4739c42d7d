//! 查询执行边界
//!
//! 数据库侧的任何失败都在这里被接住：返回空结果集，并带上一条给用户看的错误信息。

use tracing::{debug, error};

use crate::storage::{QueryRows, Storage};
use crate::utils::classify_statement;

#[derive(Debug, Clone, Default)]
pub struct ExecutionReport {
    pub result: QueryRows,
    pub error: Option<String>,
}

impl ExecutionReport {
    fn failed(message: String) -> Self {
        Self {
            result: QueryRows::default(),
            error: Some(message),
        }
    }
}

pub async fn execute_generated_sql(
    storage: &dyn Storage,
    sql: &str,
    read_only: bool,
) -> ExecutionReport {
    let info = classify_statement(sql);
    debug!(
        kind = info.kind.as_str(),
        statements = info.statement_count,
        "Classified generated statement"
    );

    if read_only && !info.is_read_only() {
        error!("Refused {} statement in read-only mode", info.kind.as_str());
        return ExecutionReport::failed(
            "Database error: only a single SELECT statement may run in read-only mode".to_string(),
        );
    }

    match storage.read_sql_query(sql).await {
        Ok(result) => ExecutionReport {
            result,
            error: None,
        },
        Err(e) => {
            error!("Database error while executing generated SQL: {}", e);
            ExecutionReport::failed(format!("Database error: {}", e.message()))
        }
    }
}
