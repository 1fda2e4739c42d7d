use serde::Serialize;

use crate::storage::QueryRows;

// 提问结果：生成的 SQL 以及查询到的行
#[derive(Debug, Clone, Serialize)]
pub struct AskQuestionResponse {
    pub question: String,
    pub sql: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
    pub row_count: usize,
}

impl AskQuestionResponse {
    pub fn new(question: impl Into<String>, sql: impl Into<String>, result: QueryRows) -> Self {
        let row_count = result.rows.len();
        Self {
            question: question.into(),
            sql: sql.into(),
            columns: result.columns,
            rows: result.rows,
            row_count,
        }
    }
}
