use serde::Deserialize;

// 提问请求
#[derive(Debug, Clone, Deserialize)]
pub struct AskQuestionRequest {
    #[serde(default)]
    pub question: String,
}
