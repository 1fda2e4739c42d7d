//! 自然语言转 SQL 的模型调用层

pub mod gemini;
pub mod prompt;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;

pub use gemini::GeminiClient;
pub use prompt::SQL_PROMPT;

/// 把用户问题交给模型，换回一条 SQL 文本
///
/// 返回值只去掉首尾空白，不做任何语法校验。
#[async_trait::async_trait]
pub trait SqlGenerator: Send + Sync {
    async fn generate_sql(&self, question: &str) -> Result<String>;

    /// 模型名称，用于日志
    fn model_name(&self) -> &str;
}

pub fn create_generator(config: &AppConfig) -> Arc<dyn SqlGenerator> {
    Arc::new(GeminiClient::from_config(config))
}
