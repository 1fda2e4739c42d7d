//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() / error_type() / message() 方法
/// - snake_case 便捷构造函数
macro_rules! define_nl2sql_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum Nl2SqlError {
            $($variant(String),)*
        }

        impl Nl2SqlError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(Nl2SqlError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(Nl2SqlError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(Nl2SqlError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl Nl2SqlError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        Nl2SqlError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_nl2sql_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    QueryExecution("E004", "Query Execution Error"),
    ModelConfig("E005", "Model Configuration Error"),
    ModelRequest("E006", "Model Request Error"),
    ModelResponse("E007", "Model Response Error"),
}

impl Nl2SqlError {
    /// 是否属于数据库侧的错误（执行器在这一类错误上兜底）
    pub fn is_database_error(&self) -> bool {
        matches!(
            self,
            Nl2SqlError::DatabaseConnection(_)
                | Nl2SqlError::DatabaseOperation(_)
                | Nl2SqlError::QueryExecution(_)
        )
    }

    /// 是否属于模型调用侧的错误
    pub fn is_model_error(&self) -> bool {
        matches!(
            self,
            Nl2SqlError::ModelConfig(_) | Nl2SqlError::ModelRequest(_) | Nl2SqlError::ModelResponse(_)
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for Nl2SqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for Nl2SqlError {}

impl From<sea_orm::DbErr> for Nl2SqlError {
    fn from(err: sea_orm::DbErr) -> Self {
        Nl2SqlError::DatabaseOperation(err.to_string())
    }
}

impl From<sea_orm::sqlx::Error> for Nl2SqlError {
    fn from(err: sea_orm::sqlx::Error) -> Self {
        Nl2SqlError::QueryExecution(err.to_string())
    }
}

impl From<reqwest::Error> for Nl2SqlError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Nl2SqlError::ModelResponse(err.to_string())
        } else {
            Nl2SqlError::ModelRequest(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Nl2SqlError>;
