pub mod parameter_error_handler;
pub mod sql;
pub mod validate;

pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::{StatementInfo, StatementKind, classify_statement};
pub use validate::validate_question;
