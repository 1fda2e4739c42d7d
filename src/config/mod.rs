//! 配置管理
//!
//! 配置在 `main` 中加载一次，之后以 `web::Data<AppConfig>` / `&AppConfig` 的形式显式传递。

#[path = "impl.rs"]
mod loader;
mod structs;

pub use structs::*;
