//! nl2sql-server - 用自然语言查询学生示例库
//!
//! 把问题交给 Gemini 生成 SQL，在本地 SQLite 上执行并把结果返回给网页。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `llm`: 模型调用（问题 -> SQL）
//! - `models`: 数据模型定义
//! - `routes`: API 路由层与前端静态资源
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM / sqlx）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod llm;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
