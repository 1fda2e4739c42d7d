use crate::config::AppConfig;
use crate::llm::{SqlGenerator, create_generator};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub generator: Arc<dyn SqlGenerator>,
}

/// 准备服务器启动的上下文
/// 包括 TLS 提供者、存储（建表 + 种子数据）和模型客户端
pub async fn prepare_server_startup(config: &AppConfig) -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage(config)
        .await
        .expect("Failed to create storage backend");

    // 首次启动时建表并写入种子数据，失败直接退出
    storage
        .bootstrap()
        .await
        .expect("Failed to bootstrap the student database");
    match storage.count_students().await {
        Ok(count) => debug!("Student table ready with {} row(s)", count),
        Err(e) => warn!("Failed to count students after bootstrap: {}", e),
    }
    warn!("Storage backend initialized and seeded");

    if !config.has_model_credentials() {
        warn!("GOOGLE_API_KEY is not set; questions will fail until it is configured");
    }
    let generator = create_generator(config);
    warn!("Model client initialized ({})", generator.model_name());

    StartupContext { storage, generator }
}
