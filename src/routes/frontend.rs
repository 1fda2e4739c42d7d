//! 前端静态资源路由
//!
//! 使用 rust-embed 把 `frontend/dist/` 嵌入二进制：
//! - 根路径与未知路径都返回 index.html
//! - `./frontend-custom/` 下的同名文件优先（开发时改页面不用重新编译）
//! - index.html 中的 `%SYSTEM_NAME%` 替换为配置的系统名

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

use crate::config::AppConfig;

/// 编译时从 frontend/dist/ 目录读取文件
#[derive(Embed)]
#[folder = "frontend/dist/"]
struct FrontendAssets;

fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" => "application/json; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn render_html(content: &[u8], config: &AppConfig) -> Vec<u8> {
    String::from_utf8_lossy(content)
        .replace("%SYSTEM_NAME%", &config.app.system_name)
        .into_bytes()
}

fn get_file(path: &str) -> Option<Vec<u8>> {
    std::fs::read(format!("./frontend-custom/{path}"))
        .ok()
        .or_else(|| FrontendAssets::get(path).map(|f| f.data.to_vec()))
}

/// 前端资源请求处理
pub async fn serve_frontend(
    req: HttpRequest,
    config: web::Data<AppConfig>,
) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');

    let (content, file_path) = match (path.is_empty(), get_file(path)) {
        (false, Some(content)) => (Some(content), path),
        _ => (get_file("index.html"), "index.html"),
    };

    let Some(mut data) = content else {
        return Ok(HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Frontend assets are not embedded in this build."));
    };

    let mime = get_mime_type(file_path);
    if mime.starts_with("text/html") {
        data = render_html(&data, &config);
    }

    Ok(HttpResponse::Ok()
        .content_type(mime)
        .insert_header(("Cache-Control", "no-cache, no-store, must-revalidate"))
        .body(data))
}

/// 配置前端路由（放在最后作为 fallback）
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}
