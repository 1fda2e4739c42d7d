use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=frontend/dist");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let dist_path = Path::new(&manifest_dir).join("frontend/dist");

    // rust-embed 要求目录存在；缺失时写一个只有提示的页面
    if !dist_path.join("index.html").exists() {
        eprintln!("Warning: frontend/dist/index.html not found, embedding a placeholder page");
        create_fallback_files(&dist_path);
    }
}

fn create_fallback_files(dist_path: &Path) {
    fs::create_dir_all(dist_path).expect("Failed to create dist directory");

    let fallback_html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>%SYSTEM_NAME%</title>
</head>
<body>
    <h1>%SYSTEM_NAME%</h1>
    <p>The web page was not bundled with this build.</p>
    <p>Input your question through the API instead:</p>
    <pre>curl -X POST -H 'Content-Type: application/json' \
  -d '{"question": "How many entries of records are present?"}' \
  http://127.0.0.1:8080/api/v1/query</pre>
</body>
</html>"#;

    fs::write(dist_path.join("index.html"), fallback_html)
        .expect("Failed to write fallback index.html");
}
