use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tempfile::TempDir;
use tokio::time::{sleep, timeout};

const MOVIES_JSON: &str = r#"{
  "movies": [
    { "id": 1, "title": "Arrival", "year": 2016, "rating": 7.9, "category": "drama",
      "director": "Denis Villeneuve", "cast": ["Amy Adams", "Jeremy Renner"] },
    { "id": 2, "title": "Dune", "year": "2021", "rating": 8.1, "category": "action",
      "director": "Denis Villeneuve", "cast": ["Timothée Chalamet", "Zendaya"],
      "featured": true }
  ]
}"#;

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Write a config using in-memory history and the given catalog source
fn write_config(dir: &Path, port: u16, catalog_source: &str) -> std::path::PathBuf {
    let frontend_dir = dir.join("public");
    std::fs::create_dir_all(&frontend_dir).unwrap();

    let config = format!(
        r#"
[server]
host = "127.0.0.1"
port = {}

[catalog]
source = "{}"

[history]
backend = "memory"

[frontend]
dir = "{}"
"#,
        port,
        catalog_source,
        frontend_dir.display()
    );

    let path = dir.join("config.toml");
    std::fs::write(&path, config).unwrap();
    path
}

/// Spawn the server and return a handle
async fn spawn_server(config_path: &Path) -> tokio::process::Child {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_cinestream"))
        .env("CINESTREAM_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server")
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/api/v1/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

#[tokio::test]
async fn test_health_endpoint() {
    let dir = TempDir::new().unwrap();
    let port = get_available_port();
    let config_path = write_config(dir.path(), port, "missing.json");

    let mut server = spawn_server(&config_path).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["status"], "ok");

    // Cleanup
    server.kill().await.ok();
}

#[tokio::test]
async fn test_search_over_loaded_catalog() {
    let dir = TempDir::new().unwrap();
    let movies_path = dir.path().join("movies.json");
    std::fs::write(&movies_path, MOVIES_JSON).unwrap();

    let port = get_available_port();
    let config_path = write_config(dir.path(), port, &movies_path.display().to_string());

    let mut server = spawn_server(&config_path).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let json: serde_json::Value = client
        .get(format!("http://127.0.0.1:{}/api/v1/search?q=zendaya", port))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(json["view"], "results");
    assert_eq!(json["people"][0]["name"], "Zendaya");
    assert_eq!(json["people"][0]["role"], "actor");

    // Newest first after loading
    let json: serde_json::Value = client
        .get(format!("http://127.0.0.1:{}/api/v1/movies", port))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["movies"][0]["title"], "Dune");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_unreadable_catalog_falls_back_to_sample() {
    let dir = TempDir::new().unwrap();
    let port = get_available_port();
    let config_path = write_config(dir.path(), port, "/nonexistent/movies.json");

    let mut server = spawn_server(&config_path).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let json: serde_json::Value = Client::new()
        .get(format!("http://127.0.0.1:{}/api/v1/movies", port))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["count"], 5);

    server.kill().await.ok();
}

#[tokio::test]
async fn test_missing_config_file_exits_with_error() {
    let result = timeout(
        Duration::from_secs(5),
        tokio::process::Command::new(env!("CARGO_BIN_EXE_cinestream"))
            .env("CINESTREAM_CONFIG", "/nonexistent/config.toml")
            .env("RUST_LOG", "error")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
}

#[tokio::test]
async fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[search]\ndebounce_ms = 0\n").unwrap();

    let result = timeout(
        Duration::from_secs(5),
        tokio::process::Command::new(env!("CARGO_BIN_EXE_cinestream"))
            .env("CINESTREAM_CONFIG", &config_path)
            .env("RUST_LOG", "error")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
}
