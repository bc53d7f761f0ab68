#![allow(dead_code)]

use axum_test::TestServer;
use domain_collector::application::services::{CollectorService, StatsService};
use domain_collector::config::DEFAULT_MAX_BODY_BYTES;
use domain_collector::infrastructure::persistence::FileDomainSetRepository;
use domain_collector::routes::app_router;
use domain_collector::state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const OUTPUT_FILE: &str = "domains.txt";

/// Path of the persisted set inside a test directory.
pub fn output_path(dir: &TempDir) -> PathBuf {
    dir.path().join(OUTPUT_FILE)
}

pub fn create_test_state(dir: &TempDir, max_body_bytes: usize) -> AppState {
    let repository = Arc::new(FileDomainSetRepository::new(output_path(dir)));
    let stats = Arc::new(StatsService::default());
    let collector = Arc::new(CollectorService::new(repository, stats.clone()));
    AppState::new(collector, stats, max_body_bytes)
}

/// Full router over an empty collector in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn test_server() -> (TestServer, TempDir) {
    test_server_with_limit(DEFAULT_MAX_BODY_BYTES)
}

pub fn test_server_with_limit(max_body_bytes: usize) -> (TestServer, TempDir) {
    let dir = TempDir::new().unwrap();
    let state = create_test_state(&dir, max_body_bytes);
    let server = TestServer::new(app_router(state)).unwrap();
    (server, dir)
}

/// Full router over a collector whose file already holds `lines`.
pub fn seeded_server(lines: &[&str]) -> (TestServer, TempDir) {
    let dir = TempDir::new().unwrap();
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(output_path(&dir), content).unwrap();

    let repository = Arc::new(FileDomainSetRepository::new(output_path(&dir)));
    let stats = Arc::new(StatsService::new(lines.len() as u64));
    let collector = Arc::new(CollectorService::new(repository, stats.clone()));
    let state = AppState::new(collector, stats, DEFAULT_MAX_BODY_BYTES);

    let server = TestServer::new(app_router(state)).unwrap();
    (server, dir)
}

/// Lines of the persisted file, in file order.
pub fn read_output(dir: &TempDir) -> Vec<String> {
    match std::fs::read_to_string(output_path(dir)) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}
