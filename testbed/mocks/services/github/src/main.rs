use github_mock::{EventFixture, MockServer};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Check for fixtures directory
    let fixtures_path = env::var("FIXTURES_PATH").unwrap_or_else(|_| "/app/fixtures".to_string());

    let server = if let Ok(fixture_file) = fs::read_to_string(format!("{}/mock-events-fixture.yaml", fixtures_path)) {
        tracing::info!("Loading fixtures from {}/mock-events-fixture.yaml", fixtures_path);
        let fixture = EventFixture::from_yaml(&fixture_file)?;
        MockServer::with_fixture(fixture).await?
    } else {
        tracing::info!("No fixture file found, using default test fixture");
        MockServer::new().await?
    };

    let http_addr = env::var("MOCK_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    server.serve(&http_addr).await?;

    Ok(())
}
