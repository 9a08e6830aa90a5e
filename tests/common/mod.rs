#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tokio::sync::{Mutex, MutexGuard};

use noteful_api::config::AppConfig;
use noteful_api::database::{DatabaseManager, Folder, FolderRepository, FolderStore};
use noteful_api::{app, AppState};

/// Tests share one table, so they take turns
static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub api_url: String,
    pub repo: Arc<FolderRepository>,
    db: DatabaseManager,
    _guard: MutexGuard<'static, ()>,
}

impl TestServer {
    pub fn folders_url(&self) -> String {
        format!("{}/folders", self.api_url)
    }

    pub fn folder_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/folders/{}", self.api_url, id)
    }

    /// Insert the fixture folders and return them as stored
    pub async fn seed(&self) -> Result<Vec<Folder>> {
        noteful_api::cli::commands::db::seed_fixtures(self.repo.as_ref()).await
    }

    pub async fn insert(&self, name: &str) -> Result<Folder> {
        Ok(self
            .repo
            .insert(noteful_api::database::NewFolder { name: name.to_string() })
            .await?)
    }

    pub async fn shutdown(self) -> Result<()> {
        self.repo.reset().await?;
        self.db.close().await;
        Ok(())
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

/// Start the API against `TEST_DATABASE_URL` with an empty folders table.
/// These tests are `#[ignore]`d by default; run them with
/// `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.
pub async fn spawn_server() -> Result<TestServer> {
    let _ = dotenvy::dotenv();
    let database_url = std::env::var("TEST_DATABASE_URL")
        .context("TEST_DATABASE_URL must point at a disposable PostgreSQL database")?;

    let guard = DB_LOCK.lock().await;

    let config = AppConfig::development();
    let db = DatabaseManager::connect(&database_url, &config.database)
        .await
        .context("failed to connect to TEST_DATABASE_URL")?;

    let repo = Arc::new(FolderRepository::new(db.pool().clone()));
    repo.ensure_table().await?;
    repo.reset().await?;

    let state = AppState::new(repo.clone(), config.api.root_path.clone());
    let router = app(state, &config);

    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let base_url = format!("http://127.0.0.1:{}", port);
    let server = TestServer {
        port,
        api_url: format!("{}{}", base_url, config.api.root_path),
        base_url,
        repo,
        db,
        _guard: guard,
    };
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
