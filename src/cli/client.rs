use anyhow::{anyhow, Context};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use url::Url;

use crate::api::format::FolderView;

/// Thin HTTP client for the folders API
pub struct FolderClient {
    http: reqwest::Client,
    base: Url,
}

impl FolderClient {
    /// `server` is the API root, e.g. `http://localhost:8000/api`
    pub fn new(server: &str) -> anyhow::Result<Self> {
        let mut base = Url::parse(server).with_context(|| format!("invalid server URL: {}", server))?;
        // Url::join drops the last segment unless the path ends with a slash
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    pub fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base
            .join(path)
            .with_context(|| format!("invalid request path: {}", path))
    }

    pub async fn list(&self) -> anyhow::Result<Vec<FolderView>> {
        let res = self.http.get(self.url("folders")?).send().await?;
        let res = ensure_success(res).await?;
        Ok(res.json().await?)
    }

    pub async fn get(&self, id: &str) -> anyhow::Result<FolderView> {
        let res = self
            .http
            .get(self.url(&format!("folders/{}", id))?)
            .send()
            .await?;
        let res = ensure_success(res).await?;
        Ok(res.json().await?)
    }

    /// Returns the created folder and the `Location` header, if any
    pub async fn create(&self, name: &str) -> anyhow::Result<(FolderView, Option<String>)> {
        let res = self
            .http
            .post(self.url("folders")?)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        let res = ensure_success(res).await?;
        let location = res
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok((res.json().await?, location))
    }

    pub async fn delete(&self, id: &str) -> anyhow::Result<()> {
        let res = self
            .http
            .delete(self.url(&format!("folders/{}", id))?)
            .send()
            .await?;
        ensure_success(res).await?;
        Ok(())
    }
}

/// Turn a non-2xx response into an error carrying the API's message
async fn ensure_success(res: Response) -> anyhow::Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = res.text().await.unwrap_or_default();
    Err(anyhow!("{}: {}", status, error_message(status, &body)))
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}
