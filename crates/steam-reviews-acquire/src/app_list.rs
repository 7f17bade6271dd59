use crate::client::http_client;
use crate::config::FetchConfig;
use crate::error::FetchError;
use reqwest::StatusCode;
use steam_reviews_model::{AppId, AppList, AppListResponse};

/// Client for the public app catalogue.
pub struct AppListClient {
    client: reqwest::Client,
    url: String,
}

impl AppListClient {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: http_client(config)?,
            url: config.app_list_url.clone(),
        })
    }

    /// Download the full app list. This is a large document (hundreds of
    /// thousands of entries), so fetch it once per run.
    pub async fn fetch_apps(&self) -> Result<AppList, FetchError> {
        tracing::info!(url = %self.url, "Fetching Steam app list");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::AppListStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        let parsed: AppListResponse = serde_json::from_slice(&body)?;
        tracing::info!(apps = parsed.applist.apps.len(), "Received app list");
        Ok(parsed.applist)
    }
}

/// Resolve game names to app ids, in input order.
///
/// Names with no exact (case-insensitive) match are logged and left out.
pub fn resolve_names(apps: &AppList, names: &[String]) -> Vec<AppId> {
    names
        .iter()
        .filter_map(|name| match apps.find(name) {
            Some(app) => {
                tracing::info!(game = %name, app_id = %app.appid, "Resolved game name");
                Some(app.appid)
            }
            None => {
                tracing::warn!(game = %name, "Game not found in app list; skipping");
                None
            }
        })
        .collect()
}
