use steam_reviews_model::AppId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for app {app_id}")]
    Status { app_id: AppId, status: u16 },

    #[error("HTTP {status} fetching app list from {url}")]
    AppListStatus { status: u16, url: String },

    #[error("API success flag was {} for app {app_id}", .success.map_or_else(|| "missing".to_string(), |s| s.to_string()))]
    Unsuccessful { app_id: AppId, success: Option<i64> },

    #[error("unexpected response body: {0}")]
    Json(#[from] serde_json::Error),
}
