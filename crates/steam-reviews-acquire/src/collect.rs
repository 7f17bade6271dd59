use crate::app_list::{resolve_names, AppListClient};
use crate::client::ReviewsClient;
use crate::config::{FetchConfig, DEFAULT_APP_IDS};
use crate::error::FetchError;
use crate::output;
use anyhow::{Context, Result};
use std::path::Path;
use steam_reviews_model::{AppId, ReviewCollection};

/// Fetch reviews for each app in turn and gather them by app id.
///
/// A failed app is logged and left out of the result; it never stops the
/// remaining apps from being fetched.
pub async fn collect(client: &ReviewsClient, app_ids: &[AppId]) -> ReviewCollection {
    let mut collection = ReviewCollection::new();

    for &app_id in app_ids {
        tracing::info!(app_id = %app_id, "Fetching reviews");
        match client.fetch_app(app_id).await {
            Ok(records) => {
                tracing::info!(app_id = %app_id, reviews = records.len(), "Fetched reviews");
                collection.insert(app_id, records);
            }
            Err(FetchError::Status { status, .. }) => {
                tracing::warn!(app_id = %app_id, status, "Received non-OK status; skipping");
            }
            Err(FetchError::Unsuccessful { success, .. }) => {
                tracing::warn!(app_id = %app_id, success = ?success, "API did not report success; skipping");
            }
            Err(e) => {
                tracing::warn!(app_id = %app_id, error = %e, "Failed to fetch reviews; skipping");
            }
        }
    }

    collection
}

/// Fetch reviews for `app_ids` and write them to `output_path`.
///
/// Per-app failures only show up in the log and as missing keys in the
/// file. The file is written even when nothing succeeded.
pub async fn fetch_reviews(config: &FetchConfig, app_ids: &[AppId], output_path: &Path) -> Result<()> {
    let client = ReviewsClient::new(config).context("Failed to build HTTP client")?;
    let collection = collect(&client, app_ids).await;

    let skipped = app_ids
        .iter()
        .filter(|id| !collection.contains(**id))
        .count();
    if skipped > 0 {
        tracing::warn!(skipped, requested = app_ids.len(), "Some apps were not fetched");
    }

    output::write_collection(&collection, output_path)?;
    tracing::info!(path = %output_path.display(), "Reviews saved");
    Ok(())
}

/// Turn explicit ids plus game names into the list of apps to fetch, then
/// fetch and write them.
///
/// Resolved names follow the explicit ids. With neither ids nor names the
/// built-in [`DEFAULT_APP_IDS`] are used. A failed app-list download only
/// leaves the names unresolved; the explicit ids are still fetched and the
/// file is still written.
pub async fn resolve_and_fetch(
    config: &FetchConfig,
    app_ids: &[AppId],
    games: &[String],
    output_path: &Path,
) -> Result<()> {
    let mut ids = app_ids.to_vec();
    if !games.is_empty() {
        ids.extend(resolve_games(config, games).await);
    } else if ids.is_empty() {
        ids = DEFAULT_APP_IDS.iter().copied().map(AppId).collect();
        tracing::info!(apps = ids.len(), "No app ids given; using built-in list");
    }

    tracing::info!(apps = ids.len(), output = %output_path.display(), "Fetching reviews");
    fetch_reviews(config, &ids, output_path).await
}

async fn resolve_games(config: &FetchConfig, games: &[String]) -> Vec<AppId> {
    let apps = match AppListClient::new(config) {
        Ok(client) => client.fetch_apps().await,
        Err(e) => Err(e),
    };
    match apps {
        Ok(apps) => resolve_names(&apps, games),
        Err(e) => {
            tracing::warn!(error = %e, games = games.len(), "Failed to fetch app list; game names left unresolved");
            Vec::new()
        }
    }
}
