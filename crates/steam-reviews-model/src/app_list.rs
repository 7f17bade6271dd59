use crate::collection::AppId;
use serde::{Deserialize, Serialize};

/// Body of `ISteamApps/GetAppList/v0002`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppListResponse {
    pub applist: AppList,
}

/// Every app known to the store, as `(appid, name)` pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppList {
    #[serde(default)]
    pub apps: Vec<App>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub appid: AppId,
    #[serde(default)]
    pub name: String,
}

impl AppList {
    /// Look up an app by exact name, ignoring case.
    ///
    /// The list contains duplicates (DLC, soundtracks and re-releases often
    /// share a name); the first match wins.
    pub fn find(&self, name: &str) -> Option<&App> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        self.apps.iter().find(|app| app.name.to_lowercase() == wanted)
    }
}
