/// Store endpoint serving one page of reviews per app: `{BASE_URL}/{appid}`.
pub const DEFAULT_BASE_URL: &str = "https://store.steampowered.com/appreviews";

/// Full app catalogue, used to turn game names into app ids.
pub const DEFAULT_APP_LIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v0002/";

/// Page size sent as `num_per_page`. The store caps a single page at 100.
pub const DEFAULT_NUM_PER_PAGE: u32 = 40;

/// Fetched when neither app ids nor game names are requested:
/// CS2, Dota 2, TF2, Noita, EA FC 25, Madden 25, Black Ops 6, Portal 2.
pub const DEFAULT_APP_IDS: [u32; 8] = [730, 570, 440, 881100, 2669320, 2582560, 2933620, 620];

pub const DEFAULT_USER_AGENT: &str = concat!("steam-reviews/", env!("CARGO_PKG_VERSION"));

/// Settings for talking to the Steam endpoints.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub app_list_url: String,
    pub num_per_page: u32,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_list_url: DEFAULT_APP_LIST_URL.to_string(),
            num_per_page: DEFAULT_NUM_PER_PAGE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Same defaults, pointed at another review endpoint (a mirror or a test server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
