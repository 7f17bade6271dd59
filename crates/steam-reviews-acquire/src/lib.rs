pub mod app_list;
pub mod client;
pub mod collect;
pub mod config;
pub mod error;
pub mod output;

pub use client::ReviewsClient;
pub use collect::{collect, fetch_reviews, resolve_and_fetch};
pub use config::FetchConfig;
pub use error::FetchError;
