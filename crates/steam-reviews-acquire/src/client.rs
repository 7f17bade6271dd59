use crate::config::FetchConfig;
use crate::error::FetchError;
use reqwest::StatusCode;
use steam_reviews_model::{AppId, AppReviewsResponse, ReviewRecord};

/// Build the shared HTTP client. No timeout is set; requests wait on the
/// transport defaults.
pub(crate) fn http_client(config: &FetchConfig) -> Result<reqwest::Client, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Client for the store's per-app review endpoint.
pub struct ReviewsClient {
    client: reqwest::Client,
    base_url: String,
    num_per_page: u32,
}

impl ReviewsClient {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: http_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            num_per_page: config.num_per_page,
        })
    }

    /// Endpoint for a single app, without query parameters.
    pub fn app_url(&self, app_id: AppId) -> String {
        format!("{}/{app_id}", self.base_url)
    }

    /// Fetch one page of reviews for `app_id` and keep the stored subset.
    ///
    /// Only an HTTP 200 whose body reports `success == 1` counts as a
    /// result; reviews with missing fields still produce a record.
    pub async fn fetch_app(&self, app_id: AppId) -> Result<Vec<ReviewRecord>, FetchError> {
        let url = self.app_url(app_id);
        let num_per_page = self.num_per_page.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("json", "1"), ("num_per_page", num_per_page.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(url = %url, status = status.as_u16(), "Non-OK response");
            return Err(FetchError::Status {
                app_id,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(app_id = %app_id, bytes = body.len(), "Received response body");
        let parsed: AppReviewsResponse = serde_json::from_slice(&body)?;

        if !parsed.is_success() {
            return Err(FetchError::Unsuccessful {
                app_id,
                success: parsed.success,
            });
        }

        if let Some(summary) = &parsed.query_summary {
            tracing::debug!(
                app_id = %app_id,
                total_reviews = ?summary.total_reviews,
                score = ?summary.review_score_desc,
                "Query summary"
            );
        }

        Ok(parsed
            .into_reviews()
            .into_iter()
            .map(ReviewRecord::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use steam_reviews_model::VoteScore;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ReviewsClient {
        let config = FetchConfig::with_base_url(format!("{}/appreviews/", server.uri()));
        ReviewsClient::new(&config).unwrap()
    }

    #[test]
    fn test_app_url_joins_base_and_id() {
        let client = ReviewsClient::new(&FetchConfig::default()).unwrap();
        assert_eq!(
            client.app_url(AppId(730)),
            "https://store.steampowered.com/appreviews/730"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_query_and_extracts_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appreviews/730"))
            .and(query_param("json", "1"))
            .and(query_param("num_per_page", "40"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": 1,
                "query_summary": {"num_reviews": 2},
                "reviews": [
                    {"review": "Great game", "weighted_vote_score": 0.9, "votes_up": 4},
                    {"review": "Meh", "language": "english"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = client_for(&server).await.fetch_app(AppId(730)).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].review.as_deref(), Some("Great game"));
        assert_eq!(records[0].weighted_vote_score.as_ref().and_then(VoteScore::as_f64), Some(0.9));
        assert_eq!(records[1].review.as_deref(), Some("Meh"));
        assert!(records[1].weighted_vote_score.is_none());
    }

    #[tokio::test]
    async fn test_fetch_missing_reviews_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appreviews/440"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": 1})))
            .mount(&server)
            .await;

        let records = client_for(&server).await.fetch_app(AppId(440)).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_non_ok_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appreviews/570"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_app(AppId(570)).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500 for app 570");
        match err {
            FetchError::Status { app_id, status } => {
                assert_eq!(app_id, AppId(570));
                assert_eq!(status, 500);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_success_flag_not_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appreviews/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": 2,
                "reviews": [{"review": "ignored"}]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_app(AppId(1)).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Unsuccessful { app_id: AppId(1), success: Some(2) }
        ));
        assert_eq!(err.to_string(), "API success flag was 2 for app 1");
    }

    #[tokio::test]
    async fn test_fetch_unparseable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/appreviews/2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_app(AppId(2)).await.unwrap_err();
        assert!(matches!(err, FetchError::Json(_)));
    }
}
