use serde::{Deserialize, Serialize};

/// Body of `GET /appreviews/{appid}?json=1`.
///
/// Only the fields the collector reads are modelled; everything else the
/// store sends back (cursor, author blocks, vote counts...) is dropped
/// during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppReviewsResponse {
    /// `1` on success. Anything else, including a missing flag, is a failure.
    #[serde(default)]
    pub success: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_summary: Option<QuerySummary>,
    /// Absent or `null` on some failures and on empty pages.
    #[serde(default)]
    pub reviews: Option<Vec<SteamReview>>,
}

impl AppReviewsResponse {
    pub fn is_success(&self) -> bool {
        self.success == Some(1)
    }

    /// The returned reviews, treating a missing list as empty.
    pub fn reviews(&self) -> &[SteamReview] {
        self.reviews.as_deref().unwrap_or(&[])
    }

    pub fn into_reviews(self) -> Vec<SteamReview> {
        self.reviews.unwrap_or_default()
    }
}

/// Aggregate counters returned alongside the first page of reviews.
///
/// Later pages carry only `num_reviews`, so everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_reviews: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_score: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_score_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_positive: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_negative: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u64>,
}

/// A single review as returned by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SteamReview {
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub weighted_vote_score: Option<VoteScore>,
}

/// Helpfulness score attached to a review.
///
/// The store is inconsistent about the wire type: scored reviews usually
/// carry a decimal string (`"0.523809552192687988"`) while unscored ones
/// carry a bare `0`. The value is kept exactly as received so the written
/// file mirrors the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VoteScore {
    Number(serde_json::Number),
    Text(String),
}

impl VoteScore {
    /// Numeric view of the score, if it parses as one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            VoteScore::Number(n) => n.as_f64(),
            VoteScore::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<f64> for VoteScore {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(VoteScore::Number)
            .unwrap_or_else(|| VoteScore::Text(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_flag() {
        let ok: AppReviewsResponse = serde_json::from_str(r#"{"success": 1}"#).unwrap();
        assert!(ok.is_success());

        let failed: AppReviewsResponse = serde_json::from_str(r#"{"success": 2}"#).unwrap();
        assert!(!failed.is_success());

        let missing: AppReviewsResponse = serde_json::from_str("{}").unwrap();
        assert!(!missing.is_success());
    }

    #[test]
    fn test_missing_and_null_reviews_are_empty() {
        let missing: AppReviewsResponse = serde_json::from_str(r#"{"success": 1}"#).unwrap();
        assert!(missing.reviews().is_empty());

        let null: AppReviewsResponse =
            serde_json::from_str(r#"{"success": 1, "reviews": null}"#).unwrap();
        assert!(null.into_reviews().is_empty());
    }

    #[test]
    fn test_extra_review_fields_ignored() {
        let json = r#"{
            "success": 1,
            "query_summary": {"num_reviews": 1, "review_score_desc": "Very Positive"},
            "cursor": "AoJ4",
            "reviews": [{
                "recommendationid": "123",
                "author": {"steamid": "7656", "playtime_forever": 600},
                "language": "english",
                "review": "Great game",
                "voted_up": true,
                "votes_up": 12,
                "weighted_vote_score": "0.523809552192687988"
            }]
        }"#;
        let parsed: AppReviewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.query_summary.as_ref().unwrap().num_reviews, Some(1));
        let review = &parsed.reviews()[0];
        assert_eq!(review.review.as_deref(), Some("Great game"));
        assert_eq!(
            review.weighted_vote_score,
            Some(VoteScore::Text("0.523809552192687988".into()))
        );
    }

    #[test]
    fn test_missing_review_fields_become_none() {
        let review: SteamReview = serde_json::from_str(r#"{"votes_up": 3}"#).unwrap();
        assert_eq!(review, SteamReview::default());

        let null_score: SteamReview =
            serde_json::from_str(r#"{"review": "", "weighted_vote_score": null}"#).unwrap();
        assert_eq!(null_score.review.as_deref(), Some(""));
        assert!(null_score.weighted_vote_score.is_none());
    }

    #[test]
    fn test_vote_score_keeps_wire_type() {
        let number: VoteScore = serde_json::from_str("0").unwrap();
        assert_eq!(serde_json::to_string(&number).unwrap(), "0");

        let float: VoteScore = serde_json::from_str("0.9").unwrap();
        assert_eq!(serde_json::to_string(&float).unwrap(), "0.9");
        assert_eq!(float.as_f64(), Some(0.9));

        let text: VoteScore = serde_json::from_str(r#""0.5""#).unwrap();
        assert_eq!(serde_json::to_string(&text).unwrap(), r#""0.5""#);
        assert_eq!(text.as_f64(), Some(0.5));
    }
}
