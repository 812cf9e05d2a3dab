//! # Sentiment Data Transfer Objects
//!
//! Tweets and their sentiment scores as returned by
//! `GET /api/trending-tweets-data`.
//!
//! ```json
//! {
//!   "tweets": [{
//!     "id": "1789",
//!     "username": "marketwatcher",
//!     "name": "Market Watcher",
//!     "verified": true,
//!     "reliability_score": 85,
//!     "follower_count": 120000,
//!     "text": "NIFTY looking strong today",
//!     "sentiment": {"score": 72.5, "label": "Positive", "polarity": 0.45},
//!     "retweet_count": 12, "like_count": 40, "reply_count": 3,
//!     "created_at": "2024-01-05T15:45:00"
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::lenient;

/// Sentiment of a piece of text on a 0-100 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    #[serde(default, deserialize_with = "lenient::f64")]
    pub score: Option<f64>,
    /// Band computed by the backend (>60 positive, <40 negative).
    #[serde(default, deserialize_with = "lenient::string")]
    pub label: Option<String>,
    /// Signed polarity, negative for bearish text.
    #[serde(default, deserialize_with = "lenient::f64")]
    pub polarity: Option<f64>,
}

/// A finance-related tweet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub username: String,
    /// Display name.
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub verified: bool,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub reliability_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::u64")]
    pub follower_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::u64")]
    pub retweet_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::u64")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::u64")]
    pub reply_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub sentiment: SentimentRecord,
    #[serde(default, deserialize_with = "lenient::string")]
    pub created_at: Option<String>,
}

impl Tweet {
    /// Display name, falling back to the handle.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Response of `GET /api/trending-tweets-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingTweets {
    #[serde(default)]
    pub tweets: Option<Vec<Tweet>>,
}

impl TrendingTweets {
    /// Tweets, treating an absent list as empty.
    pub fn tweets(&self) -> &[Tweet] {
        self.tweets.as_deref().unwrap_or(&[])
    }

    /// Mean sentiment score across tweets that carry one.
    pub fn average_sentiment(&self) -> Option<f64> {
        let scores: Vec<f64> = self.tweets().iter().filter_map(|t| t.sentiment.score).collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut tweet = Tweet {
            username: "nse_alerts".to_string(),
            ..Default::default()
        };
        assert_eq!(tweet.display_name(), "nse_alerts");

        tweet.name = Some("  ".to_string());
        assert_eq!(tweet.display_name(), "nse_alerts");

        tweet.name = Some("NSE Alerts".to_string());
        assert_eq!(tweet.display_name(), "NSE Alerts");
    }

    #[test]
    fn test_average_sentiment_skips_missing_scores() {
        let json = r#"{"tweets": [
            {"username": "a", "text": "x", "sentiment": {"score": 70}},
            {"username": "b", "text": "y", "sentiment": {"score": 50}},
            {"username": "c", "text": "z", "sentiment": {}}
        ]}"#;
        let data: TrendingTweets = serde_json::from_str(json).unwrap();
        assert_eq!(data.tweets().len(), 3);
        assert_eq!(data.average_sentiment(), Some(60.0));
    }

    #[test]
    fn test_missing_tweet_list_is_empty() {
        let data: TrendingTweets = serde_json::from_str("{}").unwrap();
        assert!(data.tweets().is_empty());
        assert_eq!(data.average_sentiment(), None);
    }
}
