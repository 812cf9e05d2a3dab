//! # Trending Tweets Page
//!
//! Aggregate sentiment over recent finance tweets plus the tweet feed.
//! Refreshed every ten minutes by the app.

use chrono::Local;
use shared::dto::{Tweet, TrendingTweets};

use super::{LoadCycle, LoadState, Outcome, EMPTY_ID};
use crate::app::view::{Cell, Row, ViewBinding};
use crate::core::error::ApiResult;
use crate::core::service::ApiService;
use crate::utils::format::{
    color_class_for_sentiment, format_clock_time, format_date, format_fixed, format_large_number,
    format_plain, impact_label, market_trend, midpoint_sentiment_label, sentiment_label,
};

pub const TWEETS_LIST: &str = "tweets-list";

const CONTENT: &[&str] = &["sentiment-overview", "tweets-container"];
const HIGH_RELIABILITY: f64 = 80.0;

/// Cell order of [`TWEETS_LIST`] rows.
pub mod cells {
    pub const AUTHOR: usize = 0;
    pub const VERIFIED: usize = 1;
    pub const RELIABLE: usize = 2;
    pub const HANDLE: usize = 3;
    pub const SENTIMENT: usize = 4;
    pub const DATE: usize = 5;
    pub const TEXT: usize = 6;
    pub const RETWEETS: usize = 7;
    pub const LIKES: usize = 8;
    pub const REPLIES: usize = 9;
    pub const IMPACT: usize = 10;
}

#[derive(Debug, Clone)]
pub struct TrendingPage {
    cycle: LoadCycle,
}

impl TrendingPage {
    pub fn new() -> Self {
        Self {
            cycle: LoadCycle::new(CONTENT).with_empty(EMPTY_ID),
        }
    }

    pub fn state(&self) -> LoadState {
        self.cycle.state()
    }

    pub fn begin_refresh(&mut self, view: &mut dyn ViewBinding) {
        self.cycle.begin(view);
    }

    pub fn apply(&mut self, result: ApiResult<TrendingTweets>, view: &mut dyn ViewBinding) {
        match result {
            Ok(data) if data.tweets().is_empty() => {
                tracing::info!("No trending tweets available");
                self.cycle.finish(view, Outcome::Empty);
            }
            Ok(data) => {
                render_overview(&data, view);
                let rows = data.tweets().iter().map(tweet_row).collect();
                view.set_rows(TWEETS_LIST, rows);
                self.cycle.finish(view, Outcome::Content);
            }
            Err(e) => {
                tracing::error!(error = %e, kind = e.kind(), "Failed to load tweets");
                self.cycle.finish(view, Outcome::Error(None));
            }
        }
    }

    pub async fn refresh(&mut self, api: &dyn ApiService, view: &mut dyn ViewBinding) {
        self.begin_refresh(view);
        let result = api.trending_tweets().await;
        self.apply(result, view);
    }
}

impl Default for TrendingPage {
    fn default() -> Self {
        Self::new()
    }
}

fn render_overview(data: &TrendingTweets, view: &mut dyn ViewBinding) {
    let average = data.average_sentiment();

    view.set_text("overall-sentiment-score", &format_fixed(average, 1));
    view.set_styled(
        "overall-sentiment-label",
        midpoint_sentiment_label(average),
        &format!("badge {}", color_class_for_sentiment(average).css()),
    );

    let (trend, class) = market_trend(average);
    view.set_styled("market-trend", trend, &format!("card-text {}", class));
    view.set_text("tweet-count", &data.tweets().len().to_string());
    view.set_text("last-updated", &format_clock_time(Local::now()));
}

fn tweet_row(tweet: &Tweet) -> Row {
    let score = tweet.sentiment.score;
    let band = color_class_for_sentiment(score);

    let mut handle = format!("@{}", tweet.username);
    if let Some(followers) = tweet.follower_count.filter(|f| *f > 0) {
        handle.push_str(&format!(" • {} followers", format_large_number(Some(followers as f64))));
    }
    if let Some(reliability) = tweet.reliability_score.filter(|r| *r != 0.0) {
        handle.push_str(&format!(" • {}% reliable", format_plain(Some(reliability))));
    }

    let label = tweet
        .sentiment
        .label
        .clone()
        .unwrap_or_else(|| sentiment_label(score).to_string());
    let verified = if tweet.verified { "✔" } else { "" };
    let reliable = match tweet.reliability_score {
        Some(r) if r >= HIGH_RELIABILITY => "★",
        _ => "",
    };
    let counter = |value: Option<u64>| format_large_number(Some(value.unwrap_or(0) as f64));

    Row::new(vec![
        Cell::new(tweet.display_name()),
        Cell::new(verified),
        Cell::new(reliable),
        Cell::new(handle),
        Cell::classed(format!("{} ({})", label, format_fixed(score, 1)), band.css()),
        Cell::new(format_date(tweet.created_at.as_deref())),
        Cell::new(tweet.text.clone()),
        Cell::new(counter(tweet.retweet_count)),
        Cell::new(counter(tweet.like_count)),
        Cell::new(counter(tweet.reply_count)),
        Cell::new(format!("Impact Score: {}", impact_label(tweet.sentiment.polarity))),
    ])
    .with_class(format!("tweet-card {}", band.border_css()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pages::{ERROR_ID, ERROR_MESSAGE_ID, LOADING_ID};
    use crate::app::view::ViewModel;
    use crate::core::error::{ApiError, GENERIC_ERROR_MESSAGE};
    use crate::core::service::mock::MockApi;

    fn tweets() -> TrendingTweets {
        serde_json::from_str(
            r#"{"tweets": [
                {"username": "marketwatcher", "name": "Market Watcher", "verified": true,
                 "reliability_score": 85, "follower_count": 120000,
                 "text": "NIFTY looking strong today",
                 "sentiment": {"score": 72.5, "label": "Positive", "polarity": 0.45},
                 "retweet_count": 1500, "like_count": 40,
                 "created_at": "2024-01-05T15:45:00"},
                {"username": "bearish_bob", "text": "Sell everything",
                 "sentiment": {"score": 30.1, "polarity": -0.6}}
            ]}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_refresh_renders_overview_and_feed() {
        let api = MockApi {
            tweets: Ok(tweets()),
            ..Default::default()
        };
        let mut page = TrendingPage::new();
        let mut view = ViewModel::default();

        page.refresh(&api, &mut view).await;

        assert_eq!(page.state(), LoadState::Content);
        assert!(view.is_visible("sentiment-overview"));
        assert!(view.is_visible("tweets-container"));
        assert!(!view.is_visible(EMPTY_ID));

        // (72.5 + 30.1) / 2
        assert_eq!(view.text("overall-sentiment-score"), Some("51.3"));
        assert_eq!(view.text("overall-sentiment-label"), Some("Positive"));
        assert_eq!(view.class("overall-sentiment-label"), Some("badge sentiment-neutral"));
        assert_eq!(view.text("market-trend"), Some("Stable"));
        assert_eq!(view.class("market-trend"), Some("card-text text-muted"));
        assert_eq!(view.text("tweet-count"), Some("2"));

        let rows = view.rows(TWEETS_LIST);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cell(cells::AUTHOR), "Market Watcher");
        assert_eq!(rows[0].cell(cells::VERIFIED), "✔");
        assert_eq!(rows[0].cell(cells::RELIABLE), "★");
        assert_eq!(
            rows[0].cell(cells::HANDLE),
            "@marketwatcher • 120.00K followers • 85% reliable"
        );
        assert_eq!(rows[0].cell(cells::SENTIMENT), "Positive (72.5)");
        assert_eq!(rows[0].cell(cells::RETWEETS), "1.50K");
        assert_eq!(rows[0].cell(cells::REPLIES), "0");
        assert_eq!(rows[0].cell(cells::IMPACT), "Impact Score: Positive");
        assert_eq!(rows[0].class.as_deref(), Some("tweet-card border-start-success"));

        assert_eq!(rows[1].cell(cells::AUTHOR), "bearish_bob");
        assert_eq!(rows[1].cell(cells::HANDLE), "@bearish_bob");
        assert_eq!(rows[1].cell(cells::SENTIMENT), "Negative (30.1)");
        assert_eq!(rows[1].cell(cells::DATE), "--");
        assert_eq!(rows[1].class.as_deref(), Some("tweet-card border-start-danger"));
    }

    #[tokio::test]
    async fn test_empty_list_goes_to_empty_state() {
        let api = MockApi {
            tweets: Ok(TrendingTweets { tweets: Some(Vec::new()) }),
            ..Default::default()
        };
        let mut page = TrendingPage::new();
        let mut view = ViewModel::default();

        page.begin_refresh(&mut view);
        assert_eq!(page.state(), LoadState::Loading);
        page.apply(api.trending_tweets().await, &mut view);

        assert_eq!(page.state(), LoadState::Empty);
        assert!(view.is_visible(EMPTY_ID));
        assert!(!view.is_visible(LOADING_ID));
        assert!(!view.is_visible(ERROR_ID));
        assert!(!view.is_visible("sentiment-overview"));
        assert!(!view.is_visible("tweets-container"));
    }

    #[tokio::test]
    async fn test_failure_uses_generic_message() {
        let api = MockApi {
            tweets: Err(ApiError::Application("Twitter API rate limited".to_string())),
            ..Default::default()
        };
        let mut page = TrendingPage::new();
        let mut view = ViewModel::default();

        page.refresh(&api, &mut view).await;

        assert_eq!(page.state(), LoadState::Error);
        assert!(!view.is_visible(LOADING_ID));
        assert_eq!(view.text(ERROR_MESSAGE_ID), Some(GENERIC_ERROR_MESSAGE));
    }
}
