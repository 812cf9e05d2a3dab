//! # Sentiment Tasks

use async_channel::Sender;
use std::sync::Arc;
use tokio::spawn;

use super::deliver;
use crate::app::events::AppEvent;
use crate::core::service::ApiService;

/// Fetch trending tweets.
pub(crate) fn fetch_trending_tweets(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let result = api.trending_tweets().await;
        if let Ok(data) = &result {
            tracing::debug!(tweets = data.tweets().len(), "Trending tweets fetched");
        }
        deliver(&event_tx, AppEvent::TweetsLoaded(result)).await;
    });
}
