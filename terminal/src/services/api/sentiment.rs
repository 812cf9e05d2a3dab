//! # Sentiment Endpoints
//!
//! Trending finance tweets with per-tweet sentiment.

use shared::dto::TrendingTweets;

use super::client::{decode, ApiClient};
use crate::core::error::ApiResult;

/// `GET /api/trending-tweets-data`
#[tracing::instrument(skip(client))]
pub async fn trending_tweets(client: &ApiClient) -> ApiResult<TrendingTweets> {
    let value = client.call("/api/trending-tweets-data", &[]).await?;
    let data: TrendingTweets = decode(value)?;

    tracing::debug!(tweets = data.tweets().len(), "Trending tweets fetched");
    Ok(data)
}
