//! # Prediction Tasks

use async_channel::Sender;
use std::sync::Arc;
use tokio::spawn;

use super::deliver;
use crate::app::events::AppEvent;
use crate::core::service::ApiService;

/// Fetch a prediction for `symbol`.
pub(crate) fn fetch_prediction(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, symbol: String) {
    spawn(async move {
        let result = api.prediction(&symbol).await;
        deliver(&event_tx, AppEvent::PredictionLoaded { symbol, result }).await;
    });
}

/// Fetch accuracy and history for `symbol`, one event each.
pub(crate) fn fetch_prediction_insights(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    symbol: String,
) {
    spawn(async move {
        let accuracy = api.prediction_accuracy(&symbol).await;
        deliver(
            &event_tx,
            AppEvent::AccuracyLoaded {
                symbol: symbol.clone(),
                result: accuracy,
            },
        )
        .await;

        let history = api.prediction_history(&symbol).await;
        deliver(&event_tx, AppEvent::HistoryLoaded { symbol, result: history }).await;
    });
}
