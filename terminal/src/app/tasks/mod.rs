//! # Async Tasks
//!
//! Each function spawns one tokio task that calls the [`ApiService`] and
//! reports back through the event channel. None of them touch `AppState`;
//! the UI thread applies every result in `App::handle_event`.
//!
//! [`ApiService`]: crate::core::service::ApiService

pub mod market;
pub mod predictions;
pub mod sentiment;

use async_channel::Sender;

use crate::app::events::AppEvent;

/// Deliver `event`, logging when the app has already gone away.
pub(crate) async fn deliver(event_tx: &Sender<AppEvent>, event: AppEvent) {
    let name = event.name();
    if let Err(e) = event_tx.send(event).await {
        tracing::warn!(event = name, error = %e, "Event channel closed, dropping result");
    }
}
