//! # Screen Modules
//!
//! Each screen module draws one page of the dashboard:
//!
//! - **[`dashboard`]**: index cards, sentiment, trend chart, top stocks
//! - **[`market_data`]**: stock search, details, timeframe chart
//! - **[`predictions`]**: model prediction, indicators, accuracy, history
//! - **[`trending`]**: tweet sentiment overview and feed
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
//!     // - Read the page's ViewModel from the state snapshot
//!     // - Call app.* methods for user actions
//! }
//! ```
//!
//! ## State Access Pattern
//!
//! Screens receive a **cloned state snapshot**. User actions call `App`
//! methods, which take the lock themselves, so no lock is held while egui
//! lays out the frame.

pub mod dashboard;
pub mod market_data;
pub mod predictions;
pub mod trending;
