//! # GUI Rendering Framework
//!
//! Draws the dashboard with egui. Every frame:
//!
//! 1. `App::on_tick` applies finished fetches and fires due timers
//! 2. the state is cloned out of the lock
//! 3. the nav bar and the current screen draw from that snapshot, calling
//!    `App` methods for user actions
//!
//! Nothing here decides what to show; page controllers already wrote text,
//! classes and visibility into their views.

pub mod chart;
pub mod screens;
pub mod theme;
pub mod widgets;

use egui;
use std::time::Duration;

use crate::app::{App, Screen};
use theme::Theme;
use widgets::nav_bar::{render_nav_bar, NavAction};

/// Frame cadence while nothing else asks for a repaint. Short enough for the
/// 300 ms search debounce to fire on time.
const IDLE_REPAINT: Duration = Duration::from_millis(100);

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    // Lock released before layout; actions below take it again
    let state = app.state.read().clone();

    egui::TopBottomPanel::top("nav").show(ctx, |ui| {
        ui.add_space(4.0);
        match render_nav_bar(ui, &state, theme) {
            Some(NavAction::Select(screen)) => app.select_screen(screen),
            Some(NavAction::Refresh) => match state.screen {
                Screen::Dashboard => app.refresh_dashboard(),
                Screen::Trending => app.refresh_trending(),
                _ => {}
            },
            None => {}
        }
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(state.screen.title());
        ui.separator();
        ui.add_space(4.0);

        match state.screen {
            Screen::Dashboard => screens::dashboard::render(ui, &state, app, theme),
            Screen::MarketData => screens::market_data::render(ui, &state, app, theme),
            Screen::Predictions => screens::predictions::render(ui, &state, app, theme),
            Screen::Trending => screens::trending::render(ui, &state, theme),
        }
    });
}

/// egui shell around the orchestrator.
pub struct StockSenseApp {
    app: App,
    theme: Theme,
}

impl StockSenseApp {
    /// Apply the theme and start the initial loads.
    pub fn new(cc: &eframe::CreationContext<'_>, mut app: App) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        app.start();
        Self { app, theme }
    }
}

impl eframe::App for StockSenseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        render(ctx, &mut self.app, &self.theme);
        ctx.request_repaint_after(IDLE_REPAINT);
    }
}
