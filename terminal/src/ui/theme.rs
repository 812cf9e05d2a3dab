//! # GUI Theme
//!
//! Dark dashboard theme for egui. Page controllers describe styling with
//! class names (`price-positive`, `badge bg-danger`, ...); [`Theme::class_color`]
//! turns those into colors.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Dashboard color palette
#[derive(Debug, Clone)]
pub struct Palette {
    /// Near-black background
    pub background: Color32,
    /// Card and panel fill
    pub surface: Color32,
    /// Primary text
    pub text: Color32,
    /// Brand accent (NIFTY series, links, selection)
    pub primary: Color32,
    /// Borders
    pub border: Color32,
    /// Gains, bullish
    pub green: Color32,
    /// Losses, bearish
    pub red: Color32,
    /// Hold, neutral warnings
    pub yellow: Color32,
    /// Informational
    pub blue: Color32,
    /// Secondary text
    pub gray: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color32::from_rgb(13, 17, 23),   // #0D1117
            surface: Color32::from_rgb(22, 27, 34),      // #161B22
            text: Color32::from_rgb(230, 237, 243),      // #E6EDF3
            primary: Color32::from_rgb(13, 110, 253),    // #0D6EFD
            border: Color32::from_rgb(48, 54, 61),       // #30363D
            green: Color32::from_rgb(25, 135, 84),       // #198754
            red: Color32::from_rgb(220, 53, 69),         // #DC3545
            yellow: Color32::from_rgb(255, 193, 7),      // #FFC107
            blue: Color32::from_rgb(13, 202, 240),       // #0DCAF0
            gray: Color32::from_rgb(139, 148, 158),      // #8B949E
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: Palette,
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = Palette::default();
        Theme {
            normal: colors.text,
            selected: colors.primary,
            dim: colors.gray,
            success: colors.green,
            error: colors.red,
            warning: colors.yellow,
            info: colors.blue,
            colors,
        }
    }
}

impl Theme {
    /// Color for a space-separated class list.
    ///
    /// The first class that carries a color wins; `None` means "draw with
    /// the default text color".
    pub fn class_color(&self, classes: &str) -> Option<Color32> {
        classes.split_whitespace().find_map(|class| self.single_class(class))
    }

    fn single_class(&self, class: &str) -> Option<Color32> {
        match class {
            "price-positive" | "sentiment-positive" | "text-success" | "bg-success"
            | "border-start-success" | "success" => Some(self.success),
            "price-negative" | "sentiment-negative" | "text-danger" | "bg-danger"
            | "border-start-danger" => Some(self.error),
            "text-warning" | "bg-warning" | "alert-warning" | "border-start-warning" => {
                Some(self.warning)
            }
            "text-info" | "bg-info" => Some(self.info),
            "primary" | "text-primary" | "bg-primary" => Some(self.selected),
            "price-neutral" | "sentiment-neutral" | "text-muted" | "muted" | "bg-secondary" => {
                Some(self.dim)
            }
            _ => None,
        }
    }

    /// Dark egui visuals from the palette.
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = colors.background;
        visuals.window_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.primary);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.primary);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(13, 110, 253, 76);
        visuals.selection.stroke = Stroke::new(1.0, colors.primary);
        visuals.hyperlink_color = colors.primary;

        visuals
    }

    /// Apply the theme to an egui context.
    ///
    /// Uses `style_mut_of` for both egui themes so a system light/dark switch
    /// keeps the dashboard look.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(10.0, 4.0);
            });
        }
        tracing::debug!("Applied dashboard theme");
    }
}
