use clockface::ColorRole;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub primary: Srgba<f64>,
    pub secondary: Srgba<f64>,
    pub hour_hand: Srgba<f64>,
    pub minute_hand: Srgba<f64>,
    pub second_hand: Srgba<f64>,
    pub face: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            primary: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.1, 0.1, 0.1, 1.0),
                None,
            ),
            secondary: Self::lookup_color(
                context,
                "insensitive_fg_color",
                Srgba::new(0.5, 0.5, 0.5, 1.0),
                Some(1.0),
            ),
            hour_hand: Self::lookup_color(
                context,
                "accent_color",
                Srgba::new(0.2, 0.4, 0.9, 1.0),
                Some(1.0),
            ),
            minute_hand: Self::lookup_color(
                context,
                "success_color",
                Srgba::new(0.2, 0.7, 0.3, 1.0),
                Some(1.0),
            ),
            second_hand: Self::lookup_color(
                context,
                "error_color",
                Srgba::new(0.85, 0.2, 0.2, 1.0),
                Some(1.0),
            ),
            face: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.95, 0.95, 0.95, 0.8),
                Some(0.8),
            ),
        }
    }

    pub fn color(&self, role: ColorRole) -> Srgba<f64> {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::Secondary => self.secondary,
            ColorRole::HourHand => self.hour_hand,
            ColorRole::MinuteHand => self.minute_hand,
            ColorRole::SecondHand => self.second_hand,
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.analog-window, .analog-drawing-area {
    background: none;
    background-color: transparent;
}

.analog-readout {
    font-variant-numeric: tabular-nums;
    margin-top: 6px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
