use crate::config::Config;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use silk::color::{Rgb, to_rgb_f64};

pub struct ThemeColors {
    pub accent: Srgba<f64>,
    pub glyph: Srgba<f64>,
}

impl ThemeColors {
    /// The accent comes from the config; glyphs follow the theme.
    pub fn from_context(context: &gtk::StyleContext, accent: Rgb) -> Self {
        Self {
            accent: opaque(accent),
            glyph: Self::lookup_color(
                context,
                "accent_fg_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                Some(1.0),
            ),
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

pub fn opaque(color: Rgb) -> Srgba<f64> {
    let (r, g, b) = to_rgb_f64(color);
    Srgba::new(r, g, b, 1.0)
}

fn accent_css(config: &Config) -> String {
    let c = config.accent;
    format!(
        "@define-color spider_accent #{:02x}{:02x}{:02x};",
        c.red, c.green, c.blue
    )
}

const STYLESHEET: &str = "
window.spider-window {
    background-color: black;
}
.spider-page, .spider-stack {
    background: none;
}
.welcome {
    font-size: 22px;
    color: alpha(white, 0.7);
    text-shadow: 0 0 10px alpha(@spider_accent, 0.5);
}
.tagline {
    font-size: 18px;
    font-weight: bold;
    color: @spider_accent;
    text-shadow: 0 0 15px alpha(@spider_accent, 0.7);
}
.glow-button {
    color: white;
    background: none;
    -gtk-icon-shadow: 0 0 10px alpha(@spider_accent, 0.5);
}
.fab {
    min-width: 56px;
    min-height: 56px;
    border-radius: 28px;
    background: @spider_accent;
    color: white;
    font-size: 24px;
    box-shadow: 0 0 15px 2px alpha(@spider_accent, 0.8);
}
.bottom-bar {
    background-color: rgba(27, 27, 58, 0.9);
    padding: 6px 20px;
    box-shadow: 0 0 10px 5px alpha(black, 0.5);
}
.page-title {
    font-size: 20px;
    font-weight: bold;
    color: white;
}
.page-body {
    color: alpha(white, 0.8);
}
.scrim {
    background-color: alpha(black, 0.5);
}
.login-card {
    background-color: white;
    color: black;
    border-radius: 16px;
    padding: 20px;
}
.login-card entry {
    border-radius: 12px;
    min-height: 44px;
}
.login-title {
    font-size: 18px;
    font-weight: bold;
}
.login-error {
    color: red;
    font-size: 14px;
}
.login-button {
    background: @spider_accent;
    color: white;
    font-weight: bold;
    border-radius: 12px;
    padding: 16px 0;
}
";

pub fn load_css(config: &Config) -> gtk::CssProvider {
    let provider = gtk::CssProvider::new();
    apply_css(&provider, config);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
    provider
}

pub fn apply_css(provider: &gtk::CssProvider, config: &Config) {
    provider.load_from_data(&format!("{}\n{}", accent_css(config), STYLESHEET));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HexColor;

    #[test]
    fn test_accent_css() {
        let mut config = Config::default();
        assert_eq!(
            accent_css(&config),
            "@define-color spider_accent #ff4081;"
        );
        config.accent = HexColor(silk::color::hex(0x00A0FF));
        assert!(accent_css(&config).contains("#00a0ff"));
    }
}
