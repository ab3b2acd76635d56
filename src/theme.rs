//! Color palettes and their resolution from config.
//!
//! Two palettes ship built in (dark and light). A `custom` scheme starts
//! from the dark palette and lays per-role hex overrides on top.

use ratatui::style::Color;

use crate::config::{ThemeColorsConfig, ThemeConfig};

// ── Runtime theme colors ─────────────────────────────────────────────────────

/// Every color the renderer needs, resolved to concrete values.
///
/// Obtained from `resolve_theme()`; widgets never look at the config.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Listing pane
    pub listing_fg: Color,
    pub listing_dir_fg: Color,
    pub listing_selected_bg: Color,
    pub listing_selected_fg: Color,
    pub path_fg: Color,

    // Preview pane
    pub preview_fg: Color,
    pub preview_dir_fg: Color,
    pub preview_file_title_fg: Color,
    pub preview_dir_title_fg: Color,

    // Controls pane
    pub controls_key_fg: Color,
    pub controls_desc_fg: Color,

    // Borders & chrome
    pub border_fg: Color,

    // Fixed across schemes, not exposed in [theme.custom]
    pub error_fg: Color,
    pub dim_fg: Color,
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// The default palette, Catppuccin Mocha.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        // Listing pane, dark base
        listing_fg: Color::Rgb(205, 214, 244), // #cdd6f4 (text)
        listing_dir_fg: Color::Rgb(137, 180, 250), // #89b4fa (blue)
        listing_selected_bg: Color::Rgb(69, 71, 90), // #45475a (surface1)
        listing_selected_fg: Color::Rgb(205, 214, 244), // #cdd6f4
        path_fg: Color::Rgb(137, 220, 235),    // #89dceb (sky)

        // Preview
        preview_fg: Color::Rgb(205, 214, 244),
        preview_dir_fg: Color::Rgb(137, 180, 250), // #89b4fa (blue)
        preview_file_title_fg: Color::Rgb(249, 226, 175), // #f9e2af (yellow)
        preview_dir_title_fg: Color::Rgb(243, 139, 168), // #f38ba8 (red)

        // Controls
        controls_key_fg: Color::Rgb(203, 166, 247), // #cba6f7 (mauve)
        controls_desc_fg: Color::Rgb(205, 214, 244), // #cdd6f4

        // Borders
        border_fg: Color::Rgb(88, 91, 112), // #585b70 (surface2)

        // Semantic
        error_fg: Color::Rgb(243, 139, 168), // #f38ba8 (red)
        dim_fg: Color::Rgb(108, 112, 134),   // #6c7086 (overlay0)
    }
}

/// Catppuccin Latte, for light terminals.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        // Listing pane, light base
        listing_fg: Color::Rgb(76, 79, 105), // #4c4f69 (text)
        listing_dir_fg: Color::Rgb(30, 102, 245), // #1e66f5 (blue)
        listing_selected_bg: Color::Rgb(204, 208, 218), // #ccd0da (surface1)
        listing_selected_fg: Color::Rgb(76, 79, 105),
        path_fg: Color::Rgb(4, 165, 229), // #04a5e5 (sky)

        // Preview
        preview_fg: Color::Rgb(76, 79, 105),
        preview_dir_fg: Color::Rgb(30, 102, 245),
        preview_file_title_fg: Color::Rgb(223, 142, 29), // #df8e1d (yellow)
        preview_dir_title_fg: Color::Rgb(210, 15, 57),   // #d20f39 (red)

        // Controls
        controls_key_fg: Color::Rgb(136, 57, 239), // #8839ef (mauve)
        controls_desc_fg: Color::Rgb(76, 79, 105),

        // Borders
        border_fg: Color::Rgb(172, 176, 190), // #acb0be (surface2)

        // Semantic
        error_fg: Color::Rgb(210, 15, 57), // #d20f39 (red)
        dim_fg: Color::Rgb(156, 160, 176), // #9ca0b0 (overlay0)
    }
}

// ── Color parsing ────────────────────────────────────────────────────────────

/// Parse `"#rrggbb"` (the leading `#` is optional) into an RGB color.
/// Malformed input yields `None`.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(byte(0)?, byte(2)?, byte(4)?))
}

/// Overwrite `slot` when `hex` parses; malformed or missing values leave
/// it alone.
fn override_color(slot: &mut Color, hex: Option<&str>) {
    if let Some(color) = hex.and_then(parse_hex_color) {
        *slot = color;
    }
}

// ── Theme resolution ─────────────────────────────────────────────────────────

/// Build the runtime palette from the `[theme]` config section.
///
/// `"custom"` starts from the dark palette and applies the `[theme.custom]`
/// hex values over it. Unknown scheme names resolve to dark.
pub fn resolve_theme(config: &ThemeConfig) -> ThemeColors {
    match config.scheme.as_deref() {
        Some("light") => light_theme(),
        Some("custom") => {
            let mut theme = dark_theme();
            if let Some(custom) = &config.custom {
                apply_custom_colors(&mut theme, custom);
            }
            theme
        }
        _ => dark_theme(),
    }
}

fn apply_custom_colors(theme: &mut ThemeColors, custom: &ThemeColorsConfig) {
    override_color(&mut theme.listing_fg, custom.listing_fg.as_deref());
    override_color(&mut theme.listing_dir_fg, custom.listing_dir_fg.as_deref());
    override_color(
        &mut theme.listing_selected_bg,
        custom.listing_selected_bg.as_deref(),
    );
    override_color(
        &mut theme.listing_selected_fg,
        custom.listing_selected_fg.as_deref(),
    );
    override_color(&mut theme.path_fg, custom.path_fg.as_deref());
    override_color(&mut theme.preview_fg, custom.preview_fg.as_deref());
    override_color(&mut theme.preview_dir_fg, custom.preview_dir_fg.as_deref());
    override_color(&mut theme.border_fg, custom.border_fg.as_deref());
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parses_rgb() {
        assert_eq!(parse_hex_color("#1e1e2e"), Some(Color::Rgb(30, 30, 46)));
        assert_eq!(parse_hex_color("#04a5e5"), Some(Color::Rgb(4, 165, 229)));
        assert_eq!(parse_hex_color("ffffff"), Some(Color::Rgb(255, 255, 255))); // bare form
    }

    #[test]
    fn test_hex_rejects_malformed() {
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#fff"), None); // shorthand not supported
        assert_eq!(parse_hex_color("#cdd6f4aa"), None); // no alpha channel
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#"), None);
        assert_eq!(parse_hex_color("€aaa"), None); // multi-byte input must not slice mid-char
    }

    #[test]
    fn test_resolve_dark() {
        let config = ThemeConfig {
            scheme: Some("dark".to_string()),
            custom: None,
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.listing_dir_fg, Color::Rgb(137, 180, 250));
        assert_eq!(theme.path_fg, Color::Rgb(137, 220, 235));
    }

    #[test]
    fn test_resolve_light() {
        let config = ThemeConfig {
            scheme: Some("light".to_string()),
            custom: None,
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.listing_dir_fg, Color::Rgb(30, 102, 245));
        assert_eq!(theme.path_fg, Color::Rgb(4, 165, 229));
    }

    #[test]
    fn test_missing_scheme_is_dark() {
        let theme = resolve_theme(&ThemeConfig::default());
        assert_eq!(theme.listing_dir_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_unknown_scheme_is_dark() {
        let config = ThemeConfig {
            scheme: Some("neon".to_string()),
            custom: None,
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.listing_dir_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_custom_lays_over_dark() {
        let config = ThemeConfig {
            scheme: Some("custom".to_string()),
            custom: Some(ThemeColorsConfig {
                listing_fg: Some("#c0caf5".to_string()),
                path_fg: Some("#1a1b26".to_string()),
                ..Default::default()
            }),
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.listing_fg, Color::Rgb(192, 202, 245));
        assert_eq!(theme.path_fg, Color::Rgb(26, 27, 38));
        // roles without an override keep the dark value
        assert_eq!(theme.listing_dir_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_bad_hex_keeps_base_color() {
        let config = ThemeConfig {
            scheme: Some("custom".to_string()),
            custom: Some(ThemeColorsConfig {
                listing_fg: Some("#zzzzzz".to_string()),
                ..Default::default()
            }),
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.listing_fg, Color::Rgb(205, 214, 244));
    }

    #[test]
    fn test_palettes_differ() {
        let dark = dark_theme();
        let light = light_theme();
        assert_ne!(dark.listing_fg, light.listing_fg);
        assert_ne!(dark.listing_selected_bg, light.listing_selected_bg);
        assert_ne!(dark.listing_dir_fg, light.listing_dir_fg);
        assert_ne!(dark.error_fg, light.error_fg);
    }
}
