//! Application-wide theme
//!
//! One flat struct of named colors so widgets never hard-code values.
//! The default palette is the green console scheme the whole UI is
//! styled after.

use ratatui::style::Color;

/// Complete application theme defining all UI colors
#[derive(Debug, Clone)]
pub struct AppTheme {
    // Startup scene
    pub scene_background: Color,
    pub orb_fill: Color,
    pub orb_outline: Color,
    pub marker: Color,
    pub title_text: Color,
    pub subtitle_text: Color,

    // Dashboard
    pub wallpaper: Color,
    pub nav_text: Color,
    pub tile_normal: Color,
    pub tile_selected: Color,
    pub tile_text: Color,
    pub media_button: Color,
    pub media_button_text: Color,

    // Overlay windows
    pub window_background: Color,
    pub window_border: Color,
    pub window_title: Color,
    pub window_text: Color,
    pub accent_text: Color,
    pub editor_background: Color,
    pub editor_text: Color,
    pub button: Color,
    pub button_text: Color,
}

impl AppTheme {
    /// The built-in green console palette
    pub fn console_green() -> Self {
        Self {
            scene_background: Color::Black,
            orb_fill: Color::Rgb(0x00, 0xb4, 0x00),
            orb_outline: Color::Rgb(0x00, 0xff, 0x00),
            marker: Color::Rgb(0x00, 0xff, 0x00),
            title_text: Color::White,
            subtitle_text: Color::Rgb(0x00, 0xff, 0x00),

            wallpaper: Color::Rgb(0xcc, 0xff, 0xcc),
            nav_text: Color::Rgb(0x00, 0x66, 0x00),
            tile_normal: Color::Rgb(0x00, 0xb4, 0x00),
            tile_selected: Color::Rgb(0x00, 0xff, 0x00),
            tile_text: Color::White,
            media_button: Color::Rgb(0x00, 0x66, 0x00),
            media_button_text: Color::White,

            window_background: Color::Black,
            window_border: Color::Rgb(0x00, 0xff, 0x00),
            window_title: Color::White,
            window_text: Color::White,
            accent_text: Color::Rgb(0x00, 0xff, 0x00),
            editor_background: Color::Rgb(0x1e, 0x1e, 0x1e),
            editor_text: Color::White,
            button: Color::Rgb(0x00, 0xb4, 0x00),
            button_text: Color::White,
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::console_green()
    }
}
