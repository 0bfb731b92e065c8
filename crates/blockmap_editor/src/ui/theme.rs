//! Colors for the editor overlays

use bevy_egui::egui::{Color32, Stroke};

pub struct EditorTheme;

impl EditorTheme {
    /// Empty menu button background
    pub const BG_BUTTON: Color32 = Color32::from_rgb(67, 68, 75);

    /// Menu button under the pointer
    pub const BG_BUTTON_HOVER: Color32 = Color32::from_rgb(85, 86, 94);

    /// Outline around each menu
    pub const BORDER_MENU: Color32 = Color32::RED;

    /// Outline of the active brush or block
    pub const SELECTED: Color32 = Color32::GREEN;
    pub const SELECTED_THICKNESS: f32 = 4.0;

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 230, 232);

    /// Status line background
    pub const BG_STATUS: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 160);

    pub fn selected_stroke() -> Stroke {
        Stroke::new(Self::SELECTED_THICKNESS, Self::SELECTED)
    }

    /// Convert a block's linear `[r, g, b]` color
    pub fn block_color(color: [f32; 3]) -> Color32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color32::from_rgb(channel(color[0]), channel(color[1]), channel(color[2]))
    }
}
