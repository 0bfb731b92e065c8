//! Editor UI components using bevy_egui
//!
//! Draws the brush and block menus at the positions their `ButtonGrid`s
//! describe, so the session's hit testing and what is on screen agree.

mod theme;
mod toolbar;

pub use theme::EditorTheme;
pub use toolbar::{render_block_menu, render_brush_menu};

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use blockmap_core::EditorSession;

use crate::{Session, StatusLine};

/// Main UI plugin
pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, render_ui);
    }
}

fn render_ui(
    mut contexts: EguiContexts,
    mut session: ResMut<Session>,
    mut status: ResMut<StatusLine>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    let clicked = [
        render_brush_menu(ctx, &session),
        render_block_menu(ctx, &session),
    ];
    for value in clicked.into_iter().flatten() {
        if let Some(event) = session.apply_menu_value(value) {
            status.push_event(&event);
        }
    }

    render_status_line(ctx, &session, &status);
}

/// One line along the bottom edge: brush, block, pen size and last message
fn render_status_line(ctx: &egui::Context, session: &EditorSession, status: &StatusLine) {
    let brush = &session.brush;
    let block = brush.selected().map_or("None", |b| b.name.as_str());

    let mut text = format!(
        "Brush: {}  |  Block: {}  |  Pen: {}  |  Zoom: {:.0}%",
        brush.mode().label(),
        block,
        brush.radius().get(),
        session.camera.scale * 100.0
    );
    if !status.message.is_empty() {
        text.push_str("  |  ");
        text.push_str(&status.message);
    }

    egui::Area::new(egui::Id::new("status_line"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(0.0, 0.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(EditorTheme::BG_STATUS)
                .inner_margin(4.0)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(text).color(EditorTheme::TEXT_PRIMARY));
                });
        });
}
