//! Brush and block menus

use bevy_egui::egui;
use blockmap_core::{ButtonGrid, EditorSession, MenuValue};

use super::theme::EditorTheme;

/// How one menu button looks
struct ButtonFace {
    label: String,
    hover: String,
    fill: egui::Color32,
    selected: bool,
}

fn button_face(session: &EditorSession, value: Option<MenuValue>) -> ButtonFace {
    match value {
        Some(MenuValue::Brush(mode)) => ButtonFace {
            label: mode.label().to_string(),
            hover: format!("{} brush", mode.label()),
            fill: EditorTheme::BG_BUTTON,
            selected: session.brush.mode() == mode,
        },
        Some(MenuValue::Block(id)) => match session.registry().get(id) {
            Some(block) => ButtonFace {
                label: block.name.chars().take(1).collect(),
                hover: block.name.clone(),
                fill: EditorTheme::block_color(block.color),
                selected: session.brush.selected().map(|b| b.id) == Some(id),
            },
            None => ButtonFace {
                label: "?".to_string(),
                hover: format!("Unknown block {}", id),
                fill: EditorTheme::BG_BUTTON,
                selected: false,
            },
        },
        None => ButtonFace {
            label: String::new(),
            hover: String::new(),
            fill: EditorTheme::BG_BUTTON,
            selected: false,
        },
    }
}

fn to_egui_rect((min, max): (bevy::math::Vec2, bevy::math::Vec2)) -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(min.x, min.y), egui::pos2(max.x, max.y))
}

/// Draw a button grid, returning the value of a clicked button
fn render_button_grid(
    ctx: &egui::Context,
    id: &str,
    grid: &ButtonGrid,
    session: &EditorSession,
) -> Option<MenuValue> {
    if !grid.visible {
        return None;
    }

    let mut clicked = None;
    egui::Area::new(egui::Id::new(id))
        .fixed_pos(egui::pos2(grid.offset.x, grid.offset.y))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let mut bounds = egui::Rect::NOTHING;

            for (index, value) in grid.buttons() {
                let rect = to_egui_rect(grid.button_rect(index));
                bounds = bounds.union(rect);

                let face = button_face(session, value);
                let response = ui.allocate_rect(rect, egui::Sense::click());
                let plain = face.fill == EditorTheme::BG_BUTTON;
                let fill = if plain && value.is_some() && response.hovered() {
                    EditorTheme::BG_BUTTON_HOVER
                } else {
                    face.fill
                };

                let painter = ui.painter();
                painter.rect_filled(rect, 0.0, fill);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &face.label,
                    egui::FontId::proportional((grid.cell_size * 0.3).max(10.0)),
                    EditorTheme::TEXT_PRIMARY,
                );
                if face.selected {
                    painter.rect_stroke(
                        rect,
                        0.0,
                        EditorTheme::selected_stroke(),
                        egui::StrokeKind::Inside,
                    );
                }

                let response = if face.hover.is_empty() {
                    response
                } else {
                    response.on_hover_text(face.hover)
                };
                if response.clicked() {
                    clicked = value;
                }
            }

            ui.painter().rect_stroke(
                bounds,
                0.0,
                egui::Stroke::new(1.0, EditorTheme::BORDER_MENU),
                egui::StrokeKind::Outside,
            );
        });

    clicked
}

/// Render the brush menu
pub fn render_brush_menu(ctx: &egui::Context, session: &EditorSession) -> Option<MenuValue> {
    render_button_grid(ctx, "brush_menu", &session.brush_menu, session)
}

/// Render the block menu
pub fn render_block_menu(ctx: &egui::Context, session: &EditorSession) -> Option<MenuValue> {
    render_button_grid(ctx, "block_menu", &session.block_menu, session)
}
