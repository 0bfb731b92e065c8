//! Keyboard shortcut handling

use bevy::prelude::*;
use blockmap_core::PenRadius;

use crate::project::save_map;
use crate::{Session, StatusLine};

const RADIUS_KEYS: [(KeyCode, u8); 7] = [
    (KeyCode::Digit1, 1),
    (KeyCode::Digit2, 2),
    (KeyCode::Digit3, 3),
    (KeyCode::Digit4, 4),
    (KeyCode::Digit5, 5),
    (KeyCode::Digit6, 6),
    (KeyCode::Digit7, 7),
];

/// Handle keyboard shortcuts
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<Session>,
    mut status: ResMut<StatusLine>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    if ctrl {
        // Ctrl+S - Save
        if keyboard.just_pressed(KeyCode::KeyS) {
            save_map(&session, &mut status);
        }
        return;
    }

    // 1-7 - Pen head size
    for (key, radius) in RADIUS_KEYS {
        if !keyboard.just_pressed(key) {
            continue;
        }
        let Some(radius) = PenRadius::new(radius) else {
            continue;
        };
        if let Some(event) = session.set_radius(radius) {
            status.push_event(&event);
        }
    }

    // B - toggle menus
    if keyboard.just_pressed(KeyCode::KeyB) {
        session.toggle_menus();
    }

    // G - toggle grid
    if keyboard.just_pressed(KeyCode::KeyG) {
        session.settings.show_grid = !session.settings.show_grid;
        session.request_redraw();
    }
}
