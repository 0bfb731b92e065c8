//! Editor tools - painting, pan/zoom
//!
//! Collects one frame of viewport input and runs the session tick with it.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use blockmap_core::{CameraInput, FrameInput, PanKeys};

use crate::{Session, StatusLine};

/// Plugin for editor tools and viewport input
pub struct EditorToolsPlugin;

impl Plugin for EditorToolsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportInputState>()
            .add_systems(Update, handle_viewport_input);
    }
}

/// State for viewport input handling
#[derive(Resource, Default)]
pub struct ViewportInputState {
    /// Last cursor position inside the window, in logical pixels
    pub last_pointer: Vec2,
}

/// Build the frame's input and advance the session
#[allow(deprecated)]
pub fn handle_viewport_input(
    mut contexts: EguiContexts,
    mut session: ResMut<Session>,
    mut status: ResMut<StatusLine>,
    mut input_state: ResMut<ViewportInputState>,
    mut scroll_events: bevy::ecs::event::EventReader<MouseWheel>,
    windows: Query<&Window>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };
    let Ok(window) = windows.single() else { return };

    let cursor = window.cursor_position();
    if let Some(position) = cursor {
        input_state.last_pointer = position;
    }
    let in_window = cursor.is_some();

    let scroll: f32 = scroll_events.read().map(|event| event.y).sum();

    // Shift (and Ctrl, for shortcuts) suspend keyboard camera control
    let modifier = keyboard.any_pressed([
        KeyCode::ShiftLeft,
        KeyCode::ShiftRight,
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
    ]);
    let held = |keys: [KeyCode; 2]| !modifier && keyboard.any_pressed(keys);

    let camera = CameraInput {
        pointer: input_state.last_pointer,
        pan_held: in_window && mouse_buttons.any_pressed([MouseButton::Right, MouseButton::Middle]),
        pan_keys: PanKeys {
            left: held([KeyCode::KeyA, KeyCode::ArrowLeft]),
            right: held([KeyCode::KeyD, KeyCode::ArrowRight]),
            up: held([KeyCode::KeyW, KeyCode::ArrowUp]),
            down: held([KeyCode::KeyS, KeyCode::ArrowDown]),
        },
        scroll: if in_window { scroll } else { 0.0 },
        zoom_in_held: held([KeyCode::KeyQ, KeyCode::BracketLeft]),
        zoom_out_held: held([KeyCode::KeyE, KeyCode::BracketRight]),
    };

    let input = FrameInput {
        camera,
        primary_held: in_window && mouse_buttons.pressed(MouseButton::Left),
        pointer_over_ui: ctx.is_using_pointer(),
    };

    if let Some(event) = session.tick(&input) {
        status.push_event(&event);
    }
}
