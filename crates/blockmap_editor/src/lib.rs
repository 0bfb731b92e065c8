//! blockmap_editor - Bevy front end for the blockmap tile editor
//!
//! Wraps a [`blockmap_core::EditorSession`] in a window:
//! - Camera pan (right/middle drag, WASD/arrows) and zoom (wheel, Q/E)
//! - Pen, eraser, bucket fill and copy brushes
//! - Brush and block menus drawn with egui
//! - CSV map save on Ctrl+S and on close
//!
//! # Usage
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use blockmap_core::{BlockRegistry, EditorSession, EditorSettings};
//! use blockmap_editor::EditorPlugin;
//!
//! fn main() {
//!     let session = EditorSession::new(EditorSettings::default(), BlockRegistry::builtin())
//!         .expect("default settings are valid");
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(EditorPlugin::new(session))
//!         .run();
//! }
//! ```

pub mod commands;
pub mod preferences;
pub mod project;
pub mod render;
pub mod tools;
pub mod ui;

pub use blockmap_core;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use blockmap_core::{BrushEvent, EditorSession};

use commands::handle_keyboard_shortcuts;
use project::save_on_close;
use render::MapRenderPlugin;
use tools::EditorToolsPlugin;
use ui::EditorUiPlugin;

/// Plugin that turns an [`EditorSession`] into an interactive editor
pub struct EditorPlugin {
    session: EditorSession,
}

impl EditorPlugin {
    pub fn new(session: EditorSession) -> Self {
        Self { session }
    }
}

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        let settings = &self.session.settings;
        bevy::log::info!(
            "EditorPlugin: {}x{} cells of {}px, saving to {:?}",
            settings.world_size.0,
            settings.world_size.1,
            settings.cell_size,
            settings.save_path
        );

        app.add_plugins(EguiPlugin::default())
            .add_plugins(EditorUiPlugin)
            .add_plugins(MapRenderPlugin)
            .add_plugins(EditorToolsPlugin)
            .insert_resource(Session(self.session.clone()))
            .init_resource::<StatusLine>()
            .add_systems(
                Startup,
                (
                    setup_editor_camera,
                    apply_window_size,
                    preferences::write_default_settings,
                ),
            )
            .add_systems(Update, (handle_keyboard_shortcuts, save_on_close));
    }
}

/// The live editing session
#[derive(Resource, Deref, DerefMut)]
pub struct Session(pub EditorSession);

/// Last thing that happened, shown at the bottom of the window
#[derive(Resource, Default)]
pub struct StatusLine {
    pub message: String,
}

impl StatusLine {
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Log a brush event and show it
    pub fn push_event(&mut self, event: &BrushEvent) {
        let message = event.to_string();
        bevy::log::info!("{}", message);
        self.set(message);
    }
}

/// Size the primary window from the session settings
fn apply_window_size(session: Res<Session>, mut windows: Query<&mut Window>) {
    let (width, height) = session.settings.screen_size;
    for mut window in windows.iter_mut() {
        window.resolution.set(width as f32, height as f32);
    }
}

/// Spawns the editor camera if one doesn't exist
fn setup_editor_camera(mut commands: Commands, camera_query: Query<&Camera2d>) {
    if camera_query.is_empty() {
        commands.spawn(Camera2d);
    }
}
