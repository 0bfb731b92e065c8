//! Standalone blockmap editor binary
//!
//! Run with: blockmap_editor

use bevy::prelude::*;
use bevy::window::WindowResolution;
use blockmap_core::{BlockRegistry, EditorSession};
use blockmap_editor::preferences;
use blockmap_editor::EditorPlugin;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Blockmap Editor".to_string(),
            // Cursor positions and menu layout are in unscaled pixels
            resolution: WindowResolution::new(800, 600).with_scale_factor_override(1.0),
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    // Logging is up once DefaultPlugins are added
    let settings = preferences::load_settings();
    let mut session = match EditorSession::new(settings, BlockRegistry::builtin()) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to start editor: {}", e);
            return Err(e.into());
        }
    };

    // A map that exists but cannot be loaded is fatal
    let map_path = session.settings.save_path.clone();
    if map_path.exists() {
        if let Err(e) = session.load_map(&map_path) {
            error!("Failed to load map {:?}: {}", map_path, e);
            return Err(e.into());
        }
        info!("Loaded map from {:?}", map_path);
    }

    app.add_plugins(EditorPlugin::new(session)).run();
    Ok(())
}
