//! Map save operations

use bevy::prelude::*;
use bevy::window::WindowCloseRequested;
use blockmap_core::EditorSession;

use crate::{Session, StatusLine};

/// Save the grid to the configured map path, reporting the outcome.
/// Returns whether the save succeeded.
pub fn save_map(session: &EditorSession, status: &mut StatusLine) -> bool {
    let path = &session.settings.save_path;
    match session.save_map(path) {
        Ok(()) => {
            info!("Saved map to {:?}", path);
            status.set(format!("Saved {}", path.display()));
            true
        }
        Err(e) => {
            error!("Failed to save map to {:?}: {}", path, e);
            status.set(format!("Save failed: {}", e));
            false
        }
    }
}

/// Save the grid when the window is asked to close
#[allow(deprecated)]
pub fn save_on_close(
    mut close_events: bevy::ecs::event::EventReader<WindowCloseRequested>,
    session: Res<Session>,
    mut status: ResMut<StatusLine>,
) {
    if close_events.read().count() == 0 {
        return;
    }
    save_map(&session, &mut status);
}
