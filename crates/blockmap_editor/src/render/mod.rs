//! Map rendering for the editor viewport
//!
//! Editor world space has y pointing down with the grid's top-left corner at
//! the origin. Bevy's world has y up, so every position is mirrored on y when
//! it is handed to a Transform.

use bevy::asset::io::file::FileAssetReader;
use bevy::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Asset folder under the asset root, as in the default `AssetPlugin`
const ASSET_FOLDER: &str = "assets";

use crate::commands::handle_keyboard_shortcuts;
use crate::tools::handle_viewport_input;
use crate::Session;

/// Plugin for map rendering
pub struct MapRenderPlugin;

impl Plugin for MapRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RenderState>()
            .init_resource::<BlockTextureCache>()
            .add_systems(Startup, load_block_textures)
            .add_systems(
                Update,
                (update_camera_from_session, sync_map_rendering)
                    .chain()
                    .after(handle_viewport_input)
                    .after(handle_keyboard_shortcuts),
            );
    }
}

/// Entities spawned for the current frame of the map
#[derive(Resource, Default)]
pub struct RenderState {
    pub block_entities: Vec<Entity>,
    pub grid_entities: Vec<Entity>,
}

/// Block images that were found on disk, by block id
#[derive(Resource, Default)]
pub struct BlockTextureCache {
    pub textures: HashMap<u32, Handle<Image>>,
}

/// Marker component for placed block sprites
#[derive(Component)]
pub struct BlockSprite;

/// Marker component for grid line entities
#[derive(Component)]
pub struct GridLine;

/// Asset folder the `AssetServer` reads from: `BEVY_ASSET_ROOT`, the cargo
/// manifest dir or the executable's dir, joined with `assets`
pub fn asset_folder() -> PathBuf {
    FileAssetReader::get_base_path().join(ASSET_FOLDER)
}

/// Whether `image` names a file inside `asset_folder`
pub fn block_image_exists(asset_folder: &Path, image: &str) -> bool {
    !image.is_empty() && asset_folder.join(image).is_file()
}

fn load_block_textures(
    mut cache: ResMut<BlockTextureCache>,
    session: Res<Session>,
    asset_server: Res<AssetServer>,
) {
    let folder = asset_folder();
    for block in session.registry().iter() {
        if !block_image_exists(&folder, &block.image) {
            warn!(
                "No image found for block '{}' ({} in {:?}), drawing it as a flat color",
                block.name, block.image, folder
            );
            continue;
        }
        cache
            .textures
            .insert(block.id, asset_server.load(block.image.clone()));
    }
}

fn update_camera_from_session(
    session: Res<Session>,
    windows: Query<&Window>,
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera2d>>,
) {
    let Ok(window) = windows.single() else { return };
    let screen = Vec2::new(window.width(), window.height());
    let camera = &session.camera;

    // World point at the middle of the viewport
    let center = camera.offset + screen / (2.0 * camera.scale);

    for (mut transform, mut projection) in camera_query.iter_mut() {
        transform.translation.x = center.x;
        transform.translation.y = -center.y;

        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scale = 1.0 / camera.scale;
        }
    }
}

/// Respawn block sprites and grid lines whenever the session asks for a redraw
fn sync_map_rendering(
    mut commands: Commands,
    mut render_state: ResMut<RenderState>,
    mut session: ResMut<Session>,
    textures: Res<BlockTextureCache>,
    windows: Query<&Window>,
) {
    if !session.take_redraw() {
        return;
    }
    let Ok(window) = windows.single() else { return };

    for entity in render_state.block_entities.drain(..) {
        let _ = commands.get_entity(entity).map(|mut e| e.despawn());
    }
    for entity in render_state.grid_entities.drain(..) {
        let _ = commands.get_entity(entity).map(|mut e| e.despawn());
    }

    let layer = session.layer();
    let camera = &session.camera;
    let cell_size = layer.cell_size() as f32;
    let (view_min, view_max) = camera.visible_world_rect(Vec2::new(window.width(), window.height()));

    for placed in layer.iter_placed() {
        let min = placed.position;
        let max = min + Vec2::splat(cell_size);
        if max.x < view_min.x || max.y < view_min.y || min.x > view_max.x || min.y > view_max.y {
            continue;
        }

        let sprite = match textures.textures.get(&placed.block.id) {
            Some(image) => Sprite {
                image: image.clone(),
                custom_size: Some(Vec2::splat(cell_size)),
                ..default()
            },
            None => {
                let [r, g, b] = placed.block.color;
                Sprite::from_color(Color::srgb(r, g, b), Vec2::splat(cell_size))
            }
        };
        let center = min + Vec2::splat(cell_size / 2.0);
        let entity = commands
            .spawn((
                sprite,
                Transform::from_xyz(center.x, -center.y, 0.0),
                BlockSprite,
            ))
            .id();
        render_state.block_entities.push(entity);
    }

    if !session.settings.show_grid {
        return;
    }

    // One screen pixel wide at any zoom
    let line_thickness = 1.0 / camera.scale;
    let grid_color = Color::WHITE;
    let grid_width = layer.width() as f32 * cell_size;
    let grid_height = layer.height() as f32 * cell_size;

    for x in 0..=layer.width() {
        let world_x = x as f32 * cell_size;
        let entity = commands
            .spawn((
                Sprite {
                    color: grid_color,
                    custom_size: Some(Vec2::new(line_thickness, grid_height)),
                    ..default()
                },
                Transform::from_xyz(world_x, -grid_height / 2.0, 100.0),
                GridLine,
            ))
            .id();
        render_state.grid_entities.push(entity);
    }

    for y in 0..=layer.height() {
        let world_y = y as f32 * cell_size;
        let entity = commands
            .spawn((
                Sprite {
                    color: grid_color,
                    custom_size: Some(Vec2::new(grid_width, line_thickness)),
                    ..default()
                },
                Transform::from_xyz(grid_width / 2.0, -world_y, 100.0),
                GridLine,
            ))
            .id();
        render_state.grid_entities.push(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_image_resolved_in_asset_folder() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("blocks")).unwrap();
        std::fs::write(dir.path().join("blocks/grass.png"), b"png").unwrap();

        assert!(block_image_exists(dir.path(), "blocks/grass.png"));
        assert!(!block_image_exists(dir.path(), "blocks/rock.png"));
        assert!(!block_image_exists(dir.path(), ""));
        // A directory is not an image
        assert!(!block_image_exists(dir.path(), "blocks"));
    }

    #[test]
    fn test_asset_folder_ends_in_assets() {
        assert!(asset_folder().ends_with(ASSET_FOLDER));
    }
}
