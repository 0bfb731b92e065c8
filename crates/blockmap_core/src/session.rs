//! One editing session: the grid, camera, brush and menus together

use std::path::Path;

use glam::Vec2;

use crate::block::BlockRegistry;
use crate::brush::{BrushEngine, BrushEvent};
use crate::camera::{CameraInput, CameraState};
use crate::coords;
use crate::layer::{Cell, Layer, DEFAULT_LAYER_NAME};
use crate::map_file::{self, MapFileError};
use crate::menu::{ButtonGrid, MenuError, MenuValue};
use crate::settings::{EditorSettings, SettingsError};
use crate::stencil::PenRadius;

/// Everything the session reads from the input devices in one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub camera: CameraInput,
    /// Paint button held
    pub primary_held: bool,
    /// Pointer is captured by UI outside the button menus
    pub pointer_over_ui: bool,
}

/// Why a session could not be started
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Settings(SettingsError),
    Menu(MenuError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Settings(e) => write!(f, "Invalid settings: {}", e),
            SessionError::Menu(e) => write!(f, "Menu setup failed: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<SettingsError> for SessionError {
    fn from(e: SettingsError) -> Self {
        SessionError::Settings(e)
    }
}

impl From<MenuError> for SessionError {
    fn from(e: MenuError) -> Self {
        SessionError::Menu(e)
    }
}

/// Owns all state of an editing session.
///
/// Call [`EditorSession::tick`] once per frame: the camera is updated first,
/// then the pointer is resolved to a cell with the new view and handed to the
/// brush.
#[derive(Debug, Clone)]
pub struct EditorSession {
    pub settings: EditorSettings,
    registry: BlockRegistry,
    layer: Layer,
    pub camera: CameraState,
    pub brush: BrushEngine,
    pub brush_menu: ButtonGrid,
    pub block_menu: ButtonGrid,
    redraw: bool,
}

impl EditorSession {
    /// Start a session on an empty grid sized by `settings`
    pub fn new(settings: EditorSettings, registry: BlockRegistry) -> Result<Self, SessionError> {
        settings.validate()?;
        let (width, height) = settings.world_size;
        let layer = Layer::new(
            DEFAULT_LAYER_NAME.to_string(),
            width,
            height,
            settings.cell_size,
        );
        let block_menu = ButtonGrid::block_menu(&registry)?;

        Ok(Self {
            camera: CameraState::new(settings.camera),
            brush: BrushEngine::new(),
            brush_menu: ButtonGrid::brush_menu()?,
            block_menu,
            layer,
            registry,
            settings,
            redraw: true,
        })
    }

    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Advance one frame. Returns the brush event raised this tick, if any.
    pub fn tick(&mut self, input: &FrameInput) -> Option<BrushEvent> {
        if self.camera.update(&input.camera) {
            self.redraw = true;
        }

        let pointer = input.camera.pointer;
        let target = if input.pointer_over_ui || self.is_over_menu(pointer) {
            None
        } else {
            self.cell_at(pointer)
        };

        let stroke = self.brush.paint(&mut self.layer, target, input.primary_held);
        if self.layer.take_dirty() || stroke.event.is_some() {
            self.redraw = true;
        }
        stroke.event
    }

    /// Grid cell under a screen position
    pub fn cell_at(&self, screen: Vec2) -> Option<Cell> {
        coords::screen_to_cell(
            screen,
            &self.camera,
            self.layer.cell_size(),
            self.layer.width(),
            self.layer.height(),
        )
    }

    /// Whether a screen position lies over a visible menu
    pub fn is_over_menu(&self, screen: Vec2) -> bool {
        self.brush_menu.contains(screen) || self.block_menu.contains(screen)
    }

    /// React to a menu button press
    pub fn apply_menu_value(&mut self, value: MenuValue) -> Option<BrushEvent> {
        let event = match value {
            MenuValue::Brush(mode) => Some(self.brush.select_mode(mode)),
            MenuValue::Block(id) => self
                .registry
                .get(id)
                .map(|block| self.brush.select_block(block)),
        };
        if event.is_some() {
            self.redraw = true;
        }
        event
    }

    pub fn set_radius(&mut self, radius: PenRadius) -> Option<BrushEvent> {
        self.brush.set_radius(radius)
    }

    pub fn toggle_menus(&mut self) {
        self.brush_menu.toggle_visible();
        self.block_menu.toggle_visible();
        self.redraw = true;
    }

    /// Force a redraw on the next frame
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Whether anything visible changed since the last call, resetting the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Replace the grid with one read from `path`.
    ///
    /// The current grid is only swapped out once the whole file has loaded.
    pub fn load_map(&mut self, path: &Path) -> Result<(), MapFileError> {
        let layer = map_file::load_layer(
            path,
            &self.registry,
            self.layer.width(),
            self.layer.height(),
            self.layer.cell_size(),
        )?;
        self.layer = layer;
        self.redraw = true;
        Ok(())
    }

    pub fn save_map(&self, path: &Path) -> Result<(), MapFileError> {
        map_file::save_layer(path, &self.layer)
    }
}
