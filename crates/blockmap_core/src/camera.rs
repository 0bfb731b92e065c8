//! Editor camera: pan and anchor-preserving zoom
//!
//! The camera is reduced from raw input once per tick, before any painting or
//! drawing happens that frame.

use glam::{IVec2, Vec2};

use crate::coords;
use crate::settings::CameraSettings;

/// Held pan keys for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl PanKeys {
    /// Per-axis direction; opposing keys cancel out
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Camera-relevant input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraInput {
    /// Pointer position in screen pixels
    pub pointer: Vec2,
    /// Pan (drag) button held
    pub pan_held: bool,
    pub pan_keys: PanKeys,
    /// Scroll wheel notches this tick, positive zooms in
    pub scroll: f32,
    pub zoom_in_held: bool,
    pub zoom_out_held: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    /// World point at the top-left corner of the viewport
    pub offset: Vec2,
    pub scale: f32,
    /// Last pointer position of an active drag pan
    pub pan_anchor: Option<Vec2>,
    pub settings: CameraSettings,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(CameraSettings::default())
    }
}

impl CameraState {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0_f32.clamp(settings.zoom_min, settings.zoom_max),
            pan_anchor: None,
            settings,
        }
    }

    pub fn screen_to_world(&self, screen: Vec2) -> IVec2 {
        coords::screen_to_world(screen, self.offset, self.scale)
    }

    pub fn world_to_screen(&self, world: Vec2) -> IVec2 {
        coords::world_to_screen(world, self.offset, self.scale)
    }

    /// Apply one tick of input: pans first, then zooms around the pointer.
    /// Returns whether the view changed.
    pub fn update(&mut self, input: &CameraInput) -> bool {
        let mut changed = self.drag_pan(input.pointer, input.pan_held);
        changed |= self.key_pan(input.pan_keys.direction());

        if input.scroll > 0.0 {
            changed |= self.zoom_at(input.pointer, self.settings.mouse_zoom_step);
        } else if input.scroll < 0.0 {
            changed |= self.zoom_at(input.pointer, -self.settings.mouse_zoom_step);
        }

        if input.zoom_in_held && !input.zoom_out_held {
            changed |= self.zoom_at(input.pointer, self.settings.key_zoom_step);
        } else if input.zoom_out_held && !input.zoom_in_held {
            changed |= self.zoom_at(input.pointer, -self.settings.key_zoom_step);
        }

        changed
    }

    /// Change the scale by `delta`, keeping the world point under `pointer`
    /// fixed on screen.
    pub fn zoom_at(&mut self, pointer: Vec2, delta: f32) -> bool {
        let before = coords::screen_to_world_exact(pointer, self.offset, self.scale);

        let scale = (self.scale + delta).clamp(self.settings.zoom_min, self.settings.zoom_max);
        if scale == self.scale {
            return false;
        }
        self.scale = scale;

        let after = coords::screen_to_world_exact(pointer, self.offset, self.scale);
        self.offset += before - after;
        true
    }

    /// Drag panning. The first held tick only records the anchor.
    pub fn drag_pan(&mut self, pointer: Vec2, held: bool) -> bool {
        if !held {
            self.pan_anchor = None;
            return false;
        }

        let Some(anchor) = self.pan_anchor.replace(pointer) else {
            return false;
        };
        let delta = anchor - pointer;
        if delta == Vec2::ZERO {
            return false;
        }
        self.offset += delta / self.scale;
        true
    }

    /// Continuous keyboard panning along `direction`
    pub fn key_pan(&mut self, direction: Vec2) -> bool {
        if direction == Vec2::ZERO {
            return false;
        }
        self.offset += direction * self.settings.key_pan_speed / self.scale;
        true
    }

    /// World-space rectangle `(min, max)` covered by a viewport of `screen_size` pixels
    pub fn visible_world_rect(&self, screen_size: Vec2) -> (Vec2, Vec2) {
        let min = coords::screen_to_world_exact(Vec2::ZERO, self.offset, self.scale);
        let max = coords::screen_to_world_exact(screen_size, self.offset, self.scale);
        (min, max)
    }
}
