//! Tile layer: the authoritative grid of placed blocks

use glam::Vec2;
use std::collections::HashMap;
use uuid::Uuid;

use crate::block::{BlockType, EMPTY_BLOCK};

/// A `(column, row)` grid position
pub type Cell = (u32, u32);

/// Name given to the single editable layer
pub const DEFAULT_LAYER_NAME: &str = "Blocks";

/// A block materialized at a cell
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    /// Unique per placement; repainting the same block keeps it
    pub instance: Uuid,
    pub block: BlockType,
    pub cell: Cell,
    /// Top-left corner in world units
    pub position: Vec2,
}

impl PlacedBlock {
    fn new(block: &BlockType, cell: Cell, cell_size: u32) -> Self {
        Self {
            instance: Uuid::new_v4(),
            block: block.clone(),
            cell,
            position: Vec2::new(cell.0 as f32, cell.1 as f32) * cell_size as f32,
        }
    }
}

/// A fixed-size tile layer.
///
/// Keeps two views of the same data: a dense row-major id array (0 = empty)
/// and a sparse map from cell to the placed block. Both are only ever changed
/// through [`Layer::place`] and [`Layer::clear`], so they cannot disagree.
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    width: u32,
    height: u32,
    cell_size: u32,
    ids: Vec<u32>,
    placed: HashMap<Cell, PlacedBlock>,
    dirty: bool,
}

impl Layer {
    /// Create an empty layer of `width x height` cells
    pub fn new(name: String, width: u32, height: u32, cell_size: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            name,
            width,
            height,
            cell_size,
            ids: vec![EMPTY_BLOCK; size],
            placed: HashMap::new(),
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Side length of one cell in world units
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Dense id array, row-major (`y * width + x`)
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.0 < self.width && cell.1 < self.height
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        (cell.1 * self.width + cell.0) as usize
    }

    /// Block id at a cell, `None` when out of bounds
    pub fn get(&self, cell: Cell) -> Option<u32> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.ids.get(self.index(cell)).copied()
    }

    /// The placed block at a cell, if any
    pub fn placed(&self, cell: Cell) -> Option<&PlacedBlock> {
        self.placed.get(&cell)
    }

    pub fn iter_placed(&self) -> impl Iterator<Item = &PlacedBlock> {
        self.placed.values()
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Put a block at a cell.
    ///
    /// Does nothing when `block` is `None`, the cell is outside the layer, or
    /// the cell already holds a block with the same id. Returns whether the
    /// layer changed.
    pub fn place(&mut self, cell: Cell, block: Option<&BlockType>) -> bool {
        let Some(block) = block else {
            return false;
        };
        if !self.in_bounds(cell) {
            return false;
        }

        let index = self.index(cell);
        if self.ids[index] == block.id {
            return false;
        }

        self.clear(cell);
        self.placed
            .insert(cell, PlacedBlock::new(block, cell, self.cell_size));
        self.ids[index] = block.id;
        self.dirty = true;
        true
    }

    /// Remove whatever block sits at a cell. Returns whether the layer changed.
    pub fn clear(&mut self, cell: Cell) -> bool {
        if self.placed.remove(&cell).is_none() {
            return false;
        }
        let index = self.index(cell);
        self.ids[index] = EMPTY_BLOCK;
        self.dirty = true;
        true
    }

    /// Whether the layer changed since the last call, resetting the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
