//! Brush tool state machine
//!
//! The brush decides which cells of a [`Layer`] a stroke touches and how:
//! - `Pen` paints the selected block over the pen footprint (or clears it when
//!   nothing is selected)
//! - `Erase` clears the pen footprint
//! - `Fill` paints the connected region of equal ids under the pointer
//! - `Copy` samples the block under the pointer once per press, then returns
//!   to `Pen` when the button is released

use crate::block::{BlockType, EMPTY_BLOCK};
use crate::fill::flood_fill;
use crate::layer::{Cell, Layer};
use crate::stencil::{footprint, PenRadius};

/// Active brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushMode {
    #[default]
    None,
    Pen,
    Erase,
    Fill,
    Copy,
}

impl BrushMode {
    pub fn label(&self) -> &'static str {
        match self {
            BrushMode::None => "None",
            BrushMode::Pen => "Pen",
            BrushMode::Erase => "Erase",
            BrushMode::Fill => "Fill",
            BrushMode::Copy => "Copy",
        }
    }

    /// Whether the pen radius applies to this brush
    pub fn uses_radius(&self) -> bool {
        matches!(self, BrushMode::Pen | BrushMode::Erase)
    }
}

/// Something the brush did that is worth telling the user about
#[derive(Debug, Clone, PartialEq)]
pub enum BrushEvent {
    ModeSelected(BrushMode),
    ModeCancelled(BrushMode),
    BlockSelected(String),
    BlockCancelled(String),
    RadiusChanged(u8),
    /// Copy sampled a cell; `None` means it was empty
    Copied(Option<String>),
    /// Copy finished and handed back to the pen
    ReturnedToPen,
}

impl std::fmt::Display for BrushEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrushEvent::ModeSelected(mode) => write!(f, "Brush: {}", mode.label()),
            BrushEvent::ModeCancelled(mode) => write!(f, "Cancel '{}'", mode.label()),
            BrushEvent::BlockSelected(name) => write!(f, "Block selected: {}", name),
            BrushEvent::BlockCancelled(name) => write!(f, "Canceled block '{}'", name),
            BrushEvent::RadiusChanged(radius) => write!(f, "Pen head size: {}", radius),
            BrushEvent::Copied(Some(name)) => write!(f, "Copied '{}'", name),
            BrushEvent::Copied(None) => write!(f, "Copied 'None'"),
            BrushEvent::ReturnedToPen => write!(f, "Change brush: 'Pen'"),
        }
    }
}

/// Outcome of one brush tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeResult {
    /// The layer was modified
    pub changed: bool,
    pub event: Option<BrushEvent>,
}

#[derive(Debug, Clone)]
pub struct BrushEngine {
    mode: BrushMode,
    selected: Option<BlockType>,
    radius: PenRadius,
    /// Copy tool: the next press samples a block
    armed: bool,
}

impl Default for BrushEngine {
    fn default() -> Self {
        Self {
            mode: BrushMode::None,
            selected: None,
            radius: PenRadius::MIN,
            armed: true,
        }
    }
}

impl BrushEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> BrushMode {
        self.mode
    }

    pub fn selected(&self) -> Option<&BlockType> {
        self.selected.as_ref()
    }

    pub fn radius(&self) -> PenRadius {
        self.radius
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Menu-driven brush selection. Picking the active brush again turns it
    /// off; picking `Copy` arms the copy tool.
    pub fn select_mode(&mut self, mode: BrushMode) -> BrushEvent {
        let event = if self.mode == mode {
            self.mode = BrushMode::None;
            BrushEvent::ModeCancelled(mode)
        } else {
            self.mode = mode;
            BrushEvent::ModeSelected(mode)
        };

        self.armed = true;
        event
    }

    /// Menu-driven block selection. Picking the selected block again clears
    /// the selection.
    pub fn select_block(&mut self, block: &BlockType) -> BrushEvent {
        match &self.selected {
            Some(current) if current.id == block.id => {
                self.selected = None;
                BrushEvent::BlockCancelled(block.name.clone())
            }
            _ => {
                self.selected = Some(block.clone());
                BrushEvent::BlockSelected(block.name.clone())
            }
        }
    }

    /// Change the pen radius. Ignored unless the pen or eraser is active.
    pub fn set_radius(&mut self, radius: PenRadius) -> Option<BrushEvent> {
        if !self.mode.uses_radius() {
            return None;
        }
        self.radius = radius;
        Some(BrushEvent::RadiusChanged(radius.get()))
    }

    /// Run one tick of the brush.
    ///
    /// `target` is the cell under the pointer, already resolved and bounds
    /// checked; `None` skips the whole action for this tick.
    pub fn paint(&mut self, layer: &mut Layer, target: Option<Cell>, primary_held: bool) -> StrokeResult {
        if !primary_held {
            return self.release();
        }
        let Some(cell) = target else {
            return StrokeResult::default();
        };

        match self.mode {
            BrushMode::None => StrokeResult::default(),
            BrushMode::Pen => {
                let cells = footprint(cell, self.radius, layer.width(), layer.height());
                self.paint_cells(layer, cells)
            }
            BrushMode::Erase => {
                let cells = footprint(cell, self.radius, layer.width(), layer.height());
                let mut changed = false;
                for cell in cells {
                    changed |= layer.clear(cell);
                }
                StrokeResult {
                    changed,
                    event: None,
                }
            }
            BrushMode::Fill => {
                let region = flood_fill(layer.ids(), layer.width(), layer.height(), cell);
                self.paint_cells(layer, region)
            }
            BrushMode::Copy => {
                if !self.armed {
                    return StrokeResult::default();
                }
                self.armed = false;
                StrokeResult {
                    changed: false,
                    event: Some(self.sample(layer, cell)),
                }
            }
        }
    }

    fn paint_cells(&self, layer: &mut Layer, cells: impl IntoIterator<Item = Cell>) -> StrokeResult {
        let mut changed = false;
        for cell in cells {
            changed |= match &self.selected {
                Some(block) => layer.place(cell, Some(block)),
                None => layer.clear(cell),
            };
        }
        StrokeResult {
            changed,
            event: None,
        }
    }

    fn sample(&mut self, layer: &Layer, cell: Cell) -> BrushEvent {
        if layer.get(cell).unwrap_or(EMPTY_BLOCK) == EMPTY_BLOCK {
            self.selected = None;
            return BrushEvent::Copied(None);
        }
        self.selected = layer.placed(cell).map(|placed| placed.block.clone());
        BrushEvent::Copied(self.selected.as_ref().map(|b| b.name.clone()))
    }

    fn release(&mut self) -> StrokeResult {
        if self.mode == BrushMode::Copy && !self.armed {
            self.mode = BrushMode::Pen;
            self.armed = true;
            return StrokeResult {
                changed: false,
                event: Some(BrushEvent::ReturnedToPen),
            };
        }
        StrokeResult::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sand() -> BlockType {
        BlockType::new(3, "Sand", "", [0.9, 0.8, 0.5])
    }

    fn rock() -> BlockType {
        BlockType::new(2, "Rock", "", [0.5, 0.5, 0.5])
    }

    fn layer() -> Layer {
        Layer::new("Background".to_string(), 8, 8, 50)
    }

    fn engine(mode: BrushMode, block: Option<BlockType>) -> BrushEngine {
        let mut engine = BrushEngine::new();
        engine.select_mode(mode);
        if let Some(block) = block {
            engine.select_block(&block);
        }
        engine
    }

    #[test]
    fn test_pen_radius_one_paints_single_cell() {
        let mut layer = layer();
        let mut brush = engine(BrushMode::Pen, Some(sand()));

        let result = brush.paint(&mut layer, Some((4, 4)), true);
        assert!(result.changed);
        assert_eq!(layer.placed_count(), 1);
        assert_eq!(layer.get((4, 4)), Some(3));
    }

    #[test]
    fn test_pen_without_selection_clears() {
        let mut layer = layer();
        layer.place((2, 2), Some(&rock()));
        let mut brush = engine(BrushMode::Pen, None);

        brush.paint(&mut layer, Some((2, 2)), true);
        assert_eq!(layer.get((2, 2)), Some(EMPTY_BLOCK));
    }

    #[test]
    fn test_pen_footprint_clipped_at_edge() {
        let mut layer = layer();
        let mut brush = engine(BrushMode::Pen, Some(sand()));
        brush.set_radius(PenRadius::new(2).unwrap());

        brush.paint(&mut layer, Some((0, 0)), true);
        assert_eq!(layer.placed_count(), 3);
        assert_eq!(layer.get((1, 0)), Some(3));
        assert_eq!(layer.get((0, 1)), Some(3));
    }

    #[test]
    fn test_erase_ignores_selection() {
        let mut layer = layer();
        for x in 0..3 {
            layer.place((x, 1), Some(&rock()));
        }
        let mut brush = engine(BrushMode::Erase, Some(sand()));
        brush.set_radius(PenRadius::new(2).unwrap());

        assert!(brush.paint(&mut layer, Some((1, 1)), true).changed);
        assert_eq!(layer.placed_count(), 0);
    }

    #[test]
    fn test_no_target_skips_tick() {
        let mut layer = layer();
        let mut brush = engine(BrushMode::Fill, Some(sand()));
        layer.take_dirty();

        assert_eq!(brush.paint(&mut layer, None, true), StrokeResult::default());
        assert!(!layer.is_dirty());
    }

    #[test]
    fn test_fill_paints_region() {
        let mut layer = layer();
        for y in 0..8 {
            layer.place((3, y), Some(&rock()));
        }
        let mut brush = engine(BrushMode::Fill, Some(sand()));

        brush.paint(&mut layer, Some((0, 0)), true);
        assert_eq!(layer.placed_count(), 8 + 24);
        assert_eq!(layer.get((2, 7)), Some(3));
        assert_eq!(layer.get((4, 0)), Some(EMPTY_BLOCK));
        assert_eq!(layer.get((3, 5)), Some(2));
    }

    #[test]
    fn test_fill_without_selection_clears_region() {
        let mut layer = layer();
        layer.place((0, 0), Some(&rock()));
        layer.place((1, 0), Some(&rock()));
        layer.place((2, 0), Some(&sand()));
        let mut brush = engine(BrushMode::Fill, None);

        brush.paint(&mut layer, Some((0, 0)), true);
        assert_eq!(layer.placed_count(), 1);
        assert_eq!(layer.get((2, 0)), Some(3));
    }

    #[test]
    fn test_none_mode_is_noop() {
        let mut layer = layer();
        let mut brush = BrushEngine::new();
        brush.select_block(&sand());

        assert!(!brush.paint(&mut layer, Some((1, 1)), true).changed);
        assert_eq!(layer.placed_count(), 0);
    }

    #[test]
    fn test_copy_two_phase() {
        let mut layer = layer();
        layer.place((5, 5), Some(&sand()));
        let mut brush = engine(BrushMode::Copy, None);
        assert!(brush.is_armed());

        // Press samples once
        let result = brush.paint(&mut layer, Some((5, 5)), true);
        assert_eq!(result.event, Some(BrushEvent::Copied(Some("Sand".to_string()))));
        assert_eq!(brush.selected().map(|b| b.id), Some(3));
        assert!(!brush.is_armed());

        // Holding over another cell does not resample
        let result = brush.paint(&mut layer, Some((0, 0)), true);
        assert_eq!(result.event, None);
        assert_eq!(brush.selected().map(|b| b.id), Some(3));

        // Release hands back to the pen
        let result = brush.paint(&mut layer, Some((0, 0)), false);
        assert_eq!(result.event, Some(BrushEvent::ReturnedToPen));
        assert_eq!(brush.mode(), BrushMode::Pen);
        assert!(brush.is_armed());
    }

    #[test]
    fn test_copy_empty_cell_clears_selection() {
        let mut layer = layer();
        let mut brush = engine(BrushMode::Copy, Some(rock()));

        let result = brush.paint(&mut layer, Some((1, 1)), true);
        assert_eq!(result.event, Some(BrushEvent::Copied(None)));
        assert!(brush.selected().is_none());
    }

    #[test]
    fn test_copy_release_before_press_keeps_mode() {
        let mut layer = layer();
        let mut brush = engine(BrushMode::Copy, None);

        assert_eq!(brush.paint(&mut layer, None, false).event, None);
        assert_eq!(brush.mode(), BrushMode::Copy);

        // Pressing outside the grid does not disarm
        brush.paint(&mut layer, None, true);
        assert!(brush.is_armed());
    }

    #[test]
    fn test_select_mode_toggles() {
        let mut brush = BrushEngine::new();
        assert_eq!(brush.select_mode(BrushMode::Pen), BrushEvent::ModeSelected(BrushMode::Pen));
        assert_eq!(brush.select_mode(BrushMode::Pen), BrushEvent::ModeCancelled(BrushMode::Pen));
        assert_eq!(brush.mode(), BrushMode::None);
    }

    #[test]
    fn test_select_copy_rearms() {
        let mut layer = layer();
        let mut brush = engine(BrushMode::Copy, None);
        brush.paint(&mut layer, Some((0, 0)), true);
        assert!(!brush.is_armed());

        // Switching tools mid-gesture and back re-arms the copy tool
        brush.select_mode(BrushMode::Fill);
        brush.select_mode(BrushMode::Copy);
        assert!(brush.is_armed());
    }

    #[test]
    fn test_select_block_toggles() {
        let mut brush = BrushEngine::new();
        brush.select_block(&sand());
        assert_eq!(brush.selected().map(|b| b.id), Some(3));

        brush.select_block(&rock());
        assert_eq!(brush.selected().map(|b| b.id), Some(2));

        assert_eq!(
            brush.select_block(&rock()),
            BrushEvent::BlockCancelled("Rock".to_string())
        );
        assert!(brush.selected().is_none());
    }

    #[test]
    fn test_radius_only_for_pen_and_erase() {
        let radius = PenRadius::new(4).unwrap();

        let mut brush = engine(BrushMode::Fill, None);
        assert_eq!(brush.set_radius(radius), None);
        assert_eq!(brush.radius(), PenRadius::MIN);

        let mut brush = engine(BrushMode::Erase, None);
        assert_eq!(brush.set_radius(radius), Some(BrushEvent::RadiusChanged(4)));
        assert_eq!(brush.radius(), radius);
    }

    #[test]
    fn test_event_messages() {
        assert_eq!(BrushEvent::RadiusChanged(3).to_string(), "Pen head size: 3");
        assert_eq!(
            BrushEvent::Copied(Some("Sand".to_string())).to_string(),
            "Copied 'Sand'"
        );
        assert_eq!(BrushEvent::Copied(None).to_string(), "Copied 'None'");
    }
}
