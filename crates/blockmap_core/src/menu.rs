//! On-screen button menus for picking brushes and blocks

use glam::Vec2;

use crate::block::BlockRegistry;
use crate::brush::BrushMode;

/// What a menu button selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuValue {
    Brush(BrushMode),
    /// Block id from the registry
    Block(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    TooManyValues { capacity: usize, given: usize },
}

impl std::fmt::Display for MenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuError::TooManyValues { capacity, given } => write!(
                f,
                "Menu has {} buttons but {} values were given",
                capacity, given
            ),
        }
    }
}

impl std::error::Error for MenuError {}

/// A `columns x rows` grid of square buttons anchored at a screen offset.
///
/// Buttons are numbered row by row. A button without a value is drawn but
/// does nothing when clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGrid {
    pub columns: u32,
    pub rows: u32,
    /// Button side length in screen pixels
    pub cell_size: f32,
    /// Top-left corner in screen pixels
    pub offset: Vec2,
    pub visible: bool,
    slots: Vec<Option<MenuValue>>,
}

impl ButtonGrid {
    pub fn new(columns: u32, rows: u32, cell_size: f32, offset: Vec2) -> Self {
        Self {
            columns,
            rows,
            cell_size,
            offset,
            visible: true,
            slots: vec![None; (columns * rows) as usize],
        }
    }

    /// Brush menu: a single column of Pen, Erase, Fill and Copy
    pub fn brush_menu() -> Result<Self, MenuError> {
        let mut menu = Self::new(1, 4, 50.0, Vec2::ZERO);
        menu.assign_values([
            MenuValue::Brush(BrushMode::Pen),
            MenuValue::Brush(BrushMode::Erase),
            MenuValue::Brush(BrushMode::Fill),
            MenuValue::Brush(BrushMode::Copy),
        ])?;
        Ok(menu)
    }

    /// Block menu: one row listing the registry in order
    pub fn block_menu(registry: &BlockRegistry) -> Result<Self, MenuError> {
        let mut menu = Self::new(4, 1, 25.0, Vec2::new(700.0, 0.0));
        menu.assign_values(registry.iter().map(|block| MenuValue::Block(block.id)))?;
        Ok(menu)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Fill buttons in order; leftover buttons stay empty
    pub fn assign_values(
        &mut self,
        values: impl IntoIterator<Item = MenuValue>,
    ) -> Result<(), MenuError> {
        let values: Vec<MenuValue> = values.into_iter().collect();
        if values.len() > self.capacity() {
            return Err(MenuError::TooManyValues {
                capacity: self.capacity(),
                given: values.len(),
            });
        }

        self.slots.fill(None);
        for (slot, value) in self.slots.iter_mut().zip(values) {
            *slot = Some(value);
        }
        Ok(())
    }

    /// Value of the button at `index`, row by row
    pub fn value(&self, index: usize) -> Option<MenuValue> {
        self.slots.get(index).copied().flatten()
    }

    /// `(index, value)` for every button
    pub fn buttons(&self) -> impl Iterator<Item = (usize, Option<MenuValue>)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    /// Screen rectangle `(min, max)` of the button at `index`
    pub fn button_rect(&self, index: usize) -> (Vec2, Vec2) {
        let columns = self.columns.max(1) as usize;
        let col = (index % columns) as f32;
        let row = (index / columns) as f32;
        let min = self.offset + Vec2::new(col, row) * self.cell_size;
        (min, min + Vec2::splat(self.cell_size))
    }

    /// Whether a screen point lies over this menu while it is shown
    pub fn contains(&self, point: Vec2) -> bool {
        if !self.visible {
            return false;
        }
        let local = point - self.offset;
        let size = Vec2::new(self.columns as f32, self.rows as f32) * self.cell_size;
        local.x >= 0.0 && local.y >= 0.0 && local.x < size.x && local.y < size.y
    }

    /// Index of the button under a screen point
    pub fn button_at(&self, point: Vec2) -> Option<usize> {
        if !self.contains(point) {
            return None;
        }
        let local = (point - self.offset) / self.cell_size;
        Some(local.y as usize * self.columns as usize + local.x as usize)
    }

    /// Value of the button under a screen point
    pub fn value_at(&self, point: Vec2) -> Option<MenuValue> {
        self.button_at(point).and_then(|index| self.value(index))
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockType;

    #[test]
    fn test_brush_menu_layout() {
        let menu = ButtonGrid::brush_menu().unwrap();
        assert_eq!(menu.capacity(), 4);
        assert_eq!(menu.value(2), Some(MenuValue::Brush(BrushMode::Fill)));

        assert_eq!(menu.button_rect(3), (Vec2::new(0.0, 150.0), Vec2::new(50.0, 200.0)));
        assert_eq!(
            menu.value_at(Vec2::new(10.0, 60.0)),
            Some(MenuValue::Brush(BrushMode::Erase))
        );
        assert_eq!(menu.value_at(Vec2::new(10.0, 210.0)), None);
    }

    #[test]
    fn test_block_menu_follows_registry() {
        let menu = ButtonGrid::block_menu(&BlockRegistry::builtin()).unwrap();
        assert_eq!(menu.button_at(Vec2::new(760.0, 10.0)), Some(2));
        assert_eq!(menu.value(2), Some(MenuValue::Block(3)));
        assert!(!menu.contains(Vec2::new(699.0, 10.0)));
        assert!(!menu.contains(Vec2::new(710.0, 30.0)));
    }

    #[test]
    fn test_too_many_values() {
        let mut menu = ButtonGrid::new(2, 1, 10.0, Vec2::ZERO);
        let values = [MenuValue::Block(1), MenuValue::Block(2), MenuValue::Block(3)];
        assert_eq!(
            menu.assign_values(values),
            Err(MenuError::TooManyValues {
                capacity: 2,
                given: 3
            })
        );

        let mut registry = BlockRegistry::builtin();
        registry
            .register(BlockType::new(5, "Lava", "", [1.0, 0.3, 0.0]))
            .unwrap();
        assert!(ButtonGrid::block_menu(&registry).is_err());
    }

    #[test]
    fn test_fewer_values_leave_empty_buttons() {
        let mut menu = ButtonGrid::new(2, 2, 10.0, Vec2::ZERO);
        menu.assign_values([MenuValue::Block(4)]).unwrap();

        assert_eq!(menu.value(0), Some(MenuValue::Block(4)));
        assert_eq!(menu.value(3), None);
        assert_eq!(menu.value_at(Vec2::new(15.0, 15.0)), None);
        assert_eq!(menu.button_at(Vec2::new(15.0, 15.0)), Some(3));
    }

    #[test]
    fn test_hidden_menu_ignores_pointer() {
        let mut menu = ButtonGrid::brush_menu().unwrap();
        menu.toggle_visible();
        assert!(!menu.contains(Vec2::new(10.0, 10.0)));
        assert_eq!(menu.button_at(Vec2::new(10.0, 10.0)), None);

        menu.toggle_visible();
        assert!(menu.contains(Vec2::new(10.0, 10.0)));
    }
}
