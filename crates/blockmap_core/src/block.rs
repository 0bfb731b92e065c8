//! Block types and the block registry

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tile id stored in empty cells. Never assigned to a real block.
pub const EMPTY_BLOCK: u32 = 0;

/// A paintable block kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockType {
    pub id: u32,
    pub name: String,
    /// Image asset path, relative to the assets folder
    pub image: String,
    /// Flat color used when the image is unavailable
    #[serde(default = "default_block_color")]
    pub color: [f32; 3],
}

fn default_block_color() -> [f32; 3] {
    [1.0, 0.0, 1.0]
}

impl BlockType {
    pub fn new(id: u32, name: impl Into<String>, image: impl Into<String>, color: [f32; 3]) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Id 0 marks empty cells
    ReservedId,
    DuplicateId(u32),
    DuplicateName(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::ReservedId => write!(f, "Block id 0 is reserved for empty cells"),
            RegistryError::DuplicateId(id) => write!(f, "Block id {} is already registered", id),
            RegistryError::DuplicateName(name) => {
                write!(f, "Block name '{}' is already registered", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Catalog of every block that can be painted this session.
///
/// Blocks keep their registration order, which is also the order they appear
/// in the block menu.
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    blocks: Vec<BlockType>,
    // id -> position in `blocks`
    index: HashMap<u32, usize>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock catalog: grass, rock, sand and water
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        let stock = [
            BlockType::new(1, "Grass", "blocks/grass_001.png", [0.30, 0.65, 0.25]),
            BlockType::new(2, "Rock", "blocks/rock_002.png", [0.45, 0.45, 0.48]),
            BlockType::new(3, "Sand", "blocks/sand_003.png", [0.86, 0.78, 0.52]),
            BlockType::new(4, "Water", "blocks/water_004.png", [0.20, 0.42, 0.80]),
        ];
        for block in stock {
            // Stock ids and names are distinct
            let _ = registry.register(block);
        }
        registry
    }

    /// Add a block to the catalog
    pub fn register(&mut self, block: BlockType) -> Result<(), RegistryError> {
        if block.id == EMPTY_BLOCK {
            return Err(RegistryError::ReservedId);
        }
        if self.index.contains_key(&block.id) {
            return Err(RegistryError::DuplicateId(block.id));
        }
        if self.blocks.iter().any(|b| b.name == block.name) {
            return Err(RegistryError::DuplicateName(block.name));
        }
        self.index.insert(block.id, self.blocks.len());
        self.blocks.push(block);
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&BlockType> {
        self.index.get(&id).map(|&i| &self.blocks[i])
    }

    pub fn get_by_name(&self, name: &str) -> Option<&BlockType> {
        self.blocks.iter().find(|b| b.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockType> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = BlockRegistry::builtin();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get(1).map(|b| b.name.as_str()), Some("Grass"));
        assert_eq!(registry.get(4).map(|b| b.name.as_str()), Some("Water"));
        assert!(registry.get(EMPTY_BLOCK).is_none());
        assert_eq!(registry.get_by_name("Sand").map(|b| b.id), Some(3));
    }

    #[test]
    fn test_register_rejects_reserved_and_duplicates() {
        let mut registry = BlockRegistry::builtin();

        let empty = BlockType::new(0, "Void", "", [0.0; 3]);
        assert_eq!(registry.register(empty), Err(RegistryError::ReservedId));

        let same_id = BlockType::new(2, "Granite", "", [0.0; 3]);
        assert_eq!(registry.register(same_id), Err(RegistryError::DuplicateId(2)));

        let same_name = BlockType::new(9, "Rock", "", [0.0; 3]);
        assert_eq!(
            registry.register(same_name),
            Err(RegistryError::DuplicateName("Rock".to_string()))
        );

        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = BlockRegistry::new();
        registry
            .register(BlockType::new(7, "Lava", "", [1.0, 0.3, 0.0]))
            .unwrap();
        registry
            .register(BlockType::new(5, "Ice", "", [0.8, 0.9, 1.0]))
            .unwrap();

        let ids: Vec<u32> = registry.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![7, 5]);
    }
}
