//! Core data structures for blockmap
//!
//! This crate holds everything about the editor that does not need a window:
//! - `BlockRegistry` - The catalog of paintable block types
//! - `Layer` - The fixed-size grid of placed blocks
//! - `CameraState` - Pan and zoom, plus world <-> screen conversion
//! - `BrushEngine` - Pen, eraser, bucket fill and copy tools
//! - `ButtonGrid` - Brush and block menu layout
//! - `EditorSession` - All of the above for one editing session
//! - `map_file` - CSV save/load of the grid

mod block;
mod brush;
mod camera;
pub mod coords;
mod fill;
mod layer;
pub mod map_file;
mod menu;
mod session;
mod settings;
mod stencil;

pub use block::{BlockRegistry, BlockType, RegistryError, EMPTY_BLOCK};
pub use brush::{BrushEngine, BrushEvent, BrushMode, StrokeResult};
pub use camera::{CameraInput, CameraState, PanKeys};
pub use fill::flood_fill;
pub use layer::{Cell, Layer, PlacedBlock, DEFAULT_LAYER_NAME};
pub use map_file::MapFileError;
pub use menu::{ButtonGrid, MenuError, MenuValue};
pub use session::{EditorSession, FrameInput, SessionError};
pub use settings::{CameraSettings, EditorSettings, SettingsError};
pub use stencil::{footprint, PenRadius};
