//! Map save/load as CSV
//!
//! The first row is a header of column numbers (`,0,1,...`). Each following
//! row starts with its row number, then the block id of every column in that
//! row. Empty cells are written as `0`.

use std::io;
use std::path::Path;

use crate::block::{BlockRegistry, EMPTY_BLOCK};
use crate::layer::{Layer, DEFAULT_LAYER_NAME};

#[derive(Debug)]
pub enum MapFileError {
    IoError(String),
    ParseError(String),
    /// A cell that is not a whole, non-negative block id
    InvalidValue { x: u32, y: u32, value: String },
    /// File dimensions differ from the grid being loaded, as (width, height)
    ShapeMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
    UnknownBlock { id: u32, x: u32, y: u32 },
}

impl std::fmt::Display for MapFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapFileError::IoError(e) => write!(f, "IO error: {}", e),
            MapFileError::ParseError(e) => write!(f, "Parse error: {}", e),
            MapFileError::InvalidValue { x, y, value } => {
                write!(f, "Invalid block id '{}' at ({}, {})", value, x, y)
            }
            MapFileError::ShapeMismatch { expected, found } => write!(
                f,
                "Map is {}x{} but the world is {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            MapFileError::UnknownBlock { id, x, y } => {
                write!(f, "Unknown block id {} at ({}, {})", id, x, y)
            }
        }
    }
}

impl std::error::Error for MapFileError {}

/// Write a layer to a CSV file, creating parent directories as needed
pub fn save_layer(path: &Path, layer: &Layer) -> Result<(), MapFileError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MapFileError::IoError(e.to_string()))?;
    }
    let file = std::fs::File::create(path).map_err(|e| MapFileError::IoError(e.to_string()))?;
    write_layer(file, layer)
}

pub fn write_layer<W: io::Write>(writer: W, layer: &Layer) -> Result<(), MapFileError> {
    let mut csv = csv::Writer::from_writer(writer);
    let to_io = |e: csv::Error| MapFileError::IoError(e.to_string());

    let mut header = vec![String::new()];
    header.extend((0..layer.width()).map(|x| x.to_string()));
    csv.write_record(&header).map_err(to_io)?;

    for (y, row) in layer.ids().chunks(layer.width().max(1) as usize).enumerate() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(y.to_string());
        record.extend(row.iter().map(|id| id.to_string()));
        csv.write_record(&record).map_err(to_io)?;
    }

    csv.flush().map_err(|e| MapFileError::IoError(e.to_string()))
}

/// Load a `width x height` layer from a CSV file.
///
/// Fails if the file's dimensions differ from the requested ones or if it
/// names a block missing from `registry`.
pub fn load_layer(
    path: &Path,
    registry: &BlockRegistry,
    width: u32,
    height: u32,
    cell_size: u32,
) -> Result<Layer, MapFileError> {
    let file = std::fs::File::open(path).map_err(|e| MapFileError::IoError(e.to_string()))?;
    read_layer(file, registry, width, height, cell_size)
}

pub fn read_layer<R: io::Read>(
    reader: R,
    registry: &BlockRegistry,
    width: u32,
    height: u32,
    cell_size: u32,
) -> Result<Layer, MapFileError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let to_parse = |e: csv::Error| MapFileError::ParseError(e.to_string());

    let header_width = csv.headers().map_err(to_parse)?.len().saturating_sub(1) as u32;
    let records = csv
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_parse)?;

    let expected = (width, height);
    let found = (header_width, records.len() as u32);
    if found != expected {
        return Err(MapFileError::ShapeMismatch { expected, found });
    }
    if let Some(ragged) = records.iter().find(|r| r.len() != width as usize + 1) {
        return Err(MapFileError::ShapeMismatch {
            expected,
            found: (ragged.len().saturating_sub(1) as u32, found.1),
        });
    }

    let mut layer = Layer::new(DEFAULT_LAYER_NAME.to_string(), width, height, cell_size);
    for (y, record) in records.iter().enumerate() {
        let y = y as u32;
        // First field is the row number
        for (x, field) in record.iter().skip(1).enumerate() {
            let x = x as u32;
            let id = parse_id(field).ok_or_else(|| MapFileError::InvalidValue {
                x,
                y,
                value: field.to_string(),
            })?;
            if id == EMPTY_BLOCK {
                continue;
            }
            let block = registry
                .get(id)
                .ok_or(MapFileError::UnknownBlock { id, x, y })?;
            layer.place((x, y), Some(block));
        }
    }

    Ok(layer)
}

/// Block ids may be spelled as whole floats (`3.0`)
fn parse_id(field: &str) -> Option<u32> {
    let field = field.trim();
    if let Ok(id) = field.parse::<u32>() {
        return Some(id);
    }
    let value = field.parse::<f64>().ok()?;
    (value.is_finite() && value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value))
        .then_some(value as u32)
}
