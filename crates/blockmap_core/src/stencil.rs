//! Pen radii and their footprint stencils

use crate::layer::Cell;

/// Pen size, 1 (single cell) through 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PenRadius(u8);

impl PenRadius {
    pub const MIN: PenRadius = PenRadius(1);
    pub const MAX: PenRadius = PenRadius(7);

    pub fn new(radius: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&radius)
            .then_some(Self(radius))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for PenRadius {
    fn default() -> Self {
        Self::MIN
    }
}

type Stencil = &'static [&'static [u8]];

const PEN_2: Stencil = &[
    &[0, 1, 0],
    &[1, 1, 1],
    &[0, 1, 0],
];

const PEN_3: Stencil = &[
    &[0, 0, 1, 0, 0],
    &[0, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1],
    &[0, 1, 1, 1, 0],
    &[0, 0, 1, 0, 0],
];

const PEN_4: Stencil = &[
    &[0, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1],
    &[0, 1, 1, 1, 0],
];

const PEN_5: Stencil = &[
    &[0, 0, 1, 1, 1, 0, 0],
    &[0, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1],
    &[0, 1, 1, 1, 1, 1, 0],
    &[0, 0, 1, 1, 1, 0, 0],
];

const PEN_6: Stencil = &[
    &[0, 0, 0, 1, 1, 1, 0, 0, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[0, 1, 1, 1, 1, 1, 1, 1, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 0],
    &[0, 0, 0, 1, 1, 1, 0, 0, 0],
];

const PEN_7: Stencil = &[
    &[0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
    &[0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    &[0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    &[0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0],
];

/// Square bitmap for a radius; radius 1 has none
fn stencil(radius: PenRadius) -> Option<Stencil> {
    match radius.get() {
        2 => Some(PEN_2),
        3 => Some(PEN_3),
        4 => Some(PEN_4),
        5 => Some(PEN_5),
        6 => Some(PEN_6),
        7 => Some(PEN_7),
        _ => None,
    }
}

/// Cells covered by a pen of `radius` centered on `center`.
///
/// Offsets are applied in signed space and any cell outside
/// `[0, width) x [0, height)` is dropped.
pub fn footprint(center: Cell, radius: PenRadius, width: u32, height: u32) -> Vec<Cell> {
    let Some(bitmap) = stencil(radius) else {
        return if center.0 < width && center.1 < height {
            vec![center]
        } else {
            Vec::new()
        };
    };

    let half = (bitmap.len() / 2) as i64;
    let mut cells = Vec::new();
    for (row, line) in bitmap.iter().enumerate() {
        for (col, &on) in line.iter().enumerate() {
            if on == 0 {
                continue;
            }
            let x = center.0 as i64 + col as i64 - half;
            let y = center.1 as i64 + row as i64 - half;
            if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
                continue;
            }
            cells.push((x as u32, y as u32));
        }
    }
    cells
}
