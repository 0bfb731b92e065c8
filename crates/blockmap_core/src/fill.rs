//! Bucket fill over a tile id grid

use std::collections::{HashSet, VecDeque};

use crate::layer::Cell;

/// Collect the 4-connected region of cells sharing the seed's id.
///
/// `ids` is a row-major `width x height` grid. Empty cells (id 0) form
/// regions like any other id. A seed outside the grid yields an empty set.
pub fn flood_fill(ids: &[u32], width: u32, height: u32, seed: Cell) -> HashSet<Cell> {
    let mut region = HashSet::new();
    if seed.0 >= width || seed.1 >= height {
        return region;
    }

    let id_at = |(x, y): Cell| ids.get((y * width + x) as usize).copied();
    let Some(target) = id_at(seed) else {
        return region;
    };

    let mut frontier = VecDeque::from([seed]);
    region.insert(seed);

    while let Some((x, y)) = frontier.pop_front() {
        let neighbours = [
            x.checked_sub(1).map(|nx| (nx, y)),
            (x + 1 < width).then_some((x + 1, y)),
            y.checked_sub(1).map(|ny| (x, ny)),
            (y + 1 < height).then_some((x, y + 1)),
        ];

        for cell in neighbours.into_iter().flatten() {
            if id_at(cell) == Some(target) && region.insert(cell) {
                frontier.push_back(cell);
            }
        }
    }

    region
}
