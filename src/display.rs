//! Panel geometry.
//!
//! Where each character cell and decimal point of a panel lives in
//! the controller RAM.
//!
//! HT1622 RAM is addressed in 4-bit units, so a 16-bit glyph write covers
//! 4 consecutive addresses.

/// One past the last RAM address of the controller.
pub const RAM_END: u8 = 0x40;

/// Address step between two 16-bit glyph cells.
pub const CELL_STRIDE: usize = 4;

/// Max number of glyph cells the RAM can hold.
pub const MAX_CELLS: usize = RAM_END as usize / CELL_STRIDE;

/// Trait that defines panel wiring information
pub trait Layout {
    /// RAM address of each cell, indexed by logical position (0 is leftmost)
    const CELLS: &'static [u8];
    /// RAM address of each decimal point cluster
    const POINT_CLUSTERS: &'static [u8];
    /// Decimal points packed into one cluster
    const POINTS_PER_CLUSTER: u8 = 3;

    const WIDTH: usize = Self::CELLS.len();
    const POINTS: usize = Self::POINT_CLUSTERS.len() * Self::POINTS_PER_CLUSTER as usize;

    fn cell_address(pos: usize) -> Option<u8> {
        Self::CELLS.get(pos).copied()
    }

    /// Cluster address and 4-bit value lighting (or clearing) point `index`.
    fn point_address(index: usize, on: bool) -> Option<(u8, u8)> {
        let size = Self::POINTS_PER_CLUSTER as usize;
        if size == 0 || index >= Self::POINTS {
            return None;
        }
        let first = *Self::POINT_CLUSTERS.first()?;

        let address = u8::try_from(index / size)
            .ok()?
            .checked_mul(2)?
            .checked_add(first)?;
        let mut bit = 1u8.checked_shl(((index + size) % size) as u32)?;

        // exchange bits 0 and 2, to get continuous index
        if bit != 2 {
            bit ^= 5;
        }

        Some((address, if on { bit } else { 0 }))
    }

    /// Every cell and cluster the layout can address lies within the RAM.
    fn fits_ram() -> bool {
        let cells = Self::CELLS
            .iter()
            .all(|&addr| addr as usize + CELL_STRIDE <= RAM_END as usize);
        let clusters = Self::POINT_CLUSTERS.iter().all(|&addr| addr < RAM_END);
        // point_address derives cluster addresses from the first one
        let derived = match Self::POINT_CLUSTERS.first() {
            Some(&first) => {
                (first as usize + 2 * (Self::POINT_CLUSTERS.len() - 1)) < RAM_END as usize
            }
            None => true,
        };

        cells && clusters && derived && Self::POINTS_PER_CLUSTER <= 4
    }
}

/// DM8BA10: 10 cells of 16 segments, 9 decimal points.
///
/// Cells are wired right to left.
#[derive(Clone, Copy, Debug, Default)]
pub struct DM8BA10;

impl Layout for DM8BA10 {
    const CELLS: &'static [u8] = &[0x24, 0x20, 0x1C, 0x18, 0x14, 0x10, 0x0C, 0x08, 0x04, 0x00];
    const POINT_CLUSTERS: &'static [u8] = &[0x29, 0x2B, 0x2D];
}
