use super::*;

impl Board {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    /// Number of cells (`size * size`)
    #[inline]
    pub fn len(&self) -> usize { self.cells.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.size as usize) + (col as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let size = self.size as usize;
        ((idx / size) as u32, (idx % size) as u32)
    }

    // === Bounds checking ===
    /// Signed so callers can pass unclipped `anchor + delta` positions
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as i64) < self.size as i64 && col >= 0 && (col as i64) < self.size as i64
    }
}
