//! Checked-in-debug, unchecked-in-release slice access for the step hot loop.
//!
//! The neighbour count reads up to nine cells per output cell. Every index it
//! produces is derived from `0..size` and clipped at the board edges, so the
//! bounds checks only ever guard against logic defects. Debug builds keep them
//! (a bad index panics with the usual message), release builds drop them.
//!
//! Usage:
//! ```rust
//! use life_engine::fast;
//!
//! let row = vec![false, true, true];
//! // Read: fast!(slice, [index])
//! assert!(*fast!(row, [1]));
//!
//! let mut out = vec![0u8; 3];
//! // Write: fast!(slice, [index] = value)
//! fast!(out, [2] = 7);
//! assert_eq!(out[2], 7);
//! ```

/// Slice access that is bounds-checked only when `debug_assertions` is on.
///
/// Callers must guarantee the index is in range; release builds use
/// `get_unchecked`/`get_unchecked_mut`.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::domain::cell::Cell;

    #[test]
    fn reads_cell_from_row() {
        let row = vec![Cell::EMPTY, Cell::born(), Cell::EMPTY];
        assert!(fast!(row, [1]).occupied);
        assert!(!fast!(row, [2]).occupied);
    }

    #[test]
    fn writes_cell_into_row() {
        let mut row = vec![Cell::EMPTY; 4];
        fast!(row, [3] = Cell::born());
        assert!(row[3].occupied);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn out_of_range_row_read_panics_in_debug() {
        let row = vec![Cell::EMPTY; 3];
        let _ = fast!(row, [3]);
    }
}
