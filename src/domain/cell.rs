//! Cell - the unit of board state
//!
//! `occupied` is the only field the rule looks at. `age` is derived data for
//! renderers (colour-by-age) and stays 0 unless age tracking is switched on.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub occupied: bool,
    /// Generations survived continuously (0 on the generation of birth)
    pub age: u32,
}

impl Cell {
    pub const EMPTY: Cell = Cell { occupied: false, age: 0 };

    /// A freshly placed or freshly born counter
    #[inline]
    pub const fn born() -> Self {
        Cell { occupied: true, age: 0 }
    }

    #[inline]
    pub fn age_band(&self) -> AgeBand {
        AgeBand::from_age(self.age)
    }
}

/// Age buckets used for colour-by-age rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AgeBand {
    Newborn = 0,
    Young = 1,
    Adult = 2,
    Elder = 3,
    Ancient = 4,
}

impl AgeBand {
    pub fn from_age(age: u32) -> Self {
        match age {
            0 => AgeBand::Newborn,
            1 => AgeBand::Young,
            2..=3 => AgeBand::Adult,
            4..=7 => AgeBand::Elder,
            _ => AgeBand::Ancient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_empty() {
        assert_eq!(Cell::default(), Cell::EMPTY);
        assert!(Cell::born().occupied);
        assert_eq!(Cell::born().age, 0);
    }

    #[test]
    fn age_bands_follow_power_of_two_edges() {
        assert_eq!(AgeBand::from_age(0), AgeBand::Newborn);
        assert_eq!(AgeBand::from_age(1), AgeBand::Young);
        assert_eq!(AgeBand::from_age(3), AgeBand::Adult);
        assert_eq!(AgeBand::from_age(4), AgeBand::Elder);
        assert_eq!(AgeBand::from_age(7), AgeBand::Elder);
        assert_eq!(AgeBand::from_age(8), AgeBand::Ancient);
        assert_eq!(AgeBand::from_age(u32::MAX), AgeBand::Ancient);
    }
}
