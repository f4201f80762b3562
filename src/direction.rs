//! Movement between neighboring tiles in offset coordinates.
//!
//! Grids are laid out with odd columns pushed down by half a tile, so which
//! rows count as a tile's diagonal neighbors depends on the parity of its
//! column. The deltas are looked up in a table keyed by direction and parity.

use derive_more::{BitOr, BitOrAssign, Display};
use strum::EnumIter;

/// A position in the grid's index space. Coordinates are signed so that a
/// step off the edge can be represented before it is wrapped back in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display)]
#[display(fmt = "({}, {})", column, row)]
pub struct GridPosition {
    pub column: i32,
    pub row: i32,
}

impl GridPosition {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The neighbor in `direction`, with no wrapping
    pub fn step(self, direction: HexDirection) -> Self {
        let (dc, dr) = direction.delta(self.column);
        Self::new(self.column + dc, self.row + dr)
    }

    /// Bring this position back inside a `columns` × `rows` grid. A negative
    /// coordinate wraps to the last index on its axis, anything else is
    /// reduced modulo the axis size.
    pub fn wrap(self, columns: usize, rows: usize) -> Self {
        Self::new(wrap_axis(self.column, columns), wrap_axis(self.row, rows))
    }

    /// Is this position inside a `columns` × `rows` grid?
    pub fn in_bounds(self, columns: usize, rows: usize) -> bool {
        usize::try_from(self.column).map_or(false, |c| c < columns)
            && usize::try_from(self.row).map_or(false, |r| r < rows)
    }
}

fn wrap_axis(value: i32, size: usize) -> i32 {
    // An empty axis has no valid index to wrap onto
    if size == 0 {
        return value;
    }
    let size = i32::try_from(size).unwrap_or(i32::MAX);
    if value < 0 {
        size - 1
    } else {
        value % size
    }
}

/// Bit flags that combine into a [HexDirection]. North is the absence of
/// every flag; `SOUTH` flips it, and `EAST`/`WEST` turn it into a diagonal.
/// This lets stick input build a direction one axis at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, BitOr, BitOrAssign)]
pub struct DirectionMask(pub u8);

impl DirectionMask {
    pub const NONE: Self = Self(0b000);
    pub const SOUTH: Self = Self(0b001);
    pub const EAST: Self = Self(0b010);
    pub const WEST: Self = Self(0b100);
}

/// One of the six neighbors of a flat-topped tile. The discriminants are the
/// [DirectionMask] bits that produce each direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum HexDirection {
    North = 0b000,
    South = 0b001,
    NorthEast = 0b010,
    SouthEast = 0b011,
    NorthWest = 0b100,
    SouthWest = 0b101,
}

/// (column, row) deltas, indexed by direction then by column parity
/// (even, odd).
const DELTAS: [[(i32, i32); 2]; 6] = [
    [(0, -1), (0, -1)],  // North
    [(0, 1), (0, 1)],    // South
    [(1, -1), (1, 0)],   // NorthEast
    [(1, 0), (1, 1)],    // SouthEast
    [(-1, -1), (-1, 0)], // NorthWest
    [(-1, 0), (-1, 1)],  // SouthWest
];

impl HexDirection {
    /// Resolve a combination of mask bits. Returns `None` for combinations
    /// that don't name a direction, i.e. east and west together, or any bit
    /// outside the three flags.
    pub fn from_mask(mask: DirectionMask) -> Option<Self> {
        match mask.0 {
            0b000 => Some(Self::North),
            0b001 => Some(Self::South),
            0b010 => Some(Self::NorthEast),
            0b011 => Some(Self::SouthEast),
            0b100 => Some(Self::NorthWest),
            0b101 => Some(Self::SouthWest),
            _ => None,
        }
    }

    pub fn mask(self) -> DirectionMask {
        DirectionMask(self as u8)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthWest => Self::NorthEast,
        }
    }

    /// Coordinate delta for a step in this direction from a tile in `column`
    pub fn delta(self, column: i32) -> (i32, i32) {
        let parity = column.rem_euclid(2) as usize;
        DELTAS[self as usize][parity]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_delta_table() {
        use HexDirection::*;
        assert_eq!(North.delta(4), (0, -1));
        assert_eq!(South.delta(3), (0, 1));
        assert_eq!(NorthEast.delta(4), (1, -1));
        assert_eq!(NorthEast.delta(3), (1, 0));
        assert_eq!(SouthEast.delta(4), (1, 0));
        assert_eq!(SouthEast.delta(3), (1, 1));
        assert_eq!(NorthWest.delta(4), (-1, -1));
        assert_eq!(NorthWest.delta(3), (-1, 0));
        assert_eq!(SouthWest.delta(4), (-1, 0));
        assert_eq!(SouthWest.delta(3), (-1, 1));
    }

    #[test]
    fn test_mask_round_trip() {
        for direction in HexDirection::iter() {
            assert_eq!(HexDirection::from_mask(direction.mask()), Some(direction));
        }
        assert_eq!(
            HexDirection::from_mask(DirectionMask::SOUTH | DirectionMask::EAST),
            Some(HexDirection::SouthEast)
        );
        assert_eq!(
            HexDirection::from_mask(DirectionMask::NONE),
            Some(HexDirection::North)
        );
    }

    #[test]
    fn test_invalid_masks() {
        let east_west = DirectionMask::EAST | DirectionMask::WEST;
        assert_eq!(HexDirection::from_mask(east_west), None);
        assert_eq!(
            HexDirection::from_mask(east_west | DirectionMask::SOUTH),
            None
        );
        assert_eq!(HexDirection::from_mask(DirectionMask(0b1000)), None);
    }

    #[test]
    fn test_step_and_back() {
        for column in 1..7 {
            for row in 1..7 {
                let p = GridPosition::new(column, row);
                for direction in HexDirection::iter() {
                    assert_eq!(
                        p.step(direction).step(direction.opposite()),
                        p,
                        "{} then back from {}",
                        direction,
                        p
                    );
                }
            }
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(GridPosition::new(-1, 0).wrap(14, 9), GridPosition::new(13, 0));
        assert_eq!(GridPosition::new(14, 9).wrap(14, 9), GridPosition::new(0, 0));
        assert_eq!(GridPosition::new(3, -1).wrap(14, 9), GridPosition::new(3, 8));
        assert_eq!(GridPosition::new(5, 5).wrap(14, 9), GridPosition::new(5, 5));
    }

    #[test]
    fn test_in_bounds() {
        assert!(GridPosition::new(0, 0).in_bounds(1, 1));
        assert!(!GridPosition::new(1, 0).in_bounds(1, 1));
        assert!(!GridPosition::new(-1, 0).in_bounds(1, 1));
        assert!(!GridPosition::new(0, 0).in_bounds(0, 0));
    }
}
