use std::fmt;
use std::ops;

use itertools::Itertools;
use serde::{Deserialize, Serialize};


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;
pub const NUM_SQUARES: u8 = NUM_ROWS * NUM_COLS;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8, // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: i8) -> Option<Self> {
        (0..NUM_ROWS as i8).contains(&idx).then(|| Self { idx: idx as u8 })
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_ROWS).map(Self::from_zero_based) }
}

impl ops::Sub for Row {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8, // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn try_from_zero_based(idx: i8) -> Option<Self> {
        (0..NUM_COLS as i8).contains(&idx).then(|| Self { idx: idx as u8 })
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_COLS).map(Self::from_zero_based) }
}

impl ops::Sub for Col {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output {
        (self.to_zero_based() as i8) - (other.to_zero_based() as i8)
    }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn try_from_zero_based(row: i8, col: i8) -> Option<Self> {
        Some(Self {
            row: Row::try_from_zero_based(row)?,
            col: Col::try_from_zero_based(col)?,
        })
    }

    // Row-major, same order as `SquareId`.
    pub fn all() -> impl Iterator<Item = Coord> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }

    pub fn to_square_id(self) -> SquareId {
        SquareId::from_index(self.row.to_zero_based() * NUM_COLS + self.col.to_zero_based())
    }

    // Dark squares are the playable ones.
    pub fn is_dark(self) -> bool { (self.row.to_zero_based() + self.col.to_zero_based()) % 2 == 1 }
}

impl ops::Sub for Coord {
    type Output = (i8, i8);
    fn sub(self, other: Self) -> Self::Output { (self.row - other.row, self.col - other.col) }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord(r{}c{})", self.row.to_zero_based(), self.col.to_zero_based())
    }
}


// Row-major square index in [0, 63]: `row = id / 8`, `col = id % 8`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SquareId(u8);

impl SquareId {
    pub const fn from_index(idx: u8) -> Self {
        assert!(idx < NUM_SQUARES, "square id out of range");
        Self(idx)
    }
    pub fn try_from_index(idx: u8) -> Option<Self> { (idx < NUM_SQUARES).then_some(Self(idx)) }
    pub const fn index(self) -> u8 { self.0 }

    pub fn all() -> impl Iterator<Item = SquareId> + Clone { (0..NUM_SQUARES).map(Self) }

    pub fn to_coord(self) -> Coord {
        Coord {
            row: Row::from_zero_based(self.0 / NUM_COLS),
            col: Col::from_zero_based(self.0 % NUM_COLS),
        }
    }
}

impl TryFrom<u8> for SquareId {
    type Error = String;
    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        SquareId::try_from_index(idx).ok_or_else(|| format!("square id {idx} is out of range"))
    }
}

impl From<SquareId> for u8 {
    fn from(id: SquareId) -> u8 { id.0 }
}

impl fmt::Debug for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Square#{}", self.0) }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

pub fn square_at(row: Row, col: Col) -> SquareId { Coord::new(row, col).to_square_id() }

pub fn position_of(id: SquareId) -> (Row, Col) {
    let coord = id.to_coord();
    (coord.row, coord.col)
}
