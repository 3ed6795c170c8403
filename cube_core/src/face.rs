//! Logical face positions and the square tile grids that occupy them.

use std::ops::{Index, IndexMut};

use crate::tile::TileColor;

/// One of the six logical positions on the cube. Whole-cube rotations change
/// which grid sits at each position, never the positions themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Up,
    Down,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Front, Back, Up, Down, Left, Right];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The order faces are serialized in by state vectors.
    pub const OBSERVATION_ORDER: [Self; 6] = {
        use Face::*;
        [Front, Back, Right, Left, Up, Down]
    };

    /// The color of this face on a freshly built cube.
    #[must_use]
    pub const fn home_color(self) -> TileColor {
        match self {
            Face::Front => TileColor::White,
            Face::Back => TileColor::Yellow,
            Face::Up => TileColor::Green,
            Face::Down => TileColor::Blue,
            Face::Left => TileColor::Red,
            Face::Right => TileColor::Orange,
        }
    }

    /// Parse a face token of the move grammar.
    #[must_use]
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'f' => Some(Face::Front),
            'b' => Some(Face::Back),
            'u' => Some(Face::Up),
            'd' => Some(Face::Down),
            'l' => Some(Face::Left),
            'r' => Some(Face::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Face::Front => 'f',
            Face::Back => 'b',
            Face::Up => 'u',
            Face::Down => 'd',
            Face::Left => 'l',
            Face::Right => 'r',
        }
    }
}

/// Which way a quarter turn goes, as seen looking straight at the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Clockwise unless `inverse` is set.
    #[must_use]
    pub const fn from_inverse(inverse: bool) -> Self {
        if inverse {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        }
    }
}

/// Where the tile at `(row, col)` lands after a quarter turn of an
/// `(last + 1)`-wide grid.
pub(crate) fn quarter_turn(
    (row, col): (usize, usize),
    last: usize,
    direction: Direction,
) -> (usize, usize) {
    match direction {
        Direction::Clockwise => (col, last - row),
        Direction::CounterClockwise => (last - col, row),
    }
}

/// An `order`×`order` grid of tiles, stored row-major. `(0, 0)` is the
/// top-left tile when looking straight at the face.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid {
    order: usize,
    tiles: Box<[TileColor]>,
}

impl FaceGrid {
    pub(crate) fn filled(order: usize, color: TileColor) -> Self {
        FaceGrid {
            order,
            tiles: vec![color; order * order].into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The tiles in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[TileColor] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [TileColor] {
        &mut self.tiles
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &[TileColor] {
        &self.tiles[row * self.order..(row + 1) * self.order]
    }

    /// Whether every tile matches the top-left one.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let first = self.tiles[0];
        self.tiles.iter().all(|&tile| tile == first)
    }

    /// Turn the grid in place by `quarters` quarter turns.
    ///
    /// Each concentric ring is turned by cycling its tiles four at a time,
    /// so only a single tile is ever held outside the grid. The center of an
    /// odd-order grid belongs to no cycle and stays put.
    pub(crate) fn rotate(&mut self, direction: Direction, quarters: usize) {
        let last = self.order - 1;

        for _ in 0..quarters % 4 {
            for ring in 0..self.order.div_ceil(2) {
                for j in ring..last - ring {
                    let p0 = (ring, j);
                    let p1 = quarter_turn(p0, last, direction);
                    let p2 = quarter_turn(p1, last, direction);
                    let p3 = quarter_turn(p2, last, direction);

                    // p0 -> p1 -> p2 -> p3 -> p0
                    let tile = self[p3];
                    self[p3] = self[p2];
                    self[p2] = self[p1];
                    self[p1] = self[p0];
                    self[p0] = tile;
                }
            }
        }
    }
}

impl Index<(usize, usize)> for FaceGrid {
    type Output = TileColor;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.tiles[row * self.order + col]
    }
}

impl IndexMut<(usize, usize)> for FaceGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.tiles[row * self.order + col]
    }
}
