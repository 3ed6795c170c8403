//! Whole-cube rotations.

use crate::face::{Direction, Face, FaceGrid};

/// An axis the whole cube can be turned about. Positive turns follow the
/// right face for `X`, the up face for `Y`, and the front face for `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[must_use]
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            'z' => Some(Axis::Z),
            _ => None,
        }
    }

    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    /// Grid turns made before the slots are relabeled, for a forward turn.
    /// `Some(direction)` flips for inverse turns; `None` marks a half turn,
    /// which goes the same way either way.
    fn grid_turns(self, inverse: bool) -> &'static [(Face, Option<Direction>, usize)] {
        use Direction::{Clockwise as Cw, CounterClockwise as Ccw};
        use Face::*;

        match (self, inverse) {
            (Axis::Z, _) => &[
                (Front, Some(Cw), 1),
                (Back, Some(Ccw), 1),
                (Up, Some(Cw), 1),
                (Down, Some(Cw), 1),
                (Left, Some(Cw), 1),
                (Right, Some(Cw), 1),
            ],
            (Axis::Y, _) => &[(Up, Some(Cw), 1), (Down, Some(Ccw), 1)],
            // The grid headed for (or leaving) the back slot is seen upside down
            (Axis::X, false) => &[
                (Back, None, 2),
                (Left, Some(Ccw), 1),
                (Right, Some(Cw), 1),
                (Up, None, 2),
            ],
            (Axis::X, true) => &[
                (Back, None, 2),
                (Left, Some(Ccw), 1),
                (Right, Some(Cw), 1),
                (Down, None, 2),
            ],
        }
    }

    /// Slot relabeling for a forward turn: each slot receives the grid of the
    /// slot after it, and the last slot receives the grid of the first.
    const fn slot_cycle(self) -> [Face; 4] {
        use Face::*;

        match self {
            Axis::Z => [Right, Up, Left, Down],
            Axis::Y => [Left, Front, Right, Back],
            Axis::X => [Back, Up, Front, Down],
        }
    }
}

/// Turn the whole cube a quarter turn about `axis`.
///
/// Each grid is first turned to account for the viewpoint of the slot it is
/// headed to, then grids are swapped between slots. The six slots keep their
/// identity; only their contents move.
pub(crate) fn rotate_along_axis(faces: &mut [FaceGrid; 6], axis: Axis, inverse: bool) {
    for &(face, direction, quarters) in axis.grid_turns(inverse) {
        let direction = match direction {
            Some(direction) if inverse => direction.reversed(),
            Some(direction) => direction,
            None => Direction::Clockwise,
        };
        faces[face as usize].rotate(direction, quarters);
    }

    let mut cycle = axis.slot_cycle();
    if inverse {
        cycle.reverse();
    }
    for pair in cycle.windows(2) {
        faces.swap(pair[0] as usize, pair[1] as usize);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileColor;

    fn solved(order: usize) -> [FaceGrid; 6] {
        Face::ALL.map(|face| FaceGrid::filled(order, face.home_color()))
    }

    fn marked(order: usize) -> [FaceGrid; 6] {
        let mut faces = solved(order);
        for (i, face) in faces.iter_mut().enumerate() {
            face[(0, 0)] = TileColor::ALL[(i + 1) % 6];
            face[(0, 1)] = TileColor::ALL[(i + 2) % 6];
        }
        faces
    }

    fn color_at(faces: &[FaceGrid; 6], face: Face) -> TileColor {
        faces[face as usize][(1, 1)]
    }

    #[test]
    fn x_brings_front_up() {
        let mut faces = solved(3);
        rotate_along_axis(&mut faces, Axis::X, false);
        assert_eq!(color_at(&faces, Face::Up), TileColor::White);
        assert_eq!(color_at(&faces, Face::Back), TileColor::Green);
        assert_eq!(color_at(&faces, Face::Down), TileColor::Yellow);
        assert_eq!(color_at(&faces, Face::Front), TileColor::Blue);
        assert_eq!(color_at(&faces, Face::Right), TileColor::Orange);
    }

    #[test]
    fn y_brings_right_to_front() {
        let mut faces = solved(3);
        rotate_along_axis(&mut faces, Axis::Y, false);
        assert_eq!(color_at(&faces, Face::Front), TileColor::Orange);
        assert_eq!(color_at(&faces, Face::Left), TileColor::White);
        assert_eq!(color_at(&faces, Face::Right), TileColor::Yellow);
        assert_eq!(color_at(&faces, Face::Back), TileColor::Red);
    }

    #[test]
    fn z_brings_up_to_right() {
        let mut faces = solved(3);
        rotate_along_axis(&mut faces, Axis::Z, false);
        assert_eq!(color_at(&faces, Face::Right), TileColor::Green);
        assert_eq!(color_at(&faces, Face::Down), TileColor::Orange);
        assert_eq!(color_at(&faces, Face::Left), TileColor::Blue);
        assert_eq!(color_at(&faces, Face::Up), TileColor::Red);
        assert_eq!(color_at(&faces, Face::Front), TileColor::White);
    }

    #[test]
    fn inverse_undoes_forward() {
        for order in 2..=3 {
            for axis in Axis::ALL {
                let original = marked(order);
                let mut faces = original.clone();

                rotate_along_axis(&mut faces, axis, false);
                assert_ne!(faces, original);
                rotate_along_axis(&mut faces, axis, true);
                assert_eq!(faces, original);

                rotate_along_axis(&mut faces, axis, true);
                rotate_along_axis(&mut faces, axis, false);
                assert_eq!(faces, original);
            }
        }
    }

    #[test]
    fn four_turns_is_identity() {
        for order in 2..=3 {
            for axis in Axis::ALL {
                let original = marked(order);
                let mut faces = original.clone();
                for _ in 0..4 {
                    rotate_along_axis(&mut faces, axis, false);
                }
                assert_eq!(faces, original);
            }
        }
    }
}
