use std::fmt;

use log::{trace, warn};
use thiserror::Error;

use crate::{
    axis::{Axis, rotate_along_axis},
    face::{Direction, Face, FaceGrid},
    layer::cycle_front_layer,
    tile::TileColor,
};

/// The cube orders the simulator supports.
pub const SUPPORTED_ORDERS: std::ops::RangeInclusive<usize> = 2..=3;

#[derive(Error, Debug)]
pub enum CubeError {
    #[error("Order must be 2 or 3, got {order}")]
    InvalidOrder { order: usize },
    #[error("Layer {layer} is out of range for a cube of order {order}")]
    LayerOutOfRange { layer: usize, order: usize },
    #[error("State vector has the wrong length, expected {expected} tiles but got {actual}")]
    MalformedState { expected: usize, actual: usize },
    #[error("Unknown tile color label {0:?}")]
    UnknownColor(String),
    #[error("Unknown tile code {0:#05b}")]
    UnknownCode(u8),
    #[error("Invalid cube configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// One step of a twist, executed in order by [`CubeState::twist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Turn the grid occupying a slot.
    RotateFace { face: Face, direction: Direction },
    /// Turn the whole cube.
    Reorient { axis: Axis, inverse: bool },
    /// Cycle the ring `depth` layers behind the front face.
    CycleFront { depth: usize, inverse: bool },
}

/// The whole-cube turns that bring `face` to the front slot.
fn reorientation(face: Face) -> &'static [(Axis, bool)] {
    match face {
        Face::Front => &[],
        Face::Back => &[(Axis::Y, false), (Axis::Y, false)],
        Face::Right => &[(Axis::Y, false)],
        Face::Left => &[(Axis::Y, true)],
        Face::Up => &[(Axis::X, true)],
        Face::Down => &[(Axis::X, false)],
    }
}

/// Plan a twist of the layer `depth` layers behind `face`.
///
/// The face's own grid only turns for the outermost layer. The ring itself
/// is always cycled at the front, so the plan turns the cube to put `face`
/// there, cycles, and then undoes the turns in reverse order.
#[must_use]
pub fn twist_plan(face: Face, depth: usize, inverse: bool) -> Vec<Primitive> {
    let turns = reorientation(face);
    let mut plan = Vec::with_capacity(turns.len() * 2 + 2);

    if depth == 0 {
        plan.push(Primitive::RotateFace {
            face,
            direction: Direction::from_inverse(inverse),
        });
    }

    plan.extend(
        turns
            .iter()
            .map(|&(axis, inverse)| Primitive::Reorient { axis, inverse }),
    );
    plan.push(Primitive::CycleFront { depth, inverse });
    plan.extend(turns.iter().rev().map(|&(axis, inverse)| Primitive::Reorient {
        axis,
        inverse: !inverse,
    }));

    plan
}

/// The tile layout of an order 2 or order 3 cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    order: usize,
    faces: [FaceGrid; 6],
}

impl CubeState {
    /// Create a solved cube.
    ///
    /// # Errors
    ///
    /// If `order` is not 2 or 3
    pub fn new(order: usize) -> Result<Self, CubeError> {
        if !SUPPORTED_ORDERS.contains(&order) {
            return Err(CubeError::InvalidOrder { order });
        }

        Ok(CubeState {
            order,
            faces: Face::ALL.map(|face| FaceGrid::filled(order, face.home_color())),
        })
    }

    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The grid currently in the given slot.
    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face as usize]
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face as usize]
    }

    /// Number of tiles on the whole cube.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        6 * self.order * self.order
    }

    /// Turn the whole cube a quarter turn about `axis`.
    pub fn rotate_along_axis(&mut self, axis: Axis, inverse: bool) {
        trace!("Reorienting: axis={axis:?} inverse={inverse}");
        rotate_along_axis(&mut self.faces, axis, inverse);
    }

    /// Twist the layer `depth` layers behind `face`, clockwise as seen from
    /// that face unless `inverse` is set. Depth 0 is the face itself.
    ///
    /// # Errors
    ///
    /// If `depth` is not less than the order. The cube is left untouched.
    pub fn twist(&mut self, face: Face, depth: usize, inverse: bool) -> Result<(), CubeError> {
        if depth >= self.order {
            warn!(
                "Rejecting twist of {face:?} at layer {depth} on an order {} cube",
                self.order
            );
            return Err(CubeError::LayerOutOfRange {
                layer: depth,
                order: self.order,
            });
        }

        trace!("Twisting: face={face:?} depth={depth} inverse={inverse}");
        for primitive in twist_plan(face, depth, inverse) {
            self.execute(primitive);
        }

        Ok(())
    }

    fn execute(&mut self, primitive: Primitive) {
        match primitive {
            Primitive::RotateFace { face, direction } => {
                self.faces[face as usize].rotate(direction, 1);
            }
            Primitive::Reorient { axis, inverse } => {
                rotate_along_axis(&mut self.faces, axis, inverse);
            }
            Primitive::CycleFront { depth, inverse } => {
                cycle_front_layer(&mut self.faces, depth, inverse);
            }
        }
    }

    /// Whether every face is a single color.
    ///
    /// Faces are checked independently of each other; two faces sharing a
    /// color still count as solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(FaceGrid::is_uniform)
    }

    /// Lay the cube out as an unfolded cross, `3 * order` rows by `4 * order`
    /// columns: up above front, then left, front, right and back side by
    /// side, then down below front. Cells outside the cross are `None`.
    #[must_use]
    pub fn net(&self) -> Vec<Vec<Option<TileColor>>> {
        let n = self.order;
        let mut net = vec![vec![None; 4 * n]; 3 * n];

        let placements = [
            (Face::Up, 0, n),
            (Face::Left, n, 0),
            (Face::Front, n, n),
            (Face::Right, n, 2 * n),
            (Face::Back, n, 3 * n),
            (Face::Down, 2 * n, n),
        ];

        for (face, top, left) in placements {
            let grid = self.face(face);
            for row in 0..n {
                for col in 0..n {
                    net[top + row][left + col] = Some(grid[(row, col)]);
                }
            }
        }

        net
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.net() {
            for cell in row {
                match cell {
                    Some(color) => write!(f, "{color}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
