//! The move grammar.
//!
//! Commands are single characters read left to right:
//!
//! - `f r l u d b` twist a face
//! - `x y z` turn the whole cube
//! - `.` flips the direction of the next command
//! - a digit `n` makes the next twist act on layer `n - 1`, clamped to the cube
//!
//! Modifiers only apply to the next face or axis command and are reset by it.
//! Every other character is skipped.

use std::fmt;

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    axis::Axis,
    cube::{CubeError, CubeState},
    face::Face,
};

/// The moves an agent picks from, by action index. Index `i` and `i + 6` are
/// inverses of each other.
pub const ACTIONS: [&str; 12] = [
    "f", "r", "l", "u", "d", "b", ".f", ".r", ".l", ".u", ".d", ".b",
];

/// A twist of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    /// Zero for the face itself.
    pub depth: usize,
    pub inverse: bool,
}

impl Move {
    #[must_use]
    pub fn inverse(self) -> Self {
        Move {
            inverse: !self.inverse,
            ..self
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.depth > 0 {
            write!(f, "{}", self.depth + 1)?;
        }
        if self.inverse {
            write!(f, ".")?;
        }
        write!(f, "{}", self.face.token())
    }
}

/// One command of a parsed move string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Twist(Move),
    Reorient { axis: Axis, inverse: bool },
}

impl Command {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Command::Twist(move_) => Command::Twist(move_.inverse()),
            Command::Reorient { axis, inverse } => Command::Reorient {
                axis,
                inverse: !inverse,
            },
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Twist(move_) => write!(f, "{move_}"),
            Command::Reorient { axis, inverse } => {
                if *inverse {
                    write!(f, ".")?;
                }
                write!(f, "{}", axis.token())
            }
        }
    }
}

/// Turns move strings into commands for a cube of a given order.
#[derive(Debug, Clone)]
pub struct MoveInterpreter {
    order: usize,
    inverse: bool,
    layer: usize,
}

impl MoveInterpreter {
    #[must_use]
    pub fn new(order: usize) -> Self {
        MoveInterpreter {
            order,
            inverse: false,
            layer: 0,
        }
    }

    /// Feed one character, returning a command if it completes one.
    pub fn feed(&mut self, token: char) -> Option<Command> {
        if token == '.' {
            self.inverse = !self.inverse;
            return None;
        }

        if let Some(digit) = token.to_digit(10) {
            self.layer = (digit as usize)
                .saturating_sub(1)
                .min(self.order.saturating_sub(1));
            return None;
        }

        let command = if let Some(axis) = Axis::from_token(token) {
            Command::Reorient {
                axis,
                inverse: self.inverse,
            }
        } else if let Some(face) = Face::from_token(token) {
            Command::Twist(Move {
                face,
                depth: self.layer,
                inverse: self.inverse,
            })
        } else {
            return None;
        };

        self.inverse = false;
        self.layer = 0;
        Some(command)
    }

    /// Parse a whole move string. Modifiers left dangling at the end are kept
    /// for the next call.
    pub fn parse(&mut self, commands: &str) -> Vec<Command> {
        commands.chars().filter_map(|token| self.feed(token)).collect()
    }
}

impl CubeState {
    /// Carry out a single command.
    ///
    /// # Errors
    ///
    /// If a twist names a layer the cube does not have
    pub fn apply(&mut self, command: Command) -> Result<(), CubeError> {
        trace!("Applying {command}");
        match command {
            Command::Twist(Move {
                face,
                depth,
                inverse,
            }) => self.twist(face, depth, inverse),
            Command::Reorient { axis, inverse } => {
                self.rotate_along_axis(axis, inverse);
                Ok(())
            }
        }
    }

    /// Run a move string such as `"f.r2u"`.
    ///
    /// # Errors
    ///
    /// Never for strings parsed against this cube, since layer digits are
    /// clamped to its order.
    pub fn run(&mut self, commands: &str) -> Result<(), CubeError> {
        for command in MoveInterpreter::new(self.order()).parse(commands) {
            self.apply(command)?;
        }

        Ok(())
    }
}

/// Apply `count` random entries of [`ACTIONS`] and return their indices.
///
/// # Errors
///
/// Propagates errors from [`CubeState::run`]
pub fn scramble(
    cube: &mut CubeState,
    rng: &mut fastrand::Rng,
    count: usize,
) -> Result<Vec<usize>, CubeError> {
    let actions = (0..count)
        .map(|_| rng.usize(..ACTIONS.len()))
        .collect_vec();

    for &action in &actions {
        cube.run(ACTIONS[action])?;
    }

    debug!(
        "Scrambled with {count} moves: {}",
        actions.iter().map(|&action| ACTIONS[action]).join(" ")
    );
    Ok(actions)
}

/// Undo a list of action indices by applying their inverses in reverse.
///
/// # Errors
///
/// Propagates errors from [`CubeState::run`]
pub fn unscramble(cube: &mut CubeState, actions: &[usize]) -> Result<(), CubeError> {
    let half = ACTIONS.len() / 2;
    for &action in actions.iter().rev() {
        cube.run(ACTIONS[(action + half) % ACTIONS.len()])?;
    }

    Ok(())
}
