#![warn(clippy::pedantic)]
#![allow(
    clippy::too_many_lines,
    clippy::similar_names,
    clippy::missing_panics_doc
)]

//! Tile-level simulation of order 2 and order 3 twisty cubes.
//!
//! A [`CubeState`] holds six square grids of [`TileColor`]s. Twists are
//! executed by turning the whole cube so the target face sits at the front,
//! cycling one ring of tiles around the front, and turning the cube back.

pub mod axis;
pub mod config;
pub mod cube;
pub mod encoding;
pub mod face;
mod layer;
pub mod moves;
pub mod tile;

pub use axis::Axis;
pub use config::CubeConfig;
pub use cube::{CubeError, CubeState, Primitive, twist_plan};
pub use encoding::{Encoding, StateVector, TileCode};
pub use face::{Direction, Face};
pub use moves::{ACTIONS, Command, Move, MoveInterpreter, scramble, unscramble};
pub use tile::TileColor;
