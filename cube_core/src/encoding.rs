//! Flat state vectors for observation and restoration.
//!
//! Tiles are always visited face by face in [`Face::OBSERVATION_ORDER`],
//! row-major within each face.

use log::debug;

use crate::{
    cube::{CubeError, CubeState},
    face::Face,
    tile::TileColor,
};

/// How [`CubeState::encode`] represents each tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// One color label per tile.
    Labels,
    /// One bit code per tile. With `relative` set, even-order cubes number
    /// colors in the order they are first met instead of using their fixed
    /// codes.
    Bits { relative: bool },
}

/// A tile color code together with the number of bits it is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCode {
    value: u8,
    width: u8,
}

impl TileCode {
    pub const FIXED_WIDTH: u8 = 3;
    pub const RELATIVE_WIDTH: u8 = 6;

    #[must_use]
    pub fn fixed(color: TileColor) -> Self {
        TileCode {
            value: color.code(),
            width: Self::FIXED_WIDTH,
        }
    }

    fn relative(value: u8) -> Self {
        TileCode {
            value,
            width: Self::RELATIVE_WIDTH,
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn width(self) -> u8 {
        self.width
    }

    /// The code's digits, most significant first.
    pub fn bits(self) -> impl Iterator<Item = u8> {
        (0..self.width).rev().map(move |shift| (self.value >> shift) & 1)
    }
}

/// The output of [`CubeState::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateVector {
    Labels(Vec<TileColor>),
    Codes(Vec<TileCode>),
}

impl StateVector {
    /// Number of tiles, which is not the number of bits for code vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            StateVector::Labels(labels) => labels.len(),
            StateVector::Codes(codes) => codes.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten codes into individual 0/1 digits. Label vectors are written
    /// with their fixed codes.
    #[must_use]
    pub fn to_bits(&self) -> Vec<u8> {
        match self {
            StateVector::Labels(labels) => labels
                .iter()
                .flat_map(|&color| TileCode::fixed(color).bits())
                .collect(),
            StateVector::Codes(codes) => codes.iter().flat_map(|code| code.bits()).collect(),
        }
    }
}

impl CubeState {
    fn observed_tiles(&self) -> impl Iterator<Item = TileColor> + '_ {
        Face::OBSERVATION_ORDER
            .into_iter()
            .flat_map(|face| self.face(face).tiles().iter().copied())
    }

    /// Flatten the cube into a state vector.
    ///
    /// Relative codes are numbered from zero in the order colors are first
    /// met during this call, so they are only comparable within one vector.
    #[must_use]
    pub fn encode(&self, encoding: Encoding) -> StateVector {
        match encoding {
            Encoding::Labels => StateVector::Labels(self.observed_tiles().collect()),
            Encoding::Bits { relative } if relative && self.order() % 2 == 0 => {
                let mut assigned = [None; TileColor::ALL.len()];
                let mut next = 0;

                StateVector::Codes(
                    self.observed_tiles()
                        .map(|color| {
                            let value = *assigned[color as usize].get_or_insert_with(|| {
                                next += 1;
                                next - 1
                            });
                            TileCode::relative(value)
                        })
                        .collect(),
                )
            }
            Encoding::Bits { .. } => {
                StateVector::Codes(self.observed_tiles().map(TileCode::fixed).collect())
            }
        }
    }

    /// Overwrite every tile from a label vector produced by
    /// [`CubeState::encode`] with [`Encoding::Labels`].
    ///
    /// # Errors
    ///
    /// If the vector does not hold exactly one label per tile. The cube is
    /// left untouched.
    pub fn decode(&mut self, labels: &[TileColor]) -> Result<(), CubeError> {
        if labels.len() != self.tile_count() {
            return Err(CubeError::MalformedState {
                expected: self.tile_count(),
                actual: labels.len(),
            });
        }

        let per_face = self.order() * self.order();
        for (face, chunk) in Face::OBSERVATION_ORDER
            .into_iter()
            .zip(labels.chunks_exact(per_face))
        {
            self.face_mut(face).tiles_mut().copy_from_slice(chunk);
        }

        debug!("Decoded {} tiles", labels.len());
        Ok(())
    }

    /// Like [`CubeState::decode`], but from text labels such as `"W"`.
    ///
    /// # Errors
    ///
    /// If the length is wrong or a label is not a known color
    pub fn decode_labels<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<(), CubeError> {
        let colors = labels
            .iter()
            .map(|label| label.as_ref().parse::<TileColor>())
            .collect::<Result<Vec<_>, _>>()?;

        self.decode(&colors)
    }

    /// Like [`CubeState::decode`], but from fixed 3-bit codes.
    ///
    /// # Errors
    ///
    /// If the length is wrong or a code is not a fixed color code. Relative
    /// codes cannot be decoded since their meaning is lost with the call that
    /// produced them.
    pub fn decode_codes(&mut self, codes: &[TileCode]) -> Result<(), CubeError> {
        let colors = codes
            .iter()
            .map(|code| {
                TileColor::from_code(code.value())
                    .filter(|_| code.width() == TileCode::FIXED_WIDTH)
                    .ok_or(CubeError::UnknownCode(code.value()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.decode(&colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_follow_observation_order() {
        let cube = CubeState::new(2).unwrap();
        let StateVector::Labels(labels) = cube.encode(Encoding::Labels) else {
            panic!("Expected labels");
        };

        let expected = Face::OBSERVATION_ORDER
            .iter()
            .flat_map(|face| [face.home_color(); 4])
            .collect_vec();
        assert_eq!(labels, expected);
        assert_eq!(
            labels.iter().map(ToString::to_string).join(""),
            "WWWWYYYYOOOORRRRGGGGBBBB"
        );
    }

    #[test]
    fn odd_orders_use_fixed_codes() {
        let cube = CubeState::new(3).unwrap();
        let vector = cube.encode(Encoding::Bits { relative: true });
        assert_eq!(vector.len(), 54);

        let bits = vector.to_bits();
        assert_eq!(bits.len(), 54 * 3);
        // Front is white, 110
        assert_eq!(&bits[..3], &[1, 1, 0]);
        // Back is yellow, 011
        assert_eq!(&bits[27..30], &[0, 1, 1]);
    }

    #[test]
    fn relative_codes_count_up_from_zero() {
        let cube = CubeState::new(2).unwrap();
        let StateVector::Codes(codes) = cube.encode(Encoding::Bits { relative: true }) else {
            panic!("Expected codes");
        };

        assert_eq!(codes.len(), 24);
        assert!(codes.iter().all(|code| code.width() == 6));
        let values = codes.iter().map(|code| code.value()).collect_vec();
        assert_eq!(
            values,
            [0_u8, 1, 2, 3, 4, 5]
                .into_iter()
                .flat_map(|v| [v; 4])
                .collect_vec()
        );
        assert_eq!(&codes[4].bits().collect_vec(), &[0_u8, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn relative_mode_can_be_disabled() {
        let cube = CubeState::new(2).unwrap();
        let StateVector::Labels(labels) = cube.encode(Encoding::Labels) else {
            panic!("Expected labels");
        };

        let vector = cube.encode(Encoding::Bits { relative: false });
        assert_eq!(
            vector,
            StateVector::Codes(labels.into_iter().map(TileCode::fixed).collect())
        );
        assert_eq!(vector.to_bits().len(), 24 * 3);
    }

    #[test]
    fn wrong_length_leaves_cube_untouched() {
        let mut cube = CubeState::new(3).unwrap();
        cube.twist(Face::Left, 0, false).unwrap();
        let before = cube.clone();

        let result = cube.decode(&[TileColor::Red; 53]);
        assert!(matches!(
            result,
            Err(CubeError::MalformedState {
                expected: 54,
                actual: 53
            })
        ));
        assert_eq!(cube, before);
    }

    #[test]
    fn bad_label_leaves_cube_untouched() {
        let mut cube = CubeState::new(2).unwrap();
        let mut labels = vec!["R"; 24];
        labels[7] = "Q";

        assert!(matches!(
            cube.decode_labels(&labels),
            Err(CubeError::UnknownColor(label)) if label == "Q"
        ));
        assert_eq!(cube, CubeState::new(2).unwrap());

        labels[7] = "R";
        cube.decode_labels(&labels).unwrap();
        assert!(cube.is_solved());
        assert_eq!(cube.face(Face::Front).tiles(), &[TileColor::Red; 4]);
    }

    #[test]
    fn fixed_codes_decode() {
        let mut scrambled = CubeState::new(3).unwrap();
        scrambled.twist(Face::Up, 0, false).unwrap();
        scrambled.twist(Face::Right, 1, true).unwrap();

        let StateVector::Codes(codes) = scrambled.encode(Encoding::Bits { relative: false })
        else {
            panic!("Expected codes");
        };
        let mut cube = CubeState::new(3).unwrap();
        cube.decode_codes(&codes).unwrap();
        assert_eq!(cube, scrambled);

        let mut relative = CubeState::new(2).unwrap();
        let StateVector::Codes(codes) = relative.encode(Encoding::Bits { relative: true }) else {
            panic!("Expected codes");
        };
        assert!(matches!(
            relative.decode_codes(&codes),
            Err(CubeError::UnknownCode(0))
        ));
    }
}
