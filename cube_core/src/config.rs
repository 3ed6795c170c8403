use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    cube::{CubeError, CubeState},
    encoding::Encoding,
};

/// Settings for building a cube, usually read from a TOML file.
///
/// ```toml
/// order = 2
/// relative_bits = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubeConfig {
    pub order: usize,
    /// Number colors by first appearance when bit-encoding even-order cubes.
    pub relative_bits: bool,
}

impl Default for CubeConfig {
    fn default() -> Self {
        CubeConfig {
            order: 3,
            relative_bits: true,
        }
    }
}

impl CubeConfig {
    /// # Errors
    ///
    /// If the text is not valid TOML or has fields of the wrong type
    pub fn from_toml(text: &str) -> Result<Self, CubeError> {
        let config = toml::from_str::<CubeConfig>(text)?;
        debug!("Loaded cube config: {config:?}");
        Ok(config)
    }

    /// A solved cube of the configured order.
    ///
    /// # Errors
    ///
    /// If the configured order is not supported
    pub fn build(&self) -> Result<CubeState, CubeError> {
        CubeState::new(self.order)
    }

    #[must_use]
    pub fn encoding(&self) -> Encoding {
        Encoding::Bits {
            relative: self.relative_bits,
        }
    }
}
