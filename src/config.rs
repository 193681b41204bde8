//! Serializable engine configuration.
//!
//! Each config holds the key material and options of one engine and
//! validates them in `build()`. Omitted fields take the conventional
//! defaults, so a minimal JSON config is just the keyword (and grid):
//!
//! ```
//! use gridcrypt::config::CipherConfig;
//! use gridcrypt::Cipher;
//!
//! let config: CipherConfig = serde_json::from_str(
//!     r#"{ "cipher": "playfair", "keyword": "playfaire" }"#,
//! ).unwrap();
//! let cipher = config.build().unwrap();
//! assert_eq!(cipher.encrypt("helloworld").unwrap(), "QHYVRVVQGRKU");
//! ```

use serde::{Deserialize, Serialize};

use crate::adfgvx::{default_coordinates, Adfgvx, DEFAULT_PAD};
use crate::alphabet::Alphabet;
use crate::cipher::Cipher;
use crate::error::GridCryptError;
use crate::grid::{CombinePair, Grid};
use crate::playfair::{default_alt_separator, Playfair, DEFAULT_SEPARATOR};

/// Playfair options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfairConfig {
    /// Grid keyword.
    pub keyword: String,
    /// Letter inserted between doubles and after an odd tail.
    pub separator: char,
    /// Letter used when the doubled letter is the separator. Defaults to
    /// [`default_alt_separator`] of `separator`.
    pub alt_separator: Option<char>,
    /// Letters sharing one cell.
    pub combine: CombinePair,
}

impl Default for PlayfairConfig {
    fn default() -> Self {
        PlayfairConfig {
            keyword: String::new(),
            separator: DEFAULT_SEPARATOR,
            alt_separator: None,
            combine: CombinePair::default(),
        }
    }
}

impl PlayfairConfig {
    /// Config for `keyword` with every other option at its default.
    pub fn new(keyword: impl Into<String>) -> Self {
        PlayfairConfig {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// Validates the options and builds the engine.
    ///
    /// # Errors
    /// Any error of [`Grid::from_keyword`] or [`Playfair::new`].
    pub fn build(&self) -> Result<Playfair, GridCryptError> {
        let grid = Grid::from_keyword(&self.keyword, self.combine)?;
        let alt = self
            .alt_separator
            .unwrap_or_else(|| default_alt_separator(self.separator));
        Playfair::new(grid, self.separator, alt)
    }
}

/// ADFGVX options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdfgvxConfig {
    /// Grid in the text format accepted by [`Grid::parse`].
    pub grid: String,
    /// Transposition keyword.
    pub keyword: String,
    /// Coordinate alphabet. Defaults to `ADFGVX` or `ADFGX` by grid size.
    pub coordinates: Option<String>,
    /// Letter whose coordinates fill the last transposition row.
    pub pad: char,
}

impl Default for AdfgvxConfig {
    fn default() -> Self {
        AdfgvxConfig {
            grid: String::new(),
            keyword: String::new(),
            coordinates: None,
            pad: DEFAULT_PAD,
        }
    }
}

impl AdfgvxConfig {
    /// Config for `grid` and `keyword` with default coordinates and pad.
    pub fn new(grid: impl Into<String>, keyword: impl Into<String>) -> Self {
        AdfgvxConfig {
            grid: grid.into(),
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// Validates the options and builds the engine.
    ///
    /// # Errors
    /// Any error of [`Grid::parse`], [`default_coordinates`] or
    /// [`Adfgvx::with_pad`].
    pub fn build(&self) -> Result<Adfgvx, GridCryptError> {
        let grid = Grid::parse(&self.grid, Alphabet::Alphanumeric)?;
        let coordinates = match &self.coordinates {
            Some(coordinates) => coordinates.as_str(),
            None => default_coordinates(grid.side())?,
        };
        Adfgvx::with_pad(grid, &self.keyword, coordinates, self.pad)
    }
}

/// Configuration of any engine, tagged by `"cipher"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "snake_case")]
pub enum CipherConfig {
    Playfair(PlayfairConfig),
    Adfgvx(AdfgvxConfig),
}

impl CipherConfig {
    /// Builds the configured engine behind the [`Cipher`] interface.
    pub fn build(&self) -> Result<Box<dyn Cipher + Send + Sync>, GridCryptError> {
        Ok(match self {
            CipherConfig::Playfair(config) => Box::new(config.build()?),
            CipherConfig::Adfgvx(config) => Box::new(config.build()?),
        })
    }
}
