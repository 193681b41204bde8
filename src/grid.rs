//! Square substitution grid and its coordinate lookup table.
//!
//! A [`Grid`] is built once and is read-only afterwards. Coordinates are
//! resolved through a fixed array indexed by [`Code`], so lookups never hash
//! and are total over the declared alphabet.
//!
//! The Playfair combine pair is applied as a lookup-table alias after the
//! cells are laid out: the replaced letter gets the coordinates of the
//! shared letter and never occupies a cell of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, Case, Code, MAX_SYMBOLS};
use crate::error::GridCryptError;

/// Side length of a Playfair grid.
pub const PLAYFAIR_SIDE: usize = 5;

/// Row/column address of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Two letters forced to share one grid cell.
///
/// `replace` is rewritten to `share` wherever it appears; only `share`
/// occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinePair {
    pub share: char,
    pub replace: char,
}

impl Default for CombinePair {
    /// `I` shares its cell with `J`.
    fn default() -> Self {
        CombinePair {
            share: 'I',
            replace: 'J',
        }
    }
}

/// Immutable square matrix of unique symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    alphabet: Alphabet,
    cells: Vec<Code>,
    lookup: [Option<Coord>; MAX_SYMBOLS],
}

impl Grid {
    /// Builds a grid from row-major symbols.
    ///
    /// # Errors
    /// - [`GridCryptError::InvalidGridSize`] if there are not exactly
    ///   `side * side` symbols.
    /// - [`GridCryptError::InvalidSymbol`] for a symbol outside `alphabet`.
    /// - [`GridCryptError::DuplicateSymbol`] if a symbol repeats.
    pub fn from_symbols<I>(side: usize, alphabet: Alphabet, symbols: I) -> Result<Self, GridCryptError>
    where
        I: IntoIterator<Item = char>,
    {
        let codes = symbols
            .into_iter()
            .map(|s| alphabet.code_of(s))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_codes(side, alphabet, codes)
    }

    fn from_codes(side: usize, alphabet: Alphabet, cells: Vec<Code>) -> Result<Self, GridCryptError> {
        if side == 0 || cells.len() != side * side || cells.len() > alphabet.len() {
            return Err(GridCryptError::InvalidGridSize {
                symbols: cells.len(),
                side,
            });
        }
        let mut lookup = [None; MAX_SYMBOLS];
        for (i, &code) in cells.iter().enumerate() {
            let slot = &mut lookup[code as usize];
            if slot.is_some() {
                return Err(GridCryptError::DuplicateSymbol(
                    alphabet.letter_of(code, Case::Upper)?,
                ));
            }
            *slot = Some(Coord {
                row: i / side,
                col: i % side,
            });
        }
        Ok(Grid {
            side,
            alphabet,
            cells,
            lookup,
        })
    }

    /// Parses the grid text format: a row-major string in which every
    /// character outside `alphabet` is ignored, so commas or newlines may
    /// separate rows.
    ///
    /// # Errors
    /// - [`GridCryptError::InvalidGridSize`] if the filtered length is not a
    ///   perfect square.
    /// - [`GridCryptError::DuplicateSymbol`] if a symbol repeats.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::alphabet::Alphabet;
    /// use gridcrypt::grid::Grid;
    ///
    /// let grid = Grid::parse("BTALP,DHOZK,QFVSN,GICUX,MREWY", Alphabet::Latin).unwrap();
    /// assert_eq!(grid.side(), 5);
    /// ```
    pub fn parse(text: &str, alphabet: Alphabet) -> Result<Self, GridCryptError> {
        let codes: Vec<Code> = text.chars().filter_map(|c| alphabet.code_of(c).ok()).collect();
        let side = codes.len().isqrt();
        if side * side != codes.len() {
            return Err(GridCryptError::InvalidGridSize {
                symbols: codes.len(),
                side,
            });
        }
        Self::from_codes(side, alphabet, codes)
    }

    /// Builds the 5x5 Playfair grid for `keyword`.
    ///
    /// Keyword letters come first, then the rest of the alphabet in natural
    /// order. Repeated letters are skipped and `combine.replace` is written
    /// as `combine.share`.
    ///
    /// # Errors
    /// Returns [`GridCryptError::InvalidSymbol`] if the keyword or the
    /// combine pair holds a non-letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::grid::{CombinePair, Grid};
    ///
    /// let grid = Grid::from_keyword("playfair", CombinePair::default()).unwrap();
    /// assert_eq!(grid.to_string().lines().next(), Some("PLAYF"));
    /// ```
    pub fn from_keyword(keyword: &str, combine: CombinePair) -> Result<Self, GridCryptError> {
        let alphabet = Alphabet::Latin;
        let share = alphabet.code_of(combine.share)?;
        let replace = alphabet.code_of(combine.replace)?;
        if share == replace {
            return Err(GridCryptError::DuplicateSymbol(combine.share));
        }
        let keyword = keyword
            .chars()
            .map(|c| alphabet.code_of(c))
            .collect::<Result<Vec<_>, _>>()?;

        let mut placed = [false; MAX_SYMBOLS];
        let mut cells = Vec::with_capacity(PLAYFAIR_SIDE * PLAYFAIR_SIDE);
        for code in keyword.into_iter().chain(alphabet.codes()) {
            if cells.len() == PLAYFAIR_SIDE * PLAYFAIR_SIDE {
                break;
            }
            let code = if code == replace { share } else { code };
            if !placed[code as usize] {
                placed[code as usize] = true;
                cells.push(code);
            }
        }

        let mut grid = Self::from_codes(PLAYFAIR_SIDE, alphabet, cells)?;
        grid.lookup[replace as usize] = grid.lookup[share as usize];
        Ok(grid)
    }

    /// Returns the side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the declared alphabet.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Returns the coordinates of `code`.
    ///
    /// # Errors
    /// Returns [`GridCryptError::InvalidSymbol`] if the symbol has no cell
    /// (or alias) in this grid.
    pub fn locate(&self, code: Code) -> Result<Coord, GridCryptError> {
        match self.lookup.get(code as usize).copied().flatten() {
            Some(coord) => Ok(coord),
            None => Err(GridCryptError::InvalidSymbol(
                self.alphabet.letter_of(code, Case::Upper)?,
            )),
        }
    }

    /// Returns the code stored at `(row, col)`. Both indices must be below
    /// [`side`](Self::side).
    pub fn code_at(&self, row: usize, col: usize) -> Code {
        self.cells[row * self.side + col]
    }

    /// Returns `true` if `a` and `b` resolve to the same cell.
    pub fn same_cell(&self, a: Code, b: Code) -> Result<bool, GridCryptError> {
        Ok(self.locate(a)? == self.locate(b)?)
    }

    /// Iterates over the rows as code slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Code]> {
        self.cells.chunks(self.side)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &code in row {
                let symbol = self
                    .alphabet
                    .letter_of(code, Case::Upper)
                    .map_err(|_| fmt::Error)?;
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
