//! ADFGVX (and ADFGX) fractionating transposition cipher.
//!
//! Two stages:
//!
//! 1. Substitution: each plaintext symbol becomes its row and column
//!    coordinate letters in an R x R grid (`ADFGVX` for R = 6, `ADFGX` for
//!    R = 5).
//! 2. Transposition: the coordinate stream is written in rows under the
//!    keyword, padded with the pad letter's coordinates, and read out column
//!    by column in keyword-rank order.
//!
//! Decryption reverses both stages. Padding survives decryption as extra
//! plaintext letters.

use crate::alphabet::{Alphabet, Case, Code, MAX_SYMBOLS};
use crate::batch::{batched, batched_drop, batched_padded};
use crate::cipher::Cipher;
use crate::error::GridCryptError;
use crate::filter::TranslationTable;
use crate::grid::Grid;
use crate::transposition::ColumnOrder;

/// Coordinate alphabet for a 6x6 grid.
pub const ADFGVX_COORDINATES: &str = "ADFGVX";

/// Coordinate alphabet for a 5x5 grid.
pub const ADFGX_COORDINATES: &str = "ADFGX";

/// Default pad letter.
pub const DEFAULT_PAD: char = 'x';

const LATIN: usize = 26;

/// Returns the conventional coordinate alphabet for a grid side.
///
/// # Errors
/// Returns [`GridCryptError::MissingCoordinates`] for sides other than 5
/// and 6.
pub fn default_coordinates(side: usize) -> Result<&'static str, GridCryptError> {
    match side {
        6 => Ok(ADFGVX_COORDINATES),
        5 => Ok(ADFGX_COORDINATES),
        _ => Err(GridCryptError::MissingCoordinates { side }),
    }
}

/// ADFGVX engine.
#[derive(Debug, Clone)]
pub struct Adfgvx {
    grid: Grid,
    /// Coordinate letters, upper-case, indexed by row/column.
    coordinates: Vec<char>,
    /// Row/column index of each coordinate letter, indexed by Latin code.
    coordinate_index: [Option<usize>; LATIN],
    /// Coordinate pair of each grid symbol, indexed by alphanumeric code.
    substitution: [Option<[char; 2]>; MAX_SYMBOLS],
    order: ColumnOrder,
    pad: [char; 2],
}

impl Adfgvx {
    /// Creates an engine from a grid, a transposition keyword and a
    /// coordinate alphabet. The pad letter is [`DEFAULT_PAD`].
    ///
    /// # Errors
    /// - [`GridCryptError::CoordinateMismatch`] if `coordinates` does not
    ///   have one letter per grid row.
    /// - [`GridCryptError::DuplicateSymbol`] if a coordinate letter repeats.
    /// - [`GridCryptError::InvalidSymbol`] for a non-letter coordinate.
    /// - [`GridCryptError::EmptyKeyword`] for an empty keyword.
    /// - [`GridCryptError::InvalidSymbol`] if the grid lacks the pad letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::adfgvx::{Adfgvx, ADFGVX_COORDINATES};
    /// use gridcrypt::alphabet::Alphabet;
    /// use gridcrypt::cipher::Cipher;
    /// use gridcrypt::grid::Grid;
    ///
    /// let grid = Grid::parse("NA1C3H8TB2OME5WRPD4F6G7I9J0KLQSUVXYZ", Alphabet::Alphanumeric).unwrap();
    /// let cipher = Adfgvx::new(grid, "PRIVACY", ADFGVX_COORDINATES).unwrap();
    /// let ciphertext = cipher.encrypt("attackat1200am").unwrap();
    /// assert_eq!(ciphertext, "DGDDDAGDDGAFADDFDADVDVFAADVX");
    /// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "attackat1200am");
    /// ```
    pub fn new(grid: Grid, keyword: &str, coordinates: &str) -> Result<Self, GridCryptError> {
        Self::with_pad(grid, keyword, coordinates, DEFAULT_PAD)
    }

    /// Like [`new`](Self::new) with an explicit pad letter.
    pub fn with_pad(
        grid: Grid,
        keyword: &str,
        coordinates: &str,
        pad: char,
    ) -> Result<Self, GridCryptError> {
        let coordinates: Vec<char> = coordinates.chars().map(|c| c.to_ascii_uppercase()).collect();
        if coordinates.len() != grid.side() {
            return Err(GridCryptError::CoordinateMismatch {
                coordinates: coordinates.len(),
                side: grid.side(),
            });
        }
        let mut coordinate_index = [None; LATIN];
        for (i, &c) in coordinates.iter().enumerate() {
            let slot = &mut coordinate_index[Alphabet::Latin.code_of(c)? as usize];
            if slot.is_some() {
                return Err(GridCryptError::DuplicateSymbol(c));
            }
            *slot = Some(i);
        }

        let mut substitution = [None; MAX_SYMBOLS];
        for (row, codes) in grid.rows().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                substitution[code as usize] = Some([coordinates[row], coordinates[col]]);
            }
        }

        let order = ColumnOrder::from_keyword(keyword)?;
        let alphabet = grid.alphabet();
        let pad = substitution[alphabet.code_of(pad)? as usize]
            .ok_or(GridCryptError::InvalidSymbol(pad))?;

        Ok(Adfgvx {
            grid,
            coordinates,
            coordinate_index,
            substitution,
            order,
            pad,
        })
    }

    /// Parses the grid text format and picks the conventional coordinates
    /// for its size.
    ///
    /// # Errors
    /// Any error of [`Grid::parse`] or [`new`](Self::new), plus
    /// [`GridCryptError::MissingCoordinates`] for grids other than 5x5 and
    /// 6x6.
    pub fn from_grid_text(grid: &str, keyword: &str) -> Result<Self, GridCryptError> {
        let grid = Grid::parse(grid, Alphabet::Alphanumeric)?;
        let coordinates = default_coordinates(grid.side())?;
        Self::new(grid, keyword, coordinates)
    }

    /// Returns the substitution grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the transposition column order.
    pub fn column_order(&self) -> &ColumnOrder {
        &self.order
    }

    /// Returns the coordinate alphabet, upper-case.
    pub fn coordinates(&self) -> String {
        self.coordinates.iter().collect()
    }

    fn substitute(&self, symbol: char) -> Result<[char; 2], GridCryptError> {
        let code = self.grid.alphabet().code_of(symbol)?;
        self.substitution[code as usize].ok_or(GridCryptError::InvalidSymbol(symbol))
    }

    fn coordinate(&self, symbol: char) -> Option<usize> {
        let code = Alphabet::Latin.code_of(symbol).ok()?;
        self.coordinate_index[code as usize]
    }

    fn resolve(&self, row: char, col: char) -> Result<Code, GridCryptError> {
        match (self.coordinate(row), self.coordinate(col)) {
            (Some(r), Some(c)) => Ok(self.grid.code_at(r, c)),
            _ => Err(GridCryptError::UnknownCoordinatePair(
                row.to_ascii_uppercase(),
                col.to_ascii_uppercase(),
            )),
        }
    }
}

impl Cipher for Adfgvx {
    fn encrypt(&self, message: &str) -> Result<String, GridCryptError> {
        let mut stream = Vec::with_capacity(message.len() * 2);
        for symbol in message.chars() {
            stream.extend(self.substitute(symbol)?);
        }
        let width = self.order.width();
        let rows = batched_padded(stream, width, self.pad.into_iter().cycle())?
            .collect::<Result<Vec<_>, _>>()?;

        let columns: Vec<Vec<char>> = (0..width)
            .map(|col| rows.iter().map(|row| row[col]).collect())
            .collect();
        Ok(self.order.scramble(columns).into_iter().flatten().collect())
    }

    /// Decrypts coordinate letters of either case into lower-case plaintext.
    ///
    /// # Errors
    /// - [`GridCryptError::MalformedCiphertext`] if the length is not a
    ///   multiple of the keyword length.
    /// - [`GridCryptError::UnknownCoordinatePair`] for symbols outside the
    ///   coordinate alphabet.
    fn decrypt(&self, message: &str) -> Result<String, GridCryptError> {
        let symbols: Vec<char> = message.chars().collect();
        let width = self.order.width();
        if !symbols.len().is_multiple_of(width) {
            return Err(GridCryptError::MalformedCiphertext {
                len: symbols.len(),
                width,
            });
        }
        let column_len = symbols.len() / width;
        if column_len == 0 {
            return Ok(String::new());
        }
        let columns = batched(symbols, column_len)?.collect::<Result<Vec<_>, _>>()?;
        let columns = self.order.unscramble(columns);

        let stream = (0..column_len).flat_map(|row| columns.iter().map(move |column| column[row]));
        let mut out = String::with_capacity(column_len * width / 2);
        for pair in batched_drop(stream, 2)? {
            let pair = pair?;
            let code = self.resolve(pair[0], pair[1])?;
            out.push(self.grid.alphabet().letter_of(code, Case::Lower)?);
        }
        Ok(out)
    }

    fn text_filter(&self) -> TranslationTable {
        TranslationTable::alphanumeric()
    }
}
