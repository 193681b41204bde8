//! Playfair digraph cipher over a keyword-built 5x5 grid.
//!
//! Encryption splits the message into digraphs, breaking up doubled letters
//! with a separator and padding an odd tail, then applies the geometric
//! rule to each pair:
//!
//! - same row: each letter moves one column right (wrapping);
//! - same column: each letter moves one row down (wrapping);
//! - rectangle: each letter takes the column of the other.
//!
//! Decryption applies the same rule moving left/up. Inserted separators are
//! not removed: `HELLOWORLD` decrypts to `helxloworldx`.

use crate::alphabet::{Alphabet, Case, Code};
use crate::batch::batched;
use crate::cipher::Cipher;
use crate::error::GridCryptError;
use crate::filter::TranslationTable;
use crate::grid::{CombinePair, Coord, Grid};

/// Default letter for separating doubles and padding odd messages.
pub const DEFAULT_SEPARATOR: char = 'X';

/// Default separator used when the doubled letter is the separator itself.
pub const DEFAULT_ALT_SEPARATOR: char = 'Q';

/// Direction of the geometric rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Right/down, used for encryption.
    Forward,
    /// Left/up, used for decryption.
    Backward,
}

impl Direction {
    fn step(self, side: usize) -> usize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => side - 1,
        }
    }
}

/// Returns the alternate separator paired with `separator` by default:
/// `Q`, or `X` when the separator is `Q`.
pub fn default_alt_separator(separator: char) -> char {
    if separator.eq_ignore_ascii_case(&DEFAULT_ALT_SEPARATOR) {
        DEFAULT_SEPARATOR
    } else {
        DEFAULT_ALT_SEPARATOR
    }
}

/// Playfair engine.
#[derive(Debug, Clone)]
pub struct Playfair {
    grid: Grid,
    separator: Code,
    alt_separator: Code,
}

impl Playfair {
    /// Creates an engine over a prepared Latin grid.
    ///
    /// # Errors
    /// - [`GridCryptError::InvalidSymbol`] if a separator is not in the grid.
    /// - [`GridCryptError::InvalidSeparator`] if both separators share a cell,
    ///   since a doubled separator could then not be broken up.
    pub fn new(grid: Grid, separator: char, alt_separator: char) -> Result<Self, GridCryptError> {
        if grid.alphabet() != Alphabet::Latin {
            return Err(GridCryptError::InvalidGridSize {
                symbols: grid.side() * grid.side(),
                side: grid.side(),
            });
        }
        let sep = Alphabet::Latin.code_of(separator)?;
        let alt = Alphabet::Latin.code_of(alt_separator)?;
        if grid.same_cell(sep, alt)? {
            return Err(GridCryptError::InvalidSeparator(alt_separator));
        }
        Ok(Playfair {
            grid,
            separator: sep,
            alt_separator: alt,
        })
    }

    /// Creates an engine from a keyword with the default I/J combine pair
    /// and `X`/`Q` separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::cipher::Cipher;
    /// use gridcrypt::playfair::Playfair;
    ///
    /// let cipher = Playfair::from_keyword("playfaire").unwrap();
    /// assert_eq!(cipher.encrypt("helloworld").unwrap(), "QHYVRVVQGRKU");
    /// assert_eq!(cipher.decrypt("QHYVRVVQGRKU").unwrap(), "helxloworldx");
    /// ```
    pub fn from_keyword(keyword: &str) -> Result<Self, GridCryptError> {
        let grid = Grid::from_keyword(keyword, CombinePair::default())?;
        Self::new(grid, DEFAULT_SEPARATOR, DEFAULT_ALT_SEPARATOR)
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Applies the geometric rule to one digraph.
    ///
    /// # Errors
    /// Returns [`GridCryptError::InvalidSymbol`] if either code has no cell.
    pub fn encode_pair(
        &self,
        first: Code,
        second: Code,
        direction: Direction,
    ) -> Result<(Code, Code), GridCryptError> {
        let side = self.grid.side();
        let step = direction.step(side);
        let Coord { row: r1, col: c1 } = self.grid.locate(first)?;
        let Coord { row: r2, col: c2 } = self.grid.locate(second)?;
        let pair = if r1 == r2 {
            (
                self.grid.code_at(r1, (c1 + step) % side),
                self.grid.code_at(r2, (c2 + step) % side),
            )
        } else if c1 == c2 {
            (
                self.grid.code_at((r1 + step) % side, c1),
                self.grid.code_at((r2 + step) % side, c2),
            )
        } else {
            (self.grid.code_at(r1, c2), self.grid.code_at(r2, c1))
        };
        Ok(pair)
    }

    /// Splits plaintext codes into digraphs, inserting separators.
    fn digraphs<'a>(&'a self, codes: &'a [Code]) -> Digraphs<'a> {
        Digraphs {
            cipher: self,
            codes,
            pos: 0,
        }
    }

    fn push_pair(
        &self,
        out: &mut String,
        (a, b): (Code, Code),
        case: Case,
    ) -> Result<(), GridCryptError> {
        out.push(Alphabet::Latin.letter_of(a, case)?);
        out.push(Alphabet::Latin.letter_of(b, case)?);
        Ok(())
    }
}

/// Lazy digraph splitter used by encryption.
struct Digraphs<'a> {
    cipher: &'a Playfair,
    codes: &'a [Code],
    pos: usize,
}

impl Iterator for Digraphs<'_> {
    type Item = Result<(Code, Code), GridCryptError>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = *self.codes.get(self.pos)?;
        let mut second = self
            .codes
            .get(self.pos + 1)
            .copied()
            .unwrap_or(self.cipher.separator);
        let grid = &self.cipher.grid;
        let doubled = match grid.same_cell(first, second) {
            Ok(doubled) => doubled,
            Err(e) => return Some(Err(e)),
        };
        if doubled {
            second = match grid.same_cell(first, self.cipher.separator) {
                Ok(true) => self.cipher.alt_separator,
                Ok(false) => self.cipher.separator,
                Err(e) => return Some(Err(e)),
            };
            self.pos += 1;
        } else {
            self.pos += 2;
        }
        Some(Ok((first, second)))
    }
}

impl Cipher for Playfair {
    /// Encrypts lower- or upper-case letters into upper-case ciphertext.
    fn encrypt(&self, message: &str) -> Result<String, GridCryptError> {
        let codes = message
            .chars()
            .map(|c| Alphabet::Latin.code_of(c))
            .collect::<Result<Vec<_>, _>>()?;
        let mut out = String::with_capacity(codes.len() + codes.len() / 2 + 1);
        for digraph in self.digraphs(&codes) {
            let (a, b) = digraph?;
            let pair = self.encode_pair(a, b, Direction::Forward)?;
            self.push_pair(&mut out, pair, Case::Upper)?;
        }
        Ok(out)
    }

    /// Decrypts ciphertext digraphs into lower-case plaintext.
    ///
    /// # Errors
    /// - [`GridCryptError::IncompleteGroup`] for odd-length ciphertext.
    /// - [`GridCryptError::InvalidDigraph`] if a digraph's letters share a
    ///   cell, which no Playfair encryption can produce.
    fn decrypt(&self, message: &str) -> Result<String, GridCryptError> {
        let mut out = String::with_capacity(message.len());
        for group in batched(message.chars(), 2)? {
            let group = group?;
            let a = Alphabet::Latin.code_of(group[0])?;
            let b = Alphabet::Latin.code_of(group[1])?;
            if self.grid.same_cell(a, b)? {
                return Err(GridCryptError::InvalidDigraph(group[0].to_ascii_uppercase()));
            }
            let pair = self.encode_pair(a, b, Direction::Backward)?;
            self.push_pair(&mut out, pair, Case::Lower)?;
        }
        Ok(out)
    }

    fn text_filter(&self) -> TranslationTable {
        TranslationTable::letters()
    }
}
