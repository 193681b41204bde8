//! Alphabet coder: bidirectional mapping between symbols and small codes.
//!
//! Every engine works on [`Code`] values rather than characters. Input is
//! accepted in either case; output case is chosen by the caller through
//! [`Case`], so ciphertext comes out upper-case and plaintext lower-case.

use serde::{Deserialize, Serialize};

use crate::error::GridCryptError;

/// Position of a symbol within an [`Alphabet`].
pub type Code = u8;

/// Size of the largest supported alphabet. Lookup tables indexed by
/// [`Code`] use this length.
pub const MAX_SYMBOLS: usize = 36;

const OFFSET_UPPER: u8 = b'A';
const OFFSET_LOWER: u8 = b'a';
const OFFSET_DIGIT: u8 = b'0';
const LETTERS: u8 = 26;
const DIGITS: u8 = 10;

/// Output case for decoded symbols. Digits are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Ciphertext convention.
    Upper,
    /// Plaintext convention.
    Lower,
}

/// Declared symbol set of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// `A`..`Z` as codes 0..25.
    Latin,
    /// `A`..`Z` as codes 0..25 followed by `0`..`9` as codes 26..35.
    Alphanumeric,
}

impl Alphabet {
    /// Returns the number of symbols in the alphabet.
    pub const fn len(self) -> usize {
        match self {
            Alphabet::Latin => LETTERS as usize,
            Alphabet::Alphanumeric => (LETTERS + DIGITS) as usize,
        }
    }

    /// Always `false`; present for symmetry with [`len`](Self::len).
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Returns the code of `symbol`, ignoring case.
    ///
    /// # Errors
    /// Returns [`GridCryptError::InvalidSymbol`] if `symbol` is not in the
    /// alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::alphabet::Alphabet;
    ///
    /// assert_eq!(Alphabet::Latin.code_of('c'), Ok(2));
    /// assert_eq!(Alphabet::Latin.code_of('C'), Ok(2));
    /// assert_eq!(Alphabet::Alphanumeric.code_of('7'), Ok(33));
    /// assert!(Alphabet::Latin.code_of('7').is_err());
    /// ```
    pub fn code_of(self, symbol: char) -> Result<Code, GridCryptError> {
        if !symbol.is_ascii() {
            return Err(GridCryptError::InvalidSymbol(symbol));
        }
        let byte = symbol as u8;
        match byte {
            b'A'..=b'Z' => Ok(byte - OFFSET_UPPER),
            b'a'..=b'z' => Ok(byte - OFFSET_LOWER),
            b'0'..=b'9' if self == Alphabet::Alphanumeric => Ok(byte - OFFSET_DIGIT + LETTERS),
            _ => Err(GridCryptError::InvalidSymbol(symbol)),
        }
    }

    /// Returns the symbol for `code` in the requested case.
    ///
    /// # Errors
    /// Returns [`GridCryptError::CodeOutOfRange`] if `code >= self.len()`.
    /// Codes are never wrapped.
    pub fn letter_of(self, code: Code, case: Case) -> Result<char, GridCryptError> {
        if code as usize >= self.len() {
            return Err(GridCryptError::CodeOutOfRange {
                code,
                len: self.len(),
            });
        }
        let byte = if code < LETTERS {
            match case {
                Case::Upper => OFFSET_UPPER + code,
                Case::Lower => OFFSET_LOWER + code,
            }
        } else {
            OFFSET_DIGIT + (code - LETTERS)
        };
        Ok(byte as char)
    }

    /// Returns `true` if `symbol` belongs to the alphabet in either case.
    pub fn contains(self, symbol: char) -> bool {
        self.code_of(symbol).is_ok()
    }

    /// Iterates over all codes in natural order.
    pub fn codes(self) -> impl Iterator<Item = Code> {
        0..self.len() as Code
    }
}
