//! Error types for the gridcrypt library.

/// Errors produced by the gridcrypt cipher engines.
///
/// Every error terminates the current encode/decode call. The engines are
/// deterministic, so none of these conditions is transient.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridCryptError {
    /// Input character outside the cipher's declared alphabet.
    #[error("Symbol {0:?} is outside the cipher alphabet")]
    InvalidSymbol(char),
    /// Alphabet code outside `0..len`.
    #[error("Code {code} is outside an alphabet of {len} symbols")]
    CodeOutOfRange { code: u8, len: usize },
    /// A grid or coordinate alphabet repeats a symbol.
    #[error("Duplicate symbol {0:?}")]
    DuplicateSymbol(char),
    /// Grid symbol count is not a perfect square, or does not fill the grid.
    #[error("Grid of {symbols} symbols is not a {side}x{side} square")]
    InvalidGridSize { symbols: usize, side: usize },
    /// Coordinate alphabet length does not match the grid side.
    #[error("Coordinate alphabet has {coordinates} letters but the grid side is {side}")]
    CoordinateMismatch { coordinates: usize, side: usize },
    /// No default coordinate alphabet exists for this grid side.
    #[error("Coordinates must be specified for a {side}x{side} grid")]
    MissingCoordinates { side: usize },
    /// Group size of zero requested from the batch sequencer.
    #[error("Batch size must be at least 1")]
    InvalidBatchSize,
    /// Short final group under the strict policy, or a filler that ran dry.
    #[error("Input had {0} items left over")]
    IncompleteGroup(usize),
    /// A Playfair ciphertext digraph whose two letters share a grid cell.
    #[error("Ciphertext has double {0:?}")]
    InvalidDigraph(char),
    /// An ADFGVX coordinate pair with no corresponding grid cell.
    #[error("Unknown coordinate pair {0:?}{1:?}")]
    UnknownCoordinatePair(char, char),
    /// Ciphertext length not divisible by the transposition keyword length.
    #[error("Ciphertext length {len} is not a multiple of keyword length {width}")]
    MalformedCiphertext { len: usize, width: usize },
    /// Transposition keyword with no letters.
    #[error("Transposition keyword must not be empty")]
    EmptyKeyword,
    /// Playfair separator is not usable with this grid.
    #[error("Separator {0:?} cannot separate doubles in this grid")]
    InvalidSeparator(char),
}
