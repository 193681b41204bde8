//! Grid-based classical cipher engines.
//!
//! This crate reproduces two pen-and-paper digraph ciphers exactly:
//! Playfair (5x5 keyword grid, geometric digraph rule) and ADFGVX/ADFGX
//! (coordinate substitution followed by keyword columnar transposition).
//! These ciphers offer no security against modern cryptanalysis; the goal is
//! deterministic, bit-for-bit reproduction of the classical algorithms.
//!
//! # Architecture
//!
//! ```text
//! Alphabet      (symbol <-> code, case normalization)
//!     ↓
//! Batched       (fixed-size grouping: strict / pad / drop)
//!     ↓
//! Grid          (R x R cells + coordinate lookup table)
//!     ↓                          ↓
//! Playfair      (digraph rule)   Adfgvx (substitution + ColumnOrder transposition)
//! ```
//!
//! By convention plaintext is lower-case and ciphertext upper-case;
//! [`Cipher::run`] uses that to choose a direction.
//!
//! # Examples
//!
//! ```
//! use gridcrypt::{Cipher, Playfair};
//!
//! let cipher = Playfair::from_keyword("playfaire").unwrap();
//! let ciphertext = cipher.encrypt("hidethegold").unwrap();
//! assert_eq!(ciphertext, "DEHIQMRHVRKU");
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "hidethegoldx");
//! ```
//!
//! ADFGVX from a config:
//!
//! ```
//! use gridcrypt::{AdfgvxConfig, Cipher};
//!
//! let cipher = AdfgvxConfig::new("NA1C3H8TB2OME5WRPD4F6G7I9J0KLQSUVXYZ", "PRIVACY")
//!     .build()
//!     .unwrap();
//! assert_eq!(cipher.encrypt("attackat1200am").unwrap(), "DGDDDAGDDGAFADDFDADVDVFAADVX");
//! ```

#![deny(clippy::all)]

pub mod adfgvx;
pub mod alphabet;
pub mod batch;
pub mod cipher;
pub mod config;
pub mod error;
pub mod filter;
pub mod grid;
pub mod mode;
pub mod playfair;
pub mod transposition;

pub use adfgvx::Adfgvx;
pub use cipher::Cipher;
pub use config::{AdfgvxConfig, CipherConfig, PlayfairConfig};
pub use error::GridCryptError;
pub use grid::{CombinePair, Grid};
pub use mode::Mode;
pub use playfair::Playfair;
