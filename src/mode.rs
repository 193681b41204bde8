//! Encrypt/decrypt mode selection.
//!
//! By convention plaintext is lower-case and ciphertext upper-case, so the
//! case of a message's first letter tells which way to run the cipher.

use serde::{Deserialize, Serialize};

/// Direction of a cipher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    /// Picks a mode from the first alphabetic character of `text`:
    /// lower-case encrypts, upper-case decrypts. Text without letters
    /// encrypts.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::mode::Mode;
    ///
    /// assert_eq!(Mode::probe("12 apples"), Mode::Encrypt);
    /// assert_eq!(Mode::probe("QHYV"), Mode::Decrypt);
    /// assert_eq!(Mode::probe("1200"), Mode::Encrypt);
    /// ```
    pub fn probe(text: &str) -> Mode {
        match text.chars().find(|c| c.is_alphabetic()) {
            Some(c) if c.is_uppercase() => Mode::Decrypt,
            _ => Mode::Encrypt,
        }
    }
}
