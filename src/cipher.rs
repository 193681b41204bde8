//! Common interface of the cipher engines.

use crate::error::GridCryptError;
use crate::filter::TranslationTable;
use crate::mode::Mode;

/// A keyed, reversible text transformation.
///
/// Implementations are immutable after construction, so a single instance
/// may serve any number of callers. `encrypt` emits upper-case text and
/// `decrypt` emits lower-case text.
pub trait Cipher {
    /// Encrypts pre-filtered plaintext.
    fn encrypt(&self, message: &str) -> Result<String, GridCryptError>;

    /// Decrypts pre-filtered ciphertext.
    fn decrypt(&self, message: &str) -> Result<String, GridCryptError>;

    /// Table restricting raw text to this cipher's input symbols.
    fn text_filter(&self) -> TranslationTable;

    /// Runs the cipher in the given mode.
    fn apply(&self, mode: Mode, message: &str) -> Result<String, GridCryptError> {
        match mode {
            Mode::Encrypt => self.encrypt(message),
            Mode::Decrypt => self.decrypt(message),
        }
    }

    /// Filters raw `message`, picks the mode with [`Mode::probe`] unless
    /// `forced`, then runs the cipher.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::cipher::Cipher;
    /// use gridcrypt::playfair::Playfair;
    ///
    /// let cipher = Playfair::from_keyword("playfaire").unwrap();
    /// assert_eq!(cipher.run("hello, world!", None).unwrap(), "QHYVRVVQGRKU");
    /// assert_eq!(cipher.run("QHYV RVVQ GRKU", None).unwrap(), "helxloworldx");
    /// ```
    fn run(&self, message: &str, forced: Option<Mode>) -> Result<String, GridCryptError> {
        let filtered = self.text_filter().translate(message);
        let mode = forced.unwrap_or_else(|| Mode::probe(&filtered));
        self.apply(mode, &filtered)
    }
}
