//! ASCII translation table used to pre-filter message text.
//!
//! Each ASCII character maps to itself, to a substitute, or to nothing
//! (dropped). Anything outside ASCII is always dropped. The engines never
//! filter on their own; [`Cipher::run`](crate::cipher::Cipher::run) applies
//! the engine's table before dispatching.

const ASCII_LEN: usize = 128;

/// Per-character allow/replace/drop table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTable {
    chars: [Option<char>; ASCII_LEN],
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationTable {
    /// Creates a table that drops everything.
    pub fn new() -> Self {
        TranslationTable {
            chars: [None; ASCII_LEN],
        }
    }

    /// Allows ASCII letters of both cases plus `extra`.
    pub fn with_letters(extra: &str) -> Self {
        let mut table = Self::new();
        table.allow(('a'..='z').chain('A'..='Z'));
        table.allow(extra.chars());
        table
    }

    /// Table for the Latin engines: letters only.
    pub fn letters() -> Self {
        Self::with_letters("")
    }

    /// Table for the ADFGVX engine: letters and digits.
    pub fn alphanumeric() -> Self {
        Self::with_letters("0123456789")
    }

    /// Lets each character through unchanged. Non-ASCII input is ignored.
    pub fn allow<I>(&mut self, chars: I) -> &mut Self
    where
        I: IntoIterator<Item = char>,
    {
        for c in chars {
            if let Some(slot) = self.chars.get_mut(c as usize) {
                *slot = Some(c);
            }
        }
        self
    }

    /// Maps each character of `from` to the character at the same position
    /// in `to`. Extra characters on either side are ignored.
    pub fn replace(&mut self, from: &str, to: &str) -> &mut Self {
        for (c, d) in from.chars().zip(to.chars()) {
            if let Some(slot) = self.chars.get_mut(c as usize) {
                *slot = Some(d);
            }
        }
        self
    }

    /// Returns the translation of one character, or `None` if it is dropped.
    pub fn get(&self, c: char) -> Option<char> {
        self.chars.get(c as usize).copied().flatten()
    }

    /// Translates `text`, dropping disallowed characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::filter::TranslationTable;
    ///
    /// let table = TranslationTable::letters();
    /// assert_eq!(table.translate("Hello, World!"), "HelloWorld");
    /// ```
    pub fn translate(&self, text: &str) -> String {
        text.chars().filter_map(|c| self.get(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_drops_everything() {
        assert_eq!(TranslationTable::new().translate("abc 123"), "");
    }

    #[test]
    fn test_alphanumeric_keeps_digits() {
        assert_eq!(
            TranslationTable::alphanumeric().translate("attack at 12:00 am"),
            "attackat1200am"
        );
    }

    #[test]
    fn test_replace_substitutes() {
        let mut table = TranslationTable::letters();
        table.replace("\n\t", "  ");
        assert_eq!(table.translate("ab\ncd\te"), "ab cd e");
    }

    #[test]
    fn test_non_ascii_dropped() {
        let mut table = TranslationTable::letters();
        table.allow(['é']);
        assert_eq!(table.translate("café"), "caf");
        assert_eq!(table.get('é'), None);
    }
}
