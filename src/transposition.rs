//! Keyword-driven columnar transposition.
//!
//! Column rank comes from a stable sort of the keyword letters, so equal
//! letters keep their left-to-right order. The forward permutation and its
//! inverse are derived from the same ordering and must agree exactly.

use crate::error::GridCryptError;

/// Column permutation derived from a transposition keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOrder {
    /// `order[k]` is the original index of the column emitted k-th.
    order: Vec<usize>,
}

impl ColumnOrder {
    /// Ranks the keyword's columns. Letters are compared case-insensitively.
    ///
    /// # Errors
    /// Returns [`GridCryptError::EmptyKeyword`] for an empty keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrypt::transposition::ColumnOrder;
    ///
    /// let order = ColumnOrder::from_keyword("BANANA").unwrap();
    /// assert_eq!(order.forward(), &[1, 3, 5, 0, 2, 4]);
    /// ```
    pub fn from_keyword(keyword: &str) -> Result<Self, GridCryptError> {
        let letters: Vec<char> = keyword.chars().map(|c| c.to_ascii_uppercase()).collect();
        if letters.is_empty() {
            return Err(GridCryptError::EmptyKeyword);
        }
        let mut order: Vec<usize> = (0..letters.len()).collect();
        // sort_by_key is stable: ties stay in keyword order.
        order.sort_by_key(|&i| letters[i]);
        Ok(ColumnOrder { order })
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.order.len()
    }

    /// Returns the emission order: original column indices, in the order
    /// they appear in the ciphertext.
    pub fn forward(&self) -> &[usize] {
        &self.order
    }

    /// Returns, for each original column, its position in the ciphertext.
    pub fn inverse(&self) -> Vec<usize> {
        let mut inverse = vec![0; self.order.len()];
        for (position, &original) in self.order.iter().enumerate() {
            inverse[original] = position;
        }
        inverse
    }

    /// Reorders `columns` into emission order.
    ///
    /// `columns` must hold exactly [`width`](Self::width) entries.
    pub fn scramble<T>(&self, columns: Vec<T>) -> Vec<T> {
        let mut slots: Vec<Option<T>> = columns.into_iter().map(Some).collect();
        self.order
            .iter()
            .filter_map(|&original| slots.get_mut(original).and_then(Option::take))
            .collect()
    }

    /// Restores columns in emission order to their original positions.
    ///
    /// Exact inverse of [`scramble`](Self::scramble).
    pub fn unscramble<T>(&self, columns: Vec<T>) -> Vec<T> {
        let mut slots: Vec<Option<T>> = columns.into_iter().map(Some).collect();
        self.inverse()
            .into_iter()
            .filter_map(|position| slots.get_mut(position).and_then(Option::take))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_order() {
        let order = ColumnOrder::from_keyword("PRIVACY").unwrap();
        // A C I P R V Y
        assert_eq!(order.forward(), &[4, 5, 2, 0, 1, 3, 6]);
        assert_eq!(order.width(), 7);
    }

    #[test]
    fn test_ties_keep_keyword_order() {
        let order = ColumnOrder::from_keyword("aAbB").unwrap();
        assert_eq!(order.forward(), &[0, 1, 2, 3]);
        let order = ColumnOrder::from_keyword("BANANA").unwrap();
        assert_eq!(order.inverse(), vec![3, 0, 4, 1, 5, 2]);
    }

    #[test]
    fn test_empty_keyword() {
        assert_eq!(
            ColumnOrder::from_keyword(""),
            Err(GridCryptError::EmptyKeyword)
        );
    }

    #[test]
    fn test_scramble_then_unscramble() {
        let order = ColumnOrder::from_keyword("ZEBRAS").unwrap();
        let columns: Vec<Vec<u8>> = (0..6).map(|i| vec![i, i + 10]).collect();
        let scrambled = order.scramble(columns.clone());
        assert_eq!(scrambled[0], vec![4, 14]);
        assert_eq!(order.unscramble(scrambled), columns);
    }

    #[test]
    fn test_single_column() {
        let order = ColumnOrder::from_keyword("Q").unwrap();
        assert_eq!(order.scramble(vec!["only"]), vec!["only"]);
        assert_eq!(order.inverse(), vec![0]);
    }
}
