//! Property tests over randomly generated keys and messages.

use std::collections::BTreeSet;

use proptest::prelude::*;

use gridcrypt::adfgvx::ADFGVX_COORDINATES;
use gridcrypt::alphabet::Alphabet;
use gridcrypt::batch::{batched, batched_padded};
use gridcrypt::playfair::Direction;
use gridcrypt::transposition::ColumnOrder;
use gridcrypt::{Adfgvx, Cipher, CombinePair, Grid, Mode, Playfair};

const GRID_6: &str = "NA1C3H8TB2OME5WRPD4F6G7I9J0KLQSUVXYZ";

/// The 25 Playfair letters, `j` folded into `i`.
const PLAYFAIR_LETTERS: &[u8] = b"abcdefghiklmnopqrstuvwxyz";

/// Messages made of digraphs whose two letters never share a cell, so
/// encryption inserts no separators and decryption is exact.
fn separator_free_message() -> impl Strategy<Value = String> {
    prop::collection::vec((0usize..25, 0usize..25), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .flat_map(|(a, b)| [PLAYFAIR_LETTERS[a] as char, PLAYFAIR_LETTERS[b] as char])
            .collect()
    })
}

fn shuffled_grid() -> impl Strategy<Value = Grid> {
    Just(GRID_6.chars().collect::<Vec<char>>())
        .prop_shuffle()
        .prop_map(|symbols| Grid::from_symbols(6, Alphabet::Alphanumeric, symbols).unwrap())
}

proptest! {
    #[test]
    fn playfair_roundtrip_without_separators(
        keyword in "[a-z]{0,12}",
        message in separator_free_message(),
    ) {
        let cipher = Playfair::from_keyword(&keyword).unwrap();
        let ciphertext = cipher.encrypt(&message).unwrap();
        prop_assert_eq!(ciphertext.len(), message.len());
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn playfair_ciphertext_is_even_and_decryptable(
        keyword in "[A-Z]{0,12}",
        message in "[a-z]{1,60}",
    ) {
        let cipher = Playfair::from_keyword(&keyword).unwrap();
        let ciphertext = cipher.encrypt(&message).unwrap();
        prop_assert!(ciphertext.len() % 2 == 0);
        prop_assert!(ciphertext.len() >= message.len());
        prop_assert_eq!(Mode::probe(&ciphertext), Mode::Decrypt);

        let plaintext = cipher.decrypt(&ciphertext).unwrap();
        prop_assert_eq!(plaintext.len(), ciphertext.len());
        prop_assert_eq!(cipher.encrypt(&plaintext).unwrap(), ciphertext);
    }

    #[test]
    fn playfair_pair_rule_inverts(
        keyword in "[a-z]{0,12}",
        a in 0u8..26,
        b in 0u8..26,
    ) {
        let cipher = Playfair::from_keyword(&keyword).unwrap();
        let grid = cipher.grid();
        prop_assume!(!grid.same_cell(a, b).unwrap());

        let encoded = cipher.encode_pair(a, b, Direction::Forward).unwrap();
        let decoded = cipher.encode_pair(encoded.0, encoded.1, Direction::Backward).unwrap();
        let cell = |code| {
            let coord = grid.locate(code).unwrap();
            grid.code_at(coord.row, coord.col)
        };
        prop_assert_eq!(decoded, (cell(a), cell(b)));
    }

    #[test]
    fn playfair_grid_holds_each_letter_once(keyword in "[a-zA-Z]{0,30}") {
        let grid = Grid::from_keyword(&keyword, CombinePair::default()).unwrap();
        let cells: Vec<u8> = grid.rows().flatten().copied().collect();
        let unique: BTreeSet<u8> = cells.iter().copied().collect();
        prop_assert_eq!(cells.len(), 25);
        prop_assert_eq!(unique.len(), 25);
        for letter in 'a'..='z' {
            let code = Alphabet::Latin.code_of(letter).unwrap();
            prop_assert!(grid.locate(code).is_ok());
        }
    }

    #[test]
    fn adfgvx_roundtrip_keeps_message_prefix(
        grid in shuffled_grid(),
        keyword in "[A-Z]{1,12}",
        message in "[a-z0-9]{0,60}",
    ) {
        let cipher = Adfgvx::new(grid, &keyword, ADFGVX_COORDINATES).unwrap();
        let ciphertext = cipher.encrypt(&message).unwrap();
        prop_assert!(ciphertext.len() % keyword.len() == 0);
        prop_assert!(ciphertext.chars().all(|c| ADFGVX_COORDINATES.contains(c)));

        let plaintext = cipher.decrypt(&ciphertext).unwrap();
        prop_assert!(plaintext.starts_with(&message));
        let padding = &plaintext[message.len()..];
        prop_assert!(padding.chars().all(|c| c == 'x'));
        prop_assert!(padding.len() * 2 < keyword.len());
    }

    #[test]
    fn transposition_unscramble_inverts_scramble(keyword in "[A-Za-z]{1,20}") {
        let order = ColumnOrder::from_keyword(&keyword).unwrap();
        let columns: Vec<usize> = (0..order.width()).collect();
        let scrambled = order.scramble(columns.clone());

        let letters: Vec<char> = keyword.chars().map(|c| c.to_ascii_uppercase()).collect();
        prop_assert!(scrambled.windows(2).all(|w| letters[w[0]] <= letters[w[1]]));
        prop_assert_eq!(order.unscramble(scrambled), columns);
    }

    #[test]
    fn batches_preserve_input_order(
        items in prop::collection::vec(any::<u8>(), 0..100),
        size in 1usize..10,
    ) {
        let groups = batched_padded(items.clone(), size, std::iter::repeat(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        prop_assert!(groups.iter().all(|g| g.len() == size));
        let flat: Vec<u8> = groups.into_iter().flatten().collect();
        prop_assert_eq!(&flat[..items.len()], &items[..]);
        prop_assert!(flat.len() - items.len() < size);

        let strict = batched(items.clone(), size).unwrap().collect::<Result<Vec<_>, _>>();
        prop_assert_eq!(strict.is_ok(), items.len() % size == 0);
    }
}
