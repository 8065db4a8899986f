//! Built-in alphabets for [`Entropy::chars`](crate::Entropy::chars).
//!
//! The letter sets leave out `e` and `E`, and list `x` before `w`. Existing consumers depend on
//! exactly these sets, so they are kept as they are.

/// The decimal digits.
pub const NUMBER: &[char] = &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// Unaccented Latin letters, lower case then upper case, without `e` and `E`.
pub const LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't',
    'u', 'v', 'x', 'w', 'y', 'z', 'A', 'B', 'C', 'D', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
    'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'X', 'W', 'Y', 'Z',
];

/// [`NUMBER`] followed by [`LETTERS`].
pub const NUMBER_LETTERS: &[char] = &[
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'a', 'b', 'c', 'd', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'x', 'w', 'y', 'z', 'A', 'B', 'C',
    'D', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'X',
    'W', 'Y', 'Z',
];

/// [`NUMBER_LETTERS`] followed by punctuation and symbols.
pub const NUMBER_LETTERS_SYMBOLS: &[char] = &[
    '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'a', 'b', 'c', 'd', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'x', 'w', 'y', 'z', 'A', 'B', 'C',
    'D', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'X',
    'W', 'Y', 'Z', '!', '@', '#', '$', '%', '&', '*', '_', '-', '+', '=', '|', '\\', '/', '?', ':',
    ';', '<', '>', ',', '.',
];
