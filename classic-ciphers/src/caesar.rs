//! Caesar shift over the ASCII Latin alphabet.
//!
//! Letters rotate within their own case; everything else passes through.

use serde::{Deserialize, Serialize};

const ALPHABET_LEN: i64 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftDirection {
    Encrypt,
    Decrypt,
}

impl ShiftDirection {
    /// Rotation in `[0, 25]` applied to each letter for `shift`.
    fn offset(self, shift: i64) -> u8 {
        let forward = shift.rem_euclid(ALPHABET_LEN);
        let offset = match self {
            ShiftDirection::Encrypt => forward,
            ShiftDirection::Decrypt => (ALPHABET_LEN - forward) % ALPHABET_LEN,
        };

        offset as u8
    }
}

/// Shifts every ASCII letter of `text` by `shift` positions.
///
/// Any integer is a valid shift; it is reduced mod 26 first. Decrypting with
/// the shift used for encryption restores the original text.
///
/// # Example
///
/// ```
/// # use classic_ciphers::{ShiftDirection, shift_text};
/// assert_eq!(shift_text("Hello, World!", 3, ShiftDirection::Encrypt), "Khoor, Zruog!");
/// assert_eq!(shift_text("Khoor, Zruog!", 3, ShiftDirection::Decrypt), "Hello, World!");
/// ```
pub fn shift_text(text: &str, shift: i64, direction: ShiftDirection) -> String {
    let offset = direction.offset(shift);

    text.chars()
        .map(|ch| match ch {
            'A'..='Z' => rotate(ch, b'A', offset),
            'a'..='z' => rotate(ch, b'a', offset),
            _ => ch,
        })
        .collect()
}

pub fn encrypt(text: &str, shift: i64) -> String {
    shift_text(text, shift, ShiftDirection::Encrypt)
}

pub fn decrypt(text: &str, shift: i64) -> String {
    shift_text(text, shift, ShiftDirection::Decrypt)
}

fn rotate(ch: char, base: u8, offset: u8) -> char {
    let position = ch as u8 - base;
    (base + (position + offset) % ALPHABET_LEN as u8) as char
}
