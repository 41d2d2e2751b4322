//! Ciphertext wire form: ASCII decimal integers separated by a single space.
//!
//! No escaping, no length prefix and no checksum.

use crate::errors::CipherError;
use crate::keypair::{PrivateKey, PublicKey};
use crate::number_theory::Ring;

use itertools::Itertools;

/// Renders a ciphertext in its wire form.
///
/// # Example
///
/// ```
/// # use classic_ciphers::rsa::encode_ciphertext;
/// assert_eq!(encode_ciphertext(&[2790, 1313, 745]), "2790 1313 745");
/// assert_eq!(encode_ciphertext(&[]), "");
/// ```
pub fn encode_ciphertext(ciphertext: &[u64]) -> String {
    ciphertext.iter().join(" ")
}

/// Parses the wire form, accepting only values in `[0, n - 1]`.
///
/// An empty string is an empty ciphertext.
///
/// # Errors
///
/// * `InvalidModulus` when `n == 0`.
/// * `DecodeError` for a token that is not a plain decimal number below `n`.
///   Doubled, leading or trailing spaces produce an empty token and are
///   rejected as well.
pub fn parse_ciphertext(input: &str, n: u64) -> Result<Vec<u64>, CipherError> {
    let ring = Ring::try_with(n)?;
    if input.is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(' ')
        .enumerate()
        .map(|(position, token)| parse_token(token, position, ring.modulus()))
        .collect()
}

/// Encrypts `text` and renders it in wire form.
pub fn encrypt_to_wire(text: &str, key: &PublicKey) -> Result<String, CipherError> {
    Ok(encode_ciphertext(&key.encrypt(text)?))
}

/// Parses a wire-form ciphertext and decrypts it.
pub fn decrypt_from_wire(input: &str, key: &PrivateKey) -> Result<String, CipherError> {
    key.decrypt(&parse_ciphertext(input, key.n)?)
}

fn parse_token(token: &str, position: usize, n: u64) -> Result<u64, CipherError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CipherError::DecodeError(format!(
            "Token {:?} at position {} is not a non-negative integer",
            token, position
        )));
    }

    match token.parse::<u64>() {
        Ok(value) if value < n => Ok(value),
        _ => Err(CipherError::DecodeError(format!(
            "Token {:?} at position {} is outside [0, {}]",
            token,
            position,
            n - 1
        ))),
    }
}
